use std::time::Duration;

use reqwest::{
    header::{HeaderMap, HeaderValue},
    Client, ClientBuilder, Response, StatusCode,
};
use serde::Serialize;
use serde_json::Value;
use tracing::trace;

use crate::{error::RestClientError, result::RestClientResult};

/// A client issuing RESTCONF operations against the management data store
/// of a switch.
#[derive(Clone)]
pub struct RestClient {
    pub server_url: String,
    client: Client,
}

impl RestClient {
    /// Instantiate a new RESTCONF client.
    ///
    /// `accept_invalid_certs` is required for switches running a
    /// self-signed TLS certificate.
    pub fn instantiate(
        server_url: &str,
        access_token: Option<&str>,
        accept_invalid_certs: bool,
    ) -> Result<Self, RestClientError> {
        // validate early rather than on the first request
        url::Url::parse(server_url)?;
        let server_url = server_url
            .strip_suffix('/')
            .map_or_else(|| server_url.to_string(), std::string::ToString::to_string);

        let mut headers = HeaderMap::new();
        if let Some(access_token) = access_token {
            headers.insert(
                "Authorization",
                HeaderValue::from_str(format!("Bearer {access_token}").as_str())?,
            );
        }

        Ok(Self {
            client: ClientBuilder::new()
                .danger_accept_invalid_certs(accept_invalid_certs)
                .default_headers(headers)
                .tcp_keepalive(Duration::from_secs(60))
                .build()
                .map_err(|e| RestClientError::Default(format!("Reqwest client builder: {e}")))?,
            server_url,
        })
    }

    /// GET the resource at `endpoint`.
    ///
    /// Returns `None` when the response carries no content, or when the
    /// resource does not exist and `ignore_not_found` is set ("not
    /// configured" is not an error for optional RESTCONF containers).
    pub async fn get(
        &self,
        endpoint: &str,
        ignore_not_found: bool,
    ) -> RestClientResult<Option<Value>> {
        let server_url = format!("{}{endpoint}", self.server_url);
        let response = self.client.get(server_url).send().await?;

        let status_code = response.status();
        if status_code.is_success() {
            let text = response.text().await?;
            if text.is_empty() {
                return Ok(None)
            }
            let content: Value = serde_json::from_str(&text)?;
            trace!(
                "<==\n{}",
                serde_json::to_string_pretty(&content).unwrap_or_else(|_| "[N/A]".to_owned())
            );
            return Ok(Some(content))
        }
        if ignore_not_found && status_code == StatusCode::NOT_FOUND {
            return Ok(None)
        }

        // process error
        let p = handle_error(endpoint, response).await?;
        Err(RestClientError::RequestFailed(p))
    }

    /// PATCH `endpoint` with a JSON `body`.
    pub async fn patch<O>(&self, endpoint: &str, body: &O) -> RestClientResult<()>
    where
        O: Serialize,
    {
        let server_url = format!("{}{endpoint}", self.server_url);
        trace!(
            "==>\n{}",
            serde_json::to_string_pretty(body).unwrap_or_else(|_| "[N/A]".to_owned())
        );
        let response = self.client.patch(server_url).json(body).send().await?;

        let status_code = response.status();
        if status_code.is_success() {
            return Ok(())
        }

        // process error
        let p = handle_error(endpoint, response).await?;
        Err(RestClientError::RequestFailed(p))
    }

    /// DELETE the resource at `endpoint`. Idempotent per RESTCONF
    /// convention.
    pub async fn delete(&self, endpoint: &str) -> RestClientResult<()> {
        let server_url = format!("{}{endpoint}", self.server_url);
        let response = self.client.delete(server_url).send().await?;

        let status_code = response.status();
        if status_code.is_success() {
            return Ok(())
        }

        // process error
        let p = handle_error(endpoint, response).await?;
        Err(RestClientError::RequestFailed(p))
    }
}

/// Some errors are returned by the server middleware with an empty body.
/// In that case, we make the error clearer here for the operator.
async fn handle_error(endpoint: &str, response: Response) -> RestClientResult<String> {
    trace!("Error response received on {endpoint}: Response: {response:?}");
    let status = response.status();
    let text = response.text().await?;

    Ok(format!(
        "{}: {}",
        endpoint,
        if text.is_empty() {
            match status {
                StatusCode::NOT_FOUND => "RESTCONF endpoint does not exist".to_owned(),
                StatusCode::UNAUTHORIZED => "Bad authorization token".to_owned(),
                _ => format!("{status} {text}"),
            }
        } else {
            text
        }
    ))
}
