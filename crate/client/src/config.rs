use std::{env, fs::File, io::BufReader};

use serde::{Deserialize, Serialize};

use crate::{
    error::RestClientError, rest_client::RestClient, result::RestClientResult,
    RestClientResultHelper,
};

/// Env variable naming the JSON configuration file of the CLI:
///
/// {
///     "insecure": false,
///     "server_url": "https://127.0.0.1:443",
///     "access_token": "AA...AAA"
/// }
pub const SONIC_CLI_CONF_ENV: &str = "SONIC_CLI_CONF";

#[derive(Serialize, Deserialize, PartialEq, Eq, Debug)]
pub struct ClientConf {
    // Insecure is useful if the CLI needs to connect to a switch running
    // an unsecured SSL certificate
    #[serde(default)]
    pub insecure: bool,
    pub server_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
}

impl ClientConf {
    /// Read the configuration named by `SONIC_CLI_CONF` and build the
    /// RESTCONF client from it.
    pub fn load() -> RestClientResult<RestClient> {
        let conf_filename = env::var(SONIC_CLI_CONF_ENV).map_err(|_e| {
            RestClientError::Configuration(format!(
                "Can't find {SONIC_CLI_CONF_ENV} env variable"
            ))
        })?;

        let file = File::open(&conf_filename).with_context(|| {
            format!("Can't read {conf_filename} set in the {SONIC_CLI_CONF_ENV} env variable")
        })?;

        let conf: Self = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Config JSON malformed in {conf_filename}"))?;

        RestClient::instantiate(&conf.server_url, conf.access_token.as_deref(), conf.insecure)
            .with_context(|| {
                format!("Can't build the client to connect to the switch {}", &conf.server_url)
            })
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::ClientConf;

    #[test]
    fn parse_full_conf() {
        let conf: ClientConf = serde_json::from_str(
            r#"{"insecure": true, "server_url": "https://10.0.0.1", "access_token": "tok"}"#,
        )
        .unwrap();
        assert!(conf.insecure);
        assert_eq!(conf.server_url, "https://10.0.0.1");
        assert_eq!(conf.access_token.as_deref(), Some("tok"));
    }

    #[test]
    fn insecure_defaults_to_false() {
        let conf: ClientConf =
            serde_json::from_str(r#"{"server_url": "http://10.0.0.1"}"#).unwrap();
        assert!(!conf.insecure);
        assert_eq!(conf.access_token, None);
    }

    #[test]
    fn load_from_conf_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"server_url": "http://127.0.0.1:8080"}}"#).unwrap();
        // load() reads the env var; keep this the only test touching it
        std::env::set_var(super::SONIC_CLI_CONF_ENV, file.path());
        let client = ClientConf::load().unwrap();
        assert_eq!(client.server_url, "http://127.0.0.1:8080");
        std::env::remove_var(super::SONIC_CLI_CONF_ENV);
    }
}
