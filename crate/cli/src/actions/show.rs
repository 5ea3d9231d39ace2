use clap::Parser;
use serde::Serialize;
use serde_json::Value;
use sonic_rest_client::RestClient;

use super::{console, shared::aaa_path};
use crate::error::result::CliResult;

/// Root key of the AAA subtree in a RESTCONF GET response.
pub const AAA_RESPONSE_ROOT: &str = "openconfig-system:aaa";

/// Display the AAA configuration
#[derive(Parser, Debug)]
pub struct ShowAaaAction {
    /// Render template identifier supplied by the vendor CLI parse tree
    #[clap(default_value = "show_aaa.j2")]
    template: String,

    /// Surplus arguments forwarded by the vendor CLI parse tree, discarded
    #[clap(hide = true, num_args = 0.., allow_hyphen_values = true)]
    pub extra: Vec<String>,
}

impl ShowAaaAction {
    /// Fetch the whole AAA subtree and render it.
    ///
    /// A switch with no explicit AAA configuration answers 404; that is
    /// rendered as the defaults, not reported as an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the GET itself fails.
    pub async fn run(&self, rest_client: &RestClient) -> CliResult<()> {
        let content = rest_client.get(&aaa_path(None), true).await?;

        let display = match content {
            Some(content) => AaaDisplay::from_response(&content),
            None => AaaDisplay::default(),
        };

        console::render(&self.template, &display);
        Ok(())
    }
}

/// Per-call display record handed to the console facility. Every field
/// starts at its literal default string and is selectively overwritten
/// from the GET response.
#[derive(Serialize, Debug, Default, PartialEq, Eq)]
pub struct AaaDisplay {
    pub authentication: AuthenticationDisplay,
    pub authorization: AuthorizationDisplay,
    pub accounting: AccountingDisplay,
}

#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct AuthenticationDisplay {
    pub login: String,
    pub failthrough: String,
    pub fallback: String,
    pub debug: String,
    pub trace: String,
}

impl Default for AuthenticationDisplay {
    fn default() -> Self {
        Self {
            login: "local (default)".to_owned(),
            failthrough: "False (default)".to_owned(),
            fallback: "False (default)".to_owned(),
            debug: "False (default)".to_owned(),
            trace: "False (default)".to_owned(),
        }
    }
}

#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct AuthorizationDisplay {
    pub login: String,
}

impl Default for AuthorizationDisplay {
    fn default() -> Self {
        Self {
            login: "local (default)".to_owned(),
        }
    }
}

#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct AccountingDisplay {
    pub login: String,
}

impl Default for AccountingDisplay {
    fn default() -> Self {
        Self {
            login: "disable (default)".to_owned(),
        }
    }
}

impl AaaDisplay {
    /// Merge a GET response over the default record.
    ///
    /// Method lists replace the default only when present AND non-empty
    /// (an empty list means "no configured value" under RESTCONF
    /// semantics). The boolean leaves replace it whenever the key is
    /// present, whatever its value. This asymmetry is intentional.
    pub fn from_response(content: &Value) -> Self {
        let mut display = Self::default();
        let data = &content[AAA_RESPONSE_ROOT];

        let auth_config = &data["authentication"]["config"];
        if let Some(login) = join_methods(&auth_config["authentication-method"]) {
            display.authentication.login = login;
        }
        if let Some(value) = auth_config["openconfig-system-ext:failthrough"].as_bool() {
            display.authentication.failthrough = bool_str(value);
        }
        if let Some(value) = auth_config["openconfig-system-ext:fallback"].as_bool() {
            display.authentication.fallback = bool_str(value);
        }
        if let Some(value) = auth_config["openconfig-system-ext:debug"].as_bool() {
            display.authentication.debug = bool_str(value);
        }
        if let Some(value) = auth_config["openconfig-system-ext:trace"].as_bool() {
            display.authentication.trace = bool_str(value);
        }

        let authz_config = &data["authorization"]["config"];
        if let Some(login) = join_methods(&authz_config["authorization-method"]) {
            display.authorization.login = login;
        }

        let acct_config = &data["accounting"]["config"];
        if let Some(login) = join_methods(&acct_config["accounting-method"]) {
            display.accounting.login = login;
        }

        display
    }
}

/// Join a method list into its display form, `None` when the list is
/// absent or empty.
fn join_methods(methods: &Value) -> Option<String> {
    let methods = methods.as_array()?;
    if methods.is_empty() {
        return None
    }
    Some(
        methods
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(","),
    )
}

fn bool_str(value: bool) -> String {
    if value { "True" } else { "False" }.to_owned()
}
