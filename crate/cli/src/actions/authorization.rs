use clap::Parser;
use sonic_rest_client::RestClient;

use super::shared::{clear_login_methods, set_login_methods, MethodFamily};
use crate::error::result::CliResult;

/// Manage the authorization branch of the AAA configuration
#[derive(Parser, Debug)]
pub enum AuthorizationCommands {
    Login(SetLoginAction),
    ClearLogin(ClearLoginAction),
}

impl AuthorizationCommands {
    /// Processes the authorization action.
    ///
    /// # Errors
    ///
    /// Returns an error if there was a problem running the action.
    pub async fn process(&self, rest_client: &RestClient) -> CliResult<()> {
        match self {
            Self::Login(action) => action.run(rest_client).await?,
            Self::ClearLogin(action) => action.run(rest_client).await?,
        };

        Ok(())
    }
}

/// Set the ordered list of authorization login methods.
#[derive(Parser, Debug)]
pub struct SetLoginAction {
    /// Primary authorization method (e.g. `local`, `tacacs+`)
    #[clap(required = true)]
    method1: String,

    /// Optional fallback method
    method2: Option<String>,

    /// Surplus arguments forwarded by the vendor CLI parse tree, discarded
    #[clap(hide = true, num_args = 0.., allow_hyphen_values = true)]
    pub extra: Vec<String>,
}

impl SetLoginAction {
    pub async fn run(&self, rest_client: &RestClient) -> CliResult<()> {
        set_login_methods(
            rest_client,
            MethodFamily::Authorization,
            &self.method1,
            self.method2.as_deref(),
        )
        .await
    }
}

/// Reset the authorization login methods to the system default
#[derive(Parser, Debug)]
pub struct ClearLoginAction {
    #[clap(hide = true, num_args = 0.., allow_hyphen_values = true)]
    pub extra: Vec<String>,
}

impl ClearLoginAction {
    pub async fn run(&self, rest_client: &RestClient) -> CliResult<()> {
        clear_login_methods(rest_client, MethodFamily::Authorization).await
    }
}
