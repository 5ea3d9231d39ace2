use clap::Parser;
use sonic_rest_client::RestClient;

use super::shared::{clear_login_methods, set_login_methods, MethodFamily};
use crate::error::result::CliResult;

/// Manage the accounting branch of the AAA configuration
#[derive(Parser, Debug)]
pub enum AccountingCommands {
    Login(SetLoginAction),
    ClearLogin(ClearLoginAction),
}

impl AccountingCommands {
    /// Processes the accounting action.
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

/// Set the ordered list of accounting methods.
///
/// `disable` as the first method removes the accounting configuration
/// altogether; accounting has no boolean toggle of its own.
#[derive(Parser, Debug)]
pub struct SetLoginAction {
    /// Primary accounting method (e.g. `tacacs+`), or `disable`
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
        if self.method1 == "disable" {
            return clear_login_methods(rest_client, MethodFamily::Accounting).await;
        }

        set_login_methods(
            rest_client,
            MethodFamily::Accounting,
            &self.method1,
            self.method2.as_deref(),
        )
        .await
    }
}

/// Remove the accounting method configuration
#[derive(Parser, Debug)]
pub struct ClearLoginAction {
    #[clap(hide = true, num_args = 0.., allow_hyphen_values = true)]
    pub extra: Vec<String>,
}

impl ClearLoginAction {
    pub async fn run(&self, rest_client: &RestClient) -> CliResult<()> {
        clear_login_methods(rest_client, MethodFamily::Accounting).await
    }
}
