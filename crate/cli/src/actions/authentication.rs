use clap::Parser;
use sonic_rest_client::RestClient;

use super::shared::{
    clear_bool_attribute, clear_login_methods, set_bool_attribute, set_login_methods,
    BoolAttribute, MethodFamily,
};
use crate::error::result::CliResult;

/// Manage the authentication branch of the AAA configuration
#[derive(Parser, Debug)]
pub enum AuthenticationCommands {
    Failthrough(SetFailthroughAction),
    ClearFailthrough(ClearFailthroughAction),
    Fallback(SetFallbackAction),
    ClearFallback(ClearFallbackAction),
    Debug(SetDebugAction),
    ClearDebug(ClearDebugAction),
    Trace(SetTraceAction),
    ClearTrace(ClearTraceAction),
    Login(SetLoginAction),
    ClearLogin(ClearLoginAction),
}

impl AuthenticationCommands {
    /// Processes the authentication action.
    ///
    /// # Errors
    ///
    /// Returns an error if there was a problem running the action.
    pub async fn process(&self, rest_client: &RestClient) -> CliResult<()> {
        match self {
            Self::Failthrough(action) => action.run(rest_client).await?,
            Self::ClearFailthrough(action) => action.run(rest_client).await?,
            Self::Fallback(action) => action.run(rest_client).await?,
            Self::ClearFallback(action) => action.run(rest_client).await?,
            Self::Debug(action) => action.run(rest_client).await?,
            Self::ClearDebug(action) => action.run(rest_client).await?,
            Self::Trace(action) => action.run(rest_client).await?,
            Self::ClearTrace(action) => action.run(rest_client).await?,
            Self::Login(action) => action.run(rest_client).await?,
            Self::ClearLogin(action) => action.run(rest_client).await?,
        };

        Ok(())
    }
}

/// Set the authentication failthrough behavior.
///
/// `enable` tries the next authentication method when one fails,
/// `disable` stops at the first failure, `default` reverts to the system
/// default.
#[derive(Parser, Debug)]
pub struct SetFailthroughAction {
    /// `enable`, `disable` or `default`
    #[clap(required = true)]
    option: String,

    /// Surplus arguments forwarded by the vendor CLI parse tree, discarded
    #[clap(hide = true, num_args = 0.., allow_hyphen_values = true)]
    pub extra: Vec<String>,
}

impl SetFailthroughAction {
    pub async fn run(&self, rest_client: &RestClient) -> CliResult<()> {
        set_bool_attribute(rest_client, BoolAttribute::Failthrough, &self.option).await
    }
}

/// Reset the authentication failthrough behavior to its system default
#[derive(Parser, Debug)]
pub struct ClearFailthroughAction {
    /// Surplus arguments forwarded by the vendor CLI parse tree, discarded
    #[clap(hide = true, num_args = 0.., allow_hyphen_values = true)]
    pub extra: Vec<String>,
}

impl ClearFailthroughAction {
    pub async fn run(&self, rest_client: &RestClient) -> CliResult<()> {
        clear_bool_attribute(rest_client, BoolAttribute::Failthrough).await
    }
}

/// Set the authentication fallback behavior.
#[derive(Parser, Debug)]
pub struct SetFallbackAction {
    /// `enable`, `disable` or `default`
    #[clap(required = true)]
    option: String,

    #[clap(hide = true, num_args = 0.., allow_hyphen_values = true)]
    pub extra: Vec<String>,
}

impl SetFallbackAction {
    pub async fn run(&self, rest_client: &RestClient) -> CliResult<()> {
        set_bool_attribute(rest_client, BoolAttribute::Fallback, &self.option).await
    }
}

/// Reset the authentication fallback behavior to its system default
#[derive(Parser, Debug)]
pub struct ClearFallbackAction {
    #[clap(hide = true, num_args = 0.., allow_hyphen_values = true)]
    pub extra: Vec<String>,
}

impl ClearFallbackAction {
    pub async fn run(&self, rest_client: &RestClient) -> CliResult<()> {
        clear_bool_attribute(rest_client, BoolAttribute::Fallback).await
    }
}

/// Set the AAA debug logging option.
#[derive(Parser, Debug)]
pub struct SetDebugAction {
    /// `enable`, `disable` or `default`
    #[clap(required = true)]
    option: String,

    #[clap(hide = true, num_args = 0.., allow_hyphen_values = true)]
    pub extra: Vec<String>,
}

impl SetDebugAction {
    pub async fn run(&self, rest_client: &RestClient) -> CliResult<()> {
        set_bool_attribute(rest_client, BoolAttribute::Debug, &self.option).await
    }
}

/// Reset the AAA debug logging option to its system default
#[derive(Parser, Debug)]
pub struct ClearDebugAction {
    #[clap(hide = true, num_args = 0.., allow_hyphen_values = true)]
    pub extra: Vec<String>,
}

impl ClearDebugAction {
    pub async fn run(&self, rest_client: &RestClient) -> CliResult<()> {
        clear_bool_attribute(rest_client, BoolAttribute::Debug).await
    }
}

/// Set the AAA trace logging option.
#[derive(Parser, Debug)]
pub struct SetTraceAction {
    /// `enable`, `disable` or `default`
    #[clap(required = true)]
    option: String,

    #[clap(hide = true, num_args = 0.., allow_hyphen_values = true)]
    pub extra: Vec<String>,
}

impl SetTraceAction {
    pub async fn run(&self, rest_client: &RestClient) -> CliResult<()> {
        set_bool_attribute(rest_client, BoolAttribute::Trace, &self.option).await
    }
}

/// Reset the AAA trace logging option to its system default
#[derive(Parser, Debug)]
pub struct ClearTraceAction {
    #[clap(hide = true, num_args = 0.., allow_hyphen_values = true)]
    pub extra: Vec<String>,
}

impl ClearTraceAction {
    pub async fn run(&self, rest_client: &RestClient) -> CliResult<()> {
        clear_bool_attribute(rest_client, BoolAttribute::Trace).await
    }
}

/// Set the ordered list of authentication login methods.
///
/// Methods are tried in the supplied order, e.g. `login tacacs+ local`
/// falls back to local authentication when the TACACS+ servers are
/// unreachable.
#[derive(Parser, Debug)]
pub struct SetLoginAction {
    /// Primary authentication method (e.g. `local`, `tacacs+`)
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
            MethodFamily::Authentication,
            &self.method1,
            self.method2.as_deref(),
        )
        .await
    }
}

/// Reset the authentication login methods to the system default
#[derive(Parser, Debug)]
pub struct ClearLoginAction {
    #[clap(hide = true, num_args = 0.., allow_hyphen_values = true)]
    pub extra: Vec<String>,
}

impl ClearLoginAction {
    pub async fn run(&self, rest_client: &RestClient) -> CliResult<()> {
        clear_login_methods(rest_client, MethodFamily::Authentication).await
    }
}
