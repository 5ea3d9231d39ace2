use std::process;

use clap::{Parser, Subcommand};
use sonic_cli_aaa::{
    actions::{
        accounting::AccountingCommands, authentication::AuthenticationCommands,
        authorization::AuthorizationCommands, show::ShowAaaAction,
    },
    error::CliError,
};
use sonic_logger::log_init;
use sonic_rest_client::ClientConf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: CliCommands,
}

#[derive(Subcommand)]
enum CliCommands {
    #[command(subcommand)]
    Authentication(AuthenticationCommands),
    #[command(subcommand)]
    Authorization(AuthorizationCommands),
    #[command(subcommand)]
    Accounting(AccountingCommands),
    Show(ShowAaaAction),
}

#[tokio::main]
async fn main() {
    if let Some(err) = main_().await.err() {
        eprintln!("ERROR: {err}");
        process::exit(1);
    }
}

async fn main_() -> Result<(), CliError> {
    log_init("warn");
    let opts = Cli::parse();
    let rest_client = ClientConf::load()?;

    match opts.command {
        CliCommands::Authentication(action) => action.process(&rest_client).await?,
        CliCommands::Authorization(action) => action.process(&rest_client).await?,
        CliCommands::Accounting(action) => action.process(&rest_client).await?,
        CliCommands::Show(action) => action.run(&rest_client).await?,
    };

    Ok(())
}
