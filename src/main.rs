use clap::Parser;
use user_account_api::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Serve => cli::serve::run().await,
        Command::Openapi(args) => cli::openapi::run(args).await,
    }
}
