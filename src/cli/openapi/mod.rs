//! OpenAPI command - prints the API document to stdout

use clap::Args;

use crate::api::openapi_document;
use crate::config::AppConfig;

/// Arguments for the openapi command
#[derive(Args, Debug, Clone)]
pub struct OpenapiArgs {
    /// Server URL written into the document (defaults to the configured host and port)
    #[arg(long)]
    pub server_url: Option<String>,
}

/// Print the OpenAPI document as pretty JSON
pub async fn run(args: OpenapiArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let server_url = match args.server_url {
        Some(url) => url,
        None => AppConfig::load().unwrap_or_default().public_url(),
    };

    let json = openapi_document(&server_url).to_pretty_json()?;
    println!("{}", json);

    Ok(())
}
