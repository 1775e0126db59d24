//! CLI module for the user account API
//!
//! Provides subcommands:
//! - `serve`: run the HTTP server
//! - `openapi`: print the OpenAPI document

pub mod openapi;
pub mod serve;

use clap::{Parser, Subcommand};

/// User account API - registration, login and profile management
#[derive(Parser)]
#[command(name = "user-account-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the API server
    Serve,

    /// Print the OpenAPI document as JSON
    Openapi(openapi::OpenapiArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve() {
        let cli = Cli::try_parse_from(["user-account-api", "serve"]).unwrap();
        assert!(matches!(cli.command, Command::Serve));
    }

    #[test]
    fn test_parse_openapi_with_url() {
        let cli = Cli::try_parse_from([
            "user-account-api",
            "openapi",
            "--server-url",
            "https://api.example.com",
        ])
        .unwrap();

        match cli.command {
            Command::Openapi(args) => {
                assert_eq!(args.server_url.as_deref(), Some("https://api.example.com"));
            }
            Command::Serve => panic!("expected openapi command"),
        }
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["user-account-api"]).is_err());
    }
}
