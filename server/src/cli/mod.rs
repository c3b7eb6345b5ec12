//! CLI module for customer-registry
//!
//! Provides command-line interface for the registry server.

/// serve サブコマンド
pub mod serve;

use clap::{Parser, Subcommand};

/// Customer registry - in-memory customer records over a REST API
#[derive(Parser, Debug)]
#[command(name = "customer-registry")]
#[command(version, about, long_about = None)]
#[command(after_help = r#"ENVIRONMENT VARIABLES:
    CUSTOMER_REGISTRY_HOST        Bind address (default: 0.0.0.0)
    CUSTOMER_REGISTRY_PORT        Listen port (default: 8000)
    CUSTOMER_REGISTRY_STATIC_DIR  Directory holding index.html (default: ./static)
    CUSTOMER_REGISTRY_SEED        Load the three seed customers (default: true)
    CUSTOMER_REGISTRY_LOG_LEVEL   Log level when RUST_LOG is unset (default: info)
"#)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the registry server
    Serve(serve::ServeArgs),
}
