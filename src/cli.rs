//! Command-line interface for hello-metrics
//!
//! Provides argument parsing and subcommand handling for the binary.

use clap::{Parser, Subcommand};

/// Greeting HTTP service with a Prometheus request counter
#[derive(Parser)]
#[command(name = "hello-metrics")]
#[command(version)]
#[command(about = "Greeting HTTP service with a Prometheus request counter")]
#[command(
    long_about = "Serves a JSON greeting on / and the number of greetings served \
    on /metrics in the Prometheus text exposition format."
)]
pub struct Cli {
    /// Path to configuration file (built-in defaults when omitted)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate a template configuration file
    Config {
        /// Output file path (prints to stdout if not specified)
        #[arg(short, long)]
        output: Option<String>,
    },
}

/// Generate template configuration content
pub fn generate_config_template() -> &'static str {
    r#"# hello-metrics Configuration
#
# Every setting is optional. Without a config file the server listens on
# 0.0.0.0:5000 and logs at info level.

[server]
# IP address to bind to (0.0.0.0 for all interfaces, 127.0.0.1 for localhost only)
host = "0.0.0.0"

# Port to listen on
port = 5000

[observability]
# Log level: "trace", "debug", "info", "warn", "error"
# RUST_LOG overrides this when set.
log_level = "info"

# Prometheus metrics are always available at /metrics on the server port
"#
}
