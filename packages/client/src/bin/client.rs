//! Interactive ride and chat client backed by the mock API.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin tagalong-client -- --latency-scale 0.5
//! ```

use clap::Parser;
use tagalong_client::config::{Args, ClientConfig};
use tagalong_shared::logger::setup_logger;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), &args.log_level);

    let config = match ClientConfig::try_from(&args) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            std::process::exit(2);
        }
    };

    if let Err(e) = tagalong_client::run_client(config).await {
        tracing::error!("Client error: {}", e);
        std::process::exit(1);
    }
}
