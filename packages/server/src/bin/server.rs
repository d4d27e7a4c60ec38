//! Single-room polling chat server.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin parlor-server -- --port 5000
//! ```

use clap::Parser;
use parlor_server::ServerConfig;
use parlor_shared::logger::setup_logger;

#[tokio::main]
async fn main() {
    let config = ServerConfig::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_CRATE_NAME"), &config.log_level);

    // Run the server
    if let Err(e) = parlor_server::run_server(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
