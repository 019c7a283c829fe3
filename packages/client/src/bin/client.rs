//! Terminal chat client.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin agora-client -- --name alice
//! ```

use agora_client::ClientConfig;
use agora_shared::setup_logger;
use clap::Parser;

#[tokio::main]
async fn main() {
    let config = ClientConfig::parse();

    // Initialize tracing (stderr, quiet by default so the chat log stays readable)
    setup_logger(env!("CARGO_BIN_NAME"), &config.log_level);

    if let Err(e) = agora_client::run_client(config).await {
        tracing::error!("Client error: {}", e);
        std::process::exit(1);
    }
}
