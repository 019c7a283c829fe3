//! Command-line configuration for the server.

use clap::Parser;

use crate::domain::SessionConfig;

/// Chat session broadcaster server
#[derive(Debug, Clone, Parser)]
#[command(name = "agora-server", version, about)]
pub struct ServerConfig {
    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 8080)]
    pub port: u16,

    /// Do not send a participant's own messages back to it
    #[arg(long)]
    pub no_echo: bool,

    /// Default log level when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl ServerConfig {
    /// `host:port` to bind
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Session settings derived from the flags
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            echo_to_sender: !self.no_echo,
        }
    }
}
