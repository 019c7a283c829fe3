//! Command-line configuration for the client.

use clap::Parser;

/// Terminal chat client
#[derive(Debug, Clone, Parser)]
#[command(name = "agora-client", version, about)]
pub struct ClientConfig {
    /// Display name (1 to 10 characters)
    #[arg(short, long)]
    pub name: String,

    /// WebSocket endpoint of the server
    #[arg(long, default_value = "ws://127.0.0.1:8080/ws")]
    pub url: String,

    /// Default log level when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_defaults() {
        // テスト項目: 名前以外はデフォルト値が使われる
        // when (操作):
        let config = ClientConfig::try_parse_from(["agora-client", "-n", "alice"]).unwrap();

        // then (期待する結果):
        assert_eq!(config.name, "alice");
        assert_eq!(config.url, "ws://127.0.0.1:8080/ws");
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_client_config_requires_name() {
        // テスト項目: 名前の指定は必須
        // when (操作):
        let result = ClientConfig::try_parse_from(["agora-client"]);

        // then (期待する結果):
        assert!(result.is_err());
    }
}
