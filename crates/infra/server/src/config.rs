//! Server configuration.

use serde::{Deserialize, Serialize};

/// Server-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port to listen on.
    pub port: u16,
    /// Host to bind to.
    pub host: String,
    /// Default log level when RUST_LOG is unset.
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8000,
            host: "0.0.0.0".to_string(),
            log_level: "info".to_string(),
        }
    }
}

/// Loads configuration from a TOML file.
///
/// The file carries an optional `[server]` table; when the table is
/// absent the defaults apply. A missing or unreadable file is an error.
pub fn load_config(path: &str) -> Result<ServerConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

    let config: toml::Value =
        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;

    let server: ServerConfig = config
        .get("server")
        .map(|v| toml::Value::try_into(v.clone()))
        .transpose()
        .map_err(|e| ConfigError::ParseError(e.to_string()))?
        .unwrap_or_default();

    Ok(server)
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let server = ServerConfig::default();
        assert_eq!(server.port, 8000);
        assert_eq!(server.host, "0.0.0.0");
        assert_eq!(server.log_level, "info");
    }

    #[test]
    fn test_server_table_parses() {
        let value: toml::Value = toml::from_str(
            r#"
            [server]
            port = 9000
            host = "127.0.0.1"
            log_level = "debug"
            "#,
        )
        .unwrap();
        let server: ServerConfig = toml::Value::try_into(value.get("server").unwrap().clone()).unwrap();
        assert_eq!(server.port, 9000);
        assert_eq!(server.host, "127.0.0.1");
        assert_eq!(server.log_level, "debug");
    }
}
