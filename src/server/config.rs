//! Server configuration
//!
//! Loaded from an optional `config.toml` with `RAX_CHAT_*` environment
//! overrides. Missing keys fall back to the defaults below.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// Server configuration structure
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// IP address to listen on
    /// Environment: RAX_CHAT_BIND_ADDRESS
    pub bind_address: String,

    /// TCP port to listen on; 0 picks an ephemeral port
    /// Environment: RAX_CHAT_PORT
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Load configuration from ./config.toml with environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from `path` (extension optional) with environment overrides
    pub fn load_from(path: &str) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .set_default("bind_address", DEFAULT_BIND_ADDRESS)?
            .set_default("port", i64::from(DEFAULT_PORT))?
            .add_source(File::with_name(path).required(false))
            .add_source(Environment::with_prefix("RAX_CHAT").try_parsing(true))
            .build()?;

        let config: ServerConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Replace the port, e.g. from the command line
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Get bind address and port as a socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.bind_address.trim().is_empty() {
            return Err(ConfigError::Message(
                "bind_address cannot be empty".into(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    /// A `<stem>.toml` in the temp directory, removed on drop.
    struct TempConfig {
        base: PathBuf,
    }

    impl TempConfig {
        fn new(stem: &str, contents: &str) -> Self {
            let base = std::env::temp_dir().join(format!("{}_{}", stem, std::process::id()));
            fs::write(base.with_extension("toml"), contents).unwrap();
            Self { base }
        }

        fn file(&self) -> PathBuf {
            self.base.with_extension("toml")
        }

        fn path(&self) -> String {
            self.base.to_string_lossy().to_string()
        }
    }

    impl Drop for TempConfig {
        fn drop(&mut self) {
            let _ = fs::remove_file(self.file());
        }
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = ServerConfig::load_from("definitely/not/a/real/config").unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.bind_address, DEFAULT_BIND_ADDRESS);
    }

    #[test]
    fn test_load_from_file() {
        let temp = TempConfig::new(
            "rax_chat_config_full",
            "bind_address = \"127.0.0.1\"\nport = 9099\n",
        );
        let config = ServerConfig::load_from(&temp.path()).unwrap();
        assert_eq!(config.socket_addr(), "127.0.0.1:9099");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let temp = TempConfig::new("rax_chat_config_partial", "port = 7000\n");
        let config = ServerConfig::load_from(&temp.path()).unwrap();
        assert_eq!(config.socket_addr(), "0.0.0.0:7000");
    }

    #[test]
    fn test_empty_bind_address_rejected() {
        let temp = TempConfig::new("rax_chat_config_empty_addr", "bind_address = \"\"\n");
        assert!(ServerConfig::load_from(&temp.path()).is_err());
    }

    #[test]
    fn test_temp_config_is_removed() {
        let temp = TempConfig::new("rax_chat_config_cleanup", "port = 7001\n");
        let file = temp.file();
        assert!(file.exists());
        drop(temp);
        assert!(!file.exists());
    }

    #[test]
    fn test_with_port_overrides() {
        let config = ServerConfig::default().with_port(0);
        assert_eq!(config.socket_addr(), "0.0.0.0:0");
    }
}
