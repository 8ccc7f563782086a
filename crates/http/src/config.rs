//! Client configuration
//!
//! For native consumers of the client (tools, integration harnesses). The
//! browser app builds its client from the page origin instead, so [`ClientConfig::load`]
//! only exists off wasm.

use serde::{Deserialize, Serialize};

/// Auth API client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Origin serving the auth API
    pub base_url: String,

    /// Request timeout in seconds (native only)
    pub timeout_secs: Option<u64>,

    /// User agent override
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout_secs: Some(30),
            user_agent: None,
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl ClientConfig {
    /// Load from an optional TOML file, then `AGRICHAIN_*` environment variables
    pub fn load(path: Option<&std::path::Path>) -> Result<Self, crate::client::ClientError> {
        // Unset keys fall back to `Default` through `#[serde(default)]`
        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        }

        builder
            .add_source(config::Environment::with_prefix("AGRICHAIN"))
            .build()
            .and_then(|settings| settings.try_deserialize())
            .map_err(config_error)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn config_error(err: config::ConfigError) -> crate::client::ClientError {
    crate::client::ClientError::Configuration(err.to_string())
}
