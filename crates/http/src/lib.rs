//! AgriChain auth API over HTTP
//!
//! Implements [`agrichain_core::AuthApi`] with reqwest, so the same client
//! serves the browser app (fetch with included credentials) and native tools
//! (cookie jar).

pub mod client;
pub mod config;
pub mod types;

pub use client::{AuthClient, AuthClientBuilder, ClientError};
pub use config::ClientConfig;
