//! Frontend configuration

/// Authentication configuration
pub struct AuthConfig;

impl AuthConfig {
    /// Session storage key for the signed-in user display cache
    pub const USER_MIRROR_KEY: &'static str = "agrichain.user";

    /// Shown while the session is being restored
    pub const LOADING_TEXT: &'static str = "Checking your session...";

    /// Console log filter
    pub const LOG_FILTER: &'static str = "info,agrichain_core=debug,agrichain_http=debug";
}

/// Origin of the auth API; the app is served from the same origin
pub fn api_base_url() -> String {
    gloo::utils::window()
        .location()
        .origin()
        .unwrap_or_default()
}
