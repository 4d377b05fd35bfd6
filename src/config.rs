// =============================================================================
// Connect-U Web - Build-Time Configuration
// =============================================================================
// Table of Contents:
// 1. Route Paths
// 2. App Config
// =============================================================================

// -----------------------------------------------------------------------------
// 1. Route Paths
// -----------------------------------------------------------------------------

/// Landing page after a successful login.
pub const HOME_PATH: &str = "/";

/// Where a logged-out session is sent.
pub const LOGIN_PATH: &str = "/login";

/// API origin used when `ENVIRONMENT=development`.
const DEVELOPMENT_API_URL: &str = "http://localhost:8000";

// -----------------------------------------------------------------------------
// 2. App Config
// -----------------------------------------------------------------------------

/// Frontend configuration, baked in at compile time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// API origin prepended to every endpoint path. Empty means same-origin.
    pub api_url: String,
}

impl AppConfig {
    /// Resolve configuration from the build environment.
    pub fn from_env() -> Self {
        Self::resolve(option_env!("CONNECT_U_API_URL"), option_env!("ENVIRONMENT"))
    }

    /// An explicit API URL wins; otherwise the environment name picks one.
    pub fn resolve(api_url: Option<&str>, environment: Option<&str>) -> Self {
        let api_url = match (api_url, environment.unwrap_or("production")) {
            (Some(url), _) if !url.trim().is_empty() => url.trim().to_string(),
            (_, "development") => DEVELOPMENT_API_URL.to_string(),
            _ => String::new(),
        };

        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
