//! API origin configuration.
//!
//! The client talks to exactly one origin, chosen by `API_BASE_URL`. Native
//! builds read it at startup (a `.env` file is honoured through `dotenvy`);
//! wasm builds have no process environment, so the value is captured when the
//! bundle is compiled.

/// Origin used when `API_BASE_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Image served by the API for users without a profile picture.
const DEFAULT_AVATAR_PATH: &str = "/Userimage.png";

/// Where the remote API lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ApiConfig {
    /// Create a config for the given origin. Trailing slashes are dropped.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Create config from the environment.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        match std::env::var("API_BASE_URL") {
            Ok(url) if !url.trim().is_empty() => Self::new(url),
            _ => Self::from_build_env(),
        }
    }

    /// Create config from the value baked in at build time.
    #[cfg(target_arch = "wasm32")]
    pub fn from_env() -> Self {
        Self::from_build_env()
    }

    fn from_build_env() -> Self {
        match option_env!("API_BASE_URL") {
            Some(url) if !url.trim().is_empty() => Self::new(url),
            _ => Self::default(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path such as `/api/auth/login`.
    pub fn endpoint(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Resolve a stored image reference to something an `img` tag can load.
    ///
    /// Absolute and `data:` URLs pass through; anything else is a path on the
    /// API origin.
    pub fn asset_url(&self, reference: &str) -> String {
        let absolute = ["http://", "https://", "data:"]
            .iter()
            .any(|scheme| reference.starts_with(scheme));
        if absolute {
            reference.to_string()
        } else {
            self.endpoint(reference)
        }
    }

    pub fn default_avatar(&self) -> String {
        self.endpoint(DEFAULT_AVATAR_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_dropped() {
        let config = ApiConfig::new("https://api.example.com/ ");
        assert_eq!(config.base_url(), "https://api.example.com");
        assert_eq!(
            config.endpoint("/api/auth/login"),
            "https://api.example.com/api/auth/login"
        );
        assert_eq!(
            config.endpoint("api/projects/get"),
            "https://api.example.com/api/projects/get"
        );
    }

    #[test]
    fn test_default_origin() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.default_avatar(), "http://localhost:5000/Userimage.png");
    }

    #[test]
    fn test_asset_url_resolution() {
        let config = ApiConfig::new("https://api.example.com");

        assert_eq!(
            config.asset_url("/uploads/ada.png"),
            "https://api.example.com/uploads/ada.png"
        );
        assert_eq!(
            config.asset_url("https://cdn.example.com/ada.png"),
            "https://cdn.example.com/ada.png"
        );
        assert_eq!(
            config.asset_url("data:image/png;base64,AAAA"),
            "data:image/png;base64,AAAA"
        );
        assert_eq!(
            config.asset_url("http://cdn.example.com/ada.png"),
            "http://cdn.example.com/ada.png"
        );
    }

    #[test]
    fn test_asset_url_relative_path_starting_with_http() {
        let config = ApiConfig::new("https://api.example.com");

        assert_eq!(
            config.asset_url("httpdocs/ada.png"),
            "https://api.example.com/httpdocs/ada.png"
        );
        assert_eq!(
            config.asset_url("/httpdocs/ada.png"),
            "https://api.example.com/httpdocs/ada.png"
        );
    }
}
