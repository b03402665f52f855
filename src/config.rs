//! Configuration for kagari
//!
//! Centralized configuration with sensible defaults.

/// Configuration for a kagari instance
///
/// Every field has a canned default; nothing is read from files or the
/// environment. The host may override any of them through the builder.
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Response Identity
    // -------------------------------------------------------------------------
    /// Value of the `Sender` header on every degraded-mode response
    pub sender: String,

    /// Value of the `Charset` header on every degraded-mode response
    pub charset: String,

    // -------------------------------------------------------------------------
    // Menu Targets
    // -------------------------------------------------------------------------
    /// URL opened by the double-click menu's Homepage entry
    pub homepage_url: String,

    /// URL opened by the double-click menu's License entry
    pub license_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sender: "kagari/embryo".to_string(),
            charset: "US-ASCII".to_string(),
            homepage_url: "https://kagari.dev/".to_string(),
            license_url: "https://opensource.org/license/mit/".to_string(),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the `Sender` header value
    pub fn sender(mut self, sender: impl Into<String>) -> Self {
        self.config.sender = sender.into();
        self
    }

    /// Set the `Charset` header value
    pub fn charset(mut self, charset: impl Into<String>) -> Self {
        self.config.charset = charset.into();
        self
    }

    /// Set the homepage URL
    pub fn homepage_url(mut self, url: impl Into<String>) -> Self {
        self.config.homepage_url = url.into();
        self
    }

    /// Set the license URL
    pub fn license_url(mut self, url: impl Into<String>) -> Self {
        self.config.license_url = url.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
