//! Frontend Configuration
//!
//! Endpoint settings, fixed at build time.

/// Lists endpoint used when no override is compiled in
pub const DEFAULT_LISTS_URL: &str = "https://apis.ccbp.in/list-creation/lists";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Read-only endpoint returning `{ "lists": [...] }`
    pub lists_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            lists_url: DEFAULT_LISTS_URL.to_string(),
        }
    }
}

impl AppConfig {
    /// Build from `LIST_CREATION_API_URL` captured at compile time
    pub fn from_env() -> Self {
        Self::with_override(option_env!("LIST_CREATION_API_URL"))
    }

    fn with_override(lists_url: Option<&str>) -> Self {
        match lists_url.map(str::trim).filter(|url| !url.is_empty()) {
            Some(url) => Self { lists_url: url.to_string() },
            None => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_url() {
        assert_eq!(AppConfig::with_override(None).lists_url, DEFAULT_LISTS_URL);
    }

    #[test]
    fn test_blank_override_ignored() {
        assert_eq!(AppConfig::with_override(Some("  ")), AppConfig::default());
    }

    #[test]
    fn test_override() {
        let config = AppConfig::with_override(Some(" http://localhost:8080/lists "));
        assert_eq!(config.lists_url, "http://localhost:8080/lists");
    }
}
