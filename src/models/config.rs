use std::path::{Path, PathBuf};

use anyhow::Context;
use iiif_core::ResampleFilter;
use serde::Deserialize;

/// Application configuration loaded from config.yaml.
///
/// Built once at startup and shared read-only through the application
/// state; nothing mutates it afterwards. Every key has a default, so an
/// absent config file yields a working server rooted at `./images`.
#[derive(Debug, Deserialize, Clone)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Root directory for the filesystem resolver
    pub image_root: PathBuf,

    /// Resolver selector: "filesystem" or "http"
    pub resolver: String,

    /// Base URL the http resolver fetches identifiers under
    pub http_base_url: Option<String>,

    /// Externally visible base URL, used for the canonical `@id` of
    /// capability documents
    pub api_url: String,

    /// Optional attribution line published in capability documents
    pub attribution: Option<String>,

    /// Optional license URL published in capability documents
    pub license: Option<String>,

    /// Optional logo URL published in capability documents
    pub logo: Option<String>,

    /// Default tracing filter, used when RUST_LOG is unset
    pub verbosity: Option<String>,

    /// Resampling filter for the size stage
    pub resample_filter: ResampleFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            image_root: PathBuf::from("./images"),
            resolver: "filesystem".to_string(),
            http_base_url: None,
            api_url: "http://localhost:3000".to_string(),
            attribution: None,
            license: None,
            logo: None,
            verbosity: None,
            resample_filter: ResampleFilter::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from an optional config.yaml path.
    ///
    /// No path means defaults; a path that cannot be read or parsed is a
    /// startup error rather than a silent fallback.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_yaml(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// The api_url with any trailing slash removed, ready for joining.
    pub fn base_url(&self) -> &str {
        self.api_url.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.image_root, PathBuf::from("./images"));
        assert_eq!(config.resolver, "filesystem");
        assert_eq!(config.api_url, "http://localhost:3000");
        assert_eq!(config.resample_filter, ResampleFilter::HighQuality);
        assert!(config.attribution.is_none());
        assert!(config.http_base_url.is_none());
    }

    #[test]
    fn test_deserialize_config() {
        let yaml = r#"
image_root: /srv/iiif/images
api_url: https://images.example.org/iiif/
attribution: "Example Library"
license: https://creativecommons.org/licenses/by/4.0/
resample_filter: bilinear
verbosity: "iris=info"
"#;

        let config = AppConfig::from_yaml(yaml).unwrap();

        assert_eq!(config.image_root, PathBuf::from("/srv/iiif/images"));
        assert_eq!(config.api_url, "https://images.example.org/iiif/");
        assert_eq!(config.attribution.as_deref(), Some("Example Library"));
        assert_eq!(config.resample_filter, ResampleFilter::Bilinear);
        assert_eq!(config.verbosity.as_deref(), Some("iris=info"));
        // Unset keys keep their defaults.
        assert_eq!(config.resolver, "filesystem");
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let yaml = "image_rootdir: /tmp\n";
        assert!(AppConfig::from_yaml(yaml).is_err());
    }

    #[test]
    fn test_invalid_filter_token_rejected() {
        let yaml = "resample_filter: cubic\n";
        assert!(AppConfig::from_yaml(yaml).is_err());
    }

    #[test]
    fn test_base_url_strips_trailing_slash() {
        let config = AppConfig {
            api_url: "https://images.example.org/iiif/".to_string(),
            ..Default::default()
        };
        assert_eq!(config.base_url(), "https://images.example.org/iiif");

        let config = AppConfig::default();
        assert_eq!(config.base_url(), "http://localhost:3000");
    }

    #[test]
    fn test_load_without_path_uses_defaults() {
        let config = AppConfig::load(None).unwrap();
        assert_eq!(config.resolver, "filesystem");
    }

    #[test]
    fn test_load_missing_file_fails() {
        let result = AppConfig::load(Some(Path::new("/nonexistent/config.yaml")));
        assert!(result.is_err());
    }
}
