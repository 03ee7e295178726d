//! Identifier resolution: mapping an opaque identifier to decoded pixels.
//!
//! The core never assumes a resolution strategy; it sees only the
//! [`IdentifierResolver`] contract. Two strategies ship — filesystem and
//! HTTP — selected by the `resolver` configuration string through
//! [`create_resolver`].

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use async_trait::async_trait;
use image::DynamicImage;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use thiserror::Error;

use crate::models::AppConfig;

/// Characters escaped when an identifier is embedded as a URL path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Percent-encode an identifier for use as a single URL path segment.
pub fn encode_identifier(identifier: &str) -> String {
    utf8_percent_encode(identifier, PATH_SEGMENT).to_string()
}

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("no image matching identifier {0:?} was found")]
    NotFound(String),

    #[error("failed to read image source: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to fetch image source: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("failed to decode image source: {0}")]
    Decode(#[from] image::ImageError),

    #[error("image decoding task failed: {0}")]
    Task(String),
}

/// Maps an identifier to a decoded image.
///
/// Implementations must be safe to share across requests; resolution is the
/// only I/O the request-processing flow performs.
#[async_trait]
pub trait IdentifierResolver: Send + Sync + std::fmt::Debug {
    async fn resolve(&self, identifier: &str) -> Result<DynamicImage, ResolveError>;
}

/// Select a resolver implementation from configuration.
///
/// Unknown selector strings fail at startup, not per request.
pub fn create_resolver(config: &AppConfig) -> anyhow::Result<Arc<dyn IdentifierResolver>> {
    match config.resolver.as_str() {
        "filesystem" => Ok(Arc::new(FilesystemResolver::new(config.image_root.clone()))),
        "http" => {
            let base_url = config
                .http_base_url
                .clone()
                .context("the http resolver requires http_base_url to be configured")?;
            Ok(Arc::new(HttpResolver::new(base_url)))
        }
        other => anyhow::bail!("unknown resolver {other:?} (expected \"filesystem\" or \"http\")"),
    }
}

/// Decode raw bytes off the async runtime.
async fn decode(bytes: Vec<u8>) -> Result<DynamicImage, ResolveError> {
    tokio::task::spawn_blocking(move || image::load_from_memory(&bytes))
        .await
        .map_err(|e| ResolveError::Task(e.to_string()))?
        .map_err(ResolveError::Decode)
}

/// Resolves identifiers as file names under a configured root directory.
#[derive(Debug)]
pub struct FilesystemResolver {
    root: PathBuf,
}

impl FilesystemResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl IdentifierResolver for FilesystemResolver {
    async fn resolve(&self, identifier: &str) -> Result<DynamicImage, ResolveError> {
        // Identifiers are single path segments; anything that could step
        // outside the root never touches the filesystem.
        if identifier.is_empty()
            || identifier.contains('/')
            || identifier.contains('\\')
            || identifier == ".."
        {
            return Err(ResolveError::NotFound(identifier.to_string()));
        }

        let path = self.root.join(identifier);
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ResolveError::NotFound(identifier.to_string()));
            }
            Err(e) => return Err(ResolveError::Io(e)),
        };

        decode(bytes).await
    }
}

/// Resolves identifiers by fetching them from a remote base URL.
#[derive(Debug)]
pub struct HttpResolver {
    base_url: String,
    client: reqwest::Client,
}

impl HttpResolver {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl IdentifierResolver for HttpResolver {
    async fn resolve(&self, identifier: &str) -> Result<DynamicImage, ResolveError> {
        let url = format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            encode_identifier(identifier)
        );

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            tracing::debug!(
                identifier = identifier,
                status = %response.status(),
                "Upstream returned non-success for identifier"
            );
            return Err(ResolveError::NotFound(identifier.to_string()));
        }

        let bytes = response.bytes().await?;
        decode(bytes.to_vec()).await
    }
}
