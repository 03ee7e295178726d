use std::sync::Arc;

use iiif_core::{encode, transform, ParsedRequest, ResampleFilter};
use sha2::{Digest, Sha256};

use crate::error::RenderError;
use crate::services::{IdentifierResolver, ResolveError};

/// A finished image response: bytes plus the headers' worth of metadata.
#[derive(Debug)]
pub struct RenderedImage {
    pub bytes: Vec<u8>,
    pub media_type: &'static str,
    /// Attachment filename, a content hash of the parsed request plus the
    /// format extension. Identical requests always produce the same name.
    pub filename: String,
}

/// Runs the resolve → transform → encode flow for one request.
pub struct ImageService {
    resolver: Arc<dyn IdentifierResolver>,
    filter: ResampleFilter,
}

impl ImageService {
    pub fn new(resolver: Arc<dyn IdentifierResolver>, filter: ResampleFilter) -> Self {
        Self { resolver, filter }
    }

    /// Render the image described by `request`.
    ///
    /// The transform and encode stages are CPU-bound and run under
    /// `spawn_blocking` so the async runtime is never blocked mid-pipeline.
    pub async fn render(&self, request: ParsedRequest) -> Result<RenderedImage, RenderError> {
        let img = self.resolver.resolve(&request.identifier).await?;

        let media_type = request.format.media_type();
        let filename = attachment_filename(&request);
        let filter = self.filter;

        let bytes = tokio::task::spawn_blocking(move || -> Result<Vec<u8>, RenderError> {
            let img = transform::apply(img, &request, filter)?;
            Ok(encode(&img, request.format)?)
        })
        .await
        .map_err(|e| RenderError::Task(e.to_string()))??;

        tracing::debug!(
            filename = %filename,
            size_bytes = bytes.len(),
            "Image rendered"
        );

        Ok(RenderedImage {
            bytes,
            media_type,
            filename,
        })
    }

    /// Resolve an identifier and report the source dimensions.
    pub async fn describe(&self, identifier: &str) -> Result<(u32, u32), ResolveError> {
        let img = self.resolver.resolve(identifier).await?;
        Ok((img.width(), img.height()))
    }
}

fn attachment_filename(request: &ParsedRequest) -> String {
    // ParsedRequest serialization is the canonical form; it cannot fail for
    // a value already validated by the parser.
    let canonical = serde_json::to_vec(request).expect("request serialization is infallible");
    let digest = Sha256::digest(&canonical);
    format!("{}.{}", hex::encode(digest), request.format.extension())
}
