//! iiif-core: IIIF Image API 2.1 request grammar and transform pipeline
//!
//! This library holds the protocol core of an IIIF image server: typed
//! parsers for the six URL components, the fixed region → size → rotation →
//! quality transform pipeline over [`image::DynamicImage`], the format
//! encoder, and the `info.json` capability document. It performs no I/O and
//! knows nothing about HTTP; resolving identifiers to images and mapping
//! errors to responses are the embedding server's concern.
//!
//! # Quick Start
//!
//! ```
//! use iiif_core::{encode, transform, ParsedRequest, ResampleFilter};
//! use image::DynamicImage;
//!
//! // .../scan.png/full/150,/0/default.png
//! let request = ParsedRequest::parse("scan.png", "full", "150,", "0", "default", "png").unwrap();
//!
//! let source = DynamicImage::new_rgb8(300, 200);
//! let result = transform::apply(source, &request, ResampleFilter::default()).unwrap();
//! assert_eq!((result.width(), result.height()), (150, 100));
//!
//! let bytes = encode(&result, request.format).unwrap();
//! assert!(!bytes.is_empty());
//! ```
//!
//! # Pipeline Order
//!
//! The four stages always run in the same order because each stage's
//! geometry is defined relative to the previous stage's output. A size of
//! `pct:50` halves the *cropped region*, not the source; rotation expands
//! the canvas of the *sized* image; quality is photometric only and runs
//! last so no work is spent on pixels a crop would discard.
//!
//! # Failure Model
//!
//! Parsing is total: every token either maps to a typed spec or fails with
//! a [`ParameterError`] naming the component. Geometry is validated, never
//! clamped: regions and sizes that resolve out of bounds or to zero pixels
//! fail with a [`TransformError`]. Nothing in this crate panics on request
//! data.

pub mod encode;
pub mod error;
pub mod info;
pub mod params;
pub mod transform;

pub use encode::encode;
pub use error::{
    EncodeError, InvalidIdentifier, ParameterError, RequestError, TransformError,
};
pub use info::{ImageInfo, ProfileDescriptor};
pub use params::{
    parse_identifier, FormatSpec, ParsedRequest, QualitySpec, RegionSpec, RotationSpec, SizeSpec,
};
pub use transform::ResampleFilter;
