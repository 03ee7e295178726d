//! The JSON-LD capability document served at `info.json`.

use serde::Serialize;

use crate::params::FormatSpec;

pub const CONTEXT_URI: &str = "http://iiif.io/api/image/2/context.json";
pub const PROTOCOL_URI: &str = "http://iiif.io/api/image";
pub const LEVEL2_PROFILE_URI: &str = "http://iiif.io/api/image/2/level2.json";

/// Quality tokens advertised in the capability document.
const QUALITIES: [&str; 3] = ["color", "gray", "bitonal"];

/// Feature tokens this implementation honors.
const SUPPORTS: [&str; 14] = [
    "baseUriRedirect",
    "cors",
    "jsonldMediaType",
    "mirroring",
    "regionByPct",
    "regionByPx",
    "regionSquare",
    "rotationArbitrary",
    "sizeByConfinedWh",
    "sizeByDistortedWh",
    "sizeByH",
    "sizeByPct",
    "sizeByW",
    "sizeByWh",
];

/// The capability/metadata document for one image.
///
/// Built fresh per request from resolver output and static configuration;
/// never cached or mutated after construction.
#[derive(Debug, Clone, Serialize)]
pub struct ImageInfo {
    #[serde(rename = "@context")]
    pub context: &'static str,
    /// Canonical URL of the image, identifier included.
    #[serde(rename = "@id")]
    pub id: String,
    pub protocol: &'static str,
    pub width: u32,
    pub height: u32,
    /// Serializes as `[<compliance URI>, {formats, qualities, supports}]`.
    pub profile: (&'static str, ProfileDescriptor),
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribution: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

/// The capability lists inside the profile.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileDescriptor {
    pub formats: Vec<&'static str>,
    pub qualities: Vec<&'static str>,
    pub supports: Vec<&'static str>,
}

impl Default for ProfileDescriptor {
    fn default() -> Self {
        // Only formats with a shipping codec are advertised.
        let formats = FormatSpec::ALL
            .iter()
            .filter(|format| format.image_format().is_some())
            .map(FormatSpec::extension)
            .collect();
        ProfileDescriptor {
            formats,
            qualities: QUALITIES.to_vec(),
            supports: SUPPORTS.to_vec(),
        }
    }
}

impl ImageInfo {
    /// Assemble the document for an image with the given canonical URL and
    /// pixel dimensions. Attribution fields start empty and are filled in
    /// by the caller from configuration.
    pub fn new(id: impl Into<String>, width: u32, height: u32) -> Self {
        ImageInfo {
            context: CONTEXT_URI,
            id: id.into(),
            protocol: PROTOCOL_URI,
            width,
            height,
            profile: (LEVEL2_PROFILE_URI, ProfileDescriptor::default()),
            attribution: None,
            license: None,
            logo: None,
        }
    }
}
