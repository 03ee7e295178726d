pub mod image;
pub mod info;
pub mod status;

pub use image::handle_image_request;
pub use info::{handle_identifier_redirect, handle_image_info};
pub use status::{handle_not_found, handle_root, handle_version, StatusResponse, VersionResponse};
