//! Test application factory for integration tests.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use iris::models::AppConfig;
use iris::server::{build_router, create_app_state};

use super::fixtures;

/// Test application with its router and temporary image root.
pub struct TestApp {
    router: axum::Router,
    /// Keeps the image root alive for the app's lifetime.
    _image_root: tempfile::TempDir,
}

impl TestApp {
    /// Create a test application over a fresh image root with all fixtures.
    pub fn new() -> Self {
        Self::with_config(|_| {})
    }

    /// Create a test application, adjusting the configuration first.
    ///
    /// The image root is always the fixture tempdir; everything else is up
    /// to the caller.
    pub fn with_config(adjust: impl FnOnce(&mut AppConfig)) -> Self {
        let image_root = tempfile::tempdir().expect("Failed to create image root");
        fixtures::write_all(image_root.path());

        let mut config = AppConfig {
            image_root: image_root.path().to_path_buf(),
            ..Default::default()
        };
        adjust(&mut config);

        // Build router using the shared server module (same as production)
        let state = create_app_state(config).expect("Failed to create app state");
        let router = build_router(state);

        Self {
            router,
            _image_root: image_root,
        }
    }

    /// Make a GET request to the given path
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request(Request::get(path).body(Body::empty()).unwrap())
            .await
    }

    /// Send a request to the router
    pub async fn request(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed");

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes()
            .to_vec();

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Test response with convenience methods
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    /// Parse body as JSON
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body).expect("Failed to parse JSON response")
    }

    /// Get body as string
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }

    /// Get a header value as a string
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Decode the body as an image
    pub fn decode_image(&self) -> image::DynamicImage {
        image::load_from_memory(&self.body).expect("Failed to decode image response")
    }

    /// Check if response is a PNG image
    pub fn is_png(&self) -> bool {
        self.body.len() >= 8 && &self.body[0..8] == b"\x89PNG\r\n\x1a\n"
    }
}
