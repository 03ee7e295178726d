//! Iris - IIIF Image API 2.1 image server
//!
//! The protocol core (request grammar, transform pipeline, capability
//! document) lives in the `iiif-core` crate; this crate wires it to HTTP,
//! configuration and identifier resolution.
//! This library exposes modules for integration testing.

pub mod api;
pub mod error;
pub mod models;
pub mod server;
pub mod services;
