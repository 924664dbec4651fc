//! # stylist-backend - AIstylist Server Client
//!
//! The boundary between the client and the AIstylist server. Authentication,
//! billing, weather, AI analysis and file storage all live behind these
//! endpoints; the client only sees request/response shapes.
//!
//! Depends on [`stylist_core`] for domain types and error handling.
//!
//! ## Public API
//!
//! - [`StyleBackend`] / [`LocalStyleBackend`] - The server operations as a trait
//! - [`HttpBackend`] - reqwest implementation
//! - [`ChatRequest`] - One chat turn
//! - [`encode_image_file()`] - Read an image and encode it as a `data:` URL
//!
//! With the `test-helpers` feature, `test_utils::MockBackend` provides a
//! scriptable in-memory server.

pub mod backend;
pub mod http;
pub mod image;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;
pub mod wire;

pub use backend::{ChatRequest, LocalStyleBackend, StyleBackend};
pub use http::{HttpBackend, HttpBackendConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use image::{data_url, encode_image_file, mime_for_path, MAX_IMAGE_BYTES};
