//! Custom extractors for Axum handlers.

pub mod json_payload;

pub use json_payload::{JsonPayload, parse_json_body};
