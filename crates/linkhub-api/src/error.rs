//! Maps domain `AppError` to HTTP responses.

// The `IntoResponse for AppError` mapping lives in `linkhub-core` alongside
// `AppError` itself — Rust's orphan rule requires the impl to live in the
// crate that defines the type. Re-exported here so API code can refer to the
// response body type from this module.
pub use linkhub_core::error::ApiErrorResponse;
