//! Root-path greeting endpoint.
//!
//! A static text response with no persistence interaction; doubles as a
//! liveness probe.

/// Text returned by the root path.
pub const GREETING: &str = "Hello, Docker!";

/// Handles `GET /`.
#[expect(clippy::unused_async, reason = "axum handlers must be async")]
pub async fn greet() -> &'static str {
    GREETING
}
