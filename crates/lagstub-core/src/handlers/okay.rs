//! Immediate-response handler
//!
//! Answers `okay` with no delay, no randomness, and no side effects.
//! Benchmark harnesses hit this path to measure baseline overhead.

use crate::response::Response;

/// Body of the immediate response
pub const OKAY_BODY: &str = "okay";

/// Respond 200 `okay` immediately
pub fn okay() -> Response {
    Response::text(OKAY_BODY)
}
