//! lagstub-core: latency-injection HTTP stub server
//!
//! A single parametrized server that stands in for a slow backend when
//! benchmarking a client or proxy. Each deployment variant maps a fixed
//! port to a set of routes; a route either answers immediately or sleeps
//! a random 100-399ms before answering with the delay it injected.
//!
//! Variants are described by [`VariantConfig`] and served by [`Server`].

#![forbid(unsafe_code)]
#![warn(clippy::all)]

pub mod error;
pub mod handlers;
pub mod latency;
pub mod response;
pub mod router;
pub mod server;
pub mod variant;

// Re-exports
pub use error::{Error, Result};
pub use latency::LatencyRange;
pub use response::{Response, ResponseBuilder, StatusCode};
pub use router::Router;
pub use server::Server;
pub use variant::{RouteBehavior, SlowFormat, VariantConfig};
