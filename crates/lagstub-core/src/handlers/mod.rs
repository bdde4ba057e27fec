//! Request handlers
//!
//! Each handler is a pure request/response function with no shared
//! mutable state across requests.

pub mod okay;
pub mod slow;

pub use okay::okay;
pub use slow::slow;
