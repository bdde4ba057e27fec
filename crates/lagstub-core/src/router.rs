//! Exact-path route table
//!
//! Every route this system serves is a fixed literal path (`/okay`,
//! `/slow`, `/`), so lookup is a plain hash table rather than a trie.
//! Handlers answer any HTTP method, matching the behavior of a default
//! mux that dispatches on path alone; unregistered paths get the stock
//! 404 response.

use crate::variant::RouteBehavior;
use std::collections::HashMap;

/// Path -> behavior route table
#[derive(Debug, Default)]
pub struct Router {
    routes: HashMap<String, RouteBehavior>,
}

impl Router {
    /// Create a new router
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a route
    pub fn insert(&mut self, path: impl Into<String>, behavior: RouteBehavior) {
        self.routes.insert(path.into(), behavior);
    }

    /// Find the behavior registered for a path
    pub fn find(&self, path: &str) -> Option<&RouteBehavior> {
        self.routes.get(path)
    }

    /// Number of registered routes
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
