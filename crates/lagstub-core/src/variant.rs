//! Deployment variant configuration
//!
//! The repository historically shipped three near-identical servers that
//! differed only in port, route set, and response text. Those differences
//! are captured here as data: one [`VariantConfig`] per deployment, all
//! served by the same [`Server`](crate::Server).

use crate::latency::LatencyRange;

/// Textual format of the delayed response body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlowFormat {
    /// `latency: <n>ms`
    LatencyMs,
    /// `Hello <n>`
    Hello,
}

impl SlowFormat {
    /// Render the body for an injected delay of `n` milliseconds
    pub fn render(&self, n: u64) -> String {
        match self {
            SlowFormat::LatencyMs => format!("latency: {n}ms"),
            SlowFormat::Hello => format!("Hello {n}"),
        }
    }
}

/// What a route does with a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteBehavior {
    /// Respond `okay` immediately
    Okay,
    /// Sleep a sampled delay, then report it in the given format
    Slow(SlowFormat),
}

/// One deployment variant: a port and its route-to-behavior mapping
#[derive(Debug, Clone)]
pub struct VariantConfig {
    /// Variant name, used in startup logs
    pub name: &'static str,
    /// TCP port, fixed per variant
    pub port: u16,
    /// Path -> behavior pairs to register
    pub routes: Vec<(&'static str, RouteBehavior)>,
    /// Injected delay range for slow routes
    pub latency: LatencyRange,
}

impl VariantConfig {
    /// `slow_app`: port 9797, `/okay` + `/slow`
    pub fn slow_app() -> Self {
        Self {
            name: "slow_app",
            port: 9797,
            routes: vec![
                ("/okay", RouteBehavior::Okay),
                ("/slow", RouteBehavior::Slow(SlowFormat::LatencyMs)),
            ],
            latency: LatencyRange::default(),
        }
    }

    /// Alternate `slow_app` wiring: same routes on port 8080
    pub fn slow_app_alt() -> Self {
        Self {
            port: 8080,
            ..Self::slow_app()
        }
    }

    /// `proxy`: port 8080, every delay served from `/`
    pub fn proxy() -> Self {
        Self {
            name: "proxy",
            port: 8080,
            routes: vec![("/", RouteBehavior::Slow(SlowFormat::Hello))],
            latency: LatencyRange::default(),
        }
    }
}
