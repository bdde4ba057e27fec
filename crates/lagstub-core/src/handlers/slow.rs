//! Delayed-response handler
//!
//! Samples a delay, suspends the task serving this one request for that
//! long, then reports the delay in the response body. The same sampled
//! value drives both the sleep and the body, so the reported latency is
//! always the injected one. Only this request's task sleeps; the accept
//! loop and other in-flight requests are unaffected.

use crate::latency::LatencyRange;
use crate::response::Response;
use crate::variant::SlowFormat;
use std::time::Duration;

/// Sleep a sampled delay, then respond 200 with the delay embedded
pub async fn slow(range: LatencyRange, format: SlowFormat) -> Response {
    let n = range.sample();
    tokio::time::sleep(Duration::from_millis(n)).await;
    Response::text(format.render(n))
}
