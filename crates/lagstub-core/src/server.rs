//! HTTP server over a variant configuration
//!
//! One listener per process: bind a fixed port, register the variant's
//! routes, serve until killed. Each accepted connection runs on its own
//! tokio task with hyper's HTTP/1.1 connection driver, so slow requests
//! sleep independently and never stall the accept loop.

use crate::error::{Error, Result};
use crate::handlers;
use crate::latency::LatencyRange;
use crate::response::Response;
use crate::router::Router;
use crate::variant::{RouteBehavior, VariantConfig};
use bytes::Bytes;
use http_body_util::Full;
use hyper::body::Incoming;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use socket2::{Domain, Protocol, Socket, Type};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{debug, info};

/// Listen backlog
const BACKLOG: i32 = 1024;

/// A bound stub server, ready to serve one variant
#[derive(Debug)]
pub struct Server {
    name: &'static str,
    router: Arc<Router>,
    latency: LatencyRange,
    listener: TcpListener,
    local_addr: SocketAddr,
}

impl Server {
    /// Bind the variant's port on all interfaces and register its routes.
    ///
    /// Bind failure (port in use, insufficient privilege) is fatal by
    /// contract: the error carries the address and the caller is expected
    /// to exit non-zero. No retry, no fallback port.
    pub fn bind(config: &VariantConfig) -> Result<Self> {
        let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
        let listener = create_listener(&addr).map_err(|source| Error::Bind { addr, source })?;
        let local_addr = listener.local_addr().map_err(|source| Error::Bind { addr, source })?;

        let mut router = Router::new();
        for (path, behavior) in &config.routes {
            router.insert(*path, *behavior);
        }

        Ok(Self {
            name: config.name,
            router: Arc::new(router),
            latency: config.latency,
            listener,
            local_addr,
        })
    }

    /// The address actually bound (tests bind port 0)
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Accept and serve connections forever.
    ///
    /// Returns only if the accept loop itself fails; per-connection
    /// errors are logged and dropped. A slow request that is already
    /// sleeping runs to completion even if its client disconnects.
    pub async fn serve(self) -> Result<()> {
        info!(variant = self.name, addr = %self.local_addr, "listening");

        loop {
            let (stream, peer) = self.listener.accept().await?;
            stream.set_nodelay(true).ok();
            debug!(%peer, "accepted connection");

            let router = Arc::clone(&self.router);
            let latency = self.latency;

            tokio::spawn(async move {
                let io = TokioIo::new(stream);
                let service = service_fn(move |req: hyper::Request<Incoming>| {
                    let router = Arc::clone(&router);
                    async move {
                        let res = dispatch(&router, latency, req.uri().path()).await;
                        Ok::<_, Infallible>(to_hyper_response(res))
                    }
                });

                if let Err(err) = hyper::server::conn::http1::Builder::new()
                    .serve_connection(io, service)
                    .await
                {
                    debug!(%peer, error = %err, "connection closed with error");
                }
            });
        }
    }
}

/// Route a request path to its handler
async fn dispatch(router: &Router, latency: LatencyRange, path: &str) -> Response {
    match router.find(path) {
        Some(RouteBehavior::Okay) => handlers::okay(),
        Some(RouteBehavior::Slow(format)) => handlers::slow(latency, *format).await,
        None => Response::not_found(),
    }
}

/// Create a nonblocking TCP listener via socket2.
///
/// SO_REUSEADDR allows rebinding an address in TIME_WAIT; SO_REUSEPORT is
/// deliberately not set so a second instance on the same port fails at
/// bind instead of silently sharing it.
fn create_listener(addr: &SocketAddr) -> std::io::Result<TcpListener> {
    let domain = if addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;
    socket.set_reuse_address(true)?;
    socket.set_nodelay(true)?;
    socket.bind(&(*addr).into())?;
    socket.listen(BACKLOG)?;
    socket.set_nonblocking(true)?;

    TcpListener::from_std(socket.into())
}

/// Convert our Response to a hyper response
fn to_hyper_response(res: Response) -> hyper::Response<Full<Bytes>> {
    let mut builder = hyper::Response::builder().status(res.status.as_u16());

    for (name, value) in &res.headers {
        builder = builder.header(name.as_str(), value.as_str());
    }

    builder.body(Full::new(res.body)).unwrap()
}
