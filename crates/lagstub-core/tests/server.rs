//! End-to-end tests against a live server on an ephemeral port.
//!
//! Requests go over a raw TCP stream speaking HTTP/1.1 so the measured
//! latency is the server's alone.

use lagstub_core::{Server, VariantConfig};
use std::net::SocketAddr;
use std::time::{Duration, Instant};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

/// Bind the variant on port 0, start serving, return the bound address
fn start(mut config: VariantConfig) -> SocketAddr {
    config.port = 0;
    let server = Server::bind(&config).expect("bind ephemeral port");
    let addr = server.local_addr();
    tokio::spawn(server.serve());
    addr
}

/// Issue one GET and return (status, body)
async fn get(addr: SocketAddr, path: &str) -> (u16, String) {
    let mut stream = TcpStream::connect(addr).await.expect("connect");
    let req = format!("GET {path} HTTP/1.1\r\nhost: localhost\r\nconnection: close\r\n\r\n");
    stream.write_all(req.as_bytes()).await.expect("write request");

    let mut buf = Vec::new();
    stream.read_to_end(&mut buf).await.expect("read response");
    let text = String::from_utf8(buf).expect("utf-8 response");

    let status = text
        .split_whitespace()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| panic!("bad status line: {text}"));
    let body = text
        .split_once("\r\n\r\n")
        .map(|(_, b)| b.to_string())
        .unwrap_or_default();
    (status, body)
}

/// Parse `latency: <n>ms` into `n`
fn parse_latency_ms(body: &str) -> u64 {
    body.strip_prefix("latency: ")
        .and_then(|s| s.strip_suffix("ms"))
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| panic!("unexpected slow body: {body}"))
}

#[tokio::test]
async fn okay_responds_immediately() {
    let addr = start(VariantConfig::slow_app());

    let started = Instant::now();
    let (status, body) = get(addr, "/okay").await;
    let elapsed = started.elapsed();

    assert_eq!(status, 200);
    assert_eq!(body, "okay");
    // no injected delay: must finish far below the 100ms floor
    assert!(elapsed < Duration::from_millis(100), "took {elapsed:?}");
}

#[tokio::test]
async fn slow_delay_matches_reported_value() {
    let addr = start(VariantConfig::slow_app());

    for _ in 0..3 {
        let started = Instant::now();
        let (status, body) = get(addr, "/slow").await;
        let elapsed = started.elapsed();

        assert_eq!(status, 200);
        let n = parse_latency_ms(&body);
        assert!((100..400).contains(&n), "delay out of range: {n}");
        assert!(
            elapsed >= Duration::from_millis(n),
            "measured {elapsed:?} below injected {n}ms"
        );
    }
}

#[tokio::test]
async fn concurrent_slow_requests_do_not_serialize() {
    let addr = start(VariantConfig::slow_app());

    let started = Instant::now();
    let requests: Vec<_> = (0..8).map(|_| tokio::spawn(get(addr, "/slow"))).collect();
    for req in requests {
        let (status, body) = req.await.expect("request task");
        assert_eq!(status, 200);
        parse_latency_ms(&body);
    }
    let elapsed = started.elapsed();

    // serialized execution would take at least 8 * 100ms; concurrent
    // execution is bounded by the slowest single delay (< 400ms)
    assert!(elapsed < Duration::from_millis(700), "took {elapsed:?}");
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let addr = start(VariantConfig::slow_app());

    let (status, _) = get(addr, "/missing").await;
    assert_eq!(status, 404);
}

#[tokio::test]
async fn proxy_variant_serves_hello_from_root() {
    let addr = start(VariantConfig::proxy());

    let started = Instant::now();
    let (status, body) = get(addr, "/").await;
    let elapsed = started.elapsed();

    assert_eq!(status, 200);
    let n: u64 = body
        .strip_prefix("Hello ")
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| panic!("unexpected proxy body: {body}"));
    assert!((100..400).contains(&n));
    assert!(elapsed >= Duration::from_millis(n));
}

#[tokio::test]
async fn proxy_variant_has_no_okay_route() {
    let addr = start(VariantConfig::proxy());

    let (status, _) = get(addr, "/okay").await;
    assert_eq!(status, 404);
}
