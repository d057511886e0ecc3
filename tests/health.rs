use api_template::{
    api::{self, AppState},
    middleware,
    utils::env::BuildInfo,
};
use axum::{
    Router,
    middleware::{from_fn, from_fn_with_state},
    routing::get,
};
use serde_json::Value;
use std::{net::SocketAddr, time::Duration};
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::TcpListener,
    sync::oneshot,
};

struct Response {
    status: u16,
    headers: String,
    body: String,
}

async fn send_raw(addr: SocketAddr, method: &str, path: &str) -> Response {
    let mut stream = tokio::net::TcpStream::connect(addr)
        .await
        .expect("connect server");
    let request =
        format!("{method} {path} HTTP/1.1\r\nHost: {addr}\r\nUser-Agent: health-test\r\nConnection: close\r\n\r\n");
    stream
        .write_all(request.as_bytes())
        .await
        .expect("write request");

    let mut raw = Vec::new();
    stream.read_to_end(&mut raw).await.expect("read response");
    let raw = String::from_utf8(raw).expect("utf8 response");

    let (head, body) = raw.split_once("\r\n\r\n").expect("http response");
    let status = head
        .split_whitespace()
        .nth(1)
        .and_then(|code| code.parse().ok())
        .expect("status code");

    Response {
        status,
        headers: head.to_ascii_lowercase(),
        body: body.to_string(),
    }
}

async fn start_api() -> (SocketAddr, oneshot::Sender<()>, tokio::task::JoinHandle<api_template::error::Result<()>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    let (stop, stopped) = oneshot::channel::<()>();
    let state = AppState::new(BuildInfo::new("v9.9.9", "2024-02-02T00:00:00+00:00"));
    let handle = tokio::spawn(api::serve(listener, state, async move {
        let _ = stopped.await;
    }));
    (addr, stop, handle)
}

async fn start_router(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move { axum::serve(listener, app).await.expect("serve") });
    addr
}

#[tokio::test]
async fn test_health_reports_build_and_uptime() {
    let (addr, _stop, _handle) = start_api().await;

    let response = send_raw(addr, "GET", "/health").await;
    assert_eq!(response.status, 200);
    assert!(response.headers.contains("content-type: application/json"));

    let body: Value = serde_json::from_str(&response.body).expect("json body");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["buildTag"], "v9.9.9");
    assert_eq!(body["buildDate"], "2024-02-02T00:00:00+00:00");
    assert!(!body["upTime"].as_str().unwrap_or_default().is_empty());
}

#[tokio::test]
async fn test_cors_headers_and_preflight() {
    let (addr, _stop, _handle) = start_api().await;

    let response = send_raw(addr, "GET", "/health").await;
    assert!(response.headers.contains("access-control-allow-origin: *"));

    let preflight = send_raw(addr, "OPTIONS", "/health").await;
    assert_eq!(preflight.status, 200);
    assert!(
        preflight
            .headers
            .contains("access-control-allow-methods: get, post, put, delete, options")
    );
    assert!(
        preflight
            .headers
            .contains("access-control-allow-headers: content-type, authorization")
    );
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let (addr, _stop, _handle) = start_api().await;
    assert_eq!(send_raw(addr, "GET", "/missing").await.status, 404);
}

#[tokio::test]
async fn test_graceful_shutdown() {
    let (addr, stop, handle) = start_api().await;
    assert_eq!(send_raw(addr, "GET", "/health").await.status, 200);

    stop.send(()).expect("signal shutdown");
    let result = tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .expect("server stops")
        .expect("join server task");
    assert!(result.is_ok());
}

async fn exploding_handler() -> &'static str {
    panic!("handler exploded")
}

#[tokio::test]
async fn test_recover_turns_panic_into_500() {
    let app = Router::new()
        .route("/boom", get(exploding_handler))
        .layer(from_fn(middleware::recover));
    let addr = start_router(app).await;

    let response = send_raw(addr, "GET", "/boom").await;
    assert_eq!(response.status, 500);
    let body: Value = serde_json::from_str(&response.body).expect("json body");
    assert_eq!(body["error"], "An internal server error occurred");
}

async fn slow_handler() -> &'static str {
    tokio::time::sleep(Duration::from_millis(500)).await;
    "late"
}

#[tokio::test]
async fn test_timeout_cuts_off_slow_requests() {
    let app = Router::new()
        .route("/slow", get(slow_handler))
        .route("/fast", get(|| async { "quick" }))
        .layer(from_fn_with_state(
            Duration::from_millis(50),
            middleware::timeout,
        ));
    let addr = start_router(app).await;

    let slow = send_raw(addr, "GET", "/slow").await;
    assert_eq!(slow.status, 503);

    let fast = send_raw(addr, "GET", "/fast").await;
    assert_eq!(fast.status, 200);
    assert_eq!(fast.body, "quick");
}
