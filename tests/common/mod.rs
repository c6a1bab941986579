//! Shared utilities for integration tests.

use std::net::SocketAddr;

use axum::body::Body;
use axum::http::{Request, Response};
use space_router::config::validate_config;
use space_router::{HttpServer, RouterConfig, Shutdown};
use tokio::net::TcpListener;
use tower::ServiceExt;

/// Build a server from `config`, panicking on invalid configuration.
pub fn server(config: &RouterConfig) -> HttpServer {
    let table = validate_config(config).expect("test config must be valid");
    HttpServer::new(config, table)
}

/// Send a single GET through the router without binding a socket.
#[allow(dead_code)]
pub async fn get(server: &HttpServer, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    server.router().oneshot(request).await.unwrap()
}

#[allow(dead_code)]
pub async fn json_body(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Start a real server on an ephemeral port.
#[allow(dead_code)]
pub async fn spawn_server(config: RouterConfig) -> (SocketAddr, Shutdown, tokio::task::JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = server(&config);

    let handle = tokio::spawn(async move {
        server.run(listener, server_shutdown).await.unwrap();
    });

    (addr, shutdown, handle)
}
