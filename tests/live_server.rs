//! End-to-end checks against a bound listener.

use std::time::Duration;

use reqwest::redirect::Policy;
use space_router::RouterConfig;

mod common;

#[tokio::test]
async fn test_redirect_followed_by_client() {
    let (addr, shutdown, handle) = common::spawn_server(RouterConfig::default()).await;

    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    let res = client.get(format!("http://{}/", addr)).send().await.unwrap();
    assert_eq!(res.status(), 200);
    assert_eq!(res.url().path(), "/space/list");
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["view"], "SpaceList");

    shutdown.trigger();
    tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .expect("server should stop after shutdown")
        .unwrap();
}

#[tokio::test]
async fn test_request_id_propagated() {
    let (addr, shutdown, _handle) = common::spawn_server(RouterConfig::default()).await;

    let client = reqwest::Client::builder()
        .no_proxy()
        .redirect(Policy::none())
        .build()
        .unwrap();

    let res = client
        .get(format!("http://{}/", addr))
        .header("x-request-id", "nav-42")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 302);
    assert_eq!(res.headers()["x-request-id"], "nav-42");

    let res = client
        .get(format!("http://{}/unknown", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 404);
    assert!(!res.headers()["x-request-id"].is_empty());

    shutdown.trigger();
}
