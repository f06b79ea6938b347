use std::sync::Arc;

use axum::{routing::any_service, Router};
use http_body_util::BodyExt; // for .collect
use hyper::{header, Request, StatusCode};
use serde_json::{json, Value};
use tokio::time::{timeout, Duration};
use tower::ServiceExt; // for .oneshot

use product_mcp::domain::Catalog;
use product_mcp::infra::runtime::mcp_transport;
use product_mcp::tools::catalog as catalog_tools;

fn mcp_app() -> Router {
    let catalog = Arc::new(Catalog::seeded());
    let session_mgr = Arc::new(mcp_transport::LocalSessionManager::default());
    let service =
        mcp_transport::make_streamable_http_service(catalog_tools::factory(catalog), session_mgr);
    Router::new().route_service("/mcp", any_service(service))
}

async fn post_frame(
    app: &Router,
    session_id: Option<&str>,
    body: Value,
) -> hyper::Response<axum::body::Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/mcp")
        .header(header::ACCEPT, "application/json, text/event-stream")
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(sid) = session_id {
        builder = builder.header("MCP-Session-Id", sid);
    }
    let req = builder.body(axum::body::Body::from(body.to_string())).unwrap();
    app.clone().oneshot(req).await.unwrap()
}

fn sse_data(bytes: &[u8]) -> Value {
    let s = String::from_utf8_lossy(bytes);
    s.lines()
        .find_map(|line| line.strip_prefix("data: ").map(|d| d.to_string()))
        .and_then(|d| serde_json::from_str::<Value>(&d).ok())
        .expect("no rpc response frame in SSE body")
}

async fn initialize(app: &Router) -> String {
    let init = json!({
        "jsonrpc":"2.0","id":1,"method":"initialize",
        "params":{ "protocolVersion":"2025-03-26","capabilities":{},"clientInfo":{"name":"test","version":"0.1"} }
    });
    let res = post_frame(app, None, init).await;
    assert!(res.status().is_success());
    let session_id = res
        .headers()
        .get("MCP-Session-Id")
        .expect("session id header")
        .to_str()
        .unwrap()
        .to_owned();

    let notif = json!({"jsonrpc":"2.0","method":"notifications/initialized","params":{}});
    let res = post_frame(app, Some(&session_id), notif).await;
    assert_eq!(res.status(), StatusCode::ACCEPTED);
    session_id
}

#[tokio::test]
async fn initialize_list_and_call_over_streamable_http() {
    let app = mcp_app();
    let session_id = initialize(&app).await;

    // tools/list
    let list = json!({"jsonrpc":"2.0","id":2,"method":"tools/list","params":{}});
    let list_res = timeout(
        Duration::from_secs(20),
        post_frame(&app, Some(&session_id), list),
    )
    .await
    .unwrap();
    assert!(list_res.status().is_success());
    let bytes = list_res.into_body().collect().await.unwrap().to_bytes();
    let v = sse_data(&bytes);
    let tools = v["result"]["tools"].as_array().expect("tools array");
    let names: Vec<&str> = tools.iter().filter_map(|t| t["name"].as_str()).collect();
    assert!(names.contains(&"getProducts"), "got: {names:?}");
    assert!(names.contains(&"getProduct"), "got: {names:?}");

    // tools/call getProducts
    let call = json!({
        "jsonrpc":"2.0","id":3,"method":"tools/call",
        "params": {"name":"getProducts","arguments":{}}
    });
    let call_res = post_frame(&app, Some(&session_id), call).await;
    assert!(call_res.status().is_success());
    let bytes = call_res.into_body().collect().await.unwrap().to_bytes();
    let v = sse_data(&bytes);
    let products = v["result"]["structuredContent"]["products"]
        .as_array()
        .expect("products array");
    assert_eq!(products.len(), 2);
    assert_eq!(products[0]["name"], "Mac Book Pro M4");

    // tools/call getProduct, lowercase lookup
    let call = json!({
        "jsonrpc":"2.0","id":4,"method":"tools/call",
        "params": {"name":"getProduct","arguments":{"name":"samsung s25 ultra"}}
    });
    let call_res = post_frame(&app, Some(&session_id), call).await;
    assert!(call_res.status().is_success());
    let bytes = call_res.into_body().collect().await.unwrap().to_bytes();
    let v = sse_data(&bytes);
    assert_eq!(v["result"]["structuredContent"]["found"], true);
    assert_eq!(
        v["result"]["structuredContent"]["product"]["name"],
        "Samsung S25 Ultra"
    );
}

#[tokio::test]
async fn get_product_miss_is_absent_over_streamable_http() {
    let app = mcp_app();
    let session_id = initialize(&app).await;

    let call = json!({
        "jsonrpc":"2.0","id":2,"method":"tools/call",
        "params": {"name":"getProduct","arguments":{"name":"Nonexistent Phone"}}
    });
    let call_res = post_frame(&app, Some(&session_id), call).await;
    assert!(call_res.status().is_success());
    let bytes = call_res.into_body().collect().await.unwrap().to_bytes();
    let v = sse_data(&bytes);
    assert_eq!(v["result"]["structuredContent"]["found"], false);
    assert!(v["result"]["structuredContent"]["product"].is_null());
}
