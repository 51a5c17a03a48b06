use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use tower::ServiceExt;

use super::*;

async fn get(router: Router, uri: &str, accept_gzip: bool) -> axum::response::Response {
    let mut req = Request::builder().uri(uri);
    if accept_gzip {
        req = req.header(header::ACCEPT_ENCODING, "gzip");
    }
    router.oneshot(req.body(Body::empty()).unwrap()).await.unwrap()
}

#[tokio::test]
async fn healthz_reports_ok() {
    let res = get(base_routes(), "/healthz", false).await;
    assert_eq!(res.status(), StatusCode::OK);

    let body = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json, serde_json::json!({ "status": "ok", "service": "roadsense" }));
}

#[tokio::test]
async fn unknown_path_is_not_found_without_leptos() {
    let res = get(base_routes(), "/nope", false).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn layers_keep_health_route_reachable() {
    let cfg = ServerConfig { compression: false, ..ServerConfig::default() };
    let res = get(with_layers(base_routes(), &cfg), "/healthz", true).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.headers().get(header::CONTENT_ENCODING).is_none());
}

#[tokio::test]
async fn layers_gzip_when_compression_enabled() {
    let cfg = ServerConfig { compression: true, ..ServerConfig::default() };
    let res = get(with_layers(base_routes(), &cfg), "/healthz", true).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers().get(header::CONTENT_ENCODING).map(|v| v.to_str().unwrap()), Some("gzip"));
}

#[tokio::test]
async fn layers_skip_gzip_when_client_does_not_ask() {
    let cfg = ServerConfig { compression: true, ..ServerConfig::default() };
    let res = get(with_layers(base_routes(), &cfg), "/healthz", false).await;
    assert!(res.headers().get(header::CONTENT_ENCODING).is_none());
}

#[test]
fn health_response_serializes_field_names() {
    let value = serde_json::to_value(HealthResponse { status: "ok", service: SERVICE_NAME }).unwrap();
    assert_eq!(value["status"], "ok");
    assert_eq!(value["service"], "roadsense");
}
