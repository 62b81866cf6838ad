use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use super::*;

#[tokio::test]
async fn healthz_returns_ok() {
    let request = Request::builder().uri("/healthz").body(Body::empty()).unwrap();
    let response = probe_routes().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn probe_routes_do_not_answer_app_paths() {
    let request = Request::builder().uri("/auction/abc").body(Body::empty()).unwrap();
    let response = probe_routes().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
