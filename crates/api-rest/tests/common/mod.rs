#![allow(dead_code)]

use api_rest::{router, AppState};
use axum::body::Body;
use axum::http::{header, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;
use wishlist_core::{CoreConfig, DatabaseLocation};

/// Router over an empty in-memory wishlist.
pub fn empty_app() -> Router {
    let service = wishlist_core::open_service(&CoreConfig::new(DatabaseLocation::Memory))
        .expect("in-memory service should open");
    router(AppState::new(service))
}

/// Router over the standard fixture: Tokyo (1) and New York (2) unvisited,
/// San Francisco (3) and Moab (4) visited.
pub fn fixture_app() -> Router {
    let service = wishlist_core::open_service(&CoreConfig::new(DatabaseLocation::Memory))
        .expect("in-memory service should open");
    for (name, visited) in [
        ("Tokyo", false),
        ("New York", false),
        ("San Francisco", true),
        ("Moab", true),
    ] {
        service.add_place(name, visited).expect("fixture insert");
    }
    router(AppState::new(service))
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.expect("router is infallible")
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    send(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

pub async fn post_form(app: &Router, uri: &str, form: &str) -> Response<Body> {
    let request = Request::post(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form.to_owned()))
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: &Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    let request = Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_raw_json(app: &Router, uri: &str, body: &str) -> Response<Body> {
    let request = Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap();
    send(app, request).await
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
