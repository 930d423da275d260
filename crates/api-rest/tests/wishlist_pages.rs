mod common;

use axum::http::{header, StatusCode};
use api_rest::{router, AppState};
use common::{body_text, empty_app, fixture_app, get, post_form};
use wishlist_core::db::open_db;
use wishlist_core::{CoreConfig, DatabaseLocation};

#[tokio::test]
async fn home_page_shows_empty_message_for_empty_database() {
    let app = empty_app();

    let response = get(&app, "/").await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("You have no places in your wishlist"));
}

#[tokio::test]
async fn wishlist_contains_only_unvisited_places() {
    let app = fixture_app();

    let html = body_text(get(&app, "/").await).await;
    assert!(html.contains("Tokyo"));
    assert!(html.contains("New York"));
    assert!(!html.contains("San Francisco"));
    assert!(!html.contains("Moab"));
}

#[tokio::test]
async fn adding_unvisited_place_redirects_to_wishlist_showing_it() {
    let app = empty_app();

    let response = post_form(&app, "/", "name=Tokyo&visited=False").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/");

    let html = body_text(get(&app, "/").await).await;
    assert!(html.contains("Tokyo"));
    assert!(html.contains("/place/1/was_visited"));
    assert!(!html.contains("You have no places in your wishlist"));

    let api = common::body_json(get(&app, "/api/places/1").await).await;
    assert_eq!(
        api,
        serde_json::json!({"id": 1, "name": "Tokyo", "visited": false})
    );
}

#[tokio::test]
async fn adding_visited_place_keeps_it_off_the_wishlist() {
    let app = empty_app();

    let response = post_form(&app, "/", "name=Moab&visited=on").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let wishlist = body_text(get(&app, "/").await).await;
    assert!(!wishlist.contains("Moab"));
    let visited = body_text(get(&app, "/visited").await).await;
    assert!(visited.contains("Moab"));
}

#[tokio::test]
async fn adding_place_without_name_rerenders_with_error() {
    let app = fixture_app();

    let response = post_form(&app, "/", "visited=False").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let html = body_text(response).await;
    assert!(html.contains("Place name cannot be empty"));
    assert!(html.contains("Tokyo"));

    let response = post_form(&app, "/", "name=+++").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn adding_place_with_bad_checkbox_value_is_rejected() {
    let app = empty_app();

    let response = post_form(&app, "/", "name=Tokyo&visited=maybe").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let html = body_text(get(&app, "/").await).await;
    assert!(html.contains("You have no places in your wishlist"));
}

#[tokio::test]
async fn visiting_place_removes_it_from_wishlist() {
    let app = fixture_app();

    let response = post_form(&app, "/place/2/was_visited", "").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/");

    let html = body_text(get(&app, "/").await).await;
    assert!(!html.contains("New York"));
    assert!(html.contains("Tokyo"));

    let new_york = common::body_json(get(&app, "/api/places/2").await).await;
    assert_eq!(new_york["visited"], serde_json::json!(true));
}

#[tokio::test]
async fn visiting_non_existent_place_is_not_found() {
    let app = fixture_app();

    let response = post_form(&app, "/place/200/was_visited", "").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = post_form(&app, "/place/tokyo/was_visited", "").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn visiting_place_twice_succeeds_both_times() {
    let app = fixture_app();

    for _ in 0..2 {
        let response = post_form(&app, "/place/1/was_visited", "").await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
    }

    let visited = body_text(get(&app, "/visited").await).await;
    assert!(visited.contains("Tokyo"));
}

#[tokio::test]
async fn visited_page_lists_visited_places() {
    let app = fixture_app();

    let html = body_text(get(&app, "/visited").await).await;
    assert!(html.contains("San Francisco"));
    assert!(html.contains("Moab"));
    assert!(!html.contains("Tokyo"));

    let empty = body_text(get(&empty_app(), "/visited").await).await;
    assert!(empty.contains("You have not visited any places yet"));
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let response = get(&empty_app(), "/nowhere").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn invalid_persisted_row_renders_generic_server_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wishlist.db");

    let conn = open_db(&path).unwrap();
    conn.execute_batch(
        "PRAGMA ignore_check_constraints = ON;
         INSERT INTO places (name, visited) VALUES ('   ', 0);",
    )
    .unwrap();
    drop(conn);

    let service =
        wishlist_core::open_service(&CoreConfig::new(DatabaseLocation::File(path))).unwrap();
    let app = router(AppState::new(service));

    let response = get(&app, "/").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let html = body_text(response).await;
    assert!(html.contains("Something went wrong"));
    assert!(!html.contains("places.name"));
}
