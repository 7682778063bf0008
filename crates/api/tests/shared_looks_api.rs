//! Integration tests for shared-look persistence.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, patch_json, post_json};
use serde_json::json;
use sqlx::PgPool;

fn look_body(image_url: &str) -> serde_json::Value {
    json!({
        "image_url": image_url,
        "user_image_url": "https://blob.example/user-images/me.jpg",
        "prompt": "studio look",
        "product_names": "Classic White Shirt, Wool Beanie",
        "selected_items": [
            { "id": "2", "name": "Classic White Shirt" },
            { "id": "4", "name": "Wool Beanie" }
        ]
    })
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn create_returns_201_with_row(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/shared-looks",
        look_body("https://blob.example/look-1.jpg"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    let look = &json["data"];
    assert!(look["id"].is_i64());
    assert_eq!(look["image_url"], "https://blob.example/look-1.jpg");
    assert_eq!(look["product_names"], "Classic White Shirt, Wool Beanie");
    assert_eq!(look["public"], false);
    assert_eq!(look["video_url"], serde_json::Value::Null);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_defaults_optional_fields(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/shared-looks",
        json!({
            "image_url": "https://blob.example/look-2.jpg",
            "product_names": "Oversized Tee"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["data"]["prompt"], "");
    assert_eq!(json["data"]["selected_items"], json!([]));
    assert_eq!(json["data"]["user_image_url"], serde_json::Value::Null);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_rejects_missing_required_fields(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/shared-looks",
        json!({ "product_names": "Oversized Tee" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/shared-looks",
        json!({ "image_url": "https://blob.example/x.jpg", "product_names": "  " }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"], "Image URL and product names are required");
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn list_is_newest_first(pool: PgPool) {
    for n in 1..=3 {
        let app = common::build_test_app(pool.clone());
        let response = post_json(
            app,
            "/api/v1/shared-looks",
            look_body(&format!("https://blob.example/look-{n}.jpg")),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/shared-looks").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let looks = json["data"].as_array().unwrap();
    assert_eq!(looks.len(), 3);

    // Newest first by id (created_at ties resolve in insertion order
    // within a transaction, so compare ids).
    let ids: Vec<i64> = looks.iter().map(|l| l["id"].as_i64().unwrap()).collect();
    let mut sorted = ids.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(ids, sorted);
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn patch_updates_video_url_and_visibility(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/v1/shared-looks",
            look_body("https://blob.example/look-1.jpg"),
        )
        .await,
    )
    .await;
    let id = created["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = patch_json(
        app,
        &format!("/api/v1/shared-looks/{id}"),
        json!({
            "video_url": "https://blob.example/fashion-video-1.mp4",
            "public": false
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(
        json["data"]["video_url"],
        "https://blob.example/fashion-video-1.mp4"
    );
    assert_eq!(json["data"]["public"], false);
    // Untouched fields survive.
    assert_eq!(json["data"]["image_url"], "https://blob.example/look-1.jpg");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn patch_with_no_fields_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/v1/shared-looks",
            look_body("https://blob.example/look-1.jpg"),
        )
        .await,
    )
    .await;
    let id = created["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = patch_json(app, &format!("/api/v1/shared-looks/{id}"), json!({})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"], "No update fields provided");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn patch_unknown_id_is_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = patch_json(
        app,
        "/api/v1/shared-looks/999999",
        json!({ "public": false }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}
