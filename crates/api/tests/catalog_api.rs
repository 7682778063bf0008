//! Integration tests for the product catalog endpoint.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn lists_all_products(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/products").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let products = json["data"].as_array().expect("data must be an array");
    assert_eq!(products.len(), 28);

    // Catalog order is stable.
    assert_eq!(products[0]["id"], "1");
    assert_eq!(products[1]["name"], "Classic White Shirt");
    assert_eq!(products[1]["price"], 129.0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn filters_by_category(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/products?category=hats").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let products = json["data"].as_array().unwrap();
    assert_eq!(products.len(), 2);
    assert!(products.iter().all(|p| p["category"] == "hats"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_category_yields_empty_list(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/products?category=capes").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 0);
}
