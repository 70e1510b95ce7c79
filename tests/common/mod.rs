#![allow(dead_code)]

use axum::Router;
use chrono::Utc;
use plantilla_storefront::{
    api::ApiConfig,
    models::Product,
    stores::{CatalogStore, OrderStore},
};
use serde_json::{Value, json};

/// Serve `router` on an ephemeral local port and return its base URL.
pub async fn spawn_backend(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub backend");
    let addr = listener.local_addr().expect("stub backend addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve stub backend");
    });
    format!("http://{addr}")
}

pub fn catalog_store(base_url: &str) -> CatalogStore {
    CatalogStore::new(ApiConfig::new(base_url, "demo"), reqwest::Client::new())
}

pub fn order_store(base_url: &str) -> OrderStore {
    OrderStore::new(ApiConfig::new(base_url, "demo"), reqwest::Client::new())
}

pub fn product(id: i32, price: f32) -> Product {
    Product {
        id,
        name: format!("Product {id}"),
        description: "rich and tasty".to_string(),
        price,
        image_url: None,
        created_at: Utc::now(),
        created_by: 1,
    }
}

pub fn product_json(id: i32, price: f32) -> Value {
    json!({
        "id": id,
        "name": format!("Product {id}"),
        "description": "rich and tasty",
        "price": price,
        "imageURL": null,
        "createdAt": "2024-05-01T12:00:00Z",
        "createdBy": 1,
    })
}
