use anyhow::{Context, Result};
use reqwest::Client;
use serde::Deserialize;

use crate::{api::ApiConfig, error::AppError, models::Product};

#[derive(Deserialize)]
struct ListProductsRes {
    products: ProductsField,
}

/// The backend answers with a list of products, except when the vendor has
/// exactly one: then `products` holds that product as a bare object.
#[derive(Deserialize)]
#[serde(untagged)]
enum ProductsField {
    Many(Vec<Product>),
    One(Box<Product>),
}

pub async fn get_products(
    client: Client,
    config: &ApiConfig,
    vendor: &str,
) -> Result<Vec<Product>> {
    let res = client
        .get(format!("{}/products/list/{}", config.base_url, vendor))
        .send()
        .await
        .map_err(|_| AppError::ServiceUnreachable("CatalogService".into()))?;

    if !res.status().is_success() {
        return Err(AppError::UnexpectedStatus(res.status().as_u16()).into());
    }

    let body: ListProductsRes = res.json().await.context("Failed to parse JSON")?;

    Ok(match body.products {
        ProductsField::Many(products) => products,
        ProductsField::One(product) => vec![*product],
    })
}

#[derive(Deserialize)]
struct GetProductRes {
    product: Option<Product>,
}

pub async fn get_product(client: Client, config: &ApiConfig, id: i32) -> Result<Option<Product>> {
    let res = client
        .get(format!("{}/products/get/{}", config.base_url, id))
        .send()
        .await
        .map_err(|_| AppError::ServiceUnreachable("CatalogService".into()))?;

    if !res.status().is_success() {
        return Err(AppError::UnexpectedStatus(res.status().as_u16()).into());
    }

    let body: GetProductRes = res.json().await.context("Failed to parse JSON")?;

    Ok(body.product)
}
