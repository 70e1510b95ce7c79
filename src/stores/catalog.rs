use reqwest::Client;
use tracing::warn;

use crate::{
    api::{self, ApiConfig},
    models::Product,
};

/// Holds the product list for one vendor. One instance per application
/// session; construct it next to the [`OrderStore`](crate::stores::OrderStore)
/// and drop both when the session ends.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    config: ApiConfig,
    client: Client,
    products: Vec<Product>,
}

impl CatalogStore {
    pub fn new(config: ApiConfig, client: Client) -> Self {
        Self {
            config,
            client,
            products: Vec::new(),
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Refresh the catalog from the backend, replacing the stored list
    /// wholesale. `vendor` falls back to the configured vendor key. Any
    /// failure keeps whatever was loaded before; the UI shows stale
    /// products over none.
    pub async fn load(&mut self, vendor: Option<&str>) {
        let vendor = vendor.unwrap_or(&self.config.vendor);
        match api::products::get_products(self.client.clone(), &self.config, vendor).await {
            Ok(products) => self.products = products,
            Err(err) => warn!("Failed to load catalog for {}: {:#}", vendor, err),
        }
    }

    /// Fetch a single product by id. Does not touch the stored catalog;
    /// any failure reads as not found.
    pub async fn product(&self, id: i32) -> Option<Product> {
        match api::products::get_product(self.client.clone(), &self.config, id).await {
            Ok(product) => product,
            Err(err) => {
                warn!("Failed to fetch product #{}: {:#}", id, err);
                None
            }
        }
    }
}
