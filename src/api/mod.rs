pub mod orders;
pub mod products;

/// Remote storefront API configuration. The vendor key is part of the
/// config on purpose: catalog loads that do not name a vendor fall back to
/// it, and it has to be chosen by whoever deploys the storefront.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub vendor: String,
    pub currency_id: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>, vendor: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            vendor: vendor.into(),
            currency_id: Self::default_currency(),
        }
    }

    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("STOREFRONT_API_URL")
                .unwrap_or(Self::default_base_url()),
            vendor: std::env::var("STOREFRONT_VENDOR").unwrap_or("plantilla".to_string()),
            currency_id: std::env::var("STOREFRONT_CURRENCY").unwrap_or(Self::default_currency()),
        }
    }

    pub fn default_base_url() -> String {
        "https://ecommerceplantilla-back.fileit-contact.workers.dev/api".to_string()
    }

    pub fn default_currency() -> String {
        "ARS".to_string()
    }
}
