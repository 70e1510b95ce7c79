use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account id stamped on cart lines and orders. The storefront has no
/// authentication; every session shops as this guest account.
pub const GUEST_USER_ID: i32 = 2;

/// Address sent in place of a street address for pickup orders.
pub const PICKUP_ADDRESS: &str = "Retiro en local";

// Products

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: f32,
    #[serde(rename = "imageURL")]
    pub image_url: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "createdBy")]
    pub created_by: i32,
}

// Cart

#[derive(Serialize, Debug, Clone)]
pub struct CartLine {
    /// Session-local line id, assigned at add time and never reused.
    /// Distinct from `product.id`: the same product may appear on several
    /// lines, each removable on its own.
    pub seq: u64,
    pub product: Product,
    pub comment: String,
    pub added_at: DateTime<Utc>,
    pub added_by: i32,
}

// Checkout

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryType {
    Delivery,
    Pickup,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Cash,
    MercadoPago,
}

/// How the order reaches the customer. Pickup orders carry no street
/// address; the wire contract still wants one, so [`Fulfilment::address`]
/// substitutes [`PICKUP_ADDRESS`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fulfilment {
    Delivery { address: String },
    Pickup,
}

impl Fulfilment {
    pub fn delivery_type(&self) -> DeliveryType {
        match self {
            Fulfilment::Delivery { .. } => DeliveryType::Delivery,
            Fulfilment::Pickup => DeliveryType::Pickup,
        }
    }

    pub fn address(&self) -> &str {
        match self {
            Fulfilment::Delivery { address } => address,
            Fulfilment::Pickup => PICKUP_ADDRESS,
        }
    }
}

/// Contact and payment details collected by the checkout form.
#[derive(Debug, Clone)]
pub struct Checkout {
    pub phone_number: String,
    pub fulfilment: Fulfilment,
    pub payment_method: PaymentMethod,
}

/// Result of submitting the cart. `Redirect` carries the hosted-checkout
/// URL the customer must be sent to in order to complete payment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderOutcome {
    Placed,
    Failed,
    Redirect(String),
}
