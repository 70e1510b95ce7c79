use anyhow::{Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::{
    api::ApiConfig,
    error::AppError,
    models::{DeliveryType, PaymentMethod},
};

#[derive(Serialize, Debug)]
pub struct OrderLineReq {
    pub id: i32,
    pub comment: String,
}

#[derive(Serialize, Debug)]
pub struct CreateOrderReq {
    pub order: Vec<OrderLineReq>,
    pub price: f32,
    pub phone_number: String,
    pub address: String,
    #[serde(rename = "paymentMethod")]
    pub payment_method: PaymentMethod,
    #[serde(rename = "deliveryType")]
    pub delivery_type: DeliveryType,
    #[serde(rename = "userId")]
    pub user_id: i32,
    #[serde(rename = "preferenceId", skip_serializing_if = "Option::is_none")]
    pub preference_id: Option<String>,
}

/// Persist the order. Any 2xx means the backend accepted it; the response
/// body is not part of the contract.
pub async fn create_order(client: Client, config: &ApiConfig, req: &CreateOrderReq) -> Result<()> {
    let res = client
        .post(format!("{}/orders/create", config.base_url))
        .json(req)
        .send()
        .await
        .map_err(|_| AppError::ServiceUnreachable("OrderService".into()))?;

    if !res.status().is_success() {
        return Err(AppError::UnexpectedStatus(res.status().as_u16()).into());
    }

    Ok(())
}

#[derive(Serialize, Debug)]
pub struct PreferenceItemReq {
    pub id: String,
    pub title: String,
    pub currency_id: String,
    pub picture_url: Option<String>,
    pub unit_price: f32,
    pub quantity: u32,
}

#[derive(Serialize)]
struct CreatePreferenceReq {
    items: Vec<PreferenceItemReq>,
}

#[derive(Deserialize, Debug)]
pub struct Preference {
    pub id: String,
    pub init_point: String,
}

#[derive(Deserialize)]
struct CreatePreferenceRes {
    preference: Preference,
}

/// Register the payable items with the payment provider. The returned
/// preference id must accompany the final order-creation call, and
/// `init_point` is where the customer completes payment.
pub async fn create_preference(
    client: Client,
    config: &ApiConfig,
    items: Vec<PreferenceItemReq>,
) -> Result<Preference> {
    let res = client
        .post(format!("{}/payments/createPreference", config.base_url))
        .json(&CreatePreferenceReq { items })
        .send()
        .await
        .map_err(|_| AppError::ServiceUnreachable("PaymentService".into()))?;

    if !res.status().is_success() {
        return Err(AppError::UnexpectedStatus(res.status().as_u16()).into());
    }

    let body: CreatePreferenceRes = res.json().await.context("Failed to parse JSON")?;

    Ok(body.preference)
}
