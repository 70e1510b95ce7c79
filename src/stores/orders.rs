use chrono::Utc;
use reqwest::Client;
use tracing::{info, warn};

use crate::{
    api::{
        self, ApiConfig,
        orders::{CreateOrderReq, OrderLineReq, PreferenceItemReq},
    },
    models::{CartLine, Checkout, GUEST_USER_ID, OrderOutcome, PaymentMethod, Product},
};

/// The in-progress order: the cart lines, the total derived from them, and
/// the submission protocol. One instance per application session.
#[derive(Debug, Clone)]
pub struct OrderStore {
    config: ApiConfig,
    client: Client,
    lines: Vec<CartLine>,
    next_seq: u64,
}

impl OrderStore {
    pub fn new(config: ApiConfig, client: Client) -> Self {
        Self {
            config,
            client,
            lines: Vec::new(),
            next_seq: 0,
        }
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Running total. Always recomputed from the current lines, so it
    /// cannot disagree with them.
    pub fn total(&self) -> f32 {
        self.lines.iter().map(|line| line.product.price).sum()
    }

    /// Add one unit of `product` to the order. Returns the sequence number
    /// that addresses the new line for removal.
    pub fn add_line(&mut self, product: &Product, comment: impl Into<String>) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.lines.push(CartLine {
            seq,
            product: product.clone(),
            comment: comment.into(),
            added_at: Utc::now(),
            added_by: GUEST_USER_ID,
        });
        seq
    }

    /// Remove the line addressed by `seq`. Unknown sequence numbers are
    /// ignored; a spent seq is never recycled either way.
    pub fn remove_line(&mut self, seq: u64) {
        self.lines.retain(|line| line.seq != seq);
    }

    /// Submit the current cart. The cart is cleared only once the final
    /// call of the chosen branch has confirmed success; on any failure it
    /// stays exactly as it was so the customer can retry.
    pub async fn submit(&mut self, checkout: &Checkout) -> OrderOutcome {
        match checkout.payment_method {
            PaymentMethod::Cash => self.submit_cash(checkout).await,
            PaymentMethod::MercadoPago => self.submit_mercadopago(checkout).await,
        }
    }

    async fn submit_cash(&mut self, checkout: &Checkout) -> OrderOutcome {
        let req = self.order_request(checkout, None);
        match api::orders::create_order(self.client.clone(), &self.config, &req).await {
            Ok(()) => {
                info!("Order with {} lines placed", req.order.len());
                self.lines.clear();
                OrderOutcome::Placed
            }
            Err(err) => {
                warn!("Failed to create order: {:#}", err);
                OrderOutcome::Failed
            }
        }
    }

    async fn submit_mercadopago(&mut self, checkout: &Checkout) -> OrderOutcome {
        let items = self.payable_items();
        let preference =
            match api::orders::create_preference(self.client.clone(), &self.config, items).await {
                Ok(preference) => preference,
                Err(err) => {
                    warn!("Failed to create payment preference: {:#}", err);
                    return OrderOutcome::Failed;
                }
            };

        let req = self.order_request(checkout, Some(preference.id.clone()));
        match api::orders::create_order(self.client.clone(), &self.config, &req).await {
            Ok(()) => {
                info!("Order with {} lines placed, redirecting to checkout", req.order.len());
                self.lines.clear();
                OrderOutcome::Redirect(preference.init_point)
            }
            Err(err) => {
                // Nothing cancels the preference: it now exists on the
                // provider side with no matching order. Keep its id in the
                // log for reconciliation.
                warn!(
                    "Failed to create order, preference {} is orphaned: {:#}",
                    preference.id, err
                );
                OrderOutcome::Failed
            }
        }
    }

    fn order_request(&self, checkout: &Checkout, preference_id: Option<String>) -> CreateOrderReq {
        CreateOrderReq {
            order: self
                .lines
                .iter()
                .map(|line| OrderLineReq {
                    id: line.product.id,
                    comment: line.comment.clone(),
                })
                .collect(),
            price: self.total(),
            phone_number: checkout.phone_number.clone(),
            address: checkout.fulfilment.address().to_string(),
            payment_method: checkout.payment_method,
            delivery_type: checkout.fulfilment.delivery_type(),
            user_id: GUEST_USER_ID,
            preference_id,
        }
    }

    /// Items the payment provider charges for. Free lines stay out of the
    /// preference but remain part of the order itself.
    fn payable_items(&self) -> Vec<PreferenceItemReq> {
        self.lines
            .iter()
            .filter(|line| line.product.price > 0.0)
            .map(|line| PreferenceItemReq {
                id: line.product.id.to_string(),
                title: line.product.name.clone(),
                currency_id: self.config.currency_id.clone(),
                picture_url: line.product.image_url.clone(),
                unit_price: line.product.price,
                quantity: 1,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> OrderStore {
        OrderStore::new(
            ApiConfig::new("http://localhost:0", "test-vendor"),
            Client::new(),
        )
    }

    fn product(id: i32, price: f32) -> Product {
        Product {
            id,
            name: format!("Product {id}"),
            description: String::new(),
            price,
            image_url: None,
            created_at: Utc::now(),
            created_by: 1,
        }
    }

    #[test]
    fn total_tracks_the_line_list() {
        let mut store = store();
        assert_eq!(store.total(), 0.0);

        let first = store.add_line(&product(1, 100.0), "");
        store.add_line(&product(2, 250.5), "sin sal");
        assert_eq!(store.total(), 350.5);

        store.remove_line(first);
        assert_eq!(store.total(), 250.5);
        assert_eq!(store.lines().len(), 1);
    }

    #[test]
    fn removing_an_unknown_seq_changes_nothing() {
        let mut store = store();
        store.add_line(&product(1, 100.0), "");

        store.remove_line(999);

        assert_eq!(store.lines().len(), 1);
        assert_eq!(store.total(), 100.0);
    }

    #[test]
    fn duplicate_products_stay_independently_removable() {
        let mut store = store();
        let first = store.add_line(&product(1, 100.0), "");
        let second = store.add_line(&product(1, 100.0), "");
        assert_ne!(first, second);
        assert_eq!(store.total(), 200.0);

        store.remove_line(first);

        assert_eq!(store.lines().len(), 1);
        assert_eq!(store.lines()[0].seq, second);
        assert_eq!(store.total(), 100.0);
    }

    #[test]
    fn seqs_are_never_reused() {
        let mut store = store();
        let first = store.add_line(&product(1, 100.0), "");
        store.remove_line(first);

        let next = store.add_line(&product(2, 50.0), "");

        assert!(next > first);
    }

    #[test]
    fn lines_carry_the_guest_account() {
        let mut store = store();
        store.add_line(&product(1, 100.0), "extra queso");

        let line = &store.lines()[0];
        assert_eq!(line.added_by, GUEST_USER_ID);
        assert_eq!(line.comment, "extra queso");
    }

    #[test]
    fn payable_items_skip_free_lines() {
        let mut store = store();
        store.add_line(&product(1, 100.0), "");
        store.add_line(&product(2, 0.0), "");

        let items = store.payable_items();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "1");
        assert_eq!(items[0].quantity, 1);
        assert_eq!(items[0].currency_id, "ARS");
    }
}
