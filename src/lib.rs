//! Client-side state for the plantilla storefront: the vendor's product
//! catalog, the in-progress order, and the order submission protocol against
//! the remote storefront API.
//!
//! The embedding UI constructs one [`stores::CatalogStore`] and one
//! [`stores::OrderStore`] per session, renders from their read accessors,
//! and calls their operations on user events. Network failures never escape
//! the stores; they degrade to stale state or a failure outcome.

pub mod api;
pub mod bootstrap;
pub mod error;
pub mod models;
pub mod stores;
