//! Marketplace: catalog, availability and purchase confirmation

pub mod catalog;
pub mod redemption;

pub use catalog::{Catalog, Offer, is_purchasable};
pub use redemption::{PurchaseHistory, RedemptionError, confirm_purchase};
