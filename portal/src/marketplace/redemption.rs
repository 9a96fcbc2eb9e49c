//! Purchase confirmation
//!
//! Confirming re-checks the item against the live balance, debits the
//! ledger, and only then appends a pending purchase record. Any failure
//! leaves ledger, catalog and history exactly as they were.

use chrono::NaiveDate;
use shared::error::{AppError, ErrorCode};
use shared::models::{PointsReason, Purchase, PurchaseStatus};
use shared::types::{Points, RecordId};
use thiserror::Error;

use super::catalog::Catalog;
use crate::core::StockPolicy;
use crate::records::IdSequence;
use crate::rewards::{LedgerError, PointsLedger};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RedemptionError {
    #[error("Marketplace item not found: {0}")]
    ItemNotFound(RecordId),

    #[error("{0} is out of stock")]
    OutOfStock(String),

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

impl From<RedemptionError> for AppError {
    fn from(err: RedemptionError) -> Self {
        match err {
            RedemptionError::ItemNotFound(id) => {
                AppError::new(ErrorCode::ItemNotFound).with_detail("item_id", id)
            }
            RedemptionError::OutOfStock(name) => AppError::with_message(
                ErrorCode::ItemOutOfStock,
                format!("{} is out of stock", name),
            ),
            RedemptionError::Ledger(e) => e.into(),
        }
    }
}

/// Purchase history, newest first
#[derive(Debug, Clone)]
pub struct PurchaseHistory {
    purchases: Vec<Purchase>,
    ids: IdSequence,
}

impl PurchaseHistory {
    pub fn new(purchases: Vec<Purchase>) -> Self {
        let ids = IdSequence::after(purchases.iter().map(|p| p.id));
        Self { purchases, ids }
    }

    pub fn all(&self) -> &[Purchase] {
        &self.purchases
    }

    pub fn total_spent(&self) -> Points {
        self.purchases.iter().map(|p| p.points_cost).sum()
    }

    pub fn pending_count(&self) -> usize {
        self.purchases
            .iter()
            .filter(|p| p.status == PurchaseStatus::Pending)
            .count()
    }
}

/// Redeem `item_id` against `ledger`.
pub fn confirm_purchase(
    catalog: &mut Catalog,
    history: &mut PurchaseHistory,
    ledger: &mut PointsLedger,
    item_id: RecordId,
    stock_policy: StockPolicy,
    date: NaiveDate,
) -> Result<Purchase, RedemptionError> {
    let item = catalog
        .get(item_id)
        .ok_or(RedemptionError::ItemNotFound(item_id))?;

    if !item.stock.is_available() {
        tracing::warn!(item = %item.name, "Purchase rejected: out of stock");
        return Err(RedemptionError::OutOfStock(item.name.clone()));
    }

    let (name, cost) = (item.name.clone(), item.points_cost);
    ledger.debit(
        cost,
        PointsReason::MarketplacePurchase {
            item_name: name.clone(),
        },
    )?;

    if stock_policy == StockPolicy::DecrementOnPurchase {
        catalog.take_one(item_id);
    }

    let purchase = Purchase {
        id: history.ids.next_id(),
        item_name: name,
        points_cost: cost,
        date,
        status: PurchaseStatus::Pending,
    };
    history.purchases.insert(0, purchase.clone());

    tracing::info!(
        purchase_id = purchase.id,
        item = %purchase.item_name,
        cost,
        balance = ledger.balance(),
        "Purchase confirmed"
    );
    Ok(purchase)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{ItemCategory, MarketplaceItem, Stock, Tone};

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 5).unwrap()
    }

    fn catalog() -> Catalog {
        let item = |id, name: &str, cost, stock| MarketplaceItem {
            id,
            name: name.to_string(),
            description: String::new(),
            category: ItemCategory::GiftCards,
            points_cost: cost,
            stock,
            tier: None,
            tone: Tone::Red,
        };
        Catalog::new(vec![
            item(2, "Extra Day Off", 500, Stock::Limited(5)),
            item(5, "Gift Card $25", 100, Stock::Unlimited),
            item(8, "Premium Parking", 150, Stock::Limited(1)),
            item(10, "Sold Out", 10, Stock::Limited(0)),
        ])
    }

    fn seeded_history() -> PurchaseHistory {
        PurchaseHistory::new(vec![Purchase {
            id: 2,
            item_name: "Gift Card $25".to_string(),
            points_cost: 100,
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            status: PurchaseStatus::Redeemed,
        }])
    }

    #[test]
    fn test_insufficient_points_changes_nothing() {
        let mut catalog = catalog();
        let mut history = seeded_history();
        let mut ledger = PointsLedger::new(450);

        let err = confirm_purchase(
            &mut catalog,
            &mut history,
            &mut ledger,
            2,
            StockPolicy::Static,
            date(),
        )
        .unwrap_err();

        assert!(matches!(err, RedemptionError::Ledger(_)));
        assert_eq!(ledger.balance(), 450);
        assert_eq!(history.all().len(), 1);
        assert!(ledger.history().is_empty());
    }

    #[test]
    fn test_success_appends_pending_purchase() {
        let mut catalog = catalog();
        let mut history = seeded_history();
        let mut ledger = PointsLedger::new(450);

        let purchase = confirm_purchase(
            &mut catalog,
            &mut history,
            &mut ledger,
            5,
            StockPolicy::Static,
            date(),
        )
        .unwrap();

        assert_eq!(ledger.balance(), 350);
        assert_eq!(purchase.status, PurchaseStatus::Pending);
        assert_eq!(purchase.points_cost, 100);
        assert_eq!(purchase.date, date());
        assert_eq!(purchase.id, 3);
        assert_eq!(history.all().len(), 2);
        assert_eq!(history.all()[0], purchase);
        assert_eq!(history.pending_count(), 1);
        assert_eq!(history.total_spent(), 200);
    }

    #[test]
    fn test_static_stock_is_untouched() {
        let mut catalog = catalog();
        let mut history = seeded_history();
        let mut ledger = PointsLedger::new(1000);

        confirm_purchase(&mut catalog, &mut history, &mut ledger, 8, StockPolicy::Static, date())
            .unwrap();
        confirm_purchase(&mut catalog, &mut history, &mut ledger, 8, StockPolicy::Static, date())
            .unwrap();
        assert_eq!(catalog.get(8).unwrap().stock, Stock::Limited(1));
    }

    #[test]
    fn test_decrement_policy_sells_out() {
        let mut catalog = catalog();
        let mut history = seeded_history();
        let mut ledger = PointsLedger::new(1000);

        confirm_purchase(
            &mut catalog,
            &mut history,
            &mut ledger,
            8,
            StockPolicy::DecrementOnPurchase,
            date(),
        )
        .unwrap();
        assert_eq!(catalog.get(8).unwrap().stock, Stock::Limited(0));

        let err = confirm_purchase(
            &mut catalog,
            &mut history,
            &mut ledger,
            8,
            StockPolicy::DecrementOnPurchase,
            date(),
        )
        .unwrap_err();
        assert_eq!(err, RedemptionError::OutOfStock("Premium Parking".to_string()));
        assert_eq!(ledger.balance(), 850);
    }

    #[test]
    fn test_out_of_stock_and_unknown_item() {
        let mut catalog = catalog();
        let mut history = seeded_history();
        let mut ledger = PointsLedger::new(1000);

        let err = confirm_purchase(
            &mut catalog,
            &mut history,
            &mut ledger,
            10,
            StockPolicy::Static,
            date(),
        )
        .unwrap_err();
        assert_eq!(AppError::from(err).code, ErrorCode::ItemOutOfStock);

        let err = confirm_purchase(
            &mut catalog,
            &mut history,
            &mut ledger,
            99,
            StockPolicy::Static,
            date(),
        )
        .unwrap_err();
        assert_eq!(err, RedemptionError::ItemNotFound(99));
        assert_eq!(ledger.balance(), 1000);
    }
}
