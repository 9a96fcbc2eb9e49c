//! Marketplace catalog and the per-item redemption rule

use serde::Serialize;
use shared::models::{CategoryFilter, MarketplaceItem, Stock};
use shared::types::{Points, RecordId};

/// An item can be bought iff the balance covers it and it is in stock.
pub fn is_purchasable(item: &MarketplaceItem, balance: Points) -> bool {
    balance >= item.points_cost && item.stock.is_available()
}

/// Availability of one item against a balance
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Offer {
    pub item_id: RecordId,
    pub affordable: bool,
    pub in_stock: bool,
    pub purchasable: bool,
    /// Points still missing; 0 when affordable
    pub points_short: Points,
}

impl Offer {
    pub fn evaluate(item: &MarketplaceItem, balance: Points) -> Self {
        let affordable = balance >= item.points_cost;
        let in_stock = item.stock.is_available();
        Self {
            item_id: item.id,
            affordable,
            in_stock,
            purchasable: affordable && in_stock,
            points_short: item.points_cost.saturating_sub(balance),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<MarketplaceItem>,
}

impl Catalog {
    pub fn new(items: Vec<MarketplaceItem>) -> Self {
        Self { items }
    }

    pub fn get(&self, id: RecordId) -> Option<&MarketplaceItem> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn items(&self, filter: CategoryFilter) -> impl Iterator<Item = &MarketplaceItem> {
        self.items
            .iter()
            .filter(move |i| filter.matches(i.category))
    }

    pub fn offer(&self, id: RecordId, balance: Points) -> Option<Offer> {
        self.get(id).map(|item| Offer::evaluate(item, balance))
    }

    /// Take one unit off a limited item. Unlimited stock is unaffected.
    pub(crate) fn take_one(&mut self, id: RecordId) {
        if let Some(item) = self.items.iter_mut().find(|i| i.id == id)
            && let Stock::Limited(n) = item.stock
        {
            item.stock = Stock::Limited(n.saturating_sub(1));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{ItemCategory, Tone};

    fn item(id: RecordId, cost: Points, stock: Stock, category: ItemCategory) -> MarketplaceItem {
        MarketplaceItem {
            id,
            name: format!("Item {id}"),
            description: String::new(),
            category,
            points_cost: cost,
            stock,
            tier: None,
            tone: Tone::Purple,
        }
    }

    #[test]
    fn test_purchasable_needs_balance_and_stock() {
        let limited = item(1, 100, Stock::Limited(3), ItemCategory::Food);
        let empty = item(2, 100, Stock::Limited(0), ItemCategory::Food);
        let unlimited = item(3, 100, Stock::Unlimited, ItemCategory::GiftCards);

        assert!(is_purchasable(&limited, 100));
        assert!(!is_purchasable(&limited, 99));
        assert!(!is_purchasable(&empty, 1000));
        assert!(is_purchasable(&unlimited, 450));
    }

    #[test]
    fn test_offer_reports_shortfall() {
        let offer = Offer::evaluate(&item(2, 500, Stock::Limited(5), ItemCategory::TimeOff), 450);
        assert!(!offer.affordable);
        assert!(offer.in_stock);
        assert!(!offer.purchasable);
        assert_eq!(offer.points_short, 50);

        let offer = Offer::evaluate(&item(5, 100, Stock::Unlimited, ItemCategory::GiftCards), 450);
        assert!(offer.purchasable);
        assert_eq!(offer.points_short, 0);
    }

    #[test]
    fn test_category_filter() {
        let catalog = Catalog::new(vec![
            item(1, 50, Stock::Limited(25), ItemCategory::Food),
            item(5, 100, Stock::Unlimited, ItemCategory::GiftCards),
            item(6, 200, Stock::Unlimited, ItemCategory::GiftCards),
        ]);
        assert_eq!(catalog.items(CategoryFilter::All).count(), 3);
        let ids: Vec<RecordId> = catalog
            .items(CategoryFilter::Only(ItemCategory::GiftCards))
            .map(|i| i.id)
            .collect();
        assert_eq!(ids, vec![5, 6]);
        assert_eq!(
            catalog
                .items(CategoryFilter::Only(ItemCategory::Experience))
                .count(),
            0
        );
    }

    #[test]
    fn test_take_one() {
        let mut catalog = Catalog::new(vec![
            item(1, 50, Stock::Limited(1), ItemCategory::Food),
            item(5, 100, Stock::Unlimited, ItemCategory::GiftCards),
        ]);
        catalog.take_one(1);
        catalog.take_one(1);
        catalog.take_one(5);
        assert_eq!(catalog.get(1).unwrap().stock, Stock::Limited(0));
        assert_eq!(catalog.get(5).unwrap().stock, Stock::Unlimited);
    }
}
