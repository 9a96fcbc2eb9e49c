//! Points Ledger
//!
//! Owns the session's single points balance. Every other module reads the
//! balance through here, and only `credit` / `debit` change it.

use shared::error::AppError;
use shared::models::{LedgerEntry, LedgerEntryKind, PointsReason};
use shared::types::Points;
use shared::util::now_millis;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("Insufficient points: required {required}, available {available}")]
    InsufficientPoints { required: Points, available: Points },
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::InsufficientPoints {
                required,
                available,
            } => AppError::insufficient_points(required, available),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PointsLedger {
    balance: Points,
    history: Vec<LedgerEntry>,
}

impl PointsLedger {
    pub fn new(initial_balance: Points) -> Self {
        Self {
            balance: initial_balance,
            history: Vec::new(),
        }
    }

    pub fn balance(&self) -> Points {
        self.balance
    }

    pub fn can_afford(&self, amount: Points) -> bool {
        self.balance >= amount
    }

    /// Add points. Always succeeds; saturates at `Points::MAX`.
    pub fn credit(&mut self, amount: Points, reason: PointsReason) -> Points {
        self.balance = self.balance.saturating_add(amount);
        tracing::info!(
            amount,
            balance = self.balance,
            reason = %reason.describe(),
            "Points credited"
        );
        self.record(LedgerEntryKind::Credit, amount, reason);
        self.balance
    }

    /// Spend points if the balance covers `amount`.
    ///
    /// On failure the balance is untouched and nothing is recorded.
    pub fn debit(&mut self, amount: Points, reason: PointsReason) -> Result<Points, LedgerError> {
        if !self.can_afford(amount) {
            tracing::warn!(
                amount,
                balance = self.balance,
                reason = %reason.describe(),
                "Debit rejected: insufficient points"
            );
            return Err(LedgerError::InsufficientPoints {
                required: amount,
                available: self.balance,
            });
        }
        self.balance -= amount;
        tracing::info!(
            amount,
            balance = self.balance,
            reason = %reason.describe(),
            "Points debited"
        );
        self.record(LedgerEntryKind::Debit, amount, reason);
        Ok(self.balance)
    }

    fn record(&mut self, kind: LedgerEntryKind, amount: Points, reason: PointsReason) {
        self.history.push(LedgerEntry {
            kind,
            amount,
            reason,
            balance_after: self.balance,
            at: now_millis(),
        });
    }

    /// All committed movements, oldest first
    pub fn history(&self) -> &[LedgerEntry] {
        &self.history
    }

    /// Newest movements first, at most `limit`
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &LedgerEntry> {
        self.history.iter().rev().take(limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::error::ErrorCode;

    #[test]
    fn test_credit_adds() {
        let mut ledger = PointsLedger::new(450);
        assert_eq!(ledger.credit(15, PointsReason::Manual), 465);
        assert_eq!(ledger.credit(0, PointsReason::Manual), 465);
        assert_eq!(ledger.balance(), 465);
    }

    #[test]
    fn test_credit_saturates() {
        let mut ledger = PointsLedger::new(Points::MAX - 1);
        assert_eq!(ledger.credit(10, PointsReason::Manual), Points::MAX);
    }

    #[test]
    fn test_debit_iff_covered() {
        for (balance, amount) in [(450, 100), (450, 450), (450, 451), (0, 0), (0, 1), (10, 500)] {
            let mut ledger = PointsLedger::new(balance);
            let result = ledger.debit(amount, PointsReason::Manual);
            if amount <= balance {
                assert_eq!(result, Ok(balance - amount));
                assert_eq!(ledger.balance(), balance - amount);
            } else {
                assert_eq!(
                    result,
                    Err(LedgerError::InsufficientPoints {
                        required: amount,
                        available: balance
                    })
                );
                assert_eq!(ledger.balance(), balance);
            }
        }
    }

    #[test]
    fn test_failed_debit_not_recorded() {
        let mut ledger = PointsLedger::new(450);
        assert!(ledger.debit(500, PointsReason::Manual).is_err());
        assert!(ledger.history().is_empty());

        ledger.debit(100, PointsReason::Manual).unwrap();
        assert_eq!(ledger.history().len(), 1);
        assert_eq!(ledger.history()[0].kind, LedgerEntryKind::Debit);
        assert_eq!(ledger.history()[0].balance_after, 350);
    }

    #[test]
    fn test_recent_is_newest_first() {
        let mut ledger = PointsLedger::new(0);
        ledger.credit(1, PointsReason::Manual);
        ledger.credit(2, PointsReason::Manual);
        ledger.credit(3, PointsReason::Manual);
        let amounts: Vec<Points> = ledger.recent(2).map(|e| e.amount).collect();
        assert_eq!(amounts, vec![3, 2]);
    }

    #[test]
    fn test_error_maps_to_insufficient_points_code() {
        let err: AppError = LedgerError::InsufficientPoints {
            required: 500,
            available: 450,
        }
        .into();
        assert_eq!(err.code, ErrorCode::InsufficientPoints);
    }
}
