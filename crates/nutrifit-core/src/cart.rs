//! # Cart Totals
//!
//! Pure arithmetic over stored cart entries.
//!
//! Totals always use the priced snapshot on each entry, never the current
//! supplement price:
//! ```text
//! Omega3 @ $19.99 (snapshot) × 2 ──► $39.98
//! Whey   @ $45.00 (snapshot) × 1 ──► $45.00
//!                                    ───────
//!                       Alice total  $84.98
//! ```
//!
//! Quantities are unbounded, so every sum is checked and an overflow is
//! `CoreError::AmountOverflow` rather than a wrapped total.

use serde::Serialize;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::CartEntry;

/// Totals for one user's cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartTotals {
    /// `None` when the user row has since been deleted.
    pub user_id: Option<i64>,
    /// Name from the snapshot.
    pub user_name: String,
    pub item_count: usize,
    pub total_quantity: i64,
    pub total: Money,
}

impl CartTotals {
    fn empty(entry: &CartEntry) -> Self {
        CartTotals {
            user_id: entry.user_id,
            user_name: entry.user_name.clone(),
            item_count: 0,
            total_quantity: 0,
            total: Money::zero(),
        }
    }

    fn push(&mut self, entry: &CartEntry) -> CoreResult<()> {
        let overflow = || CoreError::AmountOverflow(format!("Cart total for {}", self.user_name));

        let line = entry.line_total()?;
        self.total_quantity = self
            .total_quantity
            .checked_add(entry.quantity)
            .ok_or_else(overflow)?;
        self.total = self.total.checked_add(line).ok_or_else(overflow)?;
        self.item_count += 1;
        Ok(())
    }
}

/// Groups entries per user, keeping first-seen order.
///
/// Entries are grouped by `user_id` and, for orphaned entries, by the
/// snapshot name.
pub fn totals_by_user(entries: &[CartEntry]) -> CoreResult<Vec<CartTotals>> {
    let mut groups: Vec<CartTotals> = Vec::new();

    for entry in entries {
        let existing = groups.iter_mut().find(|g| match (g.user_id, entry.user_id) {
            (Some(a), Some(b)) => a == b,
            (None, None) => g.user_name == entry.user_name,
            _ => false,
        });

        match existing {
            Some(group) => group.push(entry)?,
            None => {
                let mut group = CartTotals::empty(entry);
                group.push(entry)?;
                groups.push(group);
            }
        }
    }

    Ok(groups)
}

/// Grand total over all entries.
pub fn grand_total(entries: &[CartEntry]) -> CoreResult<Money> {
    entries.iter().try_fold(Money::zero(), |acc, entry| {
        acc.checked_add(entry.line_total()?)
            .ok_or_else(|| CoreError::AmountOverflow("Grand total".to_string()))
    })
}
