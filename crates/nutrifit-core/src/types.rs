//! # Domain Types
//!
//! The three persisted entities and their insert payloads.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌──────────────────────┐  │
//! │  │   Supplement    │   │      User       │   │      CartEntry       │  │
//! │  │  ─────────────  │   │  ─────────────  │   │  ──────────────────  │  │
//! │  │  id             │◄┐ │  id             │◄──│  user_id (FK, weak)  │  │
//! │  │  name           │ └─┼─────────────────┼───│  supplement_id (FK)  │  │
//! │  │  price_cents    │   │  name           │   │  quantity            │  │
//! │  │  quantity       │   │  email (unique) │   │  ── priced snapshot ─│  │
//! │  │  category       │   └─────────────────┘   │  user_name           │  │
//! │  └─────────────────┘                         │  supplement_name     │  │
//! │                                              │  supplement_price    │  │
//! │                                              │  added_at            │  │
//! │                                              └──────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Priced Snapshot
//! A cart entry copies the user's name and the supplement's name and price
//! at the moment it is added. Later edits or deletions of the referenced rows
//! never touch the snapshot; a deleted reference becomes `None`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;

// =============================================================================
// Supplement
// =============================================================================

/// A supplement carried by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Supplement {
    /// Generated row id.
    pub id: i64,

    /// Display name. Not unique; lookups take the first match.
    pub name: String,

    /// Free-text description.
    pub description: Option<String>,

    /// Price in cents (stored as REAL dollars).
    pub price_cents: i64,

    /// Units in stock.
    pub quantity: i64,

    /// Category such as "Protein" or "Recovery".
    pub category: Option<String>,
}

impl Supplement {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

/// Attributes for a new supplement (id is generated by the store).
#[derive(Debug, Clone, PartialEq)]
pub struct NewSupplement {
    pub name: String,
    pub description: Option<String>,
    pub price: Money,
    pub quantity: i64,
    pub category: Option<String>,
}

// =============================================================================
// User
// =============================================================================

/// A store customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct User {
    pub id: i64,
    pub name: String,
    /// Unique across all users (store constraint).
    pub email: String,
}

/// Attributes for a new user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

// =============================================================================
// Cart Entry
// =============================================================================

/// One line of a user's cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct CartEntry {
    pub id: i64,

    /// Referenced user; `None` once that user has been deleted.
    pub user_id: Option<i64>,

    /// Referenced supplement; `None` once that supplement has been deleted.
    pub supplement_id: Option<i64>,

    pub quantity: i64,

    /// User name at time of adding (frozen).
    pub user_name: String,

    /// Supplement name at time of adding (frozen).
    pub supplement_name: String,

    /// Supplement price in cents at time of adding (frozen).
    pub supplement_price_cents: i64,

    /// When the snapshot was taken.
    pub added_at: DateTime<Utc>,
}

impl CartEntry {
    /// Returns the frozen unit price.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.supplement_price_cents)
    }

    /// Calculates the line total (snapshot price × quantity).
    ///
    /// Quantities are not range-checked on input, so the product can
    /// exceed `i64` cents; that is `CoreError::AmountOverflow`.
    pub fn line_total(&self) -> CoreResult<Money> {
        self.unit_price()
            .checked_mul(self.quantity)
            .ok_or_else(|| {
                CoreError::AmountOverflow(format!("Line total for cart entry {}", self.id))
            })
    }
}

/// A cart entry ready to insert, snapshot included.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCartEntry {
    pub user_id: i64,
    pub supplement_id: i64,
    pub quantity: i64,
    pub user_name: String,
    pub supplement_name: String,
    pub supplement_price: Money,
    pub added_at: DateTime<Utc>,
}

impl NewCartEntry {
    /// Builds a cart entry from the resolved user and supplement.
    ///
    /// ## Price Freezing
    /// The supplement price is captured at this moment. If the supplement
    /// changes or disappears afterwards, the entry keeps this price.
    pub fn snapshot(user: &User, supplement: &Supplement, quantity: i64) -> Self {
        NewCartEntry {
            user_id: user.id,
            supplement_id: supplement.id,
            quantity,
            user_name: user.name.clone(),
            supplement_name: supplement.name.clone(),
            supplement_price: supplement.price(),
            added_at: Utc::now(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
