//! # Cart Repository
//!
//! Database operations for cart entries.
//!
//! ## Snapshot Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  add to cart                                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  NewCartEntry::snapshot(user, supplement, qty)                         │
//! │       │   copies user.name, supplement.name, supplement.price, now     │
//! │       ▼                                                                 │
//! │  INSERT INTO cart (...)                                                │
//! │       │   user_id / supplement_id are checked by foreign keys          │
//! │       ▼                                                                 │
//! │  later: DELETE FROM supplements WHERE id = ...                         │
//! │       │   cart.supplement_id → NULL                                    │
//! │       ▼                                                                 │
//! │  snapshot columns unchanged                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use nutrifit_core::{CartEntry, NewCartEntry};

macro_rules! cart_columns {
    () => {
        "id, user_id, supplement_id, quantity, user_name, supplement_name, \
         CAST(ROUND(supplement_price * 100) AS INTEGER) AS supplement_price_cents, added_at"
    };
}

/// Repository for cart database operations.
#[derive(Debug, Clone)]
pub struct CartRepository {
    pool: SqlitePool,
}

impl CartRepository {
    /// Creates a new CartRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CartRepository { pool }
    }

    /// Inserts a cart entry.
    ///
    /// ## Returns
    /// * `Ok(CartEntry)` - Inserted entry with generated id
    /// * `Err(DbError::ForeignKeyViolation)` - User or supplement id doesn't exist
    pub async fn create(&self, new: &NewCartEntry) -> DbResult<CartEntry> {
        debug!(
            user_id = new.user_id,
            supplement_id = new.supplement_id,
            quantity = new.quantity,
            "Inserting cart entry"
        );

        let entry = sqlx::query_as::<_, CartEntry>(concat!(
            "INSERT INTO cart (user_id, supplement_id, quantity, user_name, ",
            "supplement_name, supplement_price, added_at) ",
            "VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7) ",
            "RETURNING ",
            cart_columns!()
        ))
        .bind(new.user_id)
        .bind(new.supplement_id)
        .bind(new.quantity)
        .bind(&new.user_name)
        .bind(&new.supplement_name)
        .bind(new.supplement_price.as_dollars())
        .bind(new.added_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(entry)
    }

    /// Deletes a single cart entry.
    pub async fn delete(&self, id: i64) -> DbResult<()> {
        debug!(id, "Deleting cart entry");

        let result = sqlx::query("DELETE FROM cart WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Cart entry", id));
        }

        Ok(())
    }

    /// Lists every cart entry, ordered by id.
    pub async fn list_all(&self) -> DbResult<Vec<CartEntry>> {
        let entries = sqlx::query_as::<_, CartEntry>(concat!(
            "SELECT ",
            cart_columns!(),
            " FROM cart ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }

    /// Gets a cart entry by id.
    pub async fn find_by_id(&self, id: i64) -> DbResult<Option<CartEntry>> {
        let entry = sqlx::query_as::<_, CartEntry>(concat!(
            "SELECT ",
            cart_columns!(),
            " FROM cart WHERE id = ?1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(entry)
    }

    /// Lists the entries of one user.
    pub async fn list_for_user(&self, user_id: i64) -> DbResult<Vec<CartEntry>> {
        let entries = sqlx::query_as::<_, CartEntry>(concat!(
            "SELECT ",
            cart_columns!(),
            " FROM cart WHERE user_id = ?1 ORDER BY id"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }

    /// Lists the entries for a (user, supplement) pair.
    pub async fn list_by_pair(&self, user_id: i64, supplement_id: i64) -> DbResult<Vec<CartEntry>> {
        let entries = sqlx::query_as::<_, CartEntry>(concat!(
            "SELECT ",
            cart_columns!(),
            " FROM cart WHERE user_id = ?1 AND supplement_id = ?2 ORDER BY id"
        ))
        .bind(user_id)
        .bind(supplement_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }

    /// Deletes every entry for a (user, supplement) pair.
    ///
    /// ## Returns
    /// * `Ok(n)` - Number of entries removed (at least 1)
    /// * `Err(DbError::NotFound)` - The pair has no entries
    pub async fn delete_by_pair(&self, user_id: i64, supplement_id: i64) -> DbResult<u64> {
        debug!(user_id, supplement_id, "Deleting cart entries by pair");

        let result = sqlx::query("DELETE FROM cart WHERE user_id = ?1 AND supplement_id = ?2")
            .bind(user_id)
            .bind(supplement_id)
            .execute(&self.pool)
            .await?;

        match result.rows_affected() {
            0 => Err(DbError::not_found(
                "Cart entry",
                format!("user {user_id} / supplement {supplement_id}"),
            )),
            n => Ok(n),
        }
    }

    /// Counts cart entries.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM cart")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Database, DbConfig, DbError};
    use chrono::Utc;
    use nutrifit_core::{Money, NewCartEntry, NewSupplement, NewUser, Supplement, User};

    async fn fixture() -> (Database, User, Supplement) {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let alice = db
            .users()
            .create(&NewUser {
                name: "Alice".to_string(),
                email: "a@x.com".to_string(),
            })
            .await
            .unwrap();
        let omega = db
            .supplements()
            .create(&NewSupplement {
                name: "Omega3".to_string(),
                description: None,
                price: Money::from_cents(1999),
                quantity: 50,
                category: Some("Recovery".to_string()),
            })
            .await
            .unwrap();
        (db, alice, omega)
    }

    #[tokio::test]
    async fn test_create_stores_snapshot() {
        let (db, alice, omega) = fixture().await;

        let entry = db
            .cart()
            .create(&NewCartEntry::snapshot(&alice, &omega, 2))
            .await
            .unwrap();

        assert_eq!(entry.user_id, Some(alice.id));
        assert_eq!(entry.supplement_id, Some(omega.id));
        assert_eq!(entry.quantity, 2);
        assert_eq!(entry.user_name, "Alice");
        assert_eq!(entry.supplement_name, "Omega3");
        assert_eq!(entry.supplement_price_cents, 1999);

        let found = db.cart().find_by_id(entry.id).await.unwrap().unwrap();
        assert_eq!(found, entry);
    }

    #[tokio::test]
    async fn test_deleting_supplement_keeps_snapshot() {
        let (db, alice, omega) = fixture().await;
        let entry = db
            .cart()
            .create(&NewCartEntry::snapshot(&alice, &omega, 2))
            .await
            .unwrap();

        db.supplements().delete(omega.id).await.unwrap();

        let after = db.cart().find_by_id(entry.id).await.unwrap().unwrap();
        assert_eq!(after.supplement_id, None);
        assert_eq!(after.supplement_price_cents, 1999);
        assert_eq!(after.supplement_name, "Omega3");
        assert_eq!(after.quantity, 2);
    }

    #[tokio::test]
    async fn test_deleting_user_keeps_snapshot() {
        let (db, alice, omega) = fixture().await;
        let entry = db
            .cart()
            .create(&NewCartEntry::snapshot(&alice, &omega, 1))
            .await
            .unwrap();

        db.users().delete(alice.id).await.unwrap();

        let after = db.cart().find_by_id(entry.id).await.unwrap().unwrap();
        assert_eq!(after.user_id, None);
        assert_eq!(after.user_name, "Alice");
    }

    #[tokio::test]
    async fn test_missing_reference_is_rejected() {
        let (db, alice, mut omega) = fixture().await;
        omega.id = 9999;

        let err = db
            .cart()
            .create(&NewCartEntry::snapshot(&alice, &omega, 1))
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::ForeignKeyViolation { .. }));
        assert_eq!(db.cart().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_pair_listing_and_bulk_delete() {
        let (db, alice, omega) = fixture().await;
        let bob = db
            .users()
            .create(&NewUser {
                name: "Bob".to_string(),
                email: "b@x.com".to_string(),
            })
            .await
            .unwrap();

        for (user, qty) in [(&alice, 1), (&alice, 3), (&bob, 2)] {
            db.cart()
                .create(&NewCartEntry::snapshot(user, &omega, qty))
                .await
                .unwrap();
        }

        assert_eq!(db.cart().list_by_pair(alice.id, omega.id).await.unwrap().len(), 2);
        assert_eq!(db.cart().list_for_user(bob.id).await.unwrap().len(), 1);

        let removed = db.cart().delete_by_pair(alice.id, omega.id).await.unwrap();
        assert_eq!(removed, 2);
        assert_eq!(db.cart().count().await.unwrap(), 1);

        let err = db.cart().delete_by_pair(alice.id, omega.id).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_delete_single_entry() {
        let (db, alice, omega) = fixture().await;
        let entry = db
            .cart()
            .create(&NewCartEntry::snapshot(&alice, &omega, 1))
            .await
            .unwrap();

        db.cart().delete(entry.id).await.unwrap();
        assert!(db.cart().find_by_id(entry.id).await.unwrap().is_none());
        assert!(db.cart().delete(entry.id).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_added_at_round_trips() {
        let (db, alice, omega) = fixture().await;
        let mut new = NewCartEntry::snapshot(&alice, &omega, 1);
        new.added_at = Utc::now();

        let entry = db.cart().create(&new).await.unwrap();
        assert_eq!(entry.added_at.timestamp(), new.added_at.timestamp());
    }
}
