//! # Supplement Repository
//!
//! Database operations for supplements.
//!
//! ## Key Operations
//! - CRUD by generated id
//! - Exact name lookup (first match wins)
//! - Stock adjustments
//!
//! ## Price Column
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  supplements.price is REAL dollars                                     │
//! │                                                                         │
//! │  write:  Money(1999) ── as_dollars() ──► 19.99                         │
//! │  read:   19.99 ── CAST(ROUND(price * 100) AS INTEGER) ──► 1999         │
//! │                                                                         │
//! │  Rust never does arithmetic on the float.                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use nutrifit_core::{NewSupplement, Supplement};

macro_rules! supplement_columns {
    () => {
        "id, name, description, CAST(ROUND(price * 100) AS INTEGER) AS price_cents, quantity, category"
    };
}

/// Repository for supplement database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = db.supplements();
///
/// let omega = repo.create(&new_supplement).await?;
/// let same = repo.find_by_name("Omega3").await?;
/// repo.delete(omega.id).await?;
/// ```
#[derive(Debug, Clone)]
pub struct SupplementRepository {
    pool: SqlitePool,
}

impl SupplementRepository {
    /// Creates a new SupplementRepository.
    pub fn new(pool: SqlitePool) -> Self {
        SupplementRepository { pool }
    }

    /// Inserts a new supplement and returns it with its generated id.
    pub async fn create(&self, new: &NewSupplement) -> DbResult<Supplement> {
        debug!(name = %new.name, "Inserting supplement");

        let supplement = sqlx::query_as::<_, Supplement>(concat!(
            "INSERT INTO supplements (name, description, price, quantity, category) ",
            "VALUES (?1, ?2, ?3, ?4, ?5) ",
            "RETURNING ",
            supplement_columns!()
        ))
        .bind(&new.name)
        .bind(&new.description)
        .bind(new.price.as_dollars())
        .bind(new.quantity)
        .bind(&new.category)
        .fetch_one(&self.pool)
        .await?;

        Ok(supplement)
    }

    /// Deletes a supplement.
    ///
    /// Cart entries referring to it keep their snapshot; their
    /// `supplement_id` becomes NULL.
    ///
    /// ## Returns
    /// * `Err(DbError::NotFound)` - No supplement has that id
    pub async fn delete(&self, id: i64) -> DbResult<()> {
        debug!(id, "Deleting supplement");

        let result = sqlx::query("DELETE FROM supplements WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Supplement", id));
        }

        Ok(())
    }

    /// Lists every supplement, ordered by id.
    pub async fn list_all(&self) -> DbResult<Vec<Supplement>> {
        let supplements = sqlx::query_as::<_, Supplement>(concat!(
            "SELECT ",
            supplement_columns!(),
            " FROM supplements ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;

        debug!(count = supplements.len(), "Listed supplements");
        Ok(supplements)
    }

    /// Gets a supplement by its id.
    pub async fn find_by_id(&self, id: i64) -> DbResult<Option<Supplement>> {
        let supplement = sqlx::query_as::<_, Supplement>(concat!(
            "SELECT ",
            supplement_columns!(),
            " FROM supplements WHERE id = ?1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(supplement)
    }

    /// Gets the first supplement (lowest id) with exactly this name.
    pub async fn find_by_name(&self, name: &str) -> DbResult<Option<Supplement>> {
        let supplement = sqlx::query_as::<_, Supplement>(concat!(
            "SELECT ",
            supplement_columns!(),
            " FROM supplements WHERE name = ?1 ORDER BY id LIMIT 1"
        ))
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(supplement)
    }

    /// Changes the stock level by `delta` and returns the updated row.
    ///
    /// Negative deltas are applied as given; stock is not clamped at zero.
    /// A sum outside `i64` is rejected before anything is written, since
    /// SQLite would otherwise store it as REAL.
    ///
    /// ## Returns
    /// * `Err(DbError::NotFound)` - No supplement has that id
    /// * `Err(DbError::OutOfRange)` - The new quantity does not fit
    pub async fn adjust_stock(&self, id: i64, delta: i64) -> DbResult<Supplement> {
        debug!(id, delta, "Adjusting stock");

        let mut tx = self.pool.begin().await?;

        let current: i64 = sqlx::query_scalar("SELECT quantity FROM supplements WHERE id = ?1")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| DbError::not_found("Supplement", id))?;

        let quantity = current.checked_add(delta).ok_or_else(|| DbError::OutOfRange {
            field: "quantity".to_string(),
            reason: format!("{current} + {delta} does not fit in a stock level"),
        })?;

        let supplement = sqlx::query_as::<_, Supplement>(concat!(
            "UPDATE supplements SET quantity = ?2 WHERE id = ?1 RETURNING ",
            supplement_columns!()
        ))
        .bind(id)
        .bind(quantity)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(supplement)
    }

    /// Counts supplements.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM supplements")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Database, DbConfig, DbError};
    use nutrifit_core::{Money, NewSupplement};

    fn omega3() -> NewSupplement {
        NewSupplement {
            name: "Omega3".to_string(),
            description: Some("Fish oil".to_string()),
            price: Money::from_cents(1999),
            quantity: 50,
            category: Some("Recovery".to_string()),
        }
    }

    async fn db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_create_then_find_by_id_returns_inputs() {
        let db = db().await;
        let created = db.supplements().create(&omega3()).await.unwrap();

        let found = db.supplements().find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(found, created);
        assert_eq!(found.name, "Omega3");
        assert_eq!(found.description.as_deref(), Some("Fish oil"));
        assert_eq!(found.price_cents, 1999);
        assert_eq!(found.quantity, 50);
        assert_eq!(found.category.as_deref(), Some("Recovery"));
    }

    #[tokio::test]
    async fn test_prices_survive_the_real_column() {
        let db = db().await;
        for cents in [1, 10, 999, 1999, 4550, 10_000, 123_457] {
            let mut new = omega3();
            new.price = Money::from_cents(cents);
            let created = db.supplements().create(&new).await.unwrap();
            let found = db.supplements().find_by_id(created.id).await.unwrap().unwrap();
            assert_eq!(found.price_cents, cents);
        }
    }

    #[tokio::test]
    async fn test_delete_then_find_is_absent() {
        let db = db().await;
        let created = db.supplements().create(&omega3()).await.unwrap();

        db.supplements().delete(created.id).await.unwrap();
        assert!(db.supplements().find_by_id(created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let db = db().await;
        let err = db.supplements().delete(404).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_find_by_name_is_exact_and_takes_first() {
        let db = db().await;
        let first = db.supplements().create(&omega3()).await.unwrap();
        db.supplements().create(&omega3()).await.unwrap();

        let found = db.supplements().find_by_name("Omega3").await.unwrap().unwrap();
        assert_eq!(found.id, first.id);

        assert!(db.supplements().find_by_name("omega3").await.unwrap().is_none());
        assert!(db.supplements().find_by_name("Omega").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_all_and_count() {
        let db = db().await;
        assert!(db.supplements().list_all().await.unwrap().is_empty());

        db.supplements().create(&omega3()).await.unwrap();
        let mut whey = omega3();
        whey.name = "Whey Pro".to_string();
        db.supplements().create(&whey).await.unwrap();

        let all = db.supplements().list_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[1].name, "Whey Pro");
        assert_eq!(db.supplements().count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_adjust_stock() {
        let db = db().await;
        let created = db.supplements().create(&omega3()).await.unwrap();

        let updated = db.supplements().adjust_stock(created.id, -5).await.unwrap();
        assert_eq!(updated.quantity, 45);

        let updated = db.supplements().adjust_stock(created.id, 10).await.unwrap();
        assert_eq!(updated.quantity, 55);

        let err = db.supplements().adjust_stock(999, 1).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_adjust_stock_overflow_leaves_row_readable() {
        let db = db().await;
        let created = db.supplements().create(&omega3()).await.unwrap();

        let err = db.supplements().adjust_stock(created.id, i64::MAX).await.unwrap_err();
        assert!(matches!(err, DbError::OutOfRange { .. }));
        assert!(err.is_constraint());

        let err = db.supplements().adjust_stock(created.id, i64::MIN).await.unwrap_err();
        assert!(matches!(err, DbError::OutOfRange { .. }));

        let kind: String = sqlx::query_scalar("SELECT typeof(quantity) FROM supplements")
            .fetch_one(db.pool())
            .await
            .unwrap();
        assert_eq!(kind, "integer");

        let all = db.supplements().list_all().await.unwrap();
        assert_eq!(all[0].quantity, 50);
    }
}
