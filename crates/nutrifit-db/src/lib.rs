//! # nutrifit-db: Database Layer for NutriFit
//!
//! This crate provides database access for the NutriFit store.
//! It uses SQLite for local storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        NutriFit Data Flow                               │
//! │                                                                         │
//! │  Menu action / CLI command (delete-supplement Omega3)                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   nutrifit-db (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repositories │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │               │    │  (embedded)  │  │   │
//! │  │   │               │    │ Supplement    │    │ 001_initial  │  │   │
//! │  │   │ one SQLite    │◄───│ User          │    │ _schema.sql  │  │   │
//! │  │   │ connection    │    │ Cart          │    │              │  │   │
//! │  │   └───────▲───────┘    └───────────────┘    └──────────────┘  │   │
//! │  │           │                                                     │   │
//! │  │   ┌───────┴───────┐    ┌───────────────┐                       │   │
//! │  │   │    lookup     │    │     seed      │                       │   │
//! │  │   │ Identifier →  │    │ fake rows for │                       │   │
//! │  │   │ entity        │    │ demos         │                       │   │
//! │  │   └───────────────┘    └───────────────┘                       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ./nutrifit.db                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection setup and the [`Database`] handle
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Supplement, user, and cart repositories
//! - [`lookup`] - Identifier resolution on [`Database`]
//! - [`seed`] - Demo data generation
//!
//! ## Usage
//!
//! ```rust,ignore
//! use nutrifit_core::Identifier;
//! use nutrifit_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("nutrifit.db")).await?;
//!
//! let omega = db.require_supplement(&Identifier::parse("Omega3")?).await?;
//! db.supplements().delete(omega.id).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod lookup;
pub mod migrations;
pub mod pool;
pub mod repository;
pub mod seed;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use migrations::migration_status;
pub use pool::{Database, DbConfig};
pub use seed::{seed, seed_with_rng, SeedPlan, SeedSummary};

// Repository re-exports for convenience
pub use repository::cart::CartRepository;
pub use repository::supplement::SupplementRepository;
pub use repository::user::UserRepository;
