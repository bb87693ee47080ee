//! # nutrifit-core: Pure Domain Logic for NutriFit
//!
//! Everything the supplement store knows that does not touch a database or a
//! terminal.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        NutriFit Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    apps/cli (nutrifit)                          │   │
//! │  │    clap commands ──► interactive menus ──► console output       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ nutrifit-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌────────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │ identifier │  │   menu    │  │   │
//! │  │   │Supplement │  │   Money   │  │  ById      │  │ MenuState │  │   │
//! │  │   │User, Cart │  │           │  │  ByName    │  │ Transition│  │   │
//! │  │   └───────────┘  └───────────┘  └────────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO TERMINAL                            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                nutrifit-db (Database Layer)                     │   │
//! │  │          SQLite queries, migrations, repositories, seeding      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Supplement, User, CartEntry and their insert payloads
//! - [`money`] - Money type with integer arithmetic
//! - [`identifier`] - Id-or-name references, decided at the input boundary
//! - [`validation`] - Prompt input coercion
//! - [`menu`] - Interactive menu state machine
//! - [`cart`] - Cart totals over priced snapshots
//! - [`error`] - Domain error types

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod identifier;
pub mod menu;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, ValidationError};
pub use identifier::Identifier;
pub use money::Money;
pub use types::*;
