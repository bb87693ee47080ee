//! # Repository Module
//!
//! One repository per persisted entity.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Entity Access Layer                                  │
//! │                                                                         │
//! │  Command handler / menu action                                         │
//! │       │                                                                 │
//! │       │  db.supplements().find_by_name("Omega3")                       │
//! │       ▼                                                                 │
//! │  SupplementRepository   UserRepository      CartRepository             │
//! │  ├── create             ├── create          ├── create (snapshot)      │
//! │  ├── delete             ├── delete          ├── delete                 │
//! │  ├── list_all           ├── list_all        ├── list_all               │
//! │  ├── find_by_id         ├── find_by_id      ├── find_by_id             │
//! │  ├── find_by_name       ├── find_by_name    ├── list_for_user          │
//! │  └── adjust_stock       └── find_by_email   ├── list_by_pair           │
//! │                                             └── delete_by_pair         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite (one connection)                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each repository holds a clone of the pool handle; cloning is cheap and
//! every clone shares the same underlying connection.

pub mod cart;
pub mod supplement;
pub mod user;
