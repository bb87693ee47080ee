//! # Identifier
//!
//! Operator-supplied references to a user or supplement.
//!
//! ## Decided Once, at the Input Boundary
//! ```text
//! "7"       ──► Identifier::ById(7)          (never tried as a name)
//! "Omega3"  ──► Identifier::ByName("Omega3") (exact, case-sensitive)
//! " 7 "     ──► Identifier::ById(7)          (input is trimmed)
//! ""        ──► ValidationError::Required
//! ```
//!
//! A name made only of digits (e.g. a user called "42") is therefore not
//! reachable by name; use its id instead.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// How an entity is referenced.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Identifier {
    /// Lookup by generated row id.
    ById(i64),
    /// Lookup by exact name (users fall back to exact email).
    ByName(String),
}

impl Identifier {
    /// Parses operator input into an identifier.
    ///
    /// ## Example
    /// ```rust
    /// use nutrifit_core::Identifier;
    ///
    /// assert_eq!(Identifier::parse("7").unwrap(), Identifier::ById(7));
    /// assert_eq!(
    ///     Identifier::parse("Omega3").unwrap(),
    ///     Identifier::ByName("Omega3".to_string())
    /// );
    /// assert!(Identifier::parse("  ").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let raw = input.trim();

        if raw.is_empty() {
            return Err(ValidationError::required("identifier"));
        }

        if raw.bytes().all(|b| b.is_ascii_digit()) {
            return raw
                .parse::<i64>()
                .map(Identifier::ById)
                .map_err(|_| ValidationError::InvalidFormat {
                    field: "identifier".to_string(),
                    reason: format!("id {raw} is out of range"),
                });
        }

        Ok(Identifier::ByName(raw.to_string()))
    }
}

impl FromStr for Identifier {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Identifier::parse(s)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::ById(id) => write!(f, "{id}"),
            Identifier::ByName(name) => write!(f, "{name}"),
        }
    }
}
