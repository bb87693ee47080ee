//! # Validation Module
//!
//! Turns raw prompt text into typed values.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Prompt / clap option (CLI)                                   │
//! │  └── Raw text, trimmed                                                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Required fields present                                           │
//! │  └── Type coercion: integer, decimal price                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── NOT NULL constraints                                              │
//! │  ├── UNIQUE users.email                                                │
//! │  └── Foreign key constraints                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Ranges are not checked here: a negative stock level is stored as typed.

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{NewSupplement, NewUser};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Stock level used when the quantity prompt is left blank.
pub const DEFAULT_STOCK_QUANTITY: i64 = 0;

/// Cart quantity used when the quantity prompt is left blank.
pub const DEFAULT_CART_QUANTITY: i64 = 1;

// =============================================================================
// Field Parsers
// =============================================================================

/// Returns the trimmed text, or `Required` if it is blank.
pub fn required_text(field: &str, input: &str) -> ValidationResult<String> {
    let value = input.trim();
    if value.is_empty() {
        return Err(ValidationError::required(field));
    }
    Ok(value.to_string())
}

/// Returns the trimmed text, or `None` if it is blank.
pub fn optional_text(input: &str) -> Option<String> {
    let value = input.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Parses a price such as `19.99`.
///
/// ## Example
/// ```rust
/// use nutrifit_core::validation::parse_price;
///
/// assert_eq!(parse_price("19.99").unwrap().cents(), 1999);
/// assert!(parse_price("cheap").is_err());
/// assert!(parse_price("").is_err());
/// ```
pub fn parse_price(input: &str) -> ValidationResult<Money> {
    let value = input.trim();
    if value.is_empty() {
        return Err(ValidationError::required("price"));
    }
    Money::from_decimal_str(value).ok_or_else(|| ValidationError::InvalidNumber {
        field: "price".to_string(),
        value: value.to_string(),
        expected: "a decimal number",
    })
}

/// Parses a whole number, falling back to `default` when blank.
pub fn parse_quantity(field: &str, input: &str, default: i64) -> ValidationResult<i64> {
    let value = input.trim();
    if value.is_empty() {
        return Ok(default);
    }
    value.parse::<i64>().map_err(|_| ValidationError::InvalidNumber {
        field: field.to_string(),
        value: value.to_string(),
        expected: "a whole number",
    })
}

/// Whether a confirmation answer means "yes".
///
/// Only `y` (any case, surrounding whitespace ignored) confirms.
pub fn is_confirmed(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("y")
}

// =============================================================================
// Entity Builders
// =============================================================================

/// Raw supplement attributes as typed by the operator.
#[derive(Debug, Clone, Default)]
pub struct SupplementInput {
    pub name: String,
    pub description: String,
    pub price: String,
    pub quantity: String,
    pub category: String,
}

impl SupplementInput {
    /// Validates and converts the raw attributes.
    pub fn parse(&self) -> ValidationResult<NewSupplement> {
        Ok(NewSupplement {
            name: required_text("name", &self.name)?,
            description: optional_text(&self.description),
            price: parse_price(&self.price)?,
            quantity: parse_quantity("quantity", &self.quantity, DEFAULT_STOCK_QUANTITY)?,
            category: optional_text(&self.category),
        })
    }
}

/// Validates raw user attributes.
pub fn parse_new_user(name: &str, email: &str) -> ValidationResult<NewUser> {
    Ok(NewUser {
        name: required_text("name", name)?,
        email: required_text("email", email)?,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_text() {
        assert_eq!(required_text("name", "  Omega3 ").unwrap(), "Omega3");
        assert_eq!(
            required_text("name", "   ").unwrap_err(),
            ValidationError::required("name")
        );
    }

    #[test]
    fn test_optional_text() {
        assert_eq!(optional_text(""), None);
        assert_eq!(optional_text(" Protein "), Some("Protein".to_string()));
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("quantity", "", 0).unwrap(), 0);
        assert_eq!(parse_quantity("quantity", "", 1).unwrap(), 1);
        assert_eq!(parse_quantity("quantity", " 50 ", 0).unwrap(), 50);
        assert_eq!(parse_quantity("quantity", "-3", 0).unwrap(), -3);

        let err = parse_quantity("quantity", "lots", 0).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidNumber { .. }));
        assert!(parse_quantity("quantity", "2.5", 0).is_err());
    }

    #[test]
    fn test_is_confirmed() {
        assert!(is_confirmed("y"));
        assert!(is_confirmed(" Y \n"));
        assert!(!is_confirmed("n"));
        assert!(!is_confirmed("yes"));
        assert!(!is_confirmed(""));
    }

    #[test]
    fn test_supplement_input_parse() {
        let input = SupplementInput {
            name: "Omega3".to_string(),
            description: "".to_string(),
            price: "19.99".to_string(),
            quantity: "50".to_string(),
            category: "Recovery".to_string(),
        };

        let sup = input.parse().unwrap();
        assert_eq!(sup.name, "Omega3");
        assert_eq!(sup.description, None);
        assert_eq!(sup.price.cents(), 1999);
        assert_eq!(sup.quantity, 50);
        assert_eq!(sup.category.as_deref(), Some("Recovery"));
    }

    #[test]
    fn test_supplement_input_rejects_bad_price() {
        let input = SupplementInput {
            name: "Omega3".to_string(),
            price: "nineteen".to_string(),
            ..Default::default()
        };
        let err = input.parse().unwrap_err();
        assert_eq!(
            err.to_string(),
            "price must be a decimal number, got 'nineteen'"
        );
    }

    #[test]
    fn test_parse_new_user() {
        let user = parse_new_user("Alice", "a@x.com").unwrap();
        assert_eq!(user.email, "a@x.com");
        assert!(parse_new_user("Alice", " ").is_err());
    }
}
