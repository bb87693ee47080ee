//! # Cart Commands
//!
//! ## Removal Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  User ID, name or email: Alice                                         │
//! │  Supplement ID or name: Omega3                                         │
//! │       │                                                                 │
//! │       ▼  resolve both (NotFound if either is missing)                  │
//! │  list_by_pair(user, supplement)                                        │
//! │       │                                                                 │
//! │       ├── none ──► NotFound                                            │
//! │       ▼                                                                 │
//! │  print matching entries                                                │
//! │  Remove 2 entries? (y/n): _                                            │
//! │       │                                                                 │
//! │       ├── "y" / "Y" ──► delete_by_pair ──► "Removed 2 cart entries."   │
//! │       └── anything else (or end of input) ──► "Cancelled."             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};

use tracing::info;

use super::{print_json, prompt_identifier};
use crate::console::Console;
use crate::error::{CliError, CliResult, ErrorCode};
use nutrifit_core::cart::{grand_total, totals_by_user};
use nutrifit_core::validation::{is_confirmed, parse_quantity, DEFAULT_CART_QUANTITY};
use nutrifit_core::{CartEntry, Identifier, NewCartEntry};
use nutrifit_db::Database;

const USER_LABEL: &str = "User ID, name or email";
const SUPPLEMENT_LABEL: &str = "Supplement ID or name";

/// One line of the cart listing.
///
/// A line total that overflows is shown as `(too large)` so the entry can
/// still be listed and removed.
pub fn format_entry(e: &CartEntry) -> String {
    let line_total = match e.line_total() {
        Ok(total) => total.to_string(),
        Err(_) => "(too large)".to_string(),
    };
    let mut line = format!(
        "{}. {}: {} x {} @ {} = {}",
        e.id,
        e.user_name,
        e.quantity,
        e.supplement_name,
        e.unit_price(),
        line_total
    );
    if e.user_id.is_none() {
        line.push_str(" (user deleted)");
    }
    if e.supplement_id.is_none() {
        line.push_str(" (supplement deleted)");
    }
    line
}

fn entries_noun(n: usize) -> &'static str {
    if n == 1 {
        "entry"
    } else {
        "entries"
    }
}

/// Lists cart entries with per-user totals, optionally for one user.
pub async fn view_cart<R: BufRead, W: Write>(
    db: &Database,
    console: &mut Console<R, W>,
    user: Option<&Identifier>,
    json: bool,
) -> CliResult<()> {
    let entries = match user {
        Some(ident) => {
            let user = db.require_user(ident).await?;
            db.cart().list_for_user(user.id).await?
        }
        None => db.cart().list_all().await?,
    };

    if json {
        return print_json(console, &entries);
    }

    if entries.is_empty() {
        return console.say("No cart entries found.");
    }

    console.say("\n=== Cart Entries ===")?;
    for e in &entries {
        console.say(format_entry(e))?;
    }

    console.say("\n--- Totals ---")?;
    for t in totals_by_user(&entries)? {
        console.say(format!(
            "{}: {} item(s), {} unit(s), {}",
            t.user_name, t.item_count, t.total_quantity, t.total
        ))?;
    }
    console.say(format!("Grand total: {}", grand_total(&entries)?))
}

/// Adds a supplement to a user's cart at the supplement's current price.
///
/// `None` arguments are prompted for; a blank quantity means 1.
pub async fn add_to_cart<R: BufRead, W: Write>(
    db: &Database,
    console: &mut Console<R, W>,
    user: Option<Identifier>,
    supplement: Option<Identifier>,
    quantity: Option<i64>,
) -> CliResult<()> {
    let user_ident = prompt_identifier(console, user, USER_LABEL)?;
    let user = db.require_user(&user_ident).await?;

    let supplement_ident = prompt_identifier(console, supplement, SUPPLEMENT_LABEL)?;
    let supplement = db.require_supplement(&supplement_ident).await?;

    let quantity = match quantity {
        Some(q) => q,
        None => parse_quantity("quantity", &console.prompt("Quantity")?, DEFAULT_CART_QUANTITY)?,
    };

    let entry = db
        .cart()
        .create(&NewCartEntry::snapshot(&user, &supplement, quantity))
        .await?;
    info!(id = entry.id, user_id = user.id, supplement_id = supplement.id, "Cart entry added");

    console.say(format!(
        "Added {} x {} to {}'s cart at {} each.",
        entry.quantity,
        entry.supplement_name,
        entry.user_name,
        entry.unit_price()
    ))
}

/// Removes every entry for a (user, supplement) pair after confirmation.
///
/// `assume_yes` skips the question.
pub async fn remove_from_cart<R: BufRead, W: Write>(
    db: &Database,
    console: &mut Console<R, W>,
    user: Option<Identifier>,
    supplement: Option<Identifier>,
    assume_yes: bool,
) -> CliResult<()> {
    let user_ident = prompt_identifier(console, user, USER_LABEL)?;
    let user = db.require_user(&user_ident).await?;

    let supplement_ident = prompt_identifier(console, supplement, SUPPLEMENT_LABEL)?;
    let supplement = db.require_supplement(&supplement_ident).await?;

    let entries = db.cart().list_by_pair(user.id, supplement.id).await?;
    if entries.is_empty() {
        return Err(CliError::new(
            ErrorCode::NotFound,
            format!(
                "No cart entries for '{}' and '{}'.",
                user.name, supplement.name
            ),
        ));
    }

    console.say(format!("\nMatching cart {}:", entries_noun(entries.len())))?;
    for e in &entries {
        console.say(format_entry(e))?;
    }

    if !assume_yes {
        let question = format!("Remove {} {}? (y/n)", entries.len(), entries_noun(entries.len()));
        let answer = console.read_answer(&question)?;
        if !answer.as_deref().is_some_and(is_confirmed) {
            return console.say("Cancelled.");
        }
    }

    let removed = db.cart().delete_by_pair(user.id, supplement.id).await?;
    info!(removed, user_id = user.id, supplement_id = supplement.id, "Cart entries removed");

    console.say(format!(
        "Removed {} cart {}.",
        removed,
        entries_noun(removed as usize)
    ))
}

/// Prompts for both identifiers, then removes after confirmation.
pub async fn remove_from_cart_prompted<R: BufRead, W: Write>(
    db: &Database,
    console: &mut Console<R, W>,
) -> CliResult<()> {
    remove_from_cart(db, console, None, None, false).await
}

/// Removes a single cart entry by its id.
pub async fn remove_cart_entry<R: BufRead, W: Write>(
    db: &Database,
    console: &mut Console<R, W>,
    id: i64,
) -> CliResult<()> {
    db.cart().delete(id).await?;
    console.say(format!("Cart entry {id} removed."))
}
