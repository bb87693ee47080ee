//! # Command Handlers
//!
//! One async function per operation, shared by the discrete commands and
//! the interactive menus.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs         ◄─── You are here (dispatch)
//! ├── supplement.rs  ◄─── view / add / delete / restock
//! ├── user.rs        ◄─── view / add / delete
//! ├── cart.rs        ◄─── view (with totals) / add / remove
//! └── seed.rs        ◄─── seed-database
//! ```
//!
//! ## Handler Shape
//! ```rust,ignore
//! pub async fn delete_supplement<R: BufRead, W: Write>(
//!     db: &Database,                 // ◄── injected store handle
//!     console: &mut Console<R, W>,   // ◄── prompts + output
//!     ident: &Identifier,            // ◄── already typed at the boundary
//! ) -> CliResult<()>
//! ```
//! Values given on the command line are passed in as `Some(..)`; the menus
//! pass `None` and the handler prompts for them.

pub mod cart;
pub mod seed;
pub mod supplement;
pub mod user;

use std::io::{BufRead, Write};

use serde::Serialize;

use crate::cli::Command;
use crate::console::Console;
use crate::error::CliResult;
use crate::interactive::Session;
use nutrifit_core::validation::DEFAULT_CART_QUANTITY;
use nutrifit_core::Identifier;
use nutrifit_db::Database;

/// Runs one parsed command against the store.
pub async fn dispatch<R: BufRead, W: Write>(
    command: Command,
    db: &Database,
    console: &mut Console<R, W>,
) -> CliResult<()> {
    match command {
        Command::Menu => Session::new(db, console).run().await,
        Command::ViewSupplements { json } => supplement::view_supplements(db, console, json).await,
        Command::AddSupplement(args) => supplement::add_supplement(db, console, args).await,
        Command::DeleteSupplement { ident } => {
            supplement::delete_supplement(db, console, &ident).await
        }
        Command::RestockSupplement { ident, delta } => {
            supplement::restock_supplement(db, console, &ident, delta).await
        }
        Command::ViewUsers { json } => user::view_users(db, console, json).await,
        Command::AddUser(args) => user::add_user(db, console, args).await,
        Command::DeleteUser { ident } => user::delete_user(db, console, &ident).await,
        Command::ViewCart { user, json } => cart::view_cart(db, console, user.as_ref(), json).await,
        Command::AddToCart {
            user,
            supplement,
            quantity,
        } => {
            let quantity = quantity.unwrap_or(DEFAULT_CART_QUANTITY);
            cart::add_to_cart(db, console, Some(user), Some(supplement), Some(quantity)).await
        }
        Command::RemoveFromCart {
            user,
            supplement,
            yes,
        } => cart::remove_from_cart(db, console, Some(user), Some(supplement), yes).await,
        Command::RemoveCartEntry { id } => cart::remove_cart_entry(db, console, id).await,
        Command::SeedDatabase(args) => seed::seed_database(db, console, args.into()).await,
    }
}

/// Writes rows as a pretty-printed JSON array followed by a newline.
fn print_json<R: BufRead, W: Write, T: Serialize + ?Sized>(
    console: &mut Console<R, W>,
    rows: &T,
) -> CliResult<()> {
    serde_json::to_writer_pretty(console.out(), rows).map_err(std::io::Error::from)?;
    writeln!(console.out())?;
    Ok(())
}

/// Parses an identifier typed at a prompt.
fn prompt_identifier<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    preset: Option<Identifier>,
    label: &str,
) -> CliResult<Identifier> {
    match preset {
        Some(ident) => Ok(ident),
        None => Ok(Identifier::parse(&console.prompt(label)?)?),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::io::Cursor;

    use crate::console::Console;
    use nutrifit_core::{Money, NewSupplement, NewUser, Supplement, User};
    use nutrifit_db::{Database, DbConfig};

    pub type TestConsole = Console<Cursor<Vec<u8>>, Vec<u8>>;

    pub fn console(input: &str) -> TestConsole {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    pub fn output(console: TestConsole) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    pub async fn db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    pub async fn omega3(db: &Database) -> Supplement {
        db.supplements()
            .create(&NewSupplement {
                name: "Omega3".to_string(),
                description: None,
                price: Money::from_cents(1999),
                quantity: 50,
                category: Some("Recovery".to_string()),
            })
            .await
            .unwrap()
    }

    pub async fn alice(db: &Database) -> User {
        db.users()
            .create(&NewUser {
                name: "Alice".to_string(),
                email: "a@x.com".to_string(),
            })
            .await
            .unwrap()
    }
}
