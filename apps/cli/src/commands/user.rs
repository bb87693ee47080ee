//! User commands.

use std::io::{BufRead, Write};

use tracing::info;

use super::{print_json, prompt_identifier};
use crate::cli::UserArgs;
use crate::console::Console;
use crate::error::CliResult;
use nutrifit_core::validation::parse_new_user;
use nutrifit_core::Identifier;
use nutrifit_db::Database;

/// Lists every user.
pub async fn view_users<R: BufRead, W: Write>(
    db: &Database,
    console: &mut Console<R, W>,
    json: bool,
) -> CliResult<()> {
    let users = db.users().list_all().await?;

    if json {
        return print_json(console, &users);
    }

    if users.is_empty() {
        return console.say("No users found.");
    }

    console.say("\n=== Users ===")?;
    for u in &users {
        console.say(format!("{}. {} <{}>", u.id, u.name, u.email))?;
    }
    Ok(())
}

/// Adds a user, prompting for any attribute not supplied.
pub async fn add_user<R: BufRead, W: Write>(
    db: &Database,
    console: &mut Console<R, W>,
    args: UserArgs,
) -> CliResult<()> {
    let name = console.value_or_prompt(args.name, "User name")?;
    let email = console.value_or_prompt(args.email, "Email")?;
    let new = parse_new_user(&name, &email)?;

    let created = db.users().create(&new).await?;
    info!(id = created.id, "User added");

    console.say(format!(
        "User '{}' added successfully with ID {}!",
        created.name, created.id
    ))
}

/// Deletes the user an identifier refers to.
pub async fn delete_user<R: BufRead, W: Write>(
    db: &Database,
    console: &mut Console<R, W>,
    ident: &Identifier,
) -> CliResult<()> {
    let user = db.require_user(ident).await?;
    db.users().delete(user.id).await?;
    info!(id = user.id, "User deleted");

    console.say(format!("User '{}' (ID {}) deleted.", user.name, user.id))
}

/// Prompts for an identifier, then deletes that user.
pub async fn delete_user_prompted<R: BufRead, W: Write>(
    db: &Database,
    console: &mut Console<R, W>,
) -> CliResult<()> {
    let ident = prompt_identifier(console, None, "User ID, name or email")?;
    delete_user(db, console, &ident).await
}
