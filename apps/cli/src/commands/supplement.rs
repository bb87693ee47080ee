//! Supplement commands.

use std::io::{BufRead, Write};

use tracing::info;

use super::{print_json, prompt_identifier};
use crate::cli::SupplementArgs;
use crate::console::Console;
use crate::error::CliResult;
use nutrifit_core::validation::SupplementInput;
use nutrifit_core::{Identifier, Supplement};
use nutrifit_db::Database;

/// One line of the supplement listing.
pub fn format_supplement(s: &Supplement) -> String {
    format!(
        "{}. {} - {} ({} in stock, Category: {})",
        s.id,
        s.name,
        s.price(),
        s.quantity,
        s.category.as_deref().unwrap_or("Uncategorized")
    )
}

/// Lists every supplement.
pub async fn view_supplements<R: BufRead, W: Write>(
    db: &Database,
    console: &mut Console<R, W>,
    json: bool,
) -> CliResult<()> {
    let supplements = db.supplements().list_all().await?;

    if json {
        return print_json(console, &supplements);
    }

    if supplements.is_empty() {
        return console.say("No supplements found.");
    }

    console.say("\n=== Supplements ===")?;
    for s in &supplements {
        console.say(format_supplement(s))?;
    }
    Ok(())
}

/// Adds a supplement, prompting for any attribute not supplied.
pub async fn add_supplement<R: BufRead, W: Write>(
    db: &Database,
    console: &mut Console<R, W>,
    args: SupplementArgs,
) -> CliResult<()> {
    let input = SupplementInput {
        name: console.value_or_prompt(args.name, "Supplement name")?,
        description: console.value_or_prompt(args.description, "Description")?,
        price: console.value_or_prompt(args.price, "Price")?,
        quantity: console.value_or_prompt(args.quantity, "Quantity")?,
        category: console.value_or_prompt(args.category, "Category")?,
    };
    let new = input.parse()?;

    let created = db.supplements().create(&new).await?;
    info!(id = created.id, name = %created.name, "Supplement added");

    console.say(format!(
        "Supplement '{}' added successfully with ID {}!",
        created.name, created.id
    ))
}

/// Deletes the supplement an identifier refers to.
///
/// Cart entries for it keep their priced snapshot.
pub async fn delete_supplement<R: BufRead, W: Write>(
    db: &Database,
    console: &mut Console<R, W>,
    ident: &Identifier,
) -> CliResult<()> {
    let supplement = db.require_supplement(ident).await?;
    db.supplements().delete(supplement.id).await?;
    info!(id = supplement.id, "Supplement deleted");

    console.say(format!(
        "Supplement '{}' (ID {}) deleted.",
        supplement.name, supplement.id
    ))
}

/// Prompts for an identifier, then deletes that supplement.
pub async fn delete_supplement_prompted<R: BufRead, W: Write>(
    db: &Database,
    console: &mut Console<R, W>,
) -> CliResult<()> {
    let ident = prompt_identifier(console, None, "Supplement ID or name")?;
    delete_supplement(db, console, &ident).await
}

/// Adds `delta` units of stock (negative removes).
pub async fn restock_supplement<R: BufRead, W: Write>(
    db: &Database,
    console: &mut Console<R, W>,
    ident: &Identifier,
    delta: i64,
) -> CliResult<()> {
    let supplement = db.require_supplement(ident).await?;
    let updated = db.supplements().adjust_stock(supplement.id, delta).await?;

    console.say(format!(
        "'{}' now has {} in stock.",
        updated.name, updated.quantity
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{console, db, omega3, output};
    use crate::error::ErrorCode;

    #[tokio::test]
    async fn test_add_prompts_for_every_attribute() {
        let db = db().await;
        let mut c = console("Omega3\nFish oil\n19.99\n50\nRecovery\n");

        add_supplement(&db, &mut c, SupplementArgs::default())
            .await
            .unwrap();

        let out = output(c);
        assert!(out.contains("Supplement name: "));
        assert!(out.contains("Supplement 'Omega3' added successfully with ID 1!"));

        let stored = db.supplements().find_by_name("Omega3").await.unwrap().unwrap();
        assert_eq!(stored.price_cents, 1999);
        assert_eq!(stored.quantity, 50);
        assert_eq!(stored.description.as_deref(), Some("Fish oil"));
    }

    #[tokio::test]
    async fn test_add_blank_optional_fields() {
        let db = db().await;
        let mut c = console("Whey Pro\n\n45.5\n\n\n");

        add_supplement(&db, &mut c, SupplementArgs::default())
            .await
            .unwrap();

        let stored = db.supplements().find_by_name("Whey Pro").await.unwrap().unwrap();
        assert_eq!(stored.description, None);
        assert_eq!(stored.category, None);
        assert_eq!(stored.quantity, 0);
        assert_eq!(stored.price_cents, 4550);
    }

    #[tokio::test]
    async fn test_add_with_flags_only_prompts_for_missing() {
        let db = db().await;
        let mut c = console("\n\n");
        let args = SupplementArgs {
            name: Some("Creatine Max".to_string()),
            price: Some("29.99".to_string()),
            quantity: Some("12".to_string()),
            ..SupplementArgs::default()
        };

        add_supplement(&db, &mut c, args).await.unwrap();

        let out = output(c);
        assert!(!out.contains("Supplement name: "));
        assert!(out.contains("Description: "));
        assert!(out.contains("Category: "));
        assert_eq!(db.supplements().count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_bad_price_is_validation_error_and_nothing_is_stored() {
        let db = db().await;
        let mut c = console("Omega3\n\ncheap\n\n\n");

        let err = add_supplement(&db, &mut c, SupplementArgs::default())
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::Validation);
        assert_eq!(err.message, "price must be a decimal number, got 'cheap'");
        assert_eq!(db.supplements().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_view_lists_rows() {
        let db = db().await;
        omega3(&db).await;
        let mut c = console("");

        view_supplements(&db, &mut c, false).await.unwrap();

        assert_eq!(
            output(c),
            "\n=== Supplements ===\n1. Omega3 - $19.99 (50 in stock, Category: Recovery)\n"
        );
    }

    #[tokio::test]
    async fn test_view_empty_and_json() {
        let db = db().await;
        let mut c = console("");
        view_supplements(&db, &mut c, false).await.unwrap();
        assert_eq!(output(c), "No supplements found.\n");

        omega3(&db).await;
        let mut c = console("");
        view_supplements(&db, &mut c, true).await.unwrap();
        let rows: serde_json::Value = serde_json::from_str(&output(c)).unwrap();
        assert_eq!(rows[0]["name"], "Omega3");
        assert_eq!(rows[0]["price_cents"], 1999);
    }

    #[tokio::test]
    async fn test_delete_by_name_and_by_id() {
        let db = db().await;
        let first = omega3(&db).await;
        let second = omega3(&db).await;

        let mut c = console("");
        delete_supplement(&db, &mut c, &Identifier::ByName("Omega3".to_string()))
            .await
            .unwrap();
        assert!(db.supplements().find_by_id(first.id).await.unwrap().is_none());

        delete_supplement(&db, &mut c, &Identifier::ById(second.id))
            .await
            .unwrap();
        assert_eq!(db.supplements().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let db = db().await;
        let mut c = console("42\n");

        let err = delete_supplement_prompted(&db, &mut c).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Supplement not found: 42");
    }

    #[tokio::test]
    async fn test_restock() {
        let db = db().await;
        omega3(&db).await;
        let mut c = console("");

        restock_supplement(&db, &mut c, &Identifier::ById(1), -8)
            .await
            .unwrap();

        assert!(output(c).contains("'Omega3' now has 42 in stock."));
    }

    #[tokio::test]
    async fn test_restock_past_limit_is_constraint_error() {
        let db = db().await;
        omega3(&db).await;
        let mut c = console("");

        let err = restock_supplement(&db, &mut c, &Identifier::ById(1), i64::MAX)
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::Constraint);
        assert!(err.is_recoverable());

        view_supplements(&db, &mut c, false).await.unwrap();
        assert!(output(c).contains("(50 in stock, Category: Recovery)"));
    }
}
