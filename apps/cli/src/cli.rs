//! Command-line surface.
//!
//! ```bash
//! nutrifit                                   # interactive menus
//! nutrifit view-supplements --json
//! nutrifit add-supplement --name Omega3 --price 19.99 --quantity 50
//! nutrifit delete-supplement Omega3
//! nutrifit add-to-cart --user a@x.com --supplement Omega3 --quantity 2
//! nutrifit remove-from-cart --user Alice --supplement 3 --yes
//! nutrifit seed-database --supplements 20 --reset
//! nutrifit --db demo.db view-cart --user Alice
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use nutrifit_core::Identifier;
use nutrifit_db::SeedPlan;

#[derive(Debug, Parser)]
#[command(name = "nutrifit")]
#[command(author, version, about = "NutriFit CLI: Manage supplements, users, and carts.")]
pub struct Cli {
    /// SQLite database file (overrides configuration)
    #[arg(long, global = true, value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Configuration file [default: ./nutrifit.toml if present]
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the interactive menus (default)
    Menu,

    /// View all supplements
    ViewSupplements {
        /// Print rows as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Add a new supplement (missing values are prompted for)
    AddSupplement(SupplementArgs),

    /// Delete a supplement by id or name
    DeleteSupplement {
        /// Supplement id or exact name
        ident: Identifier,
    },

    /// Change a supplement's stock level
    RestockSupplement {
        /// Supplement id or exact name
        ident: Identifier,

        /// Units to add (negative to remove)
        #[arg(long, allow_negative_numbers = true)]
        delta: i64,
    },

    /// View all users
    ViewUsers {
        /// Print rows as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Add a new user (missing values are prompted for)
    AddUser(UserArgs),

    /// Delete a user by id, name, or email
    DeleteUser {
        /// User id, exact name, or exact email
        ident: Identifier,
    },

    /// View cart entries with per-user totals
    ViewCart {
        /// Only this user's entries
        #[arg(long)]
        user: Option<Identifier>,

        /// Print rows as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Add a supplement to a user's cart
    AddToCart {
        #[arg(long)]
        user: Identifier,

        #[arg(long)]
        supplement: Identifier,

        /// Units to add [default: 1]
        #[arg(long)]
        quantity: Option<i64>,
    },

    /// Remove every cart entry for a (user, supplement) pair
    RemoveFromCart {
        #[arg(long)]
        user: Identifier,

        #[arg(long)]
        supplement: Identifier,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Remove one cart entry by its id
    RemoveCartEntry { id: i64 },

    /// Seed the database with test data
    SeedDatabase(SeedArgs),
}

/// Supplement attributes; anything left out is prompted for.
#[derive(Debug, Clone, Default, Args)]
pub struct SupplementArgs {
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    /// Price in dollars, e.g. 19.99
    #[arg(long)]
    pub price: Option<String>,

    /// Units in stock [default: 0]
    #[arg(long)]
    pub quantity: Option<String>,

    #[arg(long)]
    pub category: Option<String>,
}

/// User attributes; anything left out is prompted for.
#[derive(Debug, Clone, Default, Args)]
pub struct UserArgs {
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Args)]
pub struct SeedArgs {
    /// Number of supplements to seed
    #[arg(long, default_value_t = 10)]
    pub supplements: usize,

    /// Number of users to seed
    #[arg(long, default_value_t = 5)]
    pub users: usize,

    /// Number of cart entries to seed
    #[arg(long = "cart-entries", alias = "cart_entries", default_value_t = 15)]
    pub cart_entries: usize,

    /// Delete existing cart entries, users, and supplements first
    #[arg(long)]
    pub reset: bool,
}

impl From<SeedArgs> for SeedPlan {
    fn from(args: SeedArgs) -> Self {
        SeedPlan {
            supplements: args.supplements,
            users: args.users,
            cart_entries: args.cart_entries,
            reset: args.reset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_means_menu() {
        let cli = Cli::try_parse_from(["nutrifit"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_identifiers_are_typed_at_parse_time() {
        let cli = Cli::try_parse_from(["nutrifit", "delete-supplement", "7"]).unwrap();
        match cli.command {
            Some(Command::DeleteSupplement { ident }) => assert_eq!(ident, Identifier::ById(7)),
            other => panic!("unexpected {other:?}"),
        }

        let cli = Cli::try_parse_from(["nutrifit", "delete-user", "a@x.com"]).unwrap();
        match cli.command {
            Some(Command::DeleteUser { ident }) => {
                assert_eq!(ident, Identifier::ByName("a@x.com".to_string()))
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_seed_defaults_and_underscore_alias() {
        let cli = Cli::try_parse_from(["nutrifit", "seed-database"]).unwrap();
        let Some(Command::SeedDatabase(args)) = cli.command else {
            panic!("expected seed-database");
        };
        assert_eq!(SeedPlan::from(args), SeedPlan::default());

        let cli = Cli::try_parse_from(["nutrifit", "seed-database", "--cart_entries", "3"]).unwrap();
        let Some(Command::SeedDatabase(args)) = cli.command else {
            panic!("expected seed-database");
        };
        assert_eq!(args.cart_entries, 3);
    }

    #[test]
    fn test_global_db_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["nutrifit", "view-cart", "--db", "demo.db", "--json"]).unwrap();
        assert_eq!(cli.db, Some(PathBuf::from("demo.db")));
        assert!(matches!(
            cli.command,
            Some(Command::ViewCart { user: None, json: true })
        ));
    }

    #[test]
    fn test_negative_restock_delta() {
        let cli = Cli::try_parse_from(["nutrifit", "restock-supplement", "Omega3", "--delta", "-5"])
            .unwrap();
        assert!(matches!(
            cli.command,
            Some(Command::RestockSupplement { delta: -5, .. })
        ));
    }
}
