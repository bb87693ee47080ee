//! # Seed Data Generator
//!
//! Populates the store with fake supplements, users, and cart entries for
//! development and demos.
//!
//! ## Generated Data
//! - Supplements: capitalized word + Boost/Max/Pro/Flex/Ultra, a ten-word
//!   description, $10.00 - $100.00, 10 - 200 in stock, one of five categories
//! - Users: fake full name and a safe email (unique, suffixed on collision)
//! - Cart entries: random user × random supplement from the whole store,
//!   quantity 1 - 5, priced at the supplement's current price
//!
//! ## Usage
//! ```rust,ignore
//! let summary = seed(&db, SeedPlan::default()).await?;
//! println!("{summary}");
//! // Seeded 10 supplements, 5 users, and 15 cart entries.
//! ```

use std::collections::HashSet;
use std::fmt;

use fake::faker::internet::en::SafeEmail;
use fake::faker::lorem::en::{Sentence, Word};
use fake::faker::name::en::Name;
use fake::Fake;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{info, warn};

use crate::error::{DbError, DbResult};
use crate::pool::Database;
use nutrifit_core::{Money, NewCartEntry, NewSupplement, NewUser};

/// Supplement categories.
pub const CATEGORIES: &[&str] = &["Protein", "Vitamins", "Performance", "Energy", "Recovery"];

/// Suffixes appended to the generated supplement name.
const NAME_SUFFIXES: &[&str] = &["Boost", "Max", "Pro", "Flex", "Ultra"];

const MAX_EMAIL_ATTEMPTS: u32 = 100;
const MAX_NAME_ATTEMPTS: u32 = 10;

/// How much to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedPlan {
    pub supplements: usize,
    pub users: usize,
    pub cart_entries: usize,
    /// Clear cart, users, and supplements first.
    pub reset: bool,
}

impl Default for SeedPlan {
    fn default() -> Self {
        SeedPlan {
            supplements: 10,
            users: 5,
            cart_entries: 15,
            reset: false,
        }
    }
}

/// What was actually inserted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub supplements: usize,
    pub users: usize,
    pub cart_entries: usize,
}

impl fmt::Display for SeedSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Seeded {} supplements, {} users, and {} cart entries.",
            self.supplements, self.users, self.cart_entries
        )
    }
}

/// Seeds the database using an entropy-seeded generator.
pub async fn seed(db: &Database, plan: SeedPlan) -> DbResult<SeedSummary> {
    let mut rng = StdRng::from_entropy();
    seed_with_rng(db, plan, &mut rng).await
}

/// Seeds the database with the given generator.
///
/// Same generator state and same starting store give the same rows.
pub async fn seed_with_rng<R>(db: &Database, plan: SeedPlan, rng: &mut R) -> DbResult<SeedSummary>
where
    R: Rng + Send,
{
    info!(?plan, "Seeding database");

    if plan.reset {
        clear_all(db).await?;
    }

    let summary = SeedSummary {
        supplements: seed_supplements(db, plan.supplements, rng).await?,
        users: seed_users(db, plan.users, rng).await?,
        cart_entries: seed_cart_entries(db, plan.cart_entries, rng).await?,
    };

    info!(%summary, "Seeding complete");
    Ok(summary)
}

/// Deletes every cart entry, user, and supplement in one transaction.
async fn clear_all(db: &Database) -> DbResult<()> {
    warn!("Clearing cart, users, and supplements");

    let mut tx = db.pool().begin().await?;
    for table in ["cart", "users", "supplements"] {
        sqlx::query(&format!("DELETE FROM {table}"))
            .execute(&mut *tx)
            .await?;
    }
    tx.commit().await?;

    Ok(())
}

async fn seed_supplements<R: Rng + Send>(db: &Database, n: usize, rng: &mut R) -> DbResult<usize> {
    let repo = db.supplements();
    let mut used_names = HashSet::new();

    for _ in 0..n {
        let name = unique_supplement_name(rng, &mut used_names);
        let new = NewSupplement {
            name,
            description: Some(Sentence(10..11).fake_with_rng(rng)),
            price: Money::from_cents(rng.gen_range(1_000..=10_000)),
            quantity: rng.gen_range(10..=200),
            category: CATEGORIES.choose(rng).map(|c| c.to_string()),
        };
        repo.create(&new).await?;
    }

    Ok(n)
}

fn unique_supplement_name<R: Rng>(rng: &mut R, used: &mut HashSet<String>) -> String {
    let mut name = String::new();
    for _ in 0..MAX_NAME_ATTEMPTS {
        let word: String = Word().fake_with_rng(rng);
        let suffix = NAME_SUFFIXES.choose(rng).copied().unwrap_or("Pro");
        name = format!("{} {}", capitalize(&word), suffix);
        if used.insert(name.clone()) {
            break;
        }
    }
    name
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

async fn seed_users<R: Rng + Send>(db: &Database, n: usize, rng: &mut R) -> DbResult<usize> {
    let repo = db.users();

    for _ in 0..n {
        let name: String = Name().fake_with_rng(rng);
        let email: String = SafeEmail().fake_with_rng(rng);

        let mut attempt = 0;
        loop {
            let candidate = suffixed_email(&email, attempt);
            match repo.create(&NewUser { name: name.clone(), email: candidate }).await {
                Ok(_) => break,
                Err(DbError::UniqueViolation { .. }) if attempt < MAX_EMAIL_ATTEMPTS => {
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    Ok(n)
}

/// `jo@example.com` → `jo2@example.com` for attempt 2.
fn suffixed_email(email: &str, attempt: u32) -> String {
    if attempt == 0 {
        return email.to_string();
    }
    match email.split_once('@') {
        Some((local, domain)) => format!("{local}{attempt}@{domain}"),
        None => format!("{email}{attempt}"),
    }
}

async fn seed_cart_entries<R: Rng + Send>(db: &Database, n: usize, rng: &mut R) -> DbResult<usize> {
    if n == 0 {
        return Ok(0);
    }

    let users = db.users().list_all().await?;
    let supplements = db.supplements().list_all().await?;

    if users.is_empty() || supplements.is_empty() {
        warn!("Ensure that users and supplements are seeded before adding cart entries");
        return Ok(0);
    }

    let repo = db.cart();
    let mut inserted = 0;
    for _ in 0..n {
        let (Some(user), Some(supplement)) = (users.choose(rng), supplements.choose(rng)) else {
            continue;
        };
        let quantity = rng.gen_range(1..=5);
        repo.create(&NewCartEntry::snapshot(user, supplement, quantity))
            .await?;
        inserted += 1;
    }

    Ok(inserted)
}

// =============================================================================
// Unit Tests
// =============================================================================
