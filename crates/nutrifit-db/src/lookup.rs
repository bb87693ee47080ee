//! # Lookup Resolver
//!
//! Turns an [`Identifier`] into a stored entity.
//!
//! ```text
//! Identifier::ById(7)          ──► find_by_id(7)
//! Identifier::ByName("Omega3") ──► find_by_name("Omega3")
//! Identifier::ByName("a@x.com")──► users: find_by_name, then find_by_email
//! ```
//!
//! The id-versus-name decision was already made when the identifier was
//! parsed, so a numeric string is never retried as a name here.

use tracing::debug;

use crate::error::{DbError, DbResult};
use crate::pool::Database;
use nutrifit_core::{Identifier, Supplement, User};

impl Database {
    /// Finds the supplement an identifier refers to.
    pub async fn resolve_supplement(&self, ident: &Identifier) -> DbResult<Option<Supplement>> {
        debug!(%ident, "Resolving supplement");

        match ident {
            Identifier::ById(id) => self.supplements().find_by_id(*id).await,
            Identifier::ByName(name) => self.supplements().find_by_name(name).await,
        }
    }

    /// Finds the user an identifier refers to.
    ///
    /// Names are matched first; an exact email match is the fallback.
    pub async fn resolve_user(&self, ident: &Identifier) -> DbResult<Option<User>> {
        debug!(%ident, "Resolving user");

        match ident {
            Identifier::ById(id) => self.users().find_by_id(*id).await,
            Identifier::ByName(name) => match self.users().find_by_name(name).await? {
                Some(user) => Ok(Some(user)),
                None => self.users().find_by_email(name).await,
            },
        }
    }

    /// Like [`Database::resolve_supplement`], but absence is `DbError::NotFound`.
    pub async fn require_supplement(&self, ident: &Identifier) -> DbResult<Supplement> {
        self.resolve_supplement(ident)
            .await?
            .ok_or_else(|| DbError::not_found("Supplement", ident))
    }

    /// Like [`Database::resolve_user`], but absence is `DbError::NotFound`.
    pub async fn require_user(&self, ident: &Identifier) -> DbResult<User> {
        self.resolve_user(ident)
            .await?
            .ok_or_else(|| DbError::not_found("User", ident))
    }
}
