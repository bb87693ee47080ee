//! # Interactive Session
//!
//! Drives the menu state machine from `nutrifit_core::menu` against a
//! console and the store.
//!
//! ## Loop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  render(state) ──► "Enter your choice: " ──► state.step(input)         │
//! │        ▲                                          │                     │
//! │        │          ┌───────────────────────────────┤                     │
//! │        │          ▼               ▼               ▼              ▼      │
//! │        │     Moved(next)      Run(action)      Invalid         Exit     │
//! │        │          │               │               │              │      │
//! │        │          │        perform(action)   "Invalid choice"    │      │
//! │        │          │          │        │           │              │      │
//! │        │          │         Ok   recoverable Err  │              │      │
//! │        │          │          │   → "Error: ..."   │              ▼      │
//! │        └──────────┴──────────┴────────┴───────────┘          Goodbye   │
//! │                                                                         │
//! │  End of input at the choice prompt is treated like Exit.               │
//! │  Non-recoverable errors leave the loop and are returned to the caller. │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};

use tracing::debug;

use crate::cli::{SupplementArgs, UserArgs};
use crate::commands::{cart, supplement, user};
use crate::console::Console;
use crate::error::CliResult;
use nutrifit_core::menu::{Action, MenuState, Step};
use nutrifit_core::CoreError;
use nutrifit_db::Database;

const CHOICE_LABEL: &str = "Enter your choice";

/// One interactive run over a store handle and a console.
pub struct Session<'a, R, W> {
    db: &'a Database,
    console: &'a mut Console<R, W>,
    state: MenuState,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    /// Starts at the main menu.
    pub fn new(db: &'a Database, console: &'a mut Console<R, W>) -> Self {
        Session {
            db,
            console,
            state: MenuState::default(),
        }
    }

    /// Current menu.
    pub fn state(&self) -> MenuState {
        self.state
    }

    /// Runs until Exit or end of input.
    pub async fn run(&mut self) -> CliResult<()> {
        self.console.say("Welcome to NutriFit!")?;

        loop {
            write!(self.console.out(), "{}", self.state.render())?;

            let input = match self.console.read_answer(CHOICE_LABEL) {
                Ok(Some(input)) => input,
                Ok(None) => {
                    debug!("End of input at menu prompt");
                    break;
                }
                Err(err) if err.is_recoverable() => {
                    self.console.say(format!("Error: {err}"))?;
                    continue;
                }
                Err(err) => return Err(err),
            };

            let (next, step) = self.state.step(&input);
            self.state = next;

            match step {
                Step::Moved(state) => debug!(?state, "Entered menu"),
                Step::Exit => break,
                Step::Invalid => self.console.say(CoreError::InvalidChoice(input))?,
                Step::Run(action) => {
                    if let Err(err) = self.perform(action).await {
                        if !err.is_recoverable() {
                            return Err(err);
                        }
                        self.console.say(format!("Error: {err}"))?;
                    }
                }
            }
        }

        self.console.say("Exiting NutriFit CLI. Goodbye!")
    }

    async fn perform(&mut self, action: Action) -> CliResult<()> {
        debug!(?action, "Running menu action");
        let (db, console) = (self.db, &mut *self.console);

        match action {
            Action::ViewUsers => user::view_users(db, console, false).await,
            Action::AddUser => user::add_user(db, console, UserArgs::default()).await,
            Action::DeleteUser => user::delete_user_prompted(db, console).await,
            Action::ViewSupplements => supplement::view_supplements(db, console, false).await,
            Action::AddSupplement => {
                supplement::add_supplement(db, console, SupplementArgs::default()).await
            }
            Action::DeleteSupplement => supplement::delete_supplement_prompted(db, console).await,
            Action::ViewCart => cart::view_cart(db, console, None, false).await,
            Action::AddToCart => cart::add_to_cart(db, console, None, None, None).await,
            Action::RemoveFromCart => cart::remove_from_cart_prompted(db, console).await,
        }
    }
}
