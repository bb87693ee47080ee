//! # Menu State Machine
//!
//! The interactive menus as an explicit state plus a static transition table.
//!
//! ## States and Transitions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │                       ┌──────────────┐                                  │
//! │        ┌──── 1 ──────►│    Users     │── 1 View / 2 Add / 3 Delete ─┐   │
//! │        │              └──────┬───────┘◄─────────────────────────────┘   │
//! │        │                     │ 4                                        │
//! │  ┌─────┴────┐◄───────────────┘                                         │
//! │  │   Main   │── 2 ───► Supplements (1 View / 2 Add / 3 Delete, 4 back)  │
//! │  └─────┬────┘── 3 ───► Cart (1 View / 2 Add / 3 Remove, 4 back)         │
//! │        │                                                                │
//! │        └── 4 ───► Exit                                                  │
//! │                                                                         │
//! │  Any other input: Step::Invalid, state unchanged                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The machine does no I/O. The CLI session renders [`MenuState::render`],
//! reads a line, calls [`MenuState::step`], and runs whatever [`Action`]
//! comes back.

use std::fmt::Write as _;

// =============================================================================
// Types
// =============================================================================

/// Which menu is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MenuState {
    #[default]
    Main,
    Users,
    Supplements,
    Cart,
}

/// Work a submenu entry asks the session to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    ViewUsers,
    AddUser,
    DeleteUser,
    ViewSupplements,
    AddSupplement,
    DeleteSupplement,
    ViewCart,
    AddToCart,
    RemoveFromCart,
}

/// What a menu entry does when chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Switch to another menu.
    Enter(MenuState),
    /// Run an action, then stay in the current menu.
    Run(Action),
    /// Leave the session.
    Exit,
}

/// One numbered line of a menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    pub label: &'static str,
    pub transition: Transition,
}

/// Outcome of feeding one line of input to the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Now showing this menu.
    Moved(MenuState),
    /// Run the action; the state is unchanged.
    Run(Action),
    /// Session is over.
    Exit,
    /// Unrecognized input; re-prompt the same menu.
    Invalid,
}

// =============================================================================
// Transition Table
// =============================================================================

const fn entry(label: &'static str, transition: Transition) -> MenuEntry {
    MenuEntry { label, transition }
}

const MAIN_ENTRIES: &[MenuEntry] = &[
    entry("Manage Users", Transition::Enter(MenuState::Users)),
    entry("Manage Supplements", Transition::Enter(MenuState::Supplements)),
    entry("Manage Cart", Transition::Enter(MenuState::Cart)),
    entry("Exit", Transition::Exit),
];

const USER_ENTRIES: &[MenuEntry] = &[
    entry("View All Users", Transition::Run(Action::ViewUsers)),
    entry("Add User", Transition::Run(Action::AddUser)),
    entry("Delete User", Transition::Run(Action::DeleteUser)),
    entry("Return to Main Menu", Transition::Enter(MenuState::Main)),
];

const SUPPLEMENT_ENTRIES: &[MenuEntry] = &[
    entry("View All Supplements", Transition::Run(Action::ViewSupplements)),
    entry("Add Supplement", Transition::Run(Action::AddSupplement)),
    entry("Delete Supplement", Transition::Run(Action::DeleteSupplement)),
    entry("Return to Main Menu", Transition::Enter(MenuState::Main)),
];

const CART_ENTRIES: &[MenuEntry] = &[
    entry("View All Cart Entries", Transition::Run(Action::ViewCart)),
    entry("Add to Cart", Transition::Run(Action::AddToCart)),
    entry("Remove from Cart", Transition::Run(Action::RemoveFromCart)),
    entry("Return to Main Menu", Transition::Enter(MenuState::Main)),
];

impl MenuState {
    /// Heading shown above the entries.
    pub const fn title(self) -> &'static str {
        match self {
            MenuState::Main => "Main Menu",
            MenuState::Users => "User Menu",
            MenuState::Supplements => "Supplement Menu",
            MenuState::Cart => "Cart Menu",
        }
    }

    /// The numbered entries, in display order.
    pub const fn entries(self) -> &'static [MenuEntry] {
        match self {
            MenuState::Main => MAIN_ENTRIES,
            MenuState::Users => USER_ENTRIES,
            MenuState::Supplements => SUPPLEMENT_ENTRIES,
            MenuState::Cart => CART_ENTRIES,
        }
    }

    /// Looks up the transition for a 1-based choice typed by the operator.
    pub fn transition(self, input: &str) -> Option<Transition> {
        let choice: usize = input.trim().parse().ok()?;
        let index = choice.checked_sub(1)?;
        self.entries().get(index).map(|e| e.transition)
    }

    /// Feeds one line of input and returns the next state plus the step taken.
    ///
    /// ## Example
    /// ```rust
    /// use nutrifit_core::menu::{Action, MenuState, Step};
    ///
    /// let (state, step) = MenuState::Main.step("3");
    /// assert_eq!((state, step), (MenuState::Cart, Step::Moved(MenuState::Cart)));
    ///
    /// let (state, step) = state.step("3");
    /// assert_eq!((state, step), (MenuState::Cart, Step::Run(Action::RemoveFromCart)));
    ///
    /// let (state, step) = state.step("banana");
    /// assert_eq!((state, step), (MenuState::Cart, Step::Invalid));
    /// ```
    pub fn step(self, input: &str) -> (MenuState, Step) {
        match self.transition(input) {
            Some(Transition::Enter(next)) => (next, Step::Moved(next)),
            Some(Transition::Run(action)) => (self, Step::Run(action)),
            Some(Transition::Exit) => (self, Step::Exit),
            None => (self, Step::Invalid),
        }
    }

    /// Renders the menu as shown on screen.
    pub fn render(self) -> String {
        let mut out = format!("\n--- {} ---\n", self.title());
        for (i, e) in self.entries().iter().enumerate() {
            // Writing into a String cannot fail.
            let _ = writeln!(out, "{}. {}", i + 1, e.label);
        }
        out
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [MenuState; 4] = [
        MenuState::Main,
        MenuState::Users,
        MenuState::Supplements,
        MenuState::Cart,
    ];

    #[test]
    fn test_main_menu_transitions() {
        assert_eq!(MenuState::Main.step("1"), (MenuState::Users, Step::Moved(MenuState::Users)));
        assert_eq!(
            MenuState::Main.step("2"),
            (MenuState::Supplements, Step::Moved(MenuState::Supplements))
        );
        assert_eq!(MenuState::Main.step("3"), (MenuState::Cart, Step::Moved(MenuState::Cart)));
        assert_eq!(MenuState::Main.step("4"), (MenuState::Main, Step::Exit));
    }

    #[test]
    fn test_submenu_actions_stay_in_place() {
        assert_eq!(
            MenuState::Users.step("2"),
            (MenuState::Users, Step::Run(Action::AddUser))
        );
        assert_eq!(
            MenuState::Supplements.step("3"),
            (MenuState::Supplements, Step::Run(Action::DeleteSupplement))
        );
        assert_eq!(
            MenuState::Cart.step("2"),
            (MenuState::Cart, Step::Run(Action::AddToCart))
        );
    }

    #[test]
    fn test_last_choice_of_every_submenu_returns_to_main() {
        for state in [MenuState::Users, MenuState::Supplements, MenuState::Cart] {
            let last = state.entries().len().to_string();
            assert_eq!(state.step(&last), (MenuState::Main, Step::Moved(MenuState::Main)));
        }
    }

    #[test]
    fn test_invalid_input_keeps_state() {
        for state in ALL {
            for input in ["", "0", "5", "-1", "one", "1.0", "99999999999999999999999"] {
                assert_eq!(state.step(input), (state, Step::Invalid), "{state:?} {input:?}");
            }
        }
    }

    #[test]
    fn test_input_is_trimmed() {
        assert_eq!(MenuState::Main.step(" 1 \n").0, MenuState::Users);
    }

    #[test]
    fn test_render() {
        let text = MenuState::Cart.render();
        assert!(text.contains("--- Cart Menu ---"));
        assert!(text.contains("1. View All Cart Entries"));
        assert!(text.contains("4. Return to Main Menu"));
    }

    #[test]
    fn test_default_state_is_main() {
        assert_eq!(MenuState::default(), MenuState::Main);
    }
}
