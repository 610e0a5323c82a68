//! Application Context
//!
//! Menu overlay state shared via the Leptos Context API.

use leptos::prelude::*;

/// Menu overlay visibility. Two states, no animating state: the slide is a
/// CSS transition, not modeled here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    /// State after pressing the header menu button
    pub fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    /// State after any dismiss interaction (close button, navigation
    /// selection); always lands in Closed
    pub fn dismissed(self) -> Self {
        MenuState::Closed
    }

    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }
}

/// Menu signals provided to header, overlay and navigation links
#[derive(Clone, Copy)]
pub struct MenuContext {
    state: ReadSignal<MenuState>,
    set_state: WriteSignal<MenuState>,
}

impl MenuContext {
    pub fn new(state: (ReadSignal<MenuState>, WriteSignal<MenuState>)) -> Self {
        Self {
            state: state.0,
            set_state: state.1,
        }
    }

    /// Reactive read; true while the overlay is shown
    pub fn is_open(&self) -> bool {
        self.state.get().is_open()
    }

    /// Header menu button
    pub fn toggle(&self) {
        self.set_state.update(|state| *state = state.toggled());
    }

    /// Close button, and every navigation link on selection
    pub fn close(&self) {
        self.set_state.update(|state| *state = state.dismissed());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_starts_closed() {
        assert_eq!(MenuState::default(), MenuState::Closed);
        assert!(!MenuState::default().is_open());
    }

    #[test]
    fn test_toggle_twice_returns_to_closed() {
        let state = MenuState::Closed;
        assert_eq!(state.toggled(), MenuState::Open);
        assert_eq!(state.toggled().toggled(), MenuState::Closed);
    }

    #[test]
    fn test_dismiss_always_closes() {
        // Navigation selection and the close button share this transition
        assert_eq!(MenuState::Open.dismissed(), MenuState::Closed);
        assert_eq!(MenuState::Closed.dismissed(), MenuState::Closed);
    }
}
