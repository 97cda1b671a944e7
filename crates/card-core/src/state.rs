//! Add-to-cart affordance state machine.
//!
//! The card tracks two independent facts: whether the pointer is over the
//! hover region (image or button), and whether the item has been added. They
//! fold into three states:
//!
//! | from                       | enter                     | leave                      | activate                   |
//! |----------------------------|---------------------------|----------------------------|----------------------------|
//! | `Idle`                     | `Revealed`                | `Idle`                     | `Added { hovering: false }`|
//! | `Revealed`                 | `Revealed`                | `Idle`                     | `Added { hovering: true }` |
//! | `Added { hovering: true }` | `Added { hovering: true }`| `Added { hovering: false }`| `Revealed`                 |
//! | `Added { hovering: false }`| `Added { hovering: true }`| `Added { hovering: false }`| `Idle`                     |

use serde::{Deserialize, Serialize};

/// View state of one card's add-to-cart button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum CardState {
    /// Not added, pointer outside. Button hidden.
    #[default]
    Idle,
    /// Not added, pointer inside. Button shown.
    Revealed,
    /// Added. Button shown whatever the pointer does.
    Added { hovering: bool },
}

/// Direction of an activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Toggle {
    /// The item went into the cart.
    Added,
    /// The item came back out.
    Removed,
}

impl CardState {
    /// Build a state from the two underlying flags.
    pub fn from_flags(added: bool, hovering: bool) -> Self {
        match (added, hovering) {
            (true, hovering) => Self::Added { hovering },
            (false, true) => Self::Revealed,
            (false, false) => Self::Idle,
        }
    }

    /// Whether the item is in the cart.
    pub fn added(&self) -> bool {
        matches!(self, Self::Added { .. })
    }

    /// Whether the pointer is over the hover region.
    pub fn hovering(&self) -> bool {
        match self {
            Self::Idle => false,
            Self::Revealed => true,
            Self::Added { hovering } => *hovering,
        }
    }

    /// The button is shown iff hovering or added.
    pub fn button_visible(&self) -> bool {
        self.hovering() || self.added()
    }

    /// Pointer entered the image or the button.
    pub fn pointer_enter(&mut self) {
        *self = Self::from_flags(self.added(), true);
    }

    /// Pointer left the image or the button.
    pub fn pointer_leave(&mut self) {
        *self = Self::from_flags(self.added(), false);
    }

    /// Flip the added flag. Hover is left as it is.
    ///
    /// Activating from `Idle` is allowed: a hidden button can still receive
    /// keyboard activation.
    pub fn activate(&mut self) -> Toggle {
        let added = !self.added();
        *self = Self::from_flags(added, self.hovering());
        if added {
            Toggle::Added
        } else {
            Toggle::Removed
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Revealed => "revealed",
            Self::Added { .. } => "added",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = CardState::default();
        assert_eq!(state, CardState::Idle);
        assert!(!state.added());
        assert!(!state.hovering());
        assert!(!state.button_visible());
    }

    #[test]
    fn test_visibility_truth_table() {
        for (added, hovering, visible) in [
            (false, false, false),
            (false, true, true),
            (true, false, true),
            (true, true, true),
        ] {
            let state = CardState::from_flags(added, hovering);
            assert_eq!(state.added(), added);
            assert_eq!(state.hovering(), hovering);
            assert_eq!(state.button_visible(), visible, "added={added} hovering={hovering}");
        }
    }

    #[test]
    fn test_hover_reveals_and_hides() {
        let mut state = CardState::Idle;
        state.pointer_enter();
        assert_eq!(state, CardState::Revealed);
        assert!(state.button_visible());

        state.pointer_leave();
        assert_eq!(state, CardState::Idle);
        assert!(!state.button_visible());
    }

    #[test]
    fn test_hover_never_changes_added() {
        for start in [
            CardState::Idle,
            CardState::Revealed,
            CardState::Added { hovering: false },
            CardState::Added { hovering: true },
        ] {
            let mut state = start;
            let before_visible = state.button_visible();
            state.pointer_enter();
            state.pointer_leave();
            assert_eq!(state.added(), start.added());
            if !start.hovering() {
                assert_eq!(state.button_visible(), before_visible);
            }
        }
    }

    #[test]
    fn test_repeated_enter_is_idempotent() {
        let mut state = CardState::Idle;
        state.pointer_enter();
        state.pointer_enter();
        assert_eq!(state, CardState::Revealed);
        state.pointer_leave();
        state.pointer_leave();
        assert_eq!(state, CardState::Idle);
    }

    #[test]
    fn test_activate_toggles() {
        let mut state = CardState::Revealed;
        assert_eq!(state.activate(), Toggle::Added);
        assert_eq!(state, CardState::Added { hovering: true });

        assert_eq!(state.activate(), Toggle::Removed);
        assert_eq!(state, CardState::Revealed);
    }

    #[test]
    fn test_added_stays_visible_after_leave() {
        let mut state = CardState::Revealed;
        state.activate();
        state.pointer_leave();
        assert_eq!(state, CardState::Added { hovering: false });
        assert!(state.button_visible());
    }

    #[test]
    fn test_remove_while_outside_hides_button() {
        let mut state = CardState::Added { hovering: false };
        assert_eq!(state.activate(), Toggle::Removed);
        assert_eq!(state, CardState::Idle);
        assert!(!state.button_visible());
    }

    #[test]
    fn test_activate_from_idle() {
        let mut state = CardState::Idle;
        assert_eq!(state.activate(), Toggle::Added);
        assert_eq!(state, CardState::Added { hovering: false });
    }

    #[test]
    fn test_serde_tagging() {
        let json = serde_json::to_string(&CardState::Added { hovering: true }).unwrap();
        assert_eq!(json, r#"{"state":"added","hovering":true}"#);
        let back: CardState = serde_json::from_str(r#"{"state":"revealed"}"#).unwrap();
        assert_eq!(back, CardState::Revealed);
    }
}
