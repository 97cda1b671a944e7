//! Button label, glyph and colour derived from the card state.

use serde::Serialize;

use crate::state::CardState;

/// Glyph size in pixels.
pub const GLYPH_SIZE_PX: u32 = 12;

/// Glyph fill colour.
pub const GLYPH_FILL: &str = "#f9fafb";

/// Icon shown inside the button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Glyph {
    /// Outline shopping cart.
    Cart,
    /// Filled check mark in a circle.
    Check,
}

impl Glyph {
    pub fn as_str(&self) -> &'static str {
        match self {
            Glyph::Cart => "cart",
            Glyph::Check => "check",
        }
    }

    /// SVG path data (24x24 viewBox).
    pub fn path(&self) -> &'static str {
        match self {
            Glyph::Cart => "M2.25 3h1.386c.51 0 .955.343 1.087.835l.383 1.437M7.5 14.25a3 3 0 0 0-3 3h15.75m-12.75-3h11.218c1.121-2.3 2.1-4.684 2.924-7.138a60.114 60.114 0 0 0-16.536-1.84M7.5 14.25 5.106 5.272M6 20.25a.75.75 0 1 1-1.5 0 .75.75 0 0 1 1.5 0Zm12.75 0a.75.75 0 1 1-1.5 0 .75.75 0 0 1 1.5 0Z",
            Glyph::Check => "M2.25 12c0-5.385 4.365-9.75 9.75-9.75s9.75 4.365 9.75 9.75-4.365 9.75-9.75 9.75S2.25 17.385 2.25 12Zm13.36-1.814a.75.75 0 1 0-1.22-.872l-3.236 4.53L9.53 12.22a.75.75 0 0 0-1.06 1.06l2.25 2.25a.75.75 0 0 0 1.14-.094l3.75-5.25Z",
        }
    }

    /// Outline glyphs are stroked; filled glyphs are filled.
    pub fn is_outline(&self) -> bool {
        matches!(self, Glyph::Cart)
    }
}

/// Background treatment of the button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    /// Gray, item not added.
    Neutral,
    /// Green, item added.
    Success,
}

impl Tone {
    /// Utility classes for the background.
    pub fn classes(&self) -> &'static str {
        match self {
            Tone::Neutral => "bg-neutral-400 hover:bg-neutral-500 bg-opacity-70 text-gray-50",
            Tone::Success => "bg-[#2BA41D] hover:bg-[#217318] bg-opacity-70 text-gray-50",
        }
    }
}

/// Classes shared by both tones.
pub const BUTTON_BASE_CLASSES: &str = "absolute top-1/2 left-1/2 transform -translate-x-1/2 -translate-y-1/2 flex flex-row gap-2 justify-center items-center w-32 text-[0.6em] font-semibold py-2 px-4 rounded-full ml-3 h-10 focus:outline-none";

/// Everything the view needs to draw the add-to-cart button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ButtonAppearance {
    pub visible: bool,
    pub label: &'static str,
    pub glyph: Glyph,
    pub tone: Tone,
}

impl ButtonAppearance {
    pub fn for_state(state: &CardState) -> Self {
        if state.added() {
            Self {
                visible: true,
                label: "Added to Cart",
                glyph: Glyph::Check,
                tone: Tone::Success,
            }
        } else {
            Self {
                visible: state.button_visible(),
                label: "Add To Cart",
                glyph: Glyph::Cart,
                tone: Tone::Neutral,
            }
        }
    }

    /// Full class list, including `hidden` when the button is not shown.
    pub fn classes(&self) -> String {
        let mut classes = format!("{} {}", BUTTON_BASE_CLASSES, self.tone.classes());
        if !self.visible {
            classes.push_str(" hidden");
        }
        classes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_is_hidden_neutral_cart() {
        let look = ButtonAppearance::for_state(&CardState::Idle);
        assert!(!look.visible);
        assert_eq!(look.label, "Add To Cart");
        assert_eq!(look.glyph, Glyph::Cart);
        assert_eq!(look.tone, Tone::Neutral);
        assert!(look.classes().ends_with(" hidden"));
    }

    #[test]
    fn test_revealed_is_visible_neutral() {
        let look = ButtonAppearance::for_state(&CardState::Revealed);
        assert!(look.visible);
        assert_eq!(look.label, "Add To Cart");
        assert!(!look.classes().contains("hidden"));
        assert!(look.classes().contains("bg-neutral-400"));
    }

    #[test]
    fn test_added_is_green_check_either_hover() {
        for hovering in [true, false] {
            let look = ButtonAppearance::for_state(&CardState::Added { hovering });
            assert!(look.visible);
            assert_eq!(look.label, "Added to Cart");
            assert_eq!(look.glyph, Glyph::Check);
            assert_eq!(look.tone, Tone::Success);
            assert!(look.classes().contains("bg-[#2BA41D]"));
        }
    }

    #[test]
    fn test_glyph_fill_style() {
        assert!(Glyph::Cart.is_outline());
        assert!(!Glyph::Check.is_outline());
    }
}
