//! Button glyphs.

use card_core::appearance::{Glyph, GLYPH_FILL, GLYPH_SIZE_PX};
use leptos::prelude::*;

/// The cart outline or the filled check, sized for the add-to-cart button.
#[component]
pub fn CardGlyph(glyph: Glyph) -> impl IntoView {
    let size = GLYPH_SIZE_PX.to_string();

    if glyph.is_outline() {
        view! {
            <svg
                class="h-3 w-3"
                width=size.clone()
                height=size
                viewBox="0 0 24 24"
                fill="none"
                stroke=GLYPH_FILL
                stroke-width="1.5"
                aria-hidden="true"
                data-glyph=glyph.as_str()
            >
                <path stroke-linecap="round" stroke-linejoin="round" d=glyph.path()></path>
            </svg>
        }
        .into_any()
    } else {
        view! {
            <svg
                class="h-3 w-3"
                width=size.clone()
                height=size
                viewBox="0 0 24 24"
                fill=GLYPH_FILL
                aria-hidden="true"
                data-glyph=glyph.as_str()
            >
                <path fill-rule="evenodd" clip-rule="evenodd" d=glyph.path()></path>
            </svg>
        }
        .into_any()
    }
}
