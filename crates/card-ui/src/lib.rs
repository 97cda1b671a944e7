//! Leptos product card.
//!
//! ```rust,ignore
//! use card_ui::prelude::*;
//!
//! #[component]
//! fn Shelf(product: Product) -> impl IntoView {
//!     view! {
//!         <ToastProvider>
//!             <ProductCard product=product/>
//!         </ToastProvider>
//!     }
//! }
//! ```

mod card;
mod glyph;
mod toast;

pub use card::*;
pub use glyph::*;
pub use toast::*;

pub mod prelude {
    pub use crate::{CardGlyph, ProductCard, ToastHub, ToastProvider, ToastStack};
    pub use card_core::prelude::{CardConfig, Product};
    pub use leptos::prelude::*;
}

/// Mount a single card with its toast stack onto `<body>`.
#[cfg(feature = "csr")]
pub fn mount(product: card_core::product::Product, config: card_core::config::CardConfig) {
    use leptos::prelude::*;

    leptos::mount::mount_to_body(move || {
        view! {
            <ToastProvider>
                <ProductCard product=product config=config/>
            </ToastProvider>
        }
    });
}
