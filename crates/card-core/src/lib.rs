//! Product card core.
//!
//! Everything about a product card that does not need a browser:
//!
//! - **Product**: the input record and its display formatting
//! - **State**: the `Idle | Revealed | Added` add-to-cart state machine
//! - **Appearance**: label, glyph and tone derived from the state
//! - **Notify**: the fire-and-forget notifier seam and a stacking toast queue
//! - **Controller**: one card instance wiring state, notices, logs and counters
//! - **Render**: static HTML for a card in a given state
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use card_core::prelude::*;
//!
//! let product = Product::new("P-1", "Rust Mug");
//! let notifier = Arc::new(RecordingNotifier::new());
//! let mut card = CardController::new(&product, &CardConfig::default(), notifier.clone());
//!
//! card.pointer_enter();
//! card.activate();
//!
//! assert_eq!(card.appearance().label, "Added to Cart");
//! assert_eq!(notifier.notices()[0].message, "Item added to cart!");
//! ```

pub mod appearance;
pub mod config;
pub mod controller;
pub mod error;
pub mod notify;
pub mod product;
pub mod render;
pub mod state;
pub mod toast;

pub use error::CardError;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::appearance::{ButtonAppearance, Glyph, Tone};
    pub use crate::config::{CardConfig, DisplayConfig, LoggingConfig, ToastConfig};
    pub use crate::controller::CardController;
    pub use crate::error::CardError;
    pub use crate::notify::{
        Notice, NoticeKind, Notifier, NullNotifier, RecordingNotifier, ToastPosition,
    };
    pub use crate::product::{
        delivery_label, format_location, truncate_description, CardDisplay, Product,
    };
    pub use crate::render::render_card;
    pub use crate::state::{CardState, Toggle};
    pub use crate::toast::{Toast, ToastId, ToastQueue};
}
