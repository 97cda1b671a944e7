//! The product card component.

use std::sync::Arc;

use card_core::appearance::ButtonAppearance;
use card_core::config::CardConfig;
use card_core::controller::CardController;
use card_core::notify::{Notifier, NullNotifier};
use card_core::product::{CardDisplay, Product};
use card_core::state::CardState;
use leptos::prelude::*;

use crate::{CardGlyph, ToastHub};

/// A product summary with a hover-revealed add-to-cart toggle.
///
/// Notices go to the [`ToastHub`] in context. Without one they are dropped.
#[component]
pub fn ProductCard(
    /// Product to show.
    product: Product,
    /// Formatting and toast settings.
    #[prop(optional)]
    config: Option<CardConfig>,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let notifier: Arc<dyn Notifier> = match ToastHub::from_context() {
        Some(hub) => Arc::new(hub),
        None => Arc::new(NullNotifier),
    };

    let controller = StoredValue::new(CardController::new(&product, &config, notifier));
    let state = RwSignal::new(CardState::default());
    let look = Memo::new(move |_| ButtonAppearance::for_state(&state.get()));

    let sync = move || {
        if let Some(current) = controller.try_with_value(|c| c.state()) {
            state.set(current);
        }
    };
    let enter = move || {
        controller.update_value(|c| c.pointer_enter());
        sync();
    };
    let leave = move || {
        controller.update_value(|c| c.pointer_leave());
        sync();
    };
    let activate = move || {
        controller.update_value(|c| {
            c.activate();
        });
        sync();
    };

    let display = CardDisplay::from_product(&product, &config.display);

    view! {
        <div
            class="relative w-60 border border-gray-200 rounded-lg shadow-sm p-4"
            data-card-state=move || state.get().as_str()
        >
            <p class="text-sm text-gray-600 mb-2 font-semibold">{display.id}</p>
            <div class="relative">
                <button
                    type="button"
                    class=move || look.get().classes()
                    on:click=move |_| activate()
                    on:mouseenter=move |_| enter()
                    on:mouseleave=move |_| leave()
                >
                    {move || view! { <CardGlyph glyph=look.get().glyph/> }}
                    {move || look.get().label}
                </button>
                <img
                    src=display.image
                    alt=display.image_alt
                    class="w-full h-64 object-cover mb-2 rounded-2xl"
                    style="max-width: 205px; max-height: 205px;"
                    on:mouseenter=move |_| enter()
                    on:mouseleave=move |_| leave()
                />
            </div>
            <h2 class="text-sm font-semibold mb-1">{display.title}</h2>
            <p class="text-[0.7em] text-gray-600 mb-2">{display.description}</p>
            <div class="flex flex-wrap">
                <div class="w-3/4 pr-2 border-r border-gray-200">
                    <p class="text-[0.6em] text-gray-600">{display.location}</p>
                </div>
                <div class="w-1/4">
                    <p class="text-[0.6em] text-green-400 ml-2">{display.delivery}</p>
                </div>
            </div>
        </div>
    }
}
