//! Static HTML rendering of a card.

use crate::appearance::{ButtonAppearance, Glyph, GLYPH_FILL};
use crate::config::CardConfig;
use crate::product::{CardDisplay, Product};
use crate::state::CardState;

/// Render a card as it looks in `state`.
pub fn render_card(product: &Product, state: &CardState, config: &CardConfig) -> String {
    let display = CardDisplay::from_product(product, &config.display);
    let button = ButtonAppearance::for_state(state);

    format!(
        r#"<div class="relative w-60 border border-gray-200 rounded-lg shadow-sm p-4" data-card-state="{state}">
    <p class="text-sm text-gray-600 mb-2 font-semibold">{id}</p>
    <div class="relative">
        <button type="button" class="{button_classes}" data-glyph="{glyph_name}">{glyph}{label}</button>
        <img src="{image}" alt="{alt}" class="w-full h-64 object-cover mb-2 rounded-2xl" style="max-width: 205px; max-height: 205px;">
    </div>
    <h2 class="text-sm font-semibold mb-1">{title}</h2>
    <p class="text-[0.7em] text-gray-600 mb-2">{description}</p>
    <div class="flex flex-wrap">
        <div class="w-3/4 pr-2 border-r border-gray-200">
            <p class="text-[0.6em] text-gray-600">{location}</p>
        </div>
        <div class="w-1/4">
            <p class="text-[0.6em] text-green-400 ml-2">{delivery}</p>
        </div>
    </div>
</div>"#,
        state = state.as_str(),
        id = escape_html(&display.id),
        button_classes = button.classes(),
        glyph_name = button.glyph.as_str(),
        glyph = render_glyph(button.glyph),
        label = button.label,
        image = escape_html(&display.image),
        alt = escape_html(&display.image_alt),
        title = escape_html(&display.title),
        description = escape_html(&display.description),
        location = escape_html(&display.location),
        delivery = display.delivery,
    )
}

/// Inline SVG for a glyph.
pub fn render_glyph(glyph: Glyph) -> String {
    let paint = if glyph.is_outline() {
        format!(r#"fill="none" stroke="{GLYPH_FILL}" stroke-width="1.5""#)
    } else {
        format!(r#"fill="{GLYPH_FILL}""#)
    };
    format!(
        r#"<svg class="h-3 w-3" viewBox="0 0 24 24" {paint} aria-hidden="true"><path d="{path}"/></svg>"#,
        path = glyph.path()
    )
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product() -> Product {
        Product::new("SKU-1", "Coffee Grinder")
            .with_image("https://img.example/grinder.jpg")
            .with_description("Burr grinder")
            .with_location(vec!["Oslo", "Bergen"])
            .with_delivery(false)
    }

    #[test]
    fn test_idle_card_hides_button() {
        let html = render_card(&product(), &CardState::Idle, &CardConfig::default());
        assert!(html.contains(r#"data-card-state="idle""#));
        assert!(html.contains(" hidden\""));
        assert!(html.contains("Add To Cart"));
        assert!(html.contains(r#"data-glyph="cart""#));
    }

    #[test]
    fn test_added_card_shows_check() {
        let html = render_card(
            &product(),
            &CardState::Added { hovering: false },
            &CardConfig::default(),
        );
        assert!(!html.contains(" hidden\""));
        assert!(html.contains("Added to Cart"));
        assert!(html.contains(r#"data-glyph="check""#));
        assert!(html.contains("bg-[#2BA41D]"));
    }

    #[test]
    fn test_static_fields() {
        let html = render_card(&product(), &CardState::Idle, &CardConfig::default());
        assert!(html.contains(">SKU-1</p>"));
        assert!(html.contains(r#"alt="Coffee Grinder""#));
        assert!(html.contains(">Oslo, Bergen</p>"));
        assert!(html.contains(">Delivery Not Covered</p>"));
    }

    #[test]
    fn test_empty_location_renders_blank() {
        let mut p = product();
        p.location.clear();
        let html = render_card(&p, &CardState::Idle, &CardConfig::default());
        assert!(html.contains(r#"<p class="text-[0.6em] text-gray-600"></p>"#));
    }

    #[test]
    fn test_escapes_product_text() {
        let p = Product::new("<id>", "Tom & \"Jerry\"");
        let html = render_card(&p, &CardState::Idle, &CardConfig::default());
        assert!(html.contains("&lt;id&gt;"));
        assert!(html.contains("Tom &amp; &quot;Jerry&quot;"));
        assert!(!html.contains("<id>"));
    }

    #[test]
    fn test_outline_glyph_is_stroked() {
        assert!(render_glyph(Glyph::Cart).contains(r#"fill="none""#));
        assert!(render_glyph(Glyph::Check).contains(r##"fill="#f9fafb""##));
    }
}
