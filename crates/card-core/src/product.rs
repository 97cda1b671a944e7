//! Product record and display formatting.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::config::DisplayConfig;

/// Longest description shown before truncation, in characters.
pub const DESCRIPTION_LIMIT: usize = 170;

/// Suffix appended to a truncated description.
pub const ELLIPSIS: &str = "...";

/// Product shown by a card. Owned by the caller and never modified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Opaque identifier, displayed verbatim.
    pub id: String,
    /// Photo URI.
    pub image: String,
    /// Display name.
    pub title: String,
    /// Free text, truncated for display.
    #[serde(default)]
    pub description: String,
    /// Location names, shown joined in order.
    #[serde(default)]
    pub location: Vec<String>,
    /// Whether delivery is covered.
    #[serde(default)]
    pub delivery: bool,
}

impl Product {
    /// Create a product with an ID and title; other fields start empty.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            image: String::new(),
            title: title.into(),
            description: String::new(),
            location: Vec::new(),
            delivery: false,
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_location(mut self, location: Vec<&str>) -> Self {
        self.location = location.into_iter().map(String::from).collect();
        self
    }

    pub fn with_delivery(mut self, delivery: bool) -> Self {
        self.delivery = delivery;
        self
    }

    /// Parse a product from JSON.
    pub fn from_json(s: &str) -> Result<Self, crate::CardError> {
        Ok(serde_json::from_str(s)?)
    }
}

/// Cut `text` to `limit` characters and append `ellipsis` if it is longer.
///
/// Counts `char`s (Unicode scalar values), not bytes or UTF-16 code units, and
/// ignores word boundaries. A character outside the Basic Multilingual Plane
/// such as an emoji counts once here, where a UTF-16 length would count it
/// twice, so emoji-heavy text keeps more characters before the cut.
pub fn truncate_description<'a>(text: &'a str, limit: usize, ellipsis: &str) -> Cow<'a, str> {
    match text.char_indices().nth(limit) {
        Some((cut, _)) => Cow::Owned(format!("{}{}", &text[..cut], ellipsis)),
        None => Cow::Borrowed(text),
    }
}

/// Join location names with `", "`. Empty input gives an empty string.
pub fn format_location(location: &[String]) -> String {
    location.join(", ")
}

/// Footer label for the delivery flag.
pub fn delivery_label(delivery: bool) -> &'static str {
    if delivery {
        "Delivery Covered"
    } else {
        "Delivery Not Covered"
    }
}

/// Display-ready text for every static field of a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardDisplay {
    pub id: String,
    pub image: String,
    pub image_alt: String,
    pub title: String,
    pub description: String,
    pub location: String,
    pub delivery: &'static str,
}

impl CardDisplay {
    pub fn from_product(product: &Product, config: &DisplayConfig) -> Self {
        Self {
            id: product.id.clone(),
            image: product.image.clone(),
            image_alt: product.title.clone(),
            title: product.title.clone(),
            description: truncate_description(
                &product.description,
                config.description_limit,
                &config.ellipsis,
            )
            .into_owned(),
            location: format_location(&product.location),
            delivery: delivery_label(product.delivery),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(len: usize) -> String {
        "abcdefghij".chars().cycle().take(len).collect()
    }

    #[test]
    fn test_short_description_unchanged() {
        for len in [0, 1, 100, 169, 170] {
            let text = text_of(len);
            let shown = truncate_description(&text, DESCRIPTION_LIMIT, ELLIPSIS);
            assert_eq!(shown, text);
            assert!(matches!(shown, Cow::Borrowed(_)));
        }
    }

    #[test]
    fn test_long_description_truncated() {
        for len in [171, 200, 1000] {
            let text = text_of(len);
            let shown = truncate_description(&text, DESCRIPTION_LIMIT, ELLIPSIS);
            assert_eq!(shown, format!("{}...", &text[..170]));
            assert_eq!(shown.chars().count(), 173);
        }
    }

    #[test]
    fn test_truncation_counts_chars_not_bytes() {
        let text: String = "é".repeat(171);
        let shown = truncate_description(&text, DESCRIPTION_LIMIT, ELLIPSIS);
        assert_eq!(shown.chars().count(), 173);
        assert!(shown.starts_with(&"é".repeat(170)));
        assert!(shown.ends_with("é..."));
    }

    #[test]
    fn test_emoji_count_once_toward_limit() {
        let text = "🛒".repeat(100);
        assert_eq!(truncate_description(&text, DESCRIPTION_LIMIT, ELLIPSIS), text);

        let text = "🛒".repeat(171);
        let shown = truncate_description(&text, DESCRIPTION_LIMIT, ELLIPSIS);
        assert_eq!(shown, format!("{}...", "🛒".repeat(170)));
    }

    #[test]
    fn test_truncation_not_word_aware() {
        let text = format!("{} tail", "x".repeat(168));
        let shown = truncate_description(&text, DESCRIPTION_LIMIT, ELLIPSIS);
        assert_eq!(shown, format!("{} t...", "x".repeat(168)));
    }

    #[test]
    fn test_format_location() {
        let locations = vec!["Lagos".to_string(), "Abuja".to_string(), "Kano".to_string()];
        assert_eq!(format_location(&locations), "Lagos, Abuja, Kano");
        assert_eq!(format_location(&["Accra".to_string()]), "Accra");
        assert_eq!(format_location(&[]), "");
    }

    #[test]
    fn test_delivery_label() {
        assert_eq!(delivery_label(true), "Delivery Covered");
        assert_eq!(delivery_label(false), "Delivery Not Covered");
    }

    #[test]
    fn test_card_display_from_product() {
        let product = Product::new("SKU-9", "Desk Lamp")
            .with_image("https://img.example/lamp.jpg")
            .with_description(text_of(300))
            .with_location(vec!["Berlin", "Hamburg"])
            .with_delivery(true);

        let display = CardDisplay::from_product(&product, &DisplayConfig::default());
        assert_eq!(display.id, "SKU-9");
        assert_eq!(display.image_alt, "Desk Lamp");
        assert_eq!(display.description.chars().count(), 173);
        assert_eq!(display.location, "Berlin, Hamburg");
        assert_eq!(display.delivery, "Delivery Covered");
    }

    #[test]
    fn test_product_from_json_defaults() {
        let product = Product::from_json(
            r#"{"id": "1", "image": "a.png", "title": "Chair"}"#,
        )
        .unwrap();
        assert!(product.location.is_empty());
        assert!(!product.delivery);
        assert_eq!(product.description, "");
    }

    #[test]
    fn test_product_from_json_rejects_garbage() {
        assert!(Product::from_json("{not json").is_err());
    }
}
