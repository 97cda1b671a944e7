//! Per-card interaction counters.

use serde::{Deserialize, Serialize};

use crate::CardId;

/// Interaction counts for a single card instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionMetrics {
    /// Card ID for correlation.
    pub card_id: String,
    /// Pointer entries over the image or button.
    pub hover_enters: u32,
    /// Pointer exits from the image or button.
    pub hover_leaves: u32,
    /// Total activations of the button.
    pub activations: u32,
    /// Activations that put the item in the cart.
    pub adds: u32,
    /// Activations that took the item back out.
    pub removes: u32,
    /// Notices handed to the notifier.
    pub notices_sent: u32,
}

impl InteractionMetrics {
    /// Create zeroed counters for a card.
    pub fn new(card_id: &CardId) -> Self {
        Self {
            card_id: card_id.to_string(),
            ..Default::default()
        }
    }

    pub fn record_hover_enter(&mut self) {
        self.hover_enters += 1;
    }

    pub fn record_hover_leave(&mut self) {
        self.hover_leaves += 1;
    }

    /// Record an activation and which way it toggled.
    pub fn record_activation(&mut self, added: bool) {
        self.activations += 1;
        if added {
            self.adds += 1;
        } else {
            self.removes += 1;
        }
    }

    pub fn record_notice(&mut self) {
        self.notices_sent += 1;
    }

    /// Format as JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Format as human-readable summary.
    pub fn to_summary(&self) -> String {
        format!(
            "Card {}: {} hover(s), {} activation(s) ({} add, {} remove), {} notice(s)",
            self.card_id,
            self.hover_enters,
            self.activations,
            self.adds,
            self.removes,
            self.notices_sent
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activation_split() {
        let mut m = InteractionMetrics::new(&CardId::from_string("c1"));
        m.record_activation(true);
        m.record_activation(false);
        m.record_activation(true);

        assert_eq!(m.activations, 3);
        assert_eq!(m.adds, 2);
        assert_eq!(m.removes, 1);
    }

    #[test]
    fn test_summary() {
        let mut m = InteractionMetrics::new(&CardId::from_string("c1"));
        m.record_hover_enter();
        m.record_hover_leave();
        m.record_activation(true);
        m.record_notice();

        assert_eq!(
            m.to_summary(),
            "Card c1: 1 hover(s), 1 activation(s) (1 add, 0 remove), 1 notice(s)"
        );
    }
}
