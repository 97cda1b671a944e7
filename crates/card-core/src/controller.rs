//! One interactive card instance.

use std::sync::Arc;

use card_observability::{CardId, InteractionMetrics, LogSink, StructuredLogger};

use crate::appearance::ButtonAppearance;
use crate::config::{CardConfig, ToastConfig};
use crate::notify::Notifier;
use crate::product::Product;
use crate::state::{CardState, Toggle};

/// Drives a card's state machine and fires the add notice.
///
/// Created on mount, dropped on unmount. Nothing outlives it except notices
/// already handed to the notifier.
pub struct CardController {
    state: CardState,
    toast: ToastConfig,
    notifier: Arc<dyn Notifier>,
    logger: StructuredLogger,
    metrics: InteractionMetrics,
}

impl CardController {
    /// Mount a card for `product`.
    pub fn new(product: &Product, config: &CardConfig, notifier: Arc<dyn Notifier>) -> Self {
        let card_id = CardId::generate();
        let sink = if config.logging.stderr {
            LogSink::Stderr
        } else {
            LogSink::Discard
        };
        let logger = StructuredLogger::new(card_id.clone())
            .with_component("product-card")
            .with_product(&product.id)
            .with_min_level(config.logging.level)
            .with_format(config.logging.format)
            .with_sink(sink);

        Self::with_logger(config, notifier, logger)
    }

    /// Mount a card with a caller-supplied logger.
    pub fn with_logger(
        config: &CardConfig,
        notifier: Arc<dyn Notifier>,
        logger: StructuredLogger,
    ) -> Self {
        let metrics = InteractionMetrics::new(logger.card_id());
        logger.debug("card mounted");

        Self {
            state: CardState::default(),
            toast: config.toast.clone(),
            notifier,
            logger,
            metrics,
        }
    }

    pub fn state(&self) -> CardState {
        self.state
    }

    pub fn appearance(&self) -> ButtonAppearance {
        ButtonAppearance::for_state(&self.state)
    }

    pub fn metrics(&self) -> &InteractionMetrics {
        &self.metrics
    }

    pub fn card_id(&self) -> &CardId {
        self.logger.card_id()
    }

    /// Pointer entered the image or the button.
    pub fn pointer_enter(&mut self) {
        self.state.pointer_enter();
        self.metrics.record_hover_enter();
        self.logger
            .debug_builder("pointer entered")
            .field("state", self.state.as_str())
            .emit();
    }

    /// Pointer left the image or the button.
    pub fn pointer_leave(&mut self) {
        self.state.pointer_leave();
        self.metrics.record_hover_leave();
        self.logger
            .debug_builder("pointer left")
            .field("state", self.state.as_str())
            .emit();
    }

    /// Toggle the item. Sends one notice on every add, none on remove.
    pub fn activate(&mut self) -> Toggle {
        let toggle = self.state.activate();
        self.metrics.record_activation(toggle == Toggle::Added);

        if toggle == Toggle::Added {
            let notice = self.toast.added_notice();
            let (position, auto_close) = (notice.position, notice.auto_close);
            self.notifier.notify(notice);
            self.metrics.record_notice();
            self.logger
                .info_builder("item added to cart")
                .field_bool("added", true)
                .field("position", position.as_str())
                .duration_ms("auto_close_ms", auto_close)
                .field_i64("notices_sent", i64::from(self.metrics.notices_sent))
                .emit();
        } else {
            self.logger
                .info_builder("item removed from cart")
                .field_bool("added", false)
                .emit();
        }

        toggle
    }
}

impl Drop for CardController {
    fn drop(&mut self) {
        self.logger
            .debug_builder("card unmounted")
            .field("summary", self.metrics.to_summary())
            .emit();
    }
}
