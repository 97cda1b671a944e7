//! Observability for product cards.
//!
//! This crate provides:
//! - `CardId` - Identifier for a mounted card instance
//! - `StructuredLogger` - Structured logging with card context
//! - `InteractionMetrics` - Per-card interaction counters

mod id;
mod logging;
mod metrics;

pub use id::*;
pub use logging::*;
pub use metrics::*;
