//! Card instance identifiers.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_CARD: AtomicU64 = AtomicU64::new(1);

/// Identifier for one mounted card instance, used to correlate log lines.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CardId(pub String);

impl CardId {
    /// Generate a new process-unique card ID.
    pub fn generate() -> Self {
        let n = NEXT_CARD.fetch_add(1, Ordering::Relaxed);
        Self(format!("card-{:x}", n))
    }

    /// Create from an existing ID string.
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_unique() {
        let a = CardId::generate();
        let b = CardId::generate();
        assert_ne!(a, b);
        assert!(a.as_str().starts_with("card-"));
    }

    #[test]
    fn test_from_string_display() {
        let id = CardId::from_string("hero-card");
        assert_eq!(id.to_string(), "hero-card");
    }
}
