//! Card configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use card_observability::{LogFormat, LogLevel};
use serde::{Deserialize, Serialize};

use crate::notify::{Notice, NoticeKind, ToastPosition};
use crate::product::{DESCRIPTION_LIMIT, ELLIPSIS};
use crate::CardError;

/// File names searched for, in order, in each directory.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["card.toml", ".card.toml", "card.json"];

/// Top-level card configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardConfig {
    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub toast: ToastConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Static text formatting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Characters of description kept before truncation.
    #[serde(default = "default_description_limit")]
    pub description_limit: usize,

    /// Suffix for truncated descriptions.
    #[serde(default = "default_ellipsis")]
    pub ellipsis: String,
}

fn default_description_limit() -> usize {
    DESCRIPTION_LIMIT
}

fn default_ellipsis() -> String {
    ELLIPSIS.to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            description_limit: default_description_limit(),
            ellipsis: default_ellipsis(),
        }
    }
}

/// The add-to-cart confirmation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToastConfig {
    #[serde(default = "default_toast_message")]
    pub message: String,

    #[serde(default)]
    pub position: ToastPosition,

    #[serde(default = "default_auto_close_ms")]
    pub auto_close_ms: u64,
}

fn default_toast_message() -> String {
    "Item added to cart!".to_string()
}

fn default_auto_close_ms() -> u64 {
    2000
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            message: default_toast_message(),
            position: ToastPosition::default(),
            auto_close_ms: default_auto_close_ms(),
        }
    }
}

impl ToastConfig {
    /// The notice sent when an item is added.
    pub fn added_notice(&self) -> Notice {
        Notice {
            message: self.message.clone(),
            kind: NoticeKind::Success,
            position: self.position,
            auto_close: Duration::from_millis(self.auto_close_ms),
        }
    }
}

/// Card log output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: LogLevel,

    #[serde(default)]
    pub format: LogFormat,

    /// When false, entries only reach `tracing`.
    #[serde(default = "default_true")]
    pub stderr: bool,
}

fn default_level() -> LogLevel {
    LogLevel::Info
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
            stderr: true,
        }
    }
}

impl CardConfig {
    /// Load config from a file. `.json` files are read as JSON, anything else as TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CardError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| CardError::io(path.display().to_string(), e))?;

        let config: CardConfig = if is_json(path) {
            serde_json::from_str(&content)?
        } else {
            toml::from_str(&content)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Save config to a file, picking the format from the extension.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), CardError> {
        let path = path.as_ref();
        let content = if is_json(path) {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content).map_err(|e| CardError::io(path.display().to_string(), e))
    }

    /// Look for a config file in `start` and each of its parents.
    pub fn find(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            for name in CONFIG_FILE_NAMES {
                let candidate = current.join(name);
                if candidate.is_file() {
                    return Some(candidate);
                }
            }

            if !current.pop() {
                return None;
            }
        }
    }

    /// Reject values that would make the card unusable.
    pub fn validate(&self) -> Result<(), CardError> {
        if self.display.description_limit == 0 {
            return Err(CardError::InvalidConfig(
                "display.description_limit must be at least 1".to_string(),
            ));
        }
        if self.toast.auto_close_ms == 0 {
            return Err(CardError::InvalidConfig(
                "toast.auto_close_ms must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CardConfig::default();
        assert_eq!(config.display.description_limit, 170);
        assert_eq!(config.display.ellipsis, "...");
        assert_eq!(config.toast.message, "Item added to cart!");
        assert_eq!(config.toast.position, ToastPosition::TopRight);
        assert_eq!(config.toast.auto_close_ms, 2000);
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn test_added_notice() {
        let notice = ToastConfig::default().added_notice();
        assert_eq!(notice.message, "Item added to cart!");
        assert_eq!(notice.position.as_str(), "top-right");
        assert_eq!(notice.auto_close, Duration::from_millis(2000));
        assert_eq!(notice.kind, NoticeKind::Success);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: CardConfig = toml::from_str(
            r#"
            [toast]
            position = "bottom-left"
            "#,
        )
        .unwrap();
        assert_eq!(config.toast.position, ToastPosition::BottomLeft);
        assert_eq!(config.toast.auto_close_ms, 2000);
        assert_eq!(config.display, DisplayConfig::default());
    }

    #[test]
    fn test_save_and_load_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("card.toml");

        let mut config = CardConfig::default();
        config.toast.auto_close_ms = 3500;
        config.logging.format = LogFormat::Human;
        config.save(&path).unwrap();

        assert_eq!(CardConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_save_and_load_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("card.json");

        let mut config = CardConfig::default();
        config.display.description_limit = 80;
        config.save(&path).unwrap();

        assert_eq!(CardConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_load_rejects_zero_limit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("card.toml");
        std::fs::write(&path, "[display]\ndescription_limit = 0\n").unwrap();

        assert!(matches!(
            CardConfig::load(&path),
            Err(CardError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = CardConfig::load(dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, CardError::Io { .. }));
    }

    #[test]
    fn test_find_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join(".card.toml"), "").unwrap();

        let found = CardConfig::find(&nested).unwrap();
        assert_eq!(found, dir.path().join(".card.toml"));
    }
}
