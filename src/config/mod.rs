//! Runtime settings for the calculator shell.
//!
//! Settings are built with [`SettingsBuilder`] or read from a TOML file:
//!
//! ```toml
//! error_reset_delay_ms = 2000
//! warning_display_ms = 3000
//! error_marker = "Error"
//! history_limit = 256
//! ```
//!
//! Every key is optional; unknown keys are rejected.

pub mod error;

pub use error::ConfigError;

use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

const DEFAULT_ERROR_RESET_DELAY: Duration = Duration::from_millis(2000);
const DEFAULT_WARNING_DISPLAY: Duration = Duration::from_millis(3000);
const DEFAULT_ERROR_MARKER: &str = "Error";
const DEFAULT_HISTORY_LIMIT: usize = 256;

/// Validated calculator settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    error_reset_delay: Duration,
    warning_display: Duration,
    error_marker: String,
    history_limit: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            error_reset_delay: DEFAULT_ERROR_RESET_DELAY,
            warning_display: DEFAULT_WARNING_DISPLAY,
            error_marker: DEFAULT_ERROR_MARKER.to_string(),
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl Settings {
    pub fn builder() -> SettingsBuilder {
        SettingsBuilder::new()
    }

    /// How long the error marker stays up before the calculator resets.
    pub fn error_reset_delay(&self) -> Duration {
        self.error_reset_delay
    }

    /// How long a warning stays visible.
    pub fn warning_display(&self) -> Duration {
        self.warning_display
    }

    pub fn error_marker(&self) -> &str {
        &self.error_marker
    }

    /// Number of transitions kept in the calculator's history.
    pub fn history_limit(&self) -> usize {
        self.history_limit
    }

    /// Parse settings from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let file: SettingsFile = toml::from_str(text)?;
        file.into_builder().build()
    }

    /// Read settings from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}

/// On-disk form of [`Settings`].
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct SettingsFile {
    error_reset_delay_ms: Option<u64>,
    warning_display_ms: Option<u64>,
    error_marker: Option<String>,
    history_limit: Option<usize>,
}

impl SettingsFile {
    fn into_builder(self) -> SettingsBuilder {
        let mut builder = SettingsBuilder::new();
        if let Some(ms) = self.error_reset_delay_ms {
            builder = builder.error_reset_delay(Duration::from_millis(ms));
        }
        if let Some(ms) = self.warning_display_ms {
            builder = builder.warning_display(Duration::from_millis(ms));
        }
        if let Some(marker) = self.error_marker {
            builder = builder.error_marker(marker);
        }
        if let Some(limit) = self.history_limit {
            builder = builder.history_limit(limit);
        }
        builder
    }
}

/// Builder for [`Settings`] with a fluent API.
///
/// # Example
///
/// ```rust
/// use keypad::config::Settings;
/// use std::time::Duration;
///
/// let settings = Settings::builder()
///     .error_reset_delay(Duration::from_millis(500))
///     .error_marker("E")
///     .build()
///     .unwrap();
///
/// assert_eq!(settings.error_marker(), "E");
/// assert_eq!(settings.warning_display(), Duration::from_secs(3));
/// ```
#[derive(Clone, Debug)]
pub struct SettingsBuilder {
    settings: Settings,
}

impl SettingsBuilder {
    pub fn new() -> Self {
        Self {
            settings: Settings::default(),
        }
    }

    pub fn error_reset_delay(mut self, delay: Duration) -> Self {
        self.settings.error_reset_delay = delay;
        self
    }

    pub fn warning_display(mut self, duration: Duration) -> Self {
        self.settings.warning_display = duration;
        self
    }

    pub fn error_marker(mut self, marker: impl Into<String>) -> Self {
        self.settings.error_marker = marker.into();
        self
    }

    pub fn history_limit(mut self, limit: usize) -> Self {
        self.settings.history_limit = limit;
        self
    }

    /// Validate and build the settings.
    pub fn build(self) -> Result<Settings, ConfigError> {
        if self.settings.error_marker.trim().is_empty() {
            return Err(ConfigError::EmptyErrorMarker);
        }
        if self.settings.history_limit == 0 {
            return Err(ConfigError::ZeroHistoryLimit);
        }
        Ok(self.settings)
    }
}

impl Default for SettingsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_timings() {
        let settings = Settings::default();
        assert_eq!(settings.error_reset_delay(), Duration::from_secs(2));
        assert_eq!(settings.warning_display(), Duration::from_secs(3));
        assert_eq!(settings.error_marker(), "Error");
        assert_eq!(settings.history_limit(), 256);
    }

    #[test]
    fn builder_overrides_fields() {
        let settings = SettingsBuilder::new()
            .warning_display(Duration::from_millis(100))
            .history_limit(4)
            .build()
            .unwrap();

        assert_eq!(settings.warning_display(), Duration::from_millis(100));
        assert_eq!(settings.history_limit(), 4);
        assert_eq!(settings.error_reset_delay(), Duration::from_secs(2));
    }

    #[test]
    fn builder_rejects_blank_marker() {
        let result = SettingsBuilder::new().error_marker("  ").build();
        assert!(matches!(result, Err(ConfigError::EmptyErrorMarker)));
    }

    #[test]
    fn builder_rejects_zero_history() {
        let result = SettingsBuilder::new().history_limit(0).build();
        assert!(matches!(result, Err(ConfigError::ZeroHistoryLimit)));
    }

    #[test]
    fn toml_fields_are_optional() {
        let settings = Settings::from_toml_str("").unwrap();
        assert_eq!(settings, Settings::default());

        let settings = Settings::from_toml_str("error_reset_delay_ms = 750\nerror_marker = \"ERR\"").unwrap();
        assert_eq!(settings.error_reset_delay(), Duration::from_millis(750));
        assert_eq!(settings.error_marker(), "ERR");
    }

    #[test]
    fn toml_rejects_unknown_keys() {
        let result = Settings::from_toml_str("precision = 4");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn toml_values_are_validated() {
        let result = Settings::from_toml_str("history_limit = 0");
        assert!(matches!(result, Err(ConfigError::ZeroHistoryLimit)));
    }

    #[test]
    fn missing_file_reports_path() {
        let path = Path::new("/nonexistent/keypad.toml");
        match Settings::load(path) {
            Err(ConfigError::Read { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected read error, got {other:?}"),
        }
    }
}
