//! Status bar configuration.
//!
//! Parsed from TOML. Every key is optional; missing keys take their defaults.
//!
//! ```toml
//! trim-response = true
//!
//! [history]
//! enabled = true
//! skip-consecutive-duplicates = true
//! ```

use serde::Deserialize;

/// Top-level status bar settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct InfobarConfig {
	/// Strip surrounding whitespace from accepted prompt responses.
	pub trim_response: bool,
	/// Prompt history settings.
	pub history: HistoryConfig,
}

impl Default for InfobarConfig {
	fn default() -> Self {
		Self {
			trim_response: true,
			history: HistoryConfig::default(),
		}
	}
}

impl InfobarConfig {
	/// Parses settings from a TOML document.
	pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
		Ok(toml::from_str(source)?)
	}
}

/// Prompt history settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct HistoryConfig {
	/// Record accepted responses of prompts opened with a history category.
	pub enabled: bool,
	/// Skip a response identical to the category's latest entry.
	pub skip_consecutive_duplicates: bool,
}

impl Default for HistoryConfig {
	fn default() -> Self {
		Self {
			enabled: true,
			skip_consecutive_duplicates: true,
		}
	}
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	/// Error parsing TOML syntax or schema.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),
}
