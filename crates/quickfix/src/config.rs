//! Quick fix menu options.

use kite_primitives::ScrollType;
use serde::Deserialize;

use crate::action::CodeAction;
use crate::error::ConfigError;

/// Options controlling how the quick fix menu labels and presents actions.
///
/// ```toml
/// diagnostic_glyph = "💡"
/// plain_glyph = "✂️"
/// auto_select_first_item = true
/// reveal_scroll = "immediate"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QuickFixConfig {
	/// Label prefix for actions that address diagnostics.
	pub diagnostic_glyph: String,
	/// Label prefix for every other action.
	pub plain_glyph: String,
	/// Ask the presentation service to preselect the first entry.
	pub auto_select_first_item: bool,
	/// Scroll behavior used when revealing a document anchor.
	pub reveal_scroll: ScrollType,
}

impl Default for QuickFixConfig {
	fn default() -> Self {
		Self {
			diagnostic_glyph: "💡".to_string(),
			plain_glyph: "✂️".to_string(),
			auto_select_first_item: true,
			reveal_scroll: ScrollType::Immediate,
		}
	}
}

impl QuickFixConfig {
	/// Parses options from TOML. Missing keys keep their defaults.
	pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
		let config: Self = toml::from_str(input)?;
		if config.diagnostic_glyph.is_empty() {
			return Err(ConfigError::EmptyGlyph("diagnostic_glyph"));
		}
		if config.plain_glyph.is_empty() {
			return Err(ConfigError::EmptyGlyph("plain_glyph"));
		}
		Ok(config)
	}

	/// Builds the menu label for an action: glyph, a space, then the title.
	pub fn label_for(&self, action: &CodeAction) -> String {
		let glyph = if action.is_diagnostic_driven() { &self.diagnostic_glyph } else { &self.plain_glyph };
		format!("{glyph} {}", action.title)
	}
}

#[cfg(test)]
mod tests {
	use lsp_types::Diagnostic;

	use super::*;
	use crate::action::Command;

	#[test]
	fn defaults_match_stock_menu() {
		let config = QuickFixConfig::default();
		assert_eq!(config.diagnostic_glyph, "💡");
		assert_eq!(config.plain_glyph, "✂️");
		assert!(config.auto_select_first_item);
		assert_eq!(config.reveal_scroll, ScrollType::Immediate);
	}

	#[test]
	fn empty_toml_yields_defaults() {
		assert_eq!(QuickFixConfig::from_toml_str("").unwrap(), QuickFixConfig::default());
	}

	#[test]
	fn partial_toml_overrides_only_given_keys() {
		let config = QuickFixConfig::from_toml_str("auto_select_first_item = false\nreveal_scroll = \"smooth\"\n").unwrap();
		assert!(!config.auto_select_first_item);
		assert_eq!(config.reveal_scroll, ScrollType::Smooth);
		assert_eq!(config.plain_glyph, "✂️");
	}

	#[test]
	fn unknown_option_is_rejected() {
		let err = QuickFixConfig::from_toml_str("glyph = \"*\"").unwrap_err();
		assert!(matches!(err, ConfigError::Toml(_)));
	}

	#[test]
	fn empty_glyph_is_rejected() {
		let err = QuickFixConfig::from_toml_str("plain_glyph = \"\"").unwrap_err();
		assert!(matches!(err, ConfigError::EmptyGlyph("plain_glyph")));
	}

	#[test]
	fn label_uses_glyph_for_action_kind() {
		let config = QuickFixConfig::default();
		let plain = CodeAction::new("Extract", Command::new("extract", "Extract"));
		let fix = plain.clone().with_diagnostics(vec![Diagnostic::default()]);
		assert_eq!(config.label_for(&plain), "✂️ Extract");
		assert_eq!(config.label_for(&fix), "💡 Extract");
	}
}
