//! Error types for the quick fix menu.

use thiserror::Error;

/// Errors surfaced through a menu's pending item list.
#[derive(Debug, Error)]
pub enum QuickFixError {
	/// The code action provider failed to produce actions.
	#[error(transparent)]
	Provider(#[from] anyhow::Error),
}

/// Errors that can occur when parsing quick fix configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error parsing TOML syntax or an unexpected option.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// A glyph option was empty.
	#[error("glyph option '{0}' must not be empty")]
	EmptyGlyph(&'static str),
}
