//! Code actions as seen by the quick fix menu.
//!
//! Actions are produced elsewhere (usually by a language server) and only read
//! here. The menu needs a title to display, a command to identify the entry, and
//! the diagnostics the action addresses so it can tell fixes apart from plain
//! refactorings.

use lsp_types::{CodeActionOrCommand, Diagnostic};

/// Command identifying a code action.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Command {
	/// Command identifier, used as the menu entry id.
	pub id: String,
	/// Human-readable command title.
	pub title: String,
	/// Arguments passed along when the command runs.
	pub arguments: Vec<serde_json::Value>,
}

impl Command {
	pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			title: title.into(),
			arguments: Vec::new(),
		}
	}
}

impl From<lsp_types::Command> for Command {
	fn from(command: lsp_types::Command) -> Self {
		Self {
			id: command.command,
			title: command.title,
			arguments: command.arguments.unwrap_or_default(),
		}
	}
}

/// A suggested edit or command offered in the quick fix menu.
#[derive(Debug, Clone, PartialEq)]
pub struct CodeAction {
	/// Title shown in the menu.
	pub title: String,
	/// Command identifying this action.
	pub command: Command,
	/// Diagnostics this action resolves.
	pub diagnostics: Vec<Diagnostic>,
	/// LSP code action kind (`quickfix`, `refactor.extract`, ...), if known.
	pub kind: Option<String>,
}

impl CodeAction {
	pub fn new(title: impl Into<String>, command: Command) -> Self {
		Self {
			title: title.into(),
			command,
			diagnostics: Vec::new(),
			kind: None,
		}
	}

	pub fn with_diagnostics(mut self, diagnostics: Vec<Diagnostic>) -> Self {
		self.diagnostics = diagnostics;
		self
	}

	/// Returns true if the action addresses at least one diagnostic.
	pub fn is_diagnostic_driven(&self) -> bool {
		!self.diagnostics.is_empty()
	}

	/// Converts a language server response entry into a menu action.
	///
	/// Disabled code actions are dropped. A code action without a command is
	/// identified by its kind, falling back to its title.
	pub fn from_lsp(entry: CodeActionOrCommand) -> Option<Self> {
		match entry {
			CodeActionOrCommand::Command(command) => {
				let command = Command::from(command);
				Some(Self::new(command.title.clone(), command))
			}
			CodeActionOrCommand::CodeAction(action) => {
				if action.disabled.is_some() {
					return None;
				}
				let kind = action.kind.as_ref().map(|kind| kind.as_str().to_string());
				let command = match action.command {
					Some(command) => Command::from(command),
					None => Command::new(kind.clone().unwrap_or_else(|| action.title.clone()), action.title.clone()),
				};
				Some(Self {
					title: action.title,
					command,
					diagnostics: action.diagnostics.unwrap_or_default(),
					kind,
				})
			}
		}
	}
}
