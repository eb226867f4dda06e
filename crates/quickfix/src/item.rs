//! Menu entries derived from code actions.

use std::fmt;
use std::rc::Rc;

use kite_primitives::BoxFutureLocal;
use tokio::sync::watch;

use crate::action::CodeAction;
use crate::config::QuickFixConfig;
use crate::service::ApplyCodeAction;

/// One selectable entry in a quick fix menu.
///
/// Running an item consumes it, so a selection can only be applied once.
pub struct MenuItem {
	/// Identifier of the originating command.
	pub id: String,
	/// Display label, glyph included.
	pub label: String,
	pub enabled: bool,
	handler: Box<dyn FnOnce() -> BoxFutureLocal<'static, ()>>,
}

impl fmt::Debug for MenuItem {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("MenuItem")
			.field("id", &self.id)
			.field("label", &self.label)
			.field("enabled", &self.enabled)
			.finish_non_exhaustive()
	}
}

impl MenuItem {
	pub fn new(id: impl Into<String>, label: impl Into<String>, handler: impl FnOnce() -> BoxFutureLocal<'static, ()> + 'static) -> Self {
		Self {
			id: id.into(),
			label: label.into(),
			enabled: true,
			handler: Box::new(handler),
		}
	}

	/// Builds the entry for `action`.
	///
	/// Activating it applies the action and then bumps the `executed` counter,
	/// whether or not applying succeeded. Failures are logged and dropped.
	pub(crate) fn for_action(action: CodeAction, config: &QuickFixConfig, apply: ApplyCodeAction, executed: Rc<watch::Sender<u64>>) -> Self {
		let id = action.command.id.clone();
		let label = config.label_for(&action);
		let handler = move || -> BoxFutureLocal<'static, ()> {
			Box::pin(async move {
				let id = action.command.id.clone();
				match apply(action).await {
					Ok(()) => tracing::debug!(action = %id, "code action applied"),
					Err(error) => tracing::warn!(action = %id, error = %error, "code action failed to apply"),
				}
				executed.send_modify(|count| *count = count.wrapping_add(1));
			})
		};
		Self::new(id, label, handler)
	}

	/// Activates the entry.
	pub fn run(self) -> BoxFutureLocal<'static, ()> {
		(self.handler)()
	}
}
