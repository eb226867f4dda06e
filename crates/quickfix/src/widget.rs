//! The quick fix context menu.
//!
//! [`QuickFixMenu::show`] is synchronous: it maps the pending code actions to
//! pending menu entries and hands both to the presentation service together
//! with a lazy anchor. Nothing is awaited here. The presentation service
//! decides when to resolve the anchor and when to wait for entries.
//!
//! Document anchors are translated by revealing the position, forcing a
//! layout pass, and reading back the editor's *cursor* coordinates. This
//! relies on revealing the position also bringing the cursor there.

use std::cell::{Cell, RefCell};
use std::future::Future;
use std::rc::Rc;

use futures::FutureExt;
use kite_primitives::{Anchor, DocPosition, ScreenPoint, ScrollType};
use tokio::sync::watch;

use crate::action::CodeAction;
use crate::config::QuickFixConfig;
use crate::error::QuickFixError;
use crate::item::MenuItem;
use crate::service::{AnchorResolver, ApplyCodeAction, ContextMenuDescriptor, ContextMenuService, EditorView};

/// Visibility of the most recently shown menu.
///
/// Each `show` bumps the generation, so a late dismissal of a superseded
/// menu cannot hide its replacement.
#[derive(Default)]
struct Visibility {
	generation: Cell<u64>,
	visible: Cell<bool>,
}

impl Visibility {
	fn open(&self) -> u64 {
		let generation = self.generation.get().wrapping_add(1);
		self.generation.set(generation);
		self.visible.set(true);
		generation
	}

	fn close(&self, generation: u64) {
		if self.generation.get() == generation {
			self.visible.set(false);
		}
	}
}

/// Context menu listing quick fixes at an editor position.
pub struct QuickFixMenu {
	editor: Rc<RefCell<dyn EditorView>>,
	menu_service: Rc<dyn ContextMenuService>,
	apply: ApplyCodeAction,
	config: QuickFixConfig,
	visibility: Rc<Visibility>,
	executed: Rc<watch::Sender<u64>>,
}

impl QuickFixMenu {
	pub fn new(editor: Rc<RefCell<dyn EditorView>>, menu_service: Rc<dyn ContextMenuService>, apply: ApplyCodeAction) -> Self {
		Self::with_config(editor, menu_service, apply, QuickFixConfig::default())
	}

	pub fn with_config(
		editor: Rc<RefCell<dyn EditorView>>,
		menu_service: Rc<dyn ContextMenuService>,
		apply: ApplyCodeAction,
		config: QuickFixConfig,
	) -> Self {
		let (executed, _) = watch::channel(0);
		Self {
			editor,
			menu_service,
			apply,
			config,
			visibility: Rc::default(),
			executed: Rc::new(executed),
		}
	}

	/// Shows a menu for `fixes` at `at`.
	///
	/// Returns immediately. Entries appear once `fixes` resolves; a provider
	/// failure surfaces through the descriptor's pending entries.
	pub fn show<F>(&self, fixes: F, at: impl Into<Anchor>)
	where
		F: Future<Output = anyhow::Result<Vec<CodeAction>>> + 'static,
	{
		let at = at.into();
		let config = self.config.clone();
		let apply = Rc::clone(&self.apply);
		let executed = Rc::clone(&self.executed);
		let items = fixes
			.map(move |result| -> Result<Vec<MenuItem>, QuickFixError> {
				let actions = result.inspect_err(|error| tracing::warn!(error = %error, "code action provider failed"))?;
				tracing::trace!(count = actions.len(), "quick fix actions resolved");
				Ok(actions
					.into_iter()
					.map(|action| MenuItem::for_action(action, &config, Rc::clone(&apply), Rc::clone(&executed)))
					.collect())
			})
			.boxed_local();

		let anchor = AnchorResolver::new(at, Rc::clone(&self.editor), self.config.reveal_scroll);
		let generation = self.visibility.open();
		let visibility = Rc::clone(&self.visibility);
		let on_hide = move || visibility.close(generation);

		tracing::debug!(anchor = ?at, generation, "showing quick fix menu");
		let descriptor = ContextMenuDescriptor::new(anchor, items, on_hide, self.config.auto_select_first_item);
		self.menu_service.show_context_menu(descriptor);
	}

	/// Returns true while the last shown menu has not been dismissed.
	pub fn is_visible(&self) -> bool {
		self.visibility.visible.get()
	}

	/// Subscribes to the "action executed" notification.
	///
	/// The channel carries a running count of applied selections, bumped once
	/// per selection after the apply callback settles. A slow reader never
	/// loses executions: [`watch::Receiver::changed`] wakes on the next bump and
	/// the count tells how many happened since the last look.
	pub fn subscribe(&self) -> watch::Receiver<u64> {
		self.executed.subscribe()
	}
}

/// Translates a document position into page coordinates just below its line.
pub(crate) fn to_page_coords(editor: &mut dyn EditorView, pos: DocPosition, scroll: ScrollType) -> ScreenPoint {
	editor.reveal_position(pos, scroll);
	editor.render();

	let cursor = editor.position();
	let visible = editor.scrolled_visible_position(cursor);
	let surface = editor.surface_page_position();
	let Some(visible) = visible else {
		tracing::warn!(line = cursor.line, column = cursor.column, "cursor not laid out, anchoring at editor origin");
		return ScreenPoint::new(surface.left, surface.top);
	};
	visible.below_line_on(surface)
}
