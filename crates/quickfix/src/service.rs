//! Contracts for the collaborators a quick fix menu is wired to.
//!
//! The menu never draws anything itself. It asks an [`EditorView`] where a
//! document position ends up on screen, hands a [`ContextMenuDescriptor`] to a
//! [`ContextMenuService`], and leaves applying the chosen action to an
//! [`ApplyCodeAction`] callback.

use std::cell::RefCell;
use std::rc::Rc;

use kite_primitives::{Anchor, BoxFutureLocal, DocPosition, PagePosition, ScreenPoint, ScrollType, VisiblePosition};

use crate::action::CodeAction;
use crate::error::QuickFixError;
use crate::item::MenuItem;
use crate::widget::to_page_coords;

/// Layout queries and scrolling on the editor a menu is attached to.
pub trait EditorView {
	/// Current cursor position.
	fn position(&self) -> DocPosition;

	/// Scrolls `pos` into view.
	fn reveal_position(&mut self, pos: DocPosition, scroll: ScrollType);

	/// Flushes pending layout synchronously so coordinate queries are current.
	fn render(&mut self);

	/// Pixel offset of `pos` relative to the scrollable content, or `None` if
	/// the position is not laid out.
	fn scrolled_visible_position(&self, pos: DocPosition) -> Option<VisiblePosition>;

	/// Page-level origin of the editor's root rendering surface.
	fn surface_page_position(&self) -> PagePosition;
}

/// Displays transient popup menus.
pub trait ContextMenuService {
	/// Presents a menu. The service owns the descriptor until it is dismissed.
	fn show_context_menu(&self, descriptor: ContextMenuDescriptor);
}

/// Applies a chosen code action to the workspace.
pub type ApplyCodeAction = Rc<dyn Fn(CodeAction) -> BoxFutureLocal<'static, anyhow::Result<()>>>;

/// Pending menu entries, resolved once the action provider answers.
pub type PendingItems = BoxFutureLocal<'static, Result<Vec<MenuItem>, QuickFixError>>;

/// Resolves a menu [`Anchor`] to page coordinates on demand.
///
/// Document anchors are translated through the editor the first time they
/// are asked for. The result is cached, so later queries neither scroll nor
/// re-render the editor.
pub struct AnchorResolver {
	anchor: Anchor,
	editor: Rc<RefCell<dyn EditorView>>,
	scroll: ScrollType,
}

impl AnchorResolver {
	pub fn new(anchor: Anchor, editor: Rc<RefCell<dyn EditorView>>, scroll: ScrollType) -> Self {
		Self { anchor, editor, scroll }
	}

	/// Returns the anchor in page coordinates.
	///
	/// If the editor is borrowed elsewhere (the host resolves the anchor while
	/// still inside an editor command), the page origin is returned and the
	/// document anchor stays unresolved so a later query can retry.
	pub fn resolve(&mut self) -> ScreenPoint {
		let pos = match self.anchor {
			Anchor::Screen(point) => return point,
			Anchor::Document(pos) => pos,
		};
		let Ok(mut editor) = self.editor.try_borrow_mut() else {
			tracing::warn!(line = pos.line, column = pos.column, "editor busy while resolving menu anchor, anchoring at page origin");
			return ScreenPoint::default();
		};
		let point = to_page_coords(&mut *editor, pos, self.scroll);
		self.anchor = Anchor::Screen(point);
		point
	}
}

/// Everything a presentation service needs to show one menu.
///
/// Dropping the descriptor counts as dismissing the menu.
pub struct ContextMenuDescriptor {
	anchor: AnchorResolver,
	actions: Option<PendingItems>,
	on_hide: Option<Box<dyn FnOnce()>>,
	/// Preselect the first entry once items are available.
	pub auto_select_first_item: bool,
}

impl ContextMenuDescriptor {
	pub fn new(anchor: AnchorResolver, actions: PendingItems, on_hide: impl FnOnce() + 'static, auto_select_first_item: bool) -> Self {
		Self {
			anchor,
			actions: Some(actions),
			on_hide: Some(Box::new(on_hide)),
			auto_select_first_item,
		}
	}

	/// Resolves where the menu should appear.
	pub fn resolve_anchor(&mut self) -> ScreenPoint {
		self.anchor.resolve()
	}

	/// Takes the pending menu entries. Returns `None` once taken.
	pub fn take_actions(&mut self) -> Option<PendingItems> {
		self.actions.take()
	}

	/// Reports that the menu was dismissed. Only the first call has an effect.
	pub fn hide(&mut self) {
		if let Some(on_hide) = self.on_hide.take() {
			on_hide();
		}
	}

	/// Returns true once [`Self::hide`] has run.
	pub fn is_hidden(&self) -> bool {
		self.on_hide.is_none()
	}
}

impl Drop for ContextMenuDescriptor {
	fn drop(&mut self) {
		self.hide();
	}
}
