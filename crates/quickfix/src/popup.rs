//! Headless presentation model for quick fix menus.
//!
//! Hosts without a native context menu can pair [`QueuedMenuService`] with
//! [`PopupMenu`]: the service parks the latest descriptor, the host's event
//! loop opens it, renders [`PopupMenu::visible_range`] at
//! [`PopupMenu::anchor`], and feeds keys through [`PopupMenu::handle_key`].
//!
//! Navigation follows the editor's LSP menus: up/down wrap, page keys clamp.

use std::cell::RefCell;
use std::ops::Range;

use kite_primitives::ScreenPoint;

use crate::error::QuickFixError;
use crate::item::MenuItem;
use crate::service::{ContextMenuDescriptor, ContextMenuService};

/// Presentation service that keeps the most recent menu for the host.
///
/// Showing a new menu dismisses one that was never picked up.
#[derive(Default)]
pub struct QueuedMenuService {
	pending: RefCell<Option<ContextMenuDescriptor>>,
}

impl QueuedMenuService {
	pub fn new() -> Self {
		Self::default()
	}

	/// Takes the menu waiting to be opened, if any.
	pub fn take_pending(&self) -> Option<ContextMenuDescriptor> {
		self.pending.borrow_mut().take()
	}

	pub fn has_pending(&self) -> bool {
		self.pending.borrow().is_some()
	}
}

impl ContextMenuService for QueuedMenuService {
	fn show_context_menu(&self, descriptor: ContextMenuDescriptor) {
		let superseded = self.pending.replace(Some(descriptor));
		if let Some(mut superseded) = superseded {
			tracing::debug!("dismissing superseded context menu");
			superseded.hide();
		}
	}
}

/// Keys understood by an open popup menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuKey {
	Up,
	Down,
	PageUp,
	PageDown,
	Accept,
	Dismiss,
}

/// Result of feeding a key to a popup menu.
#[derive(Debug)]
pub enum MenuOutcome {
	/// The key moved the selection.
	Consumed,
	/// The key had no effect.
	Ignored,
	/// The menu was dismissed without a selection.
	Dismissed,
	/// An entry was chosen and the menu closed. Await [`MenuItem::run`].
	Activated(MenuItem),
}

/// An open popup menu with resolved entries.
pub struct PopupMenu {
	descriptor: ContextMenuDescriptor,
	anchor: ScreenPoint,
	items: Vec<MenuItem>,
	selected_idx: Option<usize>,
	scroll_offset: usize,
}

impl PopupMenu {
	/// Maximum number of visible entries.
	pub const MAX_VISIBLE: usize = 10;

	/// Opens a menu from a descriptor.
	///
	/// The anchor is resolved first, then the entries are awaited. If the
	/// provider fails the menu is dismissed and the error returned.
	pub async fn open(mut descriptor: ContextMenuDescriptor) -> Result<Self, QuickFixError> {
		let anchor = descriptor.resolve_anchor();
		let items = match descriptor.take_actions() {
			Some(pending) => match pending.await {
				Ok(items) => items,
				Err(error) => {
					descriptor.hide();
					return Err(error);
				}
			},
			None => Vec::new(),
		};
		let selected_idx = (descriptor.auto_select_first_item && !items.is_empty()).then_some(0);
		Ok(Self {
			descriptor,
			anchor,
			items,
			selected_idx,
			scroll_offset: 0,
		})
	}

	pub fn anchor(&self) -> ScreenPoint {
		self.anchor
	}

	pub fn items(&self) -> &[MenuItem] {
		&self.items
	}

	pub fn selected_idx(&self) -> Option<usize> {
		self.selected_idx
	}

	pub fn is_open(&self) -> bool {
		!self.descriptor.is_hidden()
	}

	/// Returns the range of visible entries (start..end indices).
	pub fn visible_range(&self) -> Range<usize> {
		let end = (self.scroll_offset + Self::MAX_VISIBLE).min(self.items.len());
		self.scroll_offset..end
	}

	/// Handles a key press while the menu is open.
	pub fn handle_key(&mut self, key: MenuKey) -> MenuOutcome {
		if !self.is_open() {
			return MenuOutcome::Ignored;
		}
		match key {
			MenuKey::Up => self.move_selection(-1),
			MenuKey::Down => self.move_selection(1),
			MenuKey::PageUp => self.page_selection(-1),
			MenuKey::PageDown => self.page_selection(1),
			MenuKey::Dismiss => {
				self.descriptor.hide();
				MenuOutcome::Dismissed
			}
			MenuKey::Accept => match self.selected_idx {
				Some(idx) => self.activate(idx),
				None => MenuOutcome::Ignored,
			},
		}
	}

	/// Chooses the entry at `idx` (e.g. from a mouse click) and closes the menu.
	pub fn activate(&mut self, idx: usize) -> MenuOutcome {
		if !self.is_open() || !self.items.get(idx).is_some_and(|item| item.enabled) {
			return MenuOutcome::Ignored;
		}
		let item = self.items.remove(idx);
		self.selected_idx = None;
		self.descriptor.hide();
		MenuOutcome::Activated(item)
	}

	fn move_selection(&mut self, delta: isize) -> MenuOutcome {
		if self.items.is_empty() {
			return MenuOutcome::Ignored;
		}
		let total = self.items.len() as isize;
		let current = self.selected_idx.map_or(if delta > 0 { -1 } else { total }, |idx| idx as isize);
		let next = (current + delta).rem_euclid(total);
		self.select(next as usize)
	}

	fn page_selection(&mut self, direction: isize) -> MenuOutcome {
		if self.items.is_empty() {
			return MenuOutcome::Ignored;
		}
		let step = Self::MAX_VISIBLE as isize;
		let delta = if direction >= 0 { step } else { -step };
		let last = self.items.len() as isize - 1;
		let current = self.selected_idx.unwrap_or(0) as isize;
		let next = (current + delta).clamp(0, last);
		self.select(next as usize)
	}

	fn select(&mut self, idx: usize) -> MenuOutcome {
		self.selected_idx = Some(idx);
		self.ensure_selected_visible();
		MenuOutcome::Consumed
	}

	fn ensure_selected_visible(&mut self) {
		let Some(selected) = self.selected_idx else {
			return;
		};
		if selected < self.scroll_offset {
			self.scroll_offset = selected;
		}
		let visible_end = self.scroll_offset + Self::MAX_VISIBLE;
		if selected >= visible_end {
			self.scroll_offset = selected.saturating_sub(Self::MAX_VISIBLE - 1);
		}
	}
}
