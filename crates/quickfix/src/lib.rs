//! Quick fix context menu for editor code actions.
//!
//! [`QuickFixMenu`] takes a pending list of [`CodeAction`]s and an [`Anchor`],
//! hands a menu descriptor to a [`ContextMenuService`], and applies whichever
//! action the user picks through an injected callback. Every applied action,
//! successful or not, is announced on the menu's "action executed" channel.
//!
//! - [`action`] - Code action model and LSP conversion
//! - [`item`] - Menu items derived from code actions
//! - [`service`] - Collaborator contracts (editor view, presentation service)
//! - [`widget`] - The quick fix menu itself
//! - [`popup`] - Headless presentation model for hosts without a native menu

pub mod action;
pub mod config;
pub mod error;
pub mod item;
pub mod popup;
pub mod service;
pub mod widget;

#[cfg(test)]
mod testing;

pub use action::{CodeAction, Command};
pub use config::QuickFixConfig;
pub use error::{ConfigError, QuickFixError};
pub use item::MenuItem;
pub use kite_primitives::{Anchor, DocPosition, PagePosition, ScreenPoint, ScrollType, VisiblePosition};
pub use popup::{MenuKey, MenuOutcome, PopupMenu, QueuedMenuService};
pub use service::{AnchorResolver, ApplyCodeAction, ContextMenuDescriptor, ContextMenuService, EditorView};
pub use widget::QuickFixMenu;
