//! Core types for positioning editor popups: screen and page geometry,
//! document positions, popup anchors, and local future aliases.

/// Popup anchors and document positions.
pub mod anchor;
/// Async future aliases.
pub mod future;
/// Pixel geometry in page and editor-content space.
pub mod geometry;

pub use anchor::{Anchor, DocPosition, ScrollType};
pub use future::{BoxFutureLocal, poll_once};
pub use geometry::{PagePosition, ScreenPoint, VisiblePosition};
