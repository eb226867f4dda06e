use serde::Deserialize;

use crate::geometry::ScreenPoint;

/// Zero-based line/column position in a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DocPosition {
	/// Zero-based line index.
	pub line: u32,
	/// Zero-based column in the line.
	pub column: u32,
}

impl DocPosition {
	/// Creates a new document position.
	pub const fn new(line: u32, column: u32) -> Self {
		Self { line, column }
	}
}

/// How an editor scrolls a position into view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollType {
	/// Animated scroll.
	Smooth,
	/// Jump straight to the target without animation.
	#[default]
	Immediate,
}

/// Where a popup should appear.
///
/// Document anchors are resolved to page coordinates lazily, when the
/// presentation layer asks for them, since the translation depends on the
/// editor's layout at that moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
	/// Raw page coordinate, used as-is.
	Screen(ScreenPoint),
	/// Document position, translated through the editor view.
	Document(DocPosition),
}

impl From<ScreenPoint> for Anchor {
	fn from(point: ScreenPoint) -> Self {
		Self::Screen(point)
	}
}

impl From<DocPosition> for Anchor {
	fn from(pos: DocPosition) -> Self {
		Self::Document(pos)
	}
}
