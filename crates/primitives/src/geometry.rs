/// A pixel coordinate in page space.
///
/// Popup menus are positioned with their top-left corner at this point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ScreenPoint {
	/// Horizontal offset from the page origin.
	pub x: i32,
	/// Vertical offset from the page origin.
	pub y: i32,
}

impl ScreenPoint {
	/// Creates a new screen point.
	pub const fn new(x: i32, y: i32) -> Self {
		Self { x, y }
	}
}

/// Page-level origin of an editor's root rendering surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PagePosition {
	/// Distance from the page's left edge.
	pub left: i32,
	/// Distance from the page's top edge.
	pub top: i32,
}

impl PagePosition {
	/// Creates a new page position.
	pub const fn new(left: i32, top: i32) -> Self {
		Self { left, top }
	}
}

/// Pixel offset of a document position relative to the editor's scrollable
/// content, together with the height of the line it sits on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct VisiblePosition {
	/// Horizontal offset within the scrolled content.
	pub left: i32,
	/// Vertical offset of the line's top within the scrolled content.
	pub top: i32,
	/// Line height in pixels.
	pub height: i32,
}

impl VisiblePosition {
	/// Creates a new visible position.
	pub const fn new(left: i32, top: i32, height: i32) -> Self {
		Self { left, top, height }
	}

	/// Translates this content-relative position into page space, anchored
	/// just below the line it belongs to.
	pub const fn below_line_on(self, surface: PagePosition) -> ScreenPoint {
		let x = surface.left.saturating_add(self.left);
		let y = surface.top.saturating_add(self.top).saturating_add(self.height);
		ScreenPoint { x, y }
	}
}
