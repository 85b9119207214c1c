//! Input model: pointer samples, the canvas bounding rectangle, and the
//! mapping from client coordinates into canvas-local pixel space.
//!
//! The host converts each raw DOM event into a [`PointerSample`] and pairs it
//! with a freshly queried [`ClientRect`]. Nothing here caches layout, so the
//! mapping stays correct when the page scrolls or the canvas moves.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

/// A point in either client space or canvas-local space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Whether both coordinates are finite numbers.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// On-screen bounding rectangle of the canvas element, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClientRect {
    /// Distance from the viewport's left edge to the canvas's left edge.
    pub left: f64,
    /// Distance from the viewport's top edge to the canvas's top edge.
    pub top: f64,
    /// Rendered width.
    pub width: f64,
    /// Rendered height.
    pub height: f64,
}

impl ClientRect {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }
}

/// One input event reduced to the positions it carries.
#[derive(Debug, Clone, PartialEq)]
pub enum PointerSample {
    /// A mouse-like pointer with a single client position.
    Mouse {
        /// Client-space position of the pointer.
        client: Point,
    },
    /// A touch event with zero or more active contacts, in browser order.
    Touch {
        /// Client-space position of each active contact.
        contacts: Vec<Point>,
    },
}

impl PointerSample {
    #[must_use]
    pub fn mouse(client_x: f64, client_y: f64) -> Self {
        Self::Mouse { client: Point::new(client_x, client_y) }
    }

    #[must_use]
    pub fn touch(contacts: Vec<Point>) -> Self {
        Self::Touch { contacts }
    }

    /// The client position that drives drawing: the pointer itself, or the
    /// first touch contact. `None` for a touch event with no contacts.
    #[must_use]
    pub fn primary(&self) -> Option<Point> {
        match self {
            Self::Mouse { client } => Some(*client),
            Self::Touch { contacts } => contacts.first().copied(),
        }
    }
}

/// Map a pointer sample into canvas-local pixel coordinates.
///
/// The result is the client position minus the rectangle's top-left offset.
/// Returns `None` only when a touch sample carries no contacts.
#[must_use]
pub fn map_to_canvas(sample: &PointerSample, rect: ClientRect) -> Option<Point> {
    let client = sample.primary()?;
    Some(Point::new(client.x - rect.left, client.y - rect.top))
}
