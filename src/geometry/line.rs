//! Dividing lines and their placement geometry

use std::fmt;

/// Direction a dividing line runs across the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Runs left to right at a fixed Y coordinate
    Horizontal,
    /// Runs top to bottom at a fixed X coordinate
    Vertical,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Horizontal => write!(f, "horizontal"),
            Self::Vertical => write!(f, "vertical"),
        }
    }
}

/// A horizontal or vertical dividing line
///
/// `position` is the Y coordinate for horizontal lines and the X coordinate
/// for vertical ones; `span` is the extent along the line's own direction.
/// The four canvas boundary lines carry `visible = false` and exist only to
/// bound the subdivision and adjacency logic. Lines are immutable once
/// created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    /// Direction the line runs
    pub orientation: Orientation,
    /// Fixed coordinate on the perpendicular axis
    pub position: i32,
    /// Start and end along the line's own direction (start <= end)
    pub span: (i32, i32),
    /// Stroke width shared by every line of one picture
    pub stroke_width: i32,
    /// Whether the renderer should draw this line
    pub visible: bool,
}

impl Line {
    /// Create a line, normalizing the span so start <= end
    pub const fn new(
        orientation: Orientation,
        position: i32,
        span: (i32, i32),
        stroke_width: i32,
        visible: bool,
    ) -> Self {
        let (start, end) = span;
        let span = if start <= end {
            (start, end)
        } else {
            (end, start)
        };

        Self {
            orientation,
            position,
            span,
            stroke_width,
            visible,
        }
    }

    /// Whether the span contains `coordinate`, inclusive at both ends
    ///
    /// A line placed at a coordinate its perpendicular neighbors merely
    /// touch still counts as crossing them; this is what lets new lines
    /// anchor on the canvas boundaries.
    pub const fn spans(&self, coordinate: i32) -> bool {
        self.span.0 <= coordinate && self.span.1 >= coordinate
    }

    /// X coordinate of the segment's start point
    pub const fn left(&self) -> i32 {
        match self.orientation {
            Orientation::Vertical => self.position,
            Orientation::Horizontal => self.span.0,
        }
    }

    /// Y coordinate of the segment's start point
    pub const fn top(&self) -> i32 {
        match self.orientation {
            Orientation::Horizontal => self.position,
            Orientation::Vertical => self.span.0,
        }
    }

    /// X coordinate of the segment's end point
    pub const fn right(&self) -> i32 {
        match self.orientation {
            Orientation::Vertical => self.position,
            Orientation::Horizontal => self.span.1,
        }
    }

    /// Y coordinate of the segment's end point
    pub const fn bottom(&self) -> i32 {
        match self.orientation {
            Orientation::Horizontal => self.position,
            Orientation::Vertical => self.span.1,
        }
    }
}
