//! Geometry and sizing primitives shared by layout and event routing.

/// A 2D size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// A 2D point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A widget's rectangle: position plus size, in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }

    /// The rectangle inset by `padding` on all sides.
    pub fn shrink(&self, padding: Padding) -> Bounds {
        Bounds::new(
            self.x + padding.left,
            self.y + padding.top,
            (self.width - padding.horizontal()).max(0.0),
            (self.height - padding.vertical()).max(0.0),
        )
    }

    /// The rectangle moved by the given offset.
    pub fn translate(&self, dx: f32, dy: f32) -> Bounds {
        Bounds::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Per-side spacing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Padding {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Padding {
    pub const ZERO: Padding = Padding {
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
        left: 0.0,
    };

    /// Uniform padding on all sides.
    pub fn all(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

impl From<f32> for Padding {
    fn from(value: f32) -> Self {
        Padding::all(value)
    }
}

/// Alignment of content within available space along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Start,
    Center,
    End,
}

impl Alignment {
    /// Offset of `content` within `available` space.
    pub fn align(self, available: f32, content: f32) -> f32 {
        match self {
            Alignment::Start => 0.0,
            Alignment::Center => ((available - content) / 2.0).max(0.0),
            Alignment::End => (available - content).max(0.0),
        }
    }
}

/// Defines how a widget's dimension should be sized.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Length {
    /// Fill all available space
    Fill,

    /// Shrink to fit content
    #[default]
    Shrink,

    /// Fixed size in pixels
    Units(f32),
}

impl Length {
    /// Resolve the length to a concrete size.
    pub fn resolve(&self, available: f32, intrinsic: f32) -> f32 {
        match self {
            Length::Fill => available,
            Length::Shrink => intrinsic,
            Length::Units(px) => *px,
        }
    }
}

impl From<f32> for Length {
    fn from(px: f32) -> Self {
        Length::Units(px)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_resolve() {
        assert_eq!(Length::Fill.resolve(300.0, 40.0), 300.0);
        assert_eq!(Length::Shrink.resolve(300.0, 40.0), 40.0);
        assert_eq!(Length::Units(120.0).resolve(300.0, 40.0), 120.0);
    }

    #[test]
    fn test_alignment_offsets() {
        assert_eq!(Alignment::Start.align(100.0, 20.0), 0.0);
        assert_eq!(Alignment::Center.align(100.0, 20.0), 40.0);
        assert_eq!(Alignment::End.align(100.0, 20.0), 80.0);
        // Oversized content never produces a negative offset.
        assert_eq!(Alignment::Center.align(10.0, 20.0), 0.0);
        assert_eq!(Alignment::End.align(10.0, 20.0), 0.0);
    }

    #[test]
    fn test_bounds_contains() {
        let bounds = Bounds::new(10.0, 10.0, 50.0, 20.0);
        assert!(bounds.contains(Point::new(10.0, 10.0)));
        assert!(bounds.contains(Point::new(60.0, 30.0)));
        assert!(bounds.contains(Point::new(35.0, 15.0)));
        assert!(!bounds.contains(Point::new(9.9, 15.0)));
        assert!(!bounds.contains(Point::new(35.0, 30.1)));
    }

    #[test]
    fn test_bounds_shrink_clamps_at_zero() {
        let bounds = Bounds::new(0.0, 0.0, 10.0, 10.0);
        let shrunk = bounds.shrink(Padding::all(20.0));
        assert_eq!(shrunk.width, 0.0);
        assert_eq!(shrunk.height, 0.0);
    }
}
