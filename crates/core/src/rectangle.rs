use crate::{Point, Size, Vector};

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rectangle {
    /// X coordinate of the top-left corner.
    pub x: f32,

    /// Y coordinate of the top-left corner.
    pub y: f32,

    /// Width of the rectangle.
    pub width: f32,

    /// Height of the rectangle.
    pub height: f32,
}

impl Rectangle {
    /// Creates a new [`Rectangle`] with its top-left corner in the given
    /// [`Point`] and with the provided [`Size`].
    pub const fn new(top_left: Point, size: Size) -> Self {
        Self {
            x: top_left.x,
            y: top_left.y,
            width: size.width,
            height: size.height,
        }
    }

    /// Creates a new [`Rectangle`] from its edges, mirroring the
    /// `(left, top, right, bottom)` convention of view layout passes.
    pub fn from_edges(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            x: left,
            y: top,
            width: right - left,
            height: bottom - top,
        }
    }

    /// Returns the position of the top left corner of the [`Rectangle`].
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Returns the [`Size`] of the [`Rectangle`].
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Returns the right edge of the [`Rectangle`].
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Returns the bottom edge of the [`Rectangle`].
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Returns true if the given [`Point`] is contained in the [`Rectangle`].
    ///
    /// The left and top edges are inclusive, the right and bottom ones are not.
    pub fn contains(&self, point: Point) -> bool {
        self.x <= point.x && point.x < self.right() && self.y <= point.y && point.y < self.bottom()
    }

    /// Computes the intersection with the given [`Rectangle`].
    pub fn intersection(&self, other: &Rectangle) -> Option<Rectangle> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);

        let lower_right_x = self.right().min(other.right());
        let lower_right_y = self.bottom().min(other.bottom());

        let width = lower_right_x - x;
        let height = lower_right_y - y;

        if width > 0.0 && height > 0.0 {
            Some(Rectangle {
                x,
                y,
                width,
                height,
            })
        } else {
            None
        }
    }
}

impl std::ops::Add<Vector> for Rectangle {
    type Output = Rectangle;

    fn add(self, translation: Vector) -> Self {
        Rectangle {
            x: self.x + translation.x,
            y: self.y + translation.y,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_edges() {
        let rectangle = Rectangle::from_edges(4.0, 0.0, 24.0, 11.0);

        assert_eq!(rectangle.position(), Point::new(4.0, 0.0));
        assert_eq!(rectangle.size(), Size::new(20.0, 11.0));
        assert_eq!(rectangle.right(), 24.0);
        assert_eq!(rectangle.bottom(), 11.0);
    }

    #[test]
    fn test_contains_is_half_open() {
        let rectangle = Rectangle::new(Point::ORIGIN, Size::new(10.0, 10.0));

        assert!(rectangle.contains(Point::ORIGIN));
        assert!(rectangle.contains(Point::new(9.5, 9.5)));
        assert!(!rectangle.contains(Point::new(10.0, 5.0)));
        assert!(!rectangle.contains(Point::new(5.0, 10.0)));
    }

    #[test]
    fn test_intersection() {
        let a = Rectangle::new(Point::ORIGIN, Size::new(10.0, 10.0));
        let b = Rectangle::new(Point::new(0.0, 9.0), Size::new(10.0, 10.0));
        let c = Rectangle::new(Point::new(0.0, 10.0), Size::new(10.0, 10.0));

        assert_eq!(
            a.intersection(&b),
            Some(Rectangle::new(Point::new(0.0, 9.0), Size::new(10.0, 1.0)))
        );
        assert_eq!(a.intersection(&c), None);
    }
}
