//! The pointer pip that ties the toolbar to its anchor.
use crate::core::{Color, Point, PointerOrientation, Rectangle, Renderer, Size};

/// A small triangle pointing up or down at the anchored content.
#[derive(Debug, Clone)]
pub struct Pip {
    orientation: PointerOrientation,
    size: Size,
    redraw_requested: bool,
}

impl Pip {
    /// Creates a new [`Pip`] of the given size, pointing at content below.
    pub fn new(size: Size) -> Self {
        Self {
            orientation: PointerOrientation::default(),
            size,
            redraw_requested: true,
        }
    }

    /// Returns the current orientation.
    pub fn orientation(&self) -> PointerOrientation {
        self.orientation
    }

    /// Returns the fixed size of the pip.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Points the pip in the given direction.
    ///
    /// Only marks the pip for redraw; geometry is owned by the toolbar.
    pub fn set_orientation(&mut self, orientation: PointerOrientation) {
        if self.orientation != orientation {
            self.orientation = orientation;
            self.redraw_requested = true;
        }
    }

    /// Returns `true` if the pip changed since it was last drawn.
    pub fn is_redraw_requested(&self) -> bool {
        self.redraw_requested
    }

    /// Returns the vertices of the triangle filling the given bounds.
    pub fn vertices(&self, bounds: Rectangle) -> [Point; 3] {
        let middle = bounds.x + bounds.width / 2.0;

        match self.orientation {
            PointerOrientation::AboveContent => [
                Point::new(middle, bounds.y),
                Point::new(bounds.right(), bounds.bottom()),
                Point::new(bounds.x, bounds.bottom()),
            ],
            PointerOrientation::BelowContent => [
                Point::new(bounds.x, bounds.y),
                Point::new(bounds.right(), bounds.y),
                Point::new(middle, bounds.bottom()),
            ],
        }
    }

    /// Draws the pip inside the given bounds.
    pub fn draw(&mut self, renderer: &mut impl Renderer, bounds: Rectangle, color: Color) {
        renderer.fill_triangle(self.vertices(bounds), color);
        self.redraw_requested = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_below_content() {
        let pip = Pip::new(Size::new(20.0, 10.0));

        assert_eq!(pip.orientation(), PointerOrientation::BelowContent);
        assert!(pip.is_redraw_requested());
    }

    #[test]
    fn test_same_orientation_does_not_request_redraw() {
        let mut pip = Pip::new(Size::new(20.0, 10.0));
        pip.draw(&mut (), Rectangle::default(), Color::BLACK);

        pip.set_orientation(PointerOrientation::BelowContent);
        assert!(!pip.is_redraw_requested());

        pip.set_orientation(PointerOrientation::AboveContent);
        assert!(pip.is_redraw_requested());
        assert_eq!(pip.orientation(), PointerOrientation::AboveContent);
    }

    #[test]
    fn test_vertices_follow_orientation() {
        let bounds = Rectangle::from_edges(10.0, 0.0, 30.0, 11.0);
        let mut pip = Pip::new(Size::new(20.0, 10.0));

        assert_eq!(
            pip.vertices(bounds),
            [
                Point::new(10.0, 0.0),
                Point::new(30.0, 0.0),
                Point::new(20.0, 11.0)
            ]
        );

        pip.set_orientation(PointerOrientation::AboveContent);
        assert_eq!(pip.vertices(bounds)[0], Point::new(20.0, 0.0));
        assert_eq!(pip.vertices(bounds)[1].y, 11.0);
        assert_eq!(pip.vertices(bounds)[2].y, 11.0);
    }
}
