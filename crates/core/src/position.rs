use crate::{PointerOrientation, Vector};

/// Where the host wants the toolbar, recomputed on every reposition.
///
/// `x`/`y` is the static anchor and `x_scroll`/`y_scroll` the delta
/// introduced by scrolling; the two are summed to get the final screen
/// translation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ToolbarPosition {
    /// Static horizontal anchor.
    pub x: f32,
    /// Static vertical anchor.
    pub y: f32,
    /// Horizontal scroll delta.
    pub x_scroll: f32,
    /// Vertical scroll delta.
    pub y_scroll: f32,
    /// Desired distance of the pip's left edge from the toolbar's left edge.
    pub pointer_offset: f32,
    /// Which side of the row the pip is drawn on.
    pub pointer_orientation: PointerOrientation,
}

impl ToolbarPosition {
    /// Creates a [`ToolbarPosition`] anchored at the given point.
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            ..Self::default()
        }
    }

    /// Returns a copy with the given static x.
    #[must_use]
    pub fn with_x(self, x: f32) -> Self {
        Self { x, ..self }
    }

    /// Returns a copy with the given static y.
    #[must_use]
    pub fn with_y(self, y: f32) -> Self {
        Self { y, ..self }
    }

    /// Returns a copy with the given horizontal scroll delta.
    #[must_use]
    pub fn with_x_scroll(self, x_scroll: f32) -> Self {
        Self { x_scroll, ..self }
    }

    /// Returns a copy with the given vertical scroll delta.
    #[must_use]
    pub fn with_y_scroll(self, y_scroll: f32) -> Self {
        Self { y_scroll, ..self }
    }

    /// Returns a copy with the given pointer offset.
    #[must_use]
    pub fn with_pointer_offset(self, pointer_offset: f32) -> Self {
        Self {
            pointer_offset,
            ..self
        }
    }

    /// Returns a copy with the given pointer orientation.
    #[must_use]
    pub fn with_orientation(self, pointer_orientation: PointerOrientation) -> Self {
        Self {
            pointer_orientation,
            ..self
        }
    }

    /// The final screen translation of the toolbar.
    pub fn translation(&self) -> Vector {
        Vector::new(self.x + self.x_scroll, self.y + self.y_scroll)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translation_sums_anchor_and_scroll() {
        let position = ToolbarPosition::new(100.0, 40.0)
            .with_x_scroll(-12.0)
            .with_y_scroll(300.0);

        assert_eq!(position.translation(), Vector::new(88.0, 340.0));
    }

    #[test]
    fn test_default_points_below_content() {
        let position = ToolbarPosition::default();

        assert_eq!(
            position.pointer_orientation,
            PointerOrientation::BelowContent
        );
        assert_eq!(position.translation(), Vector::ZERO);
    }

    #[test]
    fn test_builders_only_touch_their_field() {
        let base = ToolbarPosition::new(1.0, 2.0).with_pointer_offset(30.0);
        let moved = base.with_y(9.0);

        assert_eq!(moved.x, 1.0);
        assert_eq!(moved.y, 9.0);
        assert_eq!(moved.pointer_offset, 30.0);
        assert_eq!(
            moved.with_orientation(PointerOrientation::AboveContent).pointer_orientation,
            PointerOrientation::AboveContent
        );
    }
}
