//! Arrange the pip and the item row inside the toolbar bounds.
use crate::core::{Metrics, PointerOrientation, Rectangle, Size};

/// The result of a layout pass, in toolbar-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    /// The measured size of the whole toolbar.
    pub size: Size,
    /// Bounds of the item row.
    pub row: Rectangle,
    /// Bounds of the pip, including the pixel it shares with the row.
    pub pip: Rectangle,
}

/// Measures a toolbar whose row is `row_width` wide.
pub fn measure(row_width: f32, metrics: &Metrics) -> Size {
    Size::new(row_width, metrics.toolbar_height + metrics.pip_height)
}

/// Places the pip and the row inside a toolbar of the given size.
///
/// The pip and the row overlap by one pixel at their seam so no
/// hairline gap shows up after rounding. The pip bounds are therefore
/// `pip_height + 1` tall in both orientations: below the content they
/// span from `toolbar_height - 1` to `toolbar_height + pip_height`.
pub fn arrange(
    size: Size,
    metrics: &Metrics,
    orientation: PointerOrientation,
    pointer_offset: f32,
) -> Geometry {
    let row_height = metrics.toolbar_height;
    let pip_width = metrics.pip_width;
    let pip_height = metrics.pip_height;
    let pip_left = pip_left(pointer_offset, size.width, pip_width);

    let (pip, row) = match orientation {
        PointerOrientation::AboveContent => (
            Rectangle::from_edges(pip_left, 0.0, pip_left + pip_width, pip_height + 1.0),
            Rectangle::from_edges(0.0, pip_height, size.width, pip_height + row_height),
        ),
        PointerOrientation::BelowContent => (
            Rectangle::from_edges(
                pip_left,
                row_height - 1.0,
                pip_left + pip_width,
                row_height + pip_height,
            ),
            Rectangle::from_edges(0.0, 0.0, size.width, row_height),
        ),
    };

    Geometry { size, row, pip }
}

/// Resolves the left edge of the pip.
///
/// An offset that would put any part of the pip outside the toolbar is
/// replaced by the centered position.
pub fn pip_left(pointer_offset: f32, total_width: f32, pip_width: f32) -> f32 {
    let left = pointer_offset.trunc();

    if left >= 0.0 && left + pip_width <= total_width {
        left
    } else {
        ((total_width / 2.0).trunc() - (pip_width / 2.0).trunc()).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics() -> Metrics {
        Metrics {
            item_width: 48.0,
            toolbar_height: 40.0,
            pip_width: 20.0,
            pip_height: 10.0,
        }
    }

    #[test]
    fn test_measure_adds_pip_height() {
        assert_eq!(measure(144.0, &metrics()), Size::new(144.0, 50.0));
    }

    #[test]
    fn test_offset_inside_bounds_is_kept() {
        assert_eq!(pip_left(30.0, 144.0, 20.0), 30.0);
        assert_eq!(pip_left(124.0, 144.0, 20.0), 124.0);
        assert_eq!(pip_left(30.7, 144.0, 20.0), 30.0);
    }

    #[test]
    fn test_overflowing_offset_is_centered() {
        assert_eq!(pip_left(125.0, 144.0, 20.0), 62.0);
        assert_eq!(pip_left(1000.0, 144.0, 20.0), 62.0);
        assert_eq!(pip_left(-4.0, 144.0, 20.0), 62.0);
        assert_eq!(pip_left(f32::NAN, 144.0, 20.0), 62.0);
    }

    #[test]
    fn test_pip_never_leaves_the_toolbar() {
        for width in [20.0_f32, 21.0, 47.0, 96.0, 144.0, 193.0] {
            for offset in [-500.0_f32, -1.0, 0.0, 0.5, 13.0, 76.0, 143.0, 1e6] {
                let left = pip_left(offset, width, 20.0);

                assert!(left >= 0.0, "offset {offset} width {width}: {left}");
                assert!(left + 20.0 <= width, "offset {offset} width {width}: {left}");
            }
        }
    }

    #[test]
    fn test_pip_above_content() {
        let geometry = arrange(
            Size::new(144.0, 50.0),
            &metrics(),
            PointerOrientation::AboveContent,
            30.0,
        );

        assert_eq!(geometry.pip, Rectangle::from_edges(30.0, 0.0, 50.0, 11.0));
        assert_eq!(geometry.row, Rectangle::from_edges(0.0, 10.0, 144.0, 50.0));
    }

    #[test]
    fn test_pip_below_content() {
        let geometry = arrange(
            Size::new(144.0, 50.0),
            &metrics(),
            PointerOrientation::BelowContent,
            30.0,
        );

        assert_eq!(geometry.row, Rectangle::from_edges(0.0, 0.0, 144.0, 40.0));
        assert_eq!(geometry.pip, Rectangle::from_edges(30.0, 39.0, 50.0, 50.0));
    }

    #[test]
    fn test_seam_overlaps_by_one_pixel() {
        for orientation in [
            PointerOrientation::AboveContent,
            PointerOrientation::BelowContent,
        ] {
            let geometry = arrange(Size::new(144.0, 50.0), &metrics(), orientation, 30.0);
            let seam = geometry.pip.intersection(&geometry.row);

            assert_eq!(seam.map(|seam| seam.height), Some(1.0));
            assert_eq!(geometry.pip.height, 11.0);
        }
    }
}
