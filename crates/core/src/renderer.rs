//! Draw the toolbar through a host-provided backend.
use crate::{Color, Point, Rectangle, menu::Icon};

/// A component that can be used by the toolbar to draw itself.
///
/// All coordinates are in screen space; the toolbar applies its own
/// translation before calling into the renderer.
pub trait Renderer {
    /// Fills the given bounds with a solid color.
    fn fill_rectangle(&mut self, bounds: Rectangle, color: Color);

    /// Fills the triangle spanned by the given vertices.
    fn fill_triangle(&mut self, vertices: [Point; 3], color: Color);

    /// Draws the given [`Icon`] centered inside the bounds.
    fn draw_icon(&mut self, icon: &Icon, bounds: Rectangle, tint: Color);
}

impl Renderer for () {
    fn fill_rectangle(&mut self, _bounds: Rectangle, _color: Color) {}

    fn fill_triangle(&mut self, _vertices: [Point; 3], _color: Color) {}

    fn draw_icon(&mut self, _icon: &Icon, _bounds: Rectangle, _tint: Color) {}
}
