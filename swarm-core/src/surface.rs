use crate::geometry::Vector2D;
use crate::viewport::Viewport;

/// An RGB display colour. Never read by the motion model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const CYAN: Color = Color::new(0, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f32,
}

/// Drawing primitives the swarm renders its steering feedback with.
///
/// Implemented by the host (a canvas, a test recorder, ...). Coordinates are
/// in viewport space.
pub trait DrawSurface {
    fn clear(&mut self, viewport: &Viewport, background: Color);

    fn stroke_line(&mut self, from: Vector2D, to: Vector2D, style: StrokeStyle);

    fn stroke_circle(&mut self, center: Vector2D, radius: f32, style: StrokeStyle);

    fn fill_circle(&mut self, center: Vector2D, radius: f32, color: Color);
}

/// Surface that drops every primitive.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSurface;

impl DrawSurface for NullSurface {
    fn clear(&mut self, _viewport: &Viewport, _background: Color) {}

    fn stroke_line(&mut self, _from: Vector2D, _to: Vector2D, _style: StrokeStyle) {}

    fn stroke_circle(&mut self, _center: Vector2D, _radius: f32, _style: StrokeStyle) {}

    fn fill_circle(&mut self, _center: Vector2D, _radius: f32, _color: Color) {}
}
