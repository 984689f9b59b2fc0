use crate::error::SwarmError;
use crate::geometry::Vector2D;
use crate::math;

/// Internal drawing area the agents live in.
///
/// The viewport is usually larger than the element it is displayed in: the
/// host multiplies the display size by a fixed scale so strokes stay crisp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    width: f32,
    height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Result<Self, SwarmError> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(SwarmError::InvalidViewport { width, height });
        }
        Ok(Self { width, height })
    }

    /// Build the internal viewport for an element of the given display size.
    ///
    /// Display sizes are truncated to whole pixels before scaling.
    pub fn from_display(
        display_width: f32,
        display_height: f32,
        scale: f32,
    ) -> Result<Self, SwarmError> {
        Self::new(
            math::trunc(display_width) * scale,
            math::trunc(display_height) * scale,
        )
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn min_dimension(&self) -> f32 {
        self.width.min(self.height)
    }

    /// Map a point in display space into viewport space.
    pub fn to_internal(display_point: Vector2D, scale: f32) -> Vector2D {
        display_point * scale
    }
}
