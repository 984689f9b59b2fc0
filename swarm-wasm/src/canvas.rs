use std::f64::consts::PI;

use swarm_core::{Color, DrawSurface, StrokeStyle, Vector2D, Viewport};
use web_sys::CanvasRenderingContext2d;

/// Draw surface backed by a 2D canvas context
pub struct CanvasSurface {
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(context: CanvasRenderingContext2d) -> Self {
        Self { context }
    }

    fn apply(&self, style: StrokeStyle) {
        self.context.set_stroke_style_str(&css_color(style.color));
        self.context.set_line_width(style.width as f64);
    }
}

impl DrawSurface for CanvasSurface {
    fn clear(&mut self, viewport: &Viewport, background: Color) {
        self.context.set_fill_style_str(&css_color(background));
        self.context
            .fill_rect(0.0, 0.0, viewport.width() as f64, viewport.height() as f64);
    }

    fn stroke_line(&mut self, from: Vector2D, to: Vector2D, style: StrokeStyle) {
        self.apply(style);
        self.context.begin_path();
        self.context.move_to(from.x as f64, from.y as f64);
        self.context.line_to(to.x as f64, to.y as f64);
        self.context.stroke();
    }

    fn stroke_circle(&mut self, center: Vector2D, radius: f32, style: StrokeStyle) {
        self.apply(style);
        self.context.begin_path();
        if self
            .context
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, PI * 2.0)
            .is_ok()
        {
            self.context.stroke();
        }
    }

    fn fill_circle(&mut self, center: Vector2D, radius: f32, color: Color) {
        self.context.set_fill_style_str(&css_color(color));
        self.context.begin_path();
        if self
            .context
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, PI * 2.0)
            .is_ok()
        {
            self.context.fill();
        }
    }
}

pub fn css_color(color: Color) -> String {
    format!("rgb({}, {}, {})", color.r, color.g, color.b)
}
