use swarm_core::{Color, DrawSurface, StrokeStyle, Vector2D, Viewport};

/// Surface that only tallies what would have been drawn
#[derive(Debug, Default, Clone)]
pub struct CountingSurface {
    pub clears: u64,
    pub lines: u64,
    pub circles: u64,
    pub fills: u64,
    frame_lines: u64,
    frame_circles: u64,
}

impl CountingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines stroked since the last clear.
    pub fn frame_lines(&self) -> u64 {
        self.frame_lines
    }

    /// Circles stroked since the last clear.
    pub fn frame_circles(&self) -> u64 {
        self.frame_circles
    }
}

impl DrawSurface for CountingSurface {
    fn clear(&mut self, _viewport: &Viewport, _background: Color) {
        self.clears += 1;
        self.frame_lines = 0;
        self.frame_circles = 0;
    }

    fn stroke_line(&mut self, _from: Vector2D, _to: Vector2D, _style: StrokeStyle) {
        self.lines += 1;
        self.frame_lines += 1;
    }

    fn stroke_circle(&mut self, _center: Vector2D, _radius: f32, _style: StrokeStyle) {
        self.circles += 1;
        self.frame_circles += 1;
    }

    fn fill_circle(&mut self, _center: Vector2D, _radius: f32, _color: Color) {
        self.fills += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_resets_frame_counters() {
        let viewport = Viewport::new(100.0, 100.0).unwrap();
        let style = StrokeStyle {
            color: Color::CYAN,
            width: 5.0,
        };
        let mut surface = CountingSurface::new();

        surface.clear(&viewport, Color::BLACK);
        surface.stroke_line(Vector2D::zero(), Vector2D::new(1.0, 1.0), style);
        surface.stroke_circle(Vector2D::zero(), 3.0, style);
        assert_eq!(surface.frame_lines(), 1);
        assert_eq!(surface.frame_circles(), 1);

        surface.clear(&viewport, Color::BLACK);
        assert_eq!(surface.frame_lines(), 0);
        assert_eq!(surface.lines, 1);
        assert_eq!(surface.circles, 1);
        assert_eq!(surface.clears, 2);
    }
}
