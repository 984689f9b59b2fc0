use std::time::{Duration, Instant};

use serde::Serialize;
use swarm_core::{Swarm, Vector2D};

use crate::surface::CountingSurface;

/// Where the simulated pointer sits on each frame, in viewport coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerScript {
    None,
    Fixed(Vector2D),
    /// Circle `center` once every `period` frames.
    Orbit {
        center: Vector2D,
        radius: f32,
        period: u64,
    },
}

impl PointerScript {
    pub fn position(&self, frame: u64) -> Option<Vector2D> {
        match *self {
            PointerScript::None => None,
            PointerScript::Fixed(point) => Some(point),
            PointerScript::Orbit {
                center,
                radius,
                period,
            } => {
                let period = period.max(1);
                let angle = 360.0 * (frame % period) as f32 / period as f32;
                Some(Vector2D::from_polar(center, angle, radius))
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub frames: u64,
    /// Target frame rate; 0 runs unthrottled.
    pub fps: u32,
    pub pointer: PointerScript,
    /// Frame on which the pointer leaves the surface for good.
    pub leave_at: Option<u64>,
    /// Click at the pointer (or the viewport centre) every n frames.
    pub click_every: Option<u64>,
    /// Log a stats line every n frames.
    pub report_every: u64,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            frames: 600,
            fps: 60,
            pointer: PointerScript::None,
            leave_at: None,
            click_every: None,
            report_every: 60,
        }
    }
}

/// Snapshot logged while running
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FrameStats {
    pub frame: u64,
    pub mean_speed: f32,
    pub lines: u64,
    pub circles: u64,
}

/// Totals for a whole run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub frames: u64,
    pub agents: usize,
    pub elapsed_ms: u64,
    pub mean_speed: f32,
    pub lines: u64,
    pub circles: u64,
    pub fills: u64,
    pub scattered: usize,
}

/// Drives a [`Swarm`] on a fixed timestep with a scripted pointer.
pub struct Runner {
    swarm: Swarm,
    surface: CountingSurface,
    options: RunOptions,
    pointer_gone: bool,
    scattered: usize,
}

impl Runner {
    pub fn new(swarm: Swarm, options: RunOptions) -> Self {
        Self {
            swarm,
            surface: CountingSurface::new(),
            options,
            pointer_gone: false,
            scattered: 0,
        }
    }

    pub fn swarm(&self) -> &Swarm {
        &self.swarm
    }

    pub fn surface(&self) -> &CountingSurface {
        &self.surface
    }

    /// Feed this frame's input and run one tick.
    pub fn step(&mut self) -> FrameStats {
        let frame = self.swarm.frame();

        if self.options.leave_at == Some(frame) {
            log::info!("Pointer leaves at frame {}", frame);
            self.swarm.pointer_leave();
            self.pointer_gone = true;
        }

        if !self.pointer_gone {
            if let Some(point) = self.options.pointer.position(frame) {
                self.swarm.pointer_move(point);
            }
        }

        if let Some(every) = self.options.click_every.filter(|n| *n > 0) {
            if frame > 0 && frame % every == 0 {
                let viewport = self.swarm.viewport();
                let point = self.swarm.pointer().unwrap_or(Vector2D::new(
                    viewport.width() / 2.0,
                    viewport.height() / 2.0,
                ));
                let scattered = self.swarm.impulse(point);
                log::debug!("Click at frame {} scattered {} agents", frame, scattered);
                self.scattered += scattered;
            }
        }

        self.swarm.tick(&mut self.surface);

        FrameStats {
            frame: self.swarm.frame(),
            mean_speed: self.swarm.mean_speed(),
            lines: self.surface.frame_lines(),
            circles: self.surface.frame_circles(),
        }
    }

    /// Run all configured frames, sleeping between them to hold `fps`.
    pub fn run(&mut self) -> Summary {
        let start = Instant::now();
        let frame_time = match self.options.fps {
            0 => None,
            fps => Some(Duration::from_secs_f64(1.0 / fps as f64)),
        };
        let report_every = self.options.report_every.max(1);

        log::info!(
            "Running {} frames with {} agents",
            self.options.frames,
            self.swarm.agents().len()
        );

        for _ in 0..self.options.frames {
            let frame_start = Instant::now();
            let stats = self.step();

            if stats.frame % report_every == 0 {
                log::info!(
                    "frame {:>6}  mean speed {:>6.2}  lines {:>5}  circles {:>4}",
                    stats.frame,
                    stats.mean_speed,
                    stats.lines,
                    stats.circles
                );
            }

            if let Some(frame_time) = frame_time {
                let spent = frame_start.elapsed();
                if spent < frame_time {
                    std::thread::sleep(frame_time - spent);
                } else {
                    log::debug!("Frame {} overran by {:?}", stats.frame, spent - frame_time);
                }
            }
        }

        Summary {
            frames: self.swarm.frame(),
            agents: self.swarm.agents().len(),
            elapsed_ms: start.elapsed().as_millis() as u64,
            mean_speed: self.swarm.mean_speed(),
            lines: self.surface.lines,
            circles: self.surface.circles,
            fills: self.surface.fills,
            scattered: self.scattered,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orbit_script_wraps_period() {
        let script = PointerScript::Orbit {
            center: Vector2D::new(100.0, 100.0),
            radius: 10.0,
            period: 4,
        };

        let first = script.position(0).unwrap();
        assert!((first.x - 110.0).abs() < 1e-4);
        assert!((first.y - 100.0).abs() < 1e-4);

        let quarter = script.position(1).unwrap();
        assert!((quarter.x - 100.0).abs() < 1e-4);
        assert!((quarter.y - 110.0).abs() < 1e-4);

        assert_eq!(script.position(4), script.position(0));
    }

    #[test]
    fn test_fixed_and_absent_scripts() {
        let p = Vector2D::new(3.0, 4.0);
        assert_eq!(PointerScript::Fixed(p).position(17), Some(p));
        assert_eq!(PointerScript::None.position(0), None);
    }
}
