use rand::Rng;

use crate::config::SwarmConfig;
use crate::geometry::{normalize_angle_difference, Vector2D};
use crate::math;
use crate::surface::{Color, DrawSurface, StrokeStyle};
use crate::viewport::Viewport;

/// A single circular agent
///
/// Motion is polar: `direction` (degrees) and `speed` fully determine the
/// displacement of the next [`Agent::advance`]. `target_speed` is only a
/// set-point that `speed` eases towards.
#[derive(Debug, Clone, PartialEq)]
pub struct Agent {
    pub position: Vector2D,
    pub radius: f32,
    pub direction: f32,
    pub speed: f32,
    pub target_speed: f32,
    pub color: Color,
}

impl Agent {
    pub fn new(position: Vector2D, radius: f32, direction: f32, speed: f32, color: Color) -> Self {
        Self {
            position,
            radius,
            direction,
            speed,
            target_speed: speed,
            color,
        }
    }

    /// Spawn an agent somewhere in the viewport, heading anywhere, with a
    /// resting speed drawn from the configured range.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, viewport: &Viewport, config: &SwarmConfig) -> Self {
        let x = rng.gen::<f32>() * (viewport.width() - config.spawn_margin);
        let y = rng.gen::<f32>() * (viewport.height() - config.spawn_margin);
        let direction = rng.gen::<f32>() * 360.0;
        let speed = config.random_speed(rng);
        Self::new(
            Vector2D::new(x, y),
            config.agent_radius,
            direction,
            speed,
            config.agent_color,
        )
    }

    /// Move one frame along the current heading, wrap around the padded
    /// viewport edges and ease `speed` towards `target_speed`.
    pub fn advance(&mut self, viewport: &Viewport, easing_gain: f32) {
        let (sin, cos) = math::sin_cos(self.direction * math::DEG_TO_RAD);
        self.position += Vector2D::new(cos, sin) * self.speed;

        let (width, height, r) = (viewport.width(), viewport.height(), self.radius);

        if self.position.x > width + r {
            self.position.x = -r;
        } else if self.position.x < -r {
            self.position.x = width + r;
        }

        if self.position.y < -r {
            self.position.y = height + r;
        } else if self.position.y > height + r {
            self.position.y = -r;
        }

        self.speed += (self.target_speed - self.speed) * easing_gain;
    }

    /// Snap the heading straight at `target`.
    pub fn point_towards(&mut self, target: Vector2D) {
        self.direction = self.position.bearing_to(&target);
    }

    /// Orbit behaviour around the pointer.
    ///
    /// Agents outside the influence range are left untouched. Inside it the
    /// heading turns a fixed share of the way towards `target` and the agent
    /// is pushed to its excited speed.
    pub fn steer_towards<S: DrawSurface + ?Sized>(
        &mut self,
        target: Vector2D,
        viewport: &Viewport,
        config: &SwarmConfig,
        surface: &mut S,
    ) {
        let distance = self.position.distance(&target);
        if distance > config.influence_range(viewport) {
            return;
        }

        if distance <= config.circle_range(viewport) {
            let style = StrokeStyle {
                color: config.stroke_color,
                width: self.radius,
            };
            surface.stroke_circle(target, distance, style);
        }

        let target_angle = self.position.bearing_to(&target);
        let difference = normalize_angle_difference(target_angle - self.direction);
        self.direction += difference * config.steering_gain;
        self.target_speed = config.excited_speed(distance);
    }

    /// Turn away from every neighbour closer than `threshold`.
    ///
    /// Each qualifying neighbour overwrites the heading, so the last one in
    /// iteration order decides. `others` must not contain `self`.
    pub fn avoid_neighbors<'a, I, S>(&mut self, others: I, threshold: f32, style: StrokeStyle, surface: &mut S)
    where
        I: IntoIterator<Item = &'a Agent>,
        S: DrawSurface + ?Sized,
    {
        let origin = self.position;
        for other in others {
            if origin.distance(&other.position) < threshold {
                surface.stroke_line(origin, other.position, style);
                self.direction = origin.bearing_to(&other.position) + 180.0;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::NullSurface;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn agent_at(x: f32, y: f32) -> Agent {
        Agent::new(Vector2D::new(x, y), 5.0, 0.0, 0.0, Color::BLACK)
    }

    fn viewport() -> Viewport {
        Viewport::new(800.0, 600.0).unwrap()
    }

    fn style() -> StrokeStyle {
        StrokeStyle {
            color: Color::CYAN,
            width: 5.0,
        }
    }

    #[derive(Default)]
    struct Recorder {
        lines: Vec<(Vector2D, Vector2D)>,
        circles: Vec<(Vector2D, f32)>,
    }

    impl DrawSurface for Recorder {
        fn clear(&mut self, _viewport: &Viewport, _background: Color) {}

        fn stroke_line(&mut self, from: Vector2D, to: Vector2D, _style: StrokeStyle) {
            self.lines.push((from, to));
        }

        fn stroke_circle(&mut self, center: Vector2D, radius: f32, _style: StrokeStyle) {
            self.circles.push((center, radius));
        }

        fn fill_circle(&mut self, _center: Vector2D, _radius: f32, _color: Color) {}
    }

    #[test]
    fn test_new_sets_target_speed() {
        let agent = Agent::new(Vector2D::new(1.0, 2.0), 5.0, 90.0, 6.5, Color::BLACK);
        assert_eq!(agent.target_speed, 6.5);
        assert_eq!(agent.direction, 90.0);
    }

    #[test]
    fn test_random_respects_bounds() {
        let config = SwarmConfig::default();
        let viewport = viewport();
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..500 {
            let agent = Agent::random(&mut rng, &viewport, &config);
            assert!(agent.position.x >= 0.0 && agent.position.x < 750.0);
            assert!(agent.position.y >= 0.0 && agent.position.y < 550.0);
            assert!(agent.direction >= 0.0 && agent.direction <= 360.0);
            assert!(agent.speed >= 5.0 && agent.speed <= 8.0);
            assert_eq!(agent.speed, agent.target_speed);
            assert_eq!(agent.radius, 5.0);
        }
    }

    #[test]
    fn test_advance_moves_along_heading() {
        let mut agent = agent_at(0.0, 0.0);
        agent.speed = 10.0;
        agent.target_speed = 10.0;

        agent.advance(&viewport(), 0.1);

        assert!((agent.position.x - 10.0).abs() < 1e-4);
        assert!(agent.position.y.abs() < 1e-4);
        assert_eq!(agent.speed, 10.0);
    }

    #[test]
    fn test_advance_wraps_each_edge() {
        let viewport = viewport();

        let mut agent = agent_at(804.0, 300.0);
        agent.speed = 2.0;
        agent.target_speed = 2.0;
        agent.advance(&viewport, 0.1);
        assert_eq!(agent.position.x, -5.0);

        let mut agent = agent_at(-4.0, 300.0);
        agent.direction = 180.0;
        agent.speed = 2.0;
        agent.target_speed = 2.0;
        agent.advance(&viewport, 0.1);
        assert_eq!(agent.position.x, 805.0);

        let mut agent = agent_at(400.0, -4.0);
        agent.direction = -90.0;
        agent.speed = 2.0;
        agent.target_speed = 2.0;
        agent.advance(&viewport, 0.1);
        assert_eq!(agent.position.y, 605.0);

        let mut agent = agent_at(400.0, 604.0);
        agent.direction = 90.0;
        agent.speed = 2.0;
        agent.target_speed = 2.0;
        agent.advance(&viewport, 0.1);
        assert_eq!(agent.position.y, -5.0);
    }

    #[test]
    fn test_advance_keeps_agents_in_padded_bounds() {
        let viewport = viewport();
        let config = SwarmConfig::default();
        let mut rng = SmallRng::seed_from_u64(3);
        for _ in 0..50 {
            let mut agent = Agent::random(&mut rng, &viewport, &config);
            agent.speed = 37.0;
            for _ in 0..200 {
                agent.advance(&viewport, 0.1);
                let r = agent.radius;
                assert!(agent.position.x >= -r && agent.position.x <= 800.0 + r);
                assert!(agent.position.y >= -r && agent.position.y <= 600.0 + r);
            }
        }
    }

    #[test]
    fn test_speed_eases_monotonically() {
        let viewport = viewport();
        let mut agent = agent_at(400.0, 300.0);
        agent.speed = 2.0;
        agent.target_speed = 9.0;

        let mut gap = (agent.target_speed - agent.speed).abs();
        for _ in 0..40 {
            agent.advance(&viewport, 0.1);
            let next = (agent.target_speed - agent.speed).abs();
            assert!(next < gap);
            gap = next;
        }
        for _ in 0..400 {
            agent.advance(&viewport, 0.1);
        }
        assert!((agent.speed - 9.0).abs() < 1e-4);
    }

    #[test]
    fn test_point_towards_snaps() {
        let mut agent = agent_at(0.0, 0.0);
        agent.point_towards(Vector2D::new(0.0, 10.0));
        assert!((agent.direction - 90.0).abs() < 1e-4);
    }

    #[test]
    fn test_steer_out_of_range_is_noop() {
        let config = SwarmConfig::default();
        let mut agent = agent_at(100.0, 100.0);
        agent.direction = 33.0;
        agent.target_speed = 6.0;
        let mut surface = Recorder::default();

        // influence range on 800x600 is 90
        agent.steer_towards(Vector2D::new(200.0, 100.0), &viewport(), &config, &mut surface);

        assert_eq!(agent.direction, 33.0);
        assert_eq!(agent.target_speed, 6.0);
        assert!(surface.circles.is_empty());
    }

    #[test]
    fn test_steer_applies_exactly_at_range() {
        let config = SwarmConfig::default();
        let range = config.influence_range(&viewport());
        let mut agent = agent_at(100.0, 100.0);
        agent.target_speed = 6.0;
        let mut surface = Recorder::default();

        agent.steer_towards(Vector2D::new(100.0, 100.0 + range), &viewport(), &config, &mut surface);

        assert!((agent.direction - 9.0).abs() < 1e-4);
        assert_eq!(agent.target_speed, 9.0);
        assert!(surface.circles.is_empty());
    }

    #[test]
    fn test_steer_turns_a_tenth_of_the_error() {
        let config = SwarmConfig::default();
        let mut agent = agent_at(100.0, 100.0);
        agent.direction = 0.0;
        let mut surface = Recorder::default();

        agent.steer_towards(Vector2D::new(100.0, 160.0), &viewport(), &config, &mut surface);

        assert!((agent.direction - 9.0).abs() < 1e-4);
        assert_eq!(agent.target_speed, 9.0);
        // 60 > 30: no feedback circle
        assert!(surface.circles.is_empty());
    }

    #[test]
    fn test_steer_takes_short_way_round() {
        let config = SwarmConfig::default();
        let mut agent = agent_at(100.0, 100.0);
        agent.direction = 170.0;

        // target straight below-left at -170 degrees: error is +20, not -340
        let target = Vector2D::from_polar(agent.position, -170.0, 50.0);
        agent.steer_towards(target, &viewport(), &config, &mut NullSurface);

        assert!((agent.direction - 172.0).abs() < 1e-3);
    }

    #[test]
    fn test_steer_draws_circle_when_close() {
        let config = SwarmConfig::default();
        let mut agent = agent_at(100.0, 100.0);
        let mut surface = Recorder::default();
        let target = Vector2D::new(120.0, 100.0);

        agent.steer_towards(target, &viewport(), &config, &mut surface);

        assert_eq!(surface.circles, vec![(target, 20.0)]);
    }

    #[test]
    fn test_avoid_last_neighbor_wins() {
        let mut a = agent_at(100.0, 100.0);
        let b = agent_at(110.0, 100.0);
        let c = agent_at(100.0, 120.0);
        let mut surface = Recorder::default();

        a.avoid_neighbors([&b, &c], 40.0, style(), &mut surface);

        // away from c (bearing 90) is 270, not away from b (180)
        assert!((a.direction - 270.0).abs() < 1e-4);
        assert_eq!(surface.lines.len(), 2);
        assert_eq!(surface.lines[1], (a.position, c.position));
    }

    #[test]
    fn test_avoid_ignores_distant_and_keeps_speed() {
        let mut a = agent_at(100.0, 100.0);
        a.direction = 12.0;
        a.speed = 3.0;
        a.target_speed = 7.0;
        let far = agent_at(140.0, 100.0);
        let mut surface = Recorder::default();

        a.avoid_neighbors([&far], 40.0, style(), &mut surface);

        assert_eq!(a.direction, 12.0);
        assert_eq!(a.speed, 3.0);
        assert_eq!(a.target_speed, 7.0);
        assert!(surface.lines.is_empty());
    }
}
