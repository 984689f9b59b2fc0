use rand::Rng;

use crate::error::SwarmError;
use crate::surface::Color;
use crate::viewport::Viewport;

/// Configuration for the swarm simulation
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct SwarmConfig {
    pub agent_count: usize,
    pub agent_radius: f32,
    /// Lower bound of the resting speed range.
    pub min_speed: f32,
    /// Upper bound of the resting speed range.
    pub max_speed: f32,
    /// Neighbours closer than this push an agent away.
    pub avoid_threshold: f32,
    /// Pointer influence radius as a fraction of the shorter viewport side.
    pub influence_fraction: f32,
    /// Radius, as a fraction of the shorter viewport side, inside which the
    /// pointer feedback circle is drawn.
    pub circle_fraction: f32,
    /// Share of the heading error corrected per frame while orbiting the pointer.
    pub steering_gain: f32,
    /// Share of the speed gap closed per frame.
    pub easing_gain: f32,
    /// How far a click throws nearby agents.
    pub scatter_distance: f32,
    /// Display-to-viewport multiplier.
    pub display_scale: f32,
    /// Agents spawn in `[0, side - spawn_margin)` on each axis.
    pub spawn_margin: f32,
    /// Fill every agent's disc after it moves.
    pub show_agents: bool,
    pub stroke_color: Color,
    pub background: Color,
    /// Fill used by `show_agents`; keep it distinct from `background`.
    pub fill_color: Color,
    pub agent_color: Color,
}

impl Default for SwarmConfig {
    fn default() -> Self {
        Self {
            agent_count: 1000,
            agent_radius: 5.0,
            min_speed: 5.0,
            max_speed: 8.0,
            avoid_threshold: 40.0,
            influence_fraction: 0.15,
            circle_fraction: 0.05,
            steering_gain: 0.1,
            easing_gain: 0.1,
            scatter_distance: 500.0,
            display_scale: 4.0,
            spawn_margin: 50.0,
            show_agents: false,
            stroke_color: Color::CYAN,
            background: Color::BLACK,
            fill_color: Color::CYAN,
            agent_color: Color::BLACK,
        }
    }
}

impl SwarmConfig {
    pub fn validate(&self) -> Result<(), SwarmError> {
        let (min, max) = (self.min_speed, self.max_speed);
        if !(min.is_finite() && max.is_finite()) || min < 0.0 || min > max {
            return Err(SwarmError::InvalidSpeedRange { min, max });
        }
        if !self.agent_radius.is_finite() || self.agent_radius <= 0.0 {
            return Err(SwarmError::InvalidRadius(self.agent_radius));
        }

        positive("influence_fraction", self.influence_fraction)?;
        positive("circle_fraction", self.circle_fraction)?;
        positive("display_scale", self.display_scale)?;
        gain("steering_gain", self.steering_gain)?;
        gain("easing_gain", self.easing_gain)?;
        non_negative("avoid_threshold", self.avoid_threshold)?;
        non_negative("scatter_distance", self.scatter_distance)?;
        non_negative("spawn_margin", self.spawn_margin)?;
        Ok(())
    }

    /// Distance from the pointer within which agents are steered.
    pub fn influence_range(&self, viewport: &Viewport) -> f32 {
        viewport.min_dimension() * self.influence_fraction
    }

    /// Distance from the pointer within which the feedback circle is drawn.
    pub fn circle_range(&self, viewport: &Viewport) -> f32 {
        viewport.min_dimension() * self.circle_fraction
    }

    /// Uniform sample from `[min_speed, max_speed]`.
    ///
    /// The upper bound is reachable: the top `f32` sample times the span
    /// rounds up to `max_speed`.
    pub fn random_speed<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        rng.gen::<f32>() * (self.max_speed - self.min_speed) + self.min_speed
    }

    /// Target speed of an agent excited by the pointer at `distance`.
    ///
    /// Kept as `max(min(min_speed - 1, distance / 2), max_speed + 1)`: with
    /// `min_speed <= max_speed` the outer `max` always yields `max_speed + 1`.
    pub fn excited_speed(&self, distance: f32) -> f32 {
        (self.min_speed - 1.0)
            .min(distance / 2.0)
            .max(self.max_speed + 1.0)
    }
}

fn positive(name: &'static str, value: f32) -> Result<(), SwarmError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SwarmError::InvalidParameter { name, value })
    }
}

fn non_negative(name: &'static str, value: f32) -> Result<(), SwarmError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(SwarmError::InvalidParameter { name, value })
    }
}

fn gain(name: &'static str, value: f32) -> Result<(), SwarmError> {
    if value.is_finite() && value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(SwarmError::InvalidParameter { name, value })
    }
}
