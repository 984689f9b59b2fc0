use alloc::vec::Vec;

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::agent::Agent;
use crate::config::SwarmConfig;
use crate::error::SwarmError;
use crate::geometry::Vector2D;
use crate::surface::{DrawSurface, StrokeStyle};
use crate::viewport::Viewport;

/// The simulation context: every agent plus the shared input state.
///
/// All mutation happens through [`Swarm::tick`] and the input handlers; the
/// host decides when to call them (an animation-frame callback, a fixed
/// timestep loop, ...). The agent count never changes after construction.
#[derive(Debug)]
pub struct Swarm {
    agents: Vec<Agent>,
    viewport: Viewport,
    pointer: Option<Vector2D>,
    config: SwarmConfig,
    rng: SmallRng,
    frame: u64,
}

impl Swarm {
    pub fn new(viewport: Viewport, config: SwarmConfig, seed: u64) -> Result<Self, SwarmError> {
        config.validate()?;
        let mut rng = SmallRng::seed_from_u64(seed);
        let agents = (0..config.agent_count)
            .map(|_| Agent::random(&mut rng, &viewport, &config))
            .collect();

        log::debug!(
            "Spawned {} agents in {}x{} viewport",
            config.agent_count,
            viewport.width(),
            viewport.height()
        );

        Ok(Self {
            agents,
            viewport,
            pointer: None,
            config,
            rng,
            frame: 0,
        })
    }

    #[cfg(feature = "std")]
    pub fn from_entropy(viewport: Viewport, config: SwarmConfig) -> Result<Self, SwarmError> {
        use rand::RngCore;
        let seed = rand::thread_rng().next_u64();
        Self::new(viewport, config, seed)
    }

    /// Build a swarm from explicit agents. `config.agent_count` is ignored.
    pub fn with_agents(
        viewport: Viewport,
        config: SwarmConfig,
        agents: Vec<Agent>,
        seed: u64,
    ) -> Result<Self, SwarmError> {
        config.validate()?;
        Ok(Self {
            agents,
            viewport,
            pointer: None,
            config,
            rng: SmallRng::seed_from_u64(seed),
            frame: 0,
        })
    }

    /// Run one frame.
    ///
    /// Agents are processed one at a time in collection order: steer towards
    /// the pointer (when present), turn away from neighbours, then move.
    /// Neighbour checks read the live collection, so agents later in the
    /// pass see the already-moved positions of earlier ones.
    pub fn tick<S: DrawSurface + ?Sized>(&mut self, surface: &mut S) {
        surface.clear(&self.viewport, self.config.background);

        let viewport = self.viewport;
        let config = self.config;
        let pointer = self.pointer;

        for index in 0..self.agents.len() {
            let (before, rest) = self.agents.split_at_mut(index);
            let Some((agent, after)) = rest.split_first_mut() else {
                break;
            };

            if let Some(target) = pointer {
                agent.steer_towards(target, &viewport, &config, &mut *surface);
            }

            let style = StrokeStyle {
                color: config.stroke_color,
                width: agent.radius,
            };
            agent.avoid_neighbors(
                before.iter().chain(after.iter()),
                config.avoid_threshold,
                style,
                &mut *surface,
            );

            agent.advance(&viewport, config.easing_gain);

            if config.show_agents {
                surface.fill_circle(agent.position, agent.radius, config.fill_color);
            }
        }

        self.frame += 1;
    }

    /// Record the pointer position in viewport coordinates.
    pub fn pointer_move(&mut self, position: Vector2D) {
        self.pointer = Some(position);
    }

    /// The pointer left the surface: stop orbiting and give every agent a
    /// fresh resting speed.
    pub fn pointer_leave(&mut self) {
        self.pointer = None;
        for agent in self.agents.iter_mut() {
            agent.target_speed = self.config.random_speed(&mut self.rng);
        }
        log::debug!("Pointer left, reset {} target speeds", self.agents.len());
    }

    /// Swap in a new viewport. Agents outside it wrap back on their next move.
    pub fn resize(&mut self, viewport: Viewport) {
        log::debug!(
            "Resized viewport {}x{} -> {}x{}",
            self.viewport.width(),
            self.viewport.height(),
            viewport.width(),
            viewport.height()
        );
        self.viewport = viewport;
    }

    /// Resize from a display size, scaled by the configured display scale.
    pub fn resize_display(&mut self, display_width: f32, display_height: f32) -> Result<(), SwarmError> {
        let viewport = Viewport::from_display(display_width, display_height, self.config.display_scale)?;
        self.resize(viewport);
        Ok(())
    }

    /// Throw every agent near `point` out to the scatter distance, keeping
    /// its angular offset from `point`. Returns how many agents moved.
    pub fn impulse(&mut self, point: Vector2D) -> usize {
        let range = self.config.influence_range(&self.viewport);
        let distance = self.config.scatter_distance;
        let mut scattered = 0;

        for agent in self.agents.iter_mut() {
            if point.distance(&agent.position) < range {
                let angle = point.bearing_to(&agent.position);
                agent.position = Vector2D::from_polar(point, angle, distance);
                scattered += 1;
            }
        }

        log::debug!("Impulse at ({}, {}) scattered {} agents", point.x, point.y, scattered);
        scattered
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn agents_mut(&mut self) -> &mut [Agent] {
        &mut self.agents
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn pointer(&self) -> Option<Vector2D> {
        self.pointer
    }

    pub fn config(&self) -> &SwarmConfig {
        &self.config
    }

    /// Frames run so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn mean_speed(&self) -> f32 {
        if self.agents.is_empty() {
            return 0.0;
        }
        self.agents.iter().map(|a| a.speed).sum::<f32>() / self.agents.len() as f32
    }
}
