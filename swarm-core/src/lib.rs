#![cfg_attr(not(feature = "std"), no_std)]

//! Core of the swarm animation: circular agents that orbit the pointer,
//! push away from close neighbours and wrap around the viewport edges.
//!
//! Rendering and input are supplied by the host through [`DrawSurface`] and
//! the pointer/resize handlers on [`Swarm`].

extern crate alloc;

pub mod agent;
pub mod config;
pub mod error;
pub mod geometry;
pub mod surface;
pub mod swarm;
pub mod viewport;

mod math;

pub use agent::Agent;
pub use config::SwarmConfig;
pub use error::SwarmError;
pub use geometry::{normalize_angle_difference, Vector2D};
pub use surface::{Color, DrawSurface, NullSurface, StrokeStyle};
pub use swarm::Swarm;
pub use viewport::Viewport;
