/*
 * Flocking Simulation - Module Definitions
 *
 * This file defines the module structure for the flocking simulation.
 * The simulation core (math, neighbors, steering, environment, physics,
 * world) is independent of the window; the remaining modules are the
 * nannou front end.
 */

// Re-export key components for easier access
pub use boid::{Boid, Obstacle};
pub use camera::Camera;
pub use math::{RandomVectors, VectorSource};
pub use params::{IntegrationMode, ParamsError, SimulationParams};
pub use debug::DebugInfo;
pub use world::{World, WorldError, WorldEvent};
pub use app::Model;

// Define modules
pub mod math;
pub mod neighbors;
pub mod steering;
pub mod environment;
pub mod physics;
pub mod boid;
pub mod world;
pub mod camera;
pub mod params;
pub mod debug;
pub mod app;
pub mod ui;
pub mod renderer;
pub mod input;

// World dimensions
pub const WIDTH: f32 = 800.0;
pub const HEIGHT: f32 = 600.0;

// Steering limits
pub const MAX_VELOCITY: f32 = 5.0;
pub const MAX_FORCE: f32 = 0.1;

// Perception radii
pub const ALIGNMENT_RADIUS: f32 = 50.0;
pub const COHESION_RADIUS: f32 = 100.0;
pub const SEPARATION_RADIUS: f32 = 50.0;

pub const OBSTACLE_RADIUS: f32 = 20.0;
pub const BORDER_SIZE: f32 = 100.0;

pub const INITIAL_BOIDS: usize = 50;
pub const BOID_SIZE: f32 = 5.0;
