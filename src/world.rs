/*
 * World Module
 *
 * Owns the boids and obstacles, advances the flock one tick at a time and
 * applies the external "add boid" / "add obstacle" events.
 */

use nannou::prelude::*;
use thiserror::Error;
use tracing::{debug, info, trace};

use crate::boid::{Boid, Obstacle};
use crate::math::{RandomVectors, VectorSource};
use crate::neighbors::classify;
use crate::params::{IntegrationMode, SimulationParams};
use crate::physics::{step, StepContext};
use crate::{HEIGHT, INITIAL_BOIDS, WIDTH};

// Errors that can occur when constructing a world.
#[derive(Debug, Error, PartialEq)]
pub enum WorldError {
    #[error("world bounds must be positive and finite, got {width}x{height}")]
    InvalidBounds { width: f32, height: f32 },
}

// Events delivered from the input layer between ticks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WorldEvent {
    // New boid at the point, with a random velocity.
    AddAgent(Vec2),
    AddObstacle(Vec2),
}

pub struct World<V = RandomVectors> {
    boids: Vec<Boid>,
    obstacles: Vec<Obstacle>,
    width: f32,
    height: f32,
    integration: IntegrationMode,
    source: V,
    ticks: u64,
}

impl World<RandomVectors> {
    // Standard 800x600 world with the initial random flock.
    pub fn seeded(params: &SimulationParams) -> Self {
        let mut source = RandomVectors::seeded(params.rng_seed);
        let mut boids = Vec::with_capacity(INITIAL_BOIDS);
        for _ in 0..INITIAL_BOIDS {
            let position = source.point_in(WIDTH, HEIGHT);
            let velocity = source.signed_unit();
            boids.push(Boid::new(position, velocity));
        }

        info!(
            boids = boids.len(),
            seed = ?params.rng_seed,
            integration = %params.integration,
            "seeded world"
        );

        Self {
            boids,
            obstacles: Vec::new(),
            width: WIDTH,
            height: HEIGHT,
            integration: params.integration,
            source,
            ticks: 0,
        }
    }
}

impl<V: VectorSource> World<V> {
    // Empty world with the given bounds.
    pub fn new(width: f32, height: f32, source: V) -> Result<Self, WorldError> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if !valid(width) || !valid(height) {
            return Err(WorldError::InvalidBounds { width, height });
        }
        Ok(Self {
            boids: Vec::new(),
            obstacles: Vec::new(),
            width,
            height,
            integration: IntegrationMode::default(),
            source,
            ticks: 0,
        })
    }

    pub fn with_integration(mut self, integration: IntegrationMode) -> Self {
        self.integration = integration;
        self
    }

    pub fn set_integration(&mut self, integration: IntegrationMode) {
        self.integration = integration;
    }

    // In place and in insertion order: later boids see this tick's state of earlier ones
    pub fn tick(&mut self) {
        let count = self.boids.len();
        for i in 0..count {
            let boid = self.boids[i];
            let sums = classify(&self.boids, &boid);
            let ctx = StepContext {
                obstacles: &self.obstacles,
                width: self.width,
                height: self.height,
                mode: self.integration,
            };
            self.boids[i] = step(boid, &sums, &ctx, &mut self.source);
        }
        self.ticks += 1;
        trace!(tick = self.ticks, boids = count, "tick");
    }

    pub fn add_boid(&mut self, position: Vec2, velocity: Vec2) {
        debug!(?position, ?velocity, "adding boid");
        self.boids.push(Boid::new(position, velocity));
    }

    pub fn add_obstacle(&mut self, position: Vec2) {
        debug!(?position, "adding obstacle");
        self.obstacles.push(Obstacle::new(position));
    }

    pub fn apply(&mut self, event: WorldEvent) {
        match event {
            WorldEvent::AddAgent(position) => {
                let velocity = self.source.signed_unit();
                self.add_boid(position, velocity);
            }
            WorldEvent::AddObstacle(position) => self.add_obstacle(position),
        }
    }

    pub fn boids(&self) -> &[Boid] {
        &self.boids
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Constant(Vec2);

    impl VectorSource for Constant {
        fn signed_unit(&mut self) -> Vec2 {
            self.0
        }
    }

    #[test]
    fn rejects_degenerate_bounds() {
        assert!(World::new(0.0, 600.0, Constant(Vec2::ZERO)).is_err());
        assert!(World::new(800.0, -1.0, Constant(Vec2::ZERO)).is_err());
        assert!(World::new(f32::NAN, 600.0, Constant(Vec2::ZERO)).is_err());
        assert!(World::new(f32::INFINITY, 600.0, Constant(Vec2::ZERO)).is_err());
        assert!(World::new(800.0, 600.0, Constant(Vec2::ZERO)).is_ok());
    }

    #[test]
    fn seeded_world_has_initial_flock_in_bounds() {
        let params = SimulationParams {
            rng_seed: Some(99),
            ..Default::default()
        };
        let world = World::seeded(&params);

        assert_eq!(world.boids().len(), INITIAL_BOIDS);
        assert!(world.obstacles().is_empty());
        for boid in world.boids() {
            assert!((0.0..=WIDTH).contains(&boid.position.x));
            assert!((0.0..=HEIGHT).contains(&boid.position.y));
            assert!((-1.0..=1.0).contains(&boid.velocity.x));
            assert!((-1.0..=1.0).contains(&boid.velocity.y));
        }
    }

    #[test]
    fn same_seed_gives_same_flock() {
        let params = SimulationParams {
            rng_seed: Some(5),
            ..Default::default()
        };
        let mut a = World::seeded(&params);
        let mut b = World::seeded(&params);
        for _ in 0..20 {
            a.tick();
            b.tick();
        }
        assert_eq!(a.boids(), b.boids());
    }

    #[test]
    fn add_agent_event_uses_source_velocity() {
        let mut world = World::new(WIDTH, HEIGHT, Constant(vec2(0.25, -0.5))).unwrap();
        world.apply(WorldEvent::AddAgent(vec2(10.0, 20.0)));
        world.apply(WorldEvent::AddObstacle(vec2(30.0, 40.0)));

        assert_eq!(world.boids(), &[Boid::new(vec2(10.0, 20.0), vec2(0.25, -0.5))]);
        assert_eq!(world.obstacles(), &[Obstacle::new(vec2(30.0, 40.0))]);
    }

    #[test]
    fn tick_counter_advances() {
        let mut world = World::new(WIDTH, HEIGHT, Constant(Vec2::ZERO)).unwrap();
        world.tick();
        world.tick();
        assert_eq!(world.ticks(), 2);
    }
}
