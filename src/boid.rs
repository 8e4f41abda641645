/*
 * Boid Module
 *
 * This module defines the Boid and Obstacle types.
 * A boid is a point agent with a position and velocity; an obstacle is a
 * fixed point that boids steer away from once they come within OBSTACLE_RADIUS.
 */

use nannou::prelude::*;

use crate::camera::Camera;
use crate::{BOID_SIZE, OBSTACLE_RADIUS};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Boid {
    pub position: Vec2,
    pub velocity: Vec2,
}

impl Boid {
    pub fn new(position: Vec2, velocity: Vec2) -> Self {
        Self { position, velocity }
    }

    // Draw the boid as a filled circle
    pub fn draw(&self, draw: &Draw, camera: &Camera, window_rect: Rect) {
        let screen_pos = camera.world_to_screen(self.position, window_rect);
        draw.ellipse()
            .xy(screen_pos)
            .radius(BOID_SIZE)
            .color(WHITE);
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    pub position: Vec2,
}

impl Obstacle {
    pub fn new(position: Vec2) -> Self {
        Self { position }
    }

    // Draw the obstacle's avoidance radius as an outline
    pub fn draw(&self, draw: &Draw, camera: &Camera, window_rect: Rect) {
        let screen_pos = camera.world_to_screen(self.position, window_rect);
        draw.ellipse()
            .xy(screen_pos)
            .radius(OBSTACLE_RADIUS)
            .no_fill()
            .stroke(RED)
            .stroke_weight(1.0);
    }
}
