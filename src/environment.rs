/*
 * Environment Forces Module
 *
 * Forces that come from the world rather than from other boids:
 * obstacle avoidance and the soft push away from the borders.
 */

use nannou::prelude::*;

use crate::boid::Obstacle;
use crate::math::{distance, limit_vector};
use crate::{BORDER_SIZE, MAX_FORCE, OBSTACLE_RADIUS};

// Each obstacle term is limited to MAX_FORCE, the total is not
pub fn avoid_obstacles(position: Vec2, obstacles: &[Obstacle]) -> Vec2 {
    let mut steering = Vec2::ZERO;
    for obstacle in obstacles {
        if distance(position, obstacle.position) < OBSTACLE_RADIUS {
            steering += limit_vector(position - obstacle.position, MAX_FORCE);
        }
    }
    steering
}

// Constant MAX_FORCE nudge on each axis where the position is inside the border band.
pub fn contain(position: Vec2, width: f32, height: f32) -> Vec2 {
    let mut steering = Vec2::ZERO;

    if position.x < BORDER_SIZE {
        steering.x += MAX_FORCE;
    } else if position.x > width - BORDER_SIZE {
        steering.x -= MAX_FORCE;
    }

    if position.y < BORDER_SIZE {
        steering.y += MAX_FORCE;
    } else if position.y > height - BORDER_SIZE {
        steering.y -= MAX_FORCE;
    }

    steering
}
