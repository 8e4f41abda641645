/*
 * Physics Module
 *
 * Advances a single boid by one tick. The default sequence is:
 * 1. Add the flocking steering to the velocity
 * 2. Clamp the velocity to a tenth of MAX_VELOCITY
 * 3. Move by the velocity
 * 4. Add obstacle avoidance and border containment at the new position
 * 5. Move by the (now unclamped) velocity again
 * 6. Wrap the position back into the world
 *
 * Moving twice per tick doubles the effective speed and is what the flock's
 * look depends on. IntegrationMode::SingleStep accumulates every force first
 * and moves once.
 */

use nannou::prelude::*;

use crate::boid::{Boid, Obstacle};
use crate::environment::{avoid_obstacles, contain};
use crate::math::{limit_vector, VectorSource};
use crate::neighbors::NeighborSums;
use crate::params::IntegrationMode;
use crate::steering;
use crate::MAX_VELOCITY;

// Speed cap applied right after steering.
pub const SPEED_LIMIT: f32 = MAX_VELOCITY * 0.1;

// Everything a boid step needs from the world besides the boid itself.
pub struct StepContext<'a> {
    pub obstacles: &'a [Obstacle],
    pub width: f32,
    pub height: f32,
    pub mode: IntegrationMode,
}

// Advance one boid given its neighbor sums
pub fn step(
    boid: Boid,
    sums: &NeighborSums,
    ctx: &StepContext<'_>,
    source: &mut impl VectorSource,
) -> Boid {
    let mut next = boid;

    next.velocity += steering::flock(&boid, sums, source);
    next.velocity = limit_vector(next.velocity, SPEED_LIMIT);

    match ctx.mode {
        IntegrationMode::DoubleStep => {
            next.position += next.velocity;
            next.velocity += environment_forces(next.position, ctx);
            next.position += next.velocity;
        }
        IntegrationMode::SingleStep => {
            next.velocity += environment_forces(next.position, ctx);
            next.position += next.velocity;
        }
    }

    next.position = wrap_position(next.position, ctx.width, ctx.height);
    next
}

fn environment_forces(position: Vec2, ctx: &StepContext<'_>) -> Vec2 {
    avoid_obstacles(position, ctx.obstacles) + contain(position, ctx.width, ctx.height)
}

// Below zero jumps to the far bound, beyond the bound is reduced modulo it.
// A coordinate exactly on the bound is left alone.
pub fn wrap_position(position: Vec2, width: f32, height: f32) -> Vec2 {
    vec2(wrap_axis(position.x, width), wrap_axis(position.y, height))
}

#[inline]
fn wrap_axis(value: f32, bound: f32) -> f32 {
    if value < 0.0 {
        bound
    } else if value > bound {
        value % bound
    } else {
        value
    }
}
