/*
 * Neighbor Query Module
 *
 * Brute-force classification of every other boid against the three
 * perception radii. Only running sums and counts are kept, since the
 * steering rules never need the individual neighbors.
 */

use nannou::prelude::*;

use crate::boid::Boid;
use crate::math::{distance, limit_vector};
use crate::{ALIGNMENT_RADIUS, COHESION_RADIUS, MAX_FORCE, SEPARATION_RADIUS};

// Accumulated neighbor data for one boid.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NeighborSums {
    pub velocity_sum: Vec2,
    pub alignment_count: usize,
    pub position_sum: Vec2,
    pub cohesion_count: usize,
    // Sum of per-neighbor away vectors, each already limited to MAX_FORCE.
    pub separation_sum: Vec2,
    pub separation_count: usize,
}

// Distance zero is skipped: the reference itself and any boid on the same point
pub fn classify(boids: &[Boid], reference: &Boid) -> NeighborSums {
    let mut sums = NeighborSums::default();

    for other in boids {
        let d = distance(reference.position, other.position);

        if d > 0.0 && d < ALIGNMENT_RADIUS {
            sums.velocity_sum += other.velocity;
            sums.alignment_count += 1;
        }

        if d > 0.0 && d < COHESION_RADIUS {
            sums.position_sum += other.position;
            sums.cohesion_count += 1;
        }

        if d > 0.0 && d < SEPARATION_RADIUS {
            let away = limit_vector(reference.position - other.position, MAX_FORCE);
            sums.separation_sum += away;
            sums.separation_count += 1;
        }
    }

    sums
}
