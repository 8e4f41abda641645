/*
 * Steering Module
 *
 * The three flocking rules. Each one turns the neighbor sums for a boid into
 * a velocity delta; none of them touch the boid directly.
 * 1. Alignment: match the average heading of nearby boids
 * 2. Cohesion: drift towards the average position of nearby boids
 * 3. Separation: push away from boids that are too close
 */

use nannou::prelude::*;
use tracing::debug;

use crate::boid::Boid;
use crate::math::{limit_vector, VectorSource};
use crate::neighbors::NeighborSums;
use crate::{MAX_FORCE, MAX_VELOCITY};

// Average neighbor velocity, limited to MAX_VELOCITY
pub fn alignment(sums: &NeighborSums) -> Vec2 {
    if sums.alignment_count == 0 {
        return Vec2::ZERO;
    }
    let average = sums.velocity_sum / sums.alignment_count as f32;
    limit_vector(average, MAX_VELOCITY)
}

// Vector towards the centre of the cohesion neighbors, limited to MAX_FORCE.
// A centre exactly on the boid falls back to an unlimited random vector.
pub fn cohesion(boid: &Boid, sums: &NeighborSums, source: &mut impl VectorSource) -> Vec2 {
    if sums.cohesion_count == 0 {
        return Vec2::ZERO;
    }
    let center = sums.position_sum / sums.cohesion_count as f32;
    let toward = center - boid.position;
    if toward == Vec2::ZERO {
        debug!(position = ?boid.position, "cohesion centre coincides with boid, using random vector");
        source.signed_unit()
    } else {
        limit_vector(toward, MAX_FORCE)
    }
}

// Average of the per-neighbor away vectors, limited again to MAX_VELOCITY
pub fn separation(sums: &NeighborSums) -> Vec2 {
    if sums.separation_count == 0 {
        return Vec2::ZERO;
    }
    let average = sums.separation_sum / sums.separation_count as f32;
    limit_vector(average, MAX_VELOCITY)
}

// Sum of all three rule contributions for one boid.
pub fn flock(boid: &Boid, sums: &NeighborSums, source: &mut impl VectorSource) -> Vec2 {
    alignment(sums) + cohesion(boid, sums, source) + separation(sums)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    struct FixedVector(Vec2, usize);

    impl VectorSource for FixedVector {
        fn signed_unit(&mut self) -> Vec2 {
            self.1 += 1;
            self.0
        }
    }

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn no_neighbors_means_no_steering() {
        let boid = Boid::new(vec2(400.0, 300.0), vec2(0.3, 0.1));
        let mut source = FixedVector(vec2(1.0, 1.0), 0);
        let sums = NeighborSums::default();

        assert_eq!(flock(&boid, &sums, &mut source), Vec2::ZERO);
        assert_eq!(source.1, 0);
    }

    #[test]
    fn alignment_averages_then_limits() {
        let sums = NeighborSums {
            velocity_sum: vec2(2.0, 4.0),
            alignment_count: 2,
            ..Default::default()
        };
        assert_eq!(alignment(&sums), vec2(1.0, 2.0));

        let fast = NeighborSums {
            velocity_sum: vec2(30.0, 40.0),
            alignment_count: 1,
            ..Default::default()
        };
        assert!(approx(alignment(&fast), vec2(3.0, 4.0)));
    }

    #[test]
    fn cohesion_points_towards_centre_with_max_force() {
        let boid = Boid::new(vec2(100.0, 100.0), Vec2::ZERO);
        let sums = NeighborSums {
            position_sum: vec2(300.0, 200.0),
            cohesion_count: 2,
            ..Default::default()
        };
        let mut source = FixedVector(Vec2::ZERO, 0);

        let steer = cohesion(&boid, &sums, &mut source);
        assert!(approx(steer, vec2(MAX_FORCE, 0.0)));
        assert_eq!(source.1, 0);
    }

    #[test]
    fn cohesion_uses_random_vector_when_centred() {
        let boid = Boid::new(vec2(400.0, 300.0), Vec2::ZERO);
        // Neighbors at (390, 300) and (410, 300) average to the boid itself
        let sums = NeighborSums {
            position_sum: vec2(800.0, 600.0),
            cohesion_count: 2,
            ..Default::default()
        };
        let mut source = FixedVector(vec2(-0.75, 0.5), 0);

        let steer = cohesion(&boid, &sums, &mut source);
        // Fallback vector is applied as-is, not limited to MAX_FORCE
        assert_eq!(steer, vec2(-0.75, 0.5));
        assert_eq!(source.1, 1);
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn cohesion_fallback_is_quiet_at_info_level() {
        let boid = Boid::new(vec2(400.0, 300.0), Vec2::ZERO);
        let sums = NeighborSums {
            position_sum: vec2(800.0, 600.0),
            cohesion_count: 2,
            ..Default::default()
        };
        let mut source = FixedVector(vec2(0.5, 0.5), 0);

        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            for _ in 0..100 {
                cohesion(&boid, &sums, &mut source);
            }
        });

        assert_eq!(source.1, 100);
        assert!(captured.0.lock().unwrap().is_empty());
    }

    #[test]
    fn separation_averages_the_limited_terms() {
        let sums = NeighborSums {
            separation_sum: vec2(0.1, 0.1),
            separation_count: 2,
            ..Default::default()
        };
        assert!(approx(separation(&sums), vec2(0.05, 0.05)));
    }
}
