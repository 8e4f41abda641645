/*
 * Vector Math Module
 *
 * Distance and magnitude-limiting helpers shared by every steering rule,
 * plus the random vector source used for spawning and the cohesion fallback.
 */

use nannou::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

// Rescale only when over the limit; shorter vectors come back untouched
#[inline]
pub fn limit_vector(vector: Vec2, limit: f32) -> Vec2 {
    let magnitude = (vector.x * vector.x + vector.y * vector.y).sqrt();
    if magnitude > limit {
        vec2(vector.x / magnitude * limit, vector.y / magnitude * limit)
    } else {
        vector
    }
}

// Source of random vectors with both components drawn independently from `[-1, 1]`.
pub trait VectorSource {
    fn signed_unit(&mut self) -> Vec2;
}

impl<V: VectorSource + ?Sized> VectorSource for &mut V {
    fn signed_unit(&mut self) -> Vec2 {
        (**self).signed_unit()
    }
}

// `VectorSource` backed by any rand RNG.
pub struct RandomVectors<R = StdRng> {
    rng: R,
}

impl RandomVectors<StdRng> {
    // Seeded when a seed is given, otherwise from entropy
    pub fn seeded(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }
}

impl<R: Rng> RandomVectors<R> {
    // Uniform point inside [0, width] x [0, height]
    pub fn point_in(&mut self, width: f32, height: f32) -> Vec2 {
        let x = self.rng.gen_range(0.0..=width);
        let y = self.rng.gen_range(0.0..=height);
        vec2(x, y)
    }
}

impl<R: Rng> VectorSource for RandomVectors<R> {
    fn signed_unit(&mut self) -> Vec2 {
        let x = self.rng.gen_range(-1.0..=1.0);
        let y = self.rng.gen_range(-1.0..=1.0);
        vec2(x, y)
    }
}
