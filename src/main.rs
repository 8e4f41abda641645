/*
 * Flocking Simulation
 *
 * Boids move under alignment, cohesion and separation, steer around
 * obstacles and are nudged away from the window borders.
 * Left click adds a boid, right click adds an obstacle.
 *
 * Logging is controlled with RUST_LOG (default: flocking=info).
 * FLOCK_SEED fixes the random seed, FLOCK_INTEGRATION picks "double" or "single".
 */

use flocking::app::{model, update};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("flocking=info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

fn main() {
    init_tracing();
    nannou::app(model).update(update).run();
}
