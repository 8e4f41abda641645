/*
 * Simulation Parameters Module
 *
 * Runtime settings for the simulation. The physical constants (world size,
 * radii, force limits) are fixed in lib.rs; only the seed, the integration
 * mode and the UI toggles live here. Seed and mode can be set from the
 * environment (FLOCK_SEED, FLOCK_INTEGRATION).
 */

use std::env;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

pub const SEED_VAR: &str = "FLOCK_SEED";
pub const INTEGRATION_VAR: &str = "FLOCK_INTEGRATION";

// How a boid's position is integrated each tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntegrationMode {
    // Move once after clamping, then again after obstacle and border forces.
    #[default]
    DoubleStep,
    // Accumulate every force, then move once.
    SingleStep,
}

impl FromStr for IntegrationMode {
    type Err = ParamsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "double" => Ok(IntegrationMode::DoubleStep),
            "single" => Ok(IntegrationMode::SingleStep),
            _ => Err(ParamsError::InvalidIntegration(s.to_string())),
        }
    }
}

impl fmt::Display for IntegrationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntegrationMode::DoubleStep => write!(f, "double"),
            IntegrationMode::SingleStep => write!(f, "single"),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ParamsError {
    #[error("FLOCK_SEED must be an unsigned integer, got {0:?}")]
    InvalidSeed(String),
    #[error("FLOCK_INTEGRATION must be \"double\" or \"single\", got {0:?}")]
    InvalidIntegration(String),
}

#[derive(Debug, Clone, Default)]
pub struct SimulationParams {
    // Seed for spawning and the cohesion fallback; entropy when unset.
    pub rng_seed: Option<u64>,
    pub integration: IntegrationMode,
    pub pause_simulation: bool,
    pub show_debug: bool,
}

impl SimulationParams {
    // Read settings from the process environment
    pub fn from_env() -> Result<Self, ParamsError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    // Build settings from any key lookup; missing keys keep their defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ParamsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut params = Self::default();

        if let Some(raw) = lookup(SEED_VAR) {
            let seed = raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ParamsError::InvalidSeed(raw.clone()))?;
            params.rng_seed = Some(seed);
        }

        if let Some(raw) = lookup(INTEGRATION_VAR) {
            params.integration = raw.parse()?;
        }

        Ok(params)
    }
}
