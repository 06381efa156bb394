//! Error types for configuring and running tree simulations.

use std::io;
use std::time::Duration;
use thiserror::Error;

/// Invalid or unreadable [SimulationConfig](crate::sim::SimulationConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Birth rate must be positive and finite.
    #[error("Birth rate must be positive and finite, got {0}")]
    InvalidBirthRate(f64),

    /// Death rate must be non-negative and finite.
    #[error("Death rate must be non-negative and finite, got {0}")]
    InvalidDeathRate(f64),

    /// Neither `min_leaves` nor `max_time` is set.
    #[error("At least one stopping condition (min_leaves or max_time) is required")]
    NoStoppingCondition,

    /// `min_leaves` below two.
    #[error("Minimum number of leaves must be at least 2, got {0}")]
    InvalidMinLeaves(usize),

    /// `max_time` not positive and finite.
    #[error("Maximum time must be positive and finite, got {0}")]
    InvalidMaxTime(f64),

    /// Mutation rate must be non-negative and finite.
    #[error("Mutation rate must be non-negative and finite, got {0}")]
    InvalidMutationRate(f64),

    /// Gamma shape or scale of the rate multipliers not positive and finite.
    #[error("Rate distribution needs positive shape and scale, got shape={shape}, scale={scale}")]
    InvalidRateDistribution { shape: f64, scale: f64 },

    /// `max_attempts` is zero.
    #[error("Number of attempts must be at least 1")]
    NoAttempts,

    /// `max_events` is zero.
    #[error("Event budget must be at least 1")]
    NoEvents,

    /// `timeout_secs` not positive and finite.
    #[error("Timeout must be positive and finite, got {0}")]
    InvalidTimeout(f64),

    /// Configuration file could not be parsed.
    #[error("Malformed configuration: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration file could not be read.
    #[error("Failed to read configuration: {0}")]
    Io(#[from] io::Error),
}

/// Failure of [simulate](crate::sim::simulate).
#[derive(Debug, Error)]
pub enum SimulationError {
    /// Configuration did not pass validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    /// Every attempt ended with all lineages extinct (or out of events).
    #[error("Tree died out in all {attempts} attempts")]
    DiedOut { attempts: usize },

    /// Wall-clock budget exhausted.
    #[error("Simulation timed out after {elapsed:?}")]
    Timeout { elapsed: Duration },
}
