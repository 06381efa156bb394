//! Parameters of a birth-death simulation.

use crate::sim::simulation_error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// How simulated leaves are named.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelStyle {
    /// `L1`, `L2`, ... zero-padded to the width of the leaf count (`L01` .. `L12`).
    #[default]
    Enum,
    /// Unique pronounceable pseudo-words, e.g. `Tamuke`.
    Human,
}

// =#========================================================================#=
// SIMULATION CONFIG
// =#========================================================================#=
/// Configuration of [simulate](crate::sim::simulate).
///
/// Build it with the `with_*` methods or read it from TOML; missing keys
/// take their default values.
///
/// # Example
/// ```
/// use ngesh::sim::{LabelStyle, SimulationConfig};
///
/// let config = SimulationConfig::new()
///     .with_rates(1.0, 0.0)
///     .with_min_leaves(Some(8))
///     .with_num_chars(20)
///     .with_labels(LabelStyle::Human)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
///
/// let from_toml = SimulationConfig::from_toml_str("birth = 2.0\nseed = 7")?;
/// assert_eq!(from_toml.birth, 2.0);
/// assert_eq!(from_toml.death, 0.5);
/// # Ok::<(), ngesh::sim::ConfigError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Speciation rate per lineage
    pub birth: f64,
    /// Extinction rate per lineage
    pub death: f64,
    /// Stop as soon as this many lineages are alive
    pub min_leaves: Option<usize>,
    /// Stop at this time since the root
    pub max_time: Option<f64>,
    /// Number of characters per taxon
    pub num_chars: usize,
    /// Base rate of character change per unit of branch length
    pub mutation_rate: f64,
    /// Shape of the Gamma distribution of per-character rate multipliers
    pub rate_shape: f64,
    /// Scale of the Gamma distribution of per-character rate multipliers
    pub rate_scale: f64,
    /// Leaf naming
    pub labels: LabelStyle,
    /// Remove extinct lineages from the final tree
    pub prune_extinct: bool,
    /// Seed for reproducible runs, OS entropy if unset
    pub seed: Option<u64>,
    /// Attempts before giving up on a dying tree
    pub max_attempts: usize,
    /// Events per attempt before it counts as failed
    pub max_events: usize,
    /// Wall-clock budget for all attempts together
    pub timeout_secs: Option<f64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            birth: 1.0,
            death: 0.5,
            min_leaves: Some(10),
            max_time: None,
            num_chars: 0,
            mutation_rate: 1.0,
            rate_shape: 4.0,
            rate_scale: 0.25,
            labels: LabelStyle::Enum,
            prune_extinct: false,
            seed: None,
            max_attempts: 100,
            max_events: 1_000_000,
            timeout_secs: None,
        }
    }
}

impl SimulationConfig {
    /// Creates a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a configuration from TOML.
    ///
    /// # Errors
    /// [ConfigError::Toml] if the input is malformed or has unknown value types.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(input)?)
    }

    /// Reads a configuration from a TOML file.
    ///
    /// # Errors
    /// [ConfigError::Io] if the file cannot be read, [ConfigError::Toml] if it is malformed.
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Sets birth and death rates.
    pub fn with_rates(mut self, birth: f64, death: f64) -> Self {
        self.birth = birth;
        self.death = death;
        self
    }

    /// Sets the number of living lineages to stop at.
    pub fn with_min_leaves(mut self, min_leaves: Option<usize>) -> Self {
        self.min_leaves = min_leaves;
        self
    }

    /// Sets the time to stop at.
    pub fn with_max_time(mut self, max_time: Option<f64>) -> Self {
        self.max_time = max_time;
        self
    }

    /// Sets the number of characters per taxon.
    pub fn with_num_chars(mut self, num_chars: usize) -> Self {
        self.num_chars = num_chars;
        self
    }

    /// Sets the base rate of character change.
    pub fn with_mutation_rate(mut self, mutation_rate: f64) -> Self {
        self.mutation_rate = mutation_rate;
        self
    }

    /// Sets the Gamma shape and scale of per-character rate multipliers.
    pub fn with_rate_distribution(mut self, shape: f64, scale: f64) -> Self {
        self.rate_shape = shape;
        self.rate_scale = scale;
        self
    }

    /// Sets the leaf naming.
    pub fn with_labels(mut self, labels: LabelStyle) -> Self {
        self.labels = labels;
        self
    }

    /// Sets whether extinct lineages are removed.
    pub fn with_prune_extinct(mut self, prune_extinct: bool) -> Self {
        self.prune_extinct = prune_extinct;
        self
    }

    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the number of attempts.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Sets the event budget per attempt.
    pub fn with_max_events(mut self, max_events: usize) -> Self {
        self.max_events = max_events;
        self
    }

    /// Sets the wall-clock budget in seconds.
    pub fn with_timeout_secs(mut self, timeout_secs: Option<f64>) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Checks all parameters.
    ///
    /// # Errors
    /// The first [ConfigError] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.birth.is_finite() && self.birth > 0.0) {
            return Err(ConfigError::InvalidBirthRate(self.birth));
        }
        if !(self.death.is_finite() && self.death >= 0.0) {
            return Err(ConfigError::InvalidDeathRate(self.death));
        }
        if self.min_leaves.is_none() && self.max_time.is_none() {
            return Err(ConfigError::NoStoppingCondition);
        }
        if let Some(min_leaves) = self.min_leaves.filter(|&n| n < 2) {
            return Err(ConfigError::InvalidMinLeaves(min_leaves));
        }
        if let Some(max_time) = self.max_time.filter(|&t| !(t.is_finite() && t > 0.0)) {
            return Err(ConfigError::InvalidMaxTime(max_time));
        }
        if !(self.mutation_rate.is_finite() && self.mutation_rate >= 0.0) {
            return Err(ConfigError::InvalidMutationRate(self.mutation_rate));
        }
        let positive = |x: f64| x.is_finite() && x > 0.0;
        if !(positive(self.rate_shape) && positive(self.rate_scale)) {
            return Err(ConfigError::InvalidRateDistribution {
                shape: self.rate_shape,
                scale: self.rate_scale,
            });
        }
        if self.max_attempts == 0 {
            return Err(ConfigError::NoAttempts);
        }
        if self.max_events == 0 {
            return Err(ConfigError::NoEvents);
        }
        if let Some(timeout) = self.timeout_secs {
            timeout_duration(timeout)?;
        }
        Ok(())
    }
}

/// Converts a timeout in seconds into a [Duration], rejecting values it cannot hold.
pub(crate) fn timeout_duration(secs: f64) -> Result<Duration, ConfigError> {
    if secs <= 0.0 {
        return Err(ConfigError::InvalidTimeout(secs));
    }
    Duration::try_from_secs_f64(secs).map_err(|_| ConfigError::InvalidTimeout(secs))
}
