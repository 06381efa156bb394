//! Random phylogenetic trees with character data.
//!
//! Trees are grown by a birth-death process: each living lineage speciates
//! with rate `birth` and goes extinct with rate `death`. Characters evolve
//! along the branches, every change introducing a fresh state, so each taxon
//! ends up with a vector of integer states (cognate classes, in linguistic terms).
//!
//! - [SimulationConfig] - parameters, buildable in code or read from TOML
//! - [simulate] / [simulate_with_rng] - run a simulation
//!
//! # Example
//! ```
//! use ngesh::sim::{simulate, SimulationConfig};
//!
//! let config = SimulationConfig::new()
//!     .with_rates(1.0, 0.0)
//!     .with_min_leaves(Some(6))
//!     .with_num_chars(10)
//!     .with_seed(13);
//! let tree = simulate(&config)?;
//! assert_eq!(tree.num_leaves(), 6);
//!
//! let wordlist = ngesh::wordlist::to_wordlist(&tree)?;
//! assert_eq!(wordlist.lines().count(), 1 + 6 * 10);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod config;
mod engine;
mod labels;
mod simulation_error;

pub use self::config::{LabelStyle, SimulationConfig};
pub use self::simulation_error::{ConfigError, SimulationError};

use crate::model::PhyloTree;
use engine::Simulator;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

/// Simulates a tree according to the given configuration.
///
/// Seeded runs (`config.seed`) are reproducible; otherwise the generator is
/// seeded from OS entropy.
///
/// # Errors
/// - [SimulationError::InvalidConfig] if the configuration does not validate
/// - [SimulationError::DiedOut] if every attempt died out or ran out of events
/// - [SimulationError::Timeout] if `timeout_secs` elapsed
pub fn simulate(config: &SimulationConfig) -> Result<PhyloTree<u32>, SimulationError> {
    let mut rng = match config.seed {
        Some(seed) => Xoshiro256PlusPlus::seed_from_u64(seed),
        None => Xoshiro256PlusPlus::from_rng(&mut rand::rng()),
    };
    simulate_with_rng(config, &mut rng)
}

/// Simulates a tree drawing randomness from the given generator, ignoring `config.seed`.
///
/// # Errors
/// See [simulate].
pub fn simulate_with_rng<R: Rng>(
    config: &SimulationConfig,
    rng: &mut R,
) -> Result<PhyloTree<u32>, SimulationError> {
    config.validate()?;
    Simulator::new(config, rng)?.run()
}
