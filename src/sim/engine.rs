//! Birth-death process with character evolution along the branches.

use crate::model::{BranchLength, PhyloTree, Taxon, VertexIndex};
use crate::sim::config::{timeout_duration, SimulationConfig};
use crate::sim::labels::generate_labels;
use crate::sim::simulation_error::{ConfigError, SimulationError};
use rand::Rng;
use rand_distr::{Distribution, Exp, Gamma};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Index of a lineage within one attempt.
type LineageIndex = usize;

/// What became of a lineage at the end of its branch.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Fate {
    Alive,
    Speciated(LineageIndex, LineageIndex),
    Extinct,
    Survived,
}

/// A branch of the process, from its birth to its speciation, extinction or the stop time.
#[derive(Debug, Clone)]
struct Lineage {
    start: f64,
    end: f64,
    chars: Vec<u32>,
    fate: Fate,
}

/// How an attempt ended.
enum Outcome {
    Stopped,
    DiedOut,
    OutOfEvents,
}

// =#========================================================================#=
// SIMULATOR
// =#========================================================================#=
/// One simulation run: configuration, random source and per-run character rates.
pub(crate) struct Simulator<'a, R: Rng> {
    config: &'a SimulationConfig,
    rng: &'a mut R,
    /// Waiting time distribution of a single lineage, Exp(birth + death)
    clock: Exp<f64>,
    /// Probability that an event is a speciation
    birth_prob: f64,
    /// Per-character rate multipliers
    multipliers: Vec<f64>,
    /// Next unused state per character
    next_state: Vec<u32>,
    lineages: Vec<Lineage>,
    alive: Vec<LineageIndex>,
    /// Wall-clock budget for the whole run
    budget: Option<Duration>,
    started: Instant,
}

impl<'a, R: Rng> Simulator<'a, R> {
    /// Prepares a run; the configuration must already be validated.
    pub(crate) fn new(config: &'a SimulationConfig, rng: &'a mut R) -> Result<Self, ConfigError> {
        let total_rate = config.birth + config.death;
        let clock = Exp::new(total_rate).map_err(|_| ConfigError::InvalidBirthRate(config.birth))?;
        let rate_dist = Gamma::new(config.rate_shape, config.rate_scale).map_err(|_| {
            ConfigError::InvalidRateDistribution {
                shape: config.rate_shape,
                scale: config.rate_scale,
            }
        })?;
        let budget = config.timeout_secs.map(timeout_duration).transpose()?;
        let multipliers = (0..config.num_chars)
            .map(|_| rate_dist.sample(&mut *rng))
            .collect();

        Ok(Simulator {
            config,
            rng,
            clock,
            birth_prob: config.birth / total_rate,
            multipliers,
            next_state: Vec::new(),
            lineages: Vec::new(),
            alive: Vec::new(),
            budget,
            started: Instant::now(),
        })
    }

    /// Runs attempts until one survives, returning the assembled tree.
    ///
    /// # Errors
    /// [SimulationError::DiedOut] when all attempts fail,
    /// [SimulationError::Timeout] when the wall-clock budget is exhausted.
    pub(crate) fn run(mut self) -> Result<PhyloTree<u32>, SimulationError> {
        for attempt in 1..=self.config.max_attempts {
            debug!(attempt, "Starting birth-death attempt");
            match self.attempt()? {
                Outcome::Stopped => {
                    let tree = self.assemble();
                    info!(
                        attempt,
                        leaves = tree.num_leaves(),
                        height = tree.height(),
                        "Simulated tree"
                    );
                    return Ok(tree);
                }
                Outcome::DiedOut => debug!(attempt, "All lineages went extinct"),
                Outcome::OutOfEvents => {
                    debug!(attempt, max_events = self.config.max_events, "Event budget exhausted")
                }
            }
        }

        warn!(
            attempts = self.config.max_attempts,
            "Giving up, tree died out in every attempt"
        );
        Err(SimulationError::DiedOut {
            attempts: self.config.max_attempts,
        })
    }

    /// Runs the process once from a fresh root.
    fn attempt(&mut self) -> Result<Outcome, SimulationError> {
        let num_chars = self.config.num_chars;
        self.next_state = vec![1; num_chars];
        self.lineages.clear();
        self.alive.clear();

        // Root splits at time 0 into two lineages
        self.lineages.push(Lineage {
            start: 0.0,
            end: 0.0,
            chars: vec![0; num_chars],
            fate: Fate::Speciated(1, 2),
        });
        for _ in 0..2 {
            self.spawn(0, 0.0);
        }

        let mut time = 0.0;
        let mut events = 0;
        loop {
            if self.config.min_leaves.is_some_and(|n| self.alive.len() >= n) {
                break;
            }
            if events == self.config.max_events {
                return Ok(Outcome::OutOfEvents);
            }
            self.check_timeout()?;

            let wait = self.clock.sample(&mut *self.rng) / self.alive.len() as f64;
            if let Some(max_time) = self.config.max_time.filter(|&t| time + wait > t) {
                time = max_time;
                break;
            }
            time += wait;
            events += 1;

            let pick = self.rng.random_range(0..self.alive.len());
            let lineage = self.alive.swap_remove(pick);
            self.close(lineage, time);

            if self.rng.random_bool(self.birth_prob) {
                let left = self.spawn(lineage, time);
                let right = self.spawn(lineage, time);
                self.lineages[lineage].fate = Fate::Speciated(left, right);
            } else {
                self.lineages[lineage].fate = Fate::Extinct;
                if self.alive.is_empty() {
                    return Ok(Outcome::DiedOut);
                }
            }
        }

        for lineage in std::mem::take(&mut self.alive) {
            self.close(lineage, time);
            self.lineages[lineage].fate = Fate::Survived;
        }
        Ok(Outcome::Stopped)
    }

    /// Starts a living lineage inheriting the characters of `parent`.
    fn spawn(&mut self, parent: LineageIndex, time: f64) -> LineageIndex {
        let index = self.lineages.len();
        self.lineages.push(Lineage {
            start: time,
            end: time,
            chars: self.lineages[parent].chars.clone(),
            fate: Fate::Alive,
        });
        self.alive.push(index);
        index
    }

    /// Ends the branch of a lineage at `time`, evolving its characters along it.
    fn close(&mut self, index: LineageIndex, time: f64) {
        let rate = self.config.mutation_rate;
        let lineage = &mut self.lineages[index];
        lineage.end = time;
        let length = lineage.end - lineage.start;

        for (position, state) in lineage.chars.iter_mut().enumerate() {
            let change_prob = 1.0 - (-rate * self.multipliers[position] * length).exp();
            if self.rng.random::<f64>() < change_prob {
                *state = self.next_state[position];
                self.next_state[position] += 1;
            }
        }
    }

    fn check_timeout(&self) -> Result<(), SimulationError> {
        if let Some(budget) = self.budget {
            let elapsed = self.started.elapsed();
            if elapsed > budget {
                return Err(SimulationError::Timeout { elapsed });
            }
        }
        Ok(())
    }

    /// Builds the arena tree from the lineages of the last attempt.
    ///
    /// Children always come after their parent lineage, so a reverse pass
    /// sees every subtree before its parent. With pruning, lineages left with
    /// a single surviving child are collapsed into it.
    fn assemble(&mut self) -> PhyloTree<u32> {
        let prune = self.config.prune_extinct;
        let num_leaves = self
            .lineages
            .iter()
            .filter(|l| l.fate == Fate::Survived || (!prune && l.fate == Fate::Extinct))
            .count();

        let mut tree = PhyloTree::new(num_leaves);
        let mut built: Vec<Option<VertexIndex>> = vec![None; self.lineages.len()];

        for index in (0..self.lineages.len()).rev() {
            let lineage = &self.lineages[index];
            let length = BranchLength::new(lineage.end - lineage.start);

            built[index] = match lineage.fate {
                Fate::Survived => Some(tree.add_leaf(
                    Some(length),
                    Taxon::with_chars(String::new(), lineage.chars.clone()),
                )),
                Fate::Extinct if !prune => Some(tree.add_leaf(
                    Some(length),
                    Taxon::with_chars(String::new(), lineage.chars.clone()).into_extinct(),
                )),
                Fate::Extinct | Fate::Alive => None,
                Fate::Speciated(left, right) => match (built[left], built[right]) {
                    (Some(l), Some(r)) if index == 0 => Some(tree.add_root((l, r))),
                    (Some(l), Some(r)) => Some(tree.add_internal_vertex((l, r), Some(length))),
                    (Some(only), None) | (None, Some(only)) => {
                        if index == 0 {
                            tree.set_root(only);
                        } else {
                            let below = tree[only].branch_length().map_or(0.0, |b| *b);
                            tree[only].set_branch_length(Some(BranchLength::new(below + *length)));
                        }
                        Some(only)
                    }
                    (None, None) => None,
                },
            };
        }

        let leaves: Vec<VertexIndex> = tree.leaves().map(|v| v.index()).collect();
        let labels = generate_labels(self.config.labels, leaves.len(), &mut *self.rng);
        for (index, label) in leaves.into_iter().zip(labels) {
            if let Some(taxon) = tree.taxon_mut(index) {
                taxon.set_name(label);
            }
        }

        tree
    }
}
