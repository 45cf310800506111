//! Parallel battery runner
//!
//! Batteries run one after another. Inside a battery, payloads are scored in
//! parallel on a rayon pool; every payload draws from its own ChaCha20
//! stream keyed by `(seed, battery index, payload index)`, so a run is fully
//! determined by its configuration whatever the thread count.

use crate::battery::{standard_batteries, Battery};
use crate::collision::Collision;
use crate::config::ScoringConfig;
use crate::error::ScoringResult;
use crate::report::{BatteryStats, ScoreReport};
use crate::subject::Subject;
use checkdigit_api::Error;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use rayon::prelude::*;
use rayon::ThreadPool;
use std::collections::HashSet;
use tracing::{debug, info, trace};

/// Collisions and skips gathered by one worker
#[derive(Default)]
struct Partial {
    collisions: HashSet<Collision>,
    skipped: usize,
}

impl Partial {
    fn merge(mut self, other: Partial) -> Partial {
        // Keep the larger set and drain the smaller one into it.
        let (mut big, small) = if self.collisions.len() >= other.collisions.len() {
            (std::mem::take(&mut self.collisions), other.collisions)
        } else {
            (other.collisions, std::mem::take(&mut self.collisions))
        };
        big.extend(small);
        Partial {
            collisions: big,
            skipped: self.skipped + other.skipped,
        }
    }
}

/// Runs error batteries against check-digit schemes
pub struct FuzzScorer {
    config: ScoringConfig,
    batteries: Vec<Battery>,
    pool: ThreadPool,
}

impl FuzzScorer {
    /// Scorer with the calibrated battery catalog
    pub fn new(config: ScoringConfig) -> ScoringResult<Self> {
        Self::with_batteries(config, standard_batteries())
    }

    /// Scorer with a custom battery list
    pub fn with_batteries(config: ScoringConfig, batteries: Vec<Battery>) -> ScoringResult<Self> {
        config.validate()?;
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.threads.unwrap_or(0))
            .build()?;
        debug!(
            threads = pool.current_num_threads(),
            batteries = batteries.len(),
            "scorer ready"
        );
        Ok(Self {
            config,
            batteries,
            pool,
        })
    }

    /// Active configuration
    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Batteries in run order
    pub fn batteries(&self) -> &[Battery] {
        &self.batteries
    }

    /// Run every battery against `subject`
    pub fn score(&self, subject: &Subject<'_>) -> ScoringResult<ScoreReport> {
        let stats = self
            .batteries
            .iter()
            .enumerate()
            .map(|(index, battery)| self.run_battery(index, battery, subject))
            .collect::<ScoringResult<Vec<_>>>()?;
        let report = ScoreReport::new(
            subject.label(),
            subject.checker.check_len(),
            subject.bits_per_char,
            stats,
        );
        info!(
            scheme = %report.label,
            detection_rate = report.human_error_detection_rate,
            "scheme scored"
        );
        Ok(report)
    }

    /// Run the battery at position `index` against `subject`
    pub fn run_battery(
        &self,
        index: usize,
        battery: &Battery,
        subject: &Subject<'_>,
    ) -> ScoringResult<BatteryStats> {
        let payloads = self.config.battery_size;
        let partial = self.pool.install(|| {
            (0..payloads)
                .into_par_iter()
                .map(|payload_index| self.run_payload(index, payload_index, battery, subject))
                .try_reduce(Partial::default, |a, b| Ok(a.merge(b)))
        })?;

        let mut collisions: Vec<Collision> = partial.collisions.into_iter().collect();
        collisions.sort_unstable();
        let stats = BatteryStats::new(
            battery.clone(),
            collisions,
            self.config.trial_count(),
            partial.skipped,
        );
        info!(
            scheme = subject.label(),
            battery = %battery.name,
            collisions = stats.collisions.len(),
            skipped = stats.skipped,
            error_rate = stats.error_rate,
            "battery finished"
        );
        Ok(stats)
    }

    fn rng_for(&self, battery_index: usize, payload_index: usize) -> ChaCha20Rng {
        let mut rng = ChaCha20Rng::seed_from_u64(self.config.seed);
        rng.set_stream(((battery_index as u64) << 32) | payload_index as u64);
        rng
    }

    fn run_payload(
        &self,
        battery_index: usize,
        payload_index: usize,
        battery: &Battery,
        subject: &Subject<'_>,
    ) -> ScoringResult<Partial> {
        let mut rng = self.rng_for(battery_index, payload_index);
        let payload = subject
            .payload_alphabet
            .gen_payload(self.config.payload_length, &mut rng);
        let mut partial = Partial::default();
        for _ in 0..self.config.attempts_per_payload {
            let Some(tweak) = battery.model.generate_with_retries(
                &payload,
                subject.payload_alphabet,
                &mut rng,
                self.config.max_retries,
            ) else {
                partial.skipped += 1;
                continue;
            };
            // A scheme with no check for the original cannot be judged on
            // this trial; one that refuses the tweaked copy has caught it.
            let original = match subject.checker.compute(&tweak.original) {
                Err(Error::Field(e)) => {
                    debug!(payload = %tweak.original, error = %e, "no check for original");
                    partial.skipped += 1;
                    continue;
                }
                result => result?,
            };
            let tweaked = match subject.checker.compute(&tweak.tweaked) {
                Err(Error::Field(e)) => {
                    trace!(payload = %tweak.tweaked, error = %e, "tweaked copy refused");
                    continue;
                }
                result => result?,
            };
            if original == tweaked {
                let collision = Collision::from(tweak);
                trace!(%collision, "undetected error");
                partial.collisions.insert(collision);
            }
        }
        Ok(partial)
    }
}

impl std::fmt::Debug for FuzzScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FuzzScorer")
            .field("config", &self.config)
            .field("batteries", &self.batteries.len())
            .field("threads", &self.pool.current_num_threads())
            .finish()
    }
}
