//! Scoring results

use crate::battery::Battery;
use crate::collision::Collision;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of one battery
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BatteryStats {
    /// The battery that was run
    pub battery: Battery,
    /// Distinct undetected errors, ordered by `(original, tweaked)`
    pub collisions: Vec<Collision>,
    /// `battery_size × attempts_per_payload`
    pub trial_count: usize,
    /// Trials for which no tweak could be produced
    pub skipped: usize,
    /// `collisions / trial_count`
    pub error_rate: f64,
}

impl BatteryStats {
    /// Assemble stats and derive the error rate
    pub fn new(battery: Battery, collisions: Vec<Collision>, trial_count: usize, skipped: usize) -> Self {
        let error_rate = if trial_count == 0 {
            0.0
        } else {
            collisions.len() as f64 / trial_count as f64
        };
        Self {
            battery,
            collisions,
            trial_count,
            skipped,
            error_rate,
        }
    }
}

impl fmt::Display for BatteryStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:\t{} collisions\t({:.3}% of {})",
            self.battery.name,
            self.collisions.len(),
            self.error_rate * 100.0,
            self.trial_count
        )?;
        if self.skipped > 0 {
            write!(f, "\t{} skipped", self.skipped)?;
        }
        Ok(())
    }
}

/// `1 - Σ error_rate · weight`
pub fn human_error_detection_rate(stats: &[BatteryStats]) -> f64 {
    1.0 - stats
        .iter()
        .map(|s| s.error_rate * s.battery.weight)
        .sum::<f64>()
}

/// Detected information per check bit: `-log2(1 - rate) / (check_len · bits_per_char)`
///
/// Infinite when every weighted error is detected.
pub fn detection_factor(rate: f64, check_len: usize, bits_per_char: f64) -> f64 {
    if rate >= 1.0 {
        return f64::INFINITY;
    }
    -(1.0 - rate).log2() / (check_len as f64 * bits_per_char)
}

/// Score of one scheme over a set of batteries
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    /// Scheme name
    pub label: String,
    /// Check characters appended by the scheme
    pub check_len: usize,
    /// Information per check character
    pub bits_per_char: f64,
    /// Per-battery outcome, in battery order
    pub batteries: Vec<BatteryStats>,
    /// Weighted share of detected errors
    pub human_error_detection_rate: f64,
    /// See [`detection_factor`]; `null` in JSON when infinite
    #[serde(with = "unbounded")]
    pub detection_factor: f64,
}

/// `f64` that maps the infinities to `null` and `null` back to `+inf`
mod unbounded {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_some(value)
        } else {
            serializer.serialize_none()
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::INFINITY))
    }
}

impl ScoreReport {
    /// Aggregate per-battery stats
    pub fn new(label: impl Into<String>, check_len: usize, bits_per_char: f64, batteries: Vec<BatteryStats>) -> Self {
        let rate = human_error_detection_rate(&batteries);
        Self {
            label: label.into(),
            check_len,
            bits_per_char,
            human_error_detection_rate: rate,
            detection_factor: detection_factor(rate, check_len, bits_per_char),
            batteries,
        }
    }

    /// Stats of the battery called `name`
    pub fn battery(&self, name: &str) -> Option<&BatteryStats> {
        self.batteries.iter().find(|s| s.battery.name == name)
    }
}

impl fmt::Display for ScoreReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== {} ==", self.label)?;
        for stats in &self.batteries {
            writeln!(f, "{stats}")?;
        }
        write!(
            f,
            "Score: {:.3}%\tDetection factor: {:.3}",
            self.human_error_detection_rate * 100.0,
            self.detection_factor
        )
    }
}
