//! Search for the best-scoring primitive element of a scheme
//!
//! Every primitive element of a field gives a valid scheme, but they do not
//! detect non-substitution errors equally well. The search scores each
//! candidate and keeps the first one with the highest detection rate.

use crate::error::ScoringResult;
use crate::scorer::FuzzScorer;
use crate::subject::Subject;
use checkdigit_algorithms::field::{primitive_elements, primitive_polynomials, FieldSpec};
use checkdigit_algorithms::{FieldScheme, Result, SchemeConfig};
use serde::Serialize;
use tracing::info;

/// Detection rate obtained by one candidate
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Candidate {
    /// Field of the candidate scheme
    pub field: FieldSpec,
    /// Weighted detection rate
    pub detection_rate: f64,
}

/// Result of a parameter search
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SearchOutcome {
    /// Label of the scheme that was varied
    pub label: String,
    /// Best candidate
    pub best: Candidate,
    /// Every candidate, in search order
    pub candidates: Vec<Candidate>,
}

/// Every primitive alternative to the field of `config`
///
/// Binary fields vary the polynomial among all primitive polynomials of the
/// same degree; prime fields vary the generator.
pub fn candidate_fields(config: &SchemeConfig) -> Result<Vec<FieldSpec>> {
    Ok(match config.field {
        FieldSpec::Binary { .. } => {
            let k = config.field.cardinality()?.trailing_zeros();
            primitive_polynomials(k)?
                .into_iter()
                .map(|polynomial| FieldSpec::Binary { polynomial })
                .collect()
        }
        FieldSpec::Prime { modulus, .. } => primitive_elements(modulus)?
            .into_iter()
            .map(|generator| FieldSpec::Prime { modulus, generator })
            .collect(),
    })
}

/// Score `config` with each field in `fields` and return the best one
///
/// Ties keep the earliest candidate. Returns `None` for an empty candidate
/// list.
pub fn search(
    scorer: &FuzzScorer,
    config: &SchemeConfig,
    fields: impl IntoIterator<Item = FieldSpec>,
) -> ScoringResult<Option<SearchOutcome>> {
    let mut candidates = Vec::new();
    let mut best: Option<Candidate> = None;
    for field in fields {
        let scheme = FieldScheme::new(SchemeConfig {
            field,
            ..config.clone()
        })?;
        let report = scorer.score(&Subject::new(&scheme, &config.alphabet))?;
        let candidate = Candidate {
            field,
            detection_rate: report.human_error_detection_rate,
        };
        info!(
            label = %config.label,
            field = ?field,
            detection_rate = candidate.detection_rate,
            "candidate scored"
        );
        if best
            .as_ref()
            .map_or(true, |b| candidate.detection_rate > b.detection_rate)
        {
            best = Some(candidate.clone());
        }
        candidates.push(candidate);
    }
    Ok(best.map(|best| SearchOutcome {
        label: config.label.clone(),
        best,
        candidates,
    }))
}

/// Search every primitive alternative of `config`
pub fn search_primitives(
    scorer: &FuzzScorer,
    config: &SchemeConfig,
) -> ScoringResult<Option<SearchOutcome>> {
    let fields = candidate_fields(config)?;
    search(scorer, config, fields)
}
