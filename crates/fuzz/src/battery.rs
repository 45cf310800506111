//! Weighted error batteries

use crate::error_model::ErrorModel;
use checkdigit_params::scoring::weights;
use serde::{Deserialize, Serialize};

/// One error model with its real-world incidence
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Battery {
    /// Display name
    pub name: String,
    /// Share of this error class among observed errors, in `[0, 1]`
    pub weight: f64,
    /// Generator
    pub model: ErrorModel,
}

impl Battery {
    /// Create a battery
    pub fn new(name: impl Into<String>, weight: f64, model: ErrorModel) -> Self {
        Self {
            name: name.into(),
            weight,
            model,
        }
    }
}

/// The calibrated battery catalog
///
/// Weights need not sum to 1; classes with weight 0 are still scored and
/// reported.
pub fn standard_batteries() -> Vec<Battery> {
    use ErrorModel::*;
    vec![
        Battery::new("1 substitution", weights::SUBSTITUTION_1, Substitution { count: 1 }),
        Battery::new("2 substitutions", weights::SUBSTITUTION_2, Substitution { count: 2 }),
        Battery::new("3 substitutions", weights::SUBSTITUTION_3, Substitution { count: 3 }),
        Battery::new("4 substitutions", weights::SUBSTITUTION_4, Substitution { count: 4 }),
        Battery::new("5 substitutions", weights::SUBSTITUTION_5, Substitution { count: 5 }),
        Battery::new("6 substitutions", weights::SUBSTITUTION_6, Substitution { count: 6 }),
        Battery::new("0-jump transposition", weights::TRANSPOSITION_0, Transposition { distance: 0 }),
        Battery::new("1-jump transposition", weights::TRANSPOSITION_1, Transposition { distance: 1 }),
        Battery::new("2-jump transposition", weights::TRANSPOSITION_2, Transposition { distance: 2 }),
        Battery::new("18-jump transposition", weights::TRANSPOSITION_18, Transposition { distance: 18 }),
        Battery::new("0-jump twin error", weights::TWIN_0, TwinError { distance: 0 }),
        Battery::new("1-jump twin error", weights::TWIN_1, TwinError { distance: 1 }),
        Battery::new("2-jump twin error", weights::TWIN_2, TwinError { distance: 2 }),
        Battery::new("18-jump twin error", weights::TWIN_18, TwinError { distance: 18 }),
        Battery::new(
            "2 0-jump substitutions",
            weights::JUMP_SUBSTITUTION_2_0,
            JumpSubstitution { count: 2, distance: 0 },
        ),
        Battery::new(
            "2 1-jump substitutions",
            weights::JUMP_SUBSTITUTION_2_1,
            JumpSubstitution { count: 2, distance: 1 },
        ),
        Battery::new("phonetic error", weights::PHONETIC, Phonetic),
        Battery::new("deletion", weights::DELETION, Deletion),
        Battery::new("insertion", weights::INSERTION, Insertion),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_shape() {
        let batteries = standard_batteries();
        assert_eq!(batteries.len(), 19);
        assert_eq!(batteries[0].weight, 0.7905);
        assert_eq!(batteries[0].model, ErrorModel::Substitution { count: 1 });
        assert!(batteries.iter().all(|b| (0.0..=1.0).contains(&b.weight)));
        let names: std::collections::HashSet<_> = batteries.iter().map(|b| &b.name).collect();
        assert_eq!(names.len(), batteries.len());
    }
}
