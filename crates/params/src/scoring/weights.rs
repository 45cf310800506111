//! Empirical incidence of transcription-error classes
//!
//! Each weight approximates the share of one error class among observed
//! real-world data-entry errors. The weights are independent contributions
//! and do not sum to exactly 1.

/// Single substitution (`a` → `b`)
pub const SUBSTITUTION_1: f64 = 0.7905;
/// Two substitutions anywhere
pub const SUBSTITUTION_2: f64 = 0.0081;
/// Three substitutions anywhere
pub const SUBSTITUTION_3: f64 = 0.014;
/// Four substitutions anywhere
pub const SUBSTITUTION_4: f64 = 0.0097;
/// Five substitutions anywhere
pub const SUBSTITUTION_5: f64 = 0.0181;
/// Six substitutions anywhere
pub const SUBSTITUTION_6: f64 = 0.0134;

/// Adjacent transposition (`ab` → `ba`)
pub const TRANSPOSITION_0: f64 = 0.1021;
/// Jump transposition (`acb` → `bca`)
pub const TRANSPOSITION_1: f64 = 0.0082;
/// Transposition across two characters
pub const TRANSPOSITION_2: f64 = 0.0;
/// Transposition across eighteen characters
pub const TRANSPOSITION_18: f64 = 0.0;

/// Adjacent twin error (`aa` → `bb`)
pub const TWIN_0: f64 = 0.0055;
/// Jump twin error (`aca` → `bcb`)
pub const TWIN_1: f64 = 0.0029;
/// Twin error across two characters
pub const TWIN_2: f64 = 0.0;
/// Twin error across eighteen characters
pub const TWIN_18: f64 = 0.0;

/// Two adjacent substitutions
pub const JUMP_SUBSTITUTION_2_0: f64 = 0.0192;
/// Two substitutions one character apart
pub const JUMP_SUBSTITUTION_2_1: f64 = 0.0036;

/// Phonetic error (`1d` → `d0`, e.g. "fourteen" heard as "forty")
pub const PHONETIC: f64 = 0.0049;

/// Character deletion
pub const DELETION: f64 = 0.0;
/// Character insertion
pub const INSERTION: f64 = 0.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_are_probabilities() {
        let all = [
            SUBSTITUTION_1,
            SUBSTITUTION_2,
            SUBSTITUTION_3,
            SUBSTITUTION_4,
            SUBSTITUTION_5,
            SUBSTITUTION_6,
            TRANSPOSITION_0,
            TRANSPOSITION_1,
            TRANSPOSITION_2,
            TRANSPOSITION_18,
            TWIN_0,
            TWIN_1,
            TWIN_2,
            TWIN_18,
            JUMP_SUBSTITUTION_2_0,
            JUMP_SUBSTITUTION_2_1,
            PHONETIC,
            DELETION,
            INSERTION,
        ];
        assert!(all.iter().all(|w| (0.0..=1.0).contains(w)));
        let total: f64 = all.iter().sum();
        assert!(total > 0.99 && total < 1.01);
    }
}
