//! Synthetic transcription errors
//!
//! Each [`ErrorModel`] turns a payload into a `(original, tweaked)` pair
//! that differs the way a human copying the payload might get it wrong.
//! Some models rewrite the original too, so that the error is always
//! observable (a transposition of two equal symbols is no error at all).

use checkdigit_algorithms::Alphabet;
use rand::seq::index;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Class of a transcription error
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Independent substitutions
    Substitution,
    /// Substitutions at regularly spaced positions
    JumpSubstitution,
    /// Two symbols swapped
    Transposition,
    /// A doubled symbol replaced by another doubled symbol
    TwinError,
    /// `1d` heard as `d0` (thirteen / thirty)
    Phonetic,
    /// A symbol dropped
    Deletion,
    /// A symbol added
    Insertion,
}

/// Detail recorded with a tweak
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TweakParam {
    /// Character position
    Position(usize),
    /// A character involved in the error
    Char(char),
    /// One substituted symbol
    Substitution {
        /// Symbol in the original
        from: char,
        /// Symbol in the tweaked copy
        to: char,
    },
}

impl fmt::Display for TweakParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TweakParam::Position(p) => write!(f, "{p}"),
            TweakParam::Char(c) => write!(f, "{c}"),
            TweakParam::Substitution { from, to } => write!(f, "{from}>{to}"),
        }
    }
}

/// An original payload and its erroneous copy
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tweak {
    /// Payload as intended
    pub original: String,
    /// Payload as transcribed
    pub tweaked: String,
    /// Error class
    pub kind: ErrorKind,
    /// Details of the error
    pub params: Vec<TweakParam>,
}

/// Error generators with their parameters
///
/// `distance` always counts the symbols strictly between the two affected
/// positions: distance 0 means adjacent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ErrorModel {
    /// `count` substitutions at distinct positions
    Substitution {
        /// Number of substituted symbols
        count: usize,
    },
    /// `count` substitutions at `anchor + j·(distance+1)`
    JumpSubstitution {
        /// Number of substituted symbols
        count: usize,
        /// Gap between substituted symbols
        distance: usize,
    },
    /// Swap of two symbols
    Transposition {
        /// Gap between the swapped symbols
        distance: usize,
    },
    /// `a…a` transcribed as `b…b`
    TwinError {
        /// Gap between the twins
        distance: usize,
    },
    /// `1d` transcribed as `d0`
    Phonetic,
    /// One symbol dropped
    Deletion,
    /// One symbol inserted
    Insertion,
}

impl ErrorModel {
    /// Error class produced by this model
    pub fn kind(&self) -> ErrorKind {
        match self {
            ErrorModel::Substitution { .. } => ErrorKind::Substitution,
            ErrorModel::JumpSubstitution { .. } => ErrorKind::JumpSubstitution,
            ErrorModel::Transposition { .. } => ErrorKind::Transposition,
            ErrorModel::TwinError { .. } => ErrorKind::TwinError,
            ErrorModel::Phonetic => ErrorKind::Phonetic,
            ErrorModel::Deletion => ErrorKind::Deletion,
            ErrorModel::Insertion => ErrorKind::Insertion,
        }
    }

    /// Short tag, e.g. `2sub`, `0-trans`, `1-2sub`
    pub fn tag(&self) -> String {
        match self {
            ErrorModel::Substitution { count } => format!("{count}sub"),
            ErrorModel::JumpSubstitution { count, distance } => format!("{distance}-{count}sub"),
            ErrorModel::Transposition { distance } => format!("{distance}-trans"),
            ErrorModel::TwinError { distance } => format!("{distance}-twin"),
            ErrorModel::Phonetic => "phonetic".into(),
            ErrorModel::Deletion => "del".into(),
            ErrorModel::Insertion => "ins".into(),
        }
    }

    /// Apply the model once
    ///
    /// Returns `None` when the payload or the alphabet cannot host this
    /// error (payload too short, single-symbol alphabet, missing digits).
    pub fn generate<R: Rng + ?Sized>(
        &self,
        payload: &str,
        alphabet: &Alphabet,
        rng: &mut R,
    ) -> Option<Tweak> {
        let chars: Vec<char> = payload.chars().collect();
        match *self {
            ErrorModel::Substitution { count } => substitution(&chars, count, alphabet, rng),
            ErrorModel::JumpSubstitution { count, distance } => {
                jump_substitution(&chars, count, distance, alphabet, rng)
            }
            ErrorModel::Transposition { distance } => {
                transposition(&chars, distance, alphabet, rng)
            }
            ErrorModel::TwinError { distance } => twin_error(&chars, distance, alphabet, rng),
            ErrorModel::Phonetic => phonetic(&chars, alphabet, rng),
            ErrorModel::Deletion => deletion(&chars, rng),
            ErrorModel::Insertion => insertion(&chars, alphabet, rng),
        }
    }

    /// Apply the model, retrying degenerate outcomes up to `max_retries` times
    ///
    /// An outcome is degenerate when no tweak is produced or the tweaked copy
    /// equals the original.
    pub fn generate_with_retries<R: Rng + ?Sized>(
        &self,
        payload: &str,
        alphabet: &Alphabet,
        rng: &mut R,
        max_retries: usize,
    ) -> Option<Tweak> {
        retry(max_retries, || {
            self.generate(payload, alphabet, rng)
                .filter(|t| t.original != t.tweaked)
        })
    }
}

impl fmt::Display for ErrorModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag())
    }
}

/// Call `attempt` until it yields a value, at most `1 + max_retries` times
pub fn retry<T>(max_retries: usize, mut attempt: impl FnMut() -> Option<T>) -> Option<T> {
    (0..=max_retries).find_map(|_| attempt())
}

fn tweak(original: &[char], tweaked: &[char], kind: ErrorKind, params: Vec<TweakParam>) -> Tweak {
    Tweak {
        original: original.iter().collect(),
        tweaked: tweaked.iter().collect(),
        kind,
        params,
    }
}

fn substitute_at<R: Rng + ?Sized>(
    tweaked: &mut [char],
    positions: impl IntoIterator<Item = usize>,
    alphabet: &Alphabet,
    rng: &mut R,
) -> Option<Vec<TweakParam>> {
    let mut params = Vec::new();
    for p in positions {
        let from = tweaked[p];
        let to = alphabet.gen_other(from, rng)?;
        tweaked[p] = to;
        params.push(TweakParam::Substitution { from, to });
    }
    Some(params)
}

fn substitution<R: Rng + ?Sized>(
    chars: &[char],
    count: usize,
    alphabet: &Alphabet,
    rng: &mut R,
) -> Option<Tweak> {
    if count == 0 || count > chars.len() || alphabet.size() < 2 {
        return None;
    }
    let mut tweaked = chars.to_vec();
    let positions = index::sample(rng, chars.len(), count).into_vec();
    let params = substitute_at(&mut tweaked, positions, alphabet, rng)?;
    Some(tweak(chars, &tweaked, ErrorKind::Substitution, params))
}

fn jump_substitution<R: Rng + ?Sized>(
    chars: &[char],
    count: usize,
    distance: usize,
    alphabet: &Alphabet,
    rng: &mut R,
) -> Option<Tweak> {
    if count == 0 || alphabet.size() < 2 {
        return None;
    }
    let step = distance + 1;
    let span = step * (count - 1) + 1;
    if span > chars.len() {
        return None;
    }
    let anchor = rng.gen_range(0..=chars.len() - span);
    let mut tweaked = chars.to_vec();
    let params = substitute_at(
        &mut tweaked,
        (0..count).map(|j| anchor + j * step),
        alphabet,
        rng,
    )?;
    Some(tweak(chars, &tweaked, ErrorKind::JumpSubstitution, params))
}

fn transposition<R: Rng + ?Sized>(
    chars: &[char],
    distance: usize,
    alphabet: &Alphabet,
    rng: &mut R,
) -> Option<Tweak> {
    let n = chars.len();
    if n < distance + 2 || alphabet.size() < 2 {
        return None;
    }
    let i1 = rng.gen_range(0..n - distance - 1);
    let i2 = i1 + distance + 1;
    let mut original = chars.to_vec();
    let c1 = original[i1];
    if original[i2] == c1 {
        original[i2] = alphabet.gen_other(c1, rng)?;
    }
    let c2 = original[i2];
    let mut tweaked = original.clone();
    tweaked.swap(i1, i2);
    Some(tweak(
        &original,
        &tweaked,
        ErrorKind::Transposition,
        vec![TweakParam::Char(c1), TweakParam::Char(c2)],
    ))
}

fn twin_error<R: Rng + ?Sized>(
    chars: &[char],
    distance: usize,
    alphabet: &Alphabet,
    rng: &mut R,
) -> Option<Tweak> {
    let n = chars.len();
    if n < distance + 2 || alphabet.size() < 2 {
        return None;
    }
    let i1 = rng.gen_range(0..n - distance - 1);
    let i2 = i1 + distance + 1;
    let c1 = alphabet.gen(rng);
    let c2 = alphabet.gen_other(c1, rng)?;
    let mut original = chars.to_vec();
    original[i1] = c1;
    original[i2] = c1;
    let mut tweaked = original.clone();
    tweaked[i1] = c2;
    tweaked[i2] = c2;
    Some(tweak(
        &original,
        &tweaked,
        ErrorKind::TwinError,
        vec![TweakParam::Char(c1), TweakParam::Char(c2)],
    ))
}

fn phonetic<R: Rng + ?Sized>(chars: &[char], alphabet: &Alphabet, rng: &mut R) -> Option<Tweak> {
    let n = chars.len();
    if n < 2 || !alphabet.contains('0') || !alphabet.contains('1') {
        return None;
    }
    let digits: Vec<char> = ('1'..='9').filter(|&d| alphabet.contains(d)).collect();
    let d = digits[rng.gen_range(0..digits.len())];
    let i = rng.gen_range(0..n - 1);
    let mut original = chars.to_vec();
    original[i] = '1';
    original[i + 1] = d;
    let mut tweaked = original.clone();
    tweaked[i] = d;
    tweaked[i + 1] = '0';
    Some(tweak(
        &original,
        &tweaked,
        ErrorKind::Phonetic,
        vec![TweakParam::Char(d)],
    ))
}

fn deletion<R: Rng + ?Sized>(chars: &[char], rng: &mut R) -> Option<Tweak> {
    if chars.is_empty() {
        return None;
    }
    let i = rng.gen_range(0..chars.len());
    let mut tweaked = chars.to_vec();
    let removed = tweaked.remove(i);
    Some(tweak(
        chars,
        &tweaked,
        ErrorKind::Deletion,
        vec![TweakParam::Position(i), TweakParam::Char(removed)],
    ))
}

fn insertion<R: Rng + ?Sized>(chars: &[char], alphabet: &Alphabet, rng: &mut R) -> Option<Tweak> {
    let i = rng.gen_range(0..=chars.len());
    let c = alphabet.gen(rng);
    let mut tweaked = chars.to_vec();
    tweaked.insert(i, c);
    Some(tweak(
        chars,
        &tweaked,
        ErrorKind::Insertion,
        vec![TweakParam::Position(i), TweakParam::Char(c)],
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use checkdigit_algorithms::alphabet;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    const PAYLOAD: &str = "ABCDEFGHIJKLMNOPQRST";

    fn rng() -> ChaCha20Rng {
        ChaCha20Rng::seed_from_u64(99)
    }

    fn differing_positions(a: &str, b: &str) -> Vec<usize> {
        a.chars()
            .zip(b.chars())
            .enumerate()
            .filter(|(_, (x, y))| x != y)
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn substitution_changes_exactly_count_positions() {
        let mut rng = rng();
        for count in 1..=6 {
            for _ in 0..50 {
                let t = ErrorModel::Substitution { count }
                    .generate(PAYLOAD, alphabet::base32(), &mut rng)
                    .unwrap();
                assert_eq!(t.original, PAYLOAD);
                assert_eq!(differing_positions(&t.original, &t.tweaked).len(), count);
                assert_eq!(t.params.len(), count);
            }
        }
    }

    #[test]
    fn substitution_needs_enough_symbols() {
        let mut rng = rng();
        let model = ErrorModel::Substitution { count: 3 };
        assert!(model.generate("AB", alphabet::base32(), &mut rng).is_none());
        let unary = Alphabet::new("A").unwrap();
        assert!(model.generate("AAAA", &unary, &mut rng).is_none());
    }

    #[test]
    fn jump_substitution_positions_are_spaced() {
        let mut rng = rng();
        for _ in 0..50 {
            let t = ErrorModel::JumpSubstitution {
                count: 2,
                distance: 1,
            }
            .generate(PAYLOAD, alphabet::base32(), &mut rng)
            .unwrap();
            let diff = differing_positions(&t.original, &t.tweaked);
            assert_eq!(diff.len(), 2);
            assert_eq!(diff[1] - diff[0], 2);
        }
        let model = ErrorModel::JumpSubstitution {
            count: 2,
            distance: 19,
        };
        assert!(model.generate(PAYLOAD, alphabet::base32(), &mut rng).is_none());
        assert!(model
            .generate(&"A".repeat(20), alphabet::base32(), &mut rng)
            .is_none());
        assert!(model
            .generate(&"A".repeat(21), alphabet::base32(), &mut rng)
            .is_some());
    }

    #[test]
    fn transposition_swaps_distinct_symbols() {
        let mut rng = rng();
        for distance in [0, 1, 2, 18] {
            for _ in 0..50 {
                let t = ErrorModel::Transposition { distance }
                    .generate("AAAAAAAAAAAAAAAAAAAA", alphabet::base32(), &mut rng)
                    .unwrap();
                let diff = differing_positions(&t.original, &t.tweaked);
                assert_eq!(diff.len(), 2);
                assert_eq!(diff[1] - diff[0], distance + 1);
                let o: Vec<char> = t.original.chars().collect();
                let w: Vec<char> = t.tweaked.chars().collect();
                assert_eq!(o[diff[0]], w[diff[1]]);
                assert_eq!(o[diff[1]], w[diff[0]]);
            }
        }
        assert!(ErrorModel::Transposition { distance: 18 }
            .generate("ABCDEFGHIJKLMNOPQRS", alphabet::base32(), &mut rng)
            .is_none());
    }

    #[test]
    fn twin_error_replaces_both_twins() {
        let mut rng = rng();
        for _ in 0..50 {
            let t = ErrorModel::TwinError { distance: 0 }
                .generate(PAYLOAD, alphabet::base32(), &mut rng)
                .unwrap();
            let diff = differing_positions(&t.original, &t.tweaked);
            assert_eq!(diff.len(), 2);
            let o: Vec<char> = t.original.chars().collect();
            let w: Vec<char> = t.tweaked.chars().collect();
            assert_eq!(o[diff[0]], o[diff[1]]);
            assert_eq!(w[diff[0]], w[diff[1]]);
        }
    }

    #[test]
    fn phonetic_needs_zero_and_one() {
        let mut rng = rng();
        assert!(ErrorModel::Phonetic
            .generate(PAYLOAD, alphabet::base32(), &mut rng)
            .is_none());
        for _ in 0..50 {
            let t = ErrorModel::Phonetic
                .generate("31415926535897932384", alphabet::base10(), &mut rng)
                .unwrap();
            let TweakParam::Char(d) = t.params[0] else {
                panic!("phonetic tweak records its digit")
            };
            let diff = differing_positions(&t.original, &t.tweaked);
            if d == '1' {
                // "11" heard as "10"
                assert_eq!(diff.len(), 1);
                continue;
            }
            assert_eq!(diff.len(), 2);
            let i = diff[0];
            let o: Vec<char> = t.original.chars().collect();
            let w: Vec<char> = t.tweaked.chars().collect();
            assert_eq!(o[i], '1');
            assert_eq!(w[i + 1], '0');
            assert_eq!(o[i + 1], w[i]);
            assert_ne!(w[i], '0');
        }
    }

    #[test]
    fn deletion_and_insertion_change_length() {
        let mut rng = rng();
        let mut positions = std::collections::HashSet::new();
        for _ in 0..500 {
            let t = ErrorModel::Deletion
                .generate(PAYLOAD, alphabet::base32(), &mut rng)
                .unwrap();
            assert_eq!(t.tweaked.len(), PAYLOAD.len() - 1);
            if let TweakParam::Position(p) = t.params[0] {
                positions.insert(p);
            }
            let t = ErrorModel::Insertion
                .generate(PAYLOAD, alphabet::base32(), &mut rng)
                .unwrap();
            assert_eq!(t.tweaked.len(), PAYLOAD.len() + 1);
        }
        // The last symbol can be deleted too
        assert!(positions.contains(&19));
        assert!(ErrorModel::Deletion
            .generate("", alphabet::base32(), &mut rng)
            .is_none());
    }

    #[test]
    fn retry_is_bounded() {
        let mut calls = 0;
        let out: Option<()> = retry(3, || {
            calls += 1;
            None
        });
        assert!(out.is_none());
        assert_eq!(calls, 4);

        let mut calls = 0;
        let out = retry(3, || {
            calls += 1;
            (calls == 2).then_some(calls)
        });
        assert_eq!(out, Some(2));
    }

    #[test]
    fn tags() {
        assert_eq!(ErrorModel::Substitution { count: 2 }.tag(), "2sub");
        assert_eq!(
            ErrorModel::JumpSubstitution {
                count: 2,
                distance: 1
            }
            .to_string(),
            "1-2sub"
        );
        assert_eq!(ErrorModel::TwinError { distance: 18 }.tag(), "18-twin");
        assert_eq!(ErrorModel::Deletion.kind(), ErrorKind::Deletion);
    }

    proptest::proptest! {
        #[test]
        fn tweaks_keep_the_expected_length(seed in 0u64..1000, payload in "[A-Z2-7]{20,40}") {
            let mut rng = ChaCha20Rng::seed_from_u64(seed);
            let n = payload.chars().count();
            for battery in crate::battery::standard_batteries() {
                let Some(t) = battery.model.generate(&payload, alphabet::base32(), &mut rng) else {
                    continue;
                };
                let expected = match battery.model {
                    ErrorModel::Deletion => n - 1,
                    ErrorModel::Insertion => n + 1,
                    _ => n,
                };
                proptest::prop_assert_eq!(t.original.chars().count(), n);
                proptest::prop_assert_eq!(t.tweaked.chars().count(), expected);
                proptest::prop_assert_eq!(t.kind, battery.model.kind());
            }
        }
    }
}
