//! Undetected transcription errors

use crate::error_model::{ErrorKind, Tweak, TweakParam};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// An erroneous copy that produced the same check as the original
///
/// Two collisions are the same when their `(original, tweaked)` pairs are;
/// kind and params are informative only.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Collision {
    /// Payload as intended
    pub original: String,
    /// Payload as transcribed
    pub tweaked: String,
    /// Error class
    pub kind: ErrorKind,
    /// Details of the error
    pub params: Vec<TweakParam>,
}

impl From<Tweak> for Collision {
    fn from(t: Tweak) -> Self {
        Self {
            original: t.original,
            tweaked: t.tweaked,
            kind: t.kind,
            params: t.params,
        }
    }
}

impl PartialEq for Collision {
    fn eq(&self, other: &Self) -> bool {
        self.original == other.original && self.tweaked == other.tweaked
    }
}

impl Eq for Collision {}

impl Hash for Collision {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.original.hash(state);
        self.tweaked.hash(state);
    }
}

impl PartialOrd for Collision {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Collision {
    fn cmp(&self, other: &Self) -> Ordering {
        (&self.original, &self.tweaked).cmp(&(&other.original, &other.tweaked))
    }
}

impl fmt::Display for Collision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.kind)?;
        for p in &self.params {
            write!(f, " {p}")?;
        }
        write!(f, ":\t{}\t{}", self.original, self.tweaked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn collision(original: &str, tweaked: &str, kind: ErrorKind) -> Collision {
        Collision {
            original: original.into(),
            tweaked: tweaked.into(),
            kind,
            params: vec![],
        }
    }

    #[test]
    fn identity_is_the_string_pair() {
        let mut set = HashSet::new();
        assert!(set.insert(collision("AB", "BA", ErrorKind::Transposition)));
        assert!(!set.insert(collision("AB", "BA", ErrorKind::Substitution)));
        assert!(set.insert(collision("AB", "BB", ErrorKind::Substitution)));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn display() {
        let c = Collision {
            original: "AB".into(),
            tweaked: "BA".into(),
            kind: ErrorKind::Transposition,
            params: vec![TweakParam::Char('A'), TweakParam::Char('B')],
        };
        assert_eq!(c.to_string(), "Transposition A B:\tAB\tBA");
    }
}
