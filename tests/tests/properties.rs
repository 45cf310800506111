//! Property tests over random payloads

use checkdigit_algorithms::alphabet;
use checkdigit_algorithms::{catalog, Checker, CheckerExt, FieldScheme};
use checkdigit_fuzz::report::human_error_detection_rate;
use checkdigit_fuzz::{Battery, BatteryStats, Collision, ErrorKind, ErrorModel};
use checkdigit_tests::all_checkers;
use proptest::prelude::*;

fn base32_payload() -> impl Strategy<Value = String> {
    "[A-Z2-7]{0,40}"
}

fn collisions(count: usize) -> Vec<Collision> {
    (0..count)
        .map(|i| Collision {
            original: format!("P{i}"),
            tweaked: format!("Q{i}"),
            kind: ErrorKind::Substitution,
            params: vec![],
        })
        .collect()
}

proptest! {
    #[test]
    fn every_scheme_accepts_its_own_check(payload in base32_payload()) {
        for checker in all_checkers() {
            // the fold scheme has no check for some nonzero payloads of length 31
            let Ok(full) = checker.append_check(&payload) else {
                prop_assert_eq!(checker.name(), "base32check-fold");
                prop_assert_eq!(payload.len(), 31);
                continue;
            };
            prop_assert!(checker.validate(&full).unwrap(), "{} {}", checker.name(), full);
        }
    }

    #[test]
    fn compute_is_deterministic(payload in base32_payload(), index in 0usize..8) {
        let entry = &catalog::entries()[index];
        let a = entry.build().unwrap().compute(&payload);
        let b = entry.build().unwrap().compute(&payload);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn leading_zero_symbols_are_ignored(payload in base32_payload(), zeros in 1usize..5) {
        let padded = format!("{}{payload}", "A".repeat(zeros));
        for scheme in [FieldScheme::base32check1().unwrap(), FieldScheme::base32check2().unwrap()] {
            prop_assert_eq!(scheme.compute(&padded).unwrap(), scheme.compute(&payload).unwrap());
        }
    }

    #[test]
    fn single_substitutions_change_the_check(
        payload in "[A-Z2-7]{1,30}",
        position in any::<prop::sample::Index>(),
        replacement in any::<prop::sample::Index>(),
    ) {
        let b32 = alphabet::base32();
        let mut chars: Vec<char> = payload.chars().collect();
        let i = position.index(chars.len());
        let candidate = b32.characters()[replacement.index(b32.size())];
        prop_assume!(candidate != chars[i]);
        chars[i] = candidate;
        let tweaked: String = chars.into_iter().collect();
        for scheme in [FieldScheme::base32check1().unwrap(), FieldScheme::base32check2().unwrap()] {
            prop_assert_ne!(scheme.compute(&tweaked).unwrap(), scheme.compute(&payload).unwrap());
        }
    }

    #[test]
    fn codec_round_trips(payload in "[0-9A-Za-z]{0,40}") {
        for b in [alphabet::base58(), alphabet::base64()] {
            if let Ok(indices) = b.indices(&payload) {
                prop_assert_eq!(b.encode(indices).unwrap(), payload.clone());
            }
        }
        let b64 = alphabet::base64();
        let indices = b64.indices(&payload).unwrap();
        prop_assert!(indices.iter().all(|&i| i < b64.size()));
    }

    #[test]
    fn more_collisions_never_raise_the_score(
        base in 0usize..50,
        extra in 1usize..50,
        weight in 0.001f64..1.0,
    ) {
        let battery = Battery::new("b", weight, ErrorModel::Deletion);
        let fewer = [BatteryStats::new(battery.clone(), collisions(base), 100, 0)];
        let more = [BatteryStats::new(battery, collisions(base + extra), 100, 0)];
        prop_assert!(human_error_detection_rate(&more) < human_error_detection_rate(&fewer));
    }
}
