//! Shared fixtures for the checkdigit integration tests and benchmarks

use checkdigit_algorithms::{catalog, Alphabet, Checker};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Deterministic RNG for reproducible randomized tests
pub fn seeded_rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

/// Every catalog scheme, built
pub fn all_checkers() -> Vec<Box<dyn Checker>> {
    catalog::entries()
        .iter()
        .map(|entry| entry.build().expect("catalog entries build"))
        .collect()
}

/// `count` random payloads of `length` symbols
pub fn payloads(alphabet: &Alphabet, length: usize, count: usize, seed: u64) -> Vec<String> {
    let mut rng = seeded_rng(seed);
    (0..count)
        .map(|_| alphabet.gen_payload(length, &mut rng))
        .collect()
}
