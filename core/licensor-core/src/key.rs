//! License key generation.
//!
//! Generated keys are 32 symbols drawn uniformly from `A-Z0-9` using the
//! operating system's CSPRNG. Client-supplied keys are not required to follow
//! this format.

use rand::{rngs::OsRng, Rng};

/// Symbols a generated key is drawn from.
pub const KEY_ALPHABET: &[u8; 36] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Number of symbols in a generated key.
pub const KEY_LENGTH: usize = 32;

/// Generates a new random license key.
#[must_use]
pub fn generate_license_key() -> String {
    let mut rng = OsRng;
    (0..KEY_LENGTH)
        .map(|_| char::from(KEY_ALPHABET[rng.gen_range(0..KEY_ALPHABET.len())]))
        .collect()
}

/// Returns true if `key` has the shape of a generated key.
#[must_use]
pub fn is_generated_key(key: &str) -> bool {
    key.len() == KEY_LENGTH && key.bytes().all(|b| KEY_ALPHABET.contains(&b))
}
