//! Short code candidate generation.
//!
//! Candidates are drawn uniformly from the unreserved URL path characters, so a
//! code never needs escaping when embedded in a short URL.

use rand::Rng;

/// Characters a short code may contain.
pub const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789-._~";

/// Length of every generated code.
pub const CODE_LENGTH: usize = 4;

/// Generates a random code of [`CODE_LENGTH`] characters from [`ALPHABET`].
///
/// The result is a candidate only; it says nothing about whether the code is
/// already assigned.
pub fn generate_code() -> String {
    generate_code_with(&mut rand::rng())
}

/// Generates a code using the provided random source.
pub fn generate_code_with<R: Rng>(rng: &mut R) -> String {
    (0..CODE_LENGTH)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Returns `true` if `code` could have been produced by [`generate_code`].
pub fn is_well_formed(code: &str) -> bool {
    code.len() == CODE_LENGTH && code.bytes().all(|b| ALPHABET.contains(&b))
}
