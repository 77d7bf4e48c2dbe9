//! Single-threaded baseline runner.

use crate::crypto::sha256_hex;

/// Hashes every input in order on the calling thread.
///
/// The output has one digest per input, at the same position.
pub fn hash_sequential<S: AsRef<str>>(inputs: &[S]) -> Vec<String> {
    inputs.iter().map(|input| sha256_hex(input.as_ref())).collect()
}
