//! Cryptographic primitives for the benchmark.
//!
//! Only SHA-256 is supported; both runners hash through [`sha256_hex`].

mod digest;

pub use digest::{sha256_hex, Digest, HEX_LEN};
