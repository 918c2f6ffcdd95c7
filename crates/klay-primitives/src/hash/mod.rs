//! Hash function primitives for the Klay SDK.
//!
//! The ledger derives addresses, signing digests, and transaction hashes
//! with Keccak-256 (the original Keccak submission, not FIPS-202 SHA3-256).

use sha3::{Digest, Keccak256};

/// Compute the Keccak-256 hash of the input data.
///
/// # Arguments
/// * `data` - Byte slice to hash.
///
/// # Returns
/// A 32-byte Keccak-256 digest.
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    hasher.finalize().into()
}
