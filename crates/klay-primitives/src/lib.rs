//! Klay SDK - Cryptographic and wire-format primitives.
//!
//! This crate provides the foundational building blocks for the Klay SDK:
//! - Keccak-256 hashing
//! - Recursive length prefix (RLP) encoding/decoding
//! - 20-byte account addresses
//! - Elliptic curve cryptography (secp256k1 keys, recoverable signatures,
//!   signing credentials)

pub mod hash;
pub mod rlp;
pub mod address;
pub mod ec;

mod error;
pub use error::PrimitivesError;
pub use address::Address;
