//! Elliptic curve cryptography for transaction signing.
//!
//! secp256k1 keys with recoverable ECDSA signatures, plus the signing
//! credential type that binds a private key to an account address.

pub mod private_key;
pub mod public_key;
pub mod credential;

pub use private_key::PrivateKey;
pub use public_key::PublicKey;
pub use credential::Credential;

/// A recoverable ECDSA signature over a 32-byte digest.
///
/// Carries the raw recovery id (0 or 1) alongside the R and S components;
/// the transaction layer folds the recovery id together with a chain id
/// into its wire-format discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecoverableSignature {
    /// The public-key recovery id (0 or 1 for low-S signatures).
    pub recovery_id: u8,
    /// The R component (32 bytes, big-endian).
    pub r: [u8; 32],
    /// The S component (32 bytes, big-endian).
    pub s: [u8; 32],
}
