//! secp256k1 public key with address derivation and recovery.
//!
//! Supports compressed/uncompressed SEC1 serialization, digest
//! verification, and public key recovery from recoverable signatures.

use k256::ecdsa::signature::hazmat::PrehashVerifier;
use k256::ecdsa::{self, RecoveryId, VerifyingKey};
use k256::elliptic_curve::sec1::ToEncodedPoint;

use crate::address::Address;
use crate::ec::RecoverableSignature;
use crate::PrimitivesError;

/// Length of a compressed public key in bytes (prefix + 32 byte x-coordinate).
const COMPRESSED_LEN: usize = 33;

/// Length of an uncompressed public key in bytes (prefix + 32 byte x + 32 byte y).
const UNCOMPRESSED_LEN: usize = 65;

/// A secp256k1 public key.
///
/// Wraps a k256 `VerifyingKey` and provides SEC1 serialization, address
/// derivation, signature verification, and public key recovery. Equality
/// is by curve point.
#[derive(Clone, Debug)]
pub struct PublicKey {
    /// The underlying k256 verifying key.
    inner: VerifyingKey,
}

impl PublicKey {
    /// Create a PublicKey from raw SEC1 encoded bytes.
    ///
    /// Accepts both compressed (33-byte) and uncompressed (65-byte) formats.
    ///
    /// # Arguments
    /// * `bytes` - SEC1-encoded public key bytes.
    ///
    /// # Returns
    /// `Ok(PublicKey)` on success, or an error if the bytes don't represent
    /// a valid point.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PrimitivesError> {
        if bytes.is_empty() {
            return Err(PrimitivesError::InvalidPublicKey(
                "public key bytes are empty".to_string(),
            ));
        }
        let inner = VerifyingKey::from_sec1_bytes(bytes)
            .map_err(|e| PrimitivesError::InvalidPublicKey(e.to_string()))?;
        Ok(PublicKey { inner })
    }

    /// Create a PublicKey from a hex-encoded SEC1 string.
    ///
    /// # Arguments
    /// * `hex_str` - A hex string of a compressed (66 chars) or uncompressed
    ///   (130 chars) key, with an optional `0x` prefix.
    ///
    /// # Returns
    /// `Ok(PublicKey)` on success, or an error if the hex or point is invalid.
    pub fn from_hex(hex_str: &str) -> Result<Self, PrimitivesError> {
        let stripped = hex_str.strip_prefix("0x").unwrap_or(hex_str);
        let bytes = hex::decode(stripped)?;
        Self::from_bytes(&bytes)
    }

    /// Wrap an existing k256 verifying key.
    pub(crate) fn from_verifying_key(inner: VerifyingKey) -> Self {
        PublicKey { inner }
    }

    /// Serialize the public key in compressed SEC1 format (33 bytes).
    ///
    /// The first byte is 0x02 (even Y) or 0x03 (odd Y), followed by the
    /// 32-byte X coordinate.
    pub fn to_compressed(&self) -> [u8; COMPRESSED_LEN] {
        let point = self.inner.to_encoded_point(true);
        let mut out = [0u8; COMPRESSED_LEN];
        out.copy_from_slice(point.as_bytes());
        out
    }

    /// Serialize the public key in uncompressed SEC1 format (65 bytes).
    ///
    /// The first byte is 0x04, followed by 32-byte X and Y coordinates.
    pub fn to_uncompressed(&self) -> [u8; UNCOMPRESSED_LEN] {
        let point = self.inner.to_encoded_point(false);
        let mut out = [0u8; UNCOMPRESSED_LEN];
        out.copy_from_slice(point.as_bytes());
        out
    }

    /// Serialize the public key as a lowercase hex string (compressed format).
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_compressed())
    }

    /// Derive the account address of this public key.
    pub fn to_address(&self) -> Address {
        Address::from_public_key(self)
    }

    /// Verify a signature's R and S components against a 32-byte digest.
    ///
    /// # Arguments
    /// * `digest` - The digest that was signed.
    /// * `r` - The R component (32 bytes, big-endian).
    /// * `s` - The S component (32 bytes, big-endian).
    ///
    /// # Returns
    /// `true` if the signature is valid for this key.
    pub fn verify_digest(&self, digest: &[u8; 32], r: &[u8; 32], s: &[u8; 32]) -> bool {
        let sig = match ecdsa::Signature::from_scalars(
            k256::FieldBytes::from(*r),
            k256::FieldBytes::from(*s),
        ) {
            Ok(sig) => sig,
            Err(_) => return false,
        };
        self.inner.verify_prehash(digest, &sig).is_ok()
    }

    /// Recover the public key that produced a recoverable signature.
    ///
    /// # Arguments
    /// * `digest` - The 32-byte digest that was signed.
    /// * `signature` - The recoverable signature (recovery id + R + S).
    ///
    /// # Returns
    /// `Ok(PublicKey)` if recovery succeeds, or an error for an invalid
    /// recovery id or signature.
    pub fn recover_from_digest(
        digest: &[u8; 32],
        signature: &RecoverableSignature,
    ) -> Result<PublicKey, PrimitivesError> {
        let recovery_id = RecoveryId::from_byte(signature.recovery_id).ok_or_else(|| {
            PrimitivesError::InvalidSignature(format!(
                "invalid recovery id {}",
                signature.recovery_id
            ))
        })?;

        let sig = ecdsa::Signature::from_scalars(
            k256::FieldBytes::from(signature.r),
            k256::FieldBytes::from(signature.s),
        )
        .map_err(|e| PrimitivesError::InvalidSignature(e.to_string()))?;

        let recovered = VerifyingKey::recover_from_prehash(digest, &sig, recovery_id)
            .map_err(|e| PrimitivesError::InvalidSignature(e.to_string()))?;

        Ok(PublicKey { inner: recovered })
    }
}

impl PartialEq for PublicKey {
    fn eq(&self, other: &Self) -> bool {
        self.to_compressed() == other.to_compressed()
    }
}

impl Eq for PublicKey {}
