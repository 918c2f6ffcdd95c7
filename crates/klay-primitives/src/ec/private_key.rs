//! secp256k1 private key for transaction signing.
//!
//! Wraps a k256 signing key and produces recoverable, low-S normalized
//! ECDSA signatures over precomputed digests.

use k256::ecdsa::SigningKey;
use rand::rngs::OsRng;

use crate::ec::public_key::PublicKey;
use crate::ec::RecoverableSignature;
use crate::PrimitivesError;

/// Length of a serialized private key in bytes.
const PRIVATE_KEY_BYTES_LEN: usize = 32;

/// A secp256k1 private key.
///
/// Wraps a k256 `SigningKey` and provides serialization, public key
/// derivation, and recoverable digest signing.
#[derive(Clone, Debug)]
pub struct PrivateKey {
    /// The underlying k256 signing key.
    inner: SigningKey,
}

impl PrivateKey {
    /// Generate a new random private key using the OS random number generator.
    pub fn new() -> Self {
        PrivateKey {
            inner: SigningKey::random(&mut OsRng),
        }
    }

    /// Create a private key from a raw 32-byte scalar.
    ///
    /// # Arguments
    /// * `bytes` - A 32-byte slice representing the private key scalar.
    ///
    /// # Returns
    /// `Ok(PrivateKey)` if the bytes represent a valid scalar on secp256k1,
    /// or an error if the scalar is zero or out of range.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PrimitivesError> {
        if bytes.len() != PRIVATE_KEY_BYTES_LEN {
            return Err(PrimitivesError::InvalidPrivateKey(format!(
                "expected {} bytes, got {}",
                PRIVATE_KEY_BYTES_LEN,
                bytes.len()
            )));
        }
        let signing_key = SigningKey::from_bytes(bytes.into())
            .map_err(|e| PrimitivesError::InvalidPrivateKey(e.to_string()))?;
        Ok(PrivateKey { inner: signing_key })
    }

    /// Create a private key from a hexadecimal string with an optional
    /// `0x` prefix.
    ///
    /// # Arguments
    /// * `hex_str` - A 64-character hex string representing the 32-byte scalar.
    ///
    /// # Returns
    /// `Ok(PrivateKey)` on success, or an error if the hex or scalar is invalid.
    pub fn from_hex(hex_str: &str) -> Result<Self, PrimitivesError> {
        let stripped = hex_str.strip_prefix("0x").unwrap_or(hex_str);
        if stripped.is_empty() {
            return Err(PrimitivesError::InvalidPrivateKey(
                "private key hex is empty".to_string(),
            ));
        }
        let bytes =
            hex::decode(stripped).map_err(|e| PrimitivesError::InvalidHex(e.to_string()))?;
        Self::from_bytes(&bytes)
    }

    /// Serialize the private key as a 32-byte big-endian array.
    pub fn to_bytes(&self) -> [u8; 32] {
        let mut out = [0u8; 32];
        out.copy_from_slice(&self.inner.to_bytes());
        out
    }

    /// Serialize the private key as a lowercase hexadecimal string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Derive the corresponding public key for this private key.
    pub fn public_key(&self) -> PublicKey {
        PublicKey::from_verifying_key(*self.inner.verifying_key())
    }

    /// Sign a 32-byte digest, producing a recoverable signature.
    ///
    /// Uses deterministic RFC6979 nonces; the signature is low-S normalized
    /// and the recovery id accounts for the normalization.
    ///
    /// # Arguments
    /// * `digest` - The 32-byte digest to sign.
    ///
    /// # Returns
    /// `Ok(RecoverableSignature)` on success, or an error if signing fails.
    pub fn sign_digest(
        &self,
        digest: &[u8; 32],
    ) -> Result<RecoverableSignature, PrimitivesError> {
        let (sig, recovery_id) = self
            .inner
            .sign_prehash_recoverable(digest)
            .map_err(|e| PrimitivesError::InvalidSignature(e.to_string()))?;

        let (r_bytes, s_bytes) = sig.split_bytes();
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&r_bytes);
        s.copy_from_slice(&s_bytes);

        Ok(RecoverableSignature {
            recovery_id: recovery_id.to_byte(),
            r,
            s,
        })
    }
}

impl Default for PrivateKey {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for PrivateKey {
    fn drop(&mut self) {
        use zeroize::Zeroize;
        let mut bytes = self.to_bytes();
        bytes.zeroize();
    }
}

impl PartialEq for PrivateKey {
    fn eq(&self, other: &Self) -> bool {
        self.to_bytes() == other.to_bytes()
    }
}

impl Eq for PrivateKey {}

#[cfg(test)]
mod tests {
    use super::*;

    /// Serialization round trips through bytes and hex.
    #[test]
    fn test_private_key_serialization_roundtrip() {
        let key = PrivateKey::new();

        let deserialized = PrivateKey::from_bytes(&key.to_bytes()).unwrap();
        assert_eq!(key, deserialized);

        let deserialized = PrivateKey::from_hex(&key.to_hex()).unwrap();
        assert_eq!(key, deserialized);

        let prefixed = format!("0x{}", key.to_hex());
        let deserialized = PrivateKey::from_hex(&prefixed).unwrap();
        assert_eq!(key, deserialized);
    }

    #[test]
    fn test_private_key_invalid_input() {
        assert!(PrivateKey::from_hex("").is_err());
        assert!(PrivateKey::from_hex("zz").is_err());
        assert!(PrivateKey::from_bytes(&[0u8; 31]).is_err());
        // The zero scalar is not a valid key.
        assert!(PrivateKey::from_bytes(&[0u8; 32]).is_err());
    }

    /// Signing a digest yields a signature that recovers the signer's key.
    #[test]
    fn test_sign_digest_recovers_public_key() {
        let key = PrivateKey::new();
        let digest = crate::hash::keccak256(b"recoverable signing test");

        let sig = key.sign_digest(&digest).unwrap();
        assert!(sig.recovery_id < 2, "low-S recovery id should be 0 or 1");

        let recovered = PublicKey::recover_from_digest(&digest, &sig).unwrap();
        assert_eq!(recovered, key.public_key());
    }

    /// RFC6979 nonces make signing deterministic.
    #[test]
    fn test_sign_digest_is_deterministic() {
        let key = PrivateKey::from_bytes(&[0x46u8; 32]).unwrap();
        let digest = crate::hash::keccak256(b"determinism test");

        let first = key.sign_digest(&digest).unwrap();
        let second = key.sign_digest(&digest).unwrap();
        assert_eq!(first, second);
    }
}
