//! 20-byte account address type.
//!
//! Addresses are displayed as lowercase hex with a `0x` prefix and derived
//! from public keys as the last 20 bytes of the Keccak-256 digest of the
//! uncompressed key body.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::ec::PublicKey;
use crate::hash::keccak256;
use crate::PrimitivesError;

/// Size of an address in bytes.
pub const ADDRESS_SIZE: usize = 20;

/// A 20-byte account address.
///
/// Value type with copy semantics; ordering and hashing follow the raw
/// bytes so addresses can key ordered and hashed collections.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Address([u8; ADDRESS_SIZE]);

impl Address {
    /// Create an address from a raw 20-byte array.
    pub fn new(bytes: [u8; ADDRESS_SIZE]) -> Self {
        Address(bytes)
    }

    /// Create an address from a byte slice.
    ///
    /// # Arguments
    /// * `bytes` - A slice that must be exactly 20 bytes.
    ///
    /// # Returns
    /// `Ok(Address)` if the slice is 20 bytes, or an error otherwise.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PrimitivesError> {
        if bytes.len() != ADDRESS_SIZE {
            return Err(PrimitivesError::InvalidAddress(format!(
                "invalid address length of {}, want {}",
                bytes.len(),
                ADDRESS_SIZE
            )));
        }
        let mut arr = [0u8; ADDRESS_SIZE];
        arr.copy_from_slice(bytes);
        Ok(Address(arr))
    }

    /// Create an address from a hex string with an optional `0x` prefix.
    ///
    /// # Arguments
    /// * `hex_str` - A 40-character hex string, case-insensitive.
    ///
    /// # Returns
    /// `Ok(Address)` on success, or an error for invalid hex or length.
    pub fn from_hex(hex_str: &str) -> Result<Self, PrimitivesError> {
        let stripped = hex_str.strip_prefix("0x").unwrap_or(hex_str);
        let bytes = hex::decode(stripped)?;
        Self::from_bytes(&bytes)
    }

    /// Derive the address of a public key.
    ///
    /// The address is the last 20 bytes of the Keccak-256 digest of the
    /// 64-byte uncompressed key body (the SEC1 encoding without its 0x04
    /// prefix byte).
    ///
    /// # Arguments
    /// * `public_key` - The public key to derive from.
    ///
    /// # Returns
    /// The derived `Address`.
    pub fn from_public_key(public_key: &PublicKey) -> Self {
        let uncompressed = public_key.to_uncompressed();
        let digest = keccak256(&uncompressed[1..]);
        let mut arr = [0u8; ADDRESS_SIZE];
        arr.copy_from_slice(&digest[12..]);
        Address(arr)
    }

    /// Access the raw address bytes.
    pub fn as_bytes(&self) -> &[u8; ADDRESS_SIZE] {
        &self.0
    }

    /// Serialize the address as a lowercase `0x`-prefixed hex string.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for Address {
    type Err = PrimitivesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Address::from_hex(s)
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Address::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
