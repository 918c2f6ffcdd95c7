//! Signing credential: a private key bound to an account address.

use crate::address::Address;
use crate::ec::private_key::PrivateKey;
use crate::ec::public_key::PublicKey;
use crate::ec::RecoverableSignature;
use crate::PrimitivesError;

/// A private key together with the account address it signs for.
///
/// By default the address is derived from the key, but the ledger lets an
/// account register a key that is unrelated to its address (via an
/// account-key update), so the address can also be supplied explicitly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credential {
    private_key: PrivateKey,
    address: Address,
}

impl Credential {
    /// Create a credential whose address is derived from the private key.
    ///
    /// # Arguments
    /// * `private_key` - The signing key.
    pub fn new(private_key: PrivateKey) -> Self {
        let address = private_key.public_key().to_address();
        Credential {
            private_key,
            address,
        }
    }

    /// Create a credential with an explicitly supplied address.
    ///
    /// Used for accounts whose registered key has been decoupled from the
    /// address by an account-key update.
    ///
    /// # Arguments
    /// * `private_key` - The signing key.
    /// * `address` - The account address this key signs for.
    pub fn with_address(private_key: PrivateKey, address: Address) -> Self {
        Credential {
            private_key,
            address,
        }
    }

    /// Create a credential from a private key hex string, deriving the address.
    ///
    /// # Arguments
    /// * `hex_str` - A 64-character private key hex string, optional `0x` prefix.
    ///
    /// # Returns
    /// `Ok(Credential)` on success, or an error for invalid key material.
    pub fn from_hex(hex_str: &str) -> Result<Self, PrimitivesError> {
        Ok(Credential::new(PrivateKey::from_hex(hex_str)?))
    }

    /// The account address this credential signs for.
    pub fn address(&self) -> &Address {
        &self.address
    }

    /// The public key of the signing key.
    pub fn public_key(&self) -> PublicKey {
        self.private_key.public_key()
    }

    /// Sign a 32-byte digest with the credential's private key.
    ///
    /// # Arguments
    /// * `digest` - The digest to sign.
    ///
    /// # Returns
    /// `Ok(RecoverableSignature)` on success, or an error if signing fails.
    pub fn sign_digest(
        &self,
        digest: &[u8; 32],
    ) -> Result<RecoverableSignature, PrimitivesError> {
        self.private_key.sign_digest(digest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_derives_address() {
        let key = PrivateKey::from_bytes(&[0x46u8; 32]).unwrap();
        let credential = Credential::new(key);
        assert_eq!(
            credential.address().to_hex(),
            "0x9d8a62f656a8d1615c1294fd71e9cfb3e4855a4f"
        );
    }

    #[test]
    fn test_credential_with_decoupled_address() {
        let key = PrivateKey::new();
        let address = Address::new([0x42; 20]);
        let credential = Credential::with_address(key.clone(), address);

        assert_eq!(credential.address(), &address);
        assert_ne!(credential.address(), &key.public_key().to_address());
    }

    #[test]
    fn test_credential_signs_like_its_key() {
        let key = PrivateKey::new();
        let credential = Credential::new(key.clone());
        let digest = crate::hash::keccak256(b"credential signing");

        assert_eq!(
            credential.sign_digest(&digest).unwrap(),
            key.sign_digest(&digest).unwrap()
        );
    }
}
