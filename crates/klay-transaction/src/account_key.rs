//! Polymorphic account keys.
//!
//! An account key describes what can authorize an account: a single public
//! key, a weighted threshold multi-signature set, or a role-partitioned
//! group of the above. Keys are created off-chain, submitted inside an
//! account-update transaction, and authoritative only once the ledger
//! accepts that transaction; this layer never checks collected signatures
//! against a key's threshold - that is the ledger's job.
//!
//! Wire format: a one-byte key tag followed by the RLP encoding of the
//! tag-specific body.

use klay_primitives::ec::PublicKey;
use klay_primitives::rlp::{self, Rlp};

use crate::TransactionError;

/// Key tag for an account still bound to its address-derived key.
const TAG_LEGACY: u8 = 0x01;

/// Key tag for a single public key.
const TAG_PUBLIC: u8 = 0x02;

/// Key tag for an account that rejects every signature.
const TAG_FAIL: u8 = 0x03;

/// Key tag for a weighted threshold multi-signature set.
const TAG_WEIGHTED_MULTI_SIG: u8 = 0x04;

/// Key tag for a role-partitioned key group.
const TAG_ROLE_BASED: u8 = 0x05;

/// The "no key" marker: the RLP encoding of the empty byte string.
const NIL_KEY_BYTE: u8 = 0x80;

/// Maximum number of role slots in a role-based key.
pub const MAX_ROLES: usize = 3;

/// Role slot index for transaction signing.
pub const ROLE_TRANSACTION: usize = 0;

/// Role slot index for account-key updates.
pub const ROLE_ACCOUNT_UPDATE: usize = 1;

/// Role slot index for fee payment.
pub const ROLE_FEE_PAYER: usize = 2;

/// A public key with its voting weight inside a multi-signature set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightedPublicKey {
    /// The weight this key contributes toward the threshold.
    pub weight: u32,
    /// The public key itself.
    pub key: PublicKey,
}

impl WeightedPublicKey {
    /// Create a weighted public key.
    pub fn new(weight: u32, key: PublicKey) -> Self {
        WeightedPublicKey { weight, key }
    }
}

/// What can authorize an account.
///
/// Structural equality is the only comparison this type offers; callers
/// use it to confirm a key reconstructed from a decoded account-update
/// matches what was proposed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountKey {
    /// No key. Valid only as a role slot, meaning "leave this role unchanged".
    Nil,
    /// The account is still authorized by the key its address was derived from.
    Legacy,
    /// A single public key.
    Public(PublicKey),
    /// A key that can never validate; used to permanently disable an account.
    Fail,
    /// A weighted threshold multi-signature set: any subset of keys whose
    /// summed weights reach the threshold authorizes the account.
    WeightedMultiSig {
        /// The weight sum a validating subset must reach.
        threshold: u32,
        /// The registered keys in registration order.
        keys: Vec<WeightedPublicKey>,
    },
    /// A role-partitioned key group: independent keys for transaction
    /// signing, account updates, and fee payment. Slots are never
    /// themselves role-based.
    RoleBased {
        /// 1-3 slots in role order (transaction, update, fee payer).
        roles: Vec<AccountKey>,
    },
}

impl AccountKey {
    /// Create a single-public-key account key.
    pub fn public(key: PublicKey) -> Self {
        AccountKey::Public(key)
    }

    /// Create a weighted multi-signature account key.
    ///
    /// # Arguments
    /// * `threshold` - The weight sum a validating subset must reach (>= 1).
    /// * `keys` - The registered keys; at least one, every weight >= 1.
    ///
    /// # Returns
    /// `Ok(AccountKey)` on success, or `InvalidAccountKey` for a zero
    /// threshold, an empty key set, or a zero weight.
    pub fn weighted_multi_sig(
        threshold: u32,
        keys: Vec<WeightedPublicKey>,
    ) -> Result<Self, TransactionError> {
        if threshold == 0 {
            return Err(TransactionError::InvalidAccountKey(
                "threshold must be at least 1".to_string(),
            ));
        }
        if keys.is_empty() {
            return Err(TransactionError::InvalidAccountKey(
                "multi-sig key set is empty".to_string(),
            ));
        }
        if keys.iter().any(|k| k.weight == 0) {
            return Err(TransactionError::InvalidAccountKey(
                "every key weight must be at least 1".to_string(),
            ));
        }
        Ok(AccountKey::WeightedMultiSig { threshold, keys })
    }

    /// Create a role-based account key.
    ///
    /// # Arguments
    /// * `roles` - 1-3 slots in role order (transaction, update, fee payer).
    ///   Missing trailing slots leave those roles unchanged.
    ///
    /// # Returns
    /// `Ok(AccountKey)` on success, or `InvalidAccountKey` for an empty or
    /// oversized slot list or a nested role-based slot.
    pub fn role_based(roles: Vec<AccountKey>) -> Result<Self, TransactionError> {
        if roles.is_empty() || roles.len() > MAX_ROLES {
            return Err(TransactionError::InvalidAccountKey(format!(
                "role-based key needs 1 to {} slots, got {}",
                MAX_ROLES,
                roles.len()
            )));
        }
        if roles.iter().any(|r| matches!(r, AccountKey::RoleBased { .. })) {
            return Err(TransactionError::InvalidAccountKey(
                "role slots must not themselves be role-based".to_string(),
            ));
        }
        Ok(AccountKey::RoleBased { roles })
    }

    /// The key registered for a given role slot, when this key is role-based.
    ///
    /// # Arguments
    /// * `role` - One of `ROLE_TRANSACTION`, `ROLE_ACCOUNT_UPDATE`,
    ///   `ROLE_FEE_PAYER`.
    ///
    /// # Returns
    /// `Some(&AccountKey)` when this key is role-based and carries the slot.
    pub fn role_key(&self, role: usize) -> Option<&AccountKey> {
        match self {
            AccountKey::RoleBased { roles } => roles.get(role),
            _ => None,
        }
    }

    /// Collect every leaf public key reachable from this key.
    ///
    /// Used when a caller must know how many independent signers a key (or
    /// one of its roles) requires.
    pub fn leaf_public_keys(&self) -> Vec<&PublicKey> {
        match self {
            AccountKey::Nil | AccountKey::Legacy | AccountKey::Fail => Vec::new(),
            AccountKey::Public(key) => vec![key],
            AccountKey::WeightedMultiSig { keys, .. } => {
                keys.iter().map(|w| &w.key).collect()
            }
            AccountKey::RoleBased { roles } => roles
                .iter()
                .flat_map(|role| role.leaf_public_keys())
                .collect(),
        }
    }

    /// Encode this key as tag-prefixed bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            AccountKey::Nil => vec![NIL_KEY_BYTE],
            AccountKey::Legacy => {
                let mut out = vec![TAG_LEGACY];
                out.extend(rlp::encode(&Rlp::List(vec![])));
                out
            }
            AccountKey::Fail => {
                let mut out = vec![TAG_FAIL];
                out.extend(rlp::encode(&Rlp::List(vec![])));
                out
            }
            AccountKey::Public(key) => {
                let mut out = vec![TAG_PUBLIC];
                out.extend(rlp::encode(&Rlp::from_slice(&key.to_compressed())));
                out
            }
            AccountKey::WeightedMultiSig { threshold, keys } => {
                let entries: Vec<Rlp> = keys
                    .iter()
                    .map(|w| {
                        Rlp::List(vec![
                            Rlp::from_u64(w.weight as u64),
                            Rlp::from_slice(&w.key.to_compressed()),
                        ])
                    })
                    .collect();
                let body = Rlp::List(vec![
                    Rlp::from_u64(*threshold as u64),
                    Rlp::List(entries),
                ]);
                let mut out = vec![TAG_WEIGHTED_MULTI_SIG];
                out.extend(rlp::encode(&body));
                out
            }
            AccountKey::RoleBased { roles } => {
                let slots: Vec<Rlp> =
                    roles.iter().map(|r| Rlp::Bytes(r.to_bytes())).collect();
                let mut out = vec![TAG_ROLE_BASED];
                out.extend(rlp::encode(&Rlp::List(slots)));
                out
            }
        }
    }

    /// Encode this key as a lowercase hex string with a `0x` prefix.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.to_bytes()))
    }

    /// Decode a key from tag-prefixed bytes.
    ///
    /// # Arguments
    /// * `bytes` - The encoded key.
    ///
    /// # Returns
    /// `Ok(AccountKey)` on success, or a `DecodeError`/`InvalidAccountKey`
    /// describing the failure.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TransactionError> {
        let (&tag, body) = bytes.split_first().ok_or_else(|| {
            TransactionError::DecodeError {
                field: "account_key",
                reason: "empty key bytes".to_string(),
            }
        })?;

        match tag {
            NIL_KEY_BYTE => {
                if !body.is_empty() {
                    return Err(TransactionError::DecodeError {
                        field: "account_key",
                        reason: "nil key carries trailing bytes".to_string(),
                    });
                }
                Ok(AccountKey::Nil)
            }
            TAG_LEGACY => {
                decode_empty_body(body)?;
                Ok(AccountKey::Legacy)
            }
            TAG_FAIL => {
                decode_empty_body(body)?;
                Ok(AccountKey::Fail)
            }
            TAG_PUBLIC => {
                let value = decode_body(body)?;
                let key_bytes =
                    value.as_bytes().ok_or_else(|| TransactionError::DecodeError {
                        field: "account_key.public",
                        reason: "expected byte string, found list".to_string(),
                    })?;
                let key = PublicKey::from_bytes(key_bytes)
                    .map_err(|e| TransactionError::DecodeError {
                        field: "account_key.public",
                        reason: e.to_string(),
                    })?;
                Ok(AccountKey::Public(key))
            }
            TAG_WEIGHTED_MULTI_SIG => decode_weighted_multi_sig(body),
            TAG_ROLE_BASED => decode_role_based(body),
            other => Err(TransactionError::DecodeError {
                field: "account_key",
                reason: format!("unknown key tag 0x{:02x}", other),
            }),
        }
    }

    /// Decode a key from a hex string with an optional `0x` prefix.
    pub fn from_hex(hex_str: &str) -> Result<Self, TransactionError> {
        let stripped = hex_str.strip_prefix("0x").unwrap_or(hex_str);
        let bytes = hex::decode(stripped).map_err(|e| TransactionError::DecodeError {
            field: "account_key",
            reason: format!("invalid hex: {}", e),
        })?;
        Self::from_bytes(&bytes)
    }
}

/// Decode a tag body, mapping RLP failures to a key decode error.
fn decode_body(body: &[u8]) -> Result<Rlp, TransactionError> {
    rlp::decode(body).map_err(|e| TransactionError::DecodeError {
        field: "account_key",
        reason: e.to_string(),
    })
}

/// Expect a body that is the empty list (legacy and fail keys).
fn decode_empty_body(body: &[u8]) -> Result<(), TransactionError> {
    let value = decode_body(body)?;
    match value.as_list() {
        Some([]) => Ok(()),
        _ => Err(TransactionError::DecodeError {
            field: "account_key",
            reason: "expected an empty list body".to_string(),
        }),
    }
}

/// Decode the body of a weighted multi-signature key:
/// `[threshold, [[weight, compressed_key], ...]]`.
fn decode_weighted_multi_sig(body: &[u8]) -> Result<AccountKey, TransactionError> {
    let value = decode_body(body)?;
    let items = value.as_list().ok_or_else(|| TransactionError::DecodeError {
        field: "account_key.multisig",
        reason: "expected [threshold, keys] list".to_string(),
    })?;
    if items.len() < 2 {
        return Err(TransactionError::DecodeError {
            field: "account_key.multisig",
            reason: format!("body has {} elements, want 2", items.len()),
        });
    }

    let threshold = items[0]
        .to_u64()
        .map_err(|e| TransactionError::DecodeError {
            field: "account_key.multisig.threshold",
            reason: e.to_string(),
        })? as u32;

    let entries = items[1]
        .as_list()
        .ok_or_else(|| TransactionError::DecodeError {
            field: "account_key.multisig.keys",
            reason: "expected a list of weighted keys".to_string(),
        })?;

    let mut keys = Vec::with_capacity(entries.len());
    for entry in entries {
        let pair = entry.as_list().ok_or_else(|| TransactionError::DecodeError {
            field: "account_key.multisig.keys",
            reason: "expected a [weight, key] pair".to_string(),
        })?;
        if pair.len() < 2 {
            return Err(TransactionError::DecodeError {
                field: "account_key.multisig.keys",
                reason: format!("weighted key pair has {} elements, want 2", pair.len()),
            });
        }
        let weight = pair[0]
            .to_u64()
            .map_err(|e| TransactionError::DecodeError {
                field: "account_key.multisig.weight",
                reason: e.to_string(),
            })? as u32;
        let key_bytes = pair[1]
            .as_bytes()
            .ok_or_else(|| TransactionError::DecodeError {
                field: "account_key.multisig.key",
                reason: "expected byte string, found list".to_string(),
            })?;
        let key =
            PublicKey::from_bytes(key_bytes).map_err(|e| TransactionError::DecodeError {
                field: "account_key.multisig.key",
                reason: e.to_string(),
            })?;
        keys.push(WeightedPublicKey::new(weight, key));
    }

    AccountKey::weighted_multi_sig(threshold, keys)
}

/// Decode the body of a role-based key: a list of encoded slot byte strings.
fn decode_role_based(body: &[u8]) -> Result<AccountKey, TransactionError> {
    let value = decode_body(body)?;
    let slots = value.as_list().ok_or_else(|| TransactionError::DecodeError {
        field: "account_key.roles",
        reason: "expected a list of role slots".to_string(),
    })?;

    let mut roles = Vec::with_capacity(slots.len());
    for slot in slots {
        let slot_bytes = slot.as_bytes().ok_or_else(|| TransactionError::DecodeError {
            field: "account_key.roles",
            reason: "expected an encoded key byte string".to_string(),
        })?;
        roles.push(AccountKey::from_bytes(slot_bytes)?);
    }

    AccountKey::role_based(roles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use klay_primitives::ec::PrivateKey;

    fn fresh_key() -> PublicKey {
        PrivateKey::new().public_key()
    }

    #[test]
    fn test_nil_legacy_fail_encodings() {
        assert_eq!(AccountKey::Nil.to_bytes(), vec![0x80]);
        assert_eq!(AccountKey::Legacy.to_bytes(), vec![0x01, 0xc0]);
        assert_eq!(AccountKey::Fail.to_bytes(), vec![0x03, 0xc0]);

        for key in [AccountKey::Nil, AccountKey::Legacy, AccountKey::Fail] {
            assert_eq!(AccountKey::from_bytes(&key.to_bytes()).unwrap(), key);
            assert!(key.leaf_public_keys().is_empty());
        }
    }

    #[test]
    fn test_public_key_roundtrip() {
        let key = AccountKey::public(fresh_key());
        let bytes = key.to_bytes();
        assert_eq!(bytes[0], 0x02);
        assert_eq!(AccountKey::from_bytes(&bytes).unwrap(), key);
        assert_eq!(key.leaf_public_keys().len(), 1);
    }

    #[test]
    fn test_weighted_multi_sig_roundtrip() {
        let key = AccountKey::weighted_multi_sig(
            2,
            vec![
                WeightedPublicKey::new(1, fresh_key()),
                WeightedPublicKey::new(1, fresh_key()),
                WeightedPublicKey::new(2, fresh_key()),
            ],
        )
        .unwrap();

        let bytes = key.to_bytes();
        assert_eq!(bytes[0], 0x04);
        assert_eq!(AccountKey::from_bytes(&bytes).unwrap(), key);
        assert_eq!(key.leaf_public_keys().len(), 3);
    }

    #[test]
    fn test_weighted_multi_sig_validation() {
        let keys = vec![WeightedPublicKey::new(1, fresh_key())];
        assert!(matches!(
            AccountKey::weighted_multi_sig(0, keys.clone()),
            Err(TransactionError::InvalidAccountKey(_))
        ));
        assert!(matches!(
            AccountKey::weighted_multi_sig(1, vec![]),
            Err(TransactionError::InvalidAccountKey(_))
        ));
        assert!(matches!(
            AccountKey::weighted_multi_sig(1, vec![WeightedPublicKey::new(0, fresh_key())]),
            Err(TransactionError::InvalidAccountKey(_))
        ));
        assert!(AccountKey::weighted_multi_sig(1, keys).is_ok());
    }

    #[test]
    fn test_role_based_roundtrip() {
        let key = AccountKey::role_based(vec![
            AccountKey::public(fresh_key()),
            AccountKey::Nil,
            AccountKey::weighted_multi_sig(
                1,
                vec![WeightedPublicKey::new(1, fresh_key())],
            )
            .unwrap(),
        ])
        .unwrap();

        let bytes = key.to_bytes();
        assert_eq!(bytes[0], 0x05);
        let decoded = AccountKey::from_bytes(&bytes).unwrap();
        assert_eq!(decoded, key);

        assert!(matches!(
            decoded.role_key(ROLE_TRANSACTION),
            Some(AccountKey::Public(_))
        ));
        assert!(matches!(decoded.role_key(ROLE_ACCOUNT_UPDATE), Some(AccountKey::Nil)));
        assert!(matches!(
            decoded.role_key(ROLE_FEE_PAYER),
            Some(AccountKey::WeightedMultiSig { .. })
        ));
        assert_eq!(decoded.leaf_public_keys().len(), 2);
    }

    #[test]
    fn test_role_based_partial_slots() {
        let key = AccountKey::role_based(vec![AccountKey::public(fresh_key())]).unwrap();
        let decoded = AccountKey::from_bytes(&key.to_bytes()).unwrap();
        assert_eq!(decoded, key);
        assert!(decoded.role_key(ROLE_FEE_PAYER).is_none());
    }

    #[test]
    fn test_role_based_rejects_nesting() {
        let inner = AccountKey::role_based(vec![AccountKey::public(fresh_key())]).unwrap();
        assert!(matches!(
            AccountKey::role_based(vec![inner]),
            Err(TransactionError::InvalidAccountKey(_))
        ));
        assert!(matches!(
            AccountKey::role_based(vec![]),
            Err(TransactionError::InvalidAccountKey(_))
        ));
    }

    #[test]
    fn test_unknown_tag_is_rejected() {
        let err = AccountKey::from_bytes(&[0x77, 0xc0]).unwrap_err();
        assert!(matches!(
            err,
            TransactionError::DecodeError {
                field: "account_key",
                ..
            }
        ));
    }

    /// A weighted multi-sig payload captured from a deployed role-based
    /// account: threshold 2 with two weight-1 compressed keys.
    #[test]
    fn test_decode_deployed_multisig_payload() {
        let payload = "04f84b02f848e301a102d14ae8ba92ddd6eb263ff2ff4c8f777750e9f19d1e98\
                       1cab89f686ffb5f063cae301a10338f98936ef860d5b6d9c5505dc053acb0242\
                       a7809e322ccbff193280c9e6552b";
        let key = AccountKey::from_hex(payload).unwrap();

        match &key {
            AccountKey::WeightedMultiSig { threshold, keys } => {
                assert_eq!(*threshold, 2);
                assert_eq!(keys.len(), 2);
                assert!(keys.iter().all(|k| k.weight == 1));
            }
            other => panic!("expected weighted multi-sig, got {:?}", other),
        }

        // Byte-for-byte re-encode.
        assert_eq!(hex::encode(key.to_bytes()), payload);
    }
}
