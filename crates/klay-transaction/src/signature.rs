//! Chain-bound ECDSA signature triples.
//!
//! A transaction signature is the triple `(v, r, s)` where `v` is a
//! discriminant folding the raw recovery id together with the target chain
//! id, so a signature is valid on exactly one chain. Equality, ordering,
//! and hashing are by value of the triple, which is what gives signature
//! collections their set semantics: re-adding an identical signature is a
//! no-op.

use klay_primitives::ec::RecoverableSignature;
use klay_primitives::rlp::Rlp;

use crate::TransactionError;

/// Offset added to the chain-scaled recovery id when folding a chain id
/// into the discriminant: `v = chain_id * 2 + 35 + recovery_id`.
const DISCRIMINANT_OFFSET: u64 = 35;

/// A chain-bound ECDSA signature.
///
/// `r` and `s` are fixed-width big-endian components; on the wire all
/// three values are encoded as minimal big-endian integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TxSignature {
    v: u64,
    r: [u8; 32],
    s: [u8; 32],
}

impl TxSignature {
    /// Create a signature from its raw components.
    pub fn new(v: u64, r: [u8; 32], s: [u8; 32]) -> Self {
        TxSignature { v, r, s }
    }

    /// The chain-bound placeholder signature `(chain_id, 0, 0)`.
    ///
    /// Used in signing digests before any real signature exists, binding
    /// the digest to a specific chain and preventing cross-chain replay.
    pub fn placeholder(chain_id: u64) -> Self {
        TxSignature {
            v: chain_id,
            r: [0u8; 32],
            s: [0u8; 32],
        }
    }

    /// Fold a chain id into a freshly produced recoverable signature.
    ///
    /// # Arguments
    /// * `signature` - The recoverable signature over the signing digest.
    /// * `chain_id` - The target chain id.
    pub fn from_recoverable(signature: &RecoverableSignature, chain_id: u64) -> Self {
        TxSignature {
            v: chain_id * 2 + DISCRIMINANT_OFFSET + signature.recovery_id as u64,
            r: signature.r,
            s: signature.s,
        }
    }

    /// The signature discriminant.
    pub fn v(&self) -> u64 {
        self.v
    }

    /// The R component (32 bytes, big-endian).
    pub fn r(&self) -> &[u8; 32] {
        &self.r
    }

    /// The S component (32 bytes, big-endian).
    pub fn s(&self) -> &[u8; 32] {
        &self.s
    }

    /// Unfold the chain id from the discriminant.
    ///
    /// # Returns
    /// `Some(chain_id)` for a chain-bound signature, `None` for
    /// placeholder-range discriminants.
    pub fn chain_id(&self) -> Option<u64> {
        if self.v >= DISCRIMINANT_OFFSET {
            Some((self.v - DISCRIMINANT_OFFSET) / 2)
        } else {
            None
        }
    }

    /// Unfold the raw ECDSA recovery id from the discriminant.
    ///
    /// # Returns
    /// `Some(0)` or `Some(1)` for a chain-bound signature, `None` otherwise.
    pub fn recovery_id(&self) -> Option<u8> {
        if self.v >= DISCRIMINANT_OFFSET {
            Some(((self.v - DISCRIMINANT_OFFSET) % 2) as u8)
        } else {
            None
        }
    }

    /// View this signature as a recoverable signature for key recovery.
    ///
    /// # Returns
    /// `Some(RecoverableSignature)` for a chain-bound signature, `None` for
    /// placeholder-range discriminants.
    pub fn to_recoverable(&self) -> Option<RecoverableSignature> {
        Some(RecoverableSignature {
            recovery_id: self.recovery_id()?,
            r: self.r,
            s: self.s,
        })
    }

    /// Encode as a 3-element list of minimal big-endian integers.
    pub fn to_rlp(&self) -> Rlp {
        Rlp::List(vec![
            Rlp::from_u64(self.v),
            Rlp::Bytes(trim_leading_zeros(&self.r)),
            Rlp::Bytes(trim_leading_zeros(&self.s)),
        ])
    }

    /// Decode a signature from a 3-element list.
    ///
    /// # Arguments
    /// * `value` - The RLP value holding `[v, r, s]`.
    ///
    /// # Returns
    /// `Ok(TxSignature)` on success; a tuple with fewer than three
    /// elements or non-integer components is a `DecodeError`.
    pub fn from_rlp(value: &Rlp) -> Result<Self, TransactionError> {
        let items = value.as_list().ok_or_else(|| TransactionError::DecodeError {
            field: "signature",
            reason: "expected a [v, r, s] list".to_string(),
        })?;
        if items.len() < 3 {
            return Err(TransactionError::DecodeError {
                field: "signature",
                reason: format!("signature tuple has {} elements, want 3", items.len()),
            });
        }

        let v = items[0]
            .to_u64()
            .map_err(|e| TransactionError::DecodeError {
                field: "signature.v",
                reason: e.to_string(),
            })?;
        let r = fixed_32(&items[1], "signature.r")?;
        let s = fixed_32(&items[2], "signature.s")?;
        Ok(TxSignature { v, r, s })
    }
}

/// Strip leading zero bytes for minimal integer encoding.
fn trim_leading_zeros(bytes: &[u8; 32]) -> Vec<u8> {
    let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    bytes[start..].to_vec()
}

/// Left-pad a minimal big-endian integer back to 32 bytes.
fn fixed_32(value: &Rlp, field: &'static str) -> Result<[u8; 32], TransactionError> {
    let bytes = value.as_bytes().ok_or_else(|| TransactionError::DecodeError {
        field,
        reason: "expected byte string, found list".to_string(),
    })?;
    if bytes.len() > 32 {
        return Err(TransactionError::DecodeError {
            field,
            reason: format!("integer of {} bytes exceeds 32", bytes.len()),
        });
    }
    let mut out = [0u8; 32];
    out[32 - bytes.len()..].copy_from_slice(bytes);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use klay_primitives::rlp;

    #[test]
    fn test_discriminant_fold_unfold() {
        let rec = RecoverableSignature {
            recovery_id: 1,
            r: [0x11; 32],
            s: [0x22; 32],
        };
        let sig = TxSignature::from_recoverable(&rec, 1001);
        assert_eq!(sig.v(), 1001 * 2 + 35 + 1);
        assert_eq!(sig.chain_id(), Some(1001));
        assert_eq!(sig.recovery_id(), Some(1));
        assert_eq!(sig.to_recoverable(), Some(rec));
    }

    #[test]
    fn test_different_chains_produce_different_discriminants() {
        let rec = RecoverableSignature {
            recovery_id: 0,
            r: [0x01; 32],
            s: [0x02; 32],
        };
        let on_1000 = TxSignature::from_recoverable(&rec, 1000);
        let on_1001 = TxSignature::from_recoverable(&rec, 1001);
        assert_ne!(on_1000.v(), on_1001.v());
        assert_ne!(on_1000, on_1001);
    }

    #[test]
    fn test_placeholder_is_not_chain_bound() {
        let placeholder = TxSignature::placeholder(8217);
        assert_eq!(placeholder.v(), 8217);
        assert_eq!(placeholder.r(), &[0u8; 32]);
        // A placeholder's discriminant is the bare chain id; it does not
        // unfold as a real signature for small chain ids.
        let small = TxSignature::placeholder(1);
        assert_eq!(small.chain_id(), None);
        assert_eq!(small.to_recoverable(), None);
    }

    #[test]
    fn test_rlp_roundtrip() {
        let mut r = [0u8; 32];
        r[30] = 0x0f;
        r[31] = 0xe9;
        let sig = TxSignature::new(2073, r, [0xab; 32]);

        let encoded = rlp::encode(&sig.to_rlp());
        let decoded = TxSignature::from_rlp(&rlp::decode(&encoded).unwrap()).unwrap();
        assert_eq!(decoded, sig);
    }

    #[test]
    fn test_zero_components_encode_minimally() {
        let placeholder = TxSignature::placeholder(1);
        // [1, '', ''] -> c3 01 80 80
        assert_eq!(
            rlp::encode(&placeholder.to_rlp()),
            vec![0xc3, 0x01, 0x80, 0x80]
        );
    }

    #[test]
    fn test_short_tuple_is_rejected() {
        let two = Rlp::List(vec![Rlp::from_u64(27), Rlp::Bytes(vec![0x01])]);
        let err = TxSignature::from_rlp(&two).unwrap_err();
        assert!(matches!(
            err,
            TransactionError::DecodeError {
                field: "signature",
                ..
            }
        ));
    }

    #[test]
    fn test_set_semantics() {
        use std::collections::BTreeSet;

        let sig = TxSignature::new(4073, [0x33; 32], [0x44; 32]);
        let mut set = BTreeSet::new();
        assert!(set.insert(sig));
        assert!(!set.insert(sig));
        assert_eq!(set.len(), 1);
    }
}
