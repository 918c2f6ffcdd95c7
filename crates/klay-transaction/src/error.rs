use klay_primitives::Address;

/// Error types for transaction building, signing, and decoding.
///
/// Every error names the field or pipeline stage that produced it; in a
/// multi-party protocol the failing party needs to know whether it produced
/// the bad input or received one. No error here is retried internally.
#[derive(Debug, thiserror::Error)]
pub enum TransactionError {
    /// Signing or encoding was attempted before a nonce was assigned.
    #[error("transaction has no nonce; assign one before signing")]
    MissingNonce,
    /// Raw transaction bytes are malformed; `field` names the failing position.
    #[error("decode error in `{field}`: {reason}")]
    DecodeError {
        /// The transaction field or structural position that failed.
        field: &'static str,
        /// What was wrong with it.
        reason: String,
    },
    /// A fee ratio outside the valid [1, 99] percent range.
    #[error("invalid fee ratio {0}: must lie in [1, 99]")]
    InvalidFeeRatio(u8),
    /// A fee payer attempted to sign a transaction already claimed by another payer.
    #[error("fee payer mismatch: slot is claimed by {current}, signing attempted by {attempted}")]
    FeePayerMismatch {
        /// The payer address already recorded on the transaction.
        current: Address,
        /// The address that attempted the conflicting signature.
        attempted: Address,
    },
    /// A fee-payer operation on a transaction without fee delegation.
    #[error("transaction is not fee delegated")]
    NotFeeDelegated,
    /// Account key construction or decoding rejected the key structure.
    #[error("invalid account key: {0}")]
    InvalidAccountKey(String),
    /// An underlying primitives error (forwarded from `klay-primitives`).
    #[error("primitives error: {0}")]
    Primitives(#[from] klay_primitives::PrimitivesError),
}
