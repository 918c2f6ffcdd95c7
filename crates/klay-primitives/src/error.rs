/// Unified error type for all primitives operations.
///
/// Covers errors from hashing, EC operations, RLP encoding, and addresses.
#[derive(Debug, thiserror::Error)]
pub enum PrimitivesError {
    #[error("invalid private key: {0}")]
    InvalidPrivateKey(String),

    #[error("invalid public key: {0}")]
    InvalidPublicKey(String),

    #[error("invalid signature: {0}")]
    InvalidSignature(String),

    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("invalid hex: {0}")]
    InvalidHex(String),

    #[error("rlp: unexpected end of input")]
    UnexpectedEof,

    #[error("rlp: trailing {0} bytes after top-level item")]
    TrailingBytes(usize),

    #[error("rlp: {0}")]
    InvalidRlp(String),

    #[error("rlp: integer does not fit in {0} bits")]
    IntegerOverflow(u32),
}

impl From<hex::FromHexError> for PrimitivesError {
    fn from(e: hex::FromHexError) -> Self {
        PrimitivesError::InvalidHex(e.to_string())
    }
}
