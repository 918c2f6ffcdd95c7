//! Klay SDK - Transaction type model, canonical encoding, and signing.
//!
//! Provides the typed transaction taxonomy with per-kind wire formats,
//! chain-bound ECDSA signature triples with set semantics, polymorphic
//! account keys, the sequential multi-signer and fee-delegation signing
//! protocols, and the raw-transaction decoder that lets independent
//! signers exchange partially-signed artifacts as bytes.

pub mod signature;
pub mod account_key;
pub mod kind;
pub mod transaction;
pub mod decode;

mod error;
pub use error::TransactionError;
pub use signature::TxSignature;
pub use account_key::{AccountKey, WeightedPublicKey};
pub use kind::TxKind;
pub use transaction::{FeeDelegation, FeeRatio, RawTransaction, Transaction};
pub use decode::{decode, decode_hex};
