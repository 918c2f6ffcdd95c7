#![deny(missing_docs)]

//! Klay SDK - Complete SDK.
//!
//! Re-exports all Klay SDK components for convenient single-crate usage.

pub use klay_primitives as primitives;
pub use klay_transaction as transaction;
