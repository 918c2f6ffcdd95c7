//! Transaction kind taxonomy and type tags.
//!
//! Each kind owns a one-byte base tag; the fee-delegated counterpart is
//! `base + 1` and the ratio-carrying counterpart is `base + 2`, so the
//! low three bits of a tag select the delegation level and the rest
//! select the kind.

use crate::account_key::AccountKey;

/// Type tag for a plain value transfer.
pub const TYPE_VALUE_TRANSFER: u8 = 0x08;

/// Type tag for a value transfer carrying a memo payload.
pub const TYPE_VALUE_TRANSFER_MEMO: u8 = 0x10;

/// Type tag for an account-key update.
pub const TYPE_ACCOUNT_UPDATE: u8 = 0x20;

/// Type tag for a smart contract deployment.
pub const TYPE_SMART_CONTRACT_DEPLOY: u8 = 0x28;

/// Type tag for a smart contract execution.
pub const TYPE_SMART_CONTRACT_EXECUTION: u8 = 0x30;

/// Type tag for cancelling a pending transaction with the same nonce.
pub const TYPE_CANCEL: u8 = 0x38;

/// Type tag for anchoring service-chain data.
pub const TYPE_CHAIN_DATA_ANCHORING: u8 = 0x48;

/// Tag offset of the fee-delegated counterpart of a base type.
pub const TYPE_OFFSET_FEE_DELEGATED: u8 = 0x01;

/// Tag offset of the fee-delegated-with-ratio counterpart of a base type.
pub const TYPE_OFFSET_FEE_RATIO: u8 = 0x02;

/// Code format tag for EVM bytecode payloads.
pub const CODE_FORMAT_EVM: u8 = 0x00;

/// The kind-specific part of a transaction.
///
/// Carries only the fields a kind adds on top of the shared base
/// (`nonce`, `gas_price`, `gas_limit`, `from`, `to`, `value`); the shared
/// fields live on [`Transaction`](crate::Transaction) itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TxKind {
    /// Move native-unit value from `from` to `to`.
    ValueTransfer,
    /// Value transfer with an attached memo payload.
    ValueTransferMemo {
        /// Arbitrary memo bytes recorded with the transfer.
        memo: Vec<u8>,
    },
    /// Replace the sender account's authorization key.
    AccountUpdate {
        /// The proposed key; authoritative once the ledger accepts it.
        key: AccountKey,
    },
    /// Deploy a smart contract.
    SmartContractDeploy {
        /// The contract code to deploy.
        payload: Vec<u8>,
        /// Whether the contract address is human readable.
        human_readable: bool,
        /// Code format tag (`CODE_FORMAT_EVM`).
        code_format: u8,
    },
    /// Execute a deployed smart contract.
    SmartContractExecution {
        /// The ABI-encoded call data.
        payload: Vec<u8>,
    },
    /// Cancel the pending transaction with the same nonce.
    Cancel,
    /// Anchor service-chain data onto the ledger.
    ChainDataAnchoring {
        /// The anchored data blob.
        anchored_data: Vec<u8>,
    },
}

impl TxKind {
    /// The base type tag of this kind (delegation level 0).
    pub fn base_tag(&self) -> u8 {
        match self {
            TxKind::ValueTransfer => TYPE_VALUE_TRANSFER,
            TxKind::ValueTransferMemo { .. } => TYPE_VALUE_TRANSFER_MEMO,
            TxKind::AccountUpdate { .. } => TYPE_ACCOUNT_UPDATE,
            TxKind::SmartContractDeploy { .. } => TYPE_SMART_CONTRACT_DEPLOY,
            TxKind::SmartContractExecution { .. } => TYPE_SMART_CONTRACT_EXECUTION,
            TxKind::Cancel => TYPE_CANCEL,
            TxKind::ChainDataAnchoring { .. } => TYPE_CHAIN_DATA_ANCHORING,
        }
    }

    /// A short human-readable name for error messages and logs.
    pub fn name(&self) -> &'static str {
        match self {
            TxKind::ValueTransfer => "value transfer",
            TxKind::ValueTransferMemo { .. } => "value transfer memo",
            TxKind::AccountUpdate { .. } => "account update",
            TxKind::SmartContractDeploy { .. } => "smart contract deploy",
            TxKind::SmartContractExecution { .. } => "smart contract execution",
            TxKind::Cancel => "cancel",
            TxKind::ChainDataAnchoring { .. } => "chain data anchoring",
        }
    }
}
