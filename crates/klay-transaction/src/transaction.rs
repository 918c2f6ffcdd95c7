//! Core transaction type: construction, canonical encoding, and the
//! multi-party signing protocol.
//!
//! A transaction is owned by whichever party currently holds it; the
//! hand-off between independent signers is serialized bytes, not a shared
//! object. Each signer decodes, adds its signature, and re-encodes.

use std::collections::BTreeSet;

use klay_primitives::ec::Credential;
use klay_primitives::hash::keccak256;
use klay_primitives::rlp::{self, Rlp};
use klay_primitives::Address;

use crate::account_key::AccountKey;
use crate::kind::{TxKind, TYPE_OFFSET_FEE_DELEGATED, TYPE_OFFSET_FEE_RATIO};
use crate::signature::TxSignature;
use crate::TransactionError;

/// Wire sentinel for an unset fee payer: the one-byte string `"0"`.
pub(crate) const FEE_PAYER_SENTINEL: u8 = 0x30;

// ---------------------------------------------------------------------------
// Fee delegation
// ---------------------------------------------------------------------------

/// A fee-split percentage charged to the fee payer, validated to [1, 99].
///
/// A delegated transaction without a ratio charges the payer 100% of the
/// gas fee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeRatio(u8);

impl FeeRatio {
    /// Create a fee ratio, rejecting values outside [1, 99].
    ///
    /// # Arguments
    /// * `percent` - The percentage of the gas fee charged to the payer.
    ///
    /// # Returns
    /// `Ok(FeeRatio)` for 1-99, `InvalidFeeRatio` otherwise.
    pub fn new(percent: u8) -> Result<Self, TransactionError> {
        if !(1..=99).contains(&percent) {
            return Err(TransactionError::InvalidFeeRatio(percent));
        }
        Ok(FeeRatio(percent))
    }

    /// The percentage value.
    pub fn get(self) -> u8 {
        self.0
    }
}

/// The fee-delegation capability attached to a transaction.
///
/// Not a transaction kind of its own: any kind can carry it, adding the
/// payer address, the payer signature set, and an optional fee ratio after
/// the sender layer in the wire format.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FeeDelegation {
    /// The payer address; `None` until a payer claims the slot.
    pub(crate) fee_payer: Option<Address>,
    /// Signatures produced by the payer's keys; value-deduplicated.
    pub(crate) fee_payer_signatures: BTreeSet<TxSignature>,
    /// Optional fee split; absence means the payer covers 100%.
    pub(crate) fee_ratio: Option<FeeRatio>,
}

// ---------------------------------------------------------------------------
// Transaction
// ---------------------------------------------------------------------------

/// An account-based ledger transaction.
///
/// Shared fields live here; kind-specific fields live in [`TxKind`].
/// Signature collections are value sets: inserting a duplicate is a no-op
/// and iteration order is deterministic, so encoding is a pure function of
/// the logical value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub(crate) nonce: Option<u64>,
    pub(crate) gas_price: u64,
    pub(crate) gas_limit: u64,
    pub(crate) from: Address,
    pub(crate) to: Option<Address>,
    pub(crate) value: u128,
    pub(crate) kind: TxKind,
    pub(crate) sender_signatures: BTreeSet<TxSignature>,
    pub(crate) fee_delegation: Option<FeeDelegation>,
}

impl Transaction {
    fn base(from: Address, to: Option<Address>, value: u128, gas_limit: u64, kind: TxKind) -> Self {
        Transaction {
            nonce: None,
            gas_price: 0,
            gas_limit,
            from,
            to,
            value,
            kind,
            sender_signatures: BTreeSet::new(),
            fee_delegation: None,
        }
    }

    // -----------------------------------------------------------------
    // Constructors
    // -----------------------------------------------------------------

    /// Build a plain value transfer.
    pub fn value_transfer(from: Address, to: Address, value: u128, gas_limit: u64) -> Self {
        Self::base(from, Some(to), value, gas_limit, TxKind::ValueTransfer)
    }

    /// Build a value transfer with a memo payload.
    pub fn value_transfer_memo(
        from: Address,
        to: Address,
        value: u128,
        gas_limit: u64,
        memo: Vec<u8>,
    ) -> Self {
        Self::base(
            from,
            Some(to),
            value,
            gas_limit,
            TxKind::ValueTransferMemo { memo },
        )
    }

    /// Build an account-key update proposing `key` for the sender account.
    pub fn account_update(from: Address, gas_limit: u64, key: AccountKey) -> Self {
        Self::base(from, None, 0, gas_limit, TxKind::AccountUpdate { key })
    }

    /// Build a smart contract deployment.
    ///
    /// The recipient slot is empty for deployments; the contract address is
    /// assigned by the ledger.
    pub fn smart_contract_deploy(
        from: Address,
        value: u128,
        gas_limit: u64,
        payload: Vec<u8>,
        code_format: u8,
    ) -> Self {
        Self::base(
            from,
            None,
            value,
            gas_limit,
            TxKind::SmartContractDeploy {
                payload,
                human_readable: false,
                code_format,
            },
        )
    }

    /// Build a smart contract execution.
    pub fn smart_contract_execution(
        from: Address,
        to: Address,
        value: u128,
        gas_limit: u64,
        payload: Vec<u8>,
    ) -> Self {
        Self::base(
            from,
            Some(to),
            value,
            gas_limit,
            TxKind::SmartContractExecution { payload },
        )
    }

    /// Build a cancellation of the pending transaction with the same nonce.
    pub fn cancel(from: Address, gas_limit: u64) -> Self {
        Self::base(from, None, 0, gas_limit, TxKind::Cancel)
    }

    /// Build a chain-data anchoring transaction.
    pub fn chain_data_anchoring(from: Address, gas_limit: u64, anchored_data: Vec<u8>) -> Self {
        Self::base(
            from,
            None,
            0,
            gas_limit,
            TxKind::ChainDataAnchoring { anchored_data },
        )
    }

    // -----------------------------------------------------------------
    // Builder-style setters
    // -----------------------------------------------------------------

    /// Set the sender-scoped nonce.
    pub fn with_nonce(mut self, nonce: u64) -> Self {
        self.nonce = Some(nonce);
        self
    }

    /// Set the gas price.
    pub fn with_gas_price(mut self, gas_price: u64) -> Self {
        self.gas_price = gas_price;
        self
    }

    /// Turn this transaction into its fee-delegated counterpart.
    ///
    /// Idempotent; an already-delegated transaction keeps its payer state.
    pub fn fee_delegated(mut self) -> Self {
        self.fee_delegation.get_or_insert_with(FeeDelegation::default);
        self
    }

    /// Turn this transaction into its fee-delegated counterpart with a
    /// fee-split ratio.
    pub fn fee_delegated_with_ratio(mut self, ratio: FeeRatio) -> Self {
        let delegation = self.fee_delegation.get_or_insert_with(FeeDelegation::default);
        delegation.fee_ratio = Some(ratio);
        self
    }

    /// Pre-assign the fee payer address.
    ///
    /// Normally the slot is claimed by `sign_as_fee_payer`; a builder that
    /// already knows the payer can assign it up front.
    ///
    /// # Returns
    /// `NotFeeDelegated` when the transaction carries no delegation.
    pub fn with_fee_payer(mut self, fee_payer: Address) -> Result<Self, TransactionError> {
        let delegation = self
            .fee_delegation
            .as_mut()
            .ok_or(TransactionError::NotFeeDelegated)?;
        delegation.fee_payer = Some(fee_payer);
        Ok(self)
    }

    // -----------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------

    /// The sender-scoped nonce, if assigned.
    pub fn nonce(&self) -> Option<u64> {
        self.nonce
    }

    /// The gas price.
    pub fn gas_price(&self) -> u64 {
        self.gas_price
    }

    /// The gas limit.
    pub fn gas_limit(&self) -> u64 {
        self.gas_limit
    }

    /// The sender address.
    pub fn from(&self) -> &Address {
        &self.from
    }

    /// The recipient address; `None` for kinds without a recipient.
    pub fn to(&self) -> Option<&Address> {
        self.to.as_ref()
    }

    /// The transferred native-unit value.
    pub fn value(&self) -> u128 {
        self.value
    }

    /// The kind-specific part of this transaction.
    pub fn kind(&self) -> &TxKind {
        &self.kind
    }

    /// The sender signature set.
    pub fn sender_signatures(&self) -> &BTreeSet<TxSignature> {
        &self.sender_signatures
    }

    /// Whether this transaction carries the fee-delegation capability.
    pub fn is_fee_delegated(&self) -> bool {
        self.fee_delegation.is_some()
    }

    /// The fee payer address, once a payer has claimed the slot.
    pub fn fee_payer(&self) -> Option<&Address> {
        self.fee_delegation.as_ref()?.fee_payer.as_ref()
    }

    /// The fee payer signature set; `None` for non-delegated transactions.
    pub fn fee_payer_signatures(&self) -> Option<&BTreeSet<TxSignature>> {
        Some(&self.fee_delegation.as_ref()?.fee_payer_signatures)
    }

    /// The fee-split ratio, when one was set.
    pub fn fee_ratio(&self) -> Option<FeeRatio> {
        self.fee_delegation.as_ref()?.fee_ratio
    }

    /// The one-byte type tag, including the delegation offset.
    pub fn type_tag(&self) -> u8 {
        let base = self.kind.base_tag();
        match &self.fee_delegation {
            None => base,
            Some(delegation) if delegation.fee_ratio.is_none() => {
                base + TYPE_OFFSET_FEE_DELEGATED
            }
            Some(_) => base + TYPE_OFFSET_FEE_RATIO,
        }
    }

    // -----------------------------------------------------------------
    // Signature insertion
    // -----------------------------------------------------------------

    /// Insert a sender signature. Inserting a duplicate is a no-op.
    pub fn add_sender_signature(&mut self, signature: TxSignature) {
        self.sender_signatures.insert(signature);
    }

    /// Insert a fee payer signature. Inserting a duplicate is a no-op.
    ///
    /// # Returns
    /// `NotFeeDelegated` when the transaction carries no delegation.
    pub fn add_fee_payer_signature(
        &mut self,
        signature: TxSignature,
    ) -> Result<(), TransactionError> {
        let delegation = self
            .fee_delegation
            .as_mut()
            .ok_or(TransactionError::NotFeeDelegated)?;
        delegation.fee_payer_signatures.insert(signature);
        Ok(())
    }

    // -----------------------------------------------------------------
    // Encoding
    // -----------------------------------------------------------------

    /// The ordered field list fed to the codec, excluding the type tag and
    /// excluding signatures.
    ///
    /// Base fields `[nonce, gas_price, gas_limit]` come first, then the
    /// kind-specific fields, then the fee ratio when one is set.
    pub(crate) fn field_values(&self) -> Result<Vec<Rlp>, TransactionError> {
        let nonce = self.nonce.ok_or(TransactionError::MissingNonce)?;
        let mut values = vec![
            Rlp::from_u64(nonce),
            Rlp::from_u64(self.gas_price),
            Rlp::from_u64(self.gas_limit),
        ];

        match &self.kind {
            TxKind::ValueTransfer => {
                values.push(self.to_field());
                values.push(Rlp::from_u128(self.value));
                values.push(Rlp::from_slice(self.from.as_bytes()));
            }
            TxKind::ValueTransferMemo { memo } => {
                values.push(self.to_field());
                values.push(Rlp::from_u128(self.value));
                values.push(Rlp::from_slice(self.from.as_bytes()));
                values.push(Rlp::from_slice(memo));
            }
            TxKind::AccountUpdate { key } => {
                values.push(Rlp::from_slice(self.from.as_bytes()));
                values.push(Rlp::Bytes(key.to_bytes()));
            }
            TxKind::SmartContractDeploy {
                payload,
                human_readable,
                code_format,
            } => {
                values.push(self.to_field());
                values.push(Rlp::from_u128(self.value));
                values.push(Rlp::from_slice(self.from.as_bytes()));
                values.push(Rlp::from_slice(payload));
                values.push(Rlp::from_u64(u64::from(*human_readable)));
                values.push(Rlp::from_u64(*code_format as u64));
            }
            TxKind::SmartContractExecution { payload } => {
                values.push(self.to_field());
                values.push(Rlp::from_u128(self.value));
                values.push(Rlp::from_slice(self.from.as_bytes()));
                values.push(Rlp::from_slice(payload));
            }
            TxKind::Cancel => {
                values.push(Rlp::from_slice(self.from.as_bytes()));
            }
            TxKind::ChainDataAnchoring { anchored_data } => {
                values.push(Rlp::from_slice(self.from.as_bytes()));
                values.push(Rlp::from_slice(anchored_data));
            }
        }

        if let Some(delegation) = &self.fee_delegation {
            if let Some(ratio) = delegation.fee_ratio {
                values.push(Rlp::from_u64(ratio.get() as u64));
            }
        }

        Ok(values)
    }

    /// The recipient field: the address bytes, or the empty string for
    /// kinds without a recipient.
    fn to_field(&self) -> Rlp {
        match &self.to {
            Some(address) => Rlp::from_slice(address.as_bytes()),
            None => Rlp::Bytes(Vec::new()),
        }
    }

    /// Encode the full transaction:
    /// `tag ++ rlp([fields..., sender_sigs, (fee_payer, payer_sigs)?])`.
    ///
    /// Signature lists are always present, even when empty, so the decoder
    /// can rely on fixed positions. An unset fee payer encodes as the
    /// one-byte sentinel.
    ///
    /// # Returns
    /// The raw wire bytes, or `MissingNonce` before a nonce is assigned.
    pub fn to_bytes(&self) -> Result<Vec<u8>, TransactionError> {
        let mut items = self.field_values()?;
        items.push(signature_set_rlp(&self.sender_signatures));

        if let Some(delegation) = &self.fee_delegation {
            items.push(match &delegation.fee_payer {
                Some(address) => Rlp::from_slice(address.as_bytes()),
                None => Rlp::Bytes(vec![FEE_PAYER_SENTINEL]),
            });
            items.push(signature_set_rlp(&delegation.fee_payer_signatures));
        }

        let mut out = vec![self.type_tag()];
        out.extend(rlp::encode(&Rlp::List(items)));
        Ok(out)
    }

    /// Encode the full transaction as a `0x`-prefixed hex string.
    pub fn to_hex(&self) -> Result<String, TransactionError> {
        Ok(format!("0x{}", hex::encode(self.to_bytes()?)))
    }

    /// The transaction hash: Keccak-256 of the full encoding.
    pub fn transaction_hash(&self) -> Result<[u8; 32], TransactionError> {
        Ok(keccak256(&self.to_bytes()?))
    }

    // -----------------------------------------------------------------
    // Signing
    // -----------------------------------------------------------------

    /// The sender signing digest for a given chain.
    ///
    /// `keccak256(rlp([tag ++ rlp(fields), chain_id, '', '']))` - the
    /// trailing triple is the chain-bound placeholder signature, flattened
    /// into the outer list, which binds the digest to one chain before any
    /// real signature exists.
    ///
    /// # Arguments
    /// * `chain_id` - The target chain id.
    pub fn sign_digest(&self, chain_id: u64) -> Result<[u8; 32], TransactionError> {
        let mut scope = vec![self.type_tag()];
        scope.extend(rlp::encode(&Rlp::List(self.field_values()?)));

        let placeholder = TxSignature::placeholder(chain_id);
        let envelope = Rlp::List(vec![
            Rlp::Bytes(scope),
            Rlp::from_u64(placeholder.v()),
            Rlp::Bytes(Vec::new()),
            Rlp::Bytes(Vec::new()),
        ]);
        Ok(keccak256(&rlp::encode(&envelope)))
    }

    /// The fee payer signing digest for a given chain.
    ///
    /// The payer signs the field list, the sender signature list, and its
    /// own address, so the payer signature also authenticates which sender
    /// layer it agreed to pay for:
    /// `keccak256(rlp([tag ++ rlp(fields ++ [sender_sigs]), fee_payer,
    /// chain_id, '', '']))`.
    ///
    /// # Arguments
    /// * `chain_id` - The target chain id.
    ///
    /// # Returns
    /// The digest, or `NotFeeDelegated` when no delegation or payer is set.
    pub fn fee_payer_sign_digest(&self, chain_id: u64) -> Result<[u8; 32], TransactionError> {
        let delegation = self
            .fee_delegation
            .as_ref()
            .ok_or(TransactionError::NotFeeDelegated)?;
        let fee_payer = delegation
            .fee_payer
            .as_ref()
            .ok_or(TransactionError::NotFeeDelegated)?;

        let mut inner = self.field_values()?;
        inner.push(signature_set_rlp(&self.sender_signatures));
        let mut scope = vec![self.type_tag()];
        scope.extend(rlp::encode(&Rlp::List(inner)));

        let placeholder = TxSignature::placeholder(chain_id);
        let envelope = Rlp::List(vec![
            Rlp::Bytes(scope),
            Rlp::from_slice(fee_payer.as_bytes()),
            Rlp::from_u64(placeholder.v()),
            Rlp::Bytes(Vec::new()),
            Rlp::Bytes(Vec::new()),
        ]);
        Ok(keccak256(&rlp::encode(&envelope)))
    }

    /// Sign as the sender and insert the signature.
    ///
    /// Fails with `MissingNonce` before a nonce is assigned; a nonce is
    /// never silently defaulted. Insertion is idempotent: signing twice
    /// with the same credential and chain id leaves one signature.
    ///
    /// # Arguments
    /// * `credential` - The sender's signing credential.
    /// * `chain_id` - The target chain id, folded into the discriminant.
    ///
    /// # Returns
    /// The re-encoded raw transaction and the signature just produced.
    pub fn sign(
        &mut self,
        credential: &Credential,
        chain_id: u64,
    ) -> Result<RawTransaction, TransactionError> {
        let digest = self.sign_digest(chain_id)?;
        let recoverable = credential.sign_digest(&digest)?;
        let signature = TxSignature::from_recoverable(&recoverable, chain_id);
        self.sender_signatures.insert(signature);
        Ok(RawTransaction {
            bytes: self.to_bytes()?,
            signature,
        })
    }

    /// Sign as the fee payer and insert the signature.
    ///
    /// Claims the payer slot when it is still unset. A second payer
    /// attempting to sign after a different payer claimed the slot fails
    /// with `FeePayerMismatch` rather than silently overwriting.
    ///
    /// # Arguments
    /// * `credential` - The payer's signing credential.
    /// * `chain_id` - The target chain id, folded into the discriminant.
    ///
    /// # Returns
    /// The re-encoded raw transaction and the signature just produced.
    pub fn sign_as_fee_payer(
        &mut self,
        credential: &Credential,
        chain_id: u64,
    ) -> Result<RawTransaction, TransactionError> {
        if self.nonce.is_none() {
            return Err(TransactionError::MissingNonce);
        }
        let payer = *credential.address();
        match self.fee_delegation.as_mut() {
            None => return Err(TransactionError::NotFeeDelegated),
            Some(delegation) => match delegation.fee_payer {
                None => delegation.fee_payer = Some(payer),
                Some(current) if current == payer => {}
                Some(current) => {
                    return Err(TransactionError::FeePayerMismatch {
                        current,
                        attempted: payer,
                    });
                }
            },
        }

        let digest = self.fee_payer_sign_digest(chain_id)?;
        let recoverable = credential.sign_digest(&digest)?;
        let signature = TxSignature::from_recoverable(&recoverable, chain_id);
        self.add_fee_payer_signature(signature)?;
        Ok(RawTransaction {
            bytes: self.to_bytes()?,
            signature,
        })
    }
}

/// Encode a signature set as a list of `[v, r, s]` tuples.
pub(crate) fn signature_set_rlp(signatures: &BTreeSet<TxSignature>) -> Rlp {
    Rlp::List(signatures.iter().map(TxSignature::to_rlp).collect())
}

// ---------------------------------------------------------------------------
// Raw transaction
// ---------------------------------------------------------------------------

/// The result of a signing step: the re-encoded wire bytes plus the
/// signature produced by this signer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTransaction {
    /// The full wire encoding, ready to hand to the next signer or submit.
    pub bytes: Vec<u8>,
    /// The signature this signing step produced.
    pub signature: TxSignature,
}

impl RawTransaction {
    /// The wire bytes as a `0x`-prefixed hex string.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(&self.bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::{TYPE_CANCEL, TYPE_VALUE_TRANSFER};

    fn addr(byte: u8) -> Address {
        Address::new([byte; 20])
    }

    #[test]
    fn test_type_tag_reflects_delegation_level() {
        let tx = Transaction::value_transfer(addr(1), addr(2), 1, 21_000);
        assert_eq!(tx.type_tag(), TYPE_VALUE_TRANSFER);

        let delegated = tx.clone().fee_delegated();
        assert_eq!(delegated.type_tag(), TYPE_VALUE_TRANSFER + 1);

        let with_ratio = tx.fee_delegated_with_ratio(FeeRatio::new(30).unwrap());
        assert_eq!(with_ratio.type_tag(), TYPE_VALUE_TRANSFER + 2);
    }

    #[test]
    fn test_fee_ratio_bounds() {
        assert!(matches!(
            FeeRatio::new(0),
            Err(TransactionError::InvalidFeeRatio(0))
        ));
        assert!(matches!(
            FeeRatio::new(100),
            Err(TransactionError::InvalidFeeRatio(100))
        ));
        assert_eq!(FeeRatio::new(1).unwrap().get(), 1);
        assert_eq!(FeeRatio::new(99).unwrap().get(), 99);
    }

    #[test]
    fn test_encoding_requires_nonce() {
        let tx = Transaction::cancel(addr(1), 21_000).with_gas_price(25);
        assert!(matches!(tx.to_bytes(), Err(TransactionError::MissingNonce)));
        assert!(matches!(
            tx.sign_digest(1),
            Err(TransactionError::MissingNonce)
        ));
    }

    #[test]
    fn test_cancel_wire_layout() {
        let tx = Transaction::cancel(addr(0xaa), 100)
            .with_nonce(0)
            .with_gas_price(1);
        let bytes = tx.to_bytes().unwrap();

        // tag ++ rlp([0, 1, 100, from, []])
        assert_eq!(bytes[0], TYPE_CANCEL);
        let expected_body = rlp::encode(&Rlp::List(vec![
            Rlp::from_u64(0),
            Rlp::from_u64(1),
            Rlp::from_u64(100),
            Rlp::from_slice(addr(0xaa).as_bytes()),
            Rlp::List(vec![]),
        ]));
        assert_eq!(&bytes[1..], &expected_body[..]);
    }

    #[test]
    fn test_unset_fee_payer_encodes_as_sentinel() {
        let tx = Transaction::value_transfer(addr(1), addr(2), 5, 21_000)
            .with_nonce(7)
            .with_gas_price(25)
            .fee_delegated();
        let bytes = tx.to_bytes().unwrap();
        let body = rlp::decode(&bytes[1..]).unwrap();
        let items = body.as_list().unwrap();

        // [nonce, gas_price, gas_limit, to, value, from, sender_sigs, payer, payer_sigs]
        assert_eq!(items.len(), 9);
        assert_eq!(items[7].as_bytes(), Some(&[FEE_PAYER_SENTINEL][..]));
        assert_eq!(items[8].as_list(), Some(&[][..]));
    }

    #[test]
    fn test_fee_ratio_sits_at_end_of_field_list() {
        let tx = Transaction::value_transfer(addr(1), addr(2), 5, 21_000)
            .with_nonce(7)
            .with_gas_price(25)
            .fee_delegated_with_ratio(FeeRatio::new(30).unwrap());
        let fields = tx.field_values().unwrap();
        assert_eq!(fields.last().unwrap().to_u64().unwrap(), 30);
    }

    #[test]
    fn test_sender_digest_depends_on_chain_id() {
        let tx = Transaction::value_transfer(addr(1), addr(2), 1, 21_000)
            .with_nonce(0)
            .with_gas_price(25);
        assert_ne!(
            tx.sign_digest(1000).unwrap(),
            tx.sign_digest(1001).unwrap()
        );
    }

    #[test]
    fn test_fee_payer_digest_covers_sender_signatures() {
        let mut tx = Transaction::value_transfer(addr(1), addr(2), 1, 21_000)
            .with_nonce(0)
            .with_gas_price(25)
            .fee_delegated();
        tx.fee_delegation.as_mut().unwrap().fee_payer = Some(addr(9));

        let before = tx.fee_payer_sign_digest(1000).unwrap();
        tx.add_sender_signature(TxSignature::new(2073, [0x11; 32], [0x22; 32]));
        let after = tx.fee_payer_sign_digest(1000).unwrap();
        assert_ne!(before, after);
    }
}
