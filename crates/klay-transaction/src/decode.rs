//! Raw-transaction decoding.
//!
//! The inverse of the codec: given wire bytes (or hex), reconstruct a
//! fully typed transaction with every previously collected signature
//! intact. Missing trailing positions mean "no signatures yet" / "no payer
//! yet" so partially-signed artifacts decode cleanly; structurally
//! malformed values fail with an error naming the field.

use std::collections::BTreeSet;

use klay_primitives::rlp::{self, Rlp};
use klay_primitives::Address;

use crate::account_key::AccountKey;
use crate::kind::{
    TxKind, TYPE_ACCOUNT_UPDATE, TYPE_CANCEL, TYPE_CHAIN_DATA_ANCHORING,
    TYPE_OFFSET_FEE_RATIO, TYPE_SMART_CONTRACT_DEPLOY, TYPE_SMART_CONTRACT_EXECUTION,
    TYPE_VALUE_TRANSFER, TYPE_VALUE_TRANSFER_MEMO,
};
use crate::signature::TxSignature;
use crate::transaction::{FeeDelegation, FeeRatio, Transaction, FEE_PAYER_SENTINEL};
use crate::TransactionError;

/// Decode a raw transaction from a hex string with an optional `0x` prefix.
///
/// # Arguments
/// * `raw` - The hex-encoded wire bytes.
///
/// # Returns
/// The reconstructed transaction, or a `DecodeError`.
pub fn decode_hex(raw: &str) -> Result<Transaction, TransactionError> {
    let stripped = raw.strip_prefix("0x").unwrap_or(raw);
    let bytes = hex::decode(stripped).map_err(|e| TransactionError::DecodeError {
        field: "raw_transaction",
        reason: format!("invalid hex: {}", e),
    })?;
    decode(&bytes)
}

/// Decode a raw transaction from wire bytes.
///
/// Reads the type tag, dispatches to the matching kind, maps list
/// positions to the kind's declared fields, then collects the sender
/// signature list and (for delegated types) the fee payer trailer.
///
/// # Arguments
/// * `raw` - The wire bytes: `tag ++ rlp(list)`.
///
/// # Returns
/// The reconstructed transaction, or a `DecodeError` naming the failing
/// field.
pub fn decode(raw: &[u8]) -> Result<Transaction, TransactionError> {
    let (&tag, rest) = raw.split_first().ok_or_else(|| TransactionError::DecodeError {
        field: "type_tag",
        reason: "empty input".to_string(),
    })?;
    let (base_tag, delegation_level) = split_tag(tag)?;

    let body = rlp::decode(rest).map_err(|e| TransactionError::DecodeError {
        field: "transaction_body",
        reason: e.to_string(),
    })?;
    let values = body
        .as_list()
        .ok_or_else(|| TransactionError::DecodeError {
            field: "transaction_body",
            reason: "expected a list".to_string(),
        })?;

    let nonce = u64_field(values, 0, "nonce")?;
    let gas_price = u64_field(values, 1, "gas_price")?;
    let gas_limit = u64_field(values, 2, "gas_limit")?;

    let (kind, from, to, value, mut offset) = decode_kind_fields(base_tag, values)?;

    let fee_delegation = match delegation_level {
        0 => None,
        _ => {
            let fee_ratio = if delegation_level == TYPE_OFFSET_FEE_RATIO {
                let percent = u64_field(values, offset, "fee_ratio")?;
                let percent =
                    u8::try_from(percent).map_err(|_| TransactionError::DecodeError {
                        field: "fee_ratio",
                        reason: format!("value {} exceeds one byte", percent),
                    })?;
                offset += 1;
                Some(FeeRatio::new(percent)?)
            } else {
                None
            };
            Some((fee_ratio, offset))
        }
    };

    let sender_signatures = signature_set_at(values, offset, "sender_signatures")?;

    let fee_delegation = match fee_delegation {
        None => None,
        Some((fee_ratio, offset)) => {
            let fee_payer = fee_payer_at(values, offset + 1)?;
            let fee_payer_signatures =
                signature_set_at(values, offset + 2, "fee_payer_signatures")?;
            Some(FeeDelegation {
                fee_payer,
                fee_payer_signatures,
                fee_ratio,
            })
        }
    };

    Ok(Transaction {
        nonce: Some(nonce),
        gas_price,
        gas_limit,
        from,
        to,
        value,
        kind,
        sender_signatures,
        fee_delegation,
    })
}

/// Split a type tag into its base tag and delegation level (0, 1, or 2).
fn split_tag(tag: u8) -> Result<(u8, u8), TransactionError> {
    let level = tag & 0x07;
    let base = tag & !0x07;
    let known = matches!(
        base,
        TYPE_VALUE_TRANSFER
            | TYPE_VALUE_TRANSFER_MEMO
            | TYPE_ACCOUNT_UPDATE
            | TYPE_SMART_CONTRACT_DEPLOY
            | TYPE_SMART_CONTRACT_EXECUTION
            | TYPE_CANCEL
            | TYPE_CHAIN_DATA_ANCHORING
    );
    if !known || level > TYPE_OFFSET_FEE_RATIO {
        return Err(TransactionError::DecodeError {
            field: "type_tag",
            reason: format!("unknown transaction type tag 0x{:02x}", tag),
        });
    }
    Ok((base, level))
}

/// Decode the kind-specific fields starting at position 3.
///
/// # Returns
/// `(kind, from, to, value, next_position)` where `next_position` is the
/// first position after the kind's field list.
fn decode_kind_fields(
    base_tag: u8,
    values: &[Rlp],
) -> Result<(TxKind, Address, Option<Address>, u128, usize), TransactionError> {
    match base_tag {
        TYPE_VALUE_TRANSFER => {
            let to = address_field(values, 3, "to")?;
            let value = u128_field(values, 4, "value")?;
            let from = address_field(values, 5, "from")?;
            Ok((TxKind::ValueTransfer, from, Some(to), value, 6))
        }
        TYPE_VALUE_TRANSFER_MEMO => {
            let to = address_field(values, 3, "to")?;
            let value = u128_field(values, 4, "value")?;
            let from = address_field(values, 5, "from")?;
            let memo = bytes_field(values, 6, "memo")?.to_vec();
            Ok((
                TxKind::ValueTransferMemo { memo },
                from,
                Some(to),
                value,
                7,
            ))
        }
        TYPE_ACCOUNT_UPDATE => {
            let from = address_field(values, 3, "from")?;
            let key_bytes = bytes_field(values, 4, "account_key")?;
            let key = AccountKey::from_bytes(key_bytes)?;
            Ok((TxKind::AccountUpdate { key }, from, None, 0, 5))
        }
        TYPE_SMART_CONTRACT_DEPLOY => {
            let to = optional_address_field(values, 3, "to")?;
            let value = u128_field(values, 4, "value")?;
            let from = address_field(values, 5, "from")?;
            let payload = bytes_field(values, 6, "payload")?.to_vec();
            let human_readable = u64_field(values, 7, "human_readable")? != 0;
            let code_format = u64_field(values, 8, "code_format")? as u8;
            Ok((
                TxKind::SmartContractDeploy {
                    payload,
                    human_readable,
                    code_format,
                },
                from,
                to,
                value,
                9,
            ))
        }
        TYPE_SMART_CONTRACT_EXECUTION => {
            let to = address_field(values, 3, "to")?;
            let value = u128_field(values, 4, "value")?;
            let from = address_field(values, 5, "from")?;
            let payload = bytes_field(values, 6, "payload")?.to_vec();
            Ok((
                TxKind::SmartContractExecution { payload },
                from,
                Some(to),
                value,
                7,
            ))
        }
        TYPE_CANCEL => {
            let from = address_field(values, 3, "from")?;
            Ok((TxKind::Cancel, from, None, 0, 4))
        }
        TYPE_CHAIN_DATA_ANCHORING => {
            let from = address_field(values, 3, "from")?;
            let anchored_data = bytes_field(values, 4, "anchored_data")?.to_vec();
            Ok((
                TxKind::ChainDataAnchoring { anchored_data },
                from,
                None,
                0,
                5,
            ))
        }
        // split_tag only returns the tags matched above.
        _ => Err(TransactionError::DecodeError {
            field: "type_tag",
            reason: format!("unknown base tag 0x{:02x}", base_tag),
        }),
    }
}

// ---------------------------------------------------------------------------
// Positional field helpers
// ---------------------------------------------------------------------------

/// Fetch a required position, failing with the field's name when absent.
fn item<'a>(
    values: &'a [Rlp],
    index: usize,
    field: &'static str,
) -> Result<&'a Rlp, TransactionError> {
    values.get(index).ok_or_else(|| TransactionError::DecodeError {
        field,
        reason: format!("missing field at position {}", index),
    })
}

/// A required flat byte string.
fn bytes_field<'a>(
    values: &'a [Rlp],
    index: usize,
    field: &'static str,
) -> Result<&'a [u8], TransactionError> {
    item(values, index, field)?
        .as_bytes()
        .ok_or_else(|| TransactionError::DecodeError {
            field,
            reason: "expected byte string, found list".to_string(),
        })
}

/// A required unsigned integer fitting 64 bits.
fn u64_field(
    values: &[Rlp],
    index: usize,
    field: &'static str,
) -> Result<u64, TransactionError> {
    item(values, index, field)?
        .to_u64()
        .map_err(|e| TransactionError::DecodeError {
            field,
            reason: e.to_string(),
        })
}

/// A required unsigned integer fitting 128 bits.
fn u128_field(
    values: &[Rlp],
    index: usize,
    field: &'static str,
) -> Result<u128, TransactionError> {
    item(values, index, field)?
        .to_u128()
        .map_err(|e| TransactionError::DecodeError {
            field,
            reason: e.to_string(),
        })
}

/// A required 20-byte address.
fn address_field(
    values: &[Rlp],
    index: usize,
    field: &'static str,
) -> Result<Address, TransactionError> {
    let bytes = bytes_field(values, index, field)?;
    Address::from_bytes(bytes).map_err(|e| TransactionError::DecodeError {
        field,
        reason: e.to_string(),
    })
}

/// An address position that may be the empty string (no recipient).
fn optional_address_field(
    values: &[Rlp],
    index: usize,
    field: &'static str,
) -> Result<Option<Address>, TransactionError> {
    let bytes = bytes_field(values, index, field)?;
    if bytes.is_empty() {
        return Ok(None);
    }
    Ok(Some(Address::from_bytes(bytes).map_err(|e| {
        TransactionError::DecodeError {
            field,
            reason: e.to_string(),
        }
    })?))
}

/// A signature list position. An absent position is an empty set; a
/// present position must be a list of valid `[v, r, s]` tuples.
fn signature_set_at(
    values: &[Rlp],
    index: usize,
    field: &'static str,
) -> Result<BTreeSet<TxSignature>, TransactionError> {
    let Some(value) = values.get(index) else {
        return Ok(BTreeSet::new());
    };
    let entries = value.as_list().ok_or_else(|| TransactionError::DecodeError {
        field,
        reason: "expected a signature list".to_string(),
    })?;

    let mut signatures = BTreeSet::new();
    for entry in entries {
        signatures.insert(TxSignature::from_rlp(entry)?);
    }
    Ok(signatures)
}

/// The fee payer position. An absent position or the one-byte sentinel
/// means no payer has claimed the slot yet.
fn fee_payer_at(values: &[Rlp], index: usize) -> Result<Option<Address>, TransactionError> {
    let Some(value) = values.get(index) else {
        return Ok(None);
    };
    let bytes = value.as_bytes().ok_or_else(|| TransactionError::DecodeError {
        field: "fee_payer",
        reason: "expected byte string, found list".to_string(),
    })?;
    if bytes == [FEE_PAYER_SENTINEL] || bytes.is_empty() {
        return Ok(None);
    }
    Ok(Some(Address::from_bytes(bytes).map_err(|e| {
        TransactionError::DecodeError {
            field: "fee_payer",
            reason: e.to_string(),
        }
    })?))
}
