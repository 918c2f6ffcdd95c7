use proptest::prelude::*;

use klay_primitives::Address;
use klay_transaction::{decode, decode_hex, FeeRatio, Transaction, TxSignature};

/// Strategy to generate an arbitrary address.
fn arb_address() -> impl Strategy<Value = Address> {
    prop::array::uniform20(any::<u8>()).prop_map(Address::new)
}

/// Strategy to generate a structurally valid chain-bound signature.
fn arb_signature() -> impl Strategy<Value = TxSignature> {
    (
        35u64..2_000_000,
        prop::array::uniform32(any::<u8>()),
        prop::array::uniform32(any::<u8>()),
    )
        .prop_map(|(v, r, s)| TxSignature::new(v, r, s))
}

/// Strategy to generate a transaction of any kind (account updates are
/// exercised by unit tests since they need valid curve points), with 0-3
/// sender signatures and, when delegated, 0-2 payer signatures, an
/// optional payer address, and an optional fee ratio.
fn arb_transaction() -> impl Strategy<Value = Transaction> {
    let fields = (
        arb_address(),
        arb_address(),
        any::<u128>(),
        any::<u64>(),
        any::<u64>(),
        any::<u64>(),
        prop::collection::vec(any::<u8>(), 0..48),
        0u8..6,
    );
    let delegation = prop::option::of((
        1u8..=99,
        any::<bool>(),
        prop::option::of(arb_address()),
        prop::collection::vec(arb_signature(), 0..3),
    ));

    (fields, prop::collection::vec(arb_signature(), 0..4), delegation).prop_map(
        |(
            (from, to, value, gas_limit, nonce, gas_price, payload, selector),
            sender_sigs,
            delegation,
        )| {
            let mut tx = match selector {
                0 => Transaction::value_transfer(from, to, value, gas_limit),
                1 => Transaction::value_transfer_memo(from, to, value, gas_limit, payload),
                2 => Transaction::smart_contract_deploy(from, value, gas_limit, payload, 0),
                3 => Transaction::smart_contract_execution(from, to, value, gas_limit, payload),
                4 => Transaction::cancel(from, gas_limit),
                _ => Transaction::chain_data_anchoring(from, gas_limit, payload),
            }
            .with_nonce(nonce)
            .with_gas_price(gas_price);

            if let Some((ratio, use_ratio, fee_payer, payer_sigs)) = delegation {
                tx = if use_ratio {
                    tx.fee_delegated_with_ratio(FeeRatio::new(ratio).unwrap())
                } else {
                    tx.fee_delegated()
                };
                if let Some(payer) = fee_payer {
                    tx = tx.with_fee_payer(payer).unwrap();
                }
                for sig in payer_sigs {
                    tx.add_fee_payer_signature(sig).unwrap();
                }
            }
            for sig in sender_sigs {
                tx.add_sender_signature(sig);
            }
            tx
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(96))]

    #[test]
    fn transaction_decode_encode_roundtrip(tx in arb_transaction()) {
        let bytes = tx.to_bytes().unwrap();
        let decoded = decode(&bytes).unwrap();
        prop_assert_eq!(decoded, tx);
    }

    #[test]
    fn transaction_hex_roundtrip(tx in arb_transaction()) {
        let hex_str = tx.to_hex().unwrap();
        let decoded = decode_hex(&hex_str).unwrap();
        prop_assert_eq!(decoded.to_hex().unwrap(), hex_str);
    }

    #[test]
    fn transaction_reencode_is_stable(tx in arb_transaction()) {
        let first = tx.to_bytes().unwrap();
        let second = decode(&first).unwrap().to_bytes().unwrap();
        prop_assert_eq!(first, second);
    }
}
