//! Payload boundary tests.
//!
//! These pin the contract between decoded logs and the event enum:
//! - Every variant has a distinct snake_case event_type
//! - Decoded `{ event, args }` payloads deserialize by field name
//! - Field order in the payload does not matter
//! - Unknown event kinds are rejected at decode time

use alloy_primitives::{Address, U256};
use beanstalk_events::{ChainEvent, Eventlike, FarmerEvent};
use serde_json::json;

fn farmer() -> Address {
    Address::repeat_byte(0xfa)
}

fn bean() -> Address {
    Address::repeat_byte(0xbe)
}

fn one_of_each() -> Vec<FarmerEvent> {
    vec![
        FarmerEvent::AddDeposit {
            account: farmer(),
            token: bean(),
            season: 6074,
            amount: U256::from(1u64),
            bdv: U256::from(1u64),
        },
        FarmerEvent::RemoveDeposit {
            account: farmer(),
            token: bean(),
            season: 6074,
            amount: U256::from(1u64),
            bdv: U256::from(1u64),
        },
        FarmerEvent::RemoveDeposits {
            account: farmer(),
            token: bean(),
            seasons: vec![6074],
            amounts: vec![U256::from(1u64)],
            amount: U256::from(1u64),
            bdvs: vec![U256::from(1u64)],
        },
        FarmerEvent::AddWithdrawal {
            account: farmer(),
            token: bean(),
            season: 6074,
            amount: U256::from(1u64),
        },
        FarmerEvent::RemoveWithdrawal {
            account: farmer(),
            token: bean(),
            season: 6074,
            amount: U256::from(1u64),
        },
        FarmerEvent::RemoveWithdrawals {
            account: farmer(),
            token: bean(),
            seasons: vec![6074, 6100],
            amount: U256::from(2u64),
        },
        FarmerEvent::Sow {
            account: farmer(),
            index: U256::from(10u64),
            beans: U256::from(1u64),
            pods: U256::from(42u64),
        },
        FarmerEvent::Harvest {
            account: farmer(),
            plots: vec![U256::from(10u64)],
            beans: U256::from(5u64),
        },
        FarmerEvent::PlotTransfer {
            from: farmer(),
            to: Address::repeat_byte(0x01),
            id: U256::from(10u64),
            pods: U256::from(42u64),
        },
    ]
}

#[test]
fn event_types_are_unique_snake_case() {
    let events = one_of_each();
    let mut types: Vec<&str> = events.iter().map(|e| e.event_type()).collect();
    for t in &types {
        assert!(
            t.chars().all(|c| c.is_ascii_lowercase() || c == '_'),
            "{t} is not snake_case"
        );
    }
    types.sort();
    types.dedup();
    assert_eq!(types.len(), events.len());
}

#[test]
fn payload_uses_event_and_args_keys() {
    let payload = FarmerEvent::AddWithdrawal {
        account: farmer(),
        token: bean(),
        season: 6074,
        amount: U256::from(1000u64),
    }
    .to_payload();

    assert_eq!(payload["event"], "AddWithdrawal");
    assert_eq!(payload["args"]["season"], 6074);
    assert!(payload["args"].get("token").is_some());
}

#[test]
fn every_variant_survives_payload_round_trip() {
    for event in one_of_each() {
        let back = FarmerEvent::from_payload(&event.to_payload()).unwrap();
        assert_eq!(back, event);
    }
}

#[test]
fn decodes_named_fields_in_any_order() {
    let payload = json!({
        "event": "AddDeposit",
        "args": {
            "bdv": "900000000",
            "amount": "1000000000000000000000",
            "season": 6100,
            "token": "0xbebebebebebebebebebebebebebebebebebebebe",
            "account": "0xfafafafafafafafafafafafafafafafafafafafa"
        }
    });

    let event = FarmerEvent::from_payload(&payload).unwrap();
    match event {
        FarmerEvent::AddDeposit {
            account,
            token,
            season,
            amount,
            bdv,
        } => {
            assert_eq!(account, farmer());
            assert_eq!(token, bean());
            assert_eq!(season, 6100);
            assert_eq!(amount, "1000000000000000000000".parse::<U256>().unwrap());
            assert_eq!(bdv, U256::from(900_000_000u64));
        }
        other => panic!("expected AddDeposit, got {other:?}"),
    }
}

#[test]
fn remove_deposits_without_bdvs_still_decodes() {
    let payload = json!({
        "event": "RemoveDeposits",
        "args": {
            "account": "0xfafafafafafafafafafafafafafafafafafafafa",
            "token": "0xbebebebebebebebebebebebebebebebebebebebe",
            "seasons": [6074, 6100],
            "amounts": ["10", "20"],
            "amount": "30"
        }
    });

    let FarmerEvent::RemoveDeposits { bdvs, seasons, .. } = FarmerEvent::from_payload(&payload).unwrap() else {
        panic!("expected RemoveDeposits");
    };
    assert!(bdvs.is_empty());
    assert_eq!(seasons, vec![6074, 6100]);
}

#[test]
fn unknown_event_kind_is_rejected() {
    let payload = json!({ "event": "Plant", "args": { "account": "0xfafafafafafafafafafafafafafafafafafafafa" } });
    assert!(FarmerEvent::from_payload(&payload).is_err());
}

#[test]
fn token_scope_only_for_silo_events() {
    for event in one_of_each() {
        let is_field = matches!(
            event,
            FarmerEvent::Sow { .. } | FarmerEvent::Harvest { .. } | FarmerEvent::PlotTransfer { .. }
        );
        assert_eq!(event.token().is_none(), is_field, "{}", event.event_type());
    }
}

#[test]
fn chain_event_decodes_with_position() {
    let raw = json!({
        "block_number": 15_300_000,
        "log_index": 7,
        "log": {
            "event": "Sow",
            "args": {
                "account": "0xfafafafafafafafafafafafafafafafafafafafa",
                "index": "737663715081254",
                "beans": "1000000",
                "pods": "57980000"
            }
        }
    });

    let event: ChainEvent = serde_json::from_value(raw).unwrap();
    assert_eq!(event.position().block_number, 15_300_000);
    assert_eq!(event.position().log_index, 7);
    assert_eq!(event.log.event_type(), "sow");
}
