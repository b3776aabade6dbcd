use congress_lib::model::{Bill, BillType, BoundCongressionalRecord};
use congress_lib::{map_list, FromJson, MalformedReason};
use serde_json::Value;

fn bill_json() -> Value {
    let body: Value = serde_json::from_str(include_str!("fixtures/bill_hr3076.json")).unwrap();
    body["bill"].clone()
}

#[test]
fn bill_identity_matches_source_json() {
    let raw = bill_json();
    let bill = Bill::from_json(&raw).unwrap();

    assert_eq!(bill.congress as u64, raw["congress"].as_u64().unwrap());
    assert_eq!(bill.bill_type.code(), raw["type"].as_str().unwrap());
    assert_eq!(bill.number.to_string(), raw["number"].as_str().unwrap());
}

#[test]
fn unknown_keys_are_ignored() {
    // The fixture carries `cboCostEstimates`, which has no field on `Bill`.
    let raw = bill_json();
    assert!(raw.get("cboCostEstimates").is_some());
    assert!(Bill::from_json(&raw).is_ok());
}

#[test]
fn mapping_is_idempotent() {
    let raw = bill_json();
    let first = Bill::from_json(&raw).unwrap();
    let second = Bill::from_json(&raw).unwrap();
    assert_eq!(first, second);
}

#[test]
fn missing_identity_vs_missing_optional() {
    let mut raw = bill_json();
    raw.as_object_mut().unwrap().remove("policyArea");
    let bill = Bill::from_json(&raw).unwrap();
    assert!(bill.policy_area.is_none());
    assert_eq!(bill.bill_type, BillType::Hr);

    raw.as_object_mut().unwrap().remove("number");
    let err = Bill::from_json(&raw).unwrap_err();
    assert_eq!(err.key, "number");
    assert_eq!(err.reason, MalformedReason::Missing);
}

#[test]
fn absent_sponsors_differ_from_empty_sponsors() {
    let mut raw = bill_json();
    raw["sponsors"] = Value::Array(vec![]);
    assert_eq!(Bill::from_json(&raw).unwrap().sponsors, Some(vec![]));

    raw.as_object_mut().unwrap().remove("sponsors");
    assert_eq!(Bill::from_json(&raw).unwrap().sponsors, None);
}

#[test]
fn record_list_keeps_api_order() {
    let body: Value = serde_json::from_str(include_str!("fixtures/records_2023_01.json")).unwrap();
    let issues = body["Results"]["Issues"].as_array().unwrap();
    let records: Vec<BoundCongressionalRecord> = map_list(issues).unwrap();
    let order: Vec<&str> = records.iter().map(|r| r.issue.as_str()).collect();
    assert_eq!(order, vec!["1", "2", "3"]);
}
