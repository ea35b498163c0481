//! Integration tests for JSON export.

use case_export::{ExportOutcome, export_json};
use case_model::Record;
use serde_json::json;

#[test]
fn empty_input_signals_nothing_to_export() {
    assert_eq!(export_json(&[]).expect("encode"), ExportOutcome::NothingToExport);
}

#[test]
fn records_are_pretty_printed_in_field_order() {
    let records: Vec<Record> = serde_json::from_value(json!([
        {"last_name": "Smith", "first_name": "Ann", "tags": ["a", "b"]},
        {"id": 2, "meta": {"z": 1, "a": null}}
    ]))
    .expect("records");
    let text = export_json(&records).expect("encode").ready().expect("document");
    insta::assert_snapshot!(text, @r#"
    [
      {
        "last_name": "Smith",
        "first_name": "Ann",
        "tags": [
          "a",
          "b"
        ]
      },
      {
        "id": 2,
        "meta": {
          "z": 1,
          "a": null
        }
      }
    ]
    "#);
}

#[test]
fn falsy_values_are_kept_in_json() {
    let record = Record::new().with("count", 0_i64).with("flag", false);
    let text = export_json(&[record]).expect("encode").ready().expect("document");
    let round: serde_json::Value = serde_json::from_str(&text).expect("parse");
    assert_eq!(round, json!([{"count": 0, "flag": false}]));
}

#[test]
fn integral_floats_lose_their_fraction() {
    let records: Vec<Record> =
        serde_json::from_value(json!([{"ratio": 3.0, "meta": {"score": 2.0, "half": 0.5}}]))
            .expect("records");
    let text = export_json(&records).expect("encode").ready().expect("document");
    insta::assert_snapshot!(text, @r#"
    [
      {
        "ratio": 3,
        "meta": {
          "score": 2,
          "half": 0.5
        }
      }
    ]
    "#);
}
