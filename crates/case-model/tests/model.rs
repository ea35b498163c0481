//! Tests for case-model types.

use case_model::{
    CaseFilter, FieldValue, ModelError, Record, header_union, parse_records, parse_response,
};

#[test]
fn record_keeps_source_field_order() {
    let record: Record =
        serde_json::from_str(r#"{"zeta": 1, "alpha": "a", "mid": [1, 2]}"#).expect("parse");
    let names: Vec<&str> = record.field_names().collect();
    assert_eq!(names, vec!["zeta", "alpha", "mid"]);
}

#[test]
fn duplicate_key_keeps_first_position_and_last_value() {
    let record: Record =
        serde_json::from_str(r#"{"a": 1, "b": 2, "a": 3}"#).expect("parse");
    let names: Vec<&str> = record.field_names().collect();
    assert_eq!(names, vec!["a", "b"]);
    assert_eq!(record.get("a"), Some(&FieldValue::from(3_i64)));
}

#[test]
fn record_rejects_non_object() {
    let error = serde_json::from_str::<Record>("[1, 2]").expect_err("array is not a record");
    assert!(error.to_string().contains("record must be a JSON object"));
}

#[test]
fn record_serializes_in_field_order() {
    let record = Record::new()
        .with("name", "Ann")
        .with("count", 2_i64)
        .with("active", true);
    let json = serde_json::to_string(&record).expect("serialize");
    assert_eq!(json, r#"{"name":"Ann","count":2,"active":true}"#);
}

#[test]
fn field_values_map_from_json_shapes() {
    let record: Record = serde_json::from_str(
        r#"{"n": null, "b": false, "x": 1.5, "t": "hi", "l": ["a"], "m": {"k": 1}}"#,
    )
    .expect("parse");
    let kinds: Vec<&str> = record.iter().map(|(_, value)| value.kind()).collect();
    assert_eq!(kinds, vec!["null", "boolean", "number", "text", "list", "map"]);
}

#[test]
fn header_union_is_first_seen_order() {
    let records = vec![
        Record::new().with("name", "Ann").with("tags", "x"),
        Record::new().with("city", "NYC").with("name", "Bo"),
        Record::new().with("tags", "y").with("zip", "10001"),
    ];
    assert_eq!(header_union(&records), vec!["name", "tags", "city", "zip"]);
}

#[test]
fn header_union_of_nothing_is_empty() {
    assert!(header_union(&[]).is_empty());
}

#[test]
fn parse_records_accepts_array_and_envelope() {
    let from_array = parse_records(r#"[{"id": 1}, {"id": 2}]"#).expect("array");
    assert_eq!(from_array.len(), 2);

    let from_envelope = parse_records(r#"{"cases": [{"id": 1}], "total": 1}"#).expect("envelope");
    assert_eq!(from_envelope.len(), 1);
    assert_eq!(from_envelope[0].get("id"), Some(&FieldValue::from(1_i64)));
}

#[test]
fn parse_records_treats_missing_cases_as_empty() {
    assert!(parse_records("{}").expect("no cases").is_empty());
    assert!(parse_records(r#"{"cases": null}"#).expect("null cases").is_empty());
}

#[test]
fn parse_records_rejects_scalars() {
    let error = parse_records("42").expect_err("scalar document");
    assert!(matches!(error, ModelError::UnexpectedDocument { found: "number" }));

    let error = parse_records(r#"{"cases": "nope"}"#).expect_err("string cases");
    assert!(matches!(error, ModelError::UnexpectedDocument { found: "string" }));

    let error = parse_records(r#"["nope"]"#).expect_err("string record");
    assert!(matches!(error, ModelError::NotAnObject { found: "string" }));
}

#[test]
fn parse_response_reads_only_the_cases_field() {
    let cases = parse_response(r#"{"cases": [{"id": 1}], "total": 1}"#).expect("envelope");
    assert_eq!(cases.len(), 1);

    for body in [
        "{}",
        r#"{"cases": null}"#,
        r#"{"cases": false}"#,
        r#"{"cases": ""}"#,
        r#"[{"id": 1}]"#,
    ] {
        assert!(parse_response(body).expect("empty").is_empty(), "{body}");
    }

    let error = parse_response(r#"{"cases": "nope"}"#).expect_err("string cases");
    assert!(matches!(error, ModelError::UnexpectedDocument { found: "string" }));
    let error = parse_response("null").expect_err("null body");
    assert!(matches!(error, ModelError::UnexpectedDocument { found: "null" }));
}

#[test]
fn truthy_text_skips_falsy_values() {
    let record = Record::new()
        .with("first_name", "")
        .with("status_id", 0_i64)
        .with("email", "ann@example.com");
    assert_eq!(record.truthy_text("first_name"), None);
    assert_eq!(record.truthy_text("status_id"), None);
    assert_eq!(record.truthy_text("missing"), None);
    assert_eq!(
        record.truthy_text("email"),
        Some("ann@example.com".to_string())
    );
}

#[test]
fn filter_strips_blank_values() {
    let filter = CaseFilter {
        first_name: Some("  Ann ".to_string()),
        last_name: Some("   ".to_string()),
        email: Some(String::new()),
        date_from: Some("2024-01-01".to_string()),
        limit: Some("50".to_string()),
        ..CaseFilter::default()
    };
    assert_eq!(
        filter.query_pairs(),
        vec![
            ("first_name", "Ann".to_string()),
            ("date_from", "2024-01-01".to_string()),
            ("limit", "50".to_string()),
        ]
    );
    assert!(!filter.is_empty());
}

#[test]
fn blank_filter_is_empty() {
    let filter = CaseFilter {
        tags: Some(" ".to_string()),
        ..CaseFilter::default()
    };
    assert!(filter.is_empty());
    assert!(CaseFilter::default().query_pairs().is_empty());
}
