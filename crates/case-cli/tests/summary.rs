//! Tests for result-card and details rendering.

use case_cli::summary::{CaseCard, created_date, details_table, results_heading, results_table};
use case_export::detail_entries;
use case_model::Record;
use serde_json::json;

fn record(value: serde_json::Value) -> Record {
    serde_json::from_value(value).expect("record")
}

#[test]
fn heading_pluralizes() {
    assert_eq!(results_heading(0), "Found 0 cases");
    assert_eq!(results_heading(1), "Found 1 case");
    assert_eq!(results_heading(12), "Found 12 cases");
}

#[test]
fn card_collects_display_fields() {
    let card = CaseCard::from_record(
        3,
        &record(json!({
            "id": 981,
            "first_name": "Ann",
            "last_name": "Lee",
            "status_id": 2,
            "litigation_id": "LIT-7",
            "email": "ann@example.com",
            "phone": "",
            "created_at": "2024-02-29T23:15:00Z",
            "tags": ["urgent", "", "review"]
        })),
    );
    assert_eq!(
        card,
        CaseCard {
            index: 3,
            name: "Ann Lee".to_string(),
            status: Some("2".to_string()),
            litigation: Some("LIT-7".to_string()),
            email: Some("ann@example.com".to_string()),
            phone: None,
            created: Some("2024-02-29".to_string()),
            id: Some("981".to_string()),
            tags: vec!["urgent".to_string(), String::new(), "review".to_string()],
        }
    );
}

#[test]
fn card_without_names_uses_placeholder() {
    let card = CaseCard::from_record(0, &record(json!({"last_name": "Lee"})));
    assert_eq!(card.name, "N/A Lee");

    let card = CaseCard::from_record(0, &record(json!({"status_id": 0})));
    assert_eq!(card.name, "N/A");
    assert_eq!(card.status, None);
    assert!(card.tags.is_empty());
}

#[test]
fn created_date_accepts_common_timestamp_shapes() {
    assert_eq!(created_date("2024-01-05T08:00:00+02:00"), "2024-01-05");
    assert_eq!(created_date("2024-01-05T08:00:00.123"), "2024-01-05");
    assert_eq!(created_date("2024-01-05 08:00:00"), "2024-01-05");
    assert_eq!(created_date("2024-01-05"), "2024-01-05");
    assert_eq!(created_date("last tuesday"), "last tuesday");
}

#[test]
fn tables_have_one_row_per_item() {
    let records = [
        record(json!({"first_name": "Ann"})),
        record(json!({"first_name": "Bo", "tags": "solo"})),
    ];
    let cards: Vec<CaseCard> = records
        .iter()
        .enumerate()
        .map(|(index, record)| CaseCard::from_record(index, record))
        .collect();
    assert_eq!(cards[1].tags, vec!["solo".to_string()]);
    let blank_tag = CaseCard::from_record(2, &record(json!({"tags": ["", 0, "x"]})));
    assert_eq!(blank_tag.tags, vec![String::new(), "0".to_string(), "x".to_string()]);
    assert_eq!(results_table(&cards).row_iter().count(), 2);

    let entries = detail_entries(&records[1]);
    assert_eq!(details_table(&entries).row_iter().count(), 2);
}
