//! Terminal rendering of search results and case details.

use case_export::{DetailEntry, detail_entries};
use case_model::{FieldValue, Record};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

/// The fields of a case shown in the result list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseCard {
    pub index: usize,
    pub name: String,
    pub status: Option<String>,
    pub litigation: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub created: Option<String>,
    pub id: Option<String>,
    pub tags: Vec<String>,
}

impl CaseCard {
    pub fn from_record(index: usize, record: &Record) -> Self {
        let first = record
            .truthy_text("first_name")
            .unwrap_or_else(|| "N/A".to_string());
        let name = match record.truthy_text("last_name") {
            Some(last) => format!("{first} {last}"),
            None => first,
        };
        Self {
            index,
            name,
            status: record.truthy_text("status_id"),
            litigation: record.truthy_text("litigation_id"),
            email: record.truthy_text("email"),
            phone: record.truthy_text("phone"),
            created: record.truthy_text("created_at").map(|raw| created_date(&raw)),
            id: record.truthy_text("id"),
            tags: tag_list(record.get("tags")),
        }
    }
}

/// `Found 1 case`, `Found 3 cases`
pub fn results_heading(count: usize) -> String {
    let noun = if count == 1 { "case" } else { "cases" };
    format!("Found {count} {noun}")
}

/// Calendar date of a creation timestamp; unparseable text is shown as-is.
pub fn created_date(raw: &str) -> String {
    let trimmed = raw.trim();
    let date = DateTime::parse_from_rfc3339(trimmed)
        .map(|timestamp| timestamp.date_naive())
        .or_else(|_| {
            NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f")
                .map(|timestamp| timestamp.date())
        })
        .or_else(|_| {
            NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S%.f")
                .map(|timestamp| timestamp.date())
        })
        .or_else(|_| NaiveDate::parse_from_str(trimmed, "%Y-%m-%d"));
    match date {
        Ok(date) => date.format("%Y-%m-%d").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Every element of a `tags` list, blanks included.
fn tag_list(value: Option<&FieldValue>) -> Vec<String> {
    match value {
        Some(FieldValue::List(items)) => items.iter().map(FieldValue::plain_text).collect(),
        Some(FieldValue::Text(text)) if !text.is_empty() => vec![text.clone()],
        _ => Vec::new(),
    }
}

pub fn results_table(cards: &[CaseCard]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Name"),
        header_cell("Status"),
        header_cell("Litigation"),
        header_cell("Email"),
        header_cell("Phone"),
        header_cell("Created"),
        header_cell("ID"),
        header_cell("Tags"),
    ]);
    apply_results_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Center);
    align_column(&mut table, 3, CellAlignment::Center);
    for card in cards {
        table.add_row(vec![
            dim_cell(card.index),
            Cell::new(&card.name).add_attribute(Attribute::Bold),
            badge_cell(card.status.as_deref(), Color::Blue),
            badge_cell(card.litigation.as_deref(), Color::Magenta),
            optional_cell(card.email.as_deref()),
            optional_cell(card.phone.as_deref()),
            optional_cell(card.created.as_deref()),
            optional_cell(card.id.as_deref()),
            if card.tags.is_empty() {
                dim_cell("-")
            } else {
                Cell::new(card.tags.join(", "))
            },
        ]);
    }
    table
}

pub fn details_table(entries: &[DetailEntry]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Value")]);
    apply_details_table_style(&mut table);
    for entry in entries {
        table.add_row(vec![
            Cell::new(&entry.label)
                .fg(Color::DarkGrey)
                .add_attribute(Attribute::Bold),
            Cell::new(&entry.value),
        ]);
    }
    table
}

pub fn print_results(records: &[Record]) {
    println!("{}", results_heading(records.len()));
    let cards: Vec<CaseCard> = records
        .iter()
        .enumerate()
        .map(|(index, record)| CaseCard::from_record(index, record))
        .collect();
    println!("{}", results_table(&cards));
}

pub fn print_details(record: &Record) {
    println!("Case Details");
    println!("{}", details_table(&detail_entries(record)));
}

fn apply_results_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(165);
    if table.column_count() >= 9 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Fixed(5)),
            ColumnConstraint::UpperBoundary(Width::Percentage(20)),
            ColumnConstraint::LowerBoundary(Width::Fixed(6)),
            ColumnConstraint::LowerBoundary(Width::Fixed(10)),
            ColumnConstraint::UpperBoundary(Width::Percentage(20)),
            ColumnConstraint::LowerBoundary(Width::Fixed(7)),
            ColumnConstraint::LowerBoundary(Width::Fixed(10)),
            ColumnConstraint::LowerBoundary(Width::Fixed(4)),
            ColumnConstraint::UpperBoundary(Width::Percentage(25)),
        ]);
    }
}

fn apply_details_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn badge_cell(value: Option<&str>, color: Color) -> Cell {
    match value {
        Some(text) => Cell::new(text).fg(color).add_attribute(Attribute::Bold),
        None => dim_cell("-"),
    }
}

fn optional_cell(value: Option<&str>) -> Cell {
    match value {
        Some(text) => Cell::new(text),
        None => dim_cell("-"),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
