//! CSV export of record collections.
//!
//! The header row is taken from the keys of the first record, in field
//! declaration order. Each row lists values in header order, so a field that is
//! missing from a later record leaves an empty cell instead of shifting columns.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};
use std::str::FromStr;
use thiserror::Error;

/// Line terminator used by exported files.
pub const CSV_LINE_ENDING: &str = "\r\n";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("No data available to export for {0}.")]
    NoData(String),

    #[error("Failed to encode record: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Exported records must be objects")]
    NotAnObject,
}

/// Collections that can be downloaded as CSV.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportCollection {
    Inquiries,
    Bookings,
    Testimonials,
    Services,
    Gallery,
    Team,
    Faqs,
}

impl ExportCollection {
    pub const ALL: [ExportCollection; 7] = [
        ExportCollection::Inquiries,
        ExportCollection::Bookings,
        ExportCollection::Testimonials,
        ExportCollection::Services,
        ExportCollection::Gallery,
        ExportCollection::Team,
        ExportCollection::Faqs,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExportCollection::Inquiries => "inquiries",
            ExportCollection::Bookings => "bookings",
            ExportCollection::Testimonials => "testimonials",
            ExportCollection::Services => "services",
            ExportCollection::Gallery => "gallery",
            ExportCollection::Team => "team",
            ExportCollection::Faqs => "faqs",
        }
    }
}

impl std::fmt::Display for ExportCollection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportCollection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExportCollection::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("Unknown export collection: {}", s))
    }
}

/// File name for a CSV download: `<collection>_<YYYY-MM-DD>.csv`.
pub fn csv_file_name(collection: ExportCollection, at: DateTime<Utc>) -> String {
    format!("{}_{}.csv", collection, shared::dates::iso_date(at))
}

/// Renders records as CSV text.
pub fn render_csv<T: Serialize>(
    collection: ExportCollection,
    records: &[T],
) -> Result<String, ExportError> {
    let rows = records
        .iter()
        .map(|r| match serde_json::to_value(r)? {
            Value::Object(map) => Ok(map),
            _ => Err(ExportError::NotAnObject),
        })
        .collect::<Result<Vec<Map<String, Value>>, ExportError>>()?;

    let Some(first) = rows.first() else {
        return Err(ExportError::NoData(collection.to_string()));
    };
    let header: Vec<&String> = first.keys().collect();

    let mut out = String::new();
    out.push_str(
        &header
            .iter()
            .map(|key| escape_cell(key))
            .collect::<Vec<_>>()
            .join(","),
    );
    out.push_str(CSV_LINE_ENDING);

    for row in &rows {
        let line = header
            .iter()
            .map(|key| escape_cell(&cell_text(row.get(key.as_str()).unwrap_or(&Value::Null))))
            .collect::<Vec<_>>()
            .join(",");
        out.push_str(&line);
        out.push_str(CSV_LINE_ENDING);
    }

    Ok(out)
}

/// Plain-text form of a JSON value: null is empty, arrays are comma joined.
fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => items.iter().map(cell_text).collect::<Vec<_>>().join(","),
        Value::Object(_) => value.to_string(),
    }
}

/// Doubles quotes, then wraps the cell in quotes if it holds a quote,
/// comma or line break.
fn escape_cell(cell: &str) -> String {
    let escaped = cell.replace('"', "\"\"");
    if escaped.contains(['"', ',', '\n', '\r']) {
        format!("\"{}\"", escaped)
    } else {
        escaped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Booking, BookingStatus, Service};
    use crate::seed;
    use chrono::TimeZone;
    use serde_json::json;

    /// Minimal RFC 4180 reader used to check exports decode back.
    fn parse_csv(text: &str) -> Vec<Vec<String>> {
        let mut rows = Vec::new();
        let mut row = Vec::new();
        let mut cell = String::new();
        let mut in_quotes = false;
        let mut chars = text.chars().peekable();

        while let Some(c) = chars.next() {
            match (c, in_quotes) {
                ('"', true) if chars.peek() == Some(&'"') => {
                    chars.next();
                    cell.push('"');
                }
                ('"', true) => in_quotes = false,
                ('"', false) => in_quotes = true,
                (',', false) => row.push(std::mem::take(&mut cell)),
                ('\r', false) if chars.peek() == Some(&'\n') => {
                    chars.next();
                    row.push(std::mem::take(&mut cell));
                    rows.push(std::mem::take(&mut row));
                }
                (c, _) => cell.push(c),
            }
        }
        rows
    }

    #[test]
    fn test_empty_collection_is_an_error() {
        let records: Vec<Booking> = Vec::new();
        let err = render_csv(ExportCollection::Bookings, &records).unwrap_err();
        assert_eq!(err.to_string(), "No data available to export for bookings.");
    }

    #[test]
    fn test_header_and_crlf() {
        let csv = render_csv(ExportCollection::Bookings, &seed::default_bookings()).unwrap();
        let mut lines = csv.split("\r\n");
        assert_eq!(
            lines.next(),
            Some("id,client,event,date,guests,budget,status")
        );
        assert_eq!(
            lines.next(),
            Some("101,Rajesh Kumar,Wedding Reception,2024-12-10,500,5L - 8L,Quoted")
        );
        assert!(csv.ends_with("\r\n"));
    }

    #[test]
    fn test_escape_cell() {
        assert_eq!(escape_cell("plain"), "plain");
        assert_eq!(escape_cell("a,b"), "\"a,b\"");
        assert_eq!(escape_cell("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_cell("line\nbreak"), "\"line\nbreak\"");
    }

    #[test]
    fn test_arrays_are_comma_joined_and_quoted() {
        let csv = render_csv(ExportCollection::Services, &seed::default_services()[..1]).unwrap();
        assert!(csv.contains("\"Venue Selection,Decor & Theme,Guest Management,Photography\""));
    }

    #[test]
    fn test_null_cells_are_empty() {
        let service = Service {
            id: "svc_1".into(),
            title: "Decor".into(),
            short_description: String::new(),
            full_description: String::new(),
            features: Vec::new(),
            icon_name: "Gem".into(),
            image: None,
            category: None,
        };
        let csv = render_csv(ExportCollection::Services, &[service]).unwrap();
        let rows = parse_csv(&csv);
        assert_eq!(rows[1], vec!["svc_1", "Decor", "", "", "", "Gem", "", ""]);
    }

    #[test]
    fn test_columns_follow_first_record() {
        let records = vec![json!({"a": 1, "b": 2}), json!({"b": 3, "c": 4})];
        let csv = render_csv(ExportCollection::Faqs, &records).unwrap();
        assert_eq!(csv, "a,b\r\n1,2\r\n,3\r\n");
    }

    #[test]
    fn test_round_trip_reconstructs_field_values() {
        let mut bookings = seed::default_bookings();
        bookings.push(Booking {
            id: 103,
            client: "Mehta, \"Sunny\" & Co".into(),
            event: "Launch\nParty".into(),
            date: "2025-01-05".into(),
            guests: 80,
            budget: "1L".into(),
            status: BookingStatus::Cancelled,
        });

        let csv = render_csv(ExportCollection::Bookings, &bookings).unwrap();
        let rows = parse_csv(&csv);
        assert_eq!(rows.len(), bookings.len() + 1);

        for (row, booking) in rows[1..].iter().zip(&bookings) {
            assert_eq!(
                row,
                &vec![
                    booking.id.to_string(),
                    booking.client.clone(),
                    booking.event.clone(),
                    booking.date.clone(),
                    booking.guests.to_string(),
                    booking.budget.clone(),
                    booking.status.to_string(),
                ]
            );
        }
    }

    #[test]
    fn test_csv_file_name() {
        let at = Utc.with_ymd_and_hms(2024, 12, 25, 8, 0, 0).unwrap();
        assert_eq!(
            csv_file_name(ExportCollection::Inquiries, at),
            "inquiries_2024-12-25.csv"
        );
    }

    #[test]
    fn test_export_collection_from_str() {
        assert_eq!(
            "team".parse::<ExportCollection>().unwrap(),
            ExportCollection::Team
        );
        assert!("settings".parse::<ExportCollection>().is_err());
    }
}
