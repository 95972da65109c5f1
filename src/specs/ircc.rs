// src/specs/ircc.rs
//
// Extract the daily IRCC series from the bank's page.
//
// Table selection: scan every table in document order and take the first
// whose rendered text the selector accepts. If none matches, fall back to
// the second table when the page has at least two (the first is usually
// navigation chrome), otherwise the first. Zero tables is fatal.
//
// Row shape: header row first, then one row per day:
//   <tr><td>01.08.2025</td><td>6,00</td></tr>
// Dates are day.month.year, rates use a decimal comma. Rows that do not
// parse are dropped with a warning.

use chrono::{Datelike, NaiveDate};
use tracing::{debug, warn};

use crate::core::html::{cell_texts, row_blocks, table_blocks, table_text};
use crate::error::ScrapeError;
use crate::store::RateRecord;

/// Pure heuristic over a table's rendered text. Swappable so the
/// "does this look like our data" question is testable in isolation.
pub type TableSelector<'a> = &'a dyn Fn(&str) -> bool;

/// Default heuristic: the table mentions at least one dd.mm.yyyy token
/// dated in the given year. Layout tables and old archives fail this.
pub fn current_year_selector(year: i32) -> impl Fn(&str) -> bool {
    move |text: &str| dmy_tokens(text).iter().any(|(_, _, y)| *y == year)
}

/// Extract the full series from a fetched document, using the default
/// selector for the current date.
pub fn extract(doc: &str) -> Result<Vec<RateRecord>, ScrapeError> {
    let today = chrono::Local::now().date_naive();
    let selector = current_year_selector(today.year());
    extract_with(doc, &selector)
}

/// Extraction with an explicit table selector.
pub fn extract_with(doc: &str, selector: TableSelector<'_>) -> Result<Vec<RateRecord>, ScrapeError> {
    let tables = table_blocks(doc);
    if tables.is_empty() {
        return Err(ScrapeError::NoTables);
    }

    let table = match tables.iter().find(|t| selector(&table_text(t))) {
        Some(t) => *t,
        None => {
            // Historically the series sat in the second table; the first
            // holds navigation. Last resort when the heuristic finds nothing.
            warn!(
                tables = tables.len(),
                "no table matched the selector, falling back by position"
            );
            if tables.len() >= 2 {
                tables[1]
            } else {
                tables[0]
            }
        }
    };

    let mut records = Vec::new();
    for tr in row_blocks(table).iter().skip(1) {
        let cells = cell_texts(tr);
        if cells.len() < 2 {
            warn!(cells = cells.len(), "skipping short row");
            continue;
        }
        let date = match parse_dmy(&cells[0]) {
            Some(d) => d,
            None => {
                warn!(cell = %cells[0], "skipping row: unparseable date");
                continue;
            }
        };
        let rate = match parse_comma_decimal(&cells[1]) {
            Some(r) => r,
            None => {
                warn!(cell = %cells[1], "skipping row: unparseable rate");
                continue;
            }
        };
        records.push(RateRecord { date, rate });
    }

    debug!(count = records.len(), "extracted rate records");
    Ok(records)
}

/// "01.08.2025" → 2025-08-01. Whitespace around the token is tolerated.
fn parse_dmy(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%d.%m.%Y").ok()
}

/// "6,00" → 6.00. A plain dot decimal is accepted too.
fn parse_comma_decimal(s: &str) -> Option<f64> {
    s.trim().replace(',', ".").parse().ok()
}

/// Every dd.mm.yyyy-shaped token in `text`, as (day, month, year).
/// Values are not range-checked here; the selector only needs the year.
fn dmy_tokens(text: &str) -> Vec<(u32, u32, i32)> {
    let bytes = text.as_bytes();
    let mut out = Vec::new();
    let mut i = 0usize;
    while i + 10 <= bytes.len() {
        let w = &bytes[i..i + 10];
        let shape_ok = w[0].is_ascii_digit()
            && w[1].is_ascii_digit()
            && w[2] == b'.'
            && w[3].is_ascii_digit()
            && w[4].is_ascii_digit()
            && w[5] == b'.'
            && w[6..10].iter().all(|b| b.is_ascii_digit());
        if shape_ok {
            let num = |r: &[u8]| -> i32 {
                r.iter().fold(0i32, |acc, b| acc * 10 + (b - b'0') as i32)
            };
            out.push((num(&w[0..2]) as u32, num(&w[3..5]) as u32, num(&w[6..10])));
            i += 10;
        } else {
            i += 1;
        }
    }
    out
}
