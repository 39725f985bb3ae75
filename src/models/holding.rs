use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::Error;
use crate::models::month::MonthDate;

/// One bond from the holdings file.
///
/// `face_value` keeps the file's literal formatting (e.g. `100.00`); it is
/// normalized for the calculator form only at query time.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Holding {
    pub series: String,
    pub issue_date: MonthDate,
    pub serial_number: String,
    pub face_value: String,
}

/// Reads a holdings file: one `<series> <issue-date:YYYY-MM-DD> <serial>
/// <face-value>` per non-blank line, whitespace-separated, no header.
pub fn load_holdings(path: &Path) -> Result<Vec<Holding>, Error> {
    let content = std::fs::read_to_string(path)?;
    parse_holdings(&content)
}

pub fn parse_holdings(content: &str) -> Result<Vec<Holding>, Error> {
    let mut holdings = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let holding = parse_line(line).map_err(|message| Error::Holdings {
            line: idx + 1,
            message,
        })?;
        holdings.push(holding);
    }
    Ok(holdings)
}

fn parse_line(line: &str) -> Result<Holding, String> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let &[series, issue, serial, face] = fields.as_slice() else {
        return Err(format!("expected 4 fields, found {}", fields.len()));
    };
    let issue_date = NaiveDate::parse_from_str(issue, "%Y-%m-%d")
        .map_err(|_| format!("unparseable issue date: {issue}"))?;
    Ok(Holding {
        series: series.to_string(),
        issue_date: MonthDate::from(issue_date),
        serial_number: serial.to_string(),
        face_value: face.to_string(),
    })
}
