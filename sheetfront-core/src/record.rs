//! Header-keyed records and the coercions applied when projecting them.

use std::collections::HashMap;
use thiserror::Error;

/// Sentinel for items whose position is unspecified but must sort last.
/// Finite so every order value stays comparable.
pub const ORDER_LAST: f64 = 1e15;

/// Raised when a sheet has no header row or no data rows.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DatasetError {
    #[error("dataset requires a header row and at least one data row")]
    Empty,
}

/// One data row keyed by trimmed header names.
///
/// Field presence depends on the header row only; cells missing from a short
/// row read as the empty string.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    fields: HashMap<String, String>,
}

impl Record {
    /// Look up a field by probing candidate header spellings in order.
    /// The first header present in the sheet wins; no match reads as `""`.
    #[must_use]
    pub fn get(&self, aliases: &[&str]) -> &str {
        aliases
            .iter()
            .find_map(|name| self.fields.get(*name))
            .map_or("", String::as_str)
    }

    #[cfg(test)]
    pub(crate) fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self {
            fields: pairs
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        }
    }
}

/// Convert parsed rows into records using the first row as the header.
#[must_use]
pub fn records(rows: &[Vec<String>]) -> Vec<Record> {
    let Some((header, body)) = rows.split_first() else {
        return Vec::new();
    };
    let names: Vec<String> = header.iter().map(|h| h.trim().to_string()).collect();

    body.iter()
        .map(|row| {
            let mut fields = HashMap::with_capacity(names.len());
            for (idx, name) in names.iter().enumerate() {
                let value = row.get(idx).cloned().unwrap_or_default();
                fields.insert(name.clone(), value);
            }
            Record { fields }
        })
        .collect()
}

/// Parse sheet text into records, enforcing the minimum dataset contract of
/// a header row plus at least one data row.
///
/// # Errors
///
/// Returns [`DatasetError::Empty`] when fewer than two rows survive parsing.
pub fn dataset(text: &str) -> Result<Vec<Record>, DatasetError> {
    let rows = crate::csv::parse(text);
    if rows.len() < 2 {
        return Err(DatasetError::Empty);
    }
    Ok(records(&rows))
}

/// Which spellings a boolean cell accepts as true.
///
/// The sheets drifted apart on this over time; the per-section policy is
/// kept rather than unified so existing spreadsheet values keep meaning the
/// same thing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoolRule {
    /// Only `"true"`, case-insensitively.
    Strict,
    /// `"true"`, `"1"`, `"yes"`, or `"y"`, case-insensitively.
    Lenient,
}

impl BoolRule {
    /// Coerce a cell to a boolean; anything outside the accepted token set
    /// is false.
    #[must_use]
    pub fn parse(self, value: &str) -> bool {
        let token = value.trim().to_lowercase();
        match self {
            Self::Strict => token == "true",
            Self::Lenient => matches!(token.as_str(), "true" | "1" | "yes" | "y"),
        }
    }
}

/// Coerce a cell to a finite order value, stripping thousands separators.
/// Failed or non-finite parses fall back to `default`.
#[must_use]
pub fn parse_order(value: &str, default: f64) -> f64 {
    let cleaned = value.trim().replace(',', "");
    match cleaned.parse::<f64>() {
        Ok(n) if n.is_finite() => n,
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(text: &str) -> Vec<Vec<String>> {
        crate::csv::parse(text)
    }

    #[test]
    fn header_names_are_trimmed_and_short_rows_pad() {
        let records = records(&rows(" group , desc ,order\na,b\n"));
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get(&["group"]), "a");
        assert_eq!(records[0].get(&["desc"]), "b");
        assert_eq!(records[0].get(&["order"]), "");
    }

    #[test]
    fn alias_probing_takes_first_present_spelling() {
        let record = Record::from_pairs(&[("구분", "결제"), ("Desc", "본문")]);
        assert_eq!(record.get(&["group", "Group", "\u{feff}group", "구분"]), "결제");
        assert_eq!(record.get(&["desc", "Desc", "설명"]), "본문");
        assert_eq!(record.get(&["order", "순서"]), "");
    }

    #[test]
    fn bom_prefixed_header_is_probed() {
        let record = records(&rows("\u{feff}group,desc\n진행,안내\n"))
            .pop()
            .unwrap();
        assert_eq!(record.get(&["group", "\u{feff}group"]), "진행");
    }

    #[test]
    fn dataset_requires_two_rows() {
        assert_eq!(dataset("group,desc\n"), Err(DatasetError::Empty));
        assert_eq!(dataset(""), Err(DatasetError::Empty));
        assert!(dataset("group,desc\na,b\n").is_ok());
    }

    #[test]
    fn bool_rules_differ_on_loose_tokens() {
        assert!(BoolRule::Strict.parse(" TRUE "));
        assert!(!BoolRule::Strict.parse("1"));
        assert!(!BoolRule::Strict.parse("yes"));

        assert!(BoolRule::Lenient.parse("true"));
        assert!(BoolRule::Lenient.parse("1"));
        assert!(BoolRule::Lenient.parse("Yes"));
        assert!(BoolRule::Lenient.parse("Y"));
        assert!(!BoolRule::Lenient.parse("on"));
        assert!(!BoolRule::Lenient.parse(""));
    }

    #[test]
    fn order_coercion_falls_back_per_field() {
        assert!((parse_order("3", 0.0) - 3.0).abs() < f64::EPSILON);
        assert!((parse_order(" 1,500 ", 0.0) - 1500.0).abs() < f64::EPSILON);
        assert!((parse_order("abc", 0.0)).abs() < f64::EPSILON);
        assert!((parse_order("", ORDER_LAST) - ORDER_LAST).abs() < f64::EPSILON);
        assert!((parse_order("inf", 0.0)).abs() < f64::EPSILON);
    }
}
