//! Options sheet: add-ons offered alongside the packages.

use crate::record::{self, DatasetError, Record};
use serde::{Deserialize, Serialize};

const LABEL: &[&str] = &["label", "Label", "LABEL", "\u{feff}label", "항목"];
const DESC: &[&str] = &["desc", "Desc", "DESC", "설명"];
const PRICE: &[&str] = &["price", "Price", "PRICE", "가격"];
const PRICE_TYPE: &[&str] = &["price_type", "Price_Type", "PRICE_TYPE", "가격유형"];

/// How an add-on's price cell is meant to be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PriceType {
    /// Quoted case by case.
    Consult,
    /// Multiplies the base package price.
    Multiplier,
    /// A flat amount in won.
    #[default]
    Fixed,
}

impl PriceType {
    fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "consult" => Self::Consult,
            "multiplier" => Self::Multiplier,
            _ => Self::Fixed,
        }
    }
}

/// One add-on line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AddOn {
    pub label: String,
    pub desc: String,
    pub price: String,
    pub price_type: PriceType,
}

impl AddOn {
    /// Display text for the price cell.
    #[must_use]
    pub fn price_text(&self) -> String {
        match self.price_type {
            PriceType::Consult => "별도 협의".to_string(),
            PriceType::Multiplier => format!("×{}", self.price.trim()),
            PriceType::Fixed => format!("{}원", thousands(&self.price)),
        }
    }
}

// Re-insert thousands separators after coercion so "1500000" and
// "1,500,000" render the same way.
fn thousands(raw: &str) -> String {
    let cleaned = raw.trim().replace(',', "");
    let Ok(value) = cleaned.parse::<i64>() else {
        return raw.trim().to_string();
    };
    let digits = value.abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if value < 0 { format!("-{out}") } else { out }
}

fn project(record: &Record) -> AddOn {
    AddOn {
        label: record.get(LABEL).trim().to_string(),
        desc: record.get(DESC).trim().to_string(),
        price: record.get(PRICE).trim().to_string(),
        price_type: PriceType::parse(record.get(PRICE_TYPE)),
    }
}

/// Build the add-on list in sheet order.
///
/// # Errors
///
/// Returns [`DatasetError::Empty`] when the sheet has no data rows.
pub fn build(csv: &str) -> Result<Vec<AddOn>, DatasetError> {
    let records = record::dataset(csv)?;
    Ok(records.iter().map(project).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_type_defaults_to_fixed() {
        let sheet = "label,desc,price,price_type\n\
                     로고 제작,심볼 포함,300000,\n\
                     다국어,페이지당,1.5,multiplier\n\
                     기능 추가,예약 등,,consult\n";
        let items = build(sheet).unwrap();
        assert_eq!(items[0].price_type, PriceType::Fixed);
        assert_eq!(items[1].price_type, PriceType::Multiplier);
        assert_eq!(items[2].price_type, PriceType::Consult);
    }

    #[test]
    fn price_text_formats_per_type() {
        let items = build(
            "label,price,price_type\n\
             a,1500000,\n\
             b,1.5,multiplier\n\
             c,,consult\n",
        )
        .unwrap();
        assert_eq!(items[0].price_text(), "1,500,000원");
        assert_eq!(items[1].price_text(), "×1.5");
        assert_eq!(items[2].price_text(), "별도 협의");
    }

    #[test]
    fn thousands_leaves_non_numeric_prices_alone() {
        assert_eq!(thousands("상담 후 결정"), "상담 후 결정");
        assert_eq!(thousands("1,500,000"), "1,500,000");
        assert_eq!(thousands("98"), "98");
    }
}
