//! Packages sheet: the plan comparison table.

use crate::record::{self, DatasetError, Record};
use serde::{Deserialize, Serialize};

const KEY: &[&str] = &["key", "Key", "KEY", "\u{feff}key", "키"];
const LABEL: &[&str] = &["label", "Label", "LABEL", "항목"];
const DESC: &[&str] = &["desc", "Desc", "DESC", "설명"];
const BASIC: &[&str] = &["basic", "Basic", "BASIC", "베이직"];
const STANDARD: &[&str] = &["standard", "Standard", "STANDARD", "스탠다드"];
const PREMIUM: &[&str] = &["premium", "Premium", "PREMIUM", "프리미엄"];
const CUSTOM: &[&str] = &["custom", "Custom", "CUSTOM", "커스텀"];

/// One comparison row: a feature and its value per plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PackageRow {
    pub key: String,
    pub label: String,
    pub desc: String,
    pub basic: String,
    pub standard: String,
    pub premium: String,
    pub custom: String,
}

fn project(record: &Record) -> PackageRow {
    PackageRow {
        key: record.get(KEY).trim().to_string(),
        label: record.get(LABEL).trim().to_string(),
        desc: record.get(DESC).trim().to_string(),
        basic: record.get(BASIC).trim().to_string(),
        standard: record.get(STANDARD).trim().to_string(),
        premium: record.get(PREMIUM).trim().to_string(),
        custom: record.get(CUSTOM).trim().to_string(),
    }
}

/// Build the comparison rows in sheet order.
///
/// # Errors
///
/// Returns [`DatasetError::Empty`] when the sheet has no data rows.
pub fn build(csv: &str) -> Result<Vec<PackageRow>, DatasetError> {
    let records = record::dataset(csv)?;
    Ok(records.iter().map(project).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_keep_sheet_order() {
        let sheet = "key,label,basic,standard,premium,custom\n\
                     pages,페이지 수,5,10,20,협의\n\
                     revisions,수정 횟수,2,4,무제한,협의\n";
        let rows = build(sheet).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].key, "pages");
        assert_eq!(rows[0].premium, "20");
        assert_eq!(rows[1].label, "수정 횟수");
        assert_eq!(rows[1].desc, "");
    }
}
