//! Inquiry sheet: the schema of the contact form.

use crate::group::{self, Grouped};
use crate::record::{self, DatasetError, Record};
use serde::{Deserialize, Serialize};

/// Bucket for fields without a group.
pub const FALLBACK_GROUP: &str = "기타";

const KEY: &[&str] = &["key", "Key", "KEY", "\u{feff}key", "키"];
const GROUP: &[&str] = &["group", "Group", "GROUP", "구분", "그룹"];
const TYPE: &[&str] = &["type", "Type", "TYPE", "유형"];
const LABEL: &[&str] = &["label", "Label", "LABEL", "항목"];
const DESC: &[&str] = &["desc", "Desc", "DESC", "설명"];
const PLACEHOLDER: &[&str] = &["placeholder", "Placeholder", "PLACEHOLDER", "예시"];
const ORDER: &[&str] = &["order", "Order", "ORDER", "순서"];

/// Input control a form field renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum FieldType {
    Radio,
    Checkbox,
    Textarea,
    Select,
    #[default]
    Text,
}

impl FieldType {
    fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "radio" => Self::Radio,
            "checkbox" => Self::Checkbox,
            "textarea" => Self::Textarea,
            "select" => Self::Select,
            _ => Self::Text,
        }
    }
}

/// One form field from the schema sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct FormField {
    pub key: String,
    pub group: String,
    pub field_type: FieldType,
    pub label: String,
    pub desc: String,
    pub placeholder: String,
    pub order: f64,
}

impl FormField {
    /// Option list for choice fields; the desc cell doubles as the source,
    /// split on `|`.
    #[must_use]
    pub fn choices(&self) -> Vec<String> {
        self.desc
            .split('|')
            .map(str::trim)
            .filter(|choice| !choice.is_empty())
            .map(ToString::to_string)
            .collect()
    }
}

fn project(record: &Record) -> FormField {
    FormField {
        key: record.get(KEY).trim().to_string(),
        group: record.get(GROUP).trim().to_string(),
        field_type: FieldType::parse(record.get(TYPE)),
        label: record.get(LABEL).trim().to_string(),
        desc: record.get(DESC).trim().to_string(),
        placeholder: record.get(PLACEHOLDER).trim().to_string(),
        order: record::parse_order(record.get(ORDER), 0.0),
    }
}

/// Build the form schema: groups in first-seen order, fields ordered within.
///
/// # Errors
///
/// Returns [`DatasetError::Empty`] when the sheet has no data rows.
pub fn build(csv: &str) -> Result<Vec<Grouped<FormField>>, DatasetError> {
    let records = record::dataset(csv)?;
    let mut fields: Vec<FormField> = records.iter().map(project).collect();
    group::sort_by_order(&mut fields, |field| field.order);
    Ok(group::group_by(
        fields,
        |field| field.group.as_str(),
        FALLBACK_GROUP,
    ))
}

/// Assemble the plain-text inquiry summary written to the clipboard: filled
/// fields only, `label: value` lines joined by blank lines.
#[must_use]
pub fn summary(entries: &[(String, String)]) -> String {
    entries
        .iter()
        .filter(|(_, value)| !value.trim().is_empty())
        .map(|(label, value)| format!("{label}: {}", value.trim()))
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHEET: &str = "key,group,type,label,desc,placeholder,order\n\
                         budget,기본 정보,radio,예산,100만 이하|100~300만|300만 이상,,2\n\
                         name,기본 정보,text,성함,,홍길동,1\n\
                         details,요청 사항,textarea,상세 내용,,자유롭게 적어주세요,1\n";

    #[test]
    fn groups_keep_first_seen_order_and_fields_sort_within() {
        let groups = build(SHEET).unwrap();
        let keys: Vec<&str> = groups.iter().map(|g| g.key.as_str()).collect();
        assert_eq!(keys, ["기본 정보", "요청 사항"]);
        let labels: Vec<&str> = groups[0].items.iter().map(|f| f.label.as_str()).collect();
        assert_eq!(labels, ["성함", "예산"]);
    }

    #[test]
    fn unknown_types_fall_back_to_text() {
        let groups = build("key,type,label\na,dropdown,x\n").unwrap();
        assert_eq!(groups[0].items[0].field_type, FieldType::Text);
    }

    #[test]
    fn choices_split_the_desc_cell() {
        let groups = build(SHEET).unwrap();
        let budget = &groups[0].items[1];
        assert_eq!(budget.field_type, FieldType::Radio);
        assert_eq!(budget.choices(), ["100만 이하", "100~300만", "300만 이상"]);
        assert!(groups[1].items[0].choices().is_empty());
    }

    #[test]
    fn summary_skips_blank_values() {
        let entries = vec![
            ("성함".to_string(), "홍길동".to_string()),
            ("예산".to_string(), "  ".to_string()),
            ("상세 내용".to_string(), "문의드립니다".to_string()),
        ];
        assert_eq!(summary(&entries), "성함: 홍길동\n\n상세 내용: 문의드립니다");
    }

    #[test]
    fn summary_of_nothing_is_empty() {
        assert_eq!(summary(&[]), "");
    }
}
