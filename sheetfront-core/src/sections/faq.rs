//! FAQ sheet: grouped question/answer pairs.

use crate::group::{self, Grouped};
use crate::record::{self, BoolRule, DatasetError, Record};
use serde::{Deserialize, Serialize};

/// Bucket for entries without a group.
pub const FALLBACK_GROUP: &str = "기타";

const KEY: &[&str] = &["key", "Key", "KEY", "\u{feff}key", "키"];
const GROUP: &[&str] = &["group", "Group", "GROUP", "구분", "그룹"];
const QUESTION: &[&str] = &["question", "Question", "QUESTION", "질문"];
const ANSWER: &[&str] = &["answer", "Answer", "ANSWER", "답변"];
const ORDER: &[&str] = &["order", "Order", "ORDER", "순서"];
const HIDDEN: &[&str] = &["hidden", "Hidden", "HIDDEN", "숨김"];

/// One visible FAQ entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct FaqEntry {
    pub key: String,
    pub group: String,
    pub question: String,
    pub answer: String,
    pub order: f64,
}

fn project(record: &Record) -> Option<FaqEntry> {
    if BoolRule::Lenient.parse(record.get(HIDDEN)) {
        return None;
    }
    Some(FaqEntry {
        key: record.get(KEY).trim().to_string(),
        group: record.get(GROUP).trim().to_string(),
        question: record.get(QUESTION).trim().to_string(),
        answer: record.get(ANSWER).trim().to_string(),
        order: record::parse_order(record.get(ORDER), 0.0),
    })
}

/// Build the FAQ: groups in first-seen order, entries ordered within.
///
/// # Errors
///
/// Returns [`DatasetError::Empty`] when the sheet has no data rows.
pub fn build(csv: &str) -> Result<Vec<Grouped<FaqEntry>>, DatasetError> {
    let records = record::dataset(csv)?;
    let mut entries: Vec<FaqEntry> = records.iter().filter_map(project).collect();
    group::sort_by_order(&mut entries, |entry| entry.order);
    Ok(group::group_by(
        entries,
        |entry| entry.group.as_str(),
        FALLBACK_GROUP,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHEET: &str = "key,group,question,answer,order,hidden\n\
                         q2,제작,기간은 얼마나 걸리나요?,보통 2주입니다,2,\n\
                         q1,제작,무엇이 필요한가요?,원고와 사진입니다,1,\n\
                         q3,결제,계산서 발행되나요?,네 가능합니다,1,no\n\
                         q4,결제,숨긴 질문,answer,2,1\n";

    #[test]
    fn groups_keep_first_seen_order() {
        let groups = build(SHEET).unwrap();
        let keys: Vec<&str> = groups.iter().map(|g| g.key.as_str()).collect();
        assert_eq!(keys, ["제작", "결제"]);
    }

    #[test]
    fn entries_sort_within_groups() {
        let groups = build(SHEET).unwrap();
        let questions: Vec<&str> = groups[0]
            .items
            .iter()
            .map(|e| e.question.as_str())
            .collect();
        assert_eq!(questions, ["무엇이 필요한가요?", "기간은 얼마나 걸리나요?"]);
    }

    #[test]
    fn hidden_accepts_loose_tokens() {
        let groups = build(SHEET).unwrap();
        let payment = &groups[1];
        assert_eq!(payment.items.len(), 1);
        assert_eq!(payment.items[0].key, "q3");
    }
}
