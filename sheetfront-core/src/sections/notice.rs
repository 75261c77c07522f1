//! Notice sheet: grouped guidance lines shown at the top of the page.

use crate::group::{self, Grouped};
use crate::record::{self, BoolRule, DatasetError, Record};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Group headings pinned ahead of ad hoc categories.
pub const GROUP_PRIORITY: [&str; 4] = ["기본", "수정", "진행", "결제"];

/// Bucket for rows without a group.
pub const FALLBACK_GROUP: &str = "기타";

const GROUP: &[&str] = &["group", "Group", "GROUP", "\u{feff}group", "구분", "그룹"];
const DESC: &[&str] = &["desc", "Desc", "DESC", "\u{feff}desc", "설명", "내용"];
const ORDER: &[&str] = &["order", "Order", "ORDER", "순서"];
const HIDDEN: &[&str] = &["hidden", "Hidden", "HIDDEN", "숨김"];

/// One visible notice line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Notice {
    pub group: String,
    pub desc: String,
    pub order: f64,
}

fn project(record: &Record) -> Option<Notice> {
    if BoolRule::Strict.parse(record.get(HIDDEN)) {
        return None;
    }
    Some(Notice {
        group: record.get(GROUP).trim().to_string(),
        desc: record.get(DESC).trim().to_string(),
        order: record::parse_order(record.get(ORDER), 0.0),
    })
}

/// Build the grouped notice list from raw sheet text.
///
/// # Errors
///
/// Returns [`DatasetError::Empty`] when the sheet has no data rows.
pub fn build(
    csv: &str,
    collate: impl Fn(&str, &str) -> Ordering,
) -> Result<Vec<Grouped<Notice>>, DatasetError> {
    let records = record::dataset(csv)?;
    let mut items: Vec<Notice> = records.iter().filter_map(project).collect();
    group::sort_by_order(&mut items, |notice| notice.order);
    let mut groups = group::group_by(items, |notice| notice.group.as_str(), FALLBACK_GROUP);
    group::sort_groups(&mut groups, &GROUP_PRIORITY, collate);
    Ok(groups)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHEET: &str = "group,desc,order,hidden\n\
                         결제,입금 안내,1,\n\
                         기본,첫 안내,1,\n\
                         ,기타 안내,2,\n\
                         기본,둘째 안내,2,false\n\
                         기본,숨긴 안내,3,true\n";

    #[test]
    fn groups_follow_priority_then_fallback() {
        let groups = build(SHEET, str::cmp).unwrap();
        let keys: Vec<&str> = groups.iter().map(|g| g.key.as_str()).collect();
        assert_eq!(keys, ["기본", "결제", "기타"]);
    }

    #[test]
    fn hidden_rows_are_dropped_strictly() {
        let groups = build(SHEET, str::cmp).unwrap();
        let basic = &groups[0];
        let descs: Vec<&str> = basic.items.iter().map(|n| n.desc.as_str()).collect();
        assert_eq!(descs, ["첫 안내", "둘째 안내"]);
    }

    #[test]
    fn korean_headers_resolve_through_aliases() {
        let sheet = "구분,내용,순서,숨김\n진행,시안 확인,1,\n";
        let groups = build(sheet, str::cmp).unwrap();
        assert_eq!(groups[0].key, "진행");
        assert_eq!(groups[0].items[0].desc, "시안 확인");
    }

    #[test]
    fn empty_sheet_is_an_error() {
        assert_eq!(build("group,desc\n", str::cmp), Err(DatasetError::Empty));
    }
}
