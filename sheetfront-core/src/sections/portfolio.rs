//! Portfolio sheet: shipped sites shown as outbound cards.

use crate::group;
use crate::media;
use crate::record::{self, DatasetError, ORDER_LAST, Record};
use serde::{Deserialize, Serialize};

const ORDER: &[&str] = &["order", "Order", "ORDER", "\u{feff}order", "순서"];
const NAME: &[&str] = &["name", "Name", "NAME", "이름"];
const PACKAGE: &[&str] = &["package", "Package", "PACKAGE", "패키지"];
const SECTION: &[&str] = &["section", "Section", "SECTION", "섹션"];
const TYPE: &[&str] = &["type", "Type", "TYPE", "유형"];
const IMAGE: &[&str] = &["image", "Image", "IMAGE", "이미지"];
const LINK: &[&str] = &["link", "Link", "LINK", "링크"];

/// One portfolio card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PortfolioItem {
    pub name: String,
    pub package: String,
    pub section: String,
    pub kind: String,
    pub image: String,
    pub link: String,
    pub order: f64,
}

fn project(record: &Record) -> PortfolioItem {
    PortfolioItem {
        name: record.get(NAME).trim().to_string(),
        package: record.get(PACKAGE).trim().to_string(),
        section: record.get(SECTION).trim().to_string(),
        kind: record.get(TYPE).trim().to_string(),
        image: media::direct_image_url(record.get(IMAGE)),
        link: record.get(LINK).trim().to_string(),
        order: record::parse_order(record.get(ORDER), ORDER_LAST),
    }
}

/// Build the portfolio cards, ordered with unordered items last.
///
/// # Errors
///
/// Returns [`DatasetError::Empty`] when the sheet has no data rows.
pub fn build(csv: &str) -> Result<Vec<PortfolioItem>, DatasetError> {
    let records = record::dataset(csv)?;
    let mut items: Vec<PortfolioItem> = records.iter().map(project).collect();
    group::sort_by_order(&mut items, |item| item.order);
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unordered_items_sort_last() {
        let sheet = "order,name,package,section,type,image,link\n\
                     ,나중 사이트,베이직,카페,반응형,,https://b.example.com\n\
                     1,먼저 사이트,프리미엄,식당,반응형,,https://a.example.com\n";
        let items = build(sheet).unwrap();
        let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["먼저 사이트", "나중 사이트"]);
    }

    #[test]
    fn images_are_drive_normalized() {
        let sheet = "order,name,image,link\n\
                     1,사이트,https://drive.google.com/open?id=xyz789,https://a.example.com\n";
        let items = build(sheet).unwrap();
        assert_eq!(
            items[0].image,
            "https://drive.google.com/thumbnail?id=xyz789&sz=w2000"
        );
        assert_eq!(items[0].kind, "");
    }
}
