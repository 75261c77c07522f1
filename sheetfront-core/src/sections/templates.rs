//! Templates sheet: slides for the section-by-section design galleries.

use crate::gallery::{self, GalleryGroup, Slide};
use crate::media;
use crate::record::{self, BoolRule, DatasetError, ORDER_LAST, Record};

/// Bucket for slides without a section.
pub const FALLBACK_GROUP: &str = "기타";

const KEY: &[&str] = &["key", "Key", "KEY", "\u{feff}key", "키"];
const NAME: &[&str] = &["name", "Name", "NAME", "이름"];
const PACKAGE: &[&str] = &["package", "Package", "PACKAGE", "패키지"];
const SECTION: &[&str] = &["section", "Section", "SECTION", "섹션"];
const IMAGE: &[&str] = &["image", "Image", "IMAGE", "이미지"];
const DESC: &[&str] = &["desc", "Desc", "DESC", "설명"];
const NOTE: &[&str] = &["note", "Note", "NOTE", "비고"];
const TAGS: &[&str] = &["tags", "Tags", "TAGS", "태그"];
const ORDER: &[&str] = &["order", "Order", "ORDER", "순서"];
const HIDDEN: &[&str] = &["hidden", "Hidden", "HIDDEN", "숨김"];

fn project(record: &Record) -> Option<Slide> {
    if BoolRule::Lenient.parse(record.get(HIDDEN)) {
        return None;
    }
    Some(Slide {
        key: record.get(KEY).trim().to_string(),
        name: record.get(NAME).trim().to_string(),
        package: record.get(PACKAGE).trim().to_string(),
        section: record.get(SECTION).trim().to_string(),
        image: media::direct_image_url(record.get(IMAGE)),
        desc: record.get(DESC).trim().to_string(),
        note: record.get(NOTE).trim().to_string(),
        tags: record
            .get(TAGS)
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(ToString::to_string)
            .collect(),
        order: record::parse_order(record.get(ORDER), ORDER_LAST),
    })
}

/// Build the surfaced gallery groups from raw sheet text.
///
/// # Errors
///
/// Returns [`DatasetError::Empty`] when the sheet has no data rows.
pub fn build(csv: &str) -> Result<Vec<GalleryGroup>, DatasetError> {
    let records = record::dataset(csv)?;
    let slides: Vec<Slide> = records.iter().filter_map(project).collect();
    Ok(gallery::build_groups(slides, FALLBACK_GROUP))
}
