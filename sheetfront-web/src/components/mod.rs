//! One component per page section. Each fetches its own sheet, runs the
//! core pipeline, and renders; a failure replaces that section's content
//! with its fixed error string without touching the others.

pub mod faq;
pub mod gallery_viewer;
pub mod inquiry;
pub mod notice;
pub mod options;
pub mod packages;
pub mod portfolio;
pub mod templates;

use yew::{AttrValue, Html};

/// Lifecycle of one section's sheet load.
#[derive(Debug, Clone, PartialEq)]
pub enum Remote<T> {
    Loading,
    Ready(T),
    Failed,
}

/// Render sanitized sheet markup (script-stripped, `<br>`-converted) as-is.
pub(crate) fn raw_html(markup: &str) -> Html {
    Html::from_html_unchecked(AttrValue::from(markup.to_string()))
}
