//! Template gallery groups and the modal viewer state machine.

use crate::group::{self, Grouped};
use crate::record::ORDER_LAST;
use serde::{Deserialize, Serialize};

/// Minimum qualifying slides for a gallery group to surface. Sparser groups
/// are withheld rather than shown half-filled.
pub const MIN_GROUP_SLIDES: usize = 5;

/// One template slide inside a gallery group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Slide {
    pub key: String,
    pub name: String,
    pub package: String,
    pub section: String,
    pub image: String,
    pub desc: String,
    pub note: String,
    pub tags: Vec<String>,
    pub order: f64,
}

/// A surfaced gallery group. Slides are ordered; the group's own sort key is
/// its first slide's order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryGroup {
    pub key: String,
    pub slides: Vec<Slide>,
}

impl GalleryGroup {
    fn sort_key(&self) -> f64 {
        self.slides.first().map_or(ORDER_LAST, |slide| slide.order)
    }
}

/// Build surfaced gallery groups from slides.
///
/// Slides without an image never qualify; groups with fewer than
/// [`MIN_GROUP_SLIDES`] qualifying slides are omitted entirely.
#[must_use]
pub fn build_groups(slides: Vec<Slide>, fallback: &str) -> Vec<GalleryGroup> {
    let with_images: Vec<Slide> = slides
        .into_iter()
        .filter(|slide| !slide.image.trim().is_empty())
        .collect();

    let mut grouped: Vec<Grouped<Slide>> =
        group::group_by(with_images, |slide| slide.section.as_str(), fallback);
    grouped.retain(|g| g.items.len() >= MIN_GROUP_SLIDES);

    let mut groups: Vec<GalleryGroup> = grouped
        .into_iter()
        .map(|mut g| {
            group::sort_by_order(&mut g.items, |slide| slide.order);
            GalleryGroup {
                key: g.key,
                slides: g.items,
            }
        })
        .collect();
    groups.sort_by(|a, b| a.sort_key().total_cmp(&b.sort_key()));
    groups
}

/// Modal slider state for browsing one gallery group.
///
/// While open, the index is always a valid position into the open group's
/// slides; empty groups are not openable.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewerState {
    #[default]
    Closed,
    Open { group: GalleryGroup, index: usize },
}

impl ViewerState {
    /// Open a group at its first slide. Returns `None` for an empty group.
    #[must_use]
    pub fn open(group: GalleryGroup) -> Option<Self> {
        if group.slides.is_empty() {
            None
        } else {
            Some(Self::Open { group, index: 0 })
        }
    }

    /// Advance one slide, wrapping past the end back to the first.
    #[must_use]
    pub fn next(&self) -> Self {
        match self {
            Self::Open { group, index } => Self::Open {
                group: group.clone(),
                index: (index + 1) % group.slides.len(),
            },
            Self::Closed => Self::Closed,
        }
    }

    /// Step back one slide, wrapping before the first to the last.
    #[must_use]
    pub fn prev(&self) -> Self {
        match self {
            Self::Open { group, index } => {
                let len = group.slides.len();
                Self::Open {
                    group: group.clone(),
                    index: (index + len - 1) % len,
                }
            }
            Self::Closed => Self::Closed,
        }
    }

    /// Jump directly to a slide position, clamped to the slide range.
    #[must_use]
    pub fn jump(&self, target: usize) -> Self {
        match self {
            Self::Open { group, .. } => {
                let last = group.slides.len().saturating_sub(1);
                Self::Open {
                    group: group.clone(),
                    index: target.min(last),
                }
            }
            Self::Closed => Self::Closed,
        }
    }

    /// Discard the open group. Reopening always restarts at the first slide.
    #[must_use]
    pub const fn close(&self) -> Self {
        Self::Closed
    }

    /// The open group and current slide index, when open.
    #[must_use]
    pub const fn current(&self) -> Option<(&GalleryGroup, usize)> {
        match self {
            Self::Open { group, index } => Some((group, *index)),
            Self::Closed => None,
        }
    }
}
