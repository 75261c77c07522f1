//! Sheetfront content pipeline
//!
//! Platform-agnostic core for the spreadsheet-driven landing page: CSV
//! parsing, record normalization, grouping/ordering, per-sheet projections,
//! and the gallery viewer state machine. No DOM or network code lives here;
//! the web crate supplies those seams.

pub mod csv;
pub mod gallery;
pub mod group;
pub mod media;
pub mod record;
pub mod sections;
pub mod text;

// Re-export commonly used types
pub use gallery::{GalleryGroup, MIN_GROUP_SLIDES, Slide, ViewerState};
pub use group::{Grouped, group_by, order_group_keys, sort_by_order, sort_groups};
pub use record::{BoolRule, DatasetError, ORDER_LAST, Record, dataset, parse_order};
