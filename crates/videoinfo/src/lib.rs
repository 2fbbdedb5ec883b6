//! # videoinfo-filter
//!
//! Selection of adaptive stream formats from an encoded `video_info`
//! document. The document is an `&`-separated, percent-encoded key-value
//! payload whose `adaptive_fmts` field holds a comma-separated list of
//! encoded sub-records, one per stream variant.
//!
//! A [`FormatSelector`] accumulates removal rules (single identifiers, a
//! quality ceiling, or an explicit retain-list) and materializes a reduced
//! document in which the dropped sub-records are deleted surgically, leaving
//! every other byte of the payload untouched.

pub mod catalog;
pub mod config;
pub mod document;
pub mod error;
pub mod selection;

pub use catalog::{FormatInfo, Itag};
pub use config::FormatPreferences;
pub use error::VideoInfoError;
pub use selection::{FormatSelector, RemovalPlan, apply_removals};
