//! Normalization utilities for raw feed fields.
//!
//! Two pure, dependency-free normalizers applied by the document extractor
//! before any structural parsing happens:
//!
//! - **Text**: [`clean_text`] strips leaked CDATA markers, repairs a fixed
//!   table of mojibake artifacts, and trims whitespace.
//! - **Dates**: [`normalize_date`] converts the assorted date formats found
//!   in the wild to a single canonical RFC 3339 representation, with a
//!   configurable policy ([`DatePolicy`]) for unrecognized input.

mod date;
mod text;

pub use date::{normalize_date, try_normalize_date, DateError, DatePolicy};
pub use text::clean_text;
