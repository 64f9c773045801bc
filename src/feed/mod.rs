//! The feed-to-tree conversion pipeline.
//!
//! Raw document bytes go in, a serializable [`Feed`] comes out:
//!
//! 1. extraction — unmarshal the outer XML into channel and item records,
//!    normalizing text fields and publish dates on the way
//! 2. [`crate::content`] — parse each item's embedded HTML body into an
//!    element forest
//! 3. assembly — combine everything into the final [`Feed`], preserving
//!    source order throughout
//!
//! [`parse_feed`] runs the whole pipeline; [`parse_feed_with`] exposes the
//! date-handling policy. The pipeline is synchronous, allocation-fresh per
//! call, and does no I/O — fetching the bytes is the caller's problem.

mod assembler;
mod extractor;
mod model;
mod parser;

use thiserror::Error;

pub use model::{Feed, Post};
pub use parser::{parse_feed, parse_feed_with, ParseOptions};

/// Errors produced by the conversion pipeline.
#[derive(Debug, Error)]
pub enum FeedError {
    /// The input is not well-formed XML in the expected channel/item shape.
    #[error("malformed feed document: {0}")]
    MalformedDocument(#[from] quick_xml::DeError),

    /// An item's body was blank after normalization. The index is the
    /// zero-based position of the offending item in source order.
    #[error("item {index}: {source}")]
    EmptyContent {
        index: usize,
        #[source]
        source: crate::content::ContentError,
    },

    /// An item's publish date matched no accepted format. Only produced
    /// under [`crate::util::DatePolicy::Strict`]; the default policy
    /// substitutes the current time instead.
    #[error("item {index}: {source}")]
    UnrecognizedDate {
        index: usize,
        #[source]
        source: crate::util::DateError,
    },
}
