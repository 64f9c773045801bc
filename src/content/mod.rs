//! Embedded HTML content parsing.
//!
//! Each feed item carries its body as an HTML string inside the XML. This
//! module converts that fragment into a typed tree:
//!
//! - [`Element`] / [`Attribute`] — the tree's node model, a tagged union of
//!   text leaves and tag nodes
//! - [`parse_content`] — HTML fragment → ordered forest of root elements
//! - [`ElementKind`] — optional semantic classification of tag names
//!
//! The conversion is a faithful structural transcription of the markup. It
//! does not sanitize: scripts, event handlers and anything else in the source
//! come through verbatim, and rendering them safely is the consumer's job.

mod classify;
mod element;
mod tree;

pub use classify::ElementKind;
pub use element::{Attribute, Element};
pub use tree::{parse_content, ContentError};
