use serde::{Deserialize, Serialize};

use crate::content::Element;

/// The top-level parsed document: channel metadata plus posts in source order.
///
/// Field names are part of the serialization contract and match the wire
/// shape consumers already depend on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feed {
    pub title: String,
    pub description: String,
    pub link: String,
    /// Posts in source item order — never reordered, deduplicated or filtered.
    pub posts: Vec<Post>,
}

/// One syndicated entry: metadata plus the parsed body forest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub title: String,
    pub link: String,
    pub author: String,
    /// Canonical RFC 3339 timestamp.
    pub published: String,
    /// Parsed body content, root elements in source markup order.
    pub content: Vec<Element>,
    /// May be empty, never null; source order preserved.
    pub categories: Vec<String>,
}
