//! feedtree — converts RSS feed documents into a typed, serializable tree.
//!
//! A feed document arrives as raw XML bytes with each item's body embedded
//! as an HTML string. [`parse_feed`] turns that into a [`Feed`]: channel
//! metadata plus an ordered list of [`Post`]s, each carrying its body as a
//! recursively structured [`Element`] forest (tag nodes with attributes and
//! children, or text leaves).
//!
//! The crate is a pure conversion core. It performs no network I/O, no
//! retries, no caching, and no HTML sanitization — it reproduces structure
//! and content faithfully and leaves everything else to its callers.
//!
//! # Example
//!
//! ```
//! use feedtree::{parse_feed, Element};
//!
//! let xml = br#"<rss version="2.0"><channel>
//!   <title>Example Blog</title>
//!   <description>Stories</description>
//!   <link>https://example.com</link>
//!   <item>
//!     <title><![CDATA[Hello]]></title>
//!     <link>https://example.com/hello</link>
//!     <pubDate>Mon, 02 Jan 2006 15:04:05 -0700</pubDate>
//!     <content:encoded><![CDATA[<p>Hello <strong>World</strong></p>]]></content:encoded>
//!   </item>
//! </channel></rss>"#;
//!
//! let feed = parse_feed(xml)?;
//! assert_eq!(feed.title, "Example Blog");
//! assert_eq!(feed.posts[0].published, "2006-01-02T15:04:05-07:00");
//!
//! match &feed.posts[0].content[0] {
//!     Element::Tag { tag, children, .. } => {
//!         assert_eq!(tag, "p");
//!         assert_eq!(children.len(), 2);
//!     }
//!     Element::Text { .. } => unreachable!(),
//! }
//! # Ok::<(), feedtree::FeedError>(())
//! ```

pub mod content;
pub mod feed;
pub mod util;

pub use content::{Attribute, ContentError, Element, ElementKind};
pub use feed::{parse_feed, parse_feed_with, Feed, FeedError, ParseOptions, Post};
pub use util::DatePolicy;
