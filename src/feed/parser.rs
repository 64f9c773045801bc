use super::model::Feed;
use super::{assembler, extractor, FeedError};
use crate::content;
use crate::util::DatePolicy;

/// Options controlling a single parse invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// How unrecognized publish dates are handled. Defaults to
    /// [`DatePolicy::Fallback`] (substitute the current time).
    pub date_policy: DatePolicy,
}

/// Parses a raw feed document into a [`Feed`] with default options.
///
/// The whole pipeline in one synchronous call: XML extraction, per-field
/// normalization, per-item HTML tree parsing, and final assembly. Each
/// invocation is a pure function of its input; nothing is cached or shared
/// across calls.
///
/// # Errors
///
/// - [`FeedError::MalformedDocument`] — the bytes are not well-formed XML in
///   the expected channel/item shape
/// - [`FeedError::EmptyContent`] — an item's body is blank after
///   normalization; the whole parse fails rather than skipping the item
pub fn parse_feed(bytes: &[u8]) -> Result<Feed, FeedError> {
    parse_feed_with(bytes, ParseOptions::default())
}

/// Parses a raw feed document into a [`Feed`] under the given options.
pub fn parse_feed_with(bytes: &[u8], options: ParseOptions) -> Result<Feed, FeedError> {
    let (channel, items) = extractor::extract_document(bytes, options.date_policy)?;
    tracing::debug!(
        channel = %channel.title,
        items = items.len(),
        "extracted feed document"
    );

    let mut parsed = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        let forest = content::parse_content(&item.content_html)
            .map_err(|source| FeedError::EmptyContent { index, source })?;
        parsed.push((item, forest));
    }

    Ok(assembler::assemble_feed(channel, parsed))
}
