use serde::Deserialize;

use super::FeedError;
use crate::util::{clean_text, normalize_date, try_normalize_date, DatePolicy};

/// Channel metadata extracted from the document, already normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelRecord {
    pub title: String,
    pub description: String,
    pub link: String,
}

/// One item record extracted from the document, already normalized.
///
/// `content_html` is the item's raw embedded HTML body; parsing it into a
/// tree is the content module's job, not the extractor's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRecord {
    pub title: String,
    pub link: String,
    pub author: String,
    /// Canonical RFC 3339 timestamp.
    pub published: String,
    pub content_html: String,
    pub categories: Vec<String>,
}

/// Wire shape of the RSS document. Deserialization is shape-driven: unknown
/// elements and attributes are ignored, absent optional fields default to
/// empty rather than erroring.
#[derive(Debug, Deserialize)]
struct RawDocument {
    channel: RawChannel,
}

#[derive(Debug, Deserialize)]
struct RawChannel {
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    link: String,
    #[serde(rename = "item", default)]
    items: Vec<RawItem>,
}

#[derive(Debug, Deserialize)]
struct RawItem {
    #[serde(default)]
    title: String,
    #[serde(default)]
    link: String,
    // Qualified names as they appear on the wire; the bare aliases cover
    // feeds that declare a default namespace instead of a prefix
    #[serde(rename = "dc:creator", alias = "creator", default)]
    creator: String,
    #[serde(rename = "pubDate", default)]
    pub_date: String,
    #[serde(rename = "content:encoded", alias = "encoded", default)]
    content: String,
    #[serde(rename = "category", default)]
    categories: Vec<String>,
}

/// Unmarshals raw feed bytes into normalized channel and item records.
///
/// Narrative fields (titles, description, author, body HTML) go through
/// [`clean_text`]; the publish date goes through date normalization under the
/// given policy. Item order is the source document's order.
///
/// # Errors
///
/// - [`FeedError::MalformedDocument`] when the bytes are not well-formed XML
///   in the expected channel/item shape
/// - [`FeedError::UnrecognizedDate`] under [`DatePolicy::Strict`] only
pub fn extract_document(
    bytes: &[u8],
    policy: DatePolicy,
) -> Result<(ChannelRecord, Vec<ItemRecord>), FeedError> {
    let raw: RawDocument = quick_xml::de::from_reader(bytes)?;

    let channel = ChannelRecord {
        title: clean_text(&raw.channel.title).into_owned(),
        description: clean_text(&raw.channel.description).into_owned(),
        link: raw.channel.link,
    };

    let mut items = Vec::with_capacity(raw.channel.items.len());
    for (index, item) in raw.channel.items.into_iter().enumerate() {
        let published = match policy {
            DatePolicy::Fallback => normalize_date(&item.pub_date),
            DatePolicy::Strict => try_normalize_date(&item.pub_date)
                .map_err(|source| FeedError::UnrecognizedDate { index, source })?,
        };

        items.push(ItemRecord {
            title: clean_text(&item.title).into_owned(),
            link: item.link,
            author: clean_text(&item.creator).into_owned(),
            published,
            content_html: clean_text(&item.content).into_owned(),
            categories: item.categories,
        });
    }

    Ok((channel, items))
}
