use super::extractor::{ChannelRecord, ItemRecord};
use super::model::{Feed, Post};
use crate::content::Element;

/// Combines the extracted channel record with each item's parsed content
/// forest into the final [`Feed`].
///
/// Pure data assembly: no parsing, no fallback logic, nothing fallible.
/// Item order and per-item field order come through exactly as produced
/// upstream.
pub fn assemble_feed(channel: ChannelRecord, items: Vec<(ItemRecord, Vec<Element>)>) -> Feed {
    let posts = items
        .into_iter()
        .map(|(item, content)| Post {
            title: item.title,
            link: item.link,
            author: item.author,
            published: item.published,
            content,
            categories: item.categories,
        })
        .collect();

    Feed {
        title: channel.title,
        description: channel.description,
        link: channel.link,
        posts,
    }
}
