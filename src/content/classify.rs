use serde::{Deserialize, Serialize};

use super::element::Element;

/// Semantic kind of a content element.
///
/// A classification layered on top of the structural tree: the parser itself
/// records tags verbatim, and consumers that want "is this a paragraph or an
/// image" map tag names through this enum. Serialized names are camelCase to
/// match the wire vocabulary (`"unorderedList"`, `"listItem"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ElementKind {
    Text,
    Paragraph,
    Heading,
    Link,
    Image,
    Figure,
    Figcaption,
    Strong,
    Emphasis,
    UnorderedList,
    OrderedList,
    ListItem,
    Break,
}

impl ElementKind {
    /// Maps a lowercase tag name to its kind. Unknown tags have no kind.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "p" => Some(Self::Paragraph),
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => Some(Self::Heading),
            "a" => Some(Self::Link),
            "img" => Some(Self::Image),
            "figure" => Some(Self::Figure),
            "figcaption" => Some(Self::Figcaption),
            "strong" | "b" => Some(Self::Strong),
            "em" | "i" => Some(Self::Emphasis),
            "ul" => Some(Self::UnorderedList),
            "ol" => Some(Self::OrderedList),
            "li" => Some(Self::ListItem),
            "br" => Some(Self::Break),
            _ => None,
        }
    }

    /// Block-level kinds start a new line of flow; everything else is inline.
    pub fn is_block(self) -> bool {
        matches!(
            self,
            Self::Heading
                | Self::Paragraph
                | Self::Figure
                | Self::UnorderedList
                | Self::OrderedList
        )
    }
}

impl Element {
    /// Semantic kind of this node: text leaves are [`ElementKind::Text`],
    /// tag nodes map through [`ElementKind::from_tag`].
    pub fn kind(&self) -> Option<ElementKind> {
        match self {
            Element::Text { .. } => Some(ElementKind::Text),
            Element::Tag { tag, .. } => ElementKind::from_tag(tag),
        }
    }
}
