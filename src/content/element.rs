use serde::{Deserialize, Serialize};

/// One node of a post's content tree.
///
/// A node is exactly one of two shapes — a text leaf or a tag node — so the
/// "both tag and value populated" state is unrepresentable. Serialization
/// flattens to the wire shape consumers expect: text leaves become
/// `{"value": "..."}` and tag nodes become
/// `{"tag": "...", "attributes": [...], "children": [...]}`, which keeps the
/// two shapes distinguishable by field presence alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Element {
    /// Character data between tags, trimmed. May be empty: purely-whitespace
    /// text nodes are kept so the tree's node count mirrors the source markup.
    Text { value: String },
    /// A markup element: lowercase tag name, attributes and children in
    /// source document order.
    Tag {
        tag: String,
        attributes: Vec<Attribute>,
        children: Vec<Element>,
    },
}

impl Element {
    /// Builds a text leaf.
    pub fn text(value: impl Into<String>) -> Self {
        Element::Text {
            value: value.into(),
        }
    }

    /// Builds a tag node.
    pub fn tag(
        tag: impl Into<String>,
        attributes: Vec<Attribute>,
        children: Vec<Element>,
    ) -> Self {
        Element::Tag {
            tag: tag.into(),
            attributes,
            children,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Element::Text { .. })
    }
}

/// A single name/value attribute pair, preserved verbatim.
///
/// Attributes live in an ordered list rather than a map: source order is part
/// of the output contract, and duplicate names must stay representable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Attribute {
            name: name.into(),
            value: value.into(),
        }
    }
}
