use ego_tree::NodeRef;
use scraper::{Html, Node};
use thiserror::Error;

use super::element::{Attribute, Element};

/// Errors from HTML content parsing.
#[derive(Debug, Error)]
pub enum ContentError {
    /// The item body was blank after trimming. An absent body usually means
    /// an upstream extraction problem, so it surfaces as an error rather
    /// than an empty tree.
    #[error("content is empty")]
    EmptyContent,
}

/// Parses an HTML fragment into an ordered forest of [`Element`]s.
///
/// The fragment is parsed as the children of a synthetic container, so it
/// does not need to be a single well-formed element: multiple top-level
/// siblings each become their own root. Conversion is a faithful structural
/// transcription — no semantic interpretation, no sanitization — applied
/// depth-first:
///
/// - text nodes become trimmed text leaves (kept even when trimming leaves
///   them empty)
/// - element nodes become tag nodes with the tag lowercased, attributes in
///   source order, and recursively converted children
///
/// Comments, doctypes and processing instructions carry no content and are
/// dropped.
pub fn parse_content(html: &str) -> Result<Vec<Element>, ContentError> {
    if html.trim().is_empty() {
        return Err(ContentError::EmptyContent);
    }

    let fragment = Html::parse_fragment(html);
    let roots = fragment
        .root_element()
        .children()
        .filter_map(convert_node)
        .collect();
    Ok(roots)
}

fn convert_node(node: NodeRef<'_, Node>) -> Option<Element> {
    match node.value() {
        Node::Text(text) => Some(Element::text(text.trim())),
        Node::Element(el) => {
            // Iterate the raw attribute map rather than `attrs()`: the
            // convenience accessor yields local names only, and namespaced
            // attributes (xlink:href inside svg) must keep their prefix
            let attributes = el
                .attrs
                .iter()
                .map(|(name, value)| {
                    let name = match &name.prefix {
                        Some(prefix) => format!("{}:{}", prefix, name.local),
                        None => name.local.to_string(),
                    };
                    Attribute::new(name, value.to_string())
                })
                .collect();
            let children = node.children().filter_map(convert_node).collect();
            Some(Element::tag(
                el.name().to_ascii_lowercase(),
                attributes,
                children,
            ))
        }
        _ => None,
    }
}
