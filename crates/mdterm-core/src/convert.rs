//! Node to host term conversion
//!
//! The host runtime's value-construction context is abstracted as a
//! [`TermBuilder`]; conversion matches on a node's kind and asks the
//! builder for the one shape that kind produces.

use crate::node::NodeInfo;

/// Host value-construction context
///
/// One method per produced shape. `Term` is whatever opaque value the host
/// understands; `Error` is the host's allocation failure. A builder is
/// borrowed for the duration of a conversion and used sequentially; the
/// conversion never creates or destroys the underlying context.
pub trait TermBuilder {
    type Term;
    type Error;

    /// Tag-only marker value
    fn marker(&mut self, tag: &'static str) -> Result<Self::Term, Self::Error>;

    /// Tagged `(tag, text)` pair
    fn text(&mut self, tag: &'static str, text: &[u8]) -> Result<Self::Term, Self::Error>;

    /// Tagged `(tag, text, level)` triple
    fn heading(
        &mut self,
        tag: &'static str,
        text: &[u8],
        level: u8,
    ) -> Result<Self::Term, Self::Error>;

    /// Tagged `(tag, text, url)` triple
    fn link(
        &mut self,
        tag: &'static str,
        text: &[u8],
        url: &[u8],
    ) -> Result<Self::Term, Self::Error>;
}

/// Convert one node into a host term
///
/// The produced shape is determined solely by the node's kind. The node is
/// neither consumed nor mutated; converting it again yields a term with
/// equal content. The only failure channel is the builder itself, and its
/// error surfaces unchanged.
pub fn to_term<B: TermBuilder>(node: &NodeInfo, builder: &mut B) -> Result<B::Term, B::Error> {
    let tag = node.tag();
    match node {
        NodeInfo::EndOfLine | NodeInfo::None => builder.marker(tag),

        NodeInfo::Text(text)
        | NodeInfo::FixedWidth(text)
        | NodeInfo::Italics(text)
        | NodeInfo::Bold(text) => builder.text(tag, text),

        NodeInfo::Header { text, level } => builder.heading(tag, text, *level),

        NodeInfo::Link { text, url } => builder.link(tag, text, url),
    }
}

/// Convert a parsed document's nodes, in document order
///
/// Markdown line and paragraph structure depends on node sequence, so the
/// terms come back in exactly the order the parser produced the nodes.
/// Stops at the first builder failure; skipping or retrying the rest of
/// the document is the caller's decision.
pub fn to_terms<B: TermBuilder>(
    nodes: &[NodeInfo],
    builder: &mut B,
) -> Result<Vec<B::Term>, B::Error> {
    nodes.iter().map(|node| to_term(node, builder)).collect()
}
