//! Markdown node model
//!
//! One `NodeInfo` is built per construct recognized by the external
//! markdown parser. Payload bytes are copied out of the parser's buffer at
//! construction time, so a node stays valid after the parser frees or
//! reuses that buffer.

/// Discriminant for the closed set of recognized constructs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    EndOfLine,
    Text,
    FixedWidth,
    Header,
    Italics,
    Bold,
    Link,
    None,
}

/// Returned by [`NodeKind::from_tag`] for a tag outside the wire contract
#[derive(Debug, thiserror::Error)]
#[error("unknown node tag: {0}")]
pub struct UnknownTag(pub String);

impl NodeKind {
    /// Every kind, in declaration order
    pub const ALL: [NodeKind; 8] = [
        NodeKind::EndOfLine,
        NodeKind::Text,
        NodeKind::FixedWidth,
        NodeKind::Header,
        NodeKind::Italics,
        NodeKind::Bold,
        NodeKind::Link,
        NodeKind::None,
    ];

    /// Wire tag carried on every converted host value
    ///
    /// Host-side consumers match on these names, so renaming one is a
    /// breaking change.
    pub fn tag(self) -> &'static str {
        match self {
            NodeKind::EndOfLine => "eol",
            NodeKind::Text => "text",
            NodeKind::FixedWidth => "fixed_width",
            NodeKind::Header => "header",
            NodeKind::Italics => "italics",
            NodeKind::Bold => "bold",
            NodeKind::Link => "link",
            NodeKind::None => "none",
        }
    }

    /// Inverse of [`tag`](NodeKind::tag)
    pub fn from_tag(tag: &str) -> Result<NodeKind, UnknownTag> {
        match tag {
            "eol" => Ok(NodeKind::EndOfLine),
            "text" => Ok(NodeKind::Text),
            "fixed_width" => Ok(NodeKind::FixedWidth),
            "header" => Ok(NodeKind::Header),
            "italics" => Ok(NodeKind::Italics),
            "bold" => Ok(NodeKind::Bold),
            "link" => Ok(NodeKind::Link),
            "none" => Ok(NodeKind::None),
            other => Err(UnknownTag(other.to_string())),
        }
    }
}

/// One parsed markdown construct with the payload its kind carries
///
/// Each variant holds exactly the fields meaningful for its kind, so a
/// heading level on a non-header or a url on a non-link is unrepresentable.
/// Payloads are raw bytes: markdown content is arbitrary UTF-8 and is kept
/// byte-for-byte until a [`TermBuilder`](crate::TermBuilder) transcodes it
/// for its host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeInfo {
    /// Hard line ending
    EndOfLine,

    /// Plain text run
    Text(Vec<u8>),

    /// Fixed-width (code) run
    FixedWidth(Vec<u8>),

    /// Heading text with depth (1-6 by markdown convention)
    Header { text: Vec<u8>, level: u8 },

    /// Emphasized run
    Italics(Vec<u8>),

    /// Strongly emphasized run
    Bold(Vec<u8>),

    /// Hyperlink label and target
    Link { text: Vec<u8>, url: Vec<u8> },

    /// Recognized construct with no renderable content
    None,
}

/// Copy a parser buffer into node-owned storage
///
/// An absent buffer is a valid empty payload, not a parse failure.
fn copied(buffer: Option<&[u8]>) -> Vec<u8> {
    buffer.map(<[u8]>::to_vec).unwrap_or_default()
}

impl NodeInfo {
    /// Plain text node from a parser buffer
    pub fn text(buffer: Option<&[u8]>) -> Self {
        NodeInfo::Text(copied(buffer))
    }

    /// Fixed-width node from a parser buffer
    pub fn fixed_width(buffer: Option<&[u8]>) -> Self {
        NodeInfo::FixedWidth(copied(buffer))
    }

    /// Heading node from a parser buffer and depth
    pub fn header(buffer: Option<&[u8]>, level: u8) -> Self {
        NodeInfo::Header {
            text: copied(buffer),
            level,
        }
    }

    /// Italics node from a parser buffer
    pub fn italics(buffer: Option<&[u8]>) -> Self {
        NodeInfo::Italics(copied(buffer))
    }

    /// Bold node from a parser buffer
    pub fn bold(buffer: Option<&[u8]>) -> Self {
        NodeInfo::Bold(copied(buffer))
    }

    /// Link node from label and target buffers
    pub fn link(text: Option<&[u8]>, url: Option<&[u8]>) -> Self {
        NodeInfo::Link {
            text: copied(text),
            url: copied(url),
        }
    }

    /// Kind discriminant of this node
    pub fn kind(&self) -> NodeKind {
        match self {
            NodeInfo::EndOfLine => NodeKind::EndOfLine,
            NodeInfo::Text(_) => NodeKind::Text,
            NodeInfo::FixedWidth(_) => NodeKind::FixedWidth,
            NodeInfo::Header { .. } => NodeKind::Header,
            NodeInfo::Italics(_) => NodeKind::Italics,
            NodeInfo::Bold(_) => NodeKind::Bold,
            NodeInfo::Link { .. } => NodeKind::Link,
            NodeInfo::None => NodeKind::None,
        }
    }

    /// Wire tag of this node's kind
    pub fn tag(&self) -> &'static str {
        self.kind().tag()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factories_set_kind() {
        assert_eq!(NodeInfo::text(Some(b"a")).kind(), NodeKind::Text);
        assert_eq!(NodeInfo::fixed_width(Some(b"a")).kind(), NodeKind::FixedWidth);
        assert_eq!(NodeInfo::header(Some(b"a"), 1).kind(), NodeKind::Header);
        assert_eq!(NodeInfo::italics(Some(b"a")).kind(), NodeKind::Italics);
        assert_eq!(NodeInfo::bold(Some(b"a")).kind(), NodeKind::Bold);
        assert_eq!(NodeInfo::link(Some(b"a"), Some(b"b")).kind(), NodeKind::Link);
        assert_eq!(NodeInfo::EndOfLine.kind(), NodeKind::EndOfLine);
        assert_eq!(NodeInfo::None.kind(), NodeKind::None);
    }

    #[test]
    fn test_absent_buffer_is_empty() {
        assert_eq!(NodeInfo::text(None), NodeInfo::Text(Vec::new()));
        assert_eq!(
            NodeInfo::header(None, 3),
            NodeInfo::Header {
                text: Vec::new(),
                level: 3
            }
        );
        assert_eq!(
            NodeInfo::link(Some(b"label"), None),
            NodeInfo::Link {
                text: b"label".to_vec(),
                url: Vec::new()
            }
        );
    }

    #[test]
    fn test_content_outlives_source_buffer() {
        let node = {
            let buffer = b"transient".to_vec();
            NodeInfo::text(Some(&buffer))
        };
        assert_eq!(node, NodeInfo::Text(b"transient".to_vec()));
    }

    #[test]
    fn test_tag_round_trip() {
        for kind in NodeKind::ALL {
            assert_eq!(NodeKind::from_tag(kind.tag()).unwrap(), kind);
        }
    }

    #[test]
    fn test_unknown_tag() {
        let err = NodeKind::from_tag("paragraph").unwrap_err();
        assert_eq!(err.to_string(), "unknown node tag: paragraph");
    }
}
