//! Host-independent term representation
//!
//! The reference rendering of the conversion output shapes: what a
//! consumer gets when no foreign runtime is involved, and what the
//! conversion tests assert against.

use std::convert::Infallible;

use crate::convert::TermBuilder;

/// A converted node as plain Rust data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Term {
    /// Tag-only marker
    Marker(&'static str),

    /// `(tag, text)` pair
    Text { tag: &'static str, text: Vec<u8> },

    /// `(tag, text, level)` triple
    Heading {
        tag: &'static str,
        text: Vec<u8>,
        level: u8,
    },

    /// `(tag, text, url)` triple
    Link {
        tag: &'static str,
        text: Vec<u8>,
        url: Vec<u8>,
    },
}

impl Term {
    /// Wire tag of this term
    pub fn tag(&self) -> &'static str {
        match self {
            Term::Marker(tag)
            | Term::Text { tag, .. }
            | Term::Heading { tag, .. }
            | Term::Link { tag, .. } => tag,
        }
    }
}

/// Builds [`Term`] values
///
/// No host allocator is involved, so the failure channel is `Infallible`:
/// conversion through this builder cannot fail.
#[derive(Debug, Default)]
pub struct OwnedTerms;

impl TermBuilder for OwnedTerms {
    type Term = Term;
    type Error = Infallible;

    fn marker(&mut self, tag: &'static str) -> Result<Term, Infallible> {
        Ok(Term::Marker(tag))
    }

    fn text(&mut self, tag: &'static str, text: &[u8]) -> Result<Term, Infallible> {
        Ok(Term::Text {
            tag,
            text: text.to_vec(),
        })
    }

    fn heading(&mut self, tag: &'static str, text: &[u8], level: u8) -> Result<Term, Infallible> {
        Ok(Term::Heading {
            tag,
            text: text.to_vec(),
            level,
        })
    }

    fn link(&mut self, tag: &'static str, text: &[u8], url: &[u8]) -> Result<Term, Infallible> {
        Ok(Term::Link {
            tag,
            text: text.to_vec(),
            url: url.to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_accessor() {
        assert_eq!(Term::Marker("eol").tag(), "eol");
        assert_eq!(
            Term::Text {
                tag: "text",
                text: Vec::new()
            }
            .tag(),
            "text"
        );
        assert_eq!(
            Term::Heading {
                tag: "header",
                text: Vec::new(),
                level: 1
            }
            .tag(),
            "header"
        );
        assert_eq!(
            Term::Link {
                tag: "link",
                text: Vec::new(),
                url: Vec::new()
            }
            .tag(),
            "link"
        );
    }

    #[test]
    fn test_builder_copies_payload_bytes() {
        let text = b"payload".to_vec();
        let term = OwnedTerms.text("text", &text).unwrap();
        drop(text);
        assert_eq!(
            term,
            Term::Text {
                tag: "text",
                text: b"payload".to_vec()
            }
        );
    }
}
