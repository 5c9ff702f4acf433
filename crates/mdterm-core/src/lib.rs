//! mdterm-core - Markdown node model and host term conversion
//!
//! An external markdown parser recognizes constructs and builds one
//! [`NodeInfo`] per construct; this crate re-expresses each node as a
//! tagged term in whatever value system the host runtime uses, behind the
//! narrow [`TermBuilder`] seam. Parsing and rendering stay outside.
//!
//! # Architecture
//!
//! ```text
//! parser buffers ──▶ NodeInfo ──to_term──▶ TermBuilder ──▶ host value
//!                    (owned copy)          (napi, owned Rust terms, ...)
//! ```
//!
//! # Example
//!
//! ```rust
//! use mdterm_core::{to_term, NodeInfo, OwnedTerms, Term};
//!
//! let node = NodeInfo::header(Some(b"Title"), 2);
//! let term = to_term(&node, &mut OwnedTerms).unwrap();
//!
//! assert_eq!(
//!     term,
//!     Term::Heading {
//!         tag: "header",
//!         text: b"Title".to_vec(),
//!         level: 2,
//!     }
//! );
//! ```

mod convert;
mod node;
mod term;

pub use convert::{to_term, to_terms, TermBuilder};
pub use node::{NodeInfo, NodeKind, UnknownTag};
pub use term::{OwnedTerms, Term};
