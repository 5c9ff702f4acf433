#![deny(clippy::all)]

//! Node.js host binding for mdterm
//!
//! Renders converted markdown nodes as JavaScript values. The napi [`Env`]
//! is the value-construction context: it is borrowed for the duration of a
//! conversion, never owned, and every allocation failure it reports
//! surfaces as a `napi::Error`.
//!
//! Terms are arrays, the JS analogue of tagged tuples: `["eol"]`,
//! `["text", "hello"]`, `["header", "Title", 2]`,
//! `["link", "click", "http://x"]`.
//!
//! This crate has no `#[napi]` exports of its own: the parser binding that
//! embeds it owns the module surface and registers the exported functions.

use napi::{Env, JsObject, JsString, JsUnknown, Result};

use mdterm_core::{to_term, NodeInfo, TermBuilder};

/// Term builder over a borrowed napi environment
pub struct JsTerms<'env> {
    env: &'env Env,
}

impl<'env> JsTerms<'env> {
    pub fn new(env: &'env Env) -> Self {
        Self { env }
    }

    /// Node payload bytes as a JS string
    ///
    /// Markdown payloads are UTF-8; transcoding is lossy only for invalid
    /// sequences, which a well-formed parse does not produce.
    fn js_string(&self, bytes: &[u8]) -> Result<JsString> {
        self.env.create_string(&String::from_utf8_lossy(bytes))
    }
}

impl TermBuilder for JsTerms<'_> {
    type Term = JsUnknown;
    type Error = napi::Error;

    fn marker(&mut self, tag: &'static str) -> Result<JsUnknown> {
        let mut term = self.env.create_array_with_length(1)?;
        term.set_element(0, self.env.create_string(tag)?)?;
        Ok(term.into_unknown())
    }

    fn text(&mut self, tag: &'static str, text: &[u8]) -> Result<JsUnknown> {
        let mut term = self.env.create_array_with_length(2)?;
        term.set_element(0, self.env.create_string(tag)?)?;
        term.set_element(1, self.js_string(text)?)?;
        Ok(term.into_unknown())
    }

    fn heading(&mut self, tag: &'static str, text: &[u8], level: u8) -> Result<JsUnknown> {
        let mut term = self.env.create_array_with_length(3)?;
        term.set_element(0, self.env.create_string(tag)?)?;
        term.set_element(1, self.js_string(text)?)?;
        term.set_element(2, self.env.create_uint32(u32::from(level))?)?;
        Ok(term.into_unknown())
    }

    fn link(&mut self, tag: &'static str, text: &[u8], url: &[u8]) -> Result<JsUnknown> {
        let mut term = self.env.create_array_with_length(3)?;
        term.set_element(0, self.env.create_string(tag)?)?;
        term.set_element(1, self.js_string(text)?)?;
        term.set_element(2, self.js_string(url)?)?;
        Ok(term.into_unknown())
    }
}

/// Convert one node inside the given environment
pub fn to_js_term(env: &Env, node: &NodeInfo) -> Result<JsUnknown> {
    to_term(node, &mut JsTerms::new(env))
}

/// Convert a parsed document's nodes into a JS array, in document order
pub fn to_js_document(env: &Env, nodes: &[NodeInfo]) -> Result<JsObject> {
    let mut list = env.create_array_with_length(nodes.len())?;
    let mut builder = JsTerms::new(env);
    for (index, node) in nodes.iter().enumerate() {
        list.set_element(index as u32, to_term(node, &mut builder)?)?;
    }
    Ok(list)
}
