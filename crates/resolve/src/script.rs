//! Embedded script extraction and injection.
//!
//! Content splicing never executes the scripts a fragment carries — the
//! hosting rendering environment only runs a script node that is freshly
//! appended to the document. The resolver therefore extracts every script
//! from spliced content (in discovery order, detaching the originals) and
//! hands them to a [`ScriptInjector`], whose contract is exactly that
//! append-to-execute capability.

use fragstitch_dom::{Document, NodeId};

/// An executable fragment extracted from spliced content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptSource {
    /// External script reference (`src` locator).
    External(String),
    /// Inline script text.
    Inline(String),
}

/// Receives extracted scripts, one at a time, in discovery order.
///
/// Implementations append a fresh script node to the document body; in the
/// hosting rendering environment that append is what triggers execution.
pub trait ScriptInjector: Send + Sync {
    /// Hand one extracted script to the host.
    fn inject(&self, doc: &mut Document, script: &ScriptSource);
}

/// Default injector: appends a fresh `<script>` node to the document body.
pub struct BodyInjector;

impl ScriptInjector for BodyInjector {
    fn inject(&self, doc: &mut Document, script: &ScriptSource) {
        let body = doc.body();
        let node = doc.create_element("script");
        match script {
            ScriptSource::External(src) => doc.set_attr(node, "src", src),
            ScriptSource::Inline(text) => {
                let text_node = doc.create_text(text);
                doc.append_child(node, text_node);
            }
        }
        doc.append_child(body, node);
    }
}

/// Extract every `<script>` below `root` in document order.
///
/// Each script element is detached from its position and returned as a
/// [`ScriptSource`]: external when it carries a non-empty `src`, inline
/// otherwise. Scripts inside a nested marker's placeholder content are
/// included — the nested fragment's own scripts arrive with its recursive
/// pass.
pub fn extract_scripts(doc: &mut Document, root: NodeId) -> Vec<ScriptSource> {
    let mut found = Vec::new();
    collect_script_nodes(doc, root, &mut found);

    let mut scripts = Vec::new();
    for node in found {
        let script = match doc.attr(node, "src") {
            Some(src) if !src.is_empty() => ScriptSource::External(src.to_string()),
            _ => ScriptSource::Inline(doc.text_content(node)),
        };
        doc.detach(node);
        scripts.push(script);
    }
    scripts
}

fn collect_script_nodes(doc: &Document, root: NodeId, out: &mut Vec<NodeId>) {
    for &child in doc.children(root) {
        if doc.tag_name(child) == Some("script") {
            out.push(child);
        } else if doc.tag_name(child).is_some() {
            collect_script_nodes(doc, child, out);
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
