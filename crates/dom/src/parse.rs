//! Conversion from the html5ever parse tree into the arena model.

use ego_tree::NodeRef;
use scraper::{Html, Node as HtmlNode};

use crate::document::Document;
use crate::node::NodeId;

/// Parse a full document and convert it into a fresh arena.
pub(crate) fn parse_document(html: &str) -> Document {
    let parsed = Html::parse_document(html);
    let mut doc = Document::new();
    let root = doc.root();
    for child in parsed.tree.root().children() {
        append_tree(&mut doc, root, child);
    }
    doc
}

/// Parse fragment markup and append its top-level nodes under `parent`.
///
/// html5ever wraps fragment content in a synthetic `<html>` element; that
/// wrapper is unwrapped here so only the author's nodes land in the arena.
pub(crate) fn append_fragment(doc: &mut Document, parent: NodeId, html: &str) {
    let parsed = Html::parse_fragment(html);
    for child in parsed.tree.root().children() {
        if let Some(element) = child.value().as_element() {
            if element.name() == "html" {
                for grandchild in child.children() {
                    append_tree(doc, parent, grandchild);
                }
                continue;
            }
        }
        append_tree(doc, parent, child);
    }
}

/// Recursively copy one parse-tree node (and its subtree) into the arena.
fn append_tree(doc: &mut Document, parent: NodeId, node: NodeRef<'_, HtmlNode>) {
    match node.value() {
        HtmlNode::Element(element) => {
            let id = doc.create_element(element.name());
            for (name, value) in element.attrs() {
                doc.set_attr(id, name, value);
            }
            doc.append_child(parent, id);
            for child in node.children() {
                append_tree(doc, id, child);
            }
        }
        HtmlNode::Text(text) => {
            let id = doc.create_text(text);
            doc.append_child(parent, id);
        }
        HtmlNode::Comment(comment) => {
            let id = doc.create_comment(comment);
            doc.append_child(parent, id);
        }
        HtmlNode::Doctype(doctype) => {
            let id = doc.create_doctype(doctype.name());
            doc.append_child(parent, id);
        }
        // Container nodes contribute only their children.
        HtmlNode::Document | HtmlNode::Fragment => {
            for child in node.children() {
                append_tree(doc, parent, child);
            }
        }
        HtmlNode::ProcessingInstruction(_) => {}
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
