//! The [`Document`] arena: parsing, queries, and tree mutation.

use crate::node::{Node, NodeData, NodeId};

/// An HTML document held in a node arena.
///
/// Nodes are stored in a flat `Vec` and addressed by [`NodeId`]. The arena
/// is append-only: [`detach`](Document::detach) unlinks a node from the tree
/// but keeps its slot, so handles never dangle. Documents are short-lived
/// page builds, so no compaction is performed.
pub struct Document {
    nodes: Vec<Node>,
    root: NodeId,
}

impl Document {
    /// Create an empty document containing only the synthetic root.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(NodeData::Root)],
            root: NodeId(0),
        }
    }

    /// Parse a full HTML document.
    ///
    /// html5ever is forgiving: malformed markup is repaired the way a
    /// browser would repair it, so parsing never fails. The parser always
    /// synthesizes `<html>`, `<head>`, and `<body>` elements.
    pub fn parse(html: &str) -> Self {
        crate::parse::parse_document(html)
    }

    /// Parse fragment markup. The fragment's top-level nodes become
    /// children of the document root.
    pub fn parse_fragment(html: &str) -> Self {
        let mut doc = Self::new();
        let root = doc.root;
        crate::parse::append_fragment(&mut doc, root, html);
        doc
    }

    /// The synthetic root node.
    pub fn root(&self) -> NodeId {
        self.root
    }

    fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    /// The payload of `id`.
    pub fn data(&self, id: NodeId) -> &NodeData {
        &self.node(id).data
    }

    /// The tag name of `id`, or `None` for non-element nodes.
    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        match &self.node(id).data {
            NodeData::Element { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Look up an attribute value on an element node.
    pub fn attr(&self, id: NodeId, attr_name: &str) -> Option<&str> {
        match &self.node(id).data {
            NodeData::Element { attrs, .. } => attrs
                .iter()
                .find(|(name, _)| name == attr_name)
                .map(|(_, value)| value.as_str()),
            _ => None,
        }
    }

    /// Set (or replace) an attribute on an element node.
    ///
    /// Non-element nodes are left untouched.
    pub fn set_attr(&mut self, id: NodeId, attr_name: &str, value: &str) {
        if let NodeData::Element { attrs, .. } = &mut self.node_mut(id).data {
            match attrs.iter_mut().find(|(name, _)| name == attr_name) {
                Some((_, existing)) => *existing = value.to_string(),
                None => attrs.push((attr_name.to_string(), value.to_string())),
            }
        }
    }

    /// Remove an attribute from an element node, if present.
    pub fn remove_attr(&mut self, id: NodeId, attr_name: &str) {
        if let NodeData::Element { attrs, .. } = &mut self.node_mut(id).data {
            attrs.retain(|(name, _)| name != attr_name);
        }
    }

    /// The ordered children of `id`.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    /// The parent of `id`, or `None` for the root and detached nodes.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    /// Allocate a new, detached element node.
    pub fn create_element(&mut self, name: &str) -> NodeId {
        self.push(Node::new(NodeData::Element {
            name: name.to_string(),
            attrs: Vec::new(),
        }))
    }

    /// Allocate a new, detached text node.
    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.push(Node::new(NodeData::Text(text.to_string())))
    }

    /// Allocate a new, detached comment node.
    pub fn create_comment(&mut self, comment: &str) -> NodeId {
        self.push(Node::new(NodeData::Comment(comment.to_string())))
    }

    /// Allocate a new, detached doctype node.
    pub fn create_doctype(&mut self, name: &str) -> NodeId {
        self.push(Node::new(NodeData::Doctype(name.to_string())))
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Append `child` as the last child of `parent`, detaching it from its
    /// previous parent first.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.detach(child);
        self.node_mut(child).parent = Some(parent);
        self.node_mut(parent).children.push(child);
    }

    /// Unlink `id` from its parent. The node (and its subtree) stays in the
    /// arena but is no longer reachable from the root.
    pub fn detach(&mut self, id: NodeId) {
        if let Some(parent) = self.node_mut(id).parent.take() {
            self.node_mut(parent).children.retain(|&c| c != id);
        }
    }

    /// All descendants of `id` in document (pre-order) order, excluding
    /// `id` itself.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.collect_descendants(id, &mut out);
        out
    }

    fn collect_descendants(&self, id: NodeId, out: &mut Vec<NodeId>) {
        for &child in self.children(id) {
            out.push(child);
            self.collect_descendants(child, out);
        }
    }

    /// The first element named `tag` at or below `root`, in document order.
    pub fn find_element(&self, root: NodeId, tag: &str) -> Option<NodeId> {
        if self.tag_name(root) == Some(tag) {
            return Some(root);
        }
        self.children(root)
            .iter()
            .find_map(|&child| self.find_element(child, tag))
    }

    /// The document's `<body>` element, or the root when the document has
    /// none (e.g. a bare fragment).
    pub fn body(&self) -> NodeId {
        self.find_element(self.root, "body").unwrap_or(self.root)
    }

    /// Replace the children of `id` with the parsed content of `html`.
    ///
    /// This is the splice primitive of the include algorithm: the node's
    /// previous children are detached and the fragment's nodes take their
    /// place. Splicing alone never executes embedded scripts — script
    /// activation is the injector's job, not the document model's.
    pub fn set_inner_html(&mut self, id: NodeId, html: &str) {
        for child in std::mem::take(&mut self.node_mut(id).children) {
            self.node_mut(child).parent = None;
        }
        crate::parse::append_fragment(self, id, html);
    }

    /// Concatenated text of `id` and all its descendants.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        if let NodeData::Text(text) = &self.node(id).data {
            out.push_str(text);
        }
        for &child in self.children(id) {
            self.collect_text(child, out);
        }
    }

    /// Serialize the whole document to HTML.
    pub fn to_html(&self) -> String {
        self.node_to_html(self.root)
    }

    /// Serialize a single node (and its subtree) to HTML. Serializing the
    /// root emits only its children.
    pub fn node_to_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        crate::serialize::serialize_node(self, id, &mut out);
        out
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
