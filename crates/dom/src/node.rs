//! Node storage for the arena document model.

/// Handle to a node inside a [`Document`](crate::Document) arena.
///
/// Plain index — cheap to copy and hash, only meaningful for the document
/// that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

/// The payload of a single node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeData {
    /// Synthetic container at the top of every document.
    Root,

    /// An element with its tag name (lowercase) and attributes in
    /// document order.
    Element {
        name: String,
        attrs: Vec<(String, String)>,
    },

    /// A text node.
    Text(String),

    /// A comment (without the `<!--`/`-->` delimiters).
    Comment(String),

    /// A doctype, e.g. `html` for `<!DOCTYPE html>`.
    Doctype(String),
}

/// One arena slot: payload plus tree links.
///
/// A detached node keeps its slot (the arena is append-only) but has no
/// parent and is unreachable from the document root.
#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) data: NodeData,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

impl Node {
    pub(crate) fn new(data: NodeData) -> Self {
        Self {
            data,
            parent: None,
            children: Vec::new(),
        }
    }

    /// The node's payload.
    pub fn data(&self) -> &NodeData {
        &self.data
    }
}
