//! Include marker records.

use std::collections::HashMap;

use fragstitch_dom::NodeId;

/// The attribute that turns an element into an include marker.
pub const INCLUDE_ATTR: &str = "data-include";

/// Handle to a record in a [`MarkerArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarkerId(usize);

/// One include marker's state.
#[derive(Debug, Clone)]
pub struct MarkerRecord {
    /// The marker element in the document.
    pub node: NodeId,
    /// The fragment source location carried by the marker.
    pub source: String,
    /// Set exactly once, when the marker's fragment has been spliced and
    /// its subtree fully resolved. Checked before any reprocessing, so a
    /// resolved marker is never fetched again.
    pub resolved: bool,
}

/// Arena of marker records for one document.
///
/// Records are created at scan time (get-or-insert per node) and live as
/// long as the caller keeps the arena next to its document. Keeping the
/// resolved flag here — rather than as attribute mutation on the tree —
/// makes the termination guarantee explicit: the flag is set once and every
/// scan consults it first.
#[derive(Debug, Default)]
pub struct MarkerArena {
    records: Vec<MarkerRecord>,
    by_node: HashMap<NodeId, MarkerId>,
}

impl MarkerArena {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get or insert the record for a marker node.
    ///
    /// The source is captured on first sight; a marker's source never
    /// changes once recorded.
    pub fn record(&mut self, node: NodeId, source: impl Into<String>) -> MarkerId {
        if let Some(&id) = self.by_node.get(&node) {
            return id;
        }
        let id = MarkerId(self.records.len());
        self.records.push(MarkerRecord {
            node,
            source: source.into(),
            resolved: false,
        });
        self.by_node.insert(node, id);
        id
    }

    /// The record behind `id`.
    pub fn get(&self, id: MarkerId) -> &MarkerRecord {
        &self.records[id.0]
    }

    /// Flag a marker as resolved.
    pub fn mark_resolved(&mut self, id: MarkerId) {
        self.records[id.0].resolved = true;
    }

    /// Whether `node` has a record that is already resolved.
    pub fn is_resolved(&self, node: NodeId) -> bool {
        self.by_node
            .get(&node)
            .is_some_and(|&id| self.records[id.0].resolved)
    }

    /// All records, in creation order.
    pub fn records(&self) -> &[MarkerRecord] {
        &self.records
    }

    /// Number of recorded markers.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no markers have been recorded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
