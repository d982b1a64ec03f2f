//! The include resolution algorithm.

use std::sync::Arc;

use futures::future::{self, BoxFuture};

use fragstitch_dom::{Document, NodeId};
use fragstitch_fetch::FragmentFetcher;

use crate::marker::{MarkerArena, MarkerId, INCLUDE_ATTR};
use crate::registry::InitializerRegistry;
use crate::script::{extract_scripts, BodyInjector, ScriptInjector};

/// Tally of one resolution run.
///
/// Diagnostic only — failures never surface as an `Err`, a broken fragment
/// simply renders as missing content.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ResolveOutcome {
    /// Markers whose fragment was spliced and whose subtree settled.
    pub resolved: usize,
    /// Markers abandoned after a transport failure or non-success status.
    pub failed: usize,
    /// Markers skipped because their source attribute was empty.
    pub skipped: usize,
}

impl std::ops::AddAssign for ResolveOutcome {
    fn add_assign(&mut self, other: Self) {
        self.resolved += other.resolved;
        self.failed += other.failed;
        self.skipped += other.skipped;
    }
}

/// Resolves `data-include` markers in a document.
///
/// The resolver is stateless and reusable: per-document marker state lives
/// in the caller's [`MarkerArena`], which must stay with its document
/// across runs so resolved markers are never fetched twice.
pub struct IncludeResolver {
    fetcher: Arc<dyn FragmentFetcher>,
    injector: Arc<dyn ScriptInjector>,
    registry: InitializerRegistry,
}

impl IncludeResolver {
    /// Create a resolver with the default [`BodyInjector`].
    pub fn new(fetcher: Arc<dyn FragmentFetcher>, registry: InitializerRegistry) -> Self {
        Self {
            fetcher,
            injector: Arc::new(BodyInjector),
            registry,
        }
    }

    /// Replace the script injector.
    pub fn with_injector(mut self, injector: Arc<dyn ScriptInjector>) -> Self {
        self.injector = injector;
        self
    }

    /// Resolve the whole document, then run the initializer fan-out.
    ///
    /// Returns once every marker found in the document — including markers
    /// introduced by nested fragments — has either been resolved or
    /// abandoned. The fan-out runs exactly once per call, strictly after
    /// the tree has settled.
    pub async fn resolve_document(
        &self,
        doc: &mut Document,
        arena: &mut MarkerArena,
    ) -> ResolveOutcome {
        let root = doc.root();
        let outcome = self.resolve_batch(doc, arena, root).await;

        tracing::debug!(
            resolved = outcome.resolved,
            failed = outcome.failed,
            skipped = outcome.skipped,
            "Document resolution settled, running initializer fan-out",
        );
        self.registry.run_fan_out().await;

        outcome
    }

    /// Resolve a specific subtree without triggering the fan-out.
    ///
    /// Re-entry point for markup constructed at runtime: callers that
    /// splice new content into an already-initialized page resolve just
    /// that subtree and re-initialize their own widgets.
    pub async fn resolve_subtree(
        &self,
        doc: &mut Document,
        arena: &mut MarkerArena,
        root: NodeId,
    ) -> ResolveOutcome {
        self.resolve_batch(doc, arena, root).await
    }

    /// Resolve one batch: the markers found by a single scan of `root`.
    ///
    /// All fetches in the batch are issued concurrently; splicing and
    /// recursion happen in scan order once the fetches settle. The batch
    /// completes only after every marker's full recursive subtree has
    /// settled, so a parent's completion truly means its tree is stable.
    fn resolve_batch<'a>(
        &'a self,
        doc: &'a mut Document,
        arena: &'a mut MarkerArena,
        root: NodeId,
    ) -> BoxFuture<'a, ResolveOutcome> {
        Box::pin(async move {
            let mut outcome = ResolveOutcome::default();

            let mut nodes = Vec::new();
            scan(doc, arena, root, &mut nodes);

            let mut batch: Vec<(MarkerId, NodeId, String)> = Vec::new();
            for node in nodes {
                let source = doc.attr(node, INCLUDE_ATTR).unwrap_or("").to_string();
                if source.is_empty() {
                    // An empty source means "nothing to do", not an error.
                    outcome.skipped += 1;
                    continue;
                }
                let id = arena.record(node, source.clone());
                batch.push((id, node, source));
            }

            let results =
                future::join_all(batch.iter().map(|(_, _, source)| self.fetcher.fetch(source)))
                    .await;

            for ((marker_id, node, source), result) in batch.into_iter().zip(results) {
                match result {
                    Ok(fragment) => {
                        doc.set_inner_html(node, &fragment);

                        let scripts = extract_scripts(doc, node);
                        for script in &scripts {
                            self.injector.inject(doc, script);
                        }

                        // Nested markers introduced by the fragment.
                        outcome += self.resolve_batch(doc, arena, node).await;

                        arena.mark_resolved(marker_id);
                        doc.remove_attr(node, INCLUDE_ATTR);
                        outcome.resolved += 1;
                        tracing::debug!(source = %source, scripts = scripts.len(), "Fragment spliced");
                    }
                    Err(e) => {
                        // Abandon this marker only; siblings keep going.
                        tracing::warn!(source = %source, error = %e, "Include failed");
                        outcome.failed += 1;
                    }
                }
            }

            outcome
        })
    }
}

/// Collect unresolved markers below `root` in document order.
///
/// The walk does not descend into an unresolved marker, so markers sitting
/// in another marker's placeholder content are left for the recursive pass
/// that runs after their ancestor is spliced — and are never attempted if
/// that ancestor's fragment never loads.
fn scan(doc: &Document, arena: &MarkerArena, root: NodeId, out: &mut Vec<NodeId>) {
    for &child in doc.children(root) {
        if doc.tag_name(child).is_none() {
            continue;
        }
        if doc.attr(child, INCLUDE_ATTR).is_some() && !arena.is_resolved(child) {
            out.push(child);
            continue;
        }
        scan(doc, arena, child, out);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
