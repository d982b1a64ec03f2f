//! Fragment include orchestrator.
//!
//! This crate is the core of the fragstitch engine. It resolves declarative
//! `data-include` markers in a document:
//!
//! - [`IncludeResolver`] — scans for markers, fetches their fragments
//!   concurrently per batch, splices fetched content, recursively resolves
//!   nested markers, and runs the initializer fan-out once the whole tree
//!   is stable.
//! - [`MarkerArena`] — explicit marker records with a set-once `resolved`
//!   flag; the termination authority for arbitrarily deep nesting.
//! - [`InitializerRegistry`] — the fixed set of widget initializer slots
//!   invoked after top-level resolution.
//! - [`ScriptInjector`] — receives embedded scripts extracted from spliced
//!   content and appends fresh script nodes to the body
//!   (append-to-execute).
//!
//! Failures are contained per marker: a fragment that cannot be fetched is
//! logged and left unset, and never aborts sibling or ancestor resolution.

pub mod marker;
pub mod registry;
pub mod resolver;
pub mod script;

pub use marker::{MarkerArena, MarkerId, MarkerRecord, INCLUDE_ATTR};
pub use registry::{InitKind, InitializerRegistry, FAN_OUT_ORDER};
pub use resolver::{IncludeResolver, ResolveOutcome};
pub use script::{extract_scripts, BodyInjector, ScriptInjector, ScriptSource};
