//! Arena-based HTML document model for the fragstitch engine.
//!
//! This crate owns the page representation the include resolver works on:
//!
//! - [`Document`] — an append-only node arena plus a root handle.
//! - [`NodeId`] — a copyable index into the arena.
//! - [`NodeData`] — element / text / comment / doctype payloads.
//!
//! Parsing is delegated to html5ever (via `scraper`), so malformed markup is
//! handled the way a browser would handle it and never produces an error.
//! Serialization emits standard text/attribute escaping, void-element
//! syntax, and raw text inside `script`/`style`.

pub mod document;
pub mod node;
pub(crate) mod parse;
pub(crate) mod serialize;

pub use document::Document;
pub use node::{Node, NodeData, NodeId};
