//! Fragment transport for the fragstitch engine.
//!
//! The include resolver is transport-agnostic: it talks to a
//! [`FragmentFetcher`], and this crate supplies the implementations:
//!
//! - [`HttpFetcher`] — fetches fragments over HTTP with [`reqwest`].
//! - [`DirFetcher`] — reads fragments from a local directory.
//! - [`StaticFetcher`] — in-memory map for tests and offline rendering.
//!
//! All failures are soft from the resolver's point of view: a
//! [`FetchError`] abandons a single marker and never aborts its siblings.

pub mod dir;
pub mod fetcher;
pub mod http;
pub mod memory;

pub use dir::DirFetcher;
pub use fetcher::{FetchError, FragmentFetcher};
pub use http::HttpFetcher;
pub use memory::StaticFetcher;
