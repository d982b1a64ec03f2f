//! In-memory fragment transport.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::fetcher::{FetchError, FragmentFetcher};

/// Serves fragments from an in-memory map.
///
/// Used by tests and offline rendering. Every requested source is recorded
/// in order, so callers can assert exactly which fragments were fetched.
/// Unknown sources answer like a missing page: `HttpStatus { status: 404 }`.
#[derive(Default)]
pub struct StaticFetcher {
    fragments: HashMap<String, String>,
    requests: Mutex<Vec<String>>,
}

impl StaticFetcher {
    /// Create an empty fetcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style registration of a fragment body.
    pub fn with_fragment(mut self, source: impl Into<String>, body: impl Into<String>) -> Self {
        self.insert(source, body);
        self
    }

    /// Register (or replace) a fragment body.
    pub fn insert(&mut self, source: impl Into<String>, body: impl Into<String>) {
        self.fragments.insert(source.into(), body.into());
    }

    /// Every source requested so far, in request order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().expect("request log poisoned").clone()
    }

    /// Number of fetches issued so far.
    pub fn request_count(&self) -> usize {
        self.requests.lock().expect("request log poisoned").len()
    }
}

#[async_trait]
impl FragmentFetcher for StaticFetcher {
    async fn fetch(&self, source: &str) -> Result<String, FetchError> {
        self.requests
            .lock()
            .expect("request log poisoned")
            .push(source.to_string());

        match self.fragments.get(source) {
            Some(body) => Ok(body.clone()),
            None => Err(FetchError::HttpStatus { status: 404 }),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
