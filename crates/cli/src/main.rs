//! Command-line front end for the fragment stitcher.
//!
//! Reads a page, resolves every `data-include` marker recursively, and
//! writes the stitched document back out:
//!
//! ```text
//! fragstitch <input.html> [output.html]
//! ```
//!
//! Fragments are read from the input file's directory by default; set
//! `FRAGSTITCH_BASE_URL` to fetch them over HTTP instead.

mod config;

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fragstitch_dom::Document;
use fragstitch_fetch::{DirFetcher, FragmentFetcher, HttpFetcher};
use fragstitch_resolve::{IncludeResolver, InitializerRegistry, MarkerArena};

use crate::config::CliConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fragstitch=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut args = std::env::args().skip(1);
    let input = PathBuf::from(
        args.next()
            .context("Usage: fragstitch <input.html> [output.html]")?,
    );
    let output = args.next().map(PathBuf::from);

    let cfg = CliConfig::from_env();
    let fetcher = build_fetcher(&cfg, &input);

    let html = tokio::fs::read_to_string(&input)
        .await
        .with_context(|| format!("Failed to read {}", input.display()))?;

    let resolver = IncludeResolver::new(fetcher, InitializerRegistry::new());
    let mut doc = Document::parse(&html);
    let mut arena = MarkerArena::new();

    let outcome = resolver.resolve_document(&mut doc, &mut arena).await;
    tracing::info!(
        resolved = outcome.resolved,
        failed = outcome.failed,
        skipped = outcome.skipped,
        "Stitching complete",
    );

    let stitched = doc.to_html();
    match output {
        Some(path) => {
            tokio::fs::write(&path, stitched)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!(output = %path.display(), "Wrote stitched document");
        }
        None => println!("{stitched}"),
    }

    Ok(())
}

fn build_fetcher(cfg: &CliConfig, input: &Path) -> Arc<dyn FragmentFetcher> {
    match &cfg.base_url {
        Some(base) => {
            tracing::debug!(base_url = %base, "Fetching fragments over HTTP");
            Arc::new(HttpFetcher::with_timeout(
                base.as_str(),
                Duration::from_secs(cfg.request_timeout_secs),
            ))
        }
        None => {
            let root = input.parent().unwrap_or(Path::new(".")).to_path_buf();
            tracing::debug!(root = %root.display(), "Reading fragments from disk");
            Arc::new(DirFetcher::new(root))
        }
    }
}
