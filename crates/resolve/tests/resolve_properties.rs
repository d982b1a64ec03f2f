//! End-to-end properties of the include resolution algorithm.
//!
//! These tests drive [`IncludeResolver`] against a [`StaticFetcher`] and
//! recording test doubles for the injector and the initializer registry,
//! and pin down the observable contract: which fragments are requested,
//! when resolution completes, and when the fan-out fires.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use fragstitch_dom::Document;
use fragstitch_fetch::StaticFetcher;
use fragstitch_resolve::{
    BodyInjector, IncludeResolver, InitializerRegistry, MarkerArena, ScriptInjector, ScriptSource,
    FAN_OUT_ORDER,
};

// ---------------------------------------------------------------------------
// Test doubles
// ---------------------------------------------------------------------------

/// Records every injected script, then delegates to [`BodyInjector`].
#[derive(Default)]
struct RecordingInjector {
    seen: Mutex<Vec<ScriptSource>>,
}

impl RecordingInjector {
    fn seen(&self) -> Vec<ScriptSource> {
        self.seen.lock().unwrap().clone()
    }
}

impl ScriptInjector for RecordingInjector {
    fn inject(&self, doc: &mut fragstitch_dom::Document, script: &ScriptSource) {
        self.seen.lock().unwrap().push(script.clone());
        BodyInjector.inject(doc, script);
    }
}

/// A registry whose every slot increments a shared counter.
fn counting_registry(counter: &Arc<AtomicUsize>) -> InitializerRegistry {
    let mut registry = InitializerRegistry::new();
    for kind in FAN_OUT_ORDER {
        let counter = Arc::clone(counter);
        registry.set(kind, move || {
            let counter = Arc::clone(&counter);
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
            }
        });
    }
    registry
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

#[tokio::test]
async fn zero_markers_completes_and_fans_out_once() {
    let fetcher = Arc::new(StaticFetcher::new());
    let calls = Arc::new(AtomicUsize::new(0));
    let resolver = IncludeResolver::new(fetcher.clone(), counting_registry(&calls));

    let mut doc = Document::parse("<div>static page</div>");
    let mut arena = MarkerArena::new();
    let outcome = resolver.resolve_document(&mut doc, &mut arena).await;

    assert_eq!(outcome.resolved, 0);
    assert_eq!(fetcher.request_count(), 0);
    // All seven slots ran, exactly once each.
    assert_eq!(calls.load(Ordering::SeqCst), FAN_OUT_ORDER.len());
}

#[tokio::test]
async fn independent_markers_are_all_requested() {
    let fetcher = Arc::new(
        StaticFetcher::new()
            .with_fragment("/a.html", "<p>a</p>")
            .with_fragment("/b.html", "<p>b</p>")
            .with_fragment("/c.html", "<p>c</p>"),
    );
    let resolver = IncludeResolver::new(fetcher.clone(), InitializerRegistry::new());

    let mut doc = Document::parse(
        "<div data-include=\"/a.html\"></div>\
         <div data-include=\"/b.html\"></div>\
         <div data-include=\"/c.html\"></div>",
    );
    let mut arena = MarkerArena::new();
    let outcome = resolver.resolve_document(&mut doc, &mut arena).await;

    assert_eq!(outcome.resolved, 3);
    let mut requests = fetcher.requests();
    requests.sort();
    assert_eq!(requests, vec!["/a.html", "/b.html", "/c.html"]);

    let html = doc.to_html();
    assert!(html.contains("<p>a</p>"));
    assert!(html.contains("<p>b</p>"));
    assert!(html.contains("<p>c</p>"));
}

#[tokio::test]
async fn nested_marker_is_fetched_only_after_its_ancestor_splices() {
    let fetcher = Arc::new(
        StaticFetcher::new()
            .with_fragment("/outer.html", "<div data-include=\"/inner.html\"></div>")
            .with_fragment("/inner.html", "<span>deep</span>"),
    );
    let resolver = IncludeResolver::new(fetcher.clone(), InitializerRegistry::new());

    let mut doc = Document::parse("<div data-include=\"/outer.html\"></div>");
    let mut arena = MarkerArena::new();
    let outcome = resolver.resolve_document(&mut doc, &mut arena).await;

    assert_eq!(outcome.resolved, 2);
    // The inner fragment is requested strictly after the outer one.
    assert_eq!(fetcher.requests(), vec!["/outer.html", "/inner.html"]);
    assert!(doc.to_html().contains("<span>deep</span>"));
}

#[tokio::test]
async fn resolved_markers_are_never_fetched_again() {
    let fetcher = Arc::new(StaticFetcher::new().with_fragment("/a.html", "<p>a</p>"));
    let resolver = IncludeResolver::new(fetcher.clone(), InitializerRegistry::new());

    let mut doc = Document::parse("<div data-include=\"/a.html\"></div>");
    let mut arena = MarkerArena::new();

    resolver.resolve_document(&mut doc, &mut arena).await;
    assert_eq!(fetcher.request_count(), 1);

    // Second pass over the same document: zero additional fetches.
    let second = resolver.resolve_document(&mut doc, &mut arena).await;
    assert_eq!(fetcher.request_count(), 1);
    assert_eq!(second.resolved, 0);
}

#[tokio::test]
async fn failed_fetch_abandons_only_that_marker() {
    let fetcher = Arc::new(StaticFetcher::new().with_fragment("/ok.html", "<p>fine</p>"));
    let calls = Arc::new(AtomicUsize::new(0));
    let resolver = IncludeResolver::new(fetcher.clone(), counting_registry(&calls));

    let mut doc = Document::parse(
        "<div id=\"broken\" data-include=\"/missing.html\">placeholder</div>\
         <div data-include=\"/ok.html\"></div>",
    );
    let mut arena = MarkerArena::new();
    let outcome = resolver.resolve_document(&mut doc, &mut arena).await;

    assert_eq!(outcome.resolved, 1);
    assert_eq!(outcome.failed, 1);
    // The sibling resolved and the fan-out still fired.
    assert!(doc.to_html().contains("<p>fine</p>"));
    assert_eq!(calls.load(Ordering::SeqCst), FAN_OUT_ORDER.len());

    // The abandoned marker keeps its placeholder content and its attribute,
    // and is NOT marked resolved.
    let broken = doc.find_element(doc.root(), "div").unwrap();
    assert_eq!(doc.attr(broken, "data-include"), Some("/missing.html"));
    assert_eq!(doc.text_content(broken), "placeholder");
}

#[tokio::test]
async fn inline_scripts_reach_the_injector_in_order() {
    let fetcher = Arc::new(StaticFetcher::new().with_fragment(
        "/widget.html",
        "<script src=\"/lib.js\"></script><div>ui</div><script>window.flag = 1;</script>",
    ));
    let injector = Arc::new(RecordingInjector::default());
    let resolver = IncludeResolver::new(fetcher, InitializerRegistry::new())
        .with_injector(injector.clone());

    let mut doc = Document::parse("<div data-include=\"/widget.html\"></div>");
    let mut arena = MarkerArena::new();
    resolver.resolve_document(&mut doc, &mut arena).await;

    assert_eq!(
        injector.seen(),
        vec![
            ScriptSource::External("/lib.js".to_string()),
            ScriptSource::Inline("window.flag = 1;".to_string()),
        ]
    );

    // Fresh equivalents were appended to the body, after existing content.
    let body = doc.body();
    let children = doc.children(body).to_vec();
    let last = children[children.len() - 1];
    let second_last = children[children.len() - 2];
    assert_eq!(doc.attr(second_last, "src"), Some("/lib.js"));
    assert_eq!(doc.text_content(last), "window.flag = 1;");
}

#[tokio::test]
async fn static_fragment_triggers_no_injection() {
    let fetcher = Arc::new(StaticFetcher::new().with_fragment("/plain.html", "<p>markup</p>"));
    let injector = Arc::new(RecordingInjector::default());
    let resolver = IncludeResolver::new(fetcher, InitializerRegistry::new())
        .with_injector(injector.clone());

    let mut doc = Document::parse("<div data-include=\"/plain.html\"></div>");
    let mut arena = MarkerArena::new();
    resolver.resolve_document(&mut doc, &mut arena).await;

    assert!(injector.seen().is_empty());
}

#[tokio::test]
async fn empty_source_marker_is_skipped_without_a_fetch() {
    // The concrete scenario from the component design: marker A carries a
    // fragment with a nested include, marker B has an empty source.
    let fetcher = Arc::new(
        StaticFetcher::new()
            .with_fragment("/header.html", "<div data-include=\"/nested.html\"></div>")
            .with_fragment("/nested.html", "<nav>links</nav>"),
    );
    let calls = Arc::new(AtomicUsize::new(0));
    let resolver = IncludeResolver::new(fetcher.clone(), counting_registry(&calls));

    let mut doc = Document::parse(
        "<div data-include=\"/header.html\"></div>\
         <div data-include=\"\"></div>",
    );
    let mut arena = MarkerArena::new();
    let outcome = resolver.resolve_document(&mut doc, &mut arena).await;

    // B was skipped silently: no fetch for it, ever.
    assert_eq!(fetcher.requests(), vec!["/header.html", "/nested.html"]);
    assert_eq!(outcome.skipped, 1);
    assert_eq!(outcome.resolved, 2);
    assert!(doc.to_html().contains("<nav>links</nav>"));
    // The fan-out fired once after both settled.
    assert_eq!(calls.load(Ordering::SeqCst), FAN_OUT_ORDER.len());
}

#[tokio::test]
async fn subtree_re_entry_resolves_without_fan_out() {
    let fetcher = Arc::new(StaticFetcher::new().with_fragment("/late.html", "<p>late</p>"));
    let calls = Arc::new(AtomicUsize::new(0));
    let resolver = IncludeResolver::new(fetcher.clone(), counting_registry(&calls));

    let mut doc = Document::parse("<div id=\"mount\"></div>");
    let mut arena = MarkerArena::new();

    // Markup constructed at runtime, after the automatic pass.
    let mount = doc.find_element(doc.root(), "div").unwrap();
    doc.set_inner_html(mount, "<section data-include=\"/late.html\"></section>");

    let outcome = resolver.resolve_subtree(&mut doc, &mut arena, mount).await;

    assert_eq!(outcome.resolved, 1);
    assert!(doc.to_html().contains("<p>late</p>"));
    // No fan-out on subtree re-entry.
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn deeply_nested_chains_terminate() {
    let fetcher = Arc::new(
        StaticFetcher::new()
            .with_fragment("/l1.html", "<div data-include=\"/l2.html\"></div>")
            .with_fragment("/l2.html", "<div data-include=\"/l3.html\"></div>")
            .with_fragment("/l3.html", "<em>bottom</em>"),
    );
    let resolver = IncludeResolver::new(fetcher.clone(), InitializerRegistry::new());

    let mut doc = Document::parse("<div data-include=\"/l1.html\"></div>");
    let mut arena = MarkerArena::new();
    let outcome = resolver.resolve_document(&mut doc, &mut arena).await;

    assert_eq!(outcome.resolved, 3);
    assert_eq!(fetcher.requests(), vec!["/l1.html", "/l2.html", "/l3.html"]);
    assert!(doc.to_html().contains("<em>bottom</em>"));

    // Stitched output carries no marker attributes.
    assert!(!doc.to_html().contains("data-include"));
}
