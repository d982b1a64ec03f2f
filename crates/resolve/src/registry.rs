//! The initializer registry and its fan-out.
//!
//! The storefront widgets (switch controls, dropdowns, tabbed navigation,
//! product detail carousel, dialogs) need to re-initialize once every
//! fragment is in place. Each widget registers an async callback under its
//! fixed slot; after top-level resolution settles, the slots are invoked in
//! [`FAN_OUT_ORDER`], each awaited to completion before the next. A widget
//! signals readiness by completing its future, so there is no fixed-delay
//! timing guess anywhere in the engine. Absent slots are skipped silently.

use std::collections::HashMap;
use std::future::Future;

use futures::future::BoxFuture;

/// The fixed set of initializer slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InitKind {
    /// Switch controls.
    Switch,
    /// Dropdown menus.
    Dropdown,
    /// Tabbed navigation.
    Tabs,
    /// Product set detail carousel.
    ProductSetDetail,
    /// Generic dialogs.
    Dialog,
    /// Add-to-cart dialog.
    AddToCartDialog,
    /// Image banner dialog.
    ImageBannerDialog,
}

impl InitKind {
    /// Stable name used in logs.
    pub fn name(self) -> &'static str {
        match self {
            InitKind::Switch => "switch",
            InitKind::Dropdown => "dropdown",
            InitKind::Tabs => "tabs",
            InitKind::ProductSetDetail => "product_set_detail",
            InitKind::Dialog => "dialog",
            InitKind::AddToCartDialog => "add_to_cart_dialog",
            InitKind::ImageBannerDialog => "image_banner_dialog",
        }
    }
}

/// The order in which slots are invoked after top-level resolution.
pub const FAN_OUT_ORDER: [InitKind; 7] = [
    InitKind::Switch,
    InitKind::Dropdown,
    InitKind::Tabs,
    InitKind::ProductSetDetail,
    InitKind::Dialog,
    InitKind::AddToCartDialog,
    InitKind::ImageBannerDialog,
];

type InitCallback = Box<dyn Fn() -> BoxFuture<'static, ()> + Send + Sync>;

/// Explicit map of initializer slots.
///
/// Passed to the resolver at construction; replaces the ambient
/// call-if-the-global-exists pattern with a registry that can be inspected
/// and tested. Every slot is independently optional.
#[derive(Default)]
pub struct InitializerRegistry {
    slots: HashMap<InitKind, InitCallback>,
}

impl InitializerRegistry {
    /// Create an empty registry (every fan-out slot is a no-op).
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the callback for a slot.
    pub fn set<F, Fut>(&mut self, kind: InitKind, callback: F)
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.slots
            .insert(kind, Box::new(move || Box::pin(callback())));
    }

    /// Builder-style [`set`](Self::set).
    pub fn with<F, Fut>(mut self, kind: InitKind, callback: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.set(kind, callback);
        self
    }

    /// Whether a callback is registered for `kind`.
    pub fn contains(&self, kind: InitKind) -> bool {
        self.slots.contains_key(&kind)
    }

    /// Invoke every registered slot in [`FAN_OUT_ORDER`], awaiting each
    /// callback before moving to the next. Absent slots are no-ops.
    pub(crate) async fn run_fan_out(&self) {
        for kind in FAN_OUT_ORDER {
            if let Some(callback) = self.slots.get(&kind) {
                tracing::debug!(initializer = kind.name(), "Running initializer");
                callback().await;
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
