//! Application Context
//!
//! Shared store handle provided via Leptos Context API.

use std::sync::Arc;

use leptos::prelude::*;

use crate::store::{GlobalState, GlobalStore};

/// App-wide store handle plus the signal bridging store changes into Leptos
#[derive(Clone)]
pub struct AppContext {
    /// The global store; all mutations go through its five operations
    pub store: Arc<GlobalStore>,
    /// Bumped by the store subscription after every mutation - read to track
    version: ReadSignal<u32>,
}

impl AppContext {
    pub fn new(store: Arc<GlobalStore>, version: ReadSignal<u32>) -> Self {
        Self { store, version }
    }

    /// Snapshot of the current state, registering reactive interest
    pub fn state(&self) -> Arc<GlobalState> {
        self.version.get();
        self.store.snapshot()
    }
}

/// Get the app context from context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
