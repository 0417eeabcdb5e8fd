//! Grocery List App
//!
//! Root component: builds the store, bridges its subscription into a Leptos
//! signal and provides the app context to all children.

use std::sync::Arc;

use leptos::prelude::*;

use crate::components::{AppBar, NewTodoForm, TodoList};
use crate::context::AppContext;
use crate::storage::BrowserStorage;
use crate::store::GlobalStore;

#[component]
pub fn App() -> impl IntoView {
    let store = Arc::new(GlobalStore::new(Arc::new(BrowserStorage)));

    // Bridge store notifications into the reactive graph; consumers read the
    // version signal through AppContext::state and re-run on every mutation.
    let (version, set_version) = signal(0u32);
    store.subscribe(move || set_version.update(|v| *v += 1));

    provide_context(AppContext::new(store, version));

    view! {
        <AppBar />
        <main class="main-content">
            <NewTodoForm />
            <TodoList />
        </main>
    }
}
