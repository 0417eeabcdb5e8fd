//! App Bar Component
//!
//! Sticky header with the app title, todo counter and user menu.

use leptos::prelude::*;

use crate::components::{TodosCounter, UserMenu};
use crate::render_counter::use_render_counter;

/// Top header bar
#[component]
pub fn AppBar() -> impl IntoView {
    use_render_counter("AppBar");

    view! {
        <header class="app-bar">
            <div class="app-bar-inner">
                <div class="app-bar-left">
                    <h1 class="app-title">"Grocery List"</h1>
                    <TodosCounter />
                </div>
                <UserMenu />
            </div>
        </header>
    }
}
