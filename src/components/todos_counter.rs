//! Todos Counter Component
//!
//! Shows how many entries are currently on the list.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::render_counter::use_render_counter;

/// Todo count badge for the app bar
#[component]
pub fn TodosCounter() -> impl IntoView {
    use_render_counter("TodosCounter");
    let ctx = use_app_context();

    view! {
        <span class="todos-counter">
            {move || {
                let count = ctx.state().todos.len();
                if count == 1 {
                    "1 item".to_string()
                } else {
                    format!("{} items", count)
                }
            }}
        </span>
    }
}
