//! Todo List Component
//!
//! Renders the list in insertion order with toggle and remove controls.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::render_counter::use_render_counter;

/// The grocery list itself
#[component]
pub fn TodoList() -> impl IntoView {
    use_render_counter("TodoList");
    let ctx = use_app_context();

    view! {
        <ul class="todo-list">
            {move || {
                let store = ctx.store.clone();
                ctx.state()
                    .todos
                    .iter()
                    .cloned()
                    .map(|todo| {
                        let id = todo.id;
                        let row_class = if todo.done { "todo-row done" } else { "todo-row" };
                        let toggle_store = store.clone();
                        let remove_store = store.clone();
                        view! {
                            <li class=row_class>
                                <input
                                    type="checkbox"
                                    prop:checked=todo.done
                                    on:change=move |_| toggle_store.toggle_todo_done(id)
                                />
                                <span class="todo-title">{todo.title}</span>
                                <span class="todo-author">{todo.author}</span>
                                <button
                                    class="remove-btn"
                                    on:click=move |_| remove_store.remove_todo(id)
                                >
                                    "×"
                                </button>
                            </li>
                        }
                    })
                    .collect_view()
            }}
        </ul>
    }
}
