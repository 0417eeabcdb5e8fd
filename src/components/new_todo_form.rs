//! New Todo Form Component
//!
//! Input and submit button for adding entries to the list.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::use_app_context;
use crate::render_counter::use_render_counter;

/// Form for adding a new grocery entry
#[component]
pub fn NewTodoForm() -> impl IntoView {
    use_render_counter("NewTodoForm");
    let ctx = use_app_context();

    let (title, set_title) = signal(String::new());

    let add_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = title.get();
        if text.is_empty() {
            return;
        }
        ctx.store.add_todo(&text, None);
        set_title.set(String::new());
    };

    view! {
        <form class="new-todo-form" on:submit=add_todo>
            <input
                type="text"
                placeholder="Add an item..."
                prop:value=move || title.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_title.set(input.value());
                }
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
