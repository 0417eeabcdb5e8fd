//! User Menu Component
//!
//! Mock sign-in button while logged out, greeting plus sign-out afterwards.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::render_counter::use_render_counter;

/// Session controls for the app bar
#[component]
pub fn UserMenu() -> impl IntoView {
    use_render_counter("UserMenu");
    let ctx = use_app_context();

    let logged_in = {
        let ctx = ctx.clone();
        move || ctx.state().user.is_some()
    };
    let user_name = {
        let ctx = ctx.clone();
        move || {
            ctx.state()
                .user
                .as_ref()
                .map(|user| user.name.clone())
                .unwrap_or_default()
        }
    };
    let login = {
        let ctx = ctx.clone();
        move |_| ctx.store.login()
    };
    let logout = {
        let ctx = ctx.clone();
        move |_| ctx.store.logout()
    };

    view! {
        <div class="user-menu">
            <Show when={let logged_in = logged_in.clone(); move || !logged_in()}>
                <button class="login-btn" on:click=login.clone()>"Sign in"</button>
            </Show>
            <Show when=logged_in.clone()>
                <span class="user-name">{user_name.clone()}</span>
                <button class="logout-btn" on:click=logout.clone()>"Sign out"</button>
            </Show>
        </div>
    }
}
