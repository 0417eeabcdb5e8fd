#![allow(dead_code)]
//! Grocery List Frontend Entry Point

mod app;
mod components;
mod context;
mod models;
mod render_counter;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
