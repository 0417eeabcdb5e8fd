//! Render Instrumentation
//!
//! Counts how often each component body runs and logs it to the console.

use std::cell::RefCell;
use std::collections::HashMap;

thread_local! {
    static RENDER_COUNTS: RefCell<HashMap<&'static str, u32>> = RefCell::new(HashMap::new());
}

/// Log one render of `name`; call at the top of a component body.
pub fn use_render_counter(name: &'static str) {
    let count = RENDER_COUNTS.with(|counts| {
        let mut counts = counts.borrow_mut();
        let count = counts.entry(name).or_insert(0);
        *count += 1;
        *count
    });
    web_sys::console::log_1(&format!("[RENDER] {} x{}", name, count).into());
}
