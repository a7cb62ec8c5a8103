//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::ev;
use leptos::prelude::*;

use crate::router::{Resource, Route};

/// Current hash path, without the `#`
fn current_hash() -> String {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .map(|h| h.trim_start_matches('#').to_string())
        .unwrap_or_default()
}

/// App-wide navigation signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Page being shown - read
    pub route: ReadSignal<Route>,
    /// Page being shown - write
    set_route: WriteSignal<Route>,
}

impl AppContext {
    /// Create from the current location and follow `hashchange` events
    pub fn new() -> Self {
        let (route, set_route) = signal(Route::parse(&current_hash()));
        let handle = window_event_listener(ev::hashchange, move |_| {
            let next = Route::parse(&current_hash());
            if route.get_untracked() != next {
                log::debug!("[nav] hashchange -> {}", next.path());
                set_route.set(next);
            }
        });
        on_cleanup(move || handle.remove());
        Self { route, set_route }
    }

    fn show(&self, path: &str) {
        let next = Route::parse(path);
        if self.route.get_untracked() != next {
            self.set_route.set(next);
        }
    }

    /// Push a history entry for `path`
    pub fn go_to(&self, path: &str) {
        log::debug!("[nav] go_to {}", path);
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_hash(path);
        }
        self.show(path);
    }

    /// Replace the current history entry with `path`
    pub fn replace(&self, path: &str) {
        log::debug!("[nav] replace {}", path);
        if let Some(window) = web_sys::window() {
            let _ = window.location().replace(&format!("#{}", path));
        }
        self.show(path);
    }

    pub fn navigate_to_detail(&self, resource: Resource, id: u32) {
        self.go_to(&resource.detail_path(id));
    }

    pub fn navigate_to_add(&self, resource: Resource) {
        self.go_to(&resource.add_path());
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
