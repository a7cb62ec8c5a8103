//! Navigation Bar Component
//!
//! Tab bar for switching between the resource list pages.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::router::Resource;

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <nav class="nav-bar">
            <span class="nav-brand">"Board"</span>
            {Resource::ALL.into_iter().map(|resource| {
                let is_active = move || ctx.route.get().resource() == Some(resource);
                view! {
                    <button
                        class=move || if is_active() { "nav-tab active" } else { "nav-tab" }
                        on:click=move |_| ctx.go_to(&resource.list_path())
                    >
                        {resource.label()}
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
