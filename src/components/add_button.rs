//! Floating "add" button for list pages

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::router::Resource;

#[component]
pub fn AddButton(resource: Resource, #[prop(into)] label: String) -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <button class="fab" on:click=move |_| ctx.navigate_to_add(resource)>
            "+ " {label}
        </button>
    }
}
