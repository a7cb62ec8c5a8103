//! Mutation Status Component
//!
//! Pending overlay or failure block for add/edit pages.

use leptos::prelude::*;

use crate::components::ErrorBlock;
use crate::query::MutationState;

#[component]
pub fn MutationStatus(state: ReadSignal<MutationState>) -> impl IntoView {
    move || match state.get() {
        MutationState::Pending => Some(view! {
            <div class="pending-overlay">
                <div class="spinner"></div>
            </div>
        }.into_any()),
        MutationState::Error(message) => Some(view! { <ErrorBlock message=message /> }.into_any()),
        MutationState::Idle | MutationState::Success => None,
    }
}
