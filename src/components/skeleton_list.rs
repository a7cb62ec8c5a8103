//! Skeleton List Component
//!
//! Placeholder rows shaped like list cards, shown while loading.

use leptos::prelude::*;

use crate::query::SKELETON_ROWS;

#[component]
pub fn SkeletonList(#[prop(default = SKELETON_ROWS)] rows: usize) -> impl IntoView {
    view! {
        <div class="skeleton-list">
            {(0..rows).map(|_| view! {
                <div class="card skeleton-card">
                    <div class="skeleton-line wide"></div>
                    <div class="skeleton-line"></div>
                    <div class="skeleton-line short"></div>
                </div>
            }).collect_view()}
        </div>
    }
}
