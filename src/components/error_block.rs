use leptos::prelude::*;

/// Block-level failure message under a fixed label
#[component]
pub fn ErrorBlock(
    #[prop(into)] message: String,
    #[prop(default = "Error:")] label: &'static str,
) -> impl IntoView {
    view! {
        <div class="error-block" role="alert">
            <strong>{label}</strong>
            <p>{message}</p>
        </div>
    }
}
