//! Log Panel Component
//!
//! Footer panel listing the records kept by `browser_logger`, for copying
//! into a bug report.

use leptos::prelude::*;

#[component]
pub fn LogPanel() -> impl IntoView {
    let (open, set_open) = signal(false);
    let (records, set_records) = signal(Vec::<String>::new());

    let refresh = move || set_records.set(browser_logger::recent_records());
    let text = move || {
        let lines = records.get();
        if lines.is_empty() {
            "No records yet.".to_string()
        } else {
            lines.join("\n")
        }
    };

    view! {
        <footer class="log-panel">
            <button
                type="button"
                class="link-btn"
                on:click=move |_| {
                    if !open.get_untracked() {
                        refresh();
                    }
                    set_open.update(|o| *o = !*o);
                }
            >
                {move || if open.get() { "Hide recent log" } else { "Show recent log" }}
            </button>
            <Show when=move || open.get()>
                <button type="button" class="link-btn" on:click=move |_| refresh()>"Refresh"</button>
                <pre class="log-lines">{text}</pre>
            </Show>
        </footer>
    }
}
