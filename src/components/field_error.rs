use leptos::prelude::*;

use crate::error::{field_error, ValidationError};

/// Inline message under an input, shown only when `field` failed validation
#[component]
pub fn FieldError(
    #[prop(into)] errors: Signal<Vec<ValidationError>>,
    field: &'static str,
) -> impl IntoView {
    move || {
        errors
            .with(|errs| field_error(errs, field))
            .map(|message| view! { <p class="field-error">{message}</p> })
    }
}
