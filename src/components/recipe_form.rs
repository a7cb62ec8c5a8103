//! Recipe Form Component
//!
//! Create/edit form bound to a `FormController`. The controller decides
//! what is sent; this component only wires inputs to it.

use leptos::prelude::*;

use crate::components::FieldError;
use crate::error::{SubmitError, ValidationError};
use crate::form::{BrowserConfirm, Field, FormController, FormMode, INGREDIENT_OPTIONS};
use crate::models::{Difficulty, Recipe};

/// Labelled text/number input for one scalar field
#[component]
fn ScalarInput(
    form: RwSignal<FormController>,
    errors: RwSignal<Vec<ValidationError>>,
    field: Field,
    #[prop(into)] label: String,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <label for=field.key()>{label}</label>
            <input
                id=field.key()
                type=input_type
                step=(input_type == "number").then_some("any")
                prop:value=move || form.with(|f| f.get(field).to_string())
                on:input=move |ev| form.update(|f| f.set(field, event_target_value(&ev)))
            />
            <FieldError errors=errors field=field.key() />
        </div>
    }
}

#[component]
pub fn RecipeForm(
    /// Called with the merged payload once validation (and, when editing,
    /// confirmation) passed
    #[prop(into)]
    on_submit: Callback<Recipe>,
    /// Existing recipe when editing
    #[prop(into)]
    default_data: Signal<Option<Recipe>>,
    /// Disables submit while the previous payload is in flight
    #[prop(into)]
    pending: Signal<bool>,
) -> impl IntoView {
    let form = RwSignal::new(match default_data.get_untracked() {
        Some(recipe) => FormController::for_edit(&recipe),
        None => FormController::new(),
    });
    let errors = RwSignal::new(Vec::<ValidationError>::new());
    let (pasted_steps, set_pasted_steps) = signal(String::new());

    // Later changes of the record only refresh scalar fields
    Effect::new(move |seeded: Option<()>| {
        if let Some(recipe) = default_data.get() {
            if seeded.is_some() {
                form.update(|f| f.hydrate(&recipe));
            }
        }
    });

    let is_edit = move || form.with(|f| f.mode() == FormMode::Edit);

    let handle_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let draft = form.get_untracked();
        match draft.submit(&BrowserConfirm, |payload| on_submit.run(payload)) {
            Ok(()) => errors.set(Vec::new()),
            Err(SubmitError::Invalid(invalid)) => {
                log::debug!("[recipe-form] {} invalid field(s)", invalid.len());
                errors.set(invalid);
            }
            Err(SubmitError::ConfirmationDeclined) => {}
        }
    };

    view! {
        <form class="recipe-form" on:submit=handle_submit>
            <ScalarInput form=form errors=errors field=Field::Name label="Recipe Name" />

            // Ingredients
            <div class="form-field">
                <span class="field-label">"Ingredients"</span>
                <div class="ingredient-grid">
                    {INGREDIENT_OPTIONS.iter().map(|&option| {
                        let checked = move || form.with(|f| f.is_selected(option));
                        view! {
                            <label class=move || if checked() { "ingredient-option selected" } else { "ingredient-option" }>
                                <input
                                    type="checkbox"
                                    prop:checked=checked
                                    on:change=move |_| form.update(|f| f.toggle_option(option))
                                />
                                {option}
                            </label>
                        }
                    }).collect_view()}
                </div>
            </div>

            // Instructions
            <div class="form-field">
                <span class="field-label">"Instructions"</span>
                <For
                    each=move || 0..form.with(|f| f.steps().len())
                    key=|index| *index
                    children=move |index| view! {
                        <div class="step-row">
                            <input
                                type="text"
                                placeholder=format!("Step {}", index + 1)
                                prop:value=move || form.with(|f| f.steps().get(index).cloned().unwrap_or_default())
                                on:input=move |ev| form.update(|f| f.set_step(index, event_target_value(&ev)))
                            />
                            <button type="button" class="remove-btn" on:click=move |_| form.update(|f| f.remove_step(index))>
                                "Remove"
                            </button>
                        </div>
                    }
                />
                <button type="button" class="add-step-btn" on:click=move |_| form.update(|f| f.append_step())>
                    "Add Step"
                </button>
                <details class="paste-steps">
                    <summary>"Paste steps"</summary>
                    <textarea
                        rows=4
                        placeholder="One step per line"
                        prop:value=move || pasted_steps.get()
                        on:input=move |ev| set_pasted_steps.set(event_target_value(&ev))
                    />
                    <button
                        type="button"
                        on:click=move |_| {
                            form.update(|f| f.replace_steps_from_text(&pasted_steps.get_untracked()));
                            set_pasted_steps.set(String::new());
                        }
                    >
                        "Replace Steps"
                    </button>
                </details>
            </div>

            <div class="form-row">
                <ScalarInput form=form errors=errors field=Field::PrepTime label="Prep Time (min)" input_type="number" />
                <ScalarInput form=form errors=errors field=Field::CookTime label="Cook Time (min)" input_type="number" />
                <ScalarInput form=form errors=errors field=Field::Servings label="Servings" input_type="number" />
                <div class="form-field">
                    <label for="difficulty">"Difficulty"</label>
                    <select
                        id="difficulty"
                        on:change=move |ev| form.update(|f| f.set(Field::Difficulty, event_target_value(&ev)))
                    >
                        {Difficulty::ALL.into_iter().map(|difficulty| view! {
                            <option
                                value=difficulty.as_str()
                                prop:selected=move || form.with(|f| f.get(Field::Difficulty) == difficulty.as_str())
                            >
                                {difficulty.as_str()}
                            </option>
                        }).collect_view()}
                    </select>
                    <FieldError errors=errors field=Field::Difficulty.key() />
                </div>
            </div>

            <ScalarInput form=form errors=errors field=Field::Cuisine label="Cuisine" />

            <button type="submit" class="submit-btn" disabled=move || pending.get()>
                {move || if is_edit() { "Save Changes" } else { "Add Recipe" }}
            </button>
        </form>
    }
}
