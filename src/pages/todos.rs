//! Todo Pages

use leptos::prelude::*;

use crate::api;
use crate::components::{AddButton, ErrorBlock, FieldError, MutationStatus, SkeletonList};
use crate::context::{use_app_context, AppContext};
use crate::error::ValidationError;
use crate::form::drafts::{TodoDraft, CONFIRM_TODO_UPDATE};
use crate::form::{BrowserConfirm, Confirm};
use crate::models::{Todo, TodoBody};
use crate::query::{use_mutation, use_query, Phase, RenderBranch, RetryPolicy};
use crate::router::Resource;

use super::navigate_on_success;

fn todo_card(todo: Todo, ctx: AppContext) -> impl IntoView {
    let id = todo.id;
    let card_class = if todo.completed {
        "card clickable todo completed"
    } else {
        "card clickable todo"
    };

    view! {
        <article class=card_class on:click=move |_| ctx.navigate_to_detail(Resource::Todos, id)>
            {todo.image.map(|src| view! { <img class="card-image" src=src alt=format!("Todo {}", id) /> })}
            <h2 class="card-title">{todo.todo}</h2>
            <p class="status">{if todo.completed { "Completed" } else { "Pending" }}</p>
        </article>
    }
}

#[component]
pub fn TodosPage() -> impl IntoView {
    let ctx = use_app_context();
    // One failure is final for this page
    let state = use_query(RetryPolicy::DISABLED, api::fetch_todos);

    view! {
        <section class="list-page">
            <h1 class="page-title">"My Todo List"</h1>
            {move || match state.get().branch() {
                RenderBranch::Placeholders(rows) => view! { <SkeletonList rows=rows /> }.into_any(),
                RenderBranch::Message(message) => {
                    view! { <ErrorBlock message=message label=Resource::Todos.fetch_error_label() /> }
                        .into_any()
                }
                RenderBranch::Rows(todos) => view! {
                    <div class="card-grid">
                        {todos.into_iter().map(|todo| todo_card(todo, ctx)).collect_view()}
                    </div>
                }.into_any(),
            }}
            <AddButton resource=Resource::Todos label="Add Todo" />
        </section>
    }
}

/// Fields shared by the add and edit forms
#[component]
fn TodoFields(
    draft: RwSignal<TodoDraft>,
    errors: RwSignal<Vec<ValidationError>>,
    #[prop(default = false)] with_user: bool,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <label for="todo">"Todo"</label>
            <input
                id="todo"
                type="text"
                prop:value=move || draft.with(|d| d.todo.clone())
                on:input=move |ev| draft.update(|d| d.todo = event_target_value(&ev))
            />
            <FieldError errors=errors field="todo" />
        </div>
        <label class="checkbox-field">
            <input
                type="checkbox"
                prop:checked=move || draft.with(|d| d.completed)
                on:change=move |ev| draft.update(|d| d.completed = event_target_checked(&ev))
            />
            "Completed"
        </label>
        {with_user.then(|| view! {
            <div class="form-field">
                <label for="userId">"User ID"</label>
                <input
                    id="userId"
                    type="number"
                    min="1"
                    prop:value=move || draft.with(|d| d.user_id.clone())
                    on:input=move |ev| draft.update(|d| d.user_id = event_target_value(&ev))
                />
                <FieldError errors=errors field="userId" />
            </div>
        })}
    }
}

#[component]
pub fn AddTodoPage() -> impl IntoView {
    let ctx = use_app_context();
    let draft = RwSignal::new(TodoDraft::default());
    let errors = RwSignal::new(Vec::<ValidationError>::new());
    let (add_todo, status) = use_mutation(api::add_todo);
    navigate_on_success(status, ctx, Resource::Todos);

    let handle_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match draft.with_untracked(TodoDraft::validate_new) {
            Ok(todo) => {
                errors.set(Vec::new());
                add_todo.run(todo);
            }
            Err(invalid) => errors.set(invalid),
        }
    };

    view! {
        <section class="form-page">
            <h1 class="page-title">"Add Todo"</h1>
            <MutationStatus state=status />
            <form class="simple-form" on:submit=handle_submit>
                <TodoFields draft=draft errors=errors with_user=true />
                <button type="submit" class="submit-btn" disabled=move || status.get().is_pending()>
                    "Add Todo"
                </button>
            </form>
        </section>
    }
}

#[component]
pub fn EditTodoPage(id: u32) -> impl IntoView {
    let ctx = use_app_context();
    let todo = use_query(RetryPolicy::DISABLED, move || api::get_todo(id));
    let draft = RwSignal::new(TodoDraft::default());
    let errors = RwSignal::new(Vec::<ValidationError>::new());
    let (update_todo, status) = use_mutation(move |body: TodoBody| api::update_todo(id, body));
    navigate_on_success(status, ctx, Resource::Todos);

    // Seed the draft once the record arrives
    Effect::new(move |_| {
        if let Some(loaded) = todo.with(|s| s.value().map(TodoDraft::from_todo)) {
            draft.set(loaded);
        }
    });

    let phase = Memo::new(move |_| todo.with(|s| s.phase()));

    let handle_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let body = match draft.with_untracked(TodoDraft::validate_update) {
            Ok(body) => body,
            Err(invalid) => {
                errors.set(invalid);
                return;
            }
        };
        errors.set(Vec::new());
        if BrowserConfirm.confirm(CONFIRM_TODO_UPDATE) {
            update_todo.run(body);
        }
    };

    view! {
        <section class="form-page">
            <h1 class="page-title">"Edit Todo"</h1>
            <MutationStatus state=status />
            {move || match phase.get() {
                Phase::Loading => view! { <SkeletonList rows=1 /> }.into_any(),
                Phase::Failed(message) => view! { <ErrorBlock message=message /> }.into_any(),
                Phase::Ready => view! {
                    <form class="simple-form" on:submit=handle_submit>
                        <TodoFields draft=draft errors=errors />
                        <button type="submit" class="submit-btn" disabled=move || status.get().is_pending()>
                            "Save Changes"
                        </button>
                    </form>
                }.into_any(),
            }}
        </section>
    }
}
