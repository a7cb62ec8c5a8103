//! Pages
//!
//! One component per route. Each page owns its queries, so switching
//! routes tears the old queries down and the new page fetches on mount.

mod recipes;
mod posts;
mod comments;
mod todos;

use leptos::prelude::*;

use crate::context::{use_app_context, AppContext};
use crate::query::MutationState;
use crate::router::Resource;

pub use recipes::{AddRecipePage, EditRecipePage, RecipesPage};
pub use posts::{AddPostPage, PostDetailPage, PostsPage};
pub use comments::{AddCommentPage, CommentDetailPage, CommentsPage};
pub use todos::{AddTodoPage, EditTodoPage, TodosPage};

/// Go back to the resource's list once the mutation succeeded
fn navigate_on_success(state: ReadSignal<MutationState>, ctx: AppContext, resource: Resource) {
    Effect::new(move |_| {
        if state.get() == MutationState::Success {
            ctx.replace(&resource.list_path());
        }
    });
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <section class="not-found">
            <h1 class="page-title">"Page not found"</h1>
            <button on:click=move |_| ctx.go_to(&Resource::Recipes.list_path())>"Back to recipes"</button>
        </section>
    }
}
