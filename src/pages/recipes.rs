//! Recipe Pages

use leptos::prelude::*;

use crate::api;
use crate::components::{AddButton, ErrorBlock, MutationStatus, RecipeForm, SkeletonList};
use crate::config::config;
use crate::context::{use_app_context, AppContext};
use crate::models::Recipe;
use crate::query::{use_mutation, use_query, Phase, RenderBranch};
use crate::router::Resource;

use super::navigate_on_success;

fn recipe_card(recipe: Recipe, ctx: AppContext) -> impl IntoView {
    let id = recipe.id;
    let total_minutes = recipe.prep_time_minutes + recipe.cook_time_minutes;

    view! {
        <article
            class="card clickable"
            on:click=move |_| {
                if let Some(id) = id {
                    ctx.navigate_to_detail(Resource::Recipes, id);
                }
            }
        >
            {recipe.image.map(|src| view! { <img class="card-image" src=src alt="" /> })}
            <h2 class="card-title">{recipe.name}</h2>
            <div class="meta">
                <span>{recipe.difficulty.as_str()}</span>
                <span>{format!("{} min", total_minutes)}</span>
                {recipe.cuisine.map(|cuisine| view! { <span>{cuisine}</span> })}
            </div>
        </article>
    }
}

#[component]
pub fn RecipesPage() -> impl IntoView {
    let ctx = use_app_context();
    let state = use_query(config().retry, api::fetch_recipes);

    view! {
        <section class="list-page">
            <h1 class="page-title">"Recipes"</h1>
            {move || match state.get().branch() {
                RenderBranch::Placeholders(rows) => view! { <SkeletonList rows=rows /> }.into_any(),
                RenderBranch::Message(message) => {
                    view! { <ErrorBlock message=message label=Resource::Recipes.fetch_error_label() /> }
                        .into_any()
                }
                RenderBranch::Rows(recipes) => view! {
                    <div class="card-grid">
                        {recipes.into_iter().map(|recipe| recipe_card(recipe, ctx)).collect_view()}
                    </div>
                }.into_any(),
            }}
            <AddButton resource=Resource::Recipes label="Add Recipe" />
        </section>
    }
}

#[component]
pub fn AddRecipePage() -> impl IntoView {
    let ctx = use_app_context();
    let (add_recipe, status) = use_mutation(api::add_recipe);
    navigate_on_success(status, ctx, Resource::Recipes);

    view! {
        <section class="form-page">
            <h1 class="page-title">"Add Recipe"</h1>
            <MutationStatus state=status />
            <RecipeForm
                on_submit=add_recipe
                default_data=Signal::derive(|| None)
                pending=Signal::derive(move || status.get().is_pending())
            />
        </section>
    }
}

#[component]
pub fn EditRecipePage(id: u32) -> impl IntoView {
    let ctx = use_app_context();
    let recipe = use_query(config().retry, move || api::get_recipe(id));
    let (update_recipe, status) =
        use_mutation(move |recipe: Recipe| api::update_recipe(id, recipe));
    navigate_on_success(status, ctx, Resource::Recipes);

    let phase = Memo::new(move |_| recipe.with(|s| s.phase()));
    let default_data = Signal::derive(move || recipe.with(|s| s.value().cloned()));
    let pending = Signal::derive(move || status.get().is_pending());

    view! {
        <section class="form-page">
            <h1 class="page-title">"Edit Recipe"</h1>
            <MutationStatus state=status />
            {move || match phase.get() {
                Phase::Loading => view! { <SkeletonList rows=1 /> }.into_any(),
                Phase::Failed(message) => view! { <ErrorBlock message=message /> }.into_any(),
                Phase::Ready => view! {
                    <RecipeForm on_submit=update_recipe default_data=default_data pending=pending />
                }
                .into_any(),
            }}
        </section>
    }
}
