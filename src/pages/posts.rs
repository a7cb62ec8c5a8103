//! Post Pages

use leptos::prelude::*;

use crate::api;
use crate::components::{AddButton, ErrorBlock, FieldError, MutationStatus, SkeletonList};
use crate::config::config;
use crate::context::{use_app_context, AppContext};
use crate::error::ValidationError;
use crate::form::drafts::PostDraft;
use crate::models::Post;
use crate::query::{use_mutation, use_query, FetchState, RenderBranch};
use crate::router::Resource;

use super::navigate_on_success;

fn post_card(post: Post, ctx: AppContext) -> impl IntoView {
    let id = post.id;

    view! {
        <article class="card clickable" on:click=move |_| ctx.navigate_to_detail(Resource::Posts, id)>
            {post.thumbnail.map(|src| view! { <img class="card-image" src=src alt="" /> })}
            <h2 class="card-title">{post.title}</h2>
            <p class="card-body clamp">{post.body}</p>
            <div class="tags">
                {post.tags.into_iter().map(|tag| view! { <span class="tag">{tag}</span> }).collect_view()}
            </div>
            <div class="meta">
                <span>{format!("Likes: {}", post.reactions.likes)}</span>
                <span>{format!("Dislikes: {}", post.reactions.dislikes)}</span>
                <span>{format!("Views: {}", post.views)}</span>
            </div>
        </article>
    }
}

#[component]
pub fn PostsPage() -> impl IntoView {
    let ctx = use_app_context();
    let state = use_query(config().retry, api::fetch_posts);

    view! {
        <section class="list-page">
            <h1 class="page-title">"Post List"</h1>
            {move || match state.get().branch() {
                RenderBranch::Placeholders(rows) => view! { <SkeletonList rows=rows /> }.into_any(),
                RenderBranch::Message(message) => {
                    view! { <ErrorBlock message=message label=Resource::Posts.fetch_error_label() /> }
                        .into_any()
                }
                RenderBranch::Rows(posts) => view! {
                    <div class="card-list">
                        {posts.into_iter().map(|post| post_card(post, ctx)).collect_view()}
                    </div>
                }.into_any(),
            }}
            <AddButton resource=Resource::Posts label="Add Post" />
        </section>
    }
}

#[component]
pub fn PostDetailPage(id: u32) -> impl IntoView {
    let ctx = use_app_context();
    let state = use_query(config().retry, move || api::get_post(id));

    view! {
        <section class="detail-page">
            <button class="back-btn" on:click=move |_| ctx.go_to(&Resource::Posts.list_path())>"Back"</button>
            {move || match state.get() {
                FetchState::Idle | FetchState::Loading => view! { <SkeletonList rows=1 /> }.into_any(),
                failed @ FetchState::Error(_) => view! {
                    <ErrorBlock message=failed.error_text().unwrap_or_default() />
                }.into_any(),
                FetchState::Success(post) => view! {
                    <article class="detail">
                        <h1 class="page-title">{post.title}</h1>
                        <p class="detail-body">{post.body}</p>
                        <div class="tags">
                            {post.tags.into_iter().map(|tag| view! { <span class="tag">{tag}</span> }).collect_view()}
                        </div>
                        <div class="meta">
                            <span>{format!("Likes: {}", post.reactions.likes)}</span>
                            <span>{format!("Dislikes: {}", post.reactions.dislikes)}</span>
                            <span>{format!("Views: {}", post.views)}</span>
                            <span>{format!("User #{}", post.user_id)}</span>
                        </div>
                    </article>
                }.into_any(),
            }}
        </section>
    }
}

#[component]
pub fn AddPostPage() -> impl IntoView {
    let ctx = use_app_context();
    let draft = RwSignal::new(PostDraft::default());
    let errors = RwSignal::new(Vec::<ValidationError>::new());
    let (add_post, status) = use_mutation(api::add_post);
    navigate_on_success(status, ctx, Resource::Posts);

    let handle_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match draft.with_untracked(PostDraft::validate) {
            Ok(post) => {
                errors.set(Vec::new());
                add_post.run(post);
            }
            Err(invalid) => errors.set(invalid),
        }
    };

    view! {
        <section class="form-page">
            <h1 class="page-title">"Add Post"</h1>
            <MutationStatus state=status />
            <form class="simple-form" on:submit=handle_submit>
                <div class="form-field">
                    <label for="title">"Title"</label>
                    <input
                        id="title"
                        type="text"
                        prop:value=move || draft.with(|d| d.title.clone())
                        on:input=move |ev| draft.update(|d| d.title = event_target_value(&ev))
                    />
                    <FieldError errors=errors field="title" />
                </div>
                <div class="form-field">
                    <label for="body">"Body"</label>
                    <textarea
                        id="body"
                        rows=6
                        prop:value=move || draft.with(|d| d.body.clone())
                        on:input=move |ev| draft.update(|d| d.body = event_target_value(&ev))
                    />
                    <FieldError errors=errors field="body" />
                </div>
                <div class="form-field">
                    <label for="tags">"Tags (one per line)"</label>
                    <textarea
                        id="tags"
                        rows=3
                        prop:value=move || draft.with(|d| d.tags_text.clone())
                        on:input=move |ev| draft.update(|d| d.tags_text = event_target_value(&ev))
                    />
                </div>
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
                <button type="submit" class="submit-btn" disabled=move || status.get().is_pending()>
                    "Submit Post"
                </button>
            </form>
        </section>
    }
}
