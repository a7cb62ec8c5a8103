//! Comment Pages

use leptos::prelude::*;

use crate::api;
use crate::components::{AddButton, ErrorBlock, FieldError, MutationStatus, SkeletonList};
use crate::config::config;
use crate::context::{use_app_context, AppContext};
use crate::error::ValidationError;
use crate::form::drafts::CommentDraft;
use crate::models::{Comment, CommentUser};
use crate::query::{use_mutation, use_query, FetchState, RenderBranch};
use crate::router::Resource;

use super::navigate_on_success;

/// Full name when the API has one
fn author(user: &CommentUser) -> String {
    match &user.full_name {
        Some(name) if !name.is_empty() => name.clone(),
        _ => "User".to_string(),
    }
}

fn comment_card(comment: Comment, ctx: AppContext) -> impl IntoView {
    let id = comment.id;

    view! {
        <article class="card clickable" on:click=move |_| ctx.navigate_to_detail(Resource::Comments, id)>
            <div class="comment-author">
                <span class="avatar">{author(&comment.user).chars().next().unwrap_or('U').to_string()}</span>
                <span>{author(&comment.user)}</span>
                <span class="username">{format!("@{}", comment.user.username)}</span>
            </div>
            <p class="card-body">{comment.body}</p>
            <div class="meta">
                <span>{format!("{} Likes", comment.likes)}</span>
            </div>
        </article>
    }
}

#[component]
pub fn CommentsPage() -> impl IntoView {
    let ctx = use_app_context();
    let state = use_query(config().retry, api::fetch_comments);

    view! {
        <section class="list-page">
            <h1 class="page-title">"Community Comments"</h1>
            {move || match state.get().branch() {
                RenderBranch::Placeholders(rows) => view! { <SkeletonList rows=rows /> }.into_any(),
                RenderBranch::Message(message) => {
                    view! { <ErrorBlock message=message label=Resource::Comments.fetch_error_label() /> }
                        .into_any()
                }
                RenderBranch::Rows(comments) => view! {
                    <div class="card-list">
                        {comments.into_iter().map(|comment| comment_card(comment, ctx)).collect_view()}
                    </div>
                }.into_any(),
            }}
            <AddButton resource=Resource::Comments label="Add Comment" />
        </section>
    }
}

#[component]
pub fn CommentDetailPage(id: u32) -> impl IntoView {
    let ctx = use_app_context();
    let state = use_query(config().retry, move || api::get_comment(id));

    view! {
        <section class="detail-page">
            <button class="back-btn" on:click=move |_| ctx.go_to(&Resource::Comments.list_path())>"Back"</button>
            {move || match state.get() {
                FetchState::Idle | FetchState::Loading => view! { <SkeletonList rows=1 /> }.into_any(),
                failed @ FetchState::Error(_) => view! {
                    <ErrorBlock message=failed.error_text().unwrap_or_default() />
                }.into_any(),
                FetchState::Success(comment) => view! {
                    <article class="detail">
                        <h1 class="page-title">{author(&comment.user)}</h1>
                        <p class="detail-body">{comment.body}</p>
                        <div class="meta">
                            <span>{format!("{} Likes", comment.likes)}</span>
                            {comment.post_id.map(|post_id| view! {
                                <button class="link-btn" on:click=move |_| ctx.navigate_to_detail(Resource::Posts, post_id)>
                                    {format!("On post #{}", post_id)}
                                </button>
                            })}
                        </div>
                    </article>
                }.into_any(),
            }}
        </section>
    }
}

#[component]
pub fn AddCommentPage() -> impl IntoView {
    let ctx = use_app_context();
    let draft = RwSignal::new(CommentDraft::default());
    let errors = RwSignal::new(Vec::<ValidationError>::new());
    let (add_comment, status) = use_mutation(api::add_comment);
    navigate_on_success(status, ctx, Resource::Comments);

    let handle_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match draft.with_untracked(CommentDraft::validate) {
            Ok(comment) => {
                errors.set(Vec::new());
                add_comment.run(comment);
            }
            Err(invalid) => errors.set(invalid),
        }
    };

    view! {
        <section class="form-page">
            <h1 class="page-title">"Add Comment"</h1>
            <MutationStatus state=status />
            <form class="simple-form" on:submit=handle_submit>
                <div class="form-field">
                    <label for="body">"Comment"</label>
                    <textarea
                        id="body"
                        rows=4
                        prop:value=move || draft.with(|d| d.body.clone())
                        on:input=move |ev| draft.update(|d| d.body = event_target_value(&ev))
                    />
                    <FieldError errors=errors field="body" />
                </div>
                <div class="form-row">
                    <div class="form-field">
                        <label for="postId">"Post ID"</label>
                        <input
                            id="postId"
                            type="number"
                            min="1"
                            prop:value=move || draft.with(|d| d.post_id.clone())
                            on:input=move |ev| draft.update(|d| d.post_id = event_target_value(&ev))
                        />
                        <FieldError errors=errors field="postId" />
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
                </div>
                <button type="submit" class="submit-btn" disabled=move || status.get().is_pending()>
                    "Post Comment"
                </button>
            </form>
        </section>
    }
}
