//! Board Frontend App
//!
//! Navigation bar plus the page for the current route.

use leptos::prelude::*;

use crate::components::{LogPanel, NavBar};
use crate::context::AppContext;
use crate::pages::{
    AddCommentPage, AddPostPage, AddRecipePage, AddTodoPage, CommentDetailPage, CommentsPage,
    EditRecipePage, EditTodoPage, NotFoundPage, PostDetailPage, PostsPage, RecipesPage, TodosPage,
};
use crate::router::{Resource, Route};

#[component]
pub fn App() -> impl IntoView {
    // Provide context to all children
    let ctx = AppContext::new();
    provide_context(ctx);

    view! {
        <div class="app-layout">
            <NavBar />
            <main class="main-content">
                // A route change rebuilds the page, which refetches on mount
                {move || match ctx.route.get() {
                    Route::List(Resource::Recipes) => view! { <RecipesPage /> }.into_any(),
                    Route::List(Resource::Posts) => view! { <PostsPage /> }.into_any(),
                    Route::List(Resource::Comments) => view! { <CommentsPage /> }.into_any(),
                    Route::List(Resource::Todos) => view! { <TodosPage /> }.into_any(),
                    Route::Add(Resource::Recipes) => view! { <AddRecipePage /> }.into_any(),
                    Route::Add(Resource::Posts) => view! { <AddPostPage /> }.into_any(),
                    Route::Add(Resource::Comments) => view! { <AddCommentPage /> }.into_any(),
                    Route::Add(Resource::Todos) => view! { <AddTodoPage /> }.into_any(),
                    Route::Detail(Resource::Posts, id) => view! { <PostDetailPage id=id /> }.into_any(),
                    Route::Detail(Resource::Comments, id) => view! { <CommentDetailPage id=id /> }.into_any(),
                    Route::Edit(Resource::Recipes, id) => view! { <EditRecipePage id=id /> }.into_any(),
                    Route::Edit(Resource::Todos, id) => view! { <EditTodoPage id=id /> }.into_any(),
                    Route::Detail(..) | Route::Edit(..) | Route::NotFound => view! { <NotFoundPage /> }.into_any(),
                }}
            </main>
            <LogPanel />
        </div>
    }
}
