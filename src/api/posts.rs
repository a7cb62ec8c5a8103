//! Post Endpoints

use crate::error::ApiError;
use crate::models::{NewPost, Post, PostList};
use super::client;

pub async fn fetch_posts() -> Result<Vec<Post>, ApiError> {
    let list: PostList = client().get("/posts").await?;
    log::info!("[posts] loaded {} posts", list.posts.len());
    Ok(list.posts)
}

pub async fn get_post(id: u32) -> Result<Post, ApiError> {
    client().get(&format!("/posts/{}", id)).await
}

pub async fn add_post(post: NewPost) -> Result<Post, ApiError> {
    client().post("/posts/add", &post).await
}
