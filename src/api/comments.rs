//! Comment Endpoints

use crate::error::ApiError;
use crate::models::{Comment, CommentList, NewComment};
use super::client;

pub async fn fetch_comments() -> Result<Vec<Comment>, ApiError> {
    let list: CommentList = client().get("/comments").await?;
    log::info!("[comments] loaded {} comments", list.comments.len());
    Ok(list.comments)
}

pub async fn get_comment(id: u32) -> Result<Comment, ApiError> {
    client().get(&format!("/comments/{}", id)).await
}

pub async fn add_comment(comment: NewComment) -> Result<Comment, ApiError> {
    client().post("/comments/add", &comment).await
}
