//! Todo Endpoints

use crate::error::ApiError;
use crate::models::{Todo, TodoBody, TodoList};
use super::client;

pub async fn fetch_todos() -> Result<Vec<Todo>, ApiError> {
    let list: TodoList = client().get("/todos").await?;
    log::info!("[todos] loaded {} todos", list.todos.len());
    Ok(list.todos)
}

pub async fn get_todo(id: u32) -> Result<Todo, ApiError> {
    client().get(&format!("/todos/{}", id)).await
}

pub async fn add_todo(todo: TodoBody) -> Result<Todo, ApiError> {
    client().post("/todos/add", &todo).await
}

pub async fn update_todo(id: u32, todo: TodoBody) -> Result<Todo, ApiError> {
    client().put(&format!("/todos/{}", id), &todo).await
}
