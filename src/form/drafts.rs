//! Simple Drafts
//!
//! Post, comment and todo forms: all required text plus a few ids.

use crate::error::ValidationError;
use crate::models::{NewComment, NewPost, Todo, TodoBody};

use super::{split_lines, MSG_NOT_A_NUMBER, MSG_REQUIRED};

pub const MSG_NOT_AN_ID: &str = "Must be a whole number of zero or more.";

pub const CONFIRM_TODO_UPDATE: &str = "Are you sure you want to update the todo?";

fn required_text(field: &'static str, raw: &str, errors: &mut Vec<ValidationError>) -> String {
    let value = raw.trim();
    if value.is_empty() {
        errors.push(ValidationError::new(field, MSG_REQUIRED));
    }
    value.to_string()
}

fn required_id(field: &'static str, raw: &str, errors: &mut Vec<ValidationError>) -> u32 {
    let value = raw.trim();
    if value.is_empty() {
        errors.push(ValidationError::new(field, MSG_REQUIRED));
        return 0;
    }
    if let Ok(id) = value.parse::<u32>() {
        return id;
    }
    // Numeric but negative, fractional or too large is a different mistake
    let message = match value.parse::<f64>() {
        Ok(n) if n.is_finite() => MSG_NOT_AN_ID,
        _ => MSG_NOT_A_NUMBER,
    };
    errors.push(ValidationError::new(field, message));
    0
}

fn finish<T>(value: T, errors: Vec<ValidationError>) -> Result<T, Vec<ValidationError>> {
    if errors.is_empty() {
        Ok(value)
    } else {
        Err(errors)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub body: String,
    /// One tag per line
    pub tags_text: String,
    pub user_id: String,
}

impl PostDraft {
    pub fn validate(&self) -> Result<NewPost, Vec<ValidationError>> {
        let mut errors = Vec::new();
        let title = required_text("title", &self.title, &mut errors);
        let body = required_text("body", &self.body, &mut errors);
        let user_id = required_id("userId", &self.user_id, &mut errors);
        let post = NewPost {
            title,
            body,
            tags: split_lines(&self.tags_text),
            user_id,
        };
        finish(post, errors)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentDraft {
    pub body: String,
    pub post_id: String,
    pub user_id: String,
}

impl CommentDraft {
    pub fn validate(&self) -> Result<NewComment, Vec<ValidationError>> {
        let mut errors = Vec::new();
        let body = required_text("body", &self.body, &mut errors);
        let post_id = required_id("postId", &self.post_id, &mut errors);
        let user_id = required_id("userId", &self.user_id, &mut errors);
        finish(NewComment { body, post_id, user_id }, errors)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoDraft {
    pub todo: String,
    pub completed: bool,
    /// Only asked for when creating
    pub user_id: String,
}

impl TodoDraft {
    pub fn from_todo(todo: &Todo) -> Self {
        Self {
            todo: todo.todo.clone(),
            completed: todo.completed,
            user_id: todo.user_id.to_string(),
        }
    }

    pub fn validate_new(&self) -> Result<TodoBody, Vec<ValidationError>> {
        let mut errors = Vec::new();
        let todo = required_text("todo", &self.todo, &mut errors);
        let user_id = required_id("userId", &self.user_id, &mut errors);
        finish(TodoBody { todo, completed: self.completed, user_id: Some(user_id) }, errors)
    }

    pub fn validate_update(&self) -> Result<TodoBody, Vec<ValidationError>> {
        let mut errors = Vec::new();
        let todo = required_text("todo", &self.todo, &mut errors);
        finish(TodoBody { todo, completed: self.completed, user_id: None }, errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_tags_split_by_line() {
        let draft = PostDraft {
            title: " Hello ".into(),
            body: "World".into(),
            tags_text: "rust\n\n wasm \n".into(),
            user_id: "5".into(),
        };
        let post = draft.validate().unwrap();
        assert_eq!(post.title, "Hello");
        assert_eq!(post.tags, vec!["rust", "wasm"]);
        assert_eq!(post.user_id, 5);
    }

    #[test]
    fn test_post_requires_title_body_user() {
        let errors = PostDraft::default().validate().unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["title", "body", "userId"]);
    }

    #[test]
    fn test_comment_rejects_non_numeric_ids() {
        let draft = CommentDraft {
            body: "Nice".into(),
            post_id: "abc".into(),
            user_id: "3".into(),
        };
        assert_eq!(
            draft.validate().unwrap_err(),
            vec![ValidationError::new("postId", MSG_NOT_A_NUMBER)]
        );
    }

    #[test]
    fn test_numeric_but_invalid_id_is_not_called_non_numeric() {
        let draft = CommentDraft {
            body: "Nice".into(),
            post_id: "-4".into(),
            user_id: "2.5".into(),
        };
        assert_eq!(
            draft.validate().unwrap_err(),
            vec![
                ValidationError::new("postId", MSG_NOT_AN_ID),
                ValidationError::new("userId", MSG_NOT_AN_ID),
            ]
        );
    }

    #[test]
    fn test_todo_update_ignores_user() {
        let todo = Todo {
            id: 1,
            todo: "Walk the dog".into(),
            completed: false,
            user_id: 26,
            image: None,
        };
        let mut draft = TodoDraft::from_todo(&todo);
        draft.completed = true;
        draft.user_id.clear();
        let body = draft.validate_update().unwrap();
        assert_eq!(body, TodoBody { todo: "Walk the dog".into(), completed: true, user_id: None });
        assert!(draft.validate_new().is_err());
    }
}
