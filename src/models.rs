//! Frontend Models
//!
//! Data structures matching the remote API's JSON.

use serde::{Deserialize, Serialize};

/// Recipe difficulty (closed set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.as_str() == value)
    }
}

/// Recipe, also used as the add/update payload (`id` omitted when sending)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    pub name: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub instructions: Vec<String>,
    pub prep_time_minutes: f64,
    pub cook_time_minutes: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servings: Option<f64>,
    pub difficulty: Difficulty,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
    #[serde(default, skip_serializing)]
    pub image: Option<String>,
    #[serde(default, skip_serializing)]
    pub rating: Option<f32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Reactions {
    pub likes: u32,
    pub dislikes: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: u32,
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub reactions: Reactions,
    #[serde(default)]
    pub views: u32,
    pub user_id: u32,
    #[serde(default)]
    pub thumbnail: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentUser {
    pub id: u32,
    pub username: String,
    #[serde(default)]
    pub full_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: u32,
    pub body: String,
    #[serde(default)]
    pub likes: u32,
    #[serde(default)]
    pub post_id: Option<u32>,
    pub user: CommentUser,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: u32,
    pub todo: String,
    pub completed: bool,
    pub user_id: u32,
    #[serde(default)]
    pub image: Option<String>,
}

// ========================
// Request Bodies
// ========================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    pub title: String,
    pub body: String,
    pub tags: Vec<String>,
    pub user_id: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
    pub body: String,
    pub post_id: u32,
    pub user_id: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoBody {
    pub todo: String,
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u32>,
}

// ========================
// List Envelopes
// ========================

#[derive(Debug, Deserialize)]
pub struct RecipeList {
    pub recipes: Vec<Recipe>,
}

#[derive(Debug, Deserialize)]
pub struct PostList {
    pub posts: Vec<Post>,
}

#[derive(Debug, Deserialize)]
pub struct CommentList {
    pub comments: Vec<Comment>,
}

#[derive(Debug, Deserialize)]
pub struct TodoList {
    pub todos: Vec<Todo>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_payload_wire_names() {
        let recipe = Recipe {
            id: None,
            name: "Cake".into(),
            ingredients: vec!["Salt".into()],
            instructions: vec!["Mix".into()],
            prep_time_minutes: 10.0,
            cook_time_minutes: 30.0,
            servings: None,
            difficulty: Difficulty::Easy,
            cuisine: None,
            image: Some("ignored.png".into()),
            rating: Some(4.5),
        };
        let json = serde_json::to_value(&recipe).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Cake",
                "ingredients": ["Salt"],
                "instructions": ["Mix"],
                "prepTimeMinutes": 10.0,
                "cookTimeMinutes": 30.0,
                "difficulty": "Easy",
            })
        );
    }

    #[test]
    fn test_recipe_list_decodes_api_shape() {
        let raw = r#"{
            "recipes": [{
                "id": 1,
                "name": "Classic Margherita Pizza",
                "ingredients": ["Pizza dough", "Tomato sauce"],
                "instructions": ["Preheat the oven"],
                "prepTimeMinutes": 20,
                "cookTimeMinutes": 15,
                "servings": 4,
                "difficulty": "Easy",
                "cuisine": "Italian",
                "caloriesPerServing": 300,
                "rating": 4.6
            }],
            "total": 50, "skip": 0, "limit": 30
        }"#;
        let list: RecipeList = serde_json::from_str(raw).unwrap();
        assert_eq!(list.recipes.len(), 1);
        assert_eq!(list.recipes[0].id, Some(1));
        assert_eq!(list.recipes[0].servings, Some(4.0));
        assert_eq!(list.recipes[0].cuisine.as_deref(), Some("Italian"));
    }

    #[test]
    fn test_comment_decodes_nested_user() {
        let raw = r#"{"id": 1, "body": "This is some awesome thinking!", "postId": 242, "likes": 3,
            "user": {"id": 105, "username": "emmac", "fullName": "Emma Wilson"}}"#;
        let comment: Comment = serde_json::from_str(raw).unwrap();
        assert_eq!(comment.user.full_name.as_deref(), Some("Emma Wilson"));
        assert_eq!(comment.post_id, Some(242));
    }

    #[test]
    fn test_difficulty_parse() {
        assert_eq!(Difficulty::parse("Medium"), Some(Difficulty::Medium));
        assert_eq!(Difficulty::parse("medium"), None);
        assert_eq!(Difficulty::parse(""), None);
    }
}
