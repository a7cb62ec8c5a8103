//! Recipe Endpoints

use crate::error::ApiError;
use crate::models::{Recipe, RecipeList};
use super::client;

pub async fn fetch_recipes() -> Result<Vec<Recipe>, ApiError> {
    let list: RecipeList = client().get("/recipes").await?;
    log::info!("[recipes] loaded {} recipes", list.recipes.len());
    Ok(list.recipes)
}

pub async fn get_recipe(id: u32) -> Result<Recipe, ApiError> {
    client().get(&format!("/recipes/{}", id)).await
}

pub async fn add_recipe(recipe: Recipe) -> Result<Recipe, ApiError> {
    client().post("/recipes/add", &recipe).await
}

pub async fn update_recipe(id: u32, recipe: Recipe) -> Result<Recipe, ApiError> {
    client().put(&format!("/recipes/{}", id), &recipe).await
}
