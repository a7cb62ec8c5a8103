//! UI Components
//!
//! Reusable Leptos components.

mod nav_bar;
mod skeleton_list;
mod error_block;
mod add_button;
mod field_error;
mod mutation_status;
mod recipe_form;
mod log_panel;

pub use nav_bar::NavBar;
pub use skeleton_list::SkeletonList;
pub use error_block::ErrorBlock;
pub use add_button::AddButton;
pub use field_error::FieldError;
pub use mutation_status::MutationStatus;
pub use recipe_form::RecipeForm;
pub use log_panel::LogPanel;
