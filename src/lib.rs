pub mod auth;
pub mod config;
pub mod projection;
pub mod recipe;
pub mod seed;
pub mod service;
pub mod store;

pub use auth::{AuthError, BasicAuth, Credentials};
pub use config::CookbookConfig;
pub use projection::{DeleteOutcome, RecipeCollection, RecipeView, SingleRecipe};
pub use recipe::{NewRecipe, Recipe, RecipeFields, ValidationError};
pub use service::{Cookbook, CookbookError};
pub use store::{InMemoryRecipeStore, RecipeBook, RecipeFilter, RecipeRepository, StoreError};
