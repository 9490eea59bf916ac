//! Recipe records and the inputs used to create or change them.
//!
//! - [`Recipe`] is a stored record. Its `id` is assigned by the store and never changes.
//! - [`NewRecipe`] is validated caller input, ready to be inserted.
//! - [`RecipeFields`] is partial caller input: the body of both create and update requests.

mod error;
mod fields;

pub use error::ValidationError;
pub use fields::RecipeFields;

use serde::{Deserialize, Serialize};

/// A recipe held by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: u64,
    pub dish_name: String,
    pub cuisine: String,
    pub ingredients: String,
    pub steps: String,
    pub is_vegan: bool,
}

impl Recipe {
    /// Build a stored record from validated input and a store-assigned id.
    pub fn from_new(id: u64, recipe: NewRecipe) -> Self {
        Self {
            id,
            dish_name: recipe.dish_name,
            cuisine: recipe.cuisine,
            ingredients: recipe.ingredients,
            steps: recipe.steps,
            is_vegan: recipe.is_vegan,
        }
    }
}

/// Validated input for a recipe that does not have an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecipe {
    pub dish_name: String,
    pub cuisine: String,
    pub ingredients: String,
    pub steps: String,
    pub is_vegan: bool,
}

impl NewRecipe {
    pub fn new(
        dish_name: impl Into<String>,
        cuisine: impl Into<String>,
        ingredients: impl Into<String>,
        steps: impl Into<String>,
        is_vegan: bool,
    ) -> Self {
        Self {
            dish_name: dish_name.into(),
            cuisine: cuisine.into(),
            ingredients: ingredients.into(),
            steps: steps.into(),
            is_vegan,
        }
    }
}
