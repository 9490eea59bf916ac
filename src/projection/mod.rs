//! Projections - the public JSON shapes of recipes.
//!
//! Single records are wrapped under `"recipe"`, lists under `"recipes"`.
//! Each view carries a `uri` linking back to the record.

use serde::{Deserialize, Serialize};

use crate::recipe::Recipe;

/// Path prefix of the recipe collection.
pub const RECIPES_PATH: &str = "/cookbook/v1.0/recipes";

/// Link to a single recipe.
pub fn recipe_uri(id: u64) -> String {
    format!("{RECIPES_PATH}/{id}")
}

/// Public view of one recipe. The id is only exposed through `uri`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeView {
    pub dish_name: String,
    pub cuisine: String,
    pub ingredients: String,
    pub steps: String,
    pub is_vegan: bool,
    pub uri: String,
}

impl From<&Recipe> for RecipeView {
    fn from(recipe: &Recipe) -> Self {
        Self {
            dish_name: recipe.dish_name.clone(),
            cuisine: recipe.cuisine.clone(),
            ingredients: recipe.ingredients.clone(),
            steps: recipe.steps.clone(),
            is_vegan: recipe.is_vegan,
            uri: recipe_uri(recipe.id),
        }
    }
}

/// `{"recipe": {...}}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SingleRecipe {
    pub recipe: RecipeView,
}

impl From<&Recipe> for SingleRecipe {
    fn from(recipe: &Recipe) -> Self {
        Self {
            recipe: recipe.into(),
        }
    }
}

/// `{"recipes": [...]}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeCollection {
    pub recipes: Vec<RecipeView>,
}

impl<'a> FromIterator<&'a Recipe> for RecipeCollection {
    fn from_iter<I: IntoIterator<Item = &'a Recipe>>(iter: I) -> Self {
        Self {
            recipes: iter.into_iter().map(RecipeView::from).collect(),
        }
    }
}

impl From<&[Recipe]> for RecipeCollection {
    fn from(recipes: &[Recipe]) -> Self {
        recipes.iter().collect()
    }
}

/// `{"result": true}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteOutcome {
    pub result: bool,
}

impl DeleteOutcome {
    pub fn deleted() -> Self {
        Self { result: true }
    }
}
