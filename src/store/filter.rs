use std::fmt;

use crate::recipe::Recipe;

/// Exact-match filter on a single recipe field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecipeFilter {
    Id(u64),
    DishName(String),
    Cuisine(String),
    Ingredients(String),
    Steps(String),
    IsVegan(bool),
}

impl RecipeFilter {
    pub fn cuisine(value: impl Into<String>) -> Self {
        RecipeFilter::Cuisine(value.into())
    }

    pub fn matches(&self, recipe: &Recipe) -> bool {
        match self {
            RecipeFilter::Id(id) => recipe.id == *id,
            RecipeFilter::DishName(name) => recipe.dish_name == *name,
            RecipeFilter::Cuisine(cuisine) => recipe.cuisine == *cuisine,
            RecipeFilter::Ingredients(ingredients) => recipe.ingredients == *ingredients,
            RecipeFilter::Steps(steps) => recipe.steps == *steps,
            RecipeFilter::IsVegan(vegan) => recipe.is_vegan == *vegan,
        }
    }

    /// Wire name of the filtered field.
    pub fn field_name(&self) -> &'static str {
        match self {
            RecipeFilter::Id(_) => "id",
            RecipeFilter::DishName(_) => "dish_name",
            RecipeFilter::Cuisine(_) => "cuisine",
            RecipeFilter::Ingredients(_) => "ingredients",
            RecipeFilter::Steps(_) => "steps",
            RecipeFilter::IsVegan(_) => "is_vegan",
        }
    }
}

impl fmt::Display for RecipeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let field = self.field_name();
        match self {
            RecipeFilter::Id(id) => write!(f, "{} = {}", field, id),
            RecipeFilter::DishName(v)
            | RecipeFilter::Cuisine(v)
            | RecipeFilter::Ingredients(v)
            | RecipeFilter::Steps(v) => write!(f, "{} = {:?}", field, v),
            RecipeFilter::IsVegan(vegan) => write!(f, "{} = {}", field, vegan),
        }
    }
}
