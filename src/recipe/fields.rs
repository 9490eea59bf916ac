//! Partial recipe input shared by create and update requests.

use serde::{Deserialize, Serialize};

use super::{NewRecipe, Recipe, ValidationError};

const DISH_NAME_REQUIRED: &str = "Please provide the name of the dish";
const INGREDIENTS_REQUIRED: &str = "Please provide the list of ingredients";
const STEPS_REQUIRED: &str = "Please provide the steps for preparing the recipe";

/// One optional value per caller-supplied recipe field.
///
/// Unknown keys in the request body are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeFields {
    #[serde(default)]
    pub dish_name: Option<String>,
    #[serde(default)]
    pub cuisine: Option<String>,
    #[serde(default)]
    pub ingredients: Option<String>,
    #[serde(default)]
    pub steps: Option<String>,
    #[serde(default)]
    pub is_vegan: Option<bool>,
}

impl RecipeFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dish_name(mut self, value: impl Into<String>) -> Self {
        self.dish_name = Some(value.into());
        self
    }

    pub fn cuisine(mut self, value: impl Into<String>) -> Self {
        self.cuisine = Some(value.into());
        self
    }

    pub fn ingredients(mut self, value: impl Into<String>) -> Self {
        self.ingredients = Some(value.into());
        self
    }

    pub fn steps(mut self, value: impl Into<String>) -> Self {
        self.steps = Some(value.into());
        self
    }

    pub fn is_vegan(mut self, value: bool) -> Self {
        self.is_vegan = Some(value);
        self
    }

    /// Overwrite the fields of `recipe` that carry a truthy value.
    ///
    /// Absent fields, empty strings and `false` leave the record untouched, so
    /// this path can neither clear a text field nor unset the vegan flag.
    /// Returns the record for chaining.
    pub fn merge_into<'a>(&self, recipe: &'a mut Recipe) -> &'a mut Recipe {
        if let Some(value) = truthy(&self.dish_name) {
            recipe.dish_name = value.to_string();
        }
        if let Some(value) = truthy(&self.cuisine) {
            recipe.cuisine = value.to_string();
        }
        if let Some(value) = truthy(&self.ingredients) {
            recipe.ingredients = value.to_string();
        }
        if let Some(value) = truthy(&self.steps) {
            recipe.steps = value.to_string();
        }
        if self.is_vegan == Some(true) {
            recipe.is_vegan = true;
        }
        recipe
    }

    /// True when [`merge_into`](Self::merge_into) would change nothing.
    pub fn is_noop(&self) -> bool {
        truthy(&self.dish_name).is_none()
            && truthy(&self.cuisine).is_none()
            && truthy(&self.ingredients).is_none()
            && truthy(&self.steps).is_none()
            && self.is_vegan != Some(true)
    }

    /// Check the required fields and produce insertable input.
    ///
    /// Fields are checked in declaration order and the first failure is
    /// reported. `cuisine` defaults to empty, `is_vegan` to `false`.
    pub fn validate(self) -> Result<NewRecipe, ValidationError> {
        let dish_name = required(self.dish_name, "dish_name", DISH_NAME_REQUIRED)?;
        let ingredients = required(self.ingredients, "ingredients", INGREDIENTS_REQUIRED)?;
        let steps = required(self.steps, "steps", STEPS_REQUIRED)?;

        Ok(NewRecipe {
            dish_name,
            cuisine: self.cuisine.unwrap_or_default(),
            ingredients,
            steps,
            is_vegan: self.is_vegan.unwrap_or(false),
        })
    }
}

fn truthy(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn required(
    value: Option<String>,
    field: &'static str,
    message: &'static str,
) -> Result<String, ValidationError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ValidationError::missing(field, message)),
    }
}
