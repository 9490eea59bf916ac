//! RecipeBook - the ordered, single-threaded record store.

use crate::recipe::{NewRecipe, Recipe, RecipeFields};

use super::error::StoreError;
use super::filter::RecipeFilter;

/// Recipes in insertion order.
///
/// Not synchronized; see [`InMemoryRecipeStore`](super::InMemoryRecipeStore)
/// for the shared, lock-guarded version.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeBook {
    recipes: Vec<Recipe>,
}

impl RecipeBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from existing records, kept in the given order.
    pub fn with_recipes(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    pub fn append(&mut self, recipe: Recipe) {
        self.recipes.push(recipe);
    }

    /// Remove the record with `id`. Returns `false` if there was none.
    pub fn remove(&mut self, id: u64) -> bool {
        match self.recipes.iter().position(|r| r.id == id) {
            Some(index) => {
                self.recipes.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.iter()
    }

    pub fn as_slice(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn filter_by(&self, filter: &RecipeFilter) -> Vec<Recipe> {
        self.recipes
            .iter()
            .filter(|r| filter.matches(r))
            .cloned()
            .collect()
    }

    pub fn find_by_id(&self, id: u64) -> Option<&Recipe> {
        let filter = RecipeFilter::Id(id);
        self.recipes.iter().find(|r| filter.matches(r))
    }

    /// One more than the id of the last record, or 1 when empty.
    ///
    /// Follows insertion order, not the largest id. Records are only ever
    /// appended, so the last record holds the largest id and allocated ids
    /// stay unique; deleting the last record lets its id be handed out again.
    pub fn next_id(&self) -> u64 {
        self.recipes.last().map(|r| r.id + 1).unwrap_or(1)
    }

    pub fn insert(&mut self, recipe: NewRecipe) -> Recipe {
        let recipe = Recipe::from_new(self.next_id(), recipe);
        self.append(recipe.clone());
        recipe
    }

    /// Merge `fields` into the record with `id`, returning the updated record.
    pub fn merge_fields(&mut self, id: u64, fields: &RecipeFields) -> Option<&Recipe> {
        let recipe = self.recipes.iter_mut().find(|r| r.id == id)?;
        Some(fields.merge_into(recipe))
    }

    pub fn delete_by_id(&mut self, id: u64) -> Result<(), StoreError> {
        if self.remove(id) {
            Ok(())
        } else {
            Err(StoreError::NotFound(id))
        }
    }
}
