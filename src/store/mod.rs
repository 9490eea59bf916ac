//! Recipe storage: the ordered record book, filters, and the shared store.
//!
//! ## Example
//!
//! ```ignore
//! use cookbook::{InMemoryRecipeStore, RecipeFilter, RecipeRepository};
//!
//! let store = InMemoryRecipeStore::seeded();
//! let vegan = store.filter_by(&RecipeFilter::IsVegan(true))?;
//! let recipe = store.insert(new_recipe)?;
//! store.delete_by_id(recipe.id)?;
//! ```

mod book;
mod error;
mod filter;
mod in_memory;

pub use book::RecipeBook;
pub use error::StoreError;
pub use filter::RecipeFilter;
pub use in_memory::InMemoryRecipeStore;

use crate::recipe::{NewRecipe, Recipe, RecipeFields};

/// Read and write access to the recipe collection.
///
/// Every call returns owned records; nothing handed out aliases the store.
pub trait RecipeRepository {
    /// Every record, in insertion order.
    fn all(&self) -> Result<Vec<Recipe>, StoreError>;

    /// Records matching `filter`, in insertion order. Empty when nothing matches.
    fn filter_by(&self, filter: &RecipeFilter) -> Result<Vec<Recipe>, StoreError>;

    /// First record with `id`, if any.
    fn find_by_id(&self, id: u64) -> Result<Option<Recipe>, StoreError> {
        Ok(self.filter_by(&RecipeFilter::Id(id))?.into_iter().next())
    }

    /// The id the next insert would receive.
    fn next_id(&self) -> Result<u64, StoreError>;

    /// Assign an id, append, and return the stored record.
    fn insert(&self, recipe: NewRecipe) -> Result<Recipe, StoreError>;

    /// Merge truthy `fields` into the record with `id`. `None` if absent.
    fn merge_fields(&self, id: u64, fields: &RecipeFields) -> Result<Option<Recipe>, StoreError>;

    /// Remove the record with `id`, or `StoreError::NotFound`.
    fn delete_by_id(&self, id: u64) -> Result<(), StoreError>;
}
