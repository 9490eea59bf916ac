//! InMemoryRecipeStore - lock-guarded recipe book shared across request handlers.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, warn};

use crate::recipe::{NewRecipe, Recipe, RecipeFields};
use crate::seed;

use super::{RecipeBook, RecipeFilter, RecipeRepository, StoreError};

/// Process-lifetime recipe store. Clone-friendly via Arc.
///
/// Reads share the lock; inserts, merges and deletes hold the write lock for
/// the whole read-modify-write, so one writer runs at a time.
#[derive(Clone, Default)]
pub struct InMemoryRecipeStore {
    book: Arc<RwLock<RecipeBook>>,
}

impl InMemoryRecipeStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `recipes` in the given order.
    pub fn with_recipes(recipes: Vec<Recipe>) -> Self {
        Self {
            book: Arc::new(RwLock::new(RecipeBook::with_recipes(recipes))),
        }
    }

    /// Create a store preloaded with the demo recipes.
    pub fn seeded() -> Self {
        Self::with_recipes(seed::demo_recipes())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, RecipeBook>, StoreError> {
        self.book.read().map_err(|_| {
            warn!("recipe store lock poisoned");
            StoreError::LockPoisoned("read")
        })
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, RecipeBook>, StoreError> {
        self.book.write().map_err(|_| {
            warn!("recipe store lock poisoned");
            StoreError::LockPoisoned("write")
        })
    }
}

impl RecipeRepository for InMemoryRecipeStore {
    fn all(&self) -> Result<Vec<Recipe>, StoreError> {
        Ok(self.read()?.as_slice().to_vec())
    }

    fn filter_by(&self, filter: &RecipeFilter) -> Result<Vec<Recipe>, StoreError> {
        let matches = self.read()?.filter_by(filter);
        debug!(field = filter.field_name(), matches = matches.len(), "filtered recipes");
        Ok(matches)
    }

    fn find_by_id(&self, id: u64) -> Result<Option<Recipe>, StoreError> {
        Ok(self.read()?.find_by_id(id).cloned())
    }

    fn next_id(&self) -> Result<u64, StoreError> {
        Ok(self.read()?.next_id())
    }

    fn insert(&self, recipe: NewRecipe) -> Result<Recipe, StoreError> {
        Ok(self.write()?.insert(recipe))
    }

    fn merge_fields(&self, id: u64, fields: &RecipeFields) -> Result<Option<Recipe>, StoreError> {
        Ok(self.write()?.merge_fields(id, fields).cloned())
    }

    fn delete_by_id(&self, id: u64) -> Result<(), StoreError> {
        self.write()?.delete_by_id(id)
    }
}
