//! Shared fixtures: a seeded cookbook and a sample recipe payload.

use cookbook::{Cookbook, Credentials, InMemoryRecipeStore, RecipeFields};

/// A cookbook over the three demo recipes with the demo accounts.
pub fn seeded_cookbook() -> Cookbook<InMemoryRecipeStore> {
    Cookbook::new(InMemoryRecipeStore::seeded(), Credentials::default())
}

/// A cookbook with no recipes.
pub fn empty_cookbook() -> Cookbook<InMemoryRecipeStore> {
    Cookbook::new(InMemoryRecipeStore::new(), Credentials::default())
}

/// A complete, valid create payload.
pub fn fingerling_potatoes() -> RecipeFields {
    RecipeFields::new()
        .dish_name("fingerling potatoes")
        .cuisine("American")
        .ingredients("fingerling potatoes")
        .steps("1. Wash the potatoes. 2. Cook the potatoes")
        .is_vegan(true)
}
