//! Cookbook service - the recipe endpoints as plain methods.
//!
//! `Cookbook<R>` holds a recipe repository and the accepted credentials.
//! Each method implements one endpoint and returns its projection; the HTTP
//! transport (requires the `http` feature) only maps methods to routes.
//!
//! ## Example
//!
//! ```ignore
//! use cookbook::{Cookbook, Credentials, InMemoryRecipeStore};
//!
//! let cookbook = Cookbook::new(InMemoryRecipeStore::seeded(), Credentials::default());
//! let vegan = cookbook.vegan_recipes()?;
//!
//! // HTTP transport (requires "http" feature)
//! // cookbook::service::serve(Arc::new(cookbook), "127.0.0.1:5000").await?;
//! ```

mod error;

pub use error::CookbookError;

#[cfg(feature = "http")]
mod http;
#[cfg(feature = "http")]
pub use http::{router, serve};

use tracing::{info, warn};

use crate::auth::Credentials;
use crate::projection::{DeleteOutcome, RecipeCollection, SingleRecipe};
use crate::recipe::RecipeFields;
use crate::store::{RecipeFilter, RecipeRepository};

/// Recipe endpoints over a repository `R`.
pub struct Cookbook<R> {
    repo: R,
    credentials: Credentials,
}

impl<R: RecipeRepository> Cookbook<R> {
    pub fn new(repo: R, credentials: Credentials) -> Self {
        Self { repo, credentials }
    }

    /// Get a reference to the repository.
    pub fn repo(&self) -> &R {
        &self.repo
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Check an `Authorization` header value. Returns the username.
    pub fn authenticate(&self, header: Option<&str>) -> Result<String, CookbookError> {
        self.credentials.authenticate(header).map_err(|e| {
            warn!(reason = %e, "rejected credentials");
            CookbookError::Unauthorized(e)
        })
    }

    /// `GET /recipes/italian`
    pub fn italian_recipes(&self) -> Result<RecipeCollection, CookbookError> {
        self.non_empty_listing(RecipeFilter::cuisine("Italian"))
    }

    /// `GET /recipes/vegan`
    pub fn vegan_recipes(&self) -> Result<RecipeCollection, CookbookError> {
        self.non_empty_listing(RecipeFilter::IsVegan(true))
    }

    /// `GET /recipes`. An empty store is still a success.
    pub fn all_recipes(&self) -> Result<RecipeCollection, CookbookError> {
        let recipes = self.repo.all()?;
        Ok(recipes.iter().collect())
    }

    /// `GET /recipes/{id}`
    pub fn recipe(&self, id: u64) -> Result<SingleRecipe, CookbookError> {
        let recipe = self
            .repo
            .find_by_id(id)?
            .ok_or_else(|| not_found(id))?;
        Ok(SingleRecipe::from(&recipe))
    }

    /// `POST /recipes`
    pub fn create_recipe(&self, fields: RecipeFields) -> Result<SingleRecipe, CookbookError> {
        let new = fields.validate()?;
        let recipe = self.repo.insert(new)?;
        info!(id = recipe.id, dish = %recipe.dish_name, "recipe created");
        Ok(SingleRecipe::from(&recipe))
    }

    /// `PUT /recipes/{id}`
    pub fn update_recipe(
        &self,
        id: u64,
        fields: RecipeFields,
    ) -> Result<SingleRecipe, CookbookError> {
        let recipe = self
            .repo
            .merge_fields(id, &fields)?
            .ok_or_else(|| not_found(id))?;
        if !fields.is_noop() {
            info!(id, "recipe updated");
        }
        Ok(SingleRecipe::from(&recipe))
    }

    /// `DELETE /recipes/{id}`
    pub fn delete_recipe(&self, id: u64) -> Result<DeleteOutcome, CookbookError> {
        self.repo.delete_by_id(id)?;
        info!(id, "recipe deleted");
        Ok(DeleteOutcome::deleted())
    }

    fn non_empty_listing(&self, filter: RecipeFilter) -> Result<RecipeCollection, CookbookError> {
        let recipes = self.repo.filter_by(&filter)?;
        if recipes.is_empty() {
            return Err(CookbookError::NotFound(format!("no recipes with {filter}")));
        }
        Ok(recipes.iter().collect())
    }
}

fn not_found(id: u64) -> CookbookError {
    CookbookError::NotFound(format!("recipe {id}"))
}
