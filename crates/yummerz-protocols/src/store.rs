//! Recipe store protocol definitions.
//!
//! Stores persist [`Recipe`] records keyed by [`RecipeId`]. Every query is a
//! named method; implementations write out their own filtering.

use async_trait::async_trait;

use crate::error::StoreError;
use crate::recipe::{Recipe, RecipeId};

/// Core trait for recipe stores.
#[async_trait]
pub trait RecipeStore: Send + Sync {
    /// Returns the store ID.
    fn id(&self) -> &str;

    /// Look up a recipe by ID.
    async fn find_by_id(&self, id: RecipeId) -> Result<Option<Recipe>, StoreError>;

    /// Check whether a recipe with this ID exists.
    async fn exists_by_id(&self, id: RecipeId) -> Result<bool, StoreError>;

    /// Insert a recipe when its ID is unset, otherwise upsert by ID.
    ///
    /// Returns the stored record with its ID assigned.
    async fn save(&self, recipe: Recipe) -> Result<Recipe, StoreError>;

    /// Delete a recipe by ID. Deleting a missing ID is not an error.
    async fn delete_by_id(&self, id: RecipeId) -> Result<(), StoreError>;

    /// All recipes owned by `owner`, in ID order.
    async fn find_all_by_owner(&self, owner: &str) -> Result<Vec<Recipe>, StoreError>;

    /// Recipes owned by `owner` whose name, ingredients or instructions
    /// contain `term`, ignoring case.
    async fn search_my_recipes(&self, term: &str, owner: &str) -> Result<Vec<Recipe>, StoreError>;
}
