//! Recipe service.

use std::sync::Arc;

use tracing::{debug, info, warn};

use yummerz_protocols::{Identity, IdentityProvider, Recipe, RecipeId, RecipeInput, RecipeStore};

use crate::error::ServiceError;
use crate::markdown::MarkdownImporter;

/// Owner-scoped CRUD, search and markdown import over a [`RecipeStore`].
///
/// Operations that act on behalf of a caller take the caller explicitly.
/// The identity is resolved once, before any store call, so an
/// unauthenticated caller never reaches a mutating store method.
#[derive(Clone)]
pub struct RecipeService {
    store: Arc<dyn RecipeStore>,
}

impl RecipeService {
    pub fn new(store: Arc<dyn RecipeStore>) -> Self {
        Self { store }
    }

    /// Recipes owned by the caller, optionally narrowed by a search term.
    ///
    /// A blank term is the same as no term.
    pub async fn list(
        &self,
        caller: &dyn IdentityProvider,
        search_term: Option<&str>,
    ) -> Result<Vec<Recipe>, ServiceError> {
        let owner = resolve(caller)?;

        let recipes = match search_term.map(str::trim).filter(|t| !t.is_empty()) {
            Some(term) => {
                debug!(owner = %owner, term, store = self.store.id(), "Searching recipes");
                self.store.search_my_recipes(term, owner.as_str()).await?
            }
            None => {
                debug!(owner = %owner, store = self.store.id(), "Listing recipes");
                self.store.find_all_by_owner(owner.as_str()).await?
            }
        };

        Ok(recipes)
    }

    /// Look up a recipe by ID. Any caller may read any recipe.
    pub async fn get_by_id(&self, id: RecipeId) -> Result<Option<Recipe>, ServiceError> {
        debug!(id, "Fetching recipe");
        Ok(self.store.find_by_id(id).await?)
    }

    /// Create a recipe owned by the caller.
    pub async fn create(
        &self,
        caller: &dyn IdentityProvider,
        input: RecipeInput,
    ) -> Result<Recipe, ServiceError> {
        let owner = resolve(caller)?;
        let saved = self
            .store
            .save(Recipe::from_input(input, owner.into_inner()))
            .await?;
        info!(id = ?saved.id, owner = %saved.owner, "Created recipe");
        Ok(saved)
    }

    /// Replace the mutable fields of an existing recipe.
    ///
    /// Returns `None` without touching the store when `id` does not exist.
    /// `id` and `owner` always come from the stored record.
    pub async fn update(
        &self,
        caller: &dyn IdentityProvider,
        id: RecipeId,
        input: RecipeInput,
    ) -> Result<Option<Recipe>, ServiceError> {
        let editor = resolve(caller)?;

        let Some(mut existing) = self.store.find_by_id(id).await? else {
            debug!(id, "Update skipped, recipe not found");
            return Ok(None);
        };

        existing.apply(input);
        let saved = self.store.save(existing).await?;
        info!(id, editor = %editor, "Updated recipe");
        Ok(Some(saved))
    }

    /// Delete a recipe. Returns whether it existed.
    pub async fn delete(
        &self,
        caller: &dyn IdentityProvider,
        id: RecipeId,
    ) -> Result<bool, ServiceError> {
        let editor = resolve(caller)?;

        if !self.store.exists_by_id(id).await? {
            debug!(id, "Delete skipped, recipe not found");
            return Ok(false);
        }

        self.store.delete_by_id(id).await?;
        info!(id, editor = %editor, "Deleted recipe");
        Ok(true)
    }

    /// Parse a markdown file and store the result as the caller's recipe.
    ///
    /// Nothing is stored when parsing fails.
    pub async fn import_from_markdown(
        &self,
        caller: &dyn IdentityProvider,
        content: &[u8],
    ) -> Result<Recipe, ServiceError> {
        let owner = resolve(caller)?;
        let parsed = MarkdownImporter::parse_bytes(content).inspect_err(|e| {
            warn!(owner = %owner, error = %e, "Markdown import rejected");
        })?;

        let saved = self
            .store
            .save(Recipe::from_input(parsed.into_input(), owner.into_inner()))
            .await?;
        info!(id = ?saved.id, owner = %saved.owner, name = %saved.name, "Imported recipe from markdown");
        Ok(saved)
    }
}

fn resolve(caller: &dyn IdentityProvider) -> Result<Identity, ServiceError> {
    caller.current_identity().map_err(|e| {
        warn!("Rejected call without an identity");
        ServiceError::from(e)
    })
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod tests;
