//! Memory recipe store implementation.

use std::collections::BTreeMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::debug;

use yummerz_protocols::{Recipe, RecipeId, RecipeStore, StoreError};

#[derive(Default)]
struct Inner {
    recipes: BTreeMap<RecipeId, Recipe>,
    /// Highest ID ever handed out; IDs are never reused.
    last_id: RecipeId,
}

/// Recipe store backed by an ordered in-process map.
pub struct MemoryRecipeStore {
    id: String,
    inner: RwLock<Inner>,
}

impl MemoryRecipeStore {
    pub fn new() -> Self {
        Self::with_id("memory")
    }

    /// Create with a custom store ID.
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            inner: RwLock::new(Inner::default()),
        }
    }

    /// Number of stored recipes.
    pub fn len(&self) -> usize {
        self.inner.read().recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().recipes.is_empty()
    }

    fn matches(recipe: &Recipe, needle: &str) -> bool {
        [&recipe.name, &recipe.ingredients, &recipe.instructions]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

impl Default for MemoryRecipeStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecipeStore for MemoryRecipeStore {
    fn id(&self) -> &str {
        &self.id
    }

    async fn find_by_id(&self, id: RecipeId) -> Result<Option<Recipe>, StoreError> {
        Ok(self.inner.read().recipes.get(&id).cloned())
    }

    async fn exists_by_id(&self, id: RecipeId) -> Result<bool, StoreError> {
        Ok(self.inner.read().recipes.contains_key(&id))
    }

    async fn save(&self, mut recipe: Recipe) -> Result<Recipe, StoreError> {
        let mut inner = self.inner.write();
        let id = match recipe.id {
            Some(id) => id,
            None => inner
                .last_id
                .checked_add(1)
                .ok_or_else(|| StoreError::QueryError("recipe id space exhausted".into()))?,
        };
        inner.last_id = inner.last_id.max(id);
        recipe.id = Some(id);
        inner.recipes.insert(id, recipe.clone());
        debug!(id, "Saved recipe");
        Ok(recipe)
    }

    async fn delete_by_id(&self, id: RecipeId) -> Result<(), StoreError> {
        self.inner.write().recipes.remove(&id);
        Ok(())
    }

    async fn find_all_by_owner(&self, owner: &str) -> Result<Vec<Recipe>, StoreError> {
        Ok(self
            .inner
            .read()
            .recipes
            .values()
            .filter(|r| r.owner == owner)
            .cloned()
            .collect())
    }

    async fn search_my_recipes(&self, term: &str, owner: &str) -> Result<Vec<Recipe>, StoreError> {
        let needle = term.to_lowercase();
        Ok(self
            .inner
            .read()
            .recipes
            .values()
            .filter(|r| r.owner == owner && Self::matches(r, &needle))
            .cloned()
            .collect())
    }
}
