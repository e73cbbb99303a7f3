//! SQLite recipe store implementation.

use std::path::Path;

use async_trait::async_trait;
use rusqlite::{params, OptionalExtension, Row};
use tokio_rusqlite::Connection;
use tracing::{debug, info};

use yummerz_protocols::{Recipe, RecipeId, RecipeStore, StoreError};

use crate::schema::{init_schema, register_functions};

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;

const SELECT_COLUMNS: &str =
    "SELECT id, name, image, ingredients, instructions, notes, rating, owner FROM recipes";

/// SQLite-based recipe store.
pub struct SqliteRecipeStore {
    conn: Connection,
}

impl SqliteRecipeStore {
    /// Create a new in-memory database.
    pub async fn in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| StoreError::ConnectionError(e.to_string()))?;

        Self::init(conn).await
    }

    /// Open (or create) a file-backed database.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| StoreError::ConnectionError(e.to_string()))?;
        }

        let conn = Connection::open(&path)
            .await
            .map_err(|e| StoreError::ConnectionError(e.to_string()))?;

        let store = Self::init(conn).await?;
        info!("Opened recipe database at {:?}", path);
        Ok(store)
    }

    async fn init(conn: Connection) -> Result<Self, StoreError> {
        conn.call(|conn| {
            register_functions(conn)?;
            init_schema(conn)?;
            Ok(())
        })
        .await
        .map_err(|e| StoreError::QueryError(e.to_string()))?;

        Ok(Self { conn })
    }
}

fn row_to_recipe(row: &Row<'_>) -> rusqlite::Result<Recipe> {
    Ok(Recipe {
        id: Some(row.get(0)?),
        name: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
        image: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
        ingredients: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
        instructions: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
        notes: row.get::<_, Option<String>>(5)?.unwrap_or_default(),
        rating: row.get(6)?,
        owner: row.get(7)?,
    })
}

#[async_trait]
impl RecipeStore for SqliteRecipeStore {
    fn id(&self) -> &str {
        "sqlite"
    }

    async fn find_by_id(&self, id: RecipeId) -> Result<Option<Recipe>, StoreError> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(&format!("{SELECT_COLUMNS} WHERE id = ?1"))?;
                let recipe = stmt.query_row([id], row_to_recipe).optional()?;
                Ok(recipe)
            })
            .await
            .map_err(|e| StoreError::QueryError(e.to_string()))
    }

    async fn exists_by_id(&self, id: RecipeId) -> Result<bool, StoreError> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare("SELECT 1 FROM recipes WHERE id = ?1")?;
                Ok(stmt.exists([id])?)
            })
            .await
            .map_err(|e| StoreError::QueryError(e.to_string()))
    }

    async fn save(&self, mut recipe: Recipe) -> Result<Recipe, StoreError> {
        let row = recipe.clone();
        let id = self
            .conn
            .call(move |conn| {
                conn.execute(
                    "INSERT INTO recipes (id, name, image, ingredients, instructions, notes, rating, owner)
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
                     ON CONFLICT(id) DO UPDATE SET
                        name = excluded.name,
                        image = excluded.image,
                        ingredients = excluded.ingredients,
                        instructions = excluded.instructions,
                        notes = excluded.notes,
                        rating = excluded.rating,
                        owner = excluded.owner",
                    params![
                        row.id,
                        row.name,
                        row.image,
                        row.ingredients,
                        row.instructions,
                        row.notes,
                        row.rating,
                        row.owner
                    ],
                )?;
                Ok(row.id.unwrap_or_else(|| conn.last_insert_rowid()))
            })
            .await
            .map_err(|e| StoreError::QueryError(e.to_string()))?;

        debug!(id, "Saved recipe");
        recipe.id = Some(id);
        Ok(recipe)
    }

    async fn delete_by_id(&self, id: RecipeId) -> Result<(), StoreError> {
        self.conn
            .call(move |conn| {
                conn.execute("DELETE FROM recipes WHERE id = ?1", [id])?;
                Ok(())
            })
            .await
            .map_err(|e| StoreError::QueryError(e.to_string()))
    }

    async fn find_all_by_owner(&self, owner: &str) -> Result<Vec<Recipe>, StoreError> {
        let owner = owner.to_string();
        self.conn
            .call(move |conn| {
                let mut stmt =
                    conn.prepare(&format!("{SELECT_COLUMNS} WHERE owner = ?1 ORDER BY id"))?;
                let recipes = stmt
                    .query_map([&owner], row_to_recipe)?
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(recipes)
            })
            .await
            .map_err(|e| StoreError::QueryError(e.to_string()))
    }

    async fn search_my_recipes(&self, term: &str, owner: &str) -> Result<Vec<Recipe>, StoreError> {
        let needle = term.to_lowercase();
        let owner = owner.to_string();
        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(&format!(
                    "{SELECT_COLUMNS} WHERE owner = ?1 AND (
                        instr(fold_case(name), ?2) > 0
                        OR instr(fold_case(ingredients), ?2) > 0
                        OR instr(fold_case(instructions), ?2) > 0
                     ) ORDER BY id"
                ))?;
                let recipes = stmt
                    .query_map(params![owner, needle], row_to_recipe)?
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(recipes)
            })
            .await
            .map_err(|e| StoreError::QueryError(e.to_string()))
    }
}
