//! Recipe data model.
//!
//! A [`Recipe`] is the only persisted entity. Callers never construct the
//! owner themselves: they hand a [`RecipeInput`] to the service, which stamps
//! the owner from the caller's identity.

use serde::{Deserialize, Serialize};

/// Store-assigned recipe identifier.
pub type RecipeId = i64;

/// A persisted recipe record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Assigned by the store on first save, immutable afterwards.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecipeId>,

    #[serde(default)]
    pub name: String,

    /// Encoded image reference or inline content (e.g. a data URL).
    #[serde(default)]
    pub image: String,

    #[serde(default)]
    pub ingredients: String,

    #[serde(default)]
    pub instructions: String,

    #[serde(default)]
    pub notes: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<i32>,

    /// Identity of the creator.
    #[serde(default)]
    pub owner: String,
}

impl Recipe {
    /// Build an unsaved recipe owned by `owner` from caller input.
    pub fn from_input(input: RecipeInput, owner: impl Into<String>) -> Self {
        Self {
            id: None,
            name: input.name,
            image: input.image,
            ingredients: input.ingredients,
            instructions: input.instructions,
            notes: input.notes,
            rating: input.rating,
            owner: owner.into(),
        }
    }

    /// Overwrite every mutable field with `input`. `id` and `owner` are kept.
    pub fn apply(&mut self, input: RecipeInput) {
        self.name = input.name;
        self.image = input.image;
        self.ingredients = input.ingredients;
        self.instructions = input.instructions;
        self.notes = input.notes;
        self.rating = input.rating;
    }
}

/// Caller-supplied recipe fields.
///
/// Carries no `owner` or `id`. Unknown keys in a JSON payload, those two
/// included, are ignored on deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeInput {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub image: String,

    #[serde(default)]
    pub ingredients: String,

    #[serde(default)]
    pub instructions: String,

    #[serde(default)]
    pub notes: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<i32>,
}

impl RecipeInput {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_ingredients(mut self, ingredients: impl Into<String>) -> Self {
        self.ingredients = ingredients.into();
        self
    }

    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = instructions.into();
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn with_rating(mut self, rating: i32) -> Self {
        self.rating = Some(rating);
        self
    }
}

#[cfg(test)]
#[path = "recipe_tests.rs"]
mod tests;
