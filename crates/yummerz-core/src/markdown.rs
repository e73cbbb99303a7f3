//! Markdown recipe importer.
//!
//! Parses a small markdown dialect into recipe fields:
//!
//! ```markdown
//! # Super Torta
//!
//! ## Ingredients
//! - Moka
//! - Sladkor
//!
//! ## Instructions
//! Zmešaj in peci.
//! ```
//!
//! The first level-1 heading is the name. Bullet items under
//! `## Ingredients` become one ingredient per line; non-empty lines under
//! `## Instructions` become the instructions. Everything else is ignored.

use thiserror::Error;
use tracing::debug;

use yummerz_protocols::RecipeInput;

/// Errors raised while importing a markdown recipe.
#[derive(Debug, Error)]
pub enum ImportError {
    /// No level-1 heading with text was found.
    #[error("Markdown recipe has no title (expected a '# Title' heading)")]
    MissingTitle,

    #[error("Markdown recipe is not valid UTF-8: {0}")]
    InvalidEncoding(#[from] std::str::Utf8Error),
}

/// Recipe fields recovered from a markdown document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedRecipe {
    pub name: String,
    pub ingredients: String,
    pub instructions: String,
}

impl ParsedRecipe {
    /// Convert into service input. Image, notes and rating stay empty.
    pub fn into_input(self) -> RecipeInput {
        RecipeInput {
            name: self.name,
            ingredients: self.ingredients,
            instructions: self.instructions,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    SeekingTitle,
    Outside,
    Ingredients,
    Instructions,
}

/// Line-scanning markdown parser.
pub struct MarkdownImporter;

impl MarkdownImporter {
    /// Parse raw file content.
    pub fn parse_bytes(content: &[u8]) -> Result<ParsedRecipe, ImportError> {
        let text = std::str::from_utf8(content)?;
        Self::parse(text)
    }

    /// Parse markdown text.
    pub fn parse(content: &str) -> Result<ParsedRecipe, ImportError> {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);

        let mut title: Option<String> = None;
        let mut section = Section::SeekingTitle;
        let mut ingredients: Vec<&str> = Vec::new();
        let mut instructions: Vec<&str> = Vec::new();

        for raw in content.lines() {
            let line = raw.trim();

            if let Some((level, text)) = heading(line) {
                if level == 1 {
                    if title.is_none() && !text.is_empty() {
                        title = Some(text.to_string());
                    }
                    if section == Section::SeekingTitle {
                        section = Section::Outside;
                    }
                } else {
                    section = section_for(text);
                }
                continue;
            }

            match section {
                Section::Ingredients => {
                    if let Some(item) = list_item(line) {
                        if !item.is_empty() {
                            ingredients.push(item);
                        }
                    }
                }
                Section::Instructions => {
                    if !line.is_empty() {
                        instructions.push(line);
                    }
                }
                Section::SeekingTitle | Section::Outside => {}
            }
        }

        let name = title.ok_or(ImportError::MissingTitle)?;
        debug!(
            name = %name,
            ingredients = ingredients.len(),
            instruction_lines = instructions.len(),
            "Parsed markdown recipe"
        );

        Ok(ParsedRecipe {
            name,
            ingredients: ingredients.join("\n"),
            instructions: instructions.join("\n"),
        })
    }
}

/// Split an ATX heading into its level and trimmed text.
fn heading(line: &str) -> Option<(usize, &str)> {
    let level = line.bytes().take_while(|b| *b == b'#').count();
    if level == 0 || level > 6 {
        return None;
    }
    let rest = &line[level..];
    if !rest.is_empty() && !rest.starts_with(char::is_whitespace) {
        return None;
    }
    Some((level, strip_closing_hashes(rest.trim())))
}

/// Drop an optional closing `#` run, which must follow whitespace.
fn strip_closing_hashes(text: &str) -> &str {
    let stripped = text.trim_end_matches('#');
    if stripped.len() == text.len() {
        text
    } else if stripped.is_empty() {
        stripped
    } else if stripped.ends_with(char::is_whitespace) {
        stripped.trim_end()
    } else {
        text
    }
}

fn section_for(heading_text: &str) -> Section {
    if heading_text.eq_ignore_ascii_case("ingredients") {
        Section::Ingredients
    } else if heading_text.eq_ignore_ascii_case("instructions") {
        Section::Instructions
    } else {
        Section::Outside
    }
}

/// Strip a `-`, `*` or `+` bullet marker.
fn list_item(line: &str) -> Option<&str> {
    let rest = line
        .strip_prefix('-')
        .or_else(|| line.strip_prefix('*'))
        .or_else(|| line.strip_prefix('+'))?;
    if !rest.is_empty() && !rest.starts_with(char::is_whitespace) {
        return None;
    }
    Some(rest.trim())
}

#[cfg(test)]
#[path = "markdown_tests.rs"]
mod tests;
