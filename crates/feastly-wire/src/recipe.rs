//! Recipe feed wire models and translation helpers.
//!
//! The feed is a list of recipe posts in the API's camelCase shape. `ingredients` and
//! `instructions` are loosely typed upstream: an array, a single string, or anything
//! else. Array entries that are numbers or booleans are kept as their text, other
//! entries become empty strings. Anything that is neither an array nor a string
//! (including `null` or a missing key) becomes [`TextList::Absent`].

use crate::format::Format;
use crate::{WireError, WireResult};
use chrono::{DateTime, SecondsFormat, Utc};
use feastly_core::{Recipe, TextList};
use feastly_types::NonEmptyText;
use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

// ============================================================================
// Public Feed operations
// ============================================================================

/// Recipe feed operations.
///
/// This is a zero-sized type used for namespacing feed-related operations.
pub struct Feed;

impl Feed {
    /// Parse a recipe feed from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`WireError`] if:
    /// - the text is not a JSON array of recipe objects,
    /// - any field has an unexpected type or an unknown key is present,
    /// - a `postId` is blank or repeated,
    /// - a `datePosted` value is not an RFC 3339 timestamp.
    pub fn parse_json(text: &str) -> WireResult<Vec<Recipe>> {
        Self::parse(text, Format::Json)
    }

    /// Parse a recipe feed from YAML text. Same rules as [`Feed::parse_json`].
    pub fn parse_yaml(text: &str) -> WireResult<Vec<Recipe>> {
        Self::parse(text, Format::Yaml)
    }

    pub fn parse(text: &str, format: Format) -> WireResult<Vec<Recipe>> {
        let wire: Vec<RecipeWire> = format.deserialize(text, "recipe feed")?;

        let mut seen = HashSet::new();
        let mut recipes = Vec::with_capacity(wire.len());
        for entry in wire {
            let recipe = wire_to_domain(entry)?;
            if !seen.insert(recipe.id.clone()) {
                return Err(WireError::InvalidInput(format!(
                    "duplicate postId in feed: {}",
                    recipe.id
                )));
            }
            recipes.push(recipe);
        }
        Ok(recipes)
    }

    /// Load a recipe feed from a `.json`, `.yaml` or `.yml` file.
    pub fn load(path: &Path) -> WireResult<Vec<Recipe>> {
        let format = Format::from_path(path)?;
        let text = std::fs::read_to_string(path)?;
        let recipes = Self::parse(&text, format)?;
        tracing::debug!(path = %path.display(), count = recipes.len(), "loaded recipe feed");
        Ok(recipes)
    }

    /// Render recipes as pretty-printed JSON in the API's shape.
    pub fn render_json(recipes: &[Recipe]) -> WireResult<String> {
        let wire: Vec<RecipeWire> = recipes.iter().map(domain_to_wire).collect();
        Ok(serde_json::to_string_pretty(&wire)?)
    }
}

// ============================================================================
// Wire types (internal)
// ============================================================================

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RecipeWire {
    post_id: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    ingredients: Option<TextListWire>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    instructions: Option<TextListWire>,
    #[serde(default)]
    author: String,
    #[serde(default)]
    author_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    date_posted: Option<String>,
    #[serde(default)]
    cooking_time: String,
    #[serde(default)]
    difficulty: String,
    #[serde(default)]
    servings: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    image_url: Option<String>,
    #[serde(default)]
    likes: u64,
    #[serde(default)]
    is_liked: bool,
}

/// Loosely typed list field.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(untagged)]
enum TextListWire {
    Many(Vec<TextItemWire>),
    One(String),
    #[serde(skip_serializing)]
    Unsupported(IgnoredAny),
}

/// One entry of a loosely typed list.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(untagged)]
enum TextItemWire {
    Text(String),
    Number(serde_json::Number),
    Flag(bool),
    #[serde(skip_serializing)]
    Unsupported(IgnoredAny),
}

impl TextItemWire {
    fn into_text(self) -> String {
        match self {
            TextItemWire::Text(text) => text,
            TextItemWire::Number(n) => n.to_string(),
            TextItemWire::Flag(b) => b.to_string(),
            TextItemWire::Unsupported(_) => String::new(),
        }
    }
}

// ============================================================================
// Helper functions (internal)
// ============================================================================

fn text_list_from_wire(wire: Option<TextListWire>) -> TextList {
    match wire {
        Some(TextListWire::Many(items)) => {
            TextList::Sequence(items.into_iter().map(TextItemWire::into_text).collect())
        }
        Some(TextListWire::One(text)) => TextList::Single(text),
        Some(TextListWire::Unsupported(_)) | None => TextList::Absent,
    }
}

fn text_list_to_wire(list: &TextList) -> Option<TextListWire> {
    match list {
        TextList::Sequence(items) => Some(TextListWire::Many(
            items.iter().cloned().map(TextItemWire::Text).collect(),
        )),
        TextList::Single(text) => Some(TextListWire::One(text.clone())),
        TextList::Absent => None,
    }
}

fn wire_to_domain(wire: RecipeWire) -> WireResult<Recipe> {
    let id = NonEmptyText::new(&wire.post_id)
        .map_err(|_| WireError::Translation("recipe postId cannot be empty".into()))?;

    let date_posted = match wire.date_posted.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) => Some(
            DateTime::parse_from_rfc3339(raw)
                .map_err(|e| {
                    WireError::Translation(format!("invalid datePosted for {id}: {raw}: {e}"))
                })?
                .with_timezone(&Utc),
        ),
    };

    Ok(Recipe {
        id,
        title: wire.title,
        description: wire.description,
        ingredients: text_list_from_wire(wire.ingredients),
        instructions: text_list_from_wire(wire.instructions),
        author: wire.author,
        author_id: wire.author_id,
        date_posted,
        cooking_time: wire.cooking_time,
        difficulty: wire.difficulty,
        servings: wire.servings,
        image_url: wire.image_url,
        likes: wire.likes,
        is_liked: wire.is_liked,
    })
}

fn domain_to_wire(recipe: &Recipe) -> RecipeWire {
    RecipeWire {
        post_id: recipe.id.to_string(),
        title: recipe.title.clone(),
        description: recipe.description.clone(),
        ingredients: text_list_to_wire(&recipe.ingredients),
        instructions: text_list_to_wire(&recipe.instructions),
        author: recipe.author.clone(),
        author_id: recipe.author_id.clone(),
        date_posted: recipe
            .date_posted
            .map(|d| d.to_rfc3339_opts(SecondsFormat::Secs, true)),
        cooking_time: recipe.cooking_time.clone(),
        difficulty: recipe.difficulty.clone(),
        servings: recipe.servings,
        image_url: recipe.image_url.clone(),
        likes: recipe.likes,
        is_liked: recipe.is_liked,
    }
}
