//! Story list wire models.
//!
//! The mobile client sends `images` as a list of image references. The older web client
//! sends a single `img` instead; it is accepted and treated as a one-image list.

use crate::format::Format;
use crate::{WireError, WireResult};
use feastly_core::Story;
use feastly_types::NonEmptyText;
use serde::Deserialize;
use std::path::Path;

/// Story list operations.
pub struct StoryFeed;

impl StoryFeed {
    pub fn parse_json(text: &str) -> WireResult<Vec<Story>> {
        Self::parse(text, Format::Json)
    }

    pub fn parse_yaml(text: &str) -> WireResult<Vec<Story>> {
        Self::parse(text, Format::Yaml)
    }

    /// Parse a story list. Order is preserved since it defines each story's global index.
    pub fn parse(text: &str, format: Format) -> WireResult<Vec<Story>> {
        let wire: Vec<StoryWire> = format.deserialize(text, "story list")?;
        wire.into_iter()
            .enumerate()
            .map(|(index, entry)| wire_to_domain(index, entry))
            .collect()
    }

    pub fn load(path: &Path) -> WireResult<Vec<Story>> {
        let format = Format::from_path(path)?;
        let text = std::fs::read_to_string(path)?;
        let stories = Self::parse(&text, format)?;
        tracing::debug!(path = %path.display(), count = stories.len(), "loaded story list");
        Ok(stories)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct StoryWire {
    username: String,
    #[serde(default)]
    profile_pic: Option<String>,
    #[serde(default)]
    images: Option<Vec<String>>,
    #[serde(default)]
    img: Option<String>,
    #[serde(default)]
    dish_title: String,
    #[serde(default)]
    cook_name: String,
    #[serde(default)]
    post_date: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    time_taken: String,
    #[serde(default)]
    difficulty: String,
    #[serde(default)]
    calories: String,
    #[serde(default)]
    ingredients: String,
}

fn wire_to_domain(index: usize, wire: StoryWire) -> WireResult<Story> {
    let username = NonEmptyText::new(&wire.username).map_err(|_| {
        WireError::Translation(format!("story at index {index} has an empty username"))
    })?;

    let images = match (wire.images, wire.img) {
        (Some(images), _) if !images.is_empty() => images,
        (_, Some(img)) if !img.trim().is_empty() => vec![img],
        _ => Vec::new(),
    };

    Ok(Story {
        username,
        profile_picture: wire.profile_pic,
        images,
        dish_title: wire.dish_title,
        cook_name: wire.cook_name,
        post_date: wire.post_date,
        description: wire.description,
        time_taken: wire.time_taken,
        difficulty: wire.difficulty,
        calories: wire.calories,
        ingredient_count: wire.ingredients,
    })
}
