//! Recipe domain model.
//!
//! Recipes are supplied by the external API and are immutable from the core's point of
//! view. Only the text fields take part in classification and search; everything else is
//! carried through for presentation.

use crate::social::LikeState;
use crate::NonEmptyText;
use chrono::{DateTime, Utc};
use std::borrow::Cow;

/// Ingredients or instructions as they arrive from the API.
///
/// The API sometimes sends an array of strings, sometimes a single string, and sometimes
/// nothing usable at all. [`TextList::joined`] is the one normalisation rule applied
/// everywhere search text is built.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum TextList {
    /// An ordered sequence of entries.
    Sequence(Vec<String>),
    /// A single free-form string.
    Single(String),
    /// Missing, null, or a value of an unsupported shape.
    #[default]
    Absent,
}

impl TextList {
    /// Build a sequence from any iterable of string-like items.
    pub fn from_items<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Sequence(items.into_iter().map(Into::into).collect())
    }

    /// Normalised text: entries joined by a single space, a single string as-is, or empty.
    pub fn joined(&self) -> Cow<'_, str> {
        match self {
            Self::Sequence(items) => Cow::Owned(items.join(" ")),
            Self::Single(text) => Cow::Borrowed(text.as_str()),
            Self::Absent => Cow::Borrowed(""),
        }
    }

    /// The ordered entries. A single string counts as one entry unless it is empty.
    pub fn items(&self) -> Vec<&str> {
        match self {
            Self::Sequence(items) => items.iter().map(String::as_str).collect(),
            Self::Single(text) if !text.is_empty() => vec![text.as_str()],
            Self::Single(_) | Self::Absent => Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }
}

impl From<Vec<String>> for TextList {
    fn from(items: Vec<String>) -> Self {
        Self::Sequence(items)
    }
}

impl From<String> for TextList {
    fn from(text: String) -> Self {
        Self::Single(text)
    }
}

impl From<&str> for TextList {
    fn from(text: &str) -> Self {
        Self::Single(text.to_owned())
    }
}

/// A recipe post as rendered in the feed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Recipe {
    /// Post identifier, unique within a feed.
    pub id: NonEmptyText,

    pub title: String,

    pub description: String,

    pub ingredients: TextList,

    pub instructions: TextList,

    /// Display name of the author.
    pub author: String,

    pub author_id: String,

    pub date_posted: Option<DateTime<Utc>>,

    /// Free-form cooking time such as "1 hr" or "30m".
    pub cooking_time: String,

    pub difficulty: String,

    pub servings: u32,

    pub image_url: Option<String>,

    pub likes: u64,

    /// Whether the current user has liked this post.
    pub is_liked: bool,
}

impl Recipe {
    /// Create a recipe with the given identity and headline text. All other fields start
    /// empty and can be filled in with the `with_*` helpers or by direct assignment.
    pub fn new(
        id: NonEmptyText,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            ingredients: TextList::Absent,
            instructions: TextList::Absent,
            author: String::new(),
            author_id: String::new(),
            date_posted: None,
            cooking_time: String::new(),
            difficulty: String::new(),
            servings: 0,
            image_url: None,
            likes: 0,
            is_liked: false,
        }
    }

    pub fn with_ingredients(mut self, ingredients: impl Into<TextList>) -> Self {
        self.ingredients = ingredients.into();
        self
    }

    pub fn with_instructions(mut self, instructions: impl Into<TextList>) -> Self {
        self.instructions = instructions.into();
        self
    }

    /// Lowercased search text: title, description, ingredients and instructions joined by
    /// single spaces, in that order.
    pub fn search_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.title,
            self.description,
            self.ingredients.joined(),
            self.instructions.joined()
        )
        .to_lowercase()
    }

    /// Current like state of this post.
    pub fn like_state(&self) -> LikeState {
        LikeState {
            liked: self.is_liked,
            count: self.likes,
        }
    }

    /// Return a copy of this recipe with the like optimistically toggled.
    pub fn with_like_toggled(&self) -> Self {
        let state = self.like_state().toggle();
        Self {
            is_liked: state.liked,
            likes: state.count,
            ..self.clone()
        }
    }
}
