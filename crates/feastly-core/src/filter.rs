//! Combined category + free-text filtering of the recipe feed.

use crate::category::{classify_lowercased, Category};
use crate::recipe::Recipe;

/// Transient filter state owned by the host.
///
/// The state is never mutated in place; every change returns a new value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Active category, or `None` to show every category.
    pub category: Option<Category>,
    /// Search text. Matched as a lowercased literal substring, never trimmed.
    pub search: String,
}

impl FilterState {
    pub fn new(category: Option<Category>, search: impl Into<String>) -> Self {
        Self {
            category,
            search: search.into(),
        }
    }

    /// Replace the search text.
    pub fn with_search(&self, search: impl Into<String>) -> Self {
        Self {
            category: self.category,
            search: search.into(),
        }
    }

    /// Select `category`, or clear the selection if it is already the active one.
    pub fn toggle_category(&self, category: Category) -> Self {
        let category = if self.category == Some(category) {
            None
        } else {
            Some(category)
        };
        Self {
            category,
            search: self.search.clone(),
        }
    }

    /// Whether `recipe` passes both the category and the search condition.
    pub fn matches(&self, recipe: &Recipe) -> bool {
        if self.category.is_none() && self.search.is_empty() {
            return true;
        }

        let text = recipe.search_text();
        let category_ok = self
            .category
            .is_none_or(|wanted| classify_lowercased(&text) == wanted);
        let search_ok = self.search.is_empty() || text.contains(&self.search.to_lowercase());
        category_ok && search_ok
    }
}

/// Return the recipes matching `state`, preserving input order.
pub fn filter_recipes<'a>(recipes: &'a [Recipe], state: &FilterState) -> Vec<&'a Recipe> {
    let matched: Vec<&Recipe> = recipes.iter().filter(|r| state.matches(r)).collect();
    tracing::debug!(
        total = recipes.len(),
        matched = matched.len(),
        category = ?state.category,
        "filtered recipe feed"
    );
    matched
}
