//! Keyword-based recipe categorisation.
//!
//! A recipe's category is derived on demand from its lowercased search text and is never
//! stored. Rules are tested in order and the first match wins. The order is a product
//! policy, not a property of the data: a "spicy beef chili" is `Beef` only because the
//! beef rule comes first.

use crate::recipe::Recipe;
use crate::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};

/// Coarse recipe category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Beef,
    Seafood,
    Vegetable,
    Spicy,
    Other,
}

/// Ordered classification rules. Earlier rules take precedence.
const RULES: [(Category, &[&str]); 4] = [
    (Category::Beef, &["beef", "steak"]),
    (Category::Seafood, &["lobster", "seafood"]),
    (Category::Vegetable, &["vegetable", "salad"]),
    (Category::Spicy, &["chili", "spicy"]),
];

impl Category {
    /// All categories in rule order, `Other` last.
    pub const ALL: [Category; 5] = [
        Category::Beef,
        Category::Seafood,
        Category::Vegetable,
        Category::Spicy,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Beef => "beef",
            Category::Seafood => "seafood",
            Category::Vegetable => "vegetable",
            Category::Spicy => "spicy",
            Category::Other => "other",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        let wanted = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| CoreError::InvalidArgument(format!("unknown category: {s:?}")))
    }
}

/// Classify free text. Case is ignored.
///
/// Matching is plain substring containment, so "steaks" matches "steak".
pub fn classify_text(text: &str) -> Category {
    classify_lowercased(&text.to_lowercase())
}

/// Derive the category of a recipe from its title, description, ingredients and
/// instructions.
pub fn classify(recipe: &Recipe) -> Category {
    classify_lowercased(&recipe.search_text())
}

pub(crate) fn classify_lowercased(lowercased: &str) -> Category {
    RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| lowercased.contains(k)))
        .map(|(category, _)| *category)
        .unwrap_or(Category::Other)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::TextList;
    use crate::NonEmptyText;

    fn recipe(title: &str, description: &str) -> Recipe {
        Recipe::new(NonEmptyText::new("r").expect("id"), title, description)
    }

    #[test]
    fn grilled_beef_steak_is_beef() {
        assert_eq!(classify(&recipe("Grilled Beef Steak", "")), Category::Beef);
    }

    #[test]
    fn lobster_bisque_is_seafood() {
        assert_eq!(
            classify(&recipe("Lobster Bisque", "seafood delight")),
            Category::Seafood
        );
    }

    #[test]
    fn beef_rule_wins_over_seafood() {
        assert_eq!(
            classify(&recipe("Surf and turf", "steak with lobster tail")),
            Category::Beef
        );
    }

    #[test]
    fn vegetable_rule_wins_over_spicy() {
        assert_eq!(classify(&recipe("Spicy salad", "")), Category::Vegetable);
    }

    #[test]
    fn keywords_match_inside_words_and_ignore_case() {
        assert_eq!(classify(&recipe("STEAKS for two", "")), Category::Beef);
        assert_eq!(classify(&recipe("Chilies", "")), Category::Spicy);
    }

    #[test]
    fn keywords_in_ingredients_and_instructions_count() {
        let r = recipe("Weeknight bowl", "")
            .with_ingredients(TextList::from_items(["rice", "green chili"]));
        assert_eq!(classify(&r), Category::Spicy);

        let r = recipe("Weeknight bowl", "").with_instructions("Toss the salad.");
        assert_eq!(classify(&r), Category::Vegetable);
    }

    #[test]
    fn classify_text_ignores_case() {
        assert_eq!(classify_text("Grilled BEEF"), Category::Beef);
        assert_eq!(classify_text("LOBSTER roll"), Category::Seafood);
        assert_eq!(classify_text("Plain rice"), Category::Other);
    }

    #[test]
    fn empty_recipe_is_other() {
        assert_eq!(classify(&recipe("", "")), Category::Other);
    }

    #[test]
    fn parses_category_names() {
        assert_eq!("Seafood".parse::<Category>(), Ok(Category::Seafood));
        assert_eq!(" spicy ".parse::<Category>(), Ok(Category::Spicy));
        assert!(matches!(
            "vegan".parse::<Category>(),
            Err(CoreError::InvalidArgument(_))
        ));
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for category in Category::ALL {
            assert_eq!(category.to_string().parse::<Category>(), Ok(category));
        }
    }
}
