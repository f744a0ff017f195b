use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Label of the wildcard category selector.
pub const ALL_CATEGORIES: &str = "All";

/// Category selector options in display order, wildcard first.
pub const BLOG_CATEGORIES: [&str; 5] = [
    ALL_CATEGORIES,
    "Technology",
    "Startup",
    "Lifestyle",
    "Finance",
];

/// Fixed tag classifying a blog post.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Technology,
    #[default]
    Startup,
    Lifestyle,
    Finance,
    /// Value outside the fixed set, kept verbatim.
    Other(String),
}

impl Category {
    pub fn as_str(&self) -> &str {
        match self {
            Category::Technology => "Technology",
            Category::Startup => "Startup",
            Category::Lifestyle => "Lifestyle",
            Category::Finance => "Finance",
            Category::Other(s) => s,
        }
    }

    /// Whether the category belongs to the fixed set.
    pub fn is_known(&self) -> bool {
        !matches!(self, Category::Other(_))
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for Category {
    fn from(s: &str) -> Self {
        match s {
            "Technology" => Category::Technology,
            "Startup" => Category::Startup,
            "Lifestyle" => Category::Lifestyle,
            "Finance" => Category::Finance,
            _ => Category::Other(s.to_string()),
        }
    }
}

impl From<String> for Category {
    fn from(s: String) -> Self {
        s.as_str().into()
    }
}

impl From<Category> for String {
    fn from(value: Category) -> Self {
        match value {
            Category::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

/// Category selection applied to the public listing.
#[derive(Clone, Debug, Serialize, PartialEq, Eq, Default)]
#[serde(into = "String")]
pub enum CategoryFilter {
    /// Wildcard, every category passes.
    #[default]
    All,
    Only(Category),
    /// Selection outside the fixed set; matches no blog.
    Unknown(String),
}

impl CategoryFilter {
    /// Returns the selector options in display order.
    pub fn options() -> Vec<CategoryFilter> {
        BLOG_CATEGORIES.iter().map(|&name| name.into()).collect()
    }

    /// Exact, case-sensitive category match.
    pub fn matches(&self, category: &Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => selected == category,
            CategoryFilter::Unknown(_) => false,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Only(category) => category.as_str(),
            CategoryFilter::Unknown(s) => s,
        }
    }
}

impl Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for CategoryFilter {
    fn from(s: &str) -> Self {
        if s == ALL_CATEGORIES {
            return CategoryFilter::All;
        }
        match Category::from(s) {
            Category::Other(other) => CategoryFilter::Unknown(other),
            known => CategoryFilter::Only(known),
        }
    }
}

impl From<String> for CategoryFilter {
    fn from(s: String) -> Self {
        s.as_str().into()
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        match category {
            Category::Other(other) => CategoryFilter::Unknown(other),
            known => CategoryFilter::Only(known),
        }
    }
}

impl From<CategoryFilter> for String {
    fn from(value: CategoryFilter) -> Self {
        value.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_fixed_set_case_sensitively() {
        assert_eq!(Category::from("Finance"), Category::Finance);
        assert_eq!(
            Category::from("finance"),
            Category::Other("finance".to_string())
        );
        assert!(!Category::from("finance").is_known());
    }

    #[test]
    fn filter_options_start_with_wildcard() {
        let options = CategoryFilter::options();
        assert_eq!(options.len(), 5);
        assert_eq!(options[0], CategoryFilter::All);
        assert_eq!(options[1], CategoryFilter::Only(Category::Technology));
    }

    #[test]
    fn unknown_selection_matches_nothing() {
        let filter = CategoryFilter::from("Cooking");
        assert_eq!(filter, CategoryFilter::Unknown("Cooking".to_string()));
        assert!(!filter.matches(&Category::Other("Cooking".to_string())));
        assert!(!filter.matches(&Category::Technology));
    }

    #[test]
    fn wildcard_and_exact_matches() {
        assert!(CategoryFilter::All.matches(&Category::Other("x".to_string())));
        assert!(CategoryFilter::from("Lifestyle").matches(&Category::Lifestyle));
        assert!(!CategoryFilter::from("Lifestyle").matches(&Category::Startup));
    }

    #[test]
    fn category_serializes_as_plain_string() {
        let json = serde_json::to_string(&Category::Startup).unwrap();
        assert_eq!(json, "\"Startup\"");
        let parsed: Category = serde_json::from_str("\"Gaming\"").unwrap();
        assert_eq!(parsed, Category::Other("Gaming".to_string()));
    }
}
