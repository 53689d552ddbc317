//! The uniform list-filtering predicate.
//!
//! Every listing screen filters the same way: a case-insensitive substring
//! match on the display name, and-ed with an exact category/specialty/
//! profession match when one is selected. Implemented once here so every
//! endpoint behaves identically.

use serde::Deserialize;

/// Query parameters accepted by listing endpoints.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ListFilter {
    /// Substring to match against the display name, case-insensitively.
    pub q: Option<String>,
    /// Exact category (cuisine tag / specialty / profession) to match.
    #[serde(alias = "specialty", alias = "profession")]
    pub category: Option<String>,
}

impl ListFilter {
    /// Whether an item with the given name and categories passes the filter.
    ///
    /// An empty or missing `q` matches every name; a missing `category`
    /// matches every item.
    #[must_use]
    pub fn matches<'a, I>(&self, name: &str, categories: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        let matches_search = match self.q.as_deref() {
            None | Some("") => true,
            Some(q) => name.to_lowercase().contains(&q.to_lowercase()),
        };

        let matches_category = match self.category.as_deref() {
            None | Some("") => true,
            Some(wanted) => categories.into_iter().any(|c| c == wanted),
        };

        matches_search && matches_category
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter(q: Option<&str>, category: Option<&str>) -> ListFilter {
        ListFilter {
            q: q.map(str::to_owned),
            category: category.map(str::to_owned),
        }
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        assert!(filter(None, None).matches("برجر كينج", ["برجر"]));
        assert!(filter(Some(""), Some("")).matches("anything", []));
    }

    #[test]
    fn test_substring_match_is_case_insensitive() {
        let f = filter(Some("king"), None);
        assert!(f.matches("Burger KING", []));
        assert!(!f.matches("Pizza Hut", []));
    }

    #[test]
    fn test_category_requires_exact_tag() {
        let f = filter(None, Some("برجر"));
        assert!(f.matches("برجر كينج", ["برجر", "وجبات سريعة"]));
        assert!(!f.matches("بيتزا هت", ["بيتزا", "إيطالي"]));
    }

    #[test]
    fn test_search_and_category_compose() {
        let f = filter(Some("كينج"), Some("برجر"));
        assert!(f.matches("برجر كينج", ["برجر"]));
        // name matches but tag does not
        assert!(!f.matches("برجر كينج", ["مشويات"]));
        // tag matches but name does not
        assert!(!f.matches("ماكدونالدز", ["برجر"]));
    }
}
