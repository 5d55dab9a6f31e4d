use serde::Serialize;

/// The user's ingredient entries, in the order they were added
///
/// Entries are trimmed on the way in. Blank text and exact duplicates are
/// refused. Matching is case-insensitive later on, but the list keeps what the
/// user typed so it can be shown back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IngredientList {
    items: Vec<String>,
}

impl IngredientList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an ingredient; returns `false` if it was blank or already present
    pub fn add(&mut self, ingredient: &str) -> bool {
        let ingredient = ingredient.trim();
        if ingredient.is_empty() || self.contains(ingredient) {
            return false;
        }
        self.items.push(ingredient.to_string());
        true
    }

    /// Remove an exact entry; returns `false` if it was not in the list
    pub fn remove(&mut self, ingredient: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item != ingredient);
        self.items.len() != before
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn contains(&self, ingredient: &str) -> bool {
        self.items.iter().any(|item| item == ingredient)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<String> {
        self.items
    }
}

impl<S: AsRef<str>> Extend<S> for IngredientList {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for ingredient in iter {
            self.add(ingredient.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for IngredientList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = IngredientList::new();
        list.extend(iter);
        list
    }
}

impl<'a> IntoIterator for &'a IngredientList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_trims_and_keeps_order() {
        let mut list = IngredientList::new();
        assert!(list.add("  butter "));
        assert!(list.add("sugar"));

        assert_eq!(list.as_slice(), ["butter", "sugar"]);
    }

    #[test]
    fn test_add_rejects_blank_and_duplicates() {
        let mut list = IngredientList::new();
        assert!(list.add("eggs"));
        assert!(!list.add("   "));
        assert!(!list.add(""));
        assert!(!list.add(" eggs"));
        // Duplicate detection is exact; case differences are distinct entries
        assert!(list.add("Eggs"));

        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_remove() {
        let mut list: IngredientList = ["flour", "milk"].into_iter().collect();

        assert!(list.remove("flour"));
        assert!(!list.remove("flour"));
        assert_eq!(list.as_slice(), ["milk"]);
    }

    #[test]
    fn test_clear() {
        let mut list: IngredientList = vec!["flour".to_string(), "milk".to_string()]
            .into_iter()
            .collect();
        list.clear();

        assert!(list.is_empty());
    }

    #[test]
    fn test_collect_applies_add_rules() {
        let list: IngredientList = ["butter", " butter", "", "cinnamon"].into_iter().collect();
        assert_eq!(list.into_vec(), vec!["butter", "cinnamon"]);
    }
}
