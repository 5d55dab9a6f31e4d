//! Recipe matching and ranking.
//!
//! A recipe is a candidate when any user ingredient and any recipe
//! ingredient name contain one another (case-folded, trimmed). Candidates are
//! ordered by how many recipe ingredients exactly equal a user ingredient,
//! then by preparation time, and the top [`MAX_RANKED_RESULTS`] are kept.
//!
//! The substring test is intentionally loose: "egg" selects recipes with
//! "eggs" and also "eggplant". It is not token or edit-distance matching.

use crate::model::Recipe;

/// Upper bound on the number of recipes a ranking returns
pub const MAX_RANKED_RESULTS: usize = 3;

/// Case-fold and trim an ingredient name for comparison
pub fn normalize(ingredient: &str) -> String {
    ingredient.trim().to_lowercase()
}

/// Normalize every user ingredient, dropping the ones that end up blank
pub fn normalize_all<S: AsRef<str>>(ingredients: &[S]) -> Vec<String> {
    ingredients
        .iter()
        .map(|ingredient| normalize(ingredient.as_ref()))
        .filter(|ingredient| !ingredient.is_empty())
        .collect()
}

fn normalized_names(recipe: &Recipe) -> impl Iterator<Item = String> + '_ {
    recipe
        .ingredient_names()
        .map(normalize)
        .filter(|name| !name.is_empty())
}

/// Whether `recipe` shares at least one ingredient with `wanted`
///
/// `wanted` must already be normalized (see [`normalize_all`]).
pub fn is_candidate(wanted: &[String], recipe: &Recipe) -> bool {
    normalized_names(recipe).any(|name| {
        wanted
            .iter()
            .filter(|user| !user.is_empty())
            .any(|user| name.contains(user.as_str()) || user.contains(name.as_str()))
    })
}

/// Number of the recipe's ingredients whose name exactly equals a wanted one
pub fn match_count(wanted: &[String], recipe: &Recipe) -> usize {
    normalized_names(recipe)
        .filter(|name| wanted.iter().any(|user| user == name))
        .count()
}

/// Select and order the recipes from `catalog` that best fit `ingredients`
///
/// Pure and infallible: an empty ingredient list or catalog yields an empty
/// result. Equal keys keep their catalog order.
pub fn rank<'a, S: AsRef<str>>(ingredients: &[S], catalog: &'a [Recipe]) -> Vec<&'a Recipe> {
    let wanted = normalize_all(ingredients);
    if wanted.is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<(usize, &Recipe)> = catalog
        .iter()
        .filter(|recipe| is_candidate(&wanted, recipe))
        .map(|recipe| (match_count(&wanted, recipe), recipe))
        .collect();

    // sort_by is stable
    scored.sort_by(|(count_a, a), (count_b, b)| {
        count_b
            .cmp(count_a)
            .then_with(|| a.ready_in_minutes.cmp(&b.ready_in_minutes))
    });

    scored
        .into_iter()
        .take(MAX_RANKED_RESULTS)
        .map(|(_, recipe)| recipe)
        .collect()
}
