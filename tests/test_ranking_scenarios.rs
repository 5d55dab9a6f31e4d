use recipe_corner::{fallback_catalog, rank, RankedRecipeList, Recipe, RecipeIngredient, MAX_RANKED_RESULTS};

fn recipe(id: u64, names: &[&str], ready_in_minutes: u32) -> Recipe {
    Recipe {
        id,
        title: Some(format!("Recipe {}", id)),
        image: None,
        ready_in_minutes,
        servings: 1,
        instructions: None,
        ingredients: names
            .iter()
            .map(|name| RecipeIngredient::new(0, *name, 1.0, "", *name))
            .collect(),
    }
}

fn ids(recipes: &[&Recipe]) -> Vec<u64> {
    recipes.iter().map(|r| r.id).collect()
}

#[test]
fn test_equal_counts_prefer_faster_recipe() {
    let catalog = vec![
        recipe(1, &["butter", "sugar", "flour"], 25),
        recipe(2, &["butter", "eggs"], 10),
    ];

    assert_eq!(ids(&rank(&["butter"], &catalog)), vec![2, 1]);
}

#[test]
fn test_chocolate_chips_in_fallback_catalog() {
    let catalog = fallback_catalog();
    let ranked = rank(&["chocolate chips"], &catalog);

    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].display_title(), "Chocolate Chip Cookies");
}

#[test]
fn test_unknown_ingredient_in_fallback_catalog() {
    let catalog = fallback_catalog();
    assert!(rank(&["xyz-nonexistent"], &catalog).is_empty());
}

#[test]
fn test_two_exact_matches_in_fallback_catalog() {
    let catalog = fallback_catalog();
    let ranked = rank(&["butter", "sugar"], &catalog);

    // Six recipes list both exactly; the fastest three win, Banana Bread
    // beats Lemon Bars at 60 minutes by catalog order
    let titles: Vec<&str> = ranked.iter().map(|r| r.display_title()).collect();
    assert_eq!(
        titles,
        vec!["Vanilla Cupcakes", "Chocolate Cake", "Banana Bread"]
    );
}

#[test]
fn test_exact_match_always_included_when_room() {
    let catalog = vec![
        recipe(1, &["cream cheese"], 5),
        recipe(2, &["strawberries"], 100),
    ];

    let ranked = rank(&["Strawberries"], &catalog);
    assert_eq!(ids(&ranked), vec![2]);
}

#[test]
fn test_cap_holds_for_large_catalogs() {
    let catalog = fallback_catalog();
    let ranked = rank(&["sugar", "butter", "eggs", "flour", "milk"], &catalog);

    assert_eq!(ranked.len(), MAX_RANKED_RESULTS);
}

#[test]
fn test_ranked_list_keeps_ingredients() {
    let catalog = fallback_catalog();
    let ranked = RankedRecipeList::rank(&["Cinnamon"], &catalog);

    assert_eq!(ranked.ingredients, vec!["Cinnamon"]);
    let titles: Vec<&str> = ranked.recipes.iter().map(|r| r.display_title()).collect();
    assert_eq!(titles, vec!["Carrot Cake", "Apple Pie"]);
}
