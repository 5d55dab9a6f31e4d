use html_escape::decode_html_entities;
use serde::{Deserialize, Deserializer, Serialize};

use crate::ranking;

/// One ingredient line of a recipe, as returned by the recipe API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    #[serde(default)]
    pub id: Option<u64>,
    /// Canonical ingredient name (e.g. "butter"); used for matching
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub unit: String,
    /// Free-text line as written in the recipe (e.g. "1 cup butter, softened")
    #[serde(default)]
    pub original: Option<String>,
}

impl RecipeIngredient {
    pub fn new(
        id: u64,
        name: impl Into<String>,
        amount: f64,
        unit: impl Into<String>,
        original: impl Into<String>,
    ) -> Self {
        Self {
            id: Some(id),
            name: Some(name.into()),
            amount,
            unit: unit.into(),
            original: Some(original.into()),
        }
    }

    /// Text to show for this line: the original wording when present,
    /// otherwise amount, unit and name.
    pub fn display_line(&self) -> String {
        match &self.original {
            Some(original) if !original.trim().is_empty() => original.clone(),
            _ => {
                let name = self.name.as_deref().unwrap_or_default();
                format!("{} {} {}", self.amount, self.unit, name)
                    .split_whitespace()
                    .collect::<Vec<_>>()
                    .join(" ")
            }
        }
    }
}

/// A full recipe from the recipe information endpoint
///
/// Recipes are never mutated after retrieval; ranking produces an ordered
/// view over them instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub ready_in_minutes: u32,
    #[serde(default)]
    pub servings: u32,
    #[serde(default)]
    pub instructions: Option<String>,
    #[serde(
        rename = "extendedIngredients",
        default,
        deserialize_with = "null_as_empty"
    )]
    pub ingredients: Vec<RecipeIngredient>,
}

impl Recipe {
    /// Names of the recipe's ingredients, skipping lines without one
    pub fn ingredient_names(&self) -> impl Iterator<Item = &str> {
        self.ingredients
            .iter()
            .filter_map(|ingredient| ingredient.name.as_deref())
    }

    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("Untitled recipe")
    }

    /// Instructions with API markup removed
    pub fn clean_instructions(&self) -> String {
        clean_instructions(self.instructions.as_deref())
    }
}

/// Search result from the find-by-ingredients endpoint
///
/// This is a lighter record than [`Recipe`]: it carries no instructions or
/// timings, only which of the searched ingredients the recipe uses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSummary {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub used_ingredient_count: u32,
    #[serde(default)]
    pub missed_ingredient_count: u32,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub used_ingredients: Vec<RecipeIngredient>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub missed_ingredients: Vec<RecipeIngredient>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub unused_ingredients: Vec<RecipeIngredient>,
}

pub const PARTIAL_READY_IN_MINUTES: u32 = 30;
pub const PARTIAL_SERVINGS: u32 = 4;
pub const PARTIAL_INSTRUCTIONS: &str = "Instructions not available";

impl RecipeSummary {
    /// Build a stand-in recipe when full details could not be fetched
    pub fn into_partial_recipe(self) -> Recipe {
        Recipe {
            id: self.id,
            title: self.title,
            image: self.image,
            ready_in_minutes: PARTIAL_READY_IN_MINUTES,
            servings: PARTIAL_SERVINGS,
            instructions: Some(PARTIAL_INSTRUCTIONS.to_string()),
            ingredients: self.used_ingredients,
        }
    }
}

/// Ranked recipes together with the ingredient set that produced them
///
/// Rebuilt on every search; nothing is carried over between requests.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RankedRecipeList {
    pub ingredients: Vec<String>,
    pub recipes: Vec<Recipe>,
}

impl RankedRecipeList {
    /// Rank `catalog` against `ingredients` and keep both
    pub fn rank<S: AsRef<str>>(ingredients: &[S], catalog: &[Recipe]) -> Self {
        Self {
            ingredients: ingredients.iter().map(|s| s.as_ref().to_string()).collect(),
            recipes: ranking::rank(ingredients, catalog)
                .into_iter()
                .cloned()
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }
}

const REMOVED_TAGS: [&str; 7] = ["<ol>", "</ol>", "<li>", "</li>", "<ul>", "</ul>", "<p>"];
const LINE_BREAK_TAGS: [&str; 4] = ["</p>", "<br>", "<br/>", "<br />"];

/// Strip the simple list/paragraph markup the API embeds in instructions
pub fn clean_instructions(instructions: Option<&str>) -> String {
    let Some(instructions) = instructions else {
        return "No instructions available".to_string();
    };

    let mut text = instructions.to_string();
    for tag in REMOVED_TAGS {
        text = text.replace(tag, "");
    }
    for tag in LINE_BREAK_TAGS {
        text = text.replace(tag, "\n");
    }

    decode_html_entities(&text).trim().to_string()
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_recipe_information() {
        let json = r#"{
            "id": 715538,
            "title": "Bruschetta Style Pork & Pasta",
            "image": "https://img.spoonacular.com/recipes/715538-556x370.jpg",
            "readyInMinutes": 35,
            "servings": 5,
            "instructions": "<ol><li>Boil pasta.</li><li>Serve.</li></ol>",
            "extendedIngredients": [
                {
                    "id": 1001,
                    "aisle": "Milk, Eggs, Other Dairy",
                    "name": "butter",
                    "amount": 2.0,
                    "unit": "tbsp",
                    "original": "2 tbsp butter",
                    "meta": []
                }
            ]
        }"#;

        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.id, 715538);
        assert_eq!(recipe.ready_in_minutes, 35);
        assert_eq!(recipe.servings, 5);
        assert_eq!(recipe.ingredients.len(), 1);
        assert_eq!(recipe.ingredients[0].name.as_deref(), Some("butter"));
        assert_eq!(recipe.ingredient_names().collect::<Vec<_>>(), vec!["butter"]);
    }

    #[test]
    fn test_null_ingredient_list_is_empty() {
        let json = r#"{"id": 7, "title": null, "readyInMinutes": 10, "servings": 1, "extendedIngredients": null}"#;

        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert!(recipe.ingredients.is_empty());
        assert_eq!(recipe.display_title(), "Untitled recipe");
    }

    #[test]
    fn test_summary_into_partial_recipe() {
        let json = r#"{
            "id": 42,
            "title": "Shortbread",
            "usedIngredientCount": 1,
            "missedIngredientCount": 1,
            "usedIngredients": [{"id": 1, "name": "butter", "amount": 1.0, "unit": "cup", "original": "1 cup butter"}],
            "missedIngredients": [{"id": 2, "name": "flour", "amount": 2.0, "unit": "cups", "original": "2 cups flour"}],
            "unusedIngredients": []
        }"#;

        let summary: RecipeSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.used_ingredient_count, 1);

        let recipe = summary.into_partial_recipe();
        assert_eq!(recipe.id, 42);
        assert_eq!(recipe.ready_in_minutes, 30);
        assert_eq!(recipe.servings, 4);
        assert_eq!(recipe.instructions.as_deref(), Some("Instructions not available"));
        assert_eq!(recipe.ingredient_names().collect::<Vec<_>>(), vec!["butter"]);
    }

    #[test]
    fn test_clean_instructions_strips_markup() {
        let raw = "<ol><li>Cream butter &amp; sugar.</li><li>Bake.</li></ol><p>Enjoy</p><br/>";
        assert_eq!(
            clean_instructions(Some(raw)),
            "Cream butter & sugar.Bake.Enjoy"
        );

        let paragraphs = "<p>Preheat oven.</p><p>Mix.</p>";
        assert_eq!(clean_instructions(Some(paragraphs)), "Preheat oven.\nMix.");
    }

    #[test]
    fn test_clean_instructions_missing() {
        assert_eq!(clean_instructions(None), "No instructions available");
    }

    #[test]
    fn test_display_line() {
        let with_original = RecipeIngredient::new(1, "butter", 1.0, "cup", "1 cup butter, softened");
        assert_eq!(with_original.display_line(), "1 cup butter, softened");

        let bare = RecipeIngredient {
            id: None,
            name: Some("eggs".to_string()),
            amount: 2.0,
            unit: String::new(),
            original: None,
        };
        assert_eq!(bare.display_line(), "2 eggs");
    }
}
