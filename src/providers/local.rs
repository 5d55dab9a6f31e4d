use crate::error::SearchError;
use crate::model::{Recipe, RecipeIngredient};
use crate::providers::RecipeProvider;
use crate::ranking;
use async_trait::async_trait;
use log::debug;

/// Offline provider backed by a fixed set of baking recipes
///
/// Used when the recipe API is unreachable or no API key is configured.
pub struct LocalCatalogProvider {
    recipes: Vec<Recipe>,
}

impl LocalCatalogProvider {
    pub fn new() -> Self {
        Self::with_recipes(fallback_catalog())
    }

    pub fn with_recipes(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }
}

impl Default for LocalCatalogProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecipeProvider for LocalCatalogProvider {
    fn provider_name(&self) -> &str {
        "local"
    }

    async fn find_by_ingredients(
        &self,
        ingredients: &[String],
    ) -> Result<Vec<Recipe>, SearchError> {
        let wanted = ranking::normalize_all(ingredients);
        let matching: Vec<Recipe> = self
            .recipes
            .iter()
            .filter(|recipe| ranking::is_candidate(&wanted, recipe))
            .cloned()
            .collect();

        debug!(
            "Local catalog: {} of {} recipes match {:?}",
            matching.len(),
            self.recipes.len(),
            ingredients
        );
        Ok(matching)
    }

    async fn recipe_information(&self, id: u64) -> Result<Recipe, SearchError> {
        self.recipes
            .iter()
            .find(|recipe| recipe.id == id)
            .cloned()
            .ok_or(SearchError::RecipeNotFound(id))
    }
}

fn recipe(
    id: u64,
    title: &str,
    ready_in_minutes: u32,
    servings: u32,
    steps: &[&str],
    ingredients: Vec<RecipeIngredient>,
) -> Recipe {
    let instructions = steps
        .iter()
        .enumerate()
        .map(|(i, step)| format!("{}. {}", i + 1, step))
        .collect::<Vec<_>>()
        .join("\n");

    Recipe {
        id,
        title: Some(title.to_string()),
        image: None,
        ready_in_minutes,
        servings,
        instructions: Some(instructions),
        ingredients,
    }
}

fn ing(id: u64, name: &str, amount: f64, unit: &str, original: &str) -> RecipeIngredient {
    RecipeIngredient::new(id, name, amount, unit, original)
}

/// The built-in baking recipes served when the API is unavailable
pub fn fallback_catalog() -> Vec<Recipe> {
    vec![
        recipe(
            1,
            "Chocolate Chip Cookies",
            25,
            24,
            &[
                "Preheat oven to 375°F (190°C)",
                "Cream butter and sugars until fluffy",
                "Beat in eggs and vanilla",
                "Mix in flour, baking soda, and salt",
                "Stir in chocolate chips",
                "Drop rounded tablespoons onto baking sheet",
                "Bake for 9-11 minutes until golden brown",
            ],
            vec![
                ing(1, "all-purpose flour", 2.5, "cups", "2 1/2 cups all-purpose flour"),
                ing(2, "butter", 1.0, "cup", "1 cup butter, softened"),
                ing(3, "brown sugar", 0.75, "cup", "3/4 cup brown sugar"),
                ing(4, "white sugar", 0.75, "cup", "3/4 cup white sugar"),
                ing(5, "eggs", 2.0, "large", "2 large eggs"),
                ing(6, "vanilla extract", 2.0, "tsp", "2 tsp vanilla extract"),
                ing(7, "chocolate chips", 2.0, "cups", "2 cups chocolate chips"),
            ],
        ),
        recipe(
            2,
            "Vanilla Cupcakes",
            30,
            12,
            &[
                "Preheat oven to 350°F (175°C)",
                "Line muffin tin with paper liners",
                "Cream butter and sugar until light and fluffy",
                "Add eggs one at a time, beating well",
                "Mix in vanilla extract",
                "Alternately add flour and milk",
                "Fill muffin cups 2/3 full",
                "Bake for 18-20 minutes",
            ],
            vec![
                ing(8, "all-purpose flour", 1.5, "cups", "1 1/2 cups all-purpose flour"),
                ing(9, "butter", 0.5, "cup", "1/2 cup butter, softened"),
                ing(10, "sugar", 0.75, "cup", "3/4 cup sugar"),
                ing(11, "eggs", 2.0, "large", "2 large eggs"),
                ing(12, "vanilla extract", 1.0, "tsp", "1 tsp vanilla extract"),
                ing(13, "milk", 0.5, "cup", "1/2 cup milk"),
            ],
        ),
        recipe(
            3,
            "Banana Bread",
            60,
            8,
            &[
                "Preheat oven to 350°F (175°C)",
                "Grease a 9x5 inch loaf pan",
                "Mash bananas in a large bowl",
                "Mix in melted butter, sugar, eggs, and vanilla",
                "Stir in flour, baking soda, and salt",
                "Pour into prepared loaf pan",
                "Bake for 50-60 minutes until toothpick comes out clean",
            ],
            vec![
                ing(14, "ripe bananas", 3.0, "medium", "3 medium ripe bananas"),
                ing(15, "all-purpose flour", 1.5, "cups", "1 1/2 cups all-purpose flour"),
                ing(16, "butter", 0.33, "cup", "1/3 cup butter, melted"),
                ing(17, "sugar", 0.75, "cup", "3/4 cup sugar"),
                ing(18, "eggs", 1.0, "large", "1 large egg"),
                ing(19, "vanilla extract", 1.0, "tsp", "1 tsp vanilla extract"),
                ing(20, "baking soda", 1.0, "tsp", "1 tsp baking soda"),
            ],
        ),
        recipe(
            4,
            "Apple Pie",
            90,
            8,
            &[
                "Preheat oven to 425°F (220°C)",
                "Prepare pie crust and place in pie dish",
                "Mix sliced apples with sugar, cinnamon, and nutmeg",
                "Fill pie crust with apple mixture",
                "Add top crust and crimp edges",
                "Cut slits in top crust",
                "Bake for 45 minutes until golden brown",
            ],
            vec![
                ing(21, "apples", 6.0, "medium", "6 medium apples, sliced"),
                ing(22, "pie crust", 2.0, "sheets", "2 sheets pie crust"),
                ing(23, "sugar", 0.75, "cup", "3/4 cup sugar"),
                ing(24, "cinnamon", 1.0, "tsp", "1 tsp cinnamon"),
                ing(25, "nutmeg", 0.25, "tsp", "1/4 tsp nutmeg"),
                ing(26, "butter", 2.0, "tbsp", "2 tbsp butter"),
            ],
        ),
        recipe(
            5,
            "Chocolate Cake",
            45,
            12,
            &[
                "Preheat oven to 350°F (175°C)",
                "Grease and flour two 9-inch round cake pans",
                "Mix flour, cocoa, baking powder, and salt",
                "Cream butter and sugar until fluffy",
                "Add eggs and vanilla",
                "Alternately add flour mixture and milk",
                "Bake for 25-30 minutes",
            ],
            vec![
                ing(27, "all-purpose flour", 2.0, "cups", "2 cups all-purpose flour"),
                ing(28, "cocoa powder", 0.75, "cup", "3/4 cup cocoa powder"),
                ing(29, "sugar", 1.5, "cups", "1 1/2 cups sugar"),
                ing(30, "butter", 0.5, "cup", "1/2 cup butter"),
                ing(31, "eggs", 2.0, "large", "2 large eggs"),
                ing(32, "milk", 1.0, "cup", "1 cup milk"),
                ing(33, "vanilla extract", 1.0, "tsp", "1 tsp vanilla extract"),
            ],
        ),
        recipe(
            6,
            "Blueberry Muffins",
            35,
            12,
            &[
                "Preheat oven to 375°F (190°C)",
                "Line muffin tin with paper liners",
                "Mix flour, sugar, baking powder, and salt",
                "In another bowl, mix milk, oil, and egg",
                "Combine wet and dry ingredients",
                "Fold in blueberries",
                "Fill muffin cups and bake for 20-25 minutes",
            ],
            vec![
                ing(34, "all-purpose flour", 2.0, "cups", "2 cups all-purpose flour"),
                ing(35, "sugar", 0.75, "cup", "3/4 cup sugar"),
                ing(36, "baking powder", 2.0, "tsp", "2 tsp baking powder"),
                ing(37, "milk", 1.0, "cup", "1 cup milk"),
                ing(38, "vegetable oil", 0.33, "cup", "1/3 cup vegetable oil"),
                ing(39, "egg", 1.0, "large", "1 large egg"),
                ing(40, "blueberries", 1.0, "cup", "1 cup fresh blueberries"),
            ],
        ),
        recipe(
            7,
            "Strawberry Cheesecake",
            120,
            12,
            &[
                "Preheat oven to 350°F (175°C)",
                "Mix graham cracker crumbs, butter, and sugar for crust",
                "Press into springform pan and bake for 10 minutes",
                "Beat cream cheese, sugar, and vanilla until smooth",
                "Add eggs one at a time",
                "Pour over crust and bake for 50-55 minutes",
                "Top with fresh strawberries",
            ],
            vec![
                ing(41, "graham crackers", 1.5, "cups", "1 1/2 cups graham cracker crumbs"),
                ing(42, "butter", 0.33, "cup", "1/3 cup butter, melted"),
                ing(43, "cream cheese", 24.0, "oz", "24 oz cream cheese, softened"),
                ing(44, "sugar", 1.0, "cup", "1 cup sugar"),
                ing(45, "vanilla extract", 1.0, "tsp", "1 tsp vanilla extract"),
                ing(46, "eggs", 3.0, "large", "3 large eggs"),
                ing(47, "strawberries", 2.0, "cups", "2 cups fresh strawberries"),
            ],
        ),
        recipe(
            8,
            "Lemon Bars",
            60,
            16,
            &[
                "Preheat oven to 350°F (175°C)",
                "Mix flour, butter, and powdered sugar for crust",
                "Press into 9x13 pan and bake for 20 minutes",
                "Beat eggs, sugar, lemon juice, and flour for filling",
                "Pour over hot crust and bake for 25 minutes",
                "Cool and dust with powdered sugar",
            ],
            vec![
                ing(48, "all-purpose flour", 2.0, "cups", "2 cups all-purpose flour"),
                ing(49, "butter", 1.0, "cup", "1 cup butter, softened"),
                ing(50, "powdered sugar", 0.5, "cup", "1/2 cup powdered sugar"),
                ing(51, "eggs", 4.0, "large", "4 large eggs"),
                ing(52, "sugar", 1.5, "cups", "1 1/2 cups sugar"),
                ing(53, "lemon juice", 0.25, "cup", "1/4 cup fresh lemon juice"),
                ing(54, "lemon zest", 1.0, "tbsp", "1 tbsp lemon zest"),
            ],
        ),
        recipe(
            9,
            "Carrot Cake",
            75,
            12,
            &[
                "Preheat oven to 350°F (175°C)",
                "Grease and flour two 9-inch round pans",
                "Mix flour, baking soda, cinnamon, and salt",
                "Beat eggs, oil, sugar, and vanilla",
                "Add flour mixture and fold in carrots",
                "Bake for 30-35 minutes",
                "Frost with cream cheese frosting",
            ],
            vec![
                ing(55, "all-purpose flour", 2.0, "cups", "2 cups all-purpose flour"),
                ing(56, "baking soda", 2.0, "tsp", "2 tsp baking soda"),
                ing(57, "cinnamon", 2.0, "tsp", "2 tsp cinnamon"),
                ing(58, "eggs", 4.0, "large", "4 large eggs"),
                ing(59, "vegetable oil", 1.25, "cups", "1 1/4 cups vegetable oil"),
                ing(60, "sugar", 2.0, "cups", "2 cups sugar"),
                ing(61, "carrots", 3.0, "cups", "3 cups grated carrots"),
                ing(62, "vanilla extract", 2.0, "tsp", "2 tsp vanilla extract"),
            ],
        ),
        recipe(
            10,
            "Peanut Butter Cookies",
            25,
            24,
            &[
                "Preheat oven to 375°F (190°C)",
                "Cream peanut butter, butter, and sugars",
                "Beat in eggs and vanilla",
                "Mix in flour, baking soda, and salt",
                "Roll into balls and press with fork",
                "Bake for 10-12 minutes until golden",
            ],
            vec![
                ing(63, "peanut butter", 1.0, "cup", "1 cup creamy peanut butter"),
                ing(64, "butter", 0.5, "cup", "1/2 cup butter, softened"),
                ing(65, "brown sugar", 0.75, "cup", "3/4 cup brown sugar"),
                ing(66, "white sugar", 0.75, "cup", "3/4 cup white sugar"),
                ing(67, "eggs", 2.0, "large", "2 large eggs"),
                ing(68, "vanilla extract", 1.0, "tsp", "1 tsp vanilla extract"),
                ing(69, "all-purpose flour", 1.5, "cups", "1 1/2 cups all-purpose flour"),
                ing(70, "baking soda", 1.0, "tsp", "1 tsp baking soda"),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_shape() {
        let catalog = fallback_catalog();
        assert_eq!(catalog.len(), 10);

        let ids: Vec<u64> = catalog.iter().map(|recipe| recipe.id).collect();
        assert_eq!(ids, (1..=10).collect::<Vec<_>>());
        assert!(catalog.iter().all(|recipe| !recipe.ingredients.is_empty()));
    }

    #[test]
    fn test_instructions_are_numbered() {
        let catalog = fallback_catalog();
        let instructions = catalog[0].instructions.as_deref().unwrap();

        assert!(instructions.starts_with("1. Preheat oven to 375°F (190°C)\n2. "));
        assert!(instructions.ends_with("7. Bake for 9-11 minutes until golden brown"));
    }

    #[tokio::test]
    async fn test_find_returns_all_candidates() {
        let provider = LocalCatalogProvider::new();
        let recipes = provider
            .find_by_ingredients(&["blueberries".to_string()])
            .await
            .unwrap();

        let titles: Vec<&str> = recipes.iter().map(|r| r.display_title()).collect();
        assert_eq!(titles, vec!["Blueberry Muffins"]);
    }

    #[tokio::test]
    async fn test_find_is_untruncated() {
        let provider = LocalCatalogProvider::new();
        let recipes = provider
            .find_by_ingredients(&["Butter".to_string()])
            .await
            .unwrap();

        // Every recipe except the muffins and carrot cake uses butter
        assert_eq!(recipes.len(), 8);
    }

    #[tokio::test]
    async fn test_find_nothing() {
        let provider = LocalCatalogProvider::new();
        let recipes = provider
            .find_by_ingredients(&["xyz-nonexistent".to_string()])
            .await
            .unwrap();

        assert!(recipes.is_empty());
    }

    #[tokio::test]
    async fn test_recipe_information() {
        let provider = LocalCatalogProvider::new();

        let recipe = provider.recipe_information(4).await.unwrap();
        assert_eq!(recipe.display_title(), "Apple Pie");

        let missing = provider.recipe_information(11).await;
        assert!(matches!(missing, Err(SearchError::RecipeNotFound(11))));
    }

    #[test]
    fn test_provider_name() {
        assert_eq!(LocalCatalogProvider::default().provider_name(), "local");
    }
}
