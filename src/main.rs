use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use log::debug;

use recipe_corner::{fallback_catalog, RankedRecipeList, Recipe, RecipeFinder, RecipeFinderBuilder};

#[derive(Parser)]
#[command(name = "recipe-corner")]
#[command(about = "Find baking recipes for the ingredients you have", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank recipes against a list of ingredients
    Search {
        /// Ingredients you have (e.g. butter "brown sugar" eggs)
        #[arg(required = true)]
        ingredients: Vec<String>,
        #[command(flatten)]
        source: SourceArgs,
        /// HTTP timeout in seconds
        #[arg(long)]
        timeout: Option<u64>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show the full details of one recipe
    Show {
        /// Recipe id
        id: u64,
        #[command(flatten)]
        source: SourceArgs,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List the built-in recipes used when the API is unavailable
    Catalog {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
struct SourceArgs {
    /// Search the built-in catalog only
    #[arg(long)]
    offline: bool,
    /// Spoonacular API key (defaults to config.toml or SPOONACULAR_API_KEY)
    #[arg(long)]
    api_key: Option<String>,
    /// Spoonacular API base URL
    #[arg(long)]
    base_url: Option<String>,
}

impl SourceArgs {
    fn apply(self, mut builder: RecipeFinderBuilder) -> RecipeFinderBuilder {
        if self.offline {
            builder = builder.offline();
        }
        if let Some(api_key) = self.api_key {
            builder = builder.api_key(api_key);
        }
        if let Some(base_url) = self.base_url {
            builder = builder.base_url(base_url);
        }
        builder
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Search {
            ingredients,
            source,
            timeout,
            json,
        } => {
            let mut builder = source.apply(RecipeFinder::builder().ingredients(&ingredients));
            if let Some(secs) = timeout {
                builder = builder.timeout(Duration::from_secs(secs));
            }

            let ranked = builder.build().await?;
            debug!("{:#?}", ranked);

            if json {
                println!("{}", serde_json::to_string_pretty(&ranked)?);
            } else {
                print_ranked(&ranked);
            }
        }
        Commands::Show { id, source, json } => {
            let recipe = source
                .apply(RecipeFinder::builder())
                .recipe_information(id)
                .await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&recipe)?);
            } else {
                print_recipe(&recipe);
            }
        }
        Commands::Catalog { json } => {
            let catalog = fallback_catalog();
            if json {
                println!("{}", serde_json::to_string_pretty(&catalog)?);
            } else {
                for recipe in &catalog {
                    println!(
                        "{:>3}  {} ({} min)",
                        recipe.id,
                        recipe.display_title(),
                        recipe.ready_in_minutes
                    );
                }
            }
        }
    }

    Ok(())
}

fn print_ranked(ranked: &RankedRecipeList) {
    if ranked.is_empty() {
        println!(
            "No recipes found for: {}",
            ranked.ingredients.join(", ")
        );
        return;
    }

    for (i, recipe) in ranked.recipes.iter().enumerate() {
        if i > 0 {
            println!();
        }
        print_recipe(recipe);
    }
}

fn print_recipe(recipe: &Recipe) {
    println!("# {}", recipe.display_title());
    println!(
        "Ready in {} min | Serves {} | id {}",
        recipe.ready_in_minutes, recipe.servings, recipe.id
    );

    println!("\nIngredients:");
    for ingredient in &recipe.ingredients {
        println!("  - {}", ingredient.display_line());
    }

    println!("\nInstructions:\n{}", recipe.clean_instructions());
}
