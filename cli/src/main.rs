use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use carte_core::{
    extract_allergens, find_allergen, MenuItemDraft, ALLERGENS, DIETARY_CATEGORIES,
};
use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(name = "carte")]
#[command(about = "Carte menu tooling", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract allergens from a comma-separated ingredient list
    Parse {
        /// Ingredient text, e.g. "wheat flour, eggs, milk"
        ingredients: String,
        /// Print machine-readable JSON instead of labels
        #[arg(long)]
        json: bool,
    },
    /// Print the allergen and dietary-category vocabularies
    Vocabulary {
        /// Print machine-readable JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Validate a menu-item draft JSON file and print the create payload
    Validate {
        /// Path to a draft JSON file
        path: PathBuf,
        /// Run the parse action on the draft's ingredient text first
        #[arg(long)]
        parse: bool,
    },
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    match cli.command {
        Commands::Parse { ingredients, json } => parse(&ingredients, json),
        Commands::Vocabulary { json } => vocabulary(json),
        Commands::Validate { path, parse } => validate(&path, parse),
    }
}

fn parse(ingredients: &str, json: bool) -> Result<()> {
    let result = extract_allergens(ingredients, ALLERGENS);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    if result.is_empty() {
        println!("No allergens detected");
        return Ok(());
    }

    for id in &result.matched {
        if let Some(allergen) = find_allergen(id) {
            println!("{} {}", allergen.icon, allergen.label);
        }
    }
    Ok(())
}

fn vocabulary(json: bool) -> Result<()> {
    if json {
        let tables = serde_json::json!({
            "allergens": ALLERGENS,
            "dietary_categories": DIETARY_CATEGORIES,
        });
        println!("{}", serde_json::to_string_pretty(&tables)?);
        return Ok(());
    }

    println!("Allergens:");
    for allergen in ALLERGENS {
        println!("  {} {} ({})", allergen.icon, allergen.label, allergen.id);
    }
    println!("Dietary categories:");
    for category in DIETARY_CATEGORIES {
        println!("  {} {} ({})", category.icon, category.label, category.id);
    }
    Ok(())
}

fn validate(path: &PathBuf, parse: bool) -> Result<()> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let mut draft: MenuItemDraft = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    if parse {
        draft.parse_ingredients();
        tracing::info!(parsed = ?draft.parsed_allergens, "ran parse action");
    }

    let item = draft
        .validate()
        .with_context(|| format!("Draft {} failed validation", path.display()))?;

    println!("{}", serde_json::to_string_pretty(&item)?);
    Ok(())
}
