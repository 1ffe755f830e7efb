//! Print every derived metric for a recipe JSON file
//! Usage: cargo run --bin calc_recipe -- [recipe.json]
//! Falls back to BREWCALC_RECIPE_PATH when no path is given.

use std::path::PathBuf;

use brewcalc::models::Recipe;
use brewcalc::tools::calculator::analyze_recipe;
use tracing_subscriber::EnvFilter;

fn get_recipe_path() -> Option<PathBuf> {
    std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| std::env::var("BREWCALC_RECIPE_PATH").ok().map(PathBuf::from))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("brewcalc=warn".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let Some(path) = get_recipe_path() else {
        eprintln!("Usage: calc_recipe <recipe.json> (or set BREWCALC_RECIPE_PATH)");
        std::process::exit(2);
    };

    let recipe = Recipe::from_path(&path)?;
    let analysis = analyze_recipe(&recipe);

    println!("Recipe: {}", analysis.name);
    println!("  Batch size:   {:.2} gal ({:.2} lb of ingredients)", analysis.batch_size_gal, analysis.batch_mass_lb);
    println!("  Boil size:    {:.2} gal", analysis.boil_size_gal);
    println!("  Boil gravity: {:.3}", analysis.boil_gravity);
    println!("  OG:           {:.3}", analysis.og);
    println!("  FG:           {:.3}", analysis.fg);
    println!("  ABV:          {:.0}%", analysis.abv);
    println!("  IBU:          {:.1}", analysis.ibu);

    for fermentable in &analysis.fermentables {
        println!(
            "    {:<24} {:>6.2} lb  {:>6.1} pts{}",
            fermentable.name,
            fermentable.pounds,
            fermentable.points,
            if fermentable.mashed { "  (mashed)" } else { "" }
        );
    }

    Ok(())
}
