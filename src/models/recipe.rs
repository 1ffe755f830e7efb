//! Recipe model
//!
//! The complete input to every calculation.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{Fermentable, Hop, Item, Quantity, Yeast};

/// Errors raised while loading a recipe
#[derive(Debug, Error)]
pub enum RecipeError {
    #[error("Failed to read recipe file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed recipe JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type RecipeResult<T> = Result<T, RecipeError>;

/// A beer recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(default)]
    pub name: String,
    /// Finished batch volume in US gallons
    #[serde(alias = "batchSize")]
    pub batch_size: f64,
    /// Kettle volume, in liters or gallons
    #[serde(alias = "boilSize")]
    pub boil_size: Quantity,
    #[serde(default)]
    pub fermentables: Vec<Fermentable>,
    #[serde(default)]
    pub hops: Vec<Hop>,
    #[serde(default)]
    pub yeasts: Vec<Yeast>,
    #[serde(default)]
    pub items: Vec<Item>,
    /// Mash efficiency percentage (0-100)
    #[serde(alias = "mashEfficiency")]
    pub efficiency: f64,
}

impl Recipe {
    /// Parse a recipe from a JSON string
    pub fn from_json(json: &str) -> RecipeResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a recipe JSON file
    pub fn from_path<P: AsRef<Path>>(path: P) -> RecipeResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let recipe = Self::from_json(&json)?;
        tracing::debug!(
            "Loaded recipe '{}' from {} ({} fermentables, {} hops)",
            recipe.name,
            path.display(),
            recipe.fermentables.len(),
            recipe.hops.len()
        );
        Ok(recipe)
    }
}
