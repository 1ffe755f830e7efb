//! Calculator Tools
//!
//! Batch size, gravity, bitterness, alcohol, and unit conversion tools.

use serde::Serialize;

use crate::brewing::batch::{fermentables_pounds, hops_pounds, measured_pounds};
use crate::brewing::formulas::average_attenuation;
use crate::brewing::units::{convert, UnitTag};
use crate::brewing::{
    batch_size, boil_gravity, boil_size_gallons, calculate_abv as abv_from_gravity,
    calculate_gravity as gravity_for, calculate_ibu as ibu_for, points_breakdown,
    FermentablePoints, GravityPair,
};
use crate::models::Recipe;

/// Response for calc_batch_size
#[derive(Debug, Serialize)]
pub struct BatchSizeResponse {
    pub batch_size_lb: f64,
    pub fermentables_lb: f64,
    pub hops_lb: f64,
    pub yeasts_lb: f64,
    pub items_lb: f64,
}

/// Response for calculate_gravity
#[derive(Debug, Serialize)]
pub struct GravityResponse {
    pub og: f64,
    pub fg: f64,
    pub attenuation: f64,
    pub fermentables: Vec<FermentablePoints>,
}

/// Response for calculate_ibu
#[derive(Debug, Serialize)]
pub struct IbuResponse {
    pub ibu: f64,
    pub og: f64,
    pub boil_gravity: f64,
    pub bittering_hops: usize,
}

/// Response for calculate_abv
#[derive(Debug, Serialize)]
pub struct AbvResponse {
    pub abv: f64,
    pub og: f64,
    pub fg: f64,
}

/// Every derived metric for a recipe
#[derive(Debug, Serialize)]
pub struct RecipeAnalysis {
    pub name: String,
    pub batch_size_gal: f64,
    pub batch_mass_lb: f64,
    pub boil_size_gal: f64,
    pub boil_gravity: f64,
    pub og: f64,
    pub fg: f64,
    pub abv: f64,
    pub ibu: f64,
    pub fermentables: Vec<FermentablePoints>,
}

/// Response for convert_units
#[derive(Debug, Serialize)]
pub struct ConversionResponse {
    pub value: f64,
    pub from: String,
    pub to: String,
    pub result: f64,
}

/// Deserialize a recipe handed over as JSON
pub fn parse_recipe(value: serde_json::Value) -> Result<Recipe, String> {
    serde_json::from_value(value).map_err(|e| format!("Invalid recipe: {}", e))
}

/// Total recipe mass in pounds, with the per-collection subtotals
pub fn calc_batch_size(recipe: &Recipe) -> BatchSizeResponse {
    BatchSizeResponse {
        batch_size_lb: batch_size(recipe),
        fermentables_lb: fermentables_pounds(&recipe.fermentables),
        hops_lb: hops_pounds(&recipe.hops),
        yeasts_lb: measured_pounds(&recipe.yeasts),
        items_lb: measured_pounds(&recipe.items),
    }
}

pub fn calculate_gravity(recipe: &Recipe) -> GravityResponse {
    let GravityPair { og, fg } = gravity_for(recipe);

    GravityResponse {
        og,
        fg,
        attenuation: average_attenuation(&recipe.yeasts),
        fermentables: points_breakdown(recipe),
    }
}

/// Recipe IBU; OG is computed from the recipe when not supplied
pub fn calculate_ibu(recipe: &Recipe, og: Option<f64>) -> IbuResponse {
    let og = og.unwrap_or_else(|| gravity_for(recipe).og);

    IbuResponse {
        ibu: ibu_for(recipe, og),
        og,
        boil_gravity: boil_gravity(recipe, og),
        bittering_hops: recipe.hops.iter().filter(|hop| hop.is_bittering()).count(),
    }
}

pub fn calculate_abv(og: f64, fg: f64) -> AbvResponse {
    AbvResponse {
        abv: abv_from_gravity(&GravityPair { og, fg }),
        og,
        fg,
    }
}

/// Run the whole pipeline: normalization, gravity, then IBU and ABV
pub fn analyze_recipe(recipe: &Recipe) -> RecipeAnalysis {
    let gravity = gravity_for(recipe);

    RecipeAnalysis {
        name: recipe.name.clone(),
        batch_size_gal: recipe.batch_size,
        batch_mass_lb: batch_size(recipe),
        boil_size_gal: boil_size_gallons(recipe),
        boil_gravity: boil_gravity(recipe, gravity.og),
        og: gravity.og,
        fg: gravity.fg,
        abv: abv_from_gravity(&gravity),
        ibu: ibu_for(recipe, gravity.og),
        fermentables: points_breakdown(recipe),
    }
}

/// Convert a value between two unit tags
pub fn convert_units(value: f64, from: &str, to: &str) -> Result<ConversionResponse, String> {
    let from_tag = UnitTag::parse(from);
    let to_tag = UnitTag::parse(to);

    let result = convert(value, &from_tag, &to_tag)
        .ok_or_else(|| format!("Cannot convert from '{}' to '{}'", from, to))?;

    Ok(ConversionResponse {
        value,
        from: from_tag.to_string(),
        to: to_tag.to_string(),
        result,
    })
}
