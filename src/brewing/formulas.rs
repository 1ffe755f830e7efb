//! Brewing formulas
//!
//! Gravity, bitterness and alcohol. Evaluation order matters: OG comes from
//! the fermentables, IBU needs OG through the boil gravity, ABV needs both
//! OG and FG.

use serde::{Deserialize, Serialize};

use crate::models::{Fermentable, Hop, HopForm, Recipe, Yeast};

use super::batch::{batch_size, boil_size_gallons, fermentable_pounds};
use super::constants::{
    ABV_FACTOR, ALPHA_ACID_MG_PER_L, BIGNESS_BASE, BIGNESS_SCALE, BOIL_TIME_DIVISOR,
    BOIL_TIME_SLOPE, DEFAULT_ATTENUATION, LEAF_FACTOR, MASH_METHOD, PELLET_FACTOR, PERCENT,
    POINTS_PER_GRAVITY, WATER_GRAVITY,
};
use super::units::grams_to_oz;

/// Original and final gravity of a recipe
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GravityPair {
    pub og: f64,
    pub fg: f64,
}

/// One fermentable's share of the recipe's gravity points
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FermentablePoints {
    pub name: String,
    pub pounds: f64,
    pub mashed: bool,
    pub points: f64,
}

// ============================================================================
// Boil Gravity & Bitterness
// ============================================================================

/// Gravity in the kettle, scaled from OG by the mass-to-boil-volume ratio
pub fn boil_gravity(recipe: &Recipe, og: f64) -> f64 {
    (batch_size(recipe) / boil_size_gallons(recipe)) * (og - WATER_GRAVITY) + WATER_GRAVITY
}

fn form_factor(form: &HopForm) -> f64 {
    match form {
        HopForm::Pellet => PELLET_FACTOR,
        _ => LEAF_FACTOR,
    }
}

/// IBU contributed by a single hop addition (Tinseth)
///
/// `batch_size_gallons` is the recipe's finished volume, not the
/// normalized batch mass.
pub fn hop_ibu(hop: &Hop, batch_size_gallons: f64, gravity: f64) -> f64 {
    let aa = hop.aa.unwrap_or(0.0);
    let bigness = BIGNESS_SCALE * BIGNESS_BASE.powf(gravity - WATER_GRAVITY);
    let boil_time = (1.0 - (BOIL_TIME_SLOPE * hop.time).exp()) / BOIL_TIME_DIVISOR;
    let alpha_acids =
        (aa / PERCENT) * grams_to_oz(hop.grams) * ALPHA_ACID_MG_PER_L / batch_size_gallons;

    bigness * boil_time * form_factor(&hop.form) * alpha_acids
}

/// Recipe IBU: the mean of the bittering hops' contributions
///
/// Hops without alpha acid are left out of both the sum and the count.
/// No bittering hops yields 0.
pub fn calculate_ibu(recipe: &Recipe, og: f64) -> f64 {
    let hops: Vec<&Hop> = recipe.hops.iter().filter(|hop| hop.is_bittering()).collect();
    if hops.is_empty() {
        tracing::debug!("Recipe '{}' has no bittering hops; IBU is 0", recipe.name);
        return 0.0;
    }

    let gravity = boil_gravity(recipe, og);
    let total = hops
        .iter()
        .fold(0.0, |acc, hop| acc + hop_ibu(hop, recipe.batch_size, gravity));

    total / hops.len() as f64
}

// ============================================================================
// Gravity
// ============================================================================

/// Mean yeast attenuation, falling back to 75% when it can't be determined
pub fn average_attenuation(yeasts: &[Yeast]) -> f64 {
    if yeasts.is_empty() {
        return DEFAULT_ATTENUATION;
    }

    let mut total = 0.0;
    for yeast in yeasts {
        match yeast.attenuation {
            Some(attenuation) => total += attenuation,
            None => {
                tracing::debug!(
                    "Yeast '{}' has no attenuation; using {}%",
                    yeast.name,
                    DEFAULT_ATTENUATION
                );
                return DEFAULT_ATTENUATION;
            }
        }
    }

    let mean = total / yeasts.len() as f64;
    if mean == 0.0 || !mean.is_finite() {
        DEFAULT_ATTENUATION
    } else {
        mean
    }
}

/// Gravity points one fermentable adds per gallon of batch
///
/// Mash efficiency discounts only fermentables whose method contains
/// "Mash"; steeped and extract additions are taken at full yield.
pub fn fermentable_points(fermentable: &Fermentable, batch_size: f64, efficiency: f64) -> f64 {
    let pounds = fermentable_pounds(fermentable);
    let potential = (fermentable.ppg - WATER_GRAVITY) * POINTS_PER_GRAVITY * pounds;

    if fermentable.method.contains(MASH_METHOD) {
        potential * (efficiency / PERCENT) / batch_size
    } else {
        potential / batch_size
    }
}

pub fn points_per_gallon(fermentables: &[Fermentable], batch_size: f64, efficiency: f64) -> f64 {
    fermentables.iter().fold(0.0, |acc, fermentable| {
        acc + fermentable_points(fermentable, batch_size, efficiency)
    })
}

/// Per-fermentable points against the normalized batch size, in recipe order
pub fn points_breakdown(recipe: &Recipe) -> Vec<FermentablePoints> {
    let normalized = batch_size(recipe);

    recipe
        .fermentables
        .iter()
        .map(|fermentable| FermentablePoints {
            name: fermentable.name.clone(),
            pounds: fermentable_pounds(fermentable),
            mashed: fermentable.method.contains(MASH_METHOD),
            points: fermentable_points(fermentable, normalized, recipe.efficiency),
        })
        .collect()
}

/// OG and FG; points are taken over the normalized batch size from
/// [`batch_size`], so normalization must precede gravity.
pub fn calculate_gravity(recipe: &Recipe) -> GravityPair {
    let attenuation = average_attenuation(&recipe.yeasts);
    let points = points_per_gallon(&recipe.fermentables, batch_size(recipe), recipe.efficiency);

    let og = points / POINTS_PER_GRAVITY + WATER_GRAVITY;
    let fg = WATER_GRAVITY + ((PERCENT - attenuation) / PERCENT) * (og - WATER_GRAVITY);

    GravityPair { og, fg }
}

// ============================================================================
// Alcohol
// ============================================================================

/// ABV rounded to the nearest whole percent
pub fn calculate_abv(gravity: &GravityPair) -> f64 {
    ((gravity.og - gravity.fg) * ABV_FACTOR).round()
}
