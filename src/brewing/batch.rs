//! Batch normalization
//!
//! Folds every ingredient quantity into one mass figure in pounds, and
//! normalizes the kettle volume to gallons.

use crate::models::{Fermentable, Hop, Measured, Quantity, Recipe};

use super::units::{grams_to_oz, kg_to_lb, liters_to_gallons, ml_to_fl_oz, oz_to_lb, UnitTag};

fn pass_through(quantity: &Quantity, context: &str) -> f64 {
    if let UnitTag::Other(tag) = &quantity.unit {
        tracing::debug!("Unrecognized {} unit tag '{}' passed through as canonical", context, tag);
    }
    quantity.amount
}

/// Weight of a fermentable in pounds
///
/// Kilograms are converted, every other tag is taken as pounds already.
pub fn fermentable_pounds(fermentable: &Fermentable) -> f64 {
    let weight = &fermentable.weight;
    match weight.unit {
        UnitTag::Kilogram => kg_to_lb(weight.amount),
        _ => pass_through(weight, "fermentable"),
    }
}

/// Ounce equivalent of a tagged item quantity
///
/// Grams become ounces, milliliters become fluid ounces (counted as ounces
/// for the batch total), anything else passes through.
pub fn ounce_equivalent(quantity: &Quantity) -> f64 {
    match &quantity.unit {
        UnitTag::Gram => grams_to_oz(quantity.amount),
        UnitTag::Milliliter => ml_to_fl_oz(quantity.amount),
        _ => pass_through(quantity, "item"),
    }
}

pub fn fermentables_pounds(fermentables: &[Fermentable]) -> f64 {
    fermentables.iter().map(fermentable_pounds).fold(0.0, |acc, lb| acc + lb)
}

/// Total hop mass in pounds; summed in ounces and converted once
pub fn hops_pounds(hops: &[Hop]) -> f64 {
    let ounces = hops.iter().fold(0.0, |acc, hop| acc + grams_to_oz(hop.grams));
    oz_to_lb(ounces)
}

/// Total mass of tagged items in pounds; summed in ounces and converted once
pub fn measured_pounds<T: Measured>(items: &[T]) -> f64 {
    let ounces = items
        .iter()
        .fold(0.0, |acc, item| acc + ounce_equivalent(item.quantity()));
    oz_to_lb(ounces)
}

/// Total recipe mass in pounds
pub fn batch_size(recipe: &Recipe) -> f64 {
    fermentables_pounds(&recipe.fermentables)
        + hops_pounds(&recipe.hops)
        + measured_pounds(&recipe.yeasts)
        + measured_pounds(&recipe.items)
}

/// Boil size in US gallons
///
/// Liters are converted; gallons and unrecognized tags pass through.
pub fn boil_size_gallons(recipe: &Recipe) -> f64 {
    let boil = &recipe.boil_size;
    match boil.unit {
        UnitTag::Liter => liters_to_gallons(boil.amount),
        _ => pass_through(boil, "boil size"),
    }
}
