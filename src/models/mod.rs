//! Data models
//!
//! Plain value types describing a recipe as handed over by a loader or UI.

mod ingredient;
mod recipe;

pub use ingredient::{Fermentable, Hop, HopForm, Item, Measured, Quantity, Yeast};
pub use recipe::{Recipe, RecipeError, RecipeResult};
