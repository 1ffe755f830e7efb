//! Brewing calculation module
//!
//! Unit conversion, batch normalization and the gravity/IBU/ABV formulas.

pub mod batch;
pub mod constants;
pub mod formulas;
pub mod units;

pub use batch::{batch_size, boil_size_gallons};
pub use formulas::{
    boil_gravity, calculate_abv, calculate_gravity, calculate_ibu, fermentable_points,
    points_breakdown, points_per_gallon, FermentablePoints, GravityPair,
};
pub use units::UnitTag;
