//! Conversion ratios and formula constants
//!
//! Every numeric constant used by the calculator lives here so the
//! conversion primitives and the formulas read from one place.

// ============================================================================
// Mass Conversion Ratios
// ============================================================================

/// Ounces per gram
pub const OZ_PER_GRAM: f64 = 0.0352739619;
/// Pounds per ounce
pub const LB_PER_OZ: f64 = 0.0625;
/// Pounds per kilogram
pub const LB_PER_KG: f64 = 2.2046;

// ============================================================================
// Volume Conversion Ratios
// ============================================================================

/// US gallons per liter
pub const GAL_PER_LITER: f64 = 0.26417;
/// US fluid ounces per milliliter
pub const FL_OZ_PER_ML: f64 = 0.033814;
/// Milliliters per liter
pub const ML_PER_LITER: f64 = 1000.0;

// ============================================================================
// Gravity
// ============================================================================

/// Specific gravity of water; every derived gravity is anchored here
pub const WATER_GRAVITY: f64 = 1.0;
/// Gravity points per unit of specific gravity above water
pub const POINTS_PER_GRAVITY: f64 = 1000.0;
/// Attenuation used when a recipe has no usable yeast data (percent)
pub const DEFAULT_ATTENUATION: f64 = 75.0;
/// Substring of a fermentable's method that subjects it to mash efficiency
pub const MASH_METHOD: &str = "Mash";

// ============================================================================
// Bitterness (Tinseth)
// ============================================================================

/// Bigness factor scale
pub const BIGNESS_SCALE: f64 = 1.65;
/// Bigness factor base, raised to (gravity - 1)
pub const BIGNESS_BASE: f64 = 0.000125;
/// Boil time curve slope (per minute)
pub const BOIL_TIME_SLOPE: f64 = -0.04;
/// Boil time curve divisor
pub const BOIL_TIME_DIVISOR: f64 = 4.15;
/// Utilization multiplier for pellet hops
pub const PELLET_FACTOR: f64 = 1.1;
/// Utilization multiplier for every other hop form
pub const LEAF_FACTOR: f64 = 1.0;
/// mg/L of alpha acid per (oz / gal)
pub const ALPHA_ACID_MG_PER_L: f64 = 7490.0;

// ============================================================================
// Alcohol
// ============================================================================

/// ABV per unit of gravity drop (125 * 1.05)
pub const ABV_FACTOR: f64 = 131.25;

/// Percentages are stored as 0-100
pub const PERCENT: f64 = 100.0;
