//! Unit conversion primitives and unit tags
//!
//! These are the only functions that know conversion ratios. Everything
//! else in the calculator routes quantities through them.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::constants::{
    FL_OZ_PER_ML, GAL_PER_LITER, LB_PER_KG, LB_PER_OZ, ML_PER_LITER, OZ_PER_GRAM,
};

/// A unit tag attached to an ingredient quantity
///
/// Unrecognized tags are kept verbatim and treated as already canonical by
/// the aggregations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum UnitTag {
    Gram,
    Kilogram,
    Ounce,
    Pound,
    Milliliter,
    Liter,
    Gallon,
    Other(String),
}

impl UnitTag {
    /// Parse a unit string. Never fails; unknown strings become `Other`.
    pub fn parse(s: &str) -> Self {
        let lower = s.trim().to_lowercase();

        match lower.as_str() {
            "g" | "gram" | "grams" => UnitTag::Gram,
            "kg" | "kilogram" | "kilograms" => UnitTag::Kilogram,
            "oz" | "ounce" | "ounces" => UnitTag::Ounce,
            "lb" | "lbs" | "pound" | "pounds" => UnitTag::Pound,
            "ml" | "milliliter" | "milliliters" | "millilitre" | "millilitres" => {
                UnitTag::Milliliter
            }
            "l" | "liter" | "liters" | "litre" | "litres" => UnitTag::Liter,
            "gal" | "gallon" | "gallons" => UnitTag::Gallon,
            _ => UnitTag::Other(s.trim().to_string()),
        }
    }

    /// Canonical short string for this tag
    pub fn as_str(&self) -> &str {
        match self {
            UnitTag::Gram => "g",
            UnitTag::Kilogram => "kg",
            UnitTag::Ounce => "oz",
            UnitTag::Pound => "lb",
            UnitTag::Milliliter => "ml",
            UnitTag::Liter => "l",
            UnitTag::Gallon => "gal",
            UnitTag::Other(s) => s,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, UnitTag::Other(_))
    }
}

impl From<String> for UnitTag {
    fn from(s: String) -> Self {
        UnitTag::parse(&s)
    }
}

impl From<&str> for UnitTag {
    fn from(s: &str) -> Self {
        UnitTag::parse(s)
    }
}

impl From<UnitTag> for String {
    fn from(tag: UnitTag) -> Self {
        tag.as_str().to_string()
    }
}

impl fmt::Display for UnitTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Mass
// ============================================================================

pub fn grams_to_oz(grams: f64) -> f64 {
    grams * OZ_PER_GRAM
}

pub fn oz_to_lb(oz: f64) -> f64 {
    oz * LB_PER_OZ
}

/// Grams to pounds, composed through ounces
pub fn grams_to_lb(grams: f64) -> f64 {
    oz_to_lb(grams_to_oz(grams))
}

pub fn kg_to_lb(kg: f64) -> f64 {
    kg * LB_PER_KG
}

pub fn oz_to_grams(oz: f64) -> f64 {
    oz / OZ_PER_GRAM
}

pub fn lb_to_oz(lb: f64) -> f64 {
    lb / LB_PER_OZ
}

pub fn lb_to_kg(lb: f64) -> f64 {
    lb / LB_PER_KG
}

// ============================================================================
// Volume
// ============================================================================

pub fn liters_to_gallons(liters: f64) -> f64 {
    liters * GAL_PER_LITER
}

pub fn ml_to_fl_oz(ml: f64) -> f64 {
    ml * FL_OZ_PER_ML
}

pub fn gallons_to_liters(gallons: f64) -> f64 {
    gallons / GAL_PER_LITER
}

pub fn fl_oz_to_ml(fl_oz: f64) -> f64 {
    fl_oz / FL_OZ_PER_ML
}

pub fn ml_to_liters(ml: f64) -> f64 {
    ml / ML_PER_LITER
}

pub fn liters_to_ml(liters: f64) -> f64 {
    liters * ML_PER_LITER
}

// ============================================================================
// Tag-to-tag Conversion
// ============================================================================

// Mass tags pivot through pounds, volume tags through gallons. `oz` is a
// mass ounce next to a mass tag and a fluid ounce next to a volume tag.

fn mass_to_lb(value: f64, tag: &UnitTag) -> Option<f64> {
    match tag {
        UnitTag::Gram => Some(grams_to_lb(value)),
        UnitTag::Kilogram => Some(kg_to_lb(value)),
        UnitTag::Ounce => Some(oz_to_lb(value)),
        UnitTag::Pound => Some(value),
        _ => None,
    }
}

fn lb_to_mass(lb: f64, tag: &UnitTag) -> Option<f64> {
    match tag {
        UnitTag::Gram => Some(oz_to_grams(lb_to_oz(lb))),
        UnitTag::Kilogram => Some(lb_to_kg(lb)),
        UnitTag::Ounce => Some(lb_to_oz(lb)),
        UnitTag::Pound => Some(lb),
        _ => None,
    }
}

fn volume_to_gal(value: f64, tag: &UnitTag) -> Option<f64> {
    match tag {
        UnitTag::Milliliter => Some(liters_to_gallons(ml_to_liters(value))),
        UnitTag::Ounce => Some(liters_to_gallons(ml_to_liters(fl_oz_to_ml(value)))),
        UnitTag::Liter => Some(liters_to_gallons(value)),
        UnitTag::Gallon => Some(value),
        _ => None,
    }
}

fn gal_to_volume(gal: f64, tag: &UnitTag) -> Option<f64> {
    let liters = gallons_to_liters(gal);
    match tag {
        UnitTag::Milliliter => Some(liters_to_ml(liters)),
        UnitTag::Ounce => Some(ml_to_fl_oz(liters_to_ml(liters))),
        UnitTag::Liter => Some(liters),
        UnitTag::Gallon => Some(gal),
        _ => None,
    }
}

/// Convert `value` between two recognized tags of the same dimension
///
/// Returns `None` for unrecognized tags and for mass/volume mixes.
pub fn convert(value: f64, from: &UnitTag, to: &UnitTag) -> Option<f64> {
    if from == to {
        return from.is_recognized().then_some(value);
    }

    let as_mass = mass_to_lb(value, from).and_then(|lb| lb_to_mass(lb, to));
    if as_mass.is_some() {
        return as_mass;
    }

    volume_to_gal(value, from).and_then(|gal| gal_to_volume(gal, to))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_zero_maps_to_zero() {
        assert_eq!(liters_to_gallons(0.0), 0.0);
        assert_eq!(grams_to_oz(0.0), 0.0);
        assert_eq!(kg_to_lb(0.0), 0.0);
        assert_eq!(oz_to_lb(0.0), 0.0);
        assert_eq!(ml_to_fl_oz(0.0), 0.0);
        assert_eq!(ml_to_liters(0.0), 0.0);
    }

    #[test]
    fn test_known_ratios() {
        assert!((grams_to_oz(28.0) - 0.987670933).abs() < 1e-9);
        assert!((oz_to_lb(16.0) - 1.0).abs() < 1e-12);
        assert!((kg_to_lb(1.0) - 2.2046).abs() < 1e-12);
        assert!((liters_to_gallons(20.0) - 5.2834).abs() < 1e-9);
        assert!((ml_to_fl_oz(100.0) - 3.3814).abs() < 1e-9);
    }

    #[test]
    fn test_grams_to_lb_composes_through_ounces() {
        assert!((grams_to_lb(453.592) - 453.592 * 0.0352739619 * 0.0625).abs() < 1e-12);
    }

    #[test]
    fn test_kg_round_trip() {
        let kg = 4.5;
        let back = lb_to_kg(kg_to_lb(kg));
        assert!(((back - kg) / kg).abs() < 1e-6);
    }

    #[test]
    fn test_parse_tags() {
        assert_eq!(UnitTag::parse("kg"), UnitTag::Kilogram);
        assert_eq!(UnitTag::parse(" Pounds "), UnitTag::Pound);
        assert_eq!(UnitTag::parse("mL"), UnitTag::Milliliter);
        assert_eq!(UnitTag::parse("Litres"), UnitTag::Liter);
        assert_eq!(UnitTag::parse("pkg"), UnitTag::Other("pkg".to_string()));
        assert!(!UnitTag::parse("tsp").is_recognized());
    }

    #[test]
    fn test_tag_serde_round_trip() {
        let tag: UnitTag = serde_json::from_str("\"kilograms\"").unwrap();
        assert_eq!(tag, UnitTag::Kilogram);
        assert_eq!(serde_json::to_string(&tag).unwrap(), "\"kg\"");

        let other: UnitTag = serde_json::from_str("\"each\"").unwrap();
        assert_eq!(serde_json::to_string(&other).unwrap(), "\"each\"");
    }

    #[test]
    fn test_convert_pairs() {
        let gal = convert(10.0, &UnitTag::Liter, &UnitTag::Gallon).unwrap();
        assert!((gal - 2.6417).abs() < 1e-9);

        let lb = convert(2.0, &UnitTag::Kilogram, &UnitTag::Pound).unwrap();
        assert!((lb - 4.4092).abs() < 1e-9);

        assert_eq!(convert(3.0, &UnitTag::Pound, &UnitTag::Pound), Some(3.0));
        assert_eq!(convert(1.0, &UnitTag::Gram, &UnitTag::Liter), None);
        assert_eq!(convert(1.0, &UnitTag::Liter, &UnitTag::Kilogram), None);
        assert_eq!(convert(1.0, &UnitTag::parse("each"), &UnitTag::parse("each")), None);
        assert_eq!(convert(1.0, &UnitTag::parse("cup"), &UnitTag::Milliliter), None);
    }

    #[test]
    fn test_convert_within_mass() {
        let g = convert(2.0, &UnitTag::Kilogram, &UnitTag::Gram).unwrap();
        assert!((g - 2.0 * 2.2046 / 0.0625 / 0.0352739619).abs() < 1e-9);
        assert!((g - 2000.0).abs() < 1.0);

        let kg = convert(g, &UnitTag::Gram, &UnitTag::Kilogram).unwrap();
        assert!((kg - 2.0).abs() < 1e-9);

        let kg = convert(16.0, &UnitTag::Ounce, &UnitTag::Kilogram).unwrap();
        assert!((kg - 1.0 / 2.2046).abs() < 1e-12);
    }

    #[test]
    fn test_convert_within_volume() {
        let ml = convert(2.0, &UnitTag::Liter, &UnitTag::Milliliter).unwrap();
        assert!((ml - 2000.0).abs() < 1e-9);

        let ml = convert(1.0, &UnitTag::Gallon, &UnitTag::Milliliter).unwrap();
        assert!((ml - 1000.0 / 0.26417).abs() < 1e-9);

        let gal = convert(ml, &UnitTag::Milliliter, &UnitTag::Gallon).unwrap();
        assert!((gal - 1.0).abs() < 1e-9);

        // 1 gal is about 128 fl oz with these ratios
        let fl_oz = convert(1.0, &UnitTag::Gallon, &UnitTag::Ounce).unwrap();
        assert!((fl_oz - 1000.0 / 0.26417 * 0.033814).abs() < 1e-9);
        assert!((fl_oz - 128.0).abs() < 0.1);

        let ml = convert(10.0, &UnitTag::Ounce, &UnitTag::Milliliter).unwrap();
        assert!((ml - 10.0 / 0.033814).abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn conversions_are_linear(x in 0.0f64..1.0e6) {
            let fns: [fn(f64) -> f64; 7] = [
                grams_to_oz, oz_to_lb, kg_to_lb, liters_to_gallons, ml_to_fl_oz, grams_to_lb,
                ml_to_liters,
            ];
            for f in fns {
                let lhs = f(2.0 * x);
                let rhs = 2.0 * f(x);
                prop_assert!((lhs - rhs).abs() <= 1e-9 * rhs.abs().max(1.0));
            }
        }

        #[test]
        fn gallons_round_trip(x in 0.001f64..1.0e4) {
            let back = gallons_to_liters(liters_to_gallons(x));
            prop_assert!(((back - x) / x).abs() < 1e-6);
        }
    }
}
