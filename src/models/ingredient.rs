//! Ingredient models
//!
//! Fermentables, hops, yeasts and miscellaneous items with their quantities.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::brewing::units::UnitTag;

/// A numeric amount with the unit it was entered in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    pub amount: f64,
    pub unit: UnitTag,
}

impl Quantity {
    pub fn new(amount: f64, unit: impl Into<UnitTag>) -> Self {
        Self {
            amount,
            unit: unit.into(),
        }
    }
}

/// Zero ounces; contributes nothing to any total
impl Default for Quantity {
    fn default() -> Self {
        Self {
            amount: 0.0,
            unit: UnitTag::Ounce,
        }
    }
}

/// Anything that contributes a tagged quantity to the batch total
pub trait Measured {
    fn quantity(&self) -> &Quantity;
}

/// A malt, sugar or extract
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fermentable {
    #[serde(default)]
    pub name: String,
    /// Weight, expected in kg or lb
    pub weight: Quantity,
    /// Points-per-gallon-per-pound potential
    pub ppg: f64,
    /// Mash, Steep, Extract, ...
    #[serde(default)]
    pub method: String,
}

/// Physical form of a hop addition
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum HopForm {
    Pellet,
    #[default]
    Leaf,
    Other(String),
}

impl HopForm {
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "pellet" | "pellets" => HopForm::Pellet,
            "leaf" | "whole" => HopForm::Leaf,
            _ => HopForm::Other(s.trim().to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            HopForm::Pellet => "Pellet",
            HopForm::Leaf => "Leaf",
            HopForm::Other(s) => s,
        }
    }
}

impl From<String> for HopForm {
    fn from(s: String) -> Self {
        HopForm::parse(&s)
    }
}

impl From<HopForm> for String {
    fn from(form: HopForm) -> Self {
        form.as_str().to_string()
    }
}

impl fmt::Display for HopForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A hop addition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hop {
    #[serde(default)]
    pub name: String,
    #[serde(alias = "weight")]
    pub grams: f64,
    /// Alpha acid percentage; `None` or zero keeps the hop out of IBU
    #[serde(default)]
    pub aa: Option<f64>,
    /// Boil time in minutes
    #[serde(default)]
    pub time: f64,
    #[serde(default, alias = "type")]
    pub form: HopForm,
}

impl Hop {
    /// Whether this hop carries a usable alpha acid value
    pub fn is_bittering(&self) -> bool {
        matches!(self.aa, Some(aa) if aa != 0.0 && !aa.is_nan())
    }
}

/// A yeast pitch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Yeast {
    #[serde(default)]
    pub name: String,
    /// Attenuation percentage (0-100)
    #[serde(default)]
    pub attenuation: Option<f64>,
    #[serde(default)]
    pub quantity: Quantity,
}

impl Measured for Yeast {
    fn quantity(&self) -> &Quantity {
        &self.quantity
    }
}

/// Any other ingredient (nutrients, finings, spices, water salts)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(default)]
    pub name: String,
    pub quantity: Quantity,
}

impl Measured for Item {
    fn quantity(&self) -> &Quantity {
        &self.quantity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hop_form_parse() {
        assert_eq!(HopForm::parse("Pellet"), HopForm::Pellet);
        assert_eq!(HopForm::parse("whole"), HopForm::Leaf);
        assert_eq!(HopForm::parse("Cryo"), HopForm::Other("Cryo".to_string()));
        assert_eq!(HopForm::parse("Plug"), HopForm::Other("Plug".to_string()));
    }

    #[test]
    fn test_hop_accepts_type_alias() {
        let hop: Hop =
            serde_json::from_str(r#"{"grams": 28, "aa": 5.5, "time": 60, "type": "Pellet"}"#)
                .unwrap();
        assert_eq!(hop.form, HopForm::Pellet);
        assert!(hop.is_bittering());
    }

    #[test]
    fn test_hop_without_alpha_acid_is_not_bittering() {
        let missing: Hop = serde_json::from_str(r#"{"grams": 10}"#).unwrap();
        assert!(!missing.is_bittering());
        assert_eq!(missing.form, HopForm::Leaf);

        let zero = Hop { aa: Some(0.0), ..missing };
        assert!(!zero.is_bittering());
    }

    #[test]
    fn test_yeast_quantity_defaults_to_zero() {
        let yeast: Yeast = serde_json::from_str(r#"{"attenuation": 78}"#).unwrap();
        assert_eq!(yeast.attenuation, Some(78.0));
        assert_eq!(yeast.quantity().amount, 0.0);
        assert!(yeast.quantity().unit.is_recognized());
    }
}
