//! Loading recipes from JSON the way a collaborator hands them over.

use brewcalc::brewing::{batch_size, boil_size_gallons, calculate_gravity, calculate_ibu};
use brewcalc::models::{Recipe, RecipeError};

const MIXED_UNITS: &str = r#"{
    "name": "Metric Stout",
    "batchSize": 5.0,
    "boilSize": {"amount": 25.0, "unit": "L"},
    "mashEfficiency": 70,
    "fermentables": [
        {"name": "Maris Otter", "weight": {"amount": 4.0, "unit": "kg"}, "ppg": 1.038, "method": "Mash"},
        {"name": "Roasted barley", "weight": {"amount": 0.5, "unit": "lb"}, "ppg": 1.025, "method": "Steep"}
    ],
    "hops": [
        {"name": "EKG", "weight": 50, "aa": 5.0, "time": 60, "type": "Leaf"},
        {"name": "Unknown", "grams": 10}
    ],
    "yeasts": [
        {"name": "S-04", "attenuation": 73, "quantity": {"amount": 11.5, "unit": "g"}},
        {"name": "Starter", "attenuation": 77, "quantity": {"amount": 200, "unit": "ml"}}
    ],
    "items": [
        {"name": "Whirlfloc", "quantity": {"amount": 1, "unit": "tablet"}}
    ]
}"#;

#[test]
fn mixed_units_are_normalized() {
    let recipe = Recipe::from_json(MIXED_UNITS).unwrap();

    let fermentables = 4.0 * 2.2046 + 0.5;
    let hops = (50.0 + 10.0) * 0.0352739619 * 0.0625;
    let yeasts = (11.5 * 0.0352739619 + 200.0 * 0.033814) * 0.0625;
    let items = 1.0 * 0.0625;
    let expected = fermentables + hops + yeasts + items;

    assert!((batch_size(&recipe) - expected).abs() < 1e-12);
    assert!((boil_size_gallons(&recipe) - 25.0 * 0.26417).abs() < 1e-12);
}

#[test]
fn mixed_units_gravity() {
    let recipe = Recipe::from_json(MIXED_UNITS).unwrap();
    let gravity = calculate_gravity(&recipe);

    let normalized = batch_size(&recipe);
    let mashed = 0.038 * 1000.0 * (4.0 * 2.2046) * 0.70 / normalized;
    let steeped = 0.025 * 1000.0 * 0.5 / normalized;
    let og = (mashed + steeped) / 1000.0 + 1.0;
    let fg = 1.0 + ((100.0 - 75.0) / 100.0) * (og - 1.0);

    assert!((gravity.og - og).abs() < 1e-9);
    assert!((gravity.fg - fg).abs() < 1e-9);

    // one of two hops carries alpha acid
    assert!(calculate_ibu(&recipe, gravity.og) > 0.0);
}

#[test]
fn single_yeast_attenuation_sets_final_gravity() {
    let mut json: serde_json::Value = serde_json::from_str(MIXED_UNITS).unwrap();
    json["yeasts"] = serde_json::json!([
        {"name": "WLP001", "attenuation": 80, "quantity": {"amount": 11.5, "unit": "g"}}
    ]);
    let recipe: Recipe = serde_json::from_value(json).unwrap();

    let gravity = calculate_gravity(&recipe);
    assert!(gravity.og > 1.0);
    assert!((gravity.fg - (1.0 + 0.20 * (gravity.og - 1.0))).abs() < 1e-12);
}

#[test]
fn recipe_file_round_trip() {
    let path = std::env::temp_dir().join(format!("brewcalc-{}.json", std::process::id()));
    std::fs::write(&path, MIXED_UNITS).unwrap();

    let loaded = Recipe::from_path(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    let reparsed: Recipe = serde_json::from_str(&serde_json::to_string(&loaded).unwrap()).unwrap();
    assert_eq!(loaded, reparsed);
    assert_eq!(loaded.hops.len(), 2);
}

#[test]
fn malformed_recipe_is_reported() {
    let err = Recipe::from_json(r#"{"batch_size": 5}"#).unwrap_err();
    assert!(matches!(err, RecipeError::Json(_)));
    assert!(err.to_string().starts_with("Malformed recipe JSON"));
}
