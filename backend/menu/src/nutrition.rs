//! # Nutrition
//!
//! The feed ships nutrition as a positional array with a fixed 12-field schema. A dish
//! only counts as having nutrition when the first cell (calories) is filled in.
use crate::models::{DishItem, NutritionValue};

pub const NUTRITION_LABELS: [&str; 12] = [
    "Calories",
    "Fat (g)",
    "Saturated Fat (g)",
    "Cholesterol (mg)",
    "Sodium (mg)",
    "Carbohydrate (g)",
    "Total Fibre (g)",
    "Sugars (g)",
    "Protein (g)",
    "Vitamin C (mg)",
    "Calcium (mg)",
    "Iron (mg)",
];

pub const MISSING_VALUE: &str = "—";

fn cell(item: &DishItem, index: usize) -> Option<&NutritionValue> {
    item.nutrition
        .as_ref()?
        .get(index)?
        .as_ref()
        .filter(|value| !value.is_blank())
}

pub fn has_nutrition(item: &DishItem) -> bool {
    cell(item, 0).is_some()
}

/// Calories as printed in the station badge.
pub fn calories(item: &DishItem) -> Option<String> {
    cell(item, 0).map(ToString::to_string)
}

/// One row per label, blanks filled with a dash.
pub fn nutrition_rows(item: &DishItem) -> Vec<(&'static str, String)> {
    NUTRITION_LABELS
        .iter()
        .enumerate()
        .map(|(index, &label)| {
            let value = cell(item, index)
                .map_or_else(|| MISSING_VALUE.to_string(), ToString::to_string);

            (label, value)
        })
        .collect()
}
