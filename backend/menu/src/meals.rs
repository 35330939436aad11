use crate::residence::Residence;

pub const BREAKFAST: &str = "Breakfast";
pub const LUNCH: &str = "Lunch";
pub const DINNER: &str = "Dinner";

pub const STANDARD_MEALS: [&str; 3] = [BREAKFAST, LUNCH, DINNER];

/// Meal to show when nobody picked one, from the local hour (0-23).
pub fn default_meal(hour: u32) -> &'static str {
    if hour < 11 {
        BREAKFAST
    } else if hour < 14 {
        LUNCH
    } else {
        DINNER
    }
}

/// Meals a residence offers in the selector.
pub fn meal_options(residence: Residence) -> Vec<&'static str> {
    match residence.special_meal() {
        Some(meal) => vec![meal],
        None => STANDARD_MEALS.to_vec(),
    }
}

pub fn meal_icon(meal: &str) -> &'static str {
    match meal {
        BREAKFAST => "🌅",
        LUNCH => "☀️",
        DINNER => "🌙",
        _ => "🍽️",
    }
}
