//! # Dish Icons
//!
//! Picks an emoji for a dish by keyword. Rules are tried top to bottom against the
//! lowercased name and the first hit wins, so order is part of the contract: the bun and
//! dumpling rule must sit above bread, `eggplant` above `egg`, and so on.
use std::sync::LazyLock;

use regex::Regex;

pub const DEFAULT_ICON: &str = "🍽️";

const RULES: [(&str, &str); 29] = [
    ("bao|steam.*bun|chinese.*bun|bun|dumpling|samosa", "🥟"),
    ("ramen|noodle", "🍜"),
    ("cheese", "🧀"),
    ("poke|sushi|sashimi", "🍣"),
    ("burger|patty", "🍔"),
    ("chicken|poultry|pork", "🍗"),
    ("fish|salmon|tuna|seafood", "🐟"),
    ("shrimp|prawn", "🦐"),
    ("tofu|vegetarian|vegan", "🥬"),
    ("steak|rib", "🥩"),
    ("pizza|pie", "🍕"),
    ("sandwich|sub", "🥪"),
    ("taco|burrito|wrap", "🌮"),
    ("pasta|lasagna|avioli", "🍝"),
    ("pita|naan|tortilla", "🫓"),
    ("rice|grain", "🍚"),
    ("salad|greens", "🥗"),
    ("soup|broth|bowl|stew", "🍲"),
    ("potato|fries", "🥔"),
    ("vegetable|veggie", "🥕"),
    ("fruit|berry", "🍓"),
    ("bread|toast", "🍞"),
    ("dessert|cake|cookie|pudding|brownie", "🍰"),
    ("donut|doughnut", "🍩"),
    ("ice cream|gelato|sorbet", "🍨"),
    ("eggplant", "🍆"),
    ("fish|cod|salmon|haddock", "🐟"),
    ("egg|omelette", "🍳"),
    ("bacon|sausage", "🥓"),
];

pub struct IconRule {
    pub pattern: Regex,
    pub icon: &'static str,
}

static ICON_RULES: LazyLock<Vec<IconRule>> = LazyLock::new(|| {
    RULES
        .iter()
        .map(|&(pattern, icon)| IconRule {
            pattern: Regex::new(pattern).expect("icon patterns compile"),
            icon,
        })
        .collect()
});

pub fn rules() -> &'static [IconRule] {
    &ICON_RULES
}

pub fn classify(dish_name: &str) -> &'static str {
    let name = dish_name.to_lowercase();

    rules()
        .iter()
        .find(|rule| rule.pattern.is_match(&name))
        .map_or(DEFAULT_ICON, |rule| rule.icon)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("Create Your Own Chinese Steam Bun Bao", "🥟")]
    #[case("Build Your Own Ramen", "🍜")]
    #[case("Poke Bowl", "🍣")]
    #[case("Build Your Own Loaded Baked Potato", "🥔")]
    #[case("Beef Burger", "🍔")]
    #[case("Chicken Balls", "🍗")]
    #[case("Grilled Haddock", "🐟")]
    #[case("Roasted Eggplant", "🍆")]
    #[case("Scrambled Eggs", "🍳")]
    #[case("Maple Breakfast Sausage", "🥓")]
    #[case("Butter Chicken with Rice", "🍗")]
    #[case("Mango Sorbet", "🍨")]
    fn test_known_dishes(#[case] name: &str, #[case] expected: &str) {
        assert_eq!(classify(name), expected);
    }

    #[test]
    fn test_bun_beats_bread() {
        assert_eq!(classify("Sweet Bun Bread"), "🥟");
        assert_eq!(classify("Garlic Bread"), "🍞");
    }

    #[test]
    fn test_cheese_beats_pizza() {
        assert_eq!(classify("Cheese Pizza"), "🧀");
        assert_eq!(classify("Pepperoni Pizza"), "🍕");
    }

    #[test]
    fn test_default_icon() {
        assert_eq!(classify("Hummus"), DEFAULT_ICON);
        assert_eq!(classify(""), DEFAULT_ICON);
    }

    #[test]
    fn test_case_insensitive_and_deterministic() {
        assert_eq!(classify("RAMEN"), classify("ramen"));
        assert_eq!(classify("Veggie Lasagna"), classify("Veggie Lasagna"));
    }

    #[test]
    fn test_rule_table_order() {
        let icons: Vec<&str> = rules().iter().map(|rule| rule.icon).collect();

        assert_eq!(icons.len(), 29);
        assert_eq!(icons.first(), Some(&"🥟"));
        assert_eq!(icons[25], "🍆");
        assert_eq!(icons[27], "🍳");
        assert_eq!(icons.last(), Some(&"🥓"));
    }
}
