use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Number;

pub const ENDPOINT: &str = "https://uoft-menu-api.vercel.app/api/menu";

/// Residence name to its meals, in feed order.
pub type MenuDataset = IndexMap<String, ResidenceMenu>;

/// Meal period name to its stations, in feed order.
pub type ResidenceMenu = IndexMap<String, MealMenu>;

/// Station name to its dishes. Station order is the order keys appear in the feed.
pub type MealMenu = IndexMap<String, Vec<DishItem>>;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct DishItem {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uom: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<Vec<Option<NutritionValue>>>,
}

impl DishItem {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            uom: None,
            nutrition: None,
        }
    }
}

/// A single nutrition cell. The feed mixes numbers and strings, with `""` for blanks.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum NutritionValue {
    Number(Number),
    Text(String),
}

impl NutritionValue {
    pub fn is_blank(&self) -> bool {
        match self {
            NutritionValue::Number(_) => false,
            NutritionValue::Text(text) => text.is_empty(),
        }
    }
}

impl fmt::Display for NutritionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NutritionValue::Number(number) => write!(f, "{number}"),
            NutritionValue::Text(text) => f.write_str(text),
        }
    }
}
