//! # Menu View
//!
//! Derives what the page shows for one (residence, meal) selection.
//!
//! ## Featured
//! Special residences feature every dish of the meal and skip the station listing.
//! Everyone else gets a fixed recipe, each step skipped when its station is missing:
//! - first dish of Pan Station
//! - first dish of Foodie Finds
//! - up to three dishes each of Dinner, Lunch, then Breakfast Entree
//!
//! ## Stations
//! Known stations come first in [`STATION_ORDER`], the rest follow in feed order.
//! Dishes past [`VISIBLE_ITEMS`] are flagged as overflow for the collapsed listing.
use serde::Serialize;
use tracing::debug;

use crate::{
    icons::classify,
    models::{DishItem, MealMenu, MenuDataset},
    state::Selection,
};

pub const STATION_ORDER: [&str; 11] = [
    "Pan Station",
    "Foodie Finds",
    "Dinner Entree",
    "Lunch Entree",
    "Breakfast Entree",
    "Soup",
    "Pizza and Bake Station",
    "Grill",
    "Deli Bar",
    "Salad Bar",
    "Dessert",
];

/// (station, how many leading dishes) in featured order.
pub const FEATURED_RECIPE: [(&str, usize); 5] = [
    ("Pan Station", 1),
    ("Foodie Finds", 1),
    ("Dinner Entree", 3),
    ("Lunch Entree", 3),
    ("Breakfast Entree", 3),
];

pub const VISIBLE_ITEMS: usize = 4;

pub const LOADING_MESSAGE: &str = "Loading menu...";
pub const RESIDENCE_NOT_FOUND_MESSAGE: &str = "Residence not found.";
pub const NO_MENU_MESSAGE: &str = "No menu available for this meal.";
pub const NO_FEATURED_MESSAGE: &str = "No featured dishes available";

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct FeaturedDish {
    #[serde(flatten)]
    pub item: DishItem,
    pub icon: &'static str,
}

impl FeaturedDish {
    fn new(item: &DishItem) -> Self {
        Self {
            item: item.clone(),
            icon: classify(&item.name),
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct StationItem {
    #[serde(flatten)]
    pub item: DishItem,
    pub icon: &'static str,
    pub overflow: bool,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Station {
    pub name: String,
    pub items: Vec<StationItem>,
}

impl Station {
    fn new(name: &str, items: &[DishItem]) -> Self {
        let items = items
            .iter()
            .enumerate()
            .map(|(index, item)| StationItem {
                item: item.clone(),
                icon: classify(&item.name),
                overflow: index >= VISIBLE_ITEMS,
            })
            .collect();

        Self {
            name: name.to_string(),
            items,
        }
    }

    /// Dishes hidden while the station is collapsed.
    pub fn hidden_count(&self) -> usize {
        self.items.iter().filter(|item| item.overflow).count()
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum MenuView {
    Loading,
    ResidenceNotFound,
    NoMenu,
    Ready {
        featured: Vec<FeaturedDish>,
        stations: Vec<Station>,
    },
}

impl MenuView {
    /// Placeholder for the empty states, `None` once there is a menu.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            MenuView::Loading => Some(LOADING_MESSAGE),
            MenuView::ResidenceNotFound => Some(RESIDENCE_NOT_FOUND_MESSAGE),
            MenuView::NoMenu => Some(NO_MENU_MESSAGE),
            MenuView::Ready { .. } => None,
        }
    }
}

pub fn build_view(dataset: Option<&MenuDataset>, selection: &Selection) -> MenuView {
    let Some(dataset) = dataset.filter(|dataset| !dataset.is_empty()) else {
        debug!("Menu not loaded yet");
        return MenuView::Loading;
    };

    let Some(residence_menu) = dataset.get(selection.residence.name()) else {
        debug!("No menu for residence {}", selection.residence);
        return MenuView::ResidenceNotFound;
    };

    let Some(meal_menu) = residence_menu
        .get(&selection.meal)
        .filter(|meal_menu| !meal_menu.is_empty())
    else {
        debug!("No menu for {} at {}", selection.meal, selection.residence);
        return MenuView::NoMenu;
    };

    if selection.residence.is_special() {
        debug!("{} features every dish", selection.residence);

        return MenuView::Ready {
            featured: all_items(meal_menu).map(FeaturedDish::new).collect(),
            stations: Vec::new(),
        };
    }

    MenuView::Ready {
        featured: featured(meal_menu),
        stations: stations(meal_menu),
    }
}

fn all_items(meal_menu: &MealMenu) -> impl Iterator<Item = &DishItem> {
    meal_menu.values().flatten()
}

pub fn featured(meal_menu: &MealMenu) -> Vec<FeaturedDish> {
    let mut featured = Vec::new();

    for (station, count) in FEATURED_RECIPE {
        let Some(items) = meal_menu.get(station) else {
            continue;
        };

        for item in items.iter().take(count) {
            debug!("Featuring {} from {station}", item.name);
            featured.push(FeaturedDish::new(item));
        }
    }

    featured
}

pub fn stations(meal_menu: &MealMenu) -> Vec<Station> {
    let known = STATION_ORDER
        .iter()
        .filter_map(|&name| meal_menu.get_key_value(name));

    let remaining = meal_menu
        .iter()
        .filter(|(name, _)| !STATION_ORDER.contains(&name.as_str()));

    known
        .chain(remaining)
        .map(|(name, items)| Station::new(name, items))
        .collect()
}
