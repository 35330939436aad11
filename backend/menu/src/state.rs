use thiserror::Error;
use tracing::info;

use crate::{
    location::residence_from_location,
    meals::{default_meal, meal_options},
    models::MenuDataset,
    residence::Residence,
    view::{MenuView, build_view},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub residence: Residence,
    pub meal: String,
}

impl Selection {
    /// Selection a residence opens on when nothing was chosen yet.
    pub fn opening(residence: Residence, hour: u32) -> Self {
        Self {
            residence,
            meal: residence
                .special_meal()
                .unwrap_or_else(|| default_meal(hour))
                .to_string(),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum SelectionError {
    #[error("{residence} does not serve {meal}")]
    UnknownMeal { residence: Residence, meal: String },
}

/// Everything the page tracks between renders: the dataset once fetched, the current
/// selection, and the meal the user last picked so it survives switching residence.
#[derive(Debug, Clone)]
pub struct MenuState {
    dataset: Option<MenuDataset>,
    selection: Selection,
    chosen_meal: Option<String>,
    default_residence: Residence,
}

impl MenuState {
    pub fn new(residence: Residence, hour: u32) -> Self {
        Self {
            dataset: None,
            selection: Selection::opening(residence, hour),
            chosen_meal: None,
            default_residence: Residence::default(),
        }
    }

    /// Residence used when a location can't be resolved.
    pub fn with_default_residence(mut self, residence: Residence) -> Self {
        self.default_residence = residence;
        self
    }

    pub fn from_location(location: &str, default: Residence, hour: u32) -> Self {
        let residence = residence_from_location(location, default);

        Self::new(residence, hour).with_default_residence(default)
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Swaps in a freshly fetched dataset.
    pub fn load(&mut self, dataset: MenuDataset) {
        info!("Loaded menus for {} residences", dataset.len());
        self.dataset = Some(dataset);
    }

    pub fn select_residence(&mut self, residence: Residence, hour: u32) {
        self.selection.residence = residence;

        if let Some(meal) = residence.special_meal() {
            self.selection.meal = meal.to_string();
            self.chosen_meal = None;
            return;
        }

        let meal = self
            .chosen_meal
            .get_or_insert_with(|| default_meal(hour).to_string());
        self.selection.meal = meal.clone();
    }

    pub fn select_meal(&mut self, meal: &str) -> Result<(), SelectionError> {
        let residence = self.selection.residence;
        let Some(meal) = meal_options(residence)
            .into_iter()
            .find(|option| option.eq_ignore_ascii_case(meal.trim()))
        else {
            return Err(SelectionError::UnknownMeal {
                residence,
                meal: meal.to_string(),
            });
        };

        self.selection.meal = meal.to_string();
        if !residence.is_special() {
            self.chosen_meal = Some(meal.to_string());
        }

        Ok(())
    }

    /// Back/forward navigation: the residence comes from the location, the meal choice
    /// carries over without being recorded.
    pub fn navigate(&mut self, location: &str, hour: u32) {
        let residence = residence_from_location(location, self.default_residence);
        self.selection.residence = residence;

        if let Some(meal) = residence.special_meal() {
            self.selection.meal = meal.to_string();
            self.chosen_meal = None;
        } else {
            self.selection.meal = self
                .chosen_meal
                .clone()
                .unwrap_or_else(|| default_meal(hour).to_string());
        }
    }

    pub fn view(&self) -> MenuView {
        build_view(self.dataset.as_ref(), &self.selection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DANFORTH: &str = "Foodie Finds featuring Taste of the Danforth";

    #[test]
    fn test_opening_meal() {
        assert_eq!(MenuState::new(Residence::Chestnut, 8).selection().meal, "Breakfast");
        assert_eq!(MenuState::new(Residence::Chestnut, 12).selection().meal, "Lunch");
        assert_eq!(MenuState::new(Residence::Robarts, 8).selection().meal, DANFORTH);
    }

    #[test]
    fn test_from_location() {
        let state = MenuState::from_location("?res=oak", Residence::Chestnut, 18);

        assert_eq!(
            state.selection(),
            &Selection {
                residence: Residence::OakHouse,
                meal: "Dinner".to_string()
            }
        );
        assert_eq!(
            MenuState::from_location("?res=nowhere", Residence::NewCollege, 18)
                .selection()
                .residence,
            Residence::NewCollege
        );
    }

    #[test]
    fn test_special_residence_clears_meal_choice() {
        let mut state = MenuState::new(Residence::Chestnut, 8);
        state.select_meal("dinner").unwrap();

        state.select_residence(Residence::Robarts, 8);
        assert_eq!(state.selection().meal, DANFORTH);

        state.select_residence(Residence::OakHouse, 8);
        assert_eq!(state.selection().meal, "Breakfast");
    }

    #[test]
    fn test_residence_switch_records_default_meal() {
        let mut state = MenuState::new(Residence::Chestnut, 12);

        state.select_residence(Residence::NewCollege, 12);
        assert_eq!(state.selection().meal, "Lunch");

        state.select_residence(Residence::CampusOne, 20);
        assert_eq!(state.selection().meal, "Lunch");
    }

    #[test]
    fn test_select_meal() {
        let mut state = MenuState::new(Residence::Chestnut, 8);

        state.select_meal(" LUNCH ").unwrap();
        assert_eq!(state.selection().meal, "Lunch");

        assert_eq!(
            state.select_meal("Brunch"),
            Err(SelectionError::UnknownMeal {
                residence: Residence::Chestnut,
                meal: "Brunch".to_string()
            })
        );
        assert_eq!(state.selection().meal, "Lunch");
    }

    #[test]
    fn test_special_meal_not_remembered() {
        let mut state = MenuState::new(Residence::Robarts, 8);

        state.select_meal(DANFORTH).unwrap();
        assert!(state.select_meal("Dinner").is_err());

        state.select_residence(Residence::Chestnut, 19);
        assert_eq!(state.selection().meal, "Dinner");
    }

    #[test]
    fn test_navigate() {
        let mut state = MenuState::new(Residence::Chestnut, 8);
        state.select_meal("Lunch").unwrap();

        state.navigate("?residence=robarts", 8);
        assert_eq!(state.selection().residence, Residence::Robarts);
        assert_eq!(state.selection().meal, DANFORTH);

        state.navigate("?residence=oak", 20);
        assert_eq!(state.selection().residence, Residence::OakHouse);
        assert_eq!(state.selection().meal, "Dinner");

        state.navigate("?residence=newcollege", 8);
        assert_eq!(state.selection().meal, "Breakfast");
    }

    #[test]
    fn test_view_before_load() {
        assert_eq!(MenuState::new(Residence::Chestnut, 8).view(), MenuView::Loading);
    }
}
