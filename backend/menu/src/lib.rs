//! # Menu
//!
//! Selection and view logic behind the dining menu page. Nothing in here touches the
//! network or a screen: callers hand in the fetched dataset, a selection, and the hour,
//! and get plain data back.
//!
//! ## Overall Data Structures
//!
//! - Dataset (residence **string** → meal **string** → station **string** → list of **dishes**):
//!   The whole feed, fetched once. Maps keep feed order since station order falls back to it.
//!
//! - Dish (name: **string**, uom: optional **string**, nutrition: optional 12-cell **list**):
//!   Nutrition cells are numbers or strings, blanks come through as `""` or `null`.
//!
//! - Selection (residence: [`Residence`], meal: **string**): Residence is always one of the
//!   known set. Meal is the residence's special meal when it has one.
//!
//! ## Flow
//! 1. Residence comes from the location (`?residence=`, `?res=`, then `#fragment`), else default.
//!
//! 2. Meal comes from the residence's special meal, else the user's last pick, else the hour.
//!
//! 3. The view builder picks featured dishes and orders stations for that selection.
//!
//! 4. Each dish gets an icon from its name.
//!
//! ## Empty States
//! - No dataset yet: loading
//! - Residence missing from the feed: residence not found
//! - Meal missing or without stations: no menu for this meal
pub mod icons;
pub mod location;
pub mod meals;
pub mod models;
pub mod nutrition;
pub mod residence;
pub mod state;
pub mod utils;
pub mod view;

pub use icons::classify;
pub use location::{residence_from_location, residence_href};
pub use meals::default_meal;
pub use models::{DishItem, MealMenu, MenuDataset, ResidenceMenu};
pub use nutrition::has_nutrition;
pub use residence::{Residence, resolve, resolve_with_default};
pub use state::{MenuState, Selection, SelectionError};
pub use view::{MenuView, build_view};
