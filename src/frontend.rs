//! # Frontend Specifications
//!
//! What the presentation side owns and what it gets from the core.
//!
//! ## Inputs to the core
//! - Dataset: fetched once on load, never refetched
//! - Location: current URL, query and fragment
//! - Hour: local wall-clock hour, 0-23
//!
//! ## Outputs from the core
//! - View: loading, residence not found, no menu, or featured dishes + stations
//! - Each dish carries its icon, each station dish its overflow flag
//! - Nutrition presence per dish, plus labelled rows for the panel
//!
//!
//!
//! ## Page
//!
//! ### Header
//! - `🍽️ <Residence> Dining Menu`
//!
//! ### Residence links
//! - One per residence, href `?residence=<slug>`
//! - Clicking one switches residence without reloading and pushes the href to history
//! - Back/forward re-resolves the residence from the restored location
//!
//! ### Meal selector
//! - Breakfast 🌅, Lunch ☀️, Dinner 🌙
//! - Special residences show only their themed meal 🍽️
//! - Picking a meal at a regular residence is remembered across residence switches
//!
//! ### Featured
//! - Cards with icon, name, serving size
//! - `📊 Nutrition Info` badge when the dish has nutrition, toggles the panel
//! - Empty list shows "No featured dishes available"
//!
//! ### Stations
//! - First four dishes shown, the rest behind "Show more (n)" / "Show less"
//! - Station header also toggles; the terminal uses `expand` / `collapse <station>`
//! - Badge `📊 <calories> cal` when the dish has nutrition
//!
//! ### Clock
//! - `Updated HH:MM`, refreshed every minute on the web, on `time` in the terminal
//!
//!
//!
//! ## Failure
//! - Fetch fails: whole page replaced with "Error loading menu. Please refresh the page."
//! - No retry, no partial render
