//! Plain-text rendering of a [`MenuState`]. Every function builds a `String` so the
//! interactive loop and tests can both inspect the output.
use std::{collections::HashSet, fmt::Write};

use chrono::NaiveTime;
use menu::{
    MenuState, MenuView, Residence, has_nutrition,
    meals::{meal_icon, meal_options},
    models::DishItem,
    nutrition::{calories, nutrition_rows},
    residence_href,
    view::{FeaturedDish, NO_FEATURED_MESSAGE, Station},
};

#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    pub expand_all: bool,
    pub expanded: HashSet<String>,
    pub show_nutrition: bool,
}

impl RenderOptions {
    pub fn is_expanded(&self, station: &str) -> bool {
        self.expand_all || self.expanded.contains(station)
    }

    /// Repeating the same call leaves the station as it is.
    pub fn set_expanded(&mut self, station: &str, expanded: bool) {
        if expanded {
            self.expanded.insert(station.to_string());
        } else {
            self.expanded.remove(station);
        }
    }
}

pub fn header(residence: Residence) -> String {
    format!("🍽️ {residence} Dining Menu")
}

pub fn residence_links(active: Residence) -> String {
    let width = Residence::ALL
        .iter()
        .map(|residence| residence.name().chars().count())
        .max()
        .unwrap_or_default();

    let mut out = String::new();
    for residence in Residence::ALL {
        let marker = if residence == active { '*' } else { ' ' };
        let _ = writeln!(
            out,
            "{marker} {:<width$}  {}",
            residence.name(),
            residence_href(residence)
        );
    }

    out
}

pub fn meal_selector(menu: &MenuState) -> String {
    let selection = menu.selection();

    meal_options(selection.residence)
        .into_iter()
        .map(|meal| {
            let label = format!("{} {meal}", meal_icon(meal));
            if meal == selection.meal {
                format!("[{label}]")
            } else {
                format!(" {label} ")
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

pub fn nutrition_panel(item: &DishItem, indent: &str) -> String {
    let width = nutrition_rows(item)
        .iter()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or_default();

    let mut out = String::new();
    for (label, value) in nutrition_rows(item) {
        let _ = writeln!(out, "{indent}{label:<width$}  {value}");
    }

    out
}

pub fn featured(dishes: &[FeaturedDish], options: &RenderOptions) -> String {
    if dishes.is_empty() {
        return format!("  {NO_FEATURED_MESSAGE}\n");
    }

    let mut out = String::new();
    for dish in dishes {
        let _ = writeln!(out, "  {} {}", dish.icon, dish.item.name);

        if let Some(uom) = &dish.item.uom {
            let _ = writeln!(out, "     {uom}");
        }

        if has_nutrition(&dish.item) {
            let _ = writeln!(out, "     📊 Nutrition Info");
            if options.show_nutrition {
                out.push_str(&nutrition_panel(&dish.item, "       "));
            }
        }
    }

    out
}

pub fn station(station: &Station, options: &RenderOptions) -> String {
    let expanded = options.is_expanded(&station.name);

    let mut out = format!("{}\n", station.name);
    for entry in station.items.iter().filter(|entry| expanded || !entry.overflow) {
        let mut line = format!("  - {}", entry.item.name);

        if let Some(uom) = &entry.item.uom {
            let _ = write!(line, " · {uom}");
        }
        if let Some(calories) = calories(&entry.item) {
            let _ = write!(line, " · 📊 {calories} cal");
        }

        out.push_str(&line);
        out.push('\n');

        if options.show_nutrition && has_nutrition(&entry.item) {
            out.push_str(&nutrition_panel(&entry.item, "      "));
        }
    }

    match station.hidden_count() {
        0 => {}
        _ if expanded => out.push_str("  Show less\n"),
        hidden => {
            let _ = writeln!(out, "  Show more ({hidden})");
        }
    }

    out
}

pub fn clock(now: NaiveTime) -> String {
    format!("Updated {}", now.format("%H:%M"))
}

pub fn page(menu: &MenuState, options: &RenderOptions, now: NaiveTime) -> String {
    let selection = menu.selection();

    let mut out = format!("{}\n\n", header(selection.residence));
    out.push_str(&residence_links(selection.residence));
    let _ = writeln!(out, "\n{}\n", meal_selector(menu));

    match menu.view() {
        MenuView::Ready {
            featured: dishes,
            stations,
        } => {
            out.push_str("Featured\n");
            out.push_str(&featured(&dishes, options));

            for entry in &stations {
                out.push('\n');
                out.push_str(&station(entry, options));
            }
        }
        empty => {
            let _ = writeln!(out, "  {}", empty.message().unwrap_or_default());
        }
    }

    let _ = writeln!(out, "\n{}", clock(now));
    out
}
