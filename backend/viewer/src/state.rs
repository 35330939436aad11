use menu::{MenuDataset, MenuState, MenuView, Residence, residence_href, resolve_with_default};
use tracing::info;

use super::{config::Config, error::AppError, history::History, render::RenderOptions};

/// Single owner of the session: the menu state, where we are in history, and how the
/// page is currently laid out.
pub struct State {
    pub config: Config,
    pub menu: MenuState,
    pub history: History,
    pub options: RenderOptions,
}

impl State {
    pub fn new(config: Config, location: &str, hour: u32) -> Self {
        let menu = MenuState::from_location(location, config.default_residence, hour);
        info!("Opening on {} for {}", menu.selection().residence, menu.selection().meal);

        Self {
            config,
            menu,
            history: History::new(location),
            options: RenderOptions::default(),
        }
    }

    pub fn load(&mut self, dataset: MenuDataset) {
        self.menu.load(dataset);
    }

    /// Residence picked by the user: resolves it, records the new location.
    pub fn select_residence(&mut self, raw: &str, hour: u32) -> Residence {
        let residence = resolve_with_default(Some(raw), self.config.default_residence);

        self.menu.select_residence(residence, hour);
        self.history.push(residence_href(residence));

        residence
    }

    pub fn select_meal(&mut self, meal: &str) -> Result<(), AppError> {
        Ok(self.menu.select_meal(meal)?)
    }

    /// Moves through history. Returns false when there is nowhere to go.
    pub fn back(&mut self, hour: u32) -> bool {
        let Some(location) = self.history.back().map(str::to_string) else {
            return false;
        };

        self.menu.navigate(&location, hour);
        true
    }

    pub fn forward(&mut self, hour: u32) -> bool {
        let Some(location) = self.history.forward().map(str::to_string) else {
            return false;
        };

        self.menu.navigate(&location, hour);
        true
    }

    /// Expands or collapses a station shown in the current view, matched case-insensitively.
    pub fn set_station_expanded(&mut self, raw: &str, expanded: bool) -> Result<(), AppError> {
        let MenuView::Ready { stations, .. } = self.menu.view() else {
            return Err(AppError::UnknownStation(raw.to_string()));
        };

        let station = stations
            .into_iter()
            .find(|station| station.name.eq_ignore_ascii_case(raw.trim()))
            .ok_or_else(|| AppError::UnknownStation(raw.to_string()))?;

        self.options.set_expanded(&station.name, expanded);
        Ok(())
    }

    pub fn toggle_nutrition(&mut self) -> bool {
        self.options.show_nutrition = !self.options.show_nutrition;
        self.options.show_nutrition
    }
}
