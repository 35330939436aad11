//! # Viewer
//!
//! Terminal front for the dining menu. Plays the part the browser page plays on the web:
//! fetch the feed once, work out the selection, render, and react to the user.
//!
//! ## Flow
//! 1. Read config from the environment, selection hints from the command line.
//!
//! 2. Fetch the whole feed once behind a spinner. A failed fetch ends the session with
//!    a single error message, no retry.
//!
//! 3. Render the page for the opening selection, or print the view as JSON.
//!
//! 4. With `--interactive`, keep reading commands and redrawing until `quit` or EOF.
//!
//! ## Logging
//! Set `RUST_LOG` (e.g. `RUST_LOG=menu=debug,viewer=info`). Logs go to stderr so stdout
//! only carries the menu.
use std::{io, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};
use menu::{residence_href, resolve_with_default, view::LOADING_MESSAGE};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod history;
pub mod render;
pub mod state;

use cli::Args;
use commands::{Clock, LocalClock};
use config::Config;
use error::AppError;
use state::State;

pub fn init_tracing() {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();
}

pub async fn start(args: Args) -> Result<(), AppError> {
    info!("Loading config...");
    let config = Config::load();
    let clock = LocalClock;
    let hour = args.hour.unwrap_or_else(|| clock.hour());

    let location = match args.residence.as_deref() {
        Some(raw) => residence_href(resolve_with_default(Some(raw), config.default_residence)),
        None => args.location.clone(),
    };

    let mut state = State::new(config, &location, hour);
    if let Some(meal) = &args.meal {
        state.select_meal(meal)?;
    }
    state.options.expand_all = args.expand;
    state.options.show_nutrition = args.nutrition;

    let dataset = {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(ProgressStyle::with_template("{spinner:.green} {msg}")?);
        spinner.set_message(LOADING_MESSAGE);
        spinner.enable_steady_tick(Duration::from_millis(100));

        let fetched = feed::get_menu_remote(&state.config.menu_url).await;
        spinner.finish_and_clear();
        fetched?
    };
    state.load(dataset);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&state.menu.view())?);
        return Ok(());
    }

    if args.interactive {
        return commands::run(&mut state, io::stdin().lock(), io::stdout().lock(), &clock);
    }

    print!("{}", render::page(&state.menu, &state.options, clock.now()));
    Ok(())
}
