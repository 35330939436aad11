//! Interactive session. One command per line, each followed by a redraw:
//!
//! | Command | Effect |
//! |---------|--------|
//! | `res <name>` | switch residence, pushes `?residence=<slug>` |
//! | `meal <name>` | switch meal |
//! | `back` / `forward` | walk history |
//! | `expand <station>` | show a station's hidden dishes |
//! | `collapse <station>` | hide them again |
//! | `nutrition` | toggle nutrition panels |
//! | `time` | redraw with a fresh clock |
//! | `help` | list commands |
//! | `quit` | leave |
use std::{
    io::{BufRead, Write},
    str::FromStr,
};

use chrono::{Local, NaiveTime, Timelike};
use tracing::{debug, warn};

use crate::{error::AppError, render, state::State};

pub const HELP: &str = "\
res <name>         switch residence
meal <name>        switch meal
back | forward     walk history
expand <station>   show a station's extra dishes
collapse <station> hide a station's extra dishes
nutrition          show or hide nutrition panels
time               refresh the clock
help               show this list
quit               leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Residence(String),
    Meal(String),
    Back,
    Forward,
    Expand(String),
    Collapse(String),
    Nutrition,
    Time,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = AppError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim().to_string();

        let command = match (word.to_lowercase().as_str(), rest.is_empty()) {
            ("res" | "residence", false) => Command::Residence(rest),
            ("meal", false) => Command::Meal(rest),
            ("expand", false) => Command::Expand(rest),
            ("collapse", false) => Command::Collapse(rest),
            ("back", true) => Command::Back,
            ("forward", true) => Command::Forward,
            ("nutrition", true) => Command::Nutrition,
            ("time", true) => Command::Time,
            ("help" | "?", true) => Command::Help,
            ("quit" | "exit" | "q", true) => Command::Quit,
            _ => return Err(AppError::UnknownCommand(line.to_string())),
        };

        Ok(command)
    }
}

/// Source of the wall clock, swappable in tests.
pub trait Clock {
    fn now(&self) -> NaiveTime;

    fn hour(&self) -> u32 {
        self.now().hour()
    }
}

pub struct LocalClock;

impl Clock for LocalClock {
    fn now(&self) -> NaiveTime {
        Local::now().time()
    }
}

/// Applies one command. Returns false once the session should end.
pub fn apply(state: &mut State, command: Command, hour: u32) -> Result<bool, AppError> {
    debug!("Applying {command:?}");

    match command {
        Command::Residence(raw) => {
            state.select_residence(&raw, hour);
        }
        Command::Meal(meal) => state.select_meal(&meal)?,
        Command::Back => {
            if !state.back(hour) {
                warn!("Already at the oldest location");
            }
        }
        Command::Forward => {
            if !state.forward(hour) {
                warn!("Already at the newest location");
            }
        }
        Command::Expand(station) => state.set_station_expanded(&station, true)?,
        Command::Collapse(station) => state.set_station_expanded(&station, false)?,
        Command::Nutrition => {
            state.toggle_nutrition();
        }
        Command::Time | Command::Help => {}
        Command::Quit => return Ok(false),
    }

    Ok(true)
}

pub fn run<R, W, C>(state: &mut State, input: R, mut output: W, clock: &C) -> Result<(), AppError>
where
    R: BufRead,
    W: Write,
    C: Clock,
{
    write!(output, "{}", render::page(&state.menu, &state.options, clock.now()))?;
    writeln!(output, "\nType `help` for commands.")?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                writeln!(output, "{e}")?;
                continue;
            }
        };

        if command == Command::Help {
            writeln!(output, "{HELP}")?;
            continue;
        }

        match apply(state, command, clock.hour()) {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) if e.is_recoverable() => {
                writeln!(output, "{e}")?;
                continue;
            }
            Err(e) => return Err(e),
        }

        write!(output, "\n{}", render::page(&state.menu, &state.options, clock.now()))?;
    }

    Ok(())
}
