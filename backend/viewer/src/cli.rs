use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// Page location to open, e.g. `?residence=oak`, `#Robarts%20Cafeteria`, or a full URL
    #[arg(short, long, default_value = "")]
    pub location: String,

    /// Residence name or slug, takes priority over --location
    #[arg(short, long)]
    pub residence: Option<String>,

    /// Meal to show instead of the one picked from the time of day
    #[arg(short, long)]
    pub meal: Option<String>,

    /// Hour of day (0-23) used to pick the meal, defaults to local time
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..24))]
    pub hour: Option<u32>,

    /// Show every dish instead of collapsing long stations
    #[arg(short, long)]
    pub expand: bool,

    /// Show nutrition panels
    #[arg(short, long)]
    pub nutrition: bool,

    /// Print the derived view as JSON
    #[arg(long, conflicts_with = "interactive")]
    pub json: bool,

    /// Keep reading commands from stdin after the first render
    #[arg(short, long)]
    pub interactive: bool,
}
