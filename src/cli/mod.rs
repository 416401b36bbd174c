pub mod init;
pub mod parse;
pub mod plan;
pub mod profile;
mod render;
pub mod show;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tripflow")]
#[command(
    author,
    version,
    about = "Plan a trip from free text to a day-by-day itinerary"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose/debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the planning flow: extract, clarify, recommend, generate
    Plan(PlanArgs),

    /// Parse one day of itinerary text into timeline entries
    Parse(ParseArgs),

    /// Create or update the local user profile
    Profile(ProfileArgs),

    /// Print the stored itinerary and trip summary
    Show(ShowArgs),

    /// Write a starter config file
    Init(InitArgs),
}

#[derive(Parser, Clone)]
pub struct PlanArgs {
    /// Free-text trip description (reads stdin if omitted)
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Path to config file
    #[arg(short, long, default_value = "tripflow.yaml")]
    pub config: PathBuf,

    /// Keep and print a conversational transcript
    #[arg(long)]
    pub chat: bool,

    /// Override the extracted destination
    #[arg(long)]
    pub destination: Option<String>,

    /// Override interests (comma-separated)
    #[arg(long)]
    pub interests: Option<String>,

    /// Override budget (budget-friendly, mid-range, luxury)
    #[arg(long)]
    pub budget: Option<String>,

    /// Override trip type (family, friends, couples, solo)
    #[arg(long)]
    pub trip_type: Option<String>,

    /// Override travel dates display string
    #[arg(long)]
    pub travel_dates: Option<String>,

    /// First day of travel (YYYY-MM-DD); paired with --to
    #[arg(long, value_name = "DATE")]
    pub from: Option<chrono::NaiveDate>,

    /// Last day of travel (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub to: Option<chrono::NaiveDate>,

    /// Override number of adults
    #[arg(long)]
    pub adults: Option<u32>,

    /// Override number of kids
    #[arg(long)]
    pub kids: Option<u32>,

    /// Override kid ages (comma-separated)
    #[arg(long)]
    pub kid_ages: Option<String>,

    /// Override mode of travel
    #[arg(long)]
    pub mode_of_travel: Option<String>,

    /// Select places by 1-based index (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub select: Option<Vec<usize>>,

    /// Select every recommended place
    #[arg(long)]
    pub all: bool,
}

#[derive(Parser, Clone)]
pub struct ParseArgs {
    /// Day-text file to parse (reads stdin if omitted)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Emit timeline entries as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Clone)]
pub struct ProfileArgs {
    /// Path to config file
    #[arg(short, long, default_value = "tripflow.yaml")]
    pub config: PathBuf,

    /// Display name
    #[arg(long)]
    pub name: Option<String>,

    /// Phone number the agent backend keys sessions by
    #[arg(long)]
    pub phone: Option<String>,

    /// Interests (comma-separated)
    #[arg(long)]
    pub interests: Option<String>,
}

#[derive(Parser, Clone)]
pub struct ShowArgs {
    /// Path to config file
    #[arg(short, long, default_value = "tripflow.yaml")]
    pub config: PathBuf,
}

#[derive(Parser, Clone)]
pub struct InitArgs {
    /// Where to write the config
    #[arg(value_name = "PATH", default_value = "tripflow.yaml")]
    pub path: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}
