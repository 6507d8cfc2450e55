//! Team generator CLI
//!
//! Roster JSON → balanced team sheets, plus match-result write-back.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use tg_cli::{
    format_team_sheets, generate_from_roster, load_roster, record_outcome, save_roster,
    GenerateOptions,
};
use tg_core::{MatchOutcome, PlayerId};

#[derive(Parser)]
#[command(name = "tg_cli")]
#[command(about = "Generate balanced teams from a club roster", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate balanced teams from a roster file
    Generate {
        /// Roster JSON file path
        #[arg(long)]
        roster: PathBuf,

        /// Player ids to select, comma separated (defaults to the whole roster)
        #[arg(long, value_delimiter = ',')]
        ids: Option<Vec<PlayerId>>,

        /// Match format: 5-a-side, 7-a-side or 11-a-side
        #[arg(long, default_value = "5-a-side")]
        format: String,

        /// Balance method: skill, position or mixed
        #[arg(long, default_value = "mixed")]
        method: String,

        /// Number of teams (2-4)
        #[arg(long, default_value_t = 2)]
        teams: usize,

        /// Feed win/loss history into balancing
        #[arg(long)]
        consider_history: bool,

        /// Competition mode: assign a captain per team
        #[arg(long)]
        competition: bool,

        /// Fixed seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Print the generated teams as JSON instead of team sheets
        #[arg(long)]
        json: bool,
    },

    /// Record a match outcome against the listed players
    Record {
        /// Roster JSON file path
        #[arg(long)]
        roster: PathBuf,

        /// Player ids on the recorded side, comma separated
        #[arg(long, value_delimiter = ',', required = true)]
        ids: Vec<PlayerId>,

        /// Outcome for those players: win, loss or draw
        #[arg(long)]
        outcome: String,

        /// Output path (defaults to overwriting the input roster)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Generate {
            roster,
            ids,
            format,
            method,
            teams,
            consider_history,
            competition,
            seed,
            json,
        } => {
            let roster_file = load_roster(&roster)?;
            let options = GenerateOptions {
                ids,
                format: format.parse().map_err(anyhow::Error::msg)?,
                method: method.parse().map_err(anyhow::Error::msg)?,
                teams,
                consider_history,
                competition,
                seed,
            };
            let generated = generate_from_roster(&roster_file, &options)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&generated)?);
            } else {
                print!("{}", format_team_sheets(&generated));
            }
        }
        Commands::Record { roster, ids, outcome, out } => {
            let mut roster_file = load_roster(&roster)?;
            let outcome: MatchOutcome = outcome.parse().map_err(anyhow::Error::msg)?;
            record_outcome(&mut roster_file, &ids, outcome)?;
            let target = out.unwrap_or(roster);
            save_roster(&target, &mut roster_file)?;
            println!("Recorded {:?} for {} players -> {}", outcome, ids.len(), target.display());
        }
    }
    Ok(())
}
