//! fairdraw command line
//!
//! Plays and verifies provably fair rounds and prints the results as JSON.

use clap::{Parser, Subcommand};
use fairdraw::{
    commitment, crash_coefficient_from_duration, dice_coefficient, dice_window_length,
    duration_from_crash_coefficient, mines_payout_table, parse_dice_draw, parse_mines_allocation,
    ConfigLoader, OutcomeEngine, RandomOrgClient,
};
use serde::Serialize;
use serde_json::json;

#[derive(Parser, Debug)]
#[command(name = "fairdraw")]
#[command(about = "Provably fair crash, double, mines and dice outcomes", long_about = None)]
struct Args {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Crash multiplier from a signed decimal draw
    Crash,
    /// Double number from a signed integer draw
    Double,
    /// Generate a committed mines layout
    Mines,
    /// Generate a committed dice value
    Dice,
    /// Parse a mines canonical string and recompute its digest
    VerifyMines {
        result: String,
        /// Published digest to compare against
        #[arg(long)]
        hash: Option<String>,
    },
    /// Parse a dice canonical string and recompute its digest
    VerifyDice {
        result: String,
        #[arg(long)]
        hash: Option<String>,
    },
    /// Payout multipliers per safe pick
    MinesTable {
        #[arg(long)]
        mines: u8,
    },
    /// Dice multiplier and winning window for a chance in percent
    DiceOdds {
        #[arg(long)]
        chance: u8,
    },
    /// Crash curve value after a number of seconds
    CrashCurve {
        #[arg(long)]
        seconds: f64,
    },
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fairdraw=info".into()),
        )
        .init();

    let args = Args::parse();

    let mut loader = ConfigLoader::new();
    if let Some(ref path) = args.config {
        loader = loader.with_path(path);
    }
    let config = loader.load()?;

    let engine = OutcomeEngine::new(RandomOrgClient::new(config.provider), config.engine);

    match args.command {
        Command::Crash => print_json(&engine.generate_crash_coefficient().await?)?,
        Command::Double => print_json(&engine.generate_double_outcome().await?)?,
        Command::Mines => print_json(&engine.generate_mines_allocation())?,
        Command::Dice => print_json(&engine.generate_dice_draw())?,
        Command::VerifyMines { result, hash } => {
            let allocation = parse_mines_allocation(&result)?;
            print_json(&json!({
                "allocation": allocation,
                "is_permutation": allocation.is_permutation(),
                "hash_matches": hash.map(|h| commitment::verify(&result, &h)),
            }))?
        }
        Command::VerifyDice { result, hash } => {
            let draw = parse_dice_draw(&result)?;
            print_json(&json!({
                "draw": draw,
                "hash_matches": hash.map(|h| commitment::verify(&result, &h)),
            }))?
        }
        Command::MinesTable { mines } => print_json(&mines_payout_table(mines)?)?,
        Command::DiceOdds { chance } => print_json(&json!({
            "chance": chance,
            "coefficient": dice_coefficient(chance)?,
            "window_length": dice_window_length(chance)?,
        }))?,
        Command::CrashCurve { seconds } => {
            let coefficient = crash_coefficient_from_duration(seconds);
            print_json(&json!({
                "seconds": seconds,
                "coefficient": coefficient,
                "seconds_from_coefficient": duration_from_crash_coefficient(coefficient),
            }))?
        }
    }

    Ok(())
}
