use anyhow::{Context, Result, bail};
use clap::Parser;
use dialoguer::console::Term;
use dialoguer::{Input, Select};
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use parkotron::config::FileConfig;
use parkotron::registry::ParkingRegistry;
use parkotron::session::{Command, Reply, Session, parse_line};

/// Manage a fixed-size parking lot from the terminal
///
/// Examples:
///   # Interactive menu with the default 60-spot lot
///   parkotron
///
///   # Smaller lot with a custom banner
///   parkotron -n 20 --title "Level B2"
///
///   # Scripted session, one command per line
///   printf 'park ABC\nfind ABC\navailable\n' | parkotron --batch
#[derive(Parser, Debug)]
#[command(name = "parkotron")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to config file (optional, auto-searches parkotron.toml if not provided)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of parking spots (defaults to 60)
    #[arg(short = 'n', long)]
    capacity: Option<u32>,

    /// Banner shown above the menu
    #[arg(long)]
    title: Option<String>,

    /// Read commands from stdin instead of showing the menu
    #[arg(long)]
    batch: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy)]
enum MenuItem {
    CheckAvailability,
    ParkVehicle,
    ReleaseSpot,
    SearchVehicle,
    SpotDetails,
    Quit,
}

impl MenuItem {
    const ALL: [MenuItem; 6] = [
        MenuItem::CheckAvailability,
        MenuItem::ParkVehicle,
        MenuItem::ReleaseSpot,
        MenuItem::SearchVehicle,
        MenuItem::SpotDetails,
        MenuItem::Quit,
    ];

    fn label(self) -> &'static str {
        match self {
            MenuItem::CheckAvailability => "Check Availability",
            MenuItem::ParkVehicle => "Park Vehicle",
            MenuItem::ReleaseSpot => "Release Specific Slot",
            MenuItem::SearchVehicle => "Search Vehicle by License Plate",
            MenuItem::SpotDetails => "Show Slot Details",
            MenuItem::Quit => "Quit",
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let file_config = match args.config {
        Some(ref config_path) => FileConfig::from_path(config_path)?,
        None => FileConfig::load().unwrap_or_default(),
    };

    let capacity = args.capacity.unwrap_or(file_config.capacity);
    let title = args.title.clone().unwrap_or(file_config.title);
    let verbose = args.verbose || file_config.verbose;

    if capacity == 0 {
        bail!("Capacity must be at least 1 parking spot");
    }

    if verbose {
        eprintln!("Configuration:");
        eprintln!("  Title: {}", title);
        eprintln!("  Capacity: {} spots", capacity);
        eprintln!();
    }

    tracing::debug!(capacity, title = %title, "starting session");
    let mut session = Session::new(title, ParkingRegistry::new(capacity));

    if args.batch || !io::stdin().is_terminal() {
        run_batch(&mut session, io::stdin().lock(), &mut io::stdout().lock())
    } else {
        run_interactive(&mut session)
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn run_batch(session: &mut Session, input: impl BufRead, out: &mut impl Write) -> Result<()> {
    for line in input.lines() {
        let line = line.context("Failed to read command from stdin")?;
        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                writeln!(out, "error: {}", e)?;
                continue;
            }
        };

        let reply = session.handle(&command);
        write_reply(out, &reply)?;
        if command == Command::Quit {
            break;
        }
    }
    Ok(())
}

fn write_reply(out: &mut impl Write, reply: &Reply) -> Result<()> {
    if reply.is_error() {
        writeln!(out, "error: {}", reply.text)?;
    } else {
        writeln!(out, "{}", reply.text)?;
    }
    Ok(())
}

fn run_interactive(session: &mut Session) -> Result<()> {
    let term = Term::stderr();
    let labels: Vec<&str> = MenuItem::ALL.iter().map(|item| item.label()).collect();

    println!("{}", session.title());
    println!("{}", "=".repeat(session.title().chars().count()));
    println!();

    loop {
        let choice = Select::new()
            .with_prompt("Choose an action")
            .items(&labels)
            .default(0)
            .interact_on(&term)?;

        let command = match MenuItem::ALL[choice] {
            MenuItem::CheckAvailability => Command::Available,
            MenuItem::ParkVehicle => {
                Command::Park(prompt(&term, "Enter license plate number")?)
            }
            MenuItem::ReleaseSpot => Command::Release(prompt(&term, "Spot ID to release")?),
            MenuItem::SearchVehicle => {
                Command::Find(prompt(&term, "Search vehicle by license plate")?)
            }
            MenuItem::SpotDetails => Command::Details(prompt(&term, "Spot ID to inspect")?),
            MenuItem::Quit => break,
        };

        let reply = session.handle(&command);
        println!("[{}] {}", reply.title, reply.text);
        println!();
    }

    Ok(())
}

/// Ask for one line of text; blank answers are passed through for validation
fn prompt(term: &Term, message: &str) -> Result<String> {
    let answer = Input::<String>::new()
        .with_prompt(message)
        .allow_empty(true)
        .interact_text_on(term)?;
    Ok(answer)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch(capacity: u32, script: &str) -> String {
        let mut session = Session::new("Test Lot", ParkingRegistry::new(capacity));
        let mut out = Vec::new();
        run_batch(&mut session, script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_batch_prefixes_errors() {
        let output = batch(1, "park A\npark B\nfrobnicate\n");
        assert_eq!(
            output,
            "Vehicle parked successfully at spot 1\n\
             error: No available spots. Parking lot is full.\n\
             error: unknown command 'frobnicate' (try 'help')\n"
        );
    }

    #[test]
    fn test_batch_stops_at_quit() {
        let output = batch(3, "# comment\n\npark A\nquit\npark B\n");
        assert_eq!(
            output,
            "Vehicle parked successfully at spot 1\nGoodbye.\n"
        );
    }

    #[test]
    fn test_menu_labels_are_unique() {
        let mut labels: Vec<&str> = MenuItem::ALL.iter().map(|i| i.label()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), MenuItem::ALL.len());
    }
}
