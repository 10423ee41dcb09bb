use crate::replay::{self, ReplayArgs};
use crate::session;
use clap::{Parser, Subcommand};
use parking_attendant::config::AppConfig;
use parking_attendant::desk::{parse_capacities, FrontDesk};
use parking_attendant::error::AppError;
use parking_attendant::facility::ParkingStrategy;
use parking_attendant::telemetry;
use std::io;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "Parking Attendant",
    about = "Admit and release vehicles across a multi-lot parking facility",
    version
)]
struct Cli {
    /// Lot capacities to set up before the first request, e.g. "2,3"
    #[arg(long, global = true)]
    capacities: Option<String>,
    /// Lot selection strategy (first-available, highest-capacity, highest-free-space)
    #[arg(long, global = true, value_parser = parse_strategy)]
    strategy: Option<ParkingStrategy>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the interactive menu (default command)
    Console,
    /// Replay a script of requests and print every outcome
    Replay(ReplayArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let mut config = AppConfig::load()?;

    if let Some(raw) = cli.capacities.as_deref() {
        config.facility.capacities = Some(parse_capacities(raw)?);
    }
    if let Some(strategy) = cli.strategy {
        config.facility.strategy = strategy;
    }

    telemetry::init(&config.telemetry)?;

    let mut desk = FrontDesk::new(config.facility.strategy);
    if let Some(capacities) = &config.facility.capacities {
        desk.configure(capacities)?;
    }

    info!(
        ?config.environment,
        strategy = %config.facility.strategy,
        preconfigured = desk.is_configured(),
        "parking attendant ready"
    );

    match cli.command.unwrap_or(Command::Console) {
        Command::Console => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            session::run_console(&mut desk, stdin.lock(), stdout.lock())?;
            Ok(())
        }
        Command::Replay(args) => replay::run(&mut desk, args),
    }
}

fn parse_strategy(raw: &str) -> Result<ParkingStrategy, String> {
    raw.parse().map_err(|err| format!("{err}"))
}
