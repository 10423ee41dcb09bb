use crate::session::respond;
use clap::Args;
use parking_attendant::desk::report::StatusFormat;
use parking_attendant::desk::{FrontDesk, RequestError};
use parking_attendant::error::AppError;
use parking_attendant::facility::Ticket;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug)]
pub(crate) struct ReplayArgs {
    /// Script with one request per line: setup, park, unpark, status, strategy
    pub(crate) script: PathBuf,
    /// Output format for status requests
    #[arg(long, default_value = "text", value_parser = parse_format)]
    pub(crate) format: StatusFormat,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ReplaySummary {
    pub(crate) succeeded: usize,
    pub(crate) failed: usize,
}

pub(crate) fn run(desk: &mut FrontDesk, args: ReplayArgs) -> Result<(), AppError> {
    let script = fs::read_to_string(&args.script)?;
    let stdout = io::stdout();
    let summary = replay(desk, &script, args.format, stdout.lock())?;

    info!(
        script = %args.script.display(),
        succeeded = summary.succeeded,
        failed = summary.failed,
        "replay finished"
    );
    Ok(())
}

/// Execute every request in `script`, echoing each one followed by its outcome.
///
/// Request failures are printed and counted; only output and encoding errors abort the run.
/// In `unpark` lines, `$N` stands for the ticket issued by the N-th successful `park`.
pub(crate) fn replay<W: Write>(
    desk: &mut FrontDesk,
    script: &str,
    format: StatusFormat,
    mut output: W,
) -> Result<ReplaySummary, AppError> {
    let mut summary = ReplaySummary::default();
    let mut issued: Vec<Ticket> = Vec::new();

    for line in script.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        writeln!(output, "> {line}")?;

        let (command, argument) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let outcome = match command.to_ascii_lowercase().as_str() {
            "setup" => desk.setup(argument),
            "park" => desk.issue_ticket(argument).map(|ticket| {
                let message = format!("Car parked with ticket id {ticket}");
                issued.push(ticket);
                message
            }),
            "unpark" => match resolve_ticket(argument, &issued) {
                Some(ticket) => desk.unpark(ticket),
                None => Err(RequestError::InvalidInput),
            },
            "status" => match desk.status_report() {
                Ok(report) => Ok(report.render(format)?),
                Err(err) => Err(err),
            },
            "strategy" => desk.change_strategy(argument),
            other => {
                writeln!(output, "unknown command '{other}'")?;
                summary.failed += 1;
                continue;
            }
        };

        if outcome.is_ok() {
            summary.succeeded += 1;
        } else {
            summary.failed += 1;
        }
        respond(&mut output, outcome)?;
    }

    output.flush()?;
    Ok(summary)
}

fn resolve_ticket<'a>(argument: &'a str, issued: &'a [Ticket]) -> Option<&'a str> {
    let argument = argument.trim();
    match argument.strip_prefix('$') {
        Some(reference) => {
            let position = reference.parse::<usize>().ok()?;
            issued
                .get(position.checked_sub(1)?)
                .map(Ticket::as_str)
        }
        None => Some(argument),
    }
}

fn parse_format(raw: &str) -> Result<StatusFormat, String> {
    raw.parse()
}
