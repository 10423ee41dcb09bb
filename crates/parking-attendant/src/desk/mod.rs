//! Request handling in front of the facility: turns raw user text into attendant calls and
//! attendant outcomes into user-facing messages.

pub mod report;

use tracing::{debug, info};

use crate::facility::{Attendant, ParkingError, ParkingStrategy, Ticket, Vehicle};
use report::StatusReport;

/// Errors surfaced to whoever sits in front of the desk. Every variant renders as a single
/// user-presentable message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    #[error("invalid input")]
    InvalidInput,
    #[error("parking lot hasn't been set up")]
    NoParkingLotConfigured,
    #[error(transparent)]
    Parking(#[from] ParkingError),
}

/// Holds the facility between requests. Nothing is configured until the first `setup`.
#[derive(Debug, Default)]
pub struct FrontDesk {
    attendant: Option<Attendant>,
    default_strategy: ParkingStrategy,
}

impl FrontDesk {
    pub fn new(default_strategy: ParkingStrategy) -> Self {
        Self {
            attendant: None,
            default_strategy,
        }
    }

    /// Replace the facility with one lot per capacity in `capacities`.
    ///
    /// A rejected layout leaves the current facility in place.
    pub fn setup(&mut self, capacities: &str) -> Result<String, RequestError> {
        let capacities = parse_capacities(capacities)?;
        self.configure(&capacities)
    }

    /// Same as [`FrontDesk::setup`] for capacities that are already parsed.
    pub fn configure(&mut self, capacities: &[usize]) -> Result<String, RequestError> {
        if capacities.is_empty() || capacities.contains(&0) {
            return Err(RequestError::InvalidInput);
        }

        let mut attendant = Attendant::with_capacities(capacities);
        attendant.change_strategy(self.default_strategy);
        self.attendant = Some(attendant);

        info!(lots = capacities.len(), ?capacities, "parking facility configured");
        Ok(format!(
            "Parking lot set up with {} lot(s): {}",
            capacities.len(),
            join_capacities(capacities)
        ))
    }

    pub fn park(&mut self, plate_number: &str) -> Result<String, RequestError> {
        let ticket = self.issue_ticket(plate_number)?;
        Ok(format!("Car parked with ticket id {ticket}"))
    }

    /// Admit a vehicle and hand back the ticket itself rather than a message.
    pub fn issue_ticket(&mut self, plate_number: &str) -> Result<Ticket, RequestError> {
        let plate_number = non_empty(plate_number)?;
        let attendant = self.attendant_mut()?;

        Ok(attendant.park(Vehicle::new(plate_number))?)
    }

    pub fn unpark(&mut self, ticket: &str) -> Result<String, RequestError> {
        let ticket = Ticket::from(non_empty(ticket)?);
        let attendant = self.attendant_mut()?;

        let vehicle = attendant.unpark(&ticket)?;
        Ok(format!(
            "Car {} successfully unparked!",
            vehicle.plate_number
        ))
    }

    /// Human-readable occupancy of every lot, in lot order.
    pub fn status(&self) -> Result<String, RequestError> {
        Ok(self.status_report()?.to_text())
    }

    pub fn status_report(&self) -> Result<StatusReport, RequestError> {
        let attendant = self
            .attendant
            .as_ref()
            .ok_or(RequestError::NoParkingLotConfigured)?;
        Ok(StatusReport::from_attendant(attendant))
    }

    /// Switch the lot selection strategy by name.
    ///
    /// The choice also becomes the default for facilities set up afterwards.
    pub fn change_strategy(&mut self, name: &str) -> Result<String, RequestError> {
        let strategy: ParkingStrategy = non_empty(name)?
            .parse()
            .map_err(|_| RequestError::InvalidInput)?;
        let attendant = self.attendant_mut()?;

        attendant.change_strategy(strategy);
        self.default_strategy = strategy;
        debug!(%strategy, "desk strategy updated");
        Ok(format!("Parking strategy changed to {strategy}"))
    }

    pub fn is_configured(&self) -> bool {
        self.attendant.is_some()
    }

    pub fn attendant(&self) -> Option<&Attendant> {
        self.attendant.as_ref()
    }

    fn attendant_mut(&mut self) -> Result<&mut Attendant, RequestError> {
        self.attendant
            .as_mut()
            .ok_or(RequestError::NoParkingLotConfigured)
    }
}

/// Parse a comma-separated list of positive lot capacities, e.g. `"2,3"`.
pub fn parse_capacities(raw: &str) -> Result<Vec<usize>, RequestError> {
    non_empty(raw)?
        .split(',')
        .map(|token| match token.trim().parse::<usize>() {
            Ok(capacity) if capacity > 0 => Ok(capacity),
            _ => Err(RequestError::InvalidInput),
        })
        .collect()
}

fn non_empty(raw: &str) -> Result<&str, RequestError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Err(RequestError::InvalidInput)
    } else {
        Ok(trimmed)
    }
}

fn join_capacities(capacities: &[usize]) -> String {
    capacities
        .iter()
        .map(usize::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
