use std::fmt;
use std::fmt::Write as _;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::facility::{Attendant, LotId, LotStatus, Ticket};

#[derive(Debug, Clone, Serialize)]
pub struct ParkedVehicleView {
    pub ticket: Ticket,
    pub plate_number: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LotStatusView {
    /// 1-based position of the lot in the facility's lot list.
    pub position: usize,
    pub lot_id: LotId,
    pub capacity: usize,
    pub free_space: usize,
    pub parked: Vec<ParkedVehicleView>,
}

impl LotStatusView {
    pub fn from_status(position: usize, status: &LotStatus<'_>) -> Self {
        Self {
            position,
            lot_id: status.lot_id,
            capacity: status.capacity,
            free_space: status.free_space,
            parked: status
                .parked
                .iter()
                .map(|(ticket, vehicle)| ParkedVehicleView {
                    ticket: ticket.clone(),
                    plate_number: vehicle.plate_number.clone(),
                })
                .collect(),
        }
    }
}

/// Owned occupancy snapshot of the whole facility, ready for rendering.
#[derive(Debug, Clone, Serialize)]
pub struct StatusReport {
    pub generated_at: DateTime<Utc>,
    pub strategy: &'static str,
    pub lots: Vec<LotStatusView>,
}

impl StatusReport {
    pub fn from_attendant(attendant: &Attendant) -> Self {
        let lots = attendant
            .status()
            .iter()
            .enumerate()
            .map(|(index, status)| LotStatusView::from_status(index + 1, status))
            .collect();

        Self {
            generated_at: Utc::now(),
            strategy: attendant.strategy_name(),
            lots,
        }
    }

    pub fn render(&self, format: StatusFormat) -> Result<String, ReportError> {
        match format {
            StatusFormat::Text => Ok(self.to_text()),
            StatusFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            StatusFormat::Csv => self.to_csv(),
        }
    }

    pub fn to_text(&self) -> String {
        let mut out = String::from("Parking Lot Status:\n");
        for lot in &self.lots {
            let _ = writeln!(out, "Lot #{}: {} spaces left", lot.position, lot.free_space);
            for parked in &lot.parked {
                let _ = writeln!(out, "#{} {}", parked.ticket, parked.plate_number);
            }
        }
        out
    }

    fn to_csv(&self) -> Result<String, ReportError> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        for lot in &self.lots {
            if lot.parked.is_empty() {
                writer.serialize(CsvRow::empty(lot))?;
            }
            for parked in &lot.parked {
                writer.serialize(CsvRow {
                    ticket: Some(parked.ticket.as_str()),
                    plate_number: Some(parked.plate_number.as_str()),
                    ..CsvRow::empty(lot)
                })?;
            }
        }

        let bytes = writer
            .into_inner()
            .map_err(|err| ReportError::Buffer(err.error().to_string()))?;
        Ok(String::from_utf8(bytes)?)
    }
}

#[derive(Serialize)]
struct CsvRow<'a> {
    lot: usize,
    capacity: usize,
    free_space: usize,
    ticket: Option<&'a str>,
    plate_number: Option<&'a str>,
}

impl<'a> CsvRow<'a> {
    fn empty(lot: &LotStatusView) -> Self {
        Self {
            lot: lot.position,
            capacity: lot.capacity,
            free_space: lot.free_space,
            ticket: None,
            plate_number: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl StatusFormat {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }
}

impl fmt::Display for StatusFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for StatusFormat {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            other => Err(format!("unsupported status format '{other}' (text, json, csv)")),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("failed to encode status as json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to encode status as csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to flush csv buffer: {0}")]
    Buffer(String),
    #[error("status output is not valid utf-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
