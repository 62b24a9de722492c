//! Presentation layer: turns user commands into registry calls and
//! registry results into messages.

pub mod command;

pub use command::{Command, HELP, ParseError, parse_line};

use serde::Serialize;
use tracing::{debug, info};

use crate::domain::{Spot, SpotId};
use crate::input::{Field, InputError, parse_plate, parse_spot_id};
use crate::registry::{ParkingRegistry, RegistryError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

/// A message for the user, shaped like a dialog box: a title and a body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub severity: Severity,
    pub title: &'static str,
    pub text: String,
}

impl Reply {
    pub fn info(title: &'static str, text: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            title,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            title: "Error",
            text: text.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl From<InputError> for Reply {
    fn from(err: InputError) -> Self {
        info!(error = ?err, "rejected input");
        Reply::error(err.to_string())
    }
}

#[derive(Serialize)]
struct Snapshot<'a> {
    title: &'a str,
    capacity: u32,
    available: Vec<SpotId>,
    spots: &'a [Spot],
}

/// One running application session, owning the registry
#[derive(Debug)]
pub struct Session {
    title: String,
    registry: ParkingRegistry,
}

impl Session {
    pub fn new(title: impl Into<String>, registry: ParkingRegistry) -> Self {
        Self {
            title: title.into(),
            registry,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn registry(&self) -> &ParkingRegistry {
        &self.registry
    }

    pub fn handle(&mut self, command: &Command) -> Reply {
        debug!(?command, "handling command");
        match command {
            Command::Available => self.check_availability(),
            Command::Park(raw) => self.park_vehicle(raw),
            Command::Release(raw) => self.release_spot(raw),
            Command::Find(raw) => self.search_vehicle(raw),
            Command::Details(raw) => self.spot_details(raw),
            Command::Dump => self.dump(),
            Command::Help => Reply::info("Help", HELP),
            Command::Quit => Reply::info("Goodbye", "Goodbye."),
        }
    }

    fn check_availability(&self) -> Reply {
        let available = self.registry.list_available();
        if available.is_empty() {
            return Reply::info("Availability", "No available spots.");
        }

        let list = available
            .iter()
            .map(SpotId::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        Reply::info("Availability", format!("Available spots: [{}]", list))
    }

    fn park_vehicle(&mut self, raw: &str) -> Reply {
        let plate = match parse_plate(raw, Field::PlateToPark) {
            Ok(plate) => plate,
            Err(e) => return e.into(),
        };

        let label = plate.to_string();
        match self.registry.park(plate) {
            Ok(id) => {
                info!(plate = %label, spot = %id, "vehicle parked");
                Reply::info(
                    "Success",
                    format!("Vehicle parked successfully at spot {}", id),
                )
            }
            Err(RegistryError::NoAvailableSpot) => {
                info!(plate = %label, "parking lot is full");
                Reply::error("No available spots. Parking lot is full.")
            }
            Err(e) => Reply::error(e.to_string()),
        }
    }

    fn release_spot(&mut self, raw: &str) -> Reply {
        let id = match parse_spot_id(raw, self.registry.capacity(), Field::SpotToRelease) {
            Ok(id) => id,
            Err(e) => return e.into(),
        };

        match self.registry.release(id) {
            Ok(()) => {
                info!(spot = %id, "spot released");
                Reply::info("Success", format!("Spot {} released successfully.", id))
            }
            Err(e) => Reply::error(e.to_string()),
        }
    }

    fn search_vehicle(&self, raw: &str) -> Reply {
        let plate = match parse_plate(raw, Field::PlateToFind) {
            Ok(plate) => plate,
            Err(e) => return e.into(),
        };

        let text = match self.registry.find_vehicle(plate.as_str()) {
            Ok(id) => format!(
                "Vehicle with license plate {} is parked at spot {}.",
                plate, id
            ),
            Err(_) => format!(
                "No vehicle with license plate {} found in the parking lot.",
                plate
            ),
        };
        Reply::info("Search Result", text)
    }

    fn spot_details(&self, raw: &str) -> Reply {
        let id = match parse_spot_id(raw, self.registry.capacity(), Field::SpotToInspect) {
            Ok(id) => id,
            Err(e) => return e.into(),
        };

        match self.registry.vehicle_details(id) {
            Ok(details) => Reply::info("Spot Details", details),
            Err(e) => Reply::error(e.to_string()),
        }
    }

    fn dump(&self) -> Reply {
        let snapshot = Snapshot {
            title: &self.title,
            capacity: self.registry.capacity(),
            available: self.registry.list_available(),
            spots: self.registry.spots(),
        };

        match serde_json::to_string_pretty(&snapshot) {
            Ok(json) => Reply::info("Snapshot", json),
            Err(e) => Reply::error(format!("Failed to serialize parking lot: {}", e)),
        }
    }
}
