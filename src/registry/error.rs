use thiserror::Error;

use crate::domain::SpotId;

/// Failures reported by [`super::ParkingRegistry`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("no available spots, parking lot is full")]
    NoAvailableSpot,
    #[error("spot {id} does not exist (valid range is 1..={capacity})")]
    InvalidSpotId { id: SpotId, capacity: u32 },
    #[error("no vehicle with license plate {plate} found in the parking lot")]
    NotFound { plate: String },
}
