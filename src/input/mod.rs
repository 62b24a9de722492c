//! Validation of raw user text before it reaches the registry.

use std::fmt;
use thiserror::Error;

use crate::domain::{LicensePlate, SpotId};

/// The input field a value was read from, used to word blank-input errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    PlateToPark,
    PlateToFind,
    SpotToRelease,
    SpotToInspect,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Field::PlateToPark => "License plate number cannot be left blank.",
            Field::PlateToFind => "Please enter a license plate number to search.",
            Field::SpotToRelease => "Please enter a spot ID to release.",
            Field::SpotToInspect => "Please enter a spot ID to inspect.",
        };
        f.write_str(message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("{field}")]
    BlankInput { field: Field },
    #[error("Please enter a valid spot ID.")]
    NotNumeric { input: String },
    #[error("Please enter a spot ID between 1 and {capacity}.")]
    OutOfRange { input: String, capacity: u32 },
}

impl InputError {
    /// True for the non-numeric and out-of-range cases
    pub fn is_invalid_spot_id(&self) -> bool {
        matches!(
            self,
            InputError::NotNumeric { .. } | InputError::OutOfRange { .. }
        )
    }
}

/// Validate a license plate typed by the user
pub fn parse_plate(raw: &str, field: Field) -> Result<LicensePlate, InputError> {
    LicensePlate::new(raw).ok_or(InputError::BlankInput { field })
}

/// Validate a spot id typed by the user: base-10 digits only, in `1..=capacity`
pub fn parse_spot_id(raw: &str, capacity: u32, field: Field) -> Result<SpotId, InputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InputError::BlankInput { field });
    }

    // Signs, decimal points and embedded spaces are all rejected
    if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InputError::NotNumeric {
            input: trimmed.to_string(),
        });
    }

    let out_of_range = || InputError::OutOfRange {
        input: trimmed.to_string(),
        capacity,
    };

    // All-digit strings only fail to parse on overflow
    let id: u64 = trimmed.parse().map_err(|_| out_of_range())?;
    if id < 1 || id > u64::from(capacity) {
        return Err(out_of_range());
    }

    Ok(SpotId::new(id as u32))
}
