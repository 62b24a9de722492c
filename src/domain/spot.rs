use serde::Serialize;
use std::fmt;

use super::LicensePlate;

/// 1-based identifier of a parking spot
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct SpotId(u32);

impl SpotId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for SpotId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for SpotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One unit of parking capacity.
///
/// The occupant is the only mutable state: a spot is available exactly when
/// it holds no plate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Spot {
    id: SpotId,
    occupant: Option<LicensePlate>,
}

impl Spot {
    /// Create a vacant spot
    pub fn new(id: SpotId) -> Self {
        Self { id, occupant: None }
    }

    pub fn id(&self) -> SpotId {
        self.id
    }

    pub fn is_available(&self) -> bool {
        self.occupant.is_none()
    }

    pub fn occupant(&self) -> Option<&LicensePlate> {
        self.occupant.as_ref()
    }

    /// Plate of the parked vehicle, empty when vacant
    pub fn license_plate(&self) -> &str {
        self.occupant.as_ref().map_or("", LicensePlate::as_str)
    }

    /// Mark the spot occupied, overwriting any previous plate
    pub fn occupy(&mut self, plate: LicensePlate) {
        self.occupant = Some(plate);
    }

    pub fn vacate(&mut self) {
        self.occupant = None;
    }

    /// Human-readable detail view of the spot
    pub fn vehicle_details(&self) -> String {
        match &self.occupant {
            Some(plate) => format!("Slot ID: {}\nLicense Plate: {}", self.id, plate),
            None => "This slot is currently vacant.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plate(s: &str) -> LicensePlate {
        LicensePlate::new(s).unwrap()
    }

    #[test]
    fn test_new_spot_is_vacant() {
        let spot = Spot::new(SpotId::new(7));
        assert_eq!(spot.id().get(), 7);
        assert!(spot.is_available());
        assert_eq!(spot.license_plate(), "");
        assert!(spot.occupant().is_none());
    }

    #[test]
    fn test_occupy_and_vacate() {
        let mut spot = Spot::new(SpotId::new(1));
        spot.occupy(plate("ABC"));
        assert!(!spot.is_available());
        assert_eq!(spot.license_plate(), "ABC");

        // Overwrite is unconditional
        spot.occupy(plate("XYZ"));
        assert_eq!(spot.license_plate(), "XYZ");

        spot.vacate();
        assert!(spot.is_available());
        assert_eq!(spot.license_plate(), "");
    }

    #[test]
    fn test_vehicle_details() {
        let mut spot = Spot::new(SpotId::new(3));
        assert_eq!(spot.vehicle_details(), "This slot is currently vacant.");

        spot.occupy(plate("MH12 AB 1234"));
        assert_eq!(
            spot.vehicle_details(),
            "Slot ID: 3\nLicense Plate: MH12 AB 1234"
        );
    }
}
