pub mod error;

pub use error::RegistryError;

use crate::domain::{LicensePlate, Spot, SpotId};

/// Fixed-capacity collection of parking spots.
///
/// Spot `k` lives at index `k - 1`; the spot count never changes after
/// construction.
#[derive(Debug, Clone)]
pub struct ParkingRegistry {
    spots: Vec<Spot>,
}

impl ParkingRegistry {
    /// Create a registry with `capacity` vacant spots numbered `1..=capacity`
    pub fn new(capacity: u32) -> Self {
        let spots = (1..=capacity).map(|id| Spot::new(SpotId::new(id))).collect();
        Self { spots }
    }

    pub fn capacity(&self) -> u32 {
        self.spots.len() as u32
    }

    /// All spots in ascending id order
    pub fn spots(&self) -> &[Spot] {
        &self.spots
    }

    /// Ids of all vacant spots, ascending
    pub fn list_available(&self) -> Vec<SpotId> {
        self.spots
            .iter()
            .filter(|spot| spot.is_available())
            .map(Spot::id)
            .collect()
    }

    /// Occupied spots with their plates, ascending by id
    pub fn occupied(&self) -> Vec<(SpotId, &LicensePlate)> {
        self.spots
            .iter()
            .filter_map(|spot| spot.occupant().map(|plate| (spot.id(), plate)))
            .collect()
    }

    /// Park a vehicle in the lowest-numbered vacant spot
    pub fn park(&mut self, plate: LicensePlate) -> Result<SpotId, RegistryError> {
        let spot = self
            .spots
            .iter_mut()
            .find(|spot| spot.is_available())
            .ok_or(RegistryError::NoAvailableSpot)?;

        spot.occupy(plate);
        Ok(spot.id())
    }

    /// Vacate a spot. Releasing a spot that is already vacant succeeds.
    pub fn release(&mut self, id: SpotId) -> Result<(), RegistryError> {
        let index = self.index_of(id)?;
        self.spots[index].vacate();
        Ok(())
    }

    /// Locate the first spot (ascending) holding `plate`
    pub fn find_vehicle(&self, plate: &str) -> Result<SpotId, RegistryError> {
        self.spots
            .iter()
            .find(|spot| spot.occupant().is_some_and(|p| p.as_str() == plate))
            .map(Spot::id)
            .ok_or_else(|| RegistryError::NotFound {
                plate: plate.to_string(),
            })
    }

    pub fn spot(&self, id: SpotId) -> Result<&Spot, RegistryError> {
        let index = self.index_of(id)?;
        Ok(&self.spots[index])
    }

    pub fn vehicle_details(&self, id: SpotId) -> Result<String, RegistryError> {
        self.spot(id).map(Spot::vehicle_details)
    }

    fn index_of(&self, id: SpotId) -> Result<usize, RegistryError> {
        let capacity = self.capacity();
        if id.get() == 0 || id.get() > capacity {
            return Err(RegistryError::InvalidSpotId { id, capacity });
        }
        Ok(id.get() as usize - 1)
    }
}
