pub mod plate;
pub mod spot;

pub use plate::LicensePlate;
pub use spot::{Spot, SpotId};
