//! parkotron - Fixed-capacity parking lot registry with a terminal front end

pub mod config;
pub mod domain;
pub mod input;
pub mod registry;
pub mod session;

pub use domain::{LicensePlate, Spot, SpotId};
pub use registry::{ParkingRegistry, RegistryError};
