pub mod motion;
mod registry;
mod seed;
mod types;

pub use registry::Catalog;
pub use types::{
    Position, PropagatedSatellite, RiskDistribution, RiskLevel, Satellite, SatelliteRef, Velocity,
};
