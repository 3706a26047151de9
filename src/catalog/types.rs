use chrono::{DateTime, Utc};
use rand::seq::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Geodetic position of a satellite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Position {
    /// Degrees, clamped to [-90, 90]
    pub latitude: f64,
    /// Degrees, wrapped into (-180, 180]
    pub longitude: f64,
    /// Kilometres, never below 100
    pub altitude: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Velocity {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema, strum_macros::Display,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 3] = [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High];

    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL.choose(rng).copied().unwrap_or(RiskLevel::Low)
    }
}

/// A tracked object in the mock catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Satellite {
    pub norad_id: u32,
    pub name: String,
    pub tle_line1: String,
    pub tle_line2: String,
    pub position: Position,
    pub velocity: Velocity,
    pub risk_level: RiskLevel,
    pub last_updated: DateTime<Utc>,
}

impl Satellite {
    pub fn reference(&self) -> SatelliteRef {
        SatelliteRef {
            norad_id: self.norad_id,
            name: self.name.clone(),
        }
    }
}

/// Short form used when another payload points at a satellite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SatelliteRef {
    pub norad_id: u32,
    pub name: String,
}

/// A satellite copy moved to a requested time. Never written back.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PropagatedSatellite {
    #[serde(flatten)]
    pub satellite: Satellite,
    pub predicted_time: String,
}

/// Per-level satellite counts. Every level is always present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct RiskDistribution {
    #[serde(rename = "LOW")]
    pub low: usize,
    #[serde(rename = "MEDIUM")]
    pub medium: usize,
    #[serde(rename = "HIGH")]
    pub high: usize,
}

impl RiskDistribution {
    pub fn record(&mut self, level: RiskLevel) {
        match level {
            RiskLevel::Low => self.low += 1,
            RiskLevel::Medium => self.medium += 1,
            RiskLevel::High => self.high += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.low + self.medium + self.high
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn random_risk_level_reaches_every_level() {
        let mut rng = StdRng::seed_from_u64(19);
        let seen: HashSet<RiskLevel> = (0..200).map(|_| RiskLevel::random(&mut rng)).collect();
        assert_eq!(seen.len(), RiskLevel::ALL.len());
    }

    #[test]
    fn risk_level_formats_like_its_wire_name() {
        for level in RiskLevel::ALL {
            assert_eq!(serde_json::to_value(level).unwrap(), level.to_string());
        }
    }
}
