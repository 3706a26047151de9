use chrono::{DateTime, Duration, Utc};
use rand::seq::IndexedRandom;
use rand::Rng;
use serde::Serialize;
use utoipa::ToSchema;

use super::utils::round_to;
use crate::catalog::{Catalog, RiskLevel, SatelliteRef};

const MAX_EVENTS: usize = 3;

/// A predicted close approach between two catalog satellites.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ConjunctionEvent {
    pub id: String,
    pub primary_satellite: SatelliteRef,
    pub secondary_satellite: SatelliteRef,
    pub time_of_closest_approach: DateTime<Utc>,
    /// km
    pub miss_distance: f64,
    pub probability_of_collision: f64,
    pub risk_level: RiskLevel,
    pub confidence: f64,
}

/// Generate between zero and three conjunctions between distinct satellites.
pub fn analyze_conjunctions(
    catalog: &Catalog,
    rng: &mut impl Rng,
    now: DateTime<Utc>,
) -> Vec<ConjunctionEvent> {
    let satellites = catalog.satellites();
    let count = rng.random_range(0..=MAX_EVENTS);

    (0..count)
        .filter_map(|i| {
            let primary = satellites.choose(rng)?;
            let others: Vec<_> = satellites
                .iter()
                .filter(|s| s.norad_id != primary.norad_id)
                .collect();
            let secondary = others.choose(rng)?;

            let hours_ahead = rng.random_range(1.0..=48.0);
            Some(ConjunctionEvent {
                id: format!("conj_{}_{}", now.timestamp(), i),
                primary_satellite: primary.reference(),
                secondary_satellite: secondary.reference(),
                time_of_closest_approach: now
                    + Duration::milliseconds((hours_ahead * 3_600_000.0) as i64),
                miss_distance: round_to(rng.random_range(0.1..=10.0), 2),
                probability_of_collision: round_to(rng.random_range(0.0001..=0.1), 6),
                risk_level: RiskLevel::random(rng),
                confidence: round_to(rng.random_range(0.8..=0.99), 3),
            })
        })
        .collect()
}
