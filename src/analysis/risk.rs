use chrono::{DateTime, Duration, Utc};
use rand::seq::IndexedRandom;
use rand::Rng;
use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

use super::utils::round_to;
use crate::catalog::RiskLevel;

const FACTORS: [&str; 3] = ["Orbital Density", "Solar Activity", "Debris Environment"];
const VALIDITY: Duration = Duration::hours(24);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    Positive,
    Negative,
}

impl Impact {
    pub const ALL: [Impact; 2] = [Impact::Positive, Impact::Negative];

    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL.choose(rng).copied().unwrap_or(Impact::Positive)
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ContributingFactor {
    pub factor: String,
    pub weight: f64,
    pub impact: Impact,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RiskPrediction {
    /// Whatever the caller sent, unvalidated
    pub satellite_id: Value,
    pub predicted_risk: RiskLevel,
    pub risk_score: f64,
    pub contributing_factors: Vec<ContributingFactor>,
    pub prediction_time: DateTime<Utc>,
    pub valid_until: DateTime<Utc>,
}

/// Random risk classification for `satellite_id`. The id is echoed as given;
/// it does not have to exist in the catalog.
pub fn predict_risk(satellite_id: Value, rng: &mut impl Rng, now: DateTime<Utc>) -> RiskPrediction {
    let predicted_risk = RiskLevel::random(rng);
    let risk_score = round_to(rng.random_range(0.0..=1.0), 3);
    let contributing_factors = FACTORS
        .iter()
        .map(|name| ContributingFactor {
            factor: name.to_string(),
            weight: round_to(rng.random_range(0.1..=0.9), 2),
            impact: Impact::random(rng),
        })
        .collect();

    RiskPrediction {
        satellite_id,
        predicted_risk,
        risk_score,
        contributing_factors,
        prediction_time: now,
        valid_until: now + VALIDITY,
    }
}
