use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;
use utoipa::ToSchema;

use super::utils::round_to;
use crate::catalog::{Catalog, RiskDistribution};

const MAX_ACTIVE_ALERTS: u32 = 5;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Statistics {
    pub total_satellites: usize,
    pub risk_distribution: RiskDistribution,
    pub active_alerts: u32,
    pub last_updated: DateTime<Utc>,
    /// Percent, one decimal
    pub tracking_accuracy: f64,
}

pub fn summarize(catalog: &Catalog, rng: &mut impl Rng, now: DateTime<Utc>) -> Statistics {
    Statistics {
        total_satellites: catalog.len(),
        risk_distribution: catalog.risk_distribution(),
        active_alerts: rng.random_range(0..=MAX_ACTIVE_ALERTS),
        last_updated: now,
        tracking_accuracy: round_to(rng.random_range(95.5..=99.9), 1),
    }
}
