use chrono::{DateTime, Utc};
use rand::seq::IndexedRandom;
use rand::Rng;
use serde::Serialize;
use utoipa::ToSchema;

use crate::catalog::Catalog;

const MAX_ALERTS: usize = 2;
const MESSAGES: [&str; 3] = [
    "Potential conjunction detected",
    "Anomalous behavior observed",
    "Space weather alert",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema, strum_macros::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AlertType {
    Conjunction,
    Debris,
    SolarStorm,
    Anomaly,
}

impl AlertType {
    pub const ALL: [AlertType; 4] = [
        AlertType::Conjunction,
        AlertType::Debris,
        AlertType::SolarStorm,
        AlertType::Anomaly,
    ];
}

/// Alert severity. Same scale as `RiskLevel` with one extra step on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema, strum_macros::Display)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Low,
        Severity::Medium,
        Severity::High,
        Severity::Critical,
    ];
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Alert {
    pub id: String,
    #[serde(rename = "type")]
    pub alert_type: AlertType,
    pub severity: Severity,
    pub satellite_id: u32,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub acknowledged: bool,
}

/// Between zero and two fresh, unacknowledged alerts against catalog satellites.
pub fn generate_alerts(catalog: &Catalog, rng: &mut impl Rng, now: DateTime<Utc>) -> Vec<Alert> {
    let count = rng.random_range(0..=MAX_ALERTS);
    (0..count)
        .filter_map(|i| {
            let alert_type = *AlertType::ALL.choose(rng)?;
            let severity = *Severity::ALL.choose(rng)?;
            let satellite_id = catalog.satellites().choose(rng)?.norad_id;
            let text = MESSAGES.choose(rng)?;
            Some(Alert {
                id: format!("alert_{}_{}", now.timestamp(), i),
                alert_type,
                severity,
                satellite_id,
                message: format!("Mock alert {} - {}", i + 1, text),
                timestamp: now,
                acknowledged: false,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn alerts_reference_catalog_and_start_unacknowledged() {
        let mut rng = StdRng::seed_from_u64(31);
        let now = Utc::now();
        let catalog = Catalog::seeded(&mut rng, now);
        let mut seen = 0;
        for _ in 0..200 {
            let alerts = generate_alerts(&catalog, &mut rng, now);
            assert!(alerts.len() <= MAX_ALERTS);
            for (i, alert) in alerts.iter().enumerate() {
                assert!(!alert.acknowledged);
                assert!(catalog.find(alert.satellite_id).is_some());
                assert!(alert.message.starts_with(&format!("Mock alert {} - ", i + 1)));
                assert_eq!(alert.id, format!("alert_{}_{}", now.timestamp(), i));
            }
            seen += alerts.len();
        }
        assert!(seen > 0);
    }

    #[test]
    fn alert_type_serializes_snake_case() {
        let value = serde_json::to_value(AlertType::SolarStorm).unwrap();
        assert_eq!(value, "solar_storm");
        assert_eq!(AlertType::SolarStorm.to_string(), "solar_storm");
        assert_eq!(Severity::Critical.to_string(), "CRITICAL");
    }
}
