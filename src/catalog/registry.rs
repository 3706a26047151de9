use chrono::{DateTime, Utc};
use rand::Rng;

use super::motion;
use super::seed::seed_satellites;
use super::types::{PropagatedSatellite, RiskDistribution, Satellite};

/// The fixed set of satellites served by the mock.
///
/// Records are created once and only ever mutated afterwards; identity is the
/// NORAD id.
#[derive(Debug, Clone)]
pub struct Catalog {
    satellites: Vec<Satellite>,
}

impl Catalog {
    pub fn seeded(rng: &mut impl Rng, now: DateTime<Utc>) -> Self {
        Self {
            satellites: seed_satellites(rng, now),
        }
    }

    pub fn satellites(&self) -> &[Satellite] {
        &self.satellites
    }

    pub fn len(&self) -> usize {
        self.satellites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.satellites.is_empty()
    }

    pub fn find(&self, norad_id: u32) -> Option<&Satellite> {
        self.satellites.iter().find(|s| s.norad_id == norad_id)
    }

    pub fn first_id(&self) -> Option<u32> {
        self.satellites.first().map(|s| s.norad_id)
    }

    pub fn risk_distribution(&self) -> RiskDistribution {
        let mut distribution = RiskDistribution::default();
        for satellite in &self.satellites {
            distribution.record(satellite.risk_level);
        }
        distribution
    }

    /// Nudge every record and stamp it with `now`.
    pub fn drift(&mut self, rng: &mut impl Rng, now: DateTime<Utc>) {
        for satellite in &mut self.satellites {
            satellite.position = motion::drift(satellite.position, rng);
            satellite.last_updated = now;
        }
    }

    /// Copies of every record moved ahead by a random look-ahead. The catalog
    /// itself is left untouched.
    pub fn propagate(&self, rng: &mut impl Rng, predicted_time: &str) -> Vec<PropagatedSatellite> {
        self.satellites
            .iter()
            .map(|satellite| {
                let mut moved = satellite.clone();
                moved.position = motion::extrapolate(satellite.position, rng);
                PropagatedSatellite {
                    satellite: moved,
                    predicted_time: predicted_time.to_string(),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn catalog(seed: u64) -> (Catalog, StdRng) {
        let mut rng = StdRng::seed_from_u64(seed);
        let catalog = Catalog::seeded(&mut rng, Utc::now());
        (catalog, rng)
    }

    #[test]
    fn seeds_three_fixed_records() {
        let (catalog, _) = catalog(1);
        let ids: Vec<u32> = catalog.satellites().iter().map(|s| s.norad_id).collect();
        assert_eq!(ids, vec![25544, 43013, 48274]);
        assert_eq!(catalog.first_id(), Some(25544));
        assert_eq!(catalog.find(43013).map(|s| s.name.as_str()), Some("STARLINK-1007"));
        assert!(catalog.find(999_999).is_none());
    }

    #[test]
    fn seeded_altitudes_match_orbit_class() {
        let (catalog, _) = catalog(2);
        let iss = catalog.find(25544).unwrap();
        assert!((400.0..=450.0).contains(&iss.position.altitude));
        let cosmos = catalog.find(48274).unwrap();
        assert!((19_000.0..=21_000.0).contains(&cosmos.position.altitude));
        assert!(cosmos.velocity.x.abs() <= 3.8);
    }

    #[test]
    fn same_seed_same_catalog() {
        let now = Utc::now();
        let a = Catalog::seeded(&mut StdRng::seed_from_u64(42), now);
        let b = Catalog::seeded(&mut StdRng::seed_from_u64(42), now);
        assert_eq!(a.satellites(), b.satellites());
    }

    #[test]
    fn risk_distribution_covers_every_record() {
        for seed in 0..20 {
            let (catalog, _) = catalog(seed);
            assert_eq!(catalog.risk_distribution().total(), catalog.len());
        }
    }

    #[test]
    fn drift_refreshes_timestamps_and_keeps_identity() {
        let (mut catalog, mut rng) = catalog(5);
        let later = Utc::now() + Duration::seconds(10);
        let names: Vec<String> = catalog.satellites().iter().map(|s| s.name.clone()).collect();

        catalog.drift(&mut rng, later);

        assert_eq!(catalog.len(), 3);
        for (satellite, name) in catalog.satellites().iter().zip(names) {
            assert_eq!(satellite.name, name);
            assert_eq!(satellite.last_updated, later);
        }
    }

    #[test]
    fn propagate_leaves_catalog_untouched() {
        let (catalog, mut rng) = catalog(9);
        let before = catalog.satellites().to_vec();

        let moved = catalog.propagate(&mut rng, "2030-01-01T00:00:00Z");

        assert_eq!(catalog.satellites(), before.as_slice());
        assert_eq!(moved.len(), 3);
        assert!(moved.iter().all(|p| p.predicted_time == "2030-01-01T00:00:00Z"));
        assert_eq!(moved[1].satellite.norad_id, 43013);
    }
}
