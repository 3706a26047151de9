use chrono::{DateTime, Utc};
use rand::Rng;

use super::motion::wrap_longitude;
use super::types::{Position, RiskLevel, Satellite, Velocity};

/// Static description of one catalog entry before randomization.
struct SeedEntry {
    norad_id: u32,
    name: &'static str,
    tle_line1: &'static str,
    tle_line2: &'static str,
    altitude_km: (f64, f64),
    /// Per-axis bound for the initial velocity, km/s
    max_speed_km_s: f64,
}

const SEED_ENTRIES: [SeedEntry; 3] = [
    SeedEntry {
        norad_id: 25544,
        name: "ISS (ZARYA)",
        tle_line1: "1 25544U 98067A   23001.00000000  .00001234  00000-0  12345-4 0  9999",
        tle_line2: "2 25544  51.6400 195.0000 0003572  73.1000 287.0000 15.50000000123456",
        altitude_km: (400.0, 450.0),
        max_speed_km_s: 7.5,
    },
    SeedEntry {
        norad_id: 43013,
        name: "STARLINK-1007",
        tle_line1: "1 43013U 17073A   23001.00000000  .00002345  00000-0  23456-4 0  9999",
        tle_line2: "2 43013  53.0000 180.0000 0001234  90.0000 270.0000 15.25000000234567",
        altitude_km: (540.0, 570.0),
        max_speed_km_s: 7.6,
    },
    SeedEntry {
        norad_id: 48274,
        name: "COSMOS 2551",
        tle_line1: "1 48274U 21036A   23001.00000000  .00001111  00000-0  11111-4 0  9999",
        tle_line2: "2 48274  64.8000 120.0000 0012345 120.0000 240.0000 14.19000000345678",
        altitude_km: (19_000.0, 21_000.0),
        max_speed_km_s: 3.8,
    },
];

pub fn seed_satellites(rng: &mut impl Rng, now: DateTime<Utc>) -> Vec<Satellite> {
    SEED_ENTRIES
        .iter()
        .map(|entry| {
            let (alt_min, alt_max) = entry.altitude_km;
            let speed = entry.max_speed_km_s;
            Satellite {
                norad_id: entry.norad_id,
                name: entry.name.to_string(),
                tle_line1: entry.tle_line1.to_string(),
                tle_line2: entry.tle_line2.to_string(),
                position: Position {
                    latitude: rng.random_range(-90.0..=90.0),
                    longitude: wrap_longitude(rng.random_range(-180.0..180.0)),
                    altitude: rng.random_range(alt_min..=alt_max),
                },
                velocity: Velocity {
                    x: rng.random_range(-speed..=speed),
                    y: rng.random_range(-speed..=speed),
                    z: rng.random_range(-speed..=speed),
                },
                risk_level: RiskLevel::random(rng),
                last_updated: now,
            }
        })
        .collect()
}
