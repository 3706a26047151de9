use rand::Rng;

use super::types::Position;

pub const MIN_ALTITUDE_KM: f64 = 100.0;

const LATITUDE_JITTER_DEG: f64 = 0.1;
const LONGITUDE_JITTER_DEG: f64 = 0.5;
const ALTITUDE_JITTER_KM: f64 = 1.0;

/// Upper bound of the simulated look-ahead, in seconds.
const MAX_LOOKAHEAD_S: f64 = 3600.0;
const LATITUDE_RATE_DEG_S: f64 = 0.001;
const LONGITUDE_RATE_DEG_S: f64 = 0.005;
const ALTITUDE_RATE_KM_S: f64 = 0.0001;

pub fn clamp_latitude(latitude: f64) -> f64 {
    latitude.clamp(-90.0, 90.0)
}

/// Wrap into (-180, 180]. Exactly -180 maps to 180.
pub fn wrap_longitude(longitude: f64) -> f64 {
    let wrapped = (longitude + 180.0).rem_euclid(360.0) - 180.0;
    if wrapped <= -180.0 {
        wrapped + 360.0
    } else {
        wrapped
    }
}

pub fn floor_altitude(altitude: f64) -> f64 {
    altitude.max(MIN_ALTITUDE_KM)
}

impl Position {
    /// Bring all three coordinates back into their valid ranges.
    pub fn normalized(self) -> Self {
        Position {
            latitude: clamp_latitude(self.latitude),
            longitude: wrap_longitude(self.longitude),
            altitude: floor_altitude(self.altitude),
        }
    }
}

/// Small random walk applied on every read of the catalog.
pub fn drift(position: Position, rng: &mut impl Rng) -> Position {
    Position {
        latitude: position.latitude
            + rng.random_range(-LATITUDE_JITTER_DEG..=LATITUDE_JITTER_DEG),
        longitude: position.longitude
            + rng.random_range(-LONGITUDE_JITTER_DEG..=LONGITUDE_JITTER_DEG),
        altitude: position.altitude + rng.random_range(-ALTITUDE_JITTER_KM..=ALTITUDE_JITTER_KM),
    }
    .normalized()
}

/// Linear extrapolation over a random look-ahead with a random direction per axis.
pub fn extrapolate(position: Position, rng: &mut impl Rng) -> Position {
    let dt = rng.random_range(0.0..=MAX_LOOKAHEAD_S);
    Position {
        latitude: position.latitude + dt * LATITUDE_RATE_DEG_S * rng.random_range(-1.0..=1.0),
        longitude: position.longitude + dt * LONGITUDE_RATE_DEG_S * rng.random_range(-1.0..=1.0),
        altitude: position.altitude + dt * ALTITUDE_RATE_KM_S * rng.random_range(-1.0..=1.0),
    }
    .normalized()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn in_range(p: &Position) -> bool {
        (-90.0..=90.0).contains(&p.latitude)
            && p.longitude > -180.0
            && p.longitude <= 180.0
            && p.altitude >= MIN_ALTITUDE_KM
    }

    #[test]
    fn wrap_longitude_boundaries() {
        assert_eq!(wrap_longitude(-180.0), 180.0);
        assert_eq!(wrap_longitude(180.0), 180.0);
        assert_eq!(wrap_longitude(0.0), 0.0);
        assert!((wrap_longitude(181.0) - (-179.0)).abs() < 1e-9);
        assert!((wrap_longitude(-181.0) - 179.0).abs() < 1e-9);
        assert!((wrap_longitude(540.0) - 180.0).abs() < 1e-9);
    }

    #[test]
    fn clamps_latitude_and_altitude() {
        let p = Position {
            latitude: 95.0,
            longitude: 10.0,
            altitude: 20.0,
        }
        .normalized();
        assert_eq!(p.latitude, 90.0);
        assert_eq!(p.altitude, MIN_ALTITUDE_KM);

        let p = Position {
            latitude: -120.0,
            longitude: 10.0,
            altitude: 450.0,
        }
        .normalized();
        assert_eq!(p.latitude, -90.0);
        assert_eq!(p.altitude, 450.0);
    }

    #[test]
    fn drift_stays_within_step_and_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let start = Position {
            latitude: 10.0,
            longitude: 20.0,
            altitude: 400.0,
        };
        for _ in 0..500 {
            let next = drift(start, &mut rng);
            assert!((next.latitude - start.latitude).abs() <= LATITUDE_JITTER_DEG + 1e-12);
            assert!((next.longitude - start.longitude).abs() <= LONGITUDE_JITTER_DEG + 1e-12);
            assert!((next.altitude - start.altitude).abs() <= ALTITUDE_JITTER_KM + 1e-12);
        }
    }

    #[test]
    fn drift_near_edges_keeps_position_valid() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut p = Position {
            latitude: 89.95,
            longitude: 179.9,
            altitude: 100.2,
        };
        for _ in 0..2000 {
            p = drift(p, &mut rng);
            assert!(in_range(&p), "out of range: {:?}", p);
        }
    }

    #[test]
    fn extrapolate_is_bounded_by_lookahead() {
        let mut rng = StdRng::seed_from_u64(3);
        let start = Position {
            latitude: 0.0,
            longitude: 0.0,
            altitude: 20_000.0,
        };
        for _ in 0..500 {
            let next = extrapolate(start, &mut rng);
            assert!(next.latitude.abs() <= MAX_LOOKAHEAD_S * LATITUDE_RATE_DEG_S + 1e-9);
            assert!(next.longitude.abs() <= MAX_LOOKAHEAD_S * LONGITUDE_RATE_DEG_S + 1e-9);
            assert!((next.altitude - start.altitude).abs() <= MAX_LOOKAHEAD_S * ALTITUDE_RATE_KM_S + 1e-9);
            assert!(in_range(&next));
        }
    }
}
