use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::catalog::Catalog;

/// Everything the mock keeps between requests: the satellite catalog and the
/// random source every payload is drawn from.
///
/// Fields are public so handlers can borrow both at once.
pub struct MockBackend {
    pub catalog: Catalog,
    pub rng: StdRng,
}

impl MockBackend {
    /// Seeded backends are fully reproducible; without a seed the OS entropy
    /// source is used.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(rng)
    }

    pub fn with_rng(mut rng: StdRng) -> Self {
        let catalog = Catalog::seeded(&mut rng, Utc::now());
        Self { catalog, rng }
    }
}
