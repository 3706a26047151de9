use std::sync::Arc;
use tokio::sync::Mutex;

use crate::backend::MockBackend;

#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<Mutex<MockBackend>>,
}

impl AppState {
    /// `seed` fixes the catalog and every generated payload; `None` draws
    /// from OS entropy.
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            backend: Arc::new(Mutex::new(MockBackend::new(seed))),
        }
    }
}
