use std::sync::Arc;
use std::time::Instant;

use crate::config::AppConfig;
use crate::mailer::Mailer;
use crate::store::TestimonialStore;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub mailer: Arc<dyn Mailer>,
    pub store: Arc<TestimonialStore>,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(config: AppConfig, mailer: Arc<dyn Mailer>, store: TestimonialStore) -> Self {
        Self {
            config: Arc::new(config),
            mailer,
            store: Arc::new(store),
            started_at: Instant::now(),
        }
    }
}
