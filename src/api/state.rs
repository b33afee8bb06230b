use std::sync::Arc;

use crate::recommender::Recommender;
use crate::sessions::SessionStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Recommendation context; `None` when the artifact failed to load,
    /// in which case every prediction request is rejected
    pub recommender: Option<Arc<Recommender>>,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(recommender: Option<Arc<Recommender>>, sessions: SessionStore) -> Self {
        Self {
            recommender,
            sessions,
        }
    }
}
