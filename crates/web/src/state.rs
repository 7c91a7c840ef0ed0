use std::sync::Arc;

use storage::EntityStore;

use crate::features::leaderboard::codeforces::CodeforcesClient;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn EntityStore>,
    pub codeforces: CodeforcesClient,
}
