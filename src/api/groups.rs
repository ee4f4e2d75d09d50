//! Group listing endpoint.

use axum::extract::State;

use super::{success, ApiResult};
use crate::grouping::{partition, GROUP_SIZE};
use crate::models::{IndexView, Level, LevelGroups};
use crate::AppState;

/// GET / - Groups for every level.
pub async fn index(State(state): State<AppState>) -> ApiResult<IndexView> {
    let mut store = state.repo.acquire().await?;

    let mut levels = Vec::with_capacity(Level::ALL.len());
    for level in Level::ALL {
        let players = store.list_by_level(level).await?;
        levels.push(LevelGroups::new(level, partition(&players, GROUP_SIZE)));
    }

    success(IndexView {
        next_match: state.config.next_match.next_match_today(),
        levels,
    })
}
