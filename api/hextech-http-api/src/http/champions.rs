use axum::{Json, extract::State};
use hextech_app::workflow::champions::{ChampionStatsView, tier_list::GetTierListError};

use crate::{AppState, ServiceError};

#[derive(serde::Serialize, Clone, Debug)]
pub struct JsonChampionStats {
    id: i64,
    name: String,
    role: String,
    pickrate: f64,
    winrate: f64,
    banrate: f64,
    matches: i32,
}

impl From<ChampionStatsView> for JsonChampionStats {
    fn from(view: ChampionStatsView) -> Self {
        Self {
            id: view.id.0,
            name: view.name,
            role: view.role,
            pickrate: view.pick_rate,
            winrate: view.win_rate,
            banrate: view.ban_rate,
            matches: view.matches,
        }
    }
}

pub async fn get_stats(
    State(app_state): State<AppState>,
) -> Result<Json<Vec<JsonChampionStats>>, ServiceError> {
    match app_state.app.tier_list_use_case.get_tier_list().await {
        Ok(tier_list) => Ok(Json(
            tier_list
                .into_iter()
                .map(JsonChampionStats::from)
                .collect(),
        )),
        Err(GetTierListError::Repository) => Err(ServiceError::Internal(
            "Error retrieving champion stats".to_string(),
        )),
    }
}
