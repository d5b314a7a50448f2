use crate::domain::champion::{ChampionId, ChampionStats};

pub mod seed;
pub mod tier_list;

#[derive(Clone, Debug, PartialEq)]
pub struct ChampionStatsView {
    pub id: ChampionId,
    pub name: String,
    pub role: String,
    pub pick_rate: f64,
    pub win_rate: f64,
    pub ban_rate: f64,
    pub matches: i32,
}

impl From<ChampionStats> for ChampionStatsView {
    fn from(stats: ChampionStats) -> Self {
        Self {
            id: stats.id,
            name: stats.name,
            role: stats.role,
            pick_rate: stats.pick_rate,
            win_rate: stats.win_rate,
            ban_rate: stats.ban_rate,
            matches: stats.matches,
        }
    }
}
