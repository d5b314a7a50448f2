use crate::domain::RepoError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChampionId(pub i64);

/// A stored row of champion statistics. Rates are fractions in `[0, 1]`.
#[derive(Clone, Debug, PartialEq)]
pub struct ChampionStats {
    pub id: ChampionId,
    pub name: String,
    pub role: String,
    pub pick_rate: f64,
    pub win_rate: f64,
    pub ban_rate: f64,
    pub matches: i32,
}

/// Champion statistics that have not been assigned an id by the store yet.
#[derive(Clone, Debug, PartialEq)]
pub struct NewChampionStats {
    pub name: String,
    pub role: String,
    pub pick_rate: f64,
    pub win_rate: f64,
    pub ban_rate: f64,
    pub matches: i32,
}

impl NewChampionStats {
    pub fn new(
        name: impl Into<String>,
        role: impl Into<String>,
        pick_rate: f64,
        win_rate: f64,
        ban_rate: f64,
        matches: i32,
    ) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            pick_rate,
            win_rate,
            ban_rate,
            matches,
        }
    }
}

#[async_trait::async_trait]
pub trait ChampionRepository {
    /// All stored rows in primary key order.
    async fn get_all(&self) -> Result<Vec<ChampionStats>, RepoError>;
    async fn count(&self) -> Result<u64, RepoError>;
    async fn insert_many(&self, champions: Vec<NewChampionStats>) -> Result<(), RepoError>;
}
