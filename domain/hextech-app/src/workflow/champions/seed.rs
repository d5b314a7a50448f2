use std::sync::Arc;

use crate::domain::champion::{ChampionRepository, NewChampionStats};

#[async_trait::async_trait]
pub trait SeedChampionsUseCase {
    /// Inserts the demo champions, but only into an empty store.
    async fn seed_if_empty(&self) -> Result<SeedOutcome, SeedChampionsError>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedOutcome {
    Seeded(usize),
    Skipped { existing: u64 },
}

#[derive(Debug)]
pub enum SeedChampionsError {
    RepositoryError(String),
}

impl std::fmt::Display for SeedChampionsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeedChampionsError::RepositoryError(e) => write!(f, "Seeding failed: {}", e),
        }
    }
}

pub fn demo_champions() -> Vec<NewChampionStats> {
    vec![
        NewChampionStats::new("Ahri", "Mid", 0.12, 0.52, 0.18, 10234),
        NewChampionStats::new("Sett", "Top", 0.10, 0.51, 0.22, 9345),
        NewChampionStats::new("Jarvan IV", "Jungle", 0.08, 0.49, 0.05, 8123),
        NewChampionStats::new("Leona", "Support", 0.07, 0.53, 0.12, 7560),
    ]
}

pub struct SeedChampionsUseCaseImpl<R: ChampionRepository> {
    champion_repository: Arc<R>,
}

impl<R: ChampionRepository> SeedChampionsUseCaseImpl<R> {
    pub fn new(champion_repository: Arc<R>) -> Self {
        Self {
            champion_repository,
        }
    }
}

#[async_trait::async_trait]
impl<R: ChampionRepository + Send + Sync + 'static> SeedChampionsUseCase
    for SeedChampionsUseCaseImpl<R>
{
    async fn seed_if_empty(&self) -> Result<SeedOutcome, SeedChampionsError> {
        let existing = self
            .champion_repository
            .count()
            .await
            .map_err(|e| SeedChampionsError::RepositoryError(e.to_string()))?;
        if existing > 0 {
            log::info!("Champion table holds {} rows, skipping seed", existing);
            return Ok(SeedOutcome::Skipped { existing });
        }

        let champions = demo_champions();
        let amount = champions.len();
        self.champion_repository
            .insert_many(champions)
            .await
            .map_err(|e| SeedChampionsError::RepositoryError(e.to_string()))?;
        log::info!("Seeded {} demo champions", amount);
        Ok(SeedOutcome::Seeded(amount))
    }
}
