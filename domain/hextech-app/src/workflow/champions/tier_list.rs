use std::{sync::Arc, time::Duration};

use crate::{domain::champion::ChampionRepository, workflow::champions::ChampionStatsView};

const TIER_LIST_CACHE_KEY: &str = "tierList";

#[async_trait::async_trait]
pub trait GetTierListUseCase {
    async fn get_tier_list(&self) -> Result<Vec<ChampionStatsView>, GetTierListError>;
    /// Drops the cached tier list so the next read goes to storage.
    async fn invalidate(&self);
}

#[derive(Debug)]
pub enum GetTierListError {
    Repository,
}

pub struct GetTierListUseCaseImpl<R: ChampionRepository> {
    champion_repository: Arc<R>,
    tier_list_cache: moka::future::Cache<&'static str, Vec<ChampionStatsView>>,
}

impl<R: ChampionRepository> GetTierListUseCaseImpl<R> {
    pub fn new(champion_repository: Arc<R>, time_to_live: Option<Duration>) -> Self {
        let mut builder = moka::future::Cache::builder();
        if let Some(ttl) = time_to_live {
            builder = builder.time_to_live(ttl);
        }
        Self {
            champion_repository,
            tier_list_cache: builder.build(),
        }
    }
}

#[async_trait::async_trait]
impl<R: ChampionRepository + Send + Sync + 'static> GetTierListUseCase
    for GetTierListUseCaseImpl<R>
{
    async fn get_tier_list(&self) -> Result<Vec<ChampionStatsView>, GetTierListError> {
        if let Some(cached) = self.tier_list_cache.get(TIER_LIST_CACHE_KEY).await {
            log::debug!("Tier list served from cache");
            return Ok(cached);
        }

        // Concurrent misses each read storage and the last insert wins.
        let champions = match self.champion_repository.get_all().await {
            Ok(champions) => champions,
            Err(e) => {
                log::error!("Error retrieving champion stats: {}", e);
                return Err(GetTierListError::Repository);
            }
        };
        let tier_list: Vec<ChampionStatsView> = champions
            .into_iter()
            .map(ChampionStatsView::from)
            .collect();

        log::debug!("Caching tier list with {} champions", tier_list.len());
        self.tier_list_cache
            .insert(TIER_LIST_CACHE_KEY, tier_list.clone())
            .await;
        Ok(tier_list)
    }

    async fn invalidate(&self) {
        self.tier_list_cache.invalidate(TIER_LIST_CACHE_KEY).await;
    }
}
