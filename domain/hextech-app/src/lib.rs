use std::{sync::Arc, time::Duration};

use crate::{
    domain::champion::ChampionRepository,
    workflow::champions::{
        seed::{SeedChampionsUseCase, SeedChampionsUseCaseImpl},
        tier_list::{GetTierListUseCase, GetTierListUseCaseImpl},
    },
};

pub mod domain;
pub mod workflow;

#[derive(Clone, Debug, Default)]
pub struct ApplicationSettings {
    /// Expiry of the cached tier list. `None` keeps it for the process lifetime.
    pub tier_list_ttl: Option<Duration>,
}

pub struct Application {
    pub tier_list_use_case: Box<dyn GetTierListUseCase + Send + Sync + 'static>,
    pub seed_champions_use_case: Box<dyn SeedChampionsUseCase + Send + Sync + 'static>,
}

pub fn build_application<C: ChampionRepository + Send + Sync + 'static>(
    champion_repository: Arc<C>,
    settings: ApplicationSettings,
) -> Application {
    Application {
        tier_list_use_case: Box::new(GetTierListUseCaseImpl::new(
            champion_repository.clone(),
            settings.tier_list_ttl,
        )),
        seed_champions_use_case: Box::new(SeedChampionsUseCaseImpl::new(champion_repository)),
    }
}
