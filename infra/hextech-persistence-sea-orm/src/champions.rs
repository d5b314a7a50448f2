use hextech_app::domain::{
    RepoError,
    champion::{ChampionId, ChampionRepository, ChampionStats, NewChampionStats},
};
use hextech_persistence_sea_orm_entities::champion;
use sea_orm::{
    ActiveValue::{NotSet, Set},
    DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder,
};

pub struct ChampionRepositoryImpl {
    db: DatabaseConnection,
}

impl ChampionRepositoryImpl {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn model_to_champion(model: champion::Model) -> ChampionStats {
        ChampionStats {
            id: ChampionId(model.id),
            name: model.name,
            role: model.role,
            pick_rate: model.pickrate,
            win_rate: model.winrate,
            ban_rate: model.banrate,
            matches: model.matches,
        }
    }

    fn champion_to_model(champion: NewChampionStats) -> champion::ActiveModel {
        champion::ActiveModel {
            id: NotSet,
            name: Set(champion.name),
            role: Set(champion.role),
            pickrate: Set(champion.pick_rate),
            winrate: Set(champion.win_rate),
            banrate: Set(champion.ban_rate),
            matches: Set(champion.matches),
        }
    }
}

#[async_trait::async_trait]
impl ChampionRepository for ChampionRepositoryImpl {
    async fn get_all(&self) -> Result<Vec<ChampionStats>, RepoError> {
        let models = champion::Entity::find()
            .order_by_asc(champion::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| RepoError::StorageError(e.to_string()))?;
        Ok(models.into_iter().map(Self::model_to_champion).collect())
    }

    async fn count(&self) -> Result<u64, RepoError> {
        champion::Entity::find()
            .count(&self.db)
            .await
            .map_err(|e| RepoError::StorageError(e.to_string()))
    }

    async fn insert_many(&self, champions: Vec<NewChampionStats>) -> Result<(), RepoError> {
        if champions.is_empty() {
            return Ok(());
        }
        let models: Vec<champion::ActiveModel> = champions
            .into_iter()
            .map(Self::champion_to_model)
            .collect();
        champion::Entity::insert_many(models)
            .exec(&self.db)
            .await
            .map_err(|e| RepoError::StorageError(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use hextech_app::workflow::champions::{
        seed::{SeedChampionsUseCase, SeedChampionsUseCaseImpl, SeedOutcome},
        tier_list::{GetTierListUseCase, GetTierListUseCaseImpl},
    };

    use super::*;
    use crate::{create_schema, memory_db};

    async fn insert_raw(db: &DatabaseConnection, id: i64, matches: i32) {
        champion::Entity::insert(champion::ActiveModel {
            id: Set(id),
            name: Set("Singed".to_string()),
            role: Set("Top".to_string()),
            pickrate: Set(0.02),
            winrate: Set(0.51),
            banrate: Set(0.01),
            matches: Set(matches),
        })
        .exec(db)
        .await
        .unwrap();
    }

    fn teemo() -> NewChampionStats {
        NewChampionStats::new("Teemo", "Top", 0.01, 0.45, 0.4, 12)
    }

    #[tokio::test]
    async fn test_empty_table() {
        let repo = ChampionRepositoryImpl::new(memory_db().await);
        assert_eq!(repo.count().await.unwrap(), 0);
        assert!(repo.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_insert_many_assigns_ids_in_order() {
        let repo = ChampionRepositoryImpl::new(memory_db().await);
        repo.insert_many(vec![
            NewChampionStats::new("Ahri", "Mid", 0.12, 0.52, 0.18, 10234),
            NewChampionStats::new("Leona", "Support", 0.07, 0.53, 0.12, 7560),
        ])
        .await
        .unwrap();

        let rows = repo.get_all().await.unwrap();
        assert_eq!(repo.count().await.unwrap(), 2);
        assert_eq!(rows.len(), 2);
        assert!(rows[0].id.0 < rows[1].id.0);
        assert_eq!(rows[0].name, "Ahri");
        assert_eq!(rows[0].role, "Mid");
        assert_eq!(rows[0].pick_rate, 0.12);
        assert_eq!(rows[0].win_rate, 0.52);
        assert_eq!(rows[0].ban_rate, 0.18);
        assert_eq!(rows[0].matches, 10234);
        assert_eq!(rows[1].name, "Leona");
    }

    #[tokio::test]
    async fn test_insert_many_empty_batch_is_noop() {
        let repo = ChampionRepositoryImpl::new(memory_db().await);
        repo.insert_many(Vec::new()).await.unwrap();
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_duplicate_names_allowed() {
        let repo = ChampionRepositoryImpl::new(memory_db().await);
        repo.insert_many(vec![teemo(), teemo()]).await.unwrap();
        let rows = repo.get_all().await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_ne!(rows[0].id, rows[1].id);
    }

    #[tokio::test]
    async fn test_create_schema_is_repeatable() {
        let db = memory_db().await;
        let repo = ChampionRepositoryImpl::new(db.clone());
        repo.insert_many(vec![teemo()]).await.unwrap();

        create_schema(&db).await.unwrap();
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_seed_against_sqlite() {
        let repo = Arc::new(ChampionRepositoryImpl::new(memory_db().await));
        let seed = SeedChampionsUseCaseImpl::new(repo.clone());

        assert_eq!(seed.seed_if_empty().await.unwrap(), SeedOutcome::Seeded(4));
        assert_eq!(
            seed.seed_if_empty().await.unwrap(),
            SeedOutcome::Skipped { existing: 4 }
        );
        let names: Vec<String> = repo
            .get_all()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Ahri", "Sett", "Jarvan IV", "Leona"]);
    }

    #[tokio::test]
    async fn test_seed_skipped_for_unrelated_row() {
        let repo = Arc::new(ChampionRepositoryImpl::new(memory_db().await));
        repo.insert_many(vec![teemo()]).await.unwrap();

        let seed = SeedChampionsUseCaseImpl::new(repo.clone());
        assert_eq!(
            seed.seed_if_empty().await.unwrap(),
            SeedOutcome::Skipped { existing: 1 }
        );
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_tier_list_stale_after_direct_insert() {
        let repo = Arc::new(ChampionRepositoryImpl::new(memory_db().await));
        SeedChampionsUseCaseImpl::new(repo.clone())
            .seed_if_empty()
            .await
            .unwrap();
        let tier_list = GetTierListUseCaseImpl::new(repo.clone(), None);

        let first = tier_list.get_tier_list().await.unwrap();
        repo.insert_many(vec![teemo()]).await.unwrap();
        let second = tier_list.get_tier_list().await.unwrap();

        assert_eq!(first, second);
        assert_eq!(second.len(), 4);
        assert_eq!(repo.count().await.unwrap(), 5);
    }

    #[tokio::test]
    async fn test_externally_inserted_row_with_large_id() {
        let db = memory_db().await;
        insert_raw(&db, 3_000_000_000, 412).await;
        let repo = ChampionRepositoryImpl::new(db);
        repo.insert_many(vec![teemo()]).await.unwrap();

        let rows = repo.get_all().await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, ChampionId(3_000_000_000));
        assert_eq!(rows[0].name, "Singed");
        assert_eq!(rows[0].matches, 412);
        assert!(rows[1].id.0 > 3_000_000_000);
    }

    #[tokio::test]
    async fn test_matches_read_back_unchanged() {
        let db = memory_db().await;
        insert_raw(&db, 1, -5).await;
        let repo = ChampionRepositoryImpl::new(db);

        let rows = repo.get_all().await.unwrap();
        assert_eq!(rows[0].matches, -5);
    }

    #[tokio::test]
    async fn test_matches_written_unchanged() {
        let db = memory_db().await;
        let repo = ChampionRepositoryImpl::new(db.clone());
        repo.insert_many(vec![
            NewChampionStats::new("Zed", "Mid", 0.09, 0.5, 0.3, i32::MAX),
            NewChampionStats::new("Yuumi", "Support", 0.03, 0.47, 0.2, -7),
        ])
        .await
        .unwrap();

        let stored: Vec<i32> = champion::Entity::find()
            .order_by_asc(champion::Column::Id)
            .all(&db)
            .await
            .unwrap()
            .into_iter()
            .map(|m| m.matches)
            .collect();
        assert_eq!(stored, vec![i32::MAX, -7]);
    }
}
