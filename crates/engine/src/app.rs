//! Application state and composition.

use std::sync::Arc;

use charforge_domain::{ReferenceData, RulesConfig, UserId};

use crate::config::AppConfig;
use crate::infrastructure::{
    clock::{SystemClock, SystemRandom},
    ports::{CharacterStorePort, RandomPort, ReferenceDataPort, RepoError},
    rest_client::RestDataClient,
    snapshot_file::JsonSnapshotSource,
};
use crate::stores::InMemoryCharacterStore;
use crate::use_cases::{
    CharacterCreation, CharacterSheetUseCases, ReferenceDataService, ShopUseCases,
};

/// Main application state.
///
/// Reference data is loaded once at startup and shared by every use case.
pub struct App {
    pub reference: Arc<ReferenceData>,
    pub rules: Arc<RulesConfig>,
    pub ports: Ports,
    pub use_cases: UseCases,
    user_id: Option<UserId>,
}

/// Container for the injected ports.
pub struct Ports {
    pub reference_source: Arc<dyn ReferenceDataPort>,
    pub store: Arc<dyn CharacterStorePort>,
    pub random: Arc<dyn RandomPort>,
}

/// Container for all use cases.
pub struct UseCases {
    pub character_sheet: CharacterSheetUseCases,
    pub shop: ShopUseCases,
}

impl App {
    /// Wire adapters from configuration and load the reference data.
    ///
    /// With a reference file configured the engine runs offline: reference
    /// data comes from the file and saved characters live in memory.
    pub async fn from_config(config: &AppConfig) -> Result<Self, RepoError> {
        let ports = match &config.reference_file {
            Some(path) => {
                tracing::info!(path = %path.display(), "Using offline reference snapshot");
                Ports {
                    reference_source: Arc::new(JsonSnapshotSource::new(path.clone())),
                    store: Arc::new(InMemoryCharacterStore::new(Arc::new(SystemClock::new()))),
                    random: Arc::new(SystemRandom::new()),
                }
            }
            None => {
                tracing::info!(api_url = %config.api_url, "Using REST data service");
                let client = Arc::new(RestDataClient::with_timeout(
                    &config.api_url,
                    config.access_token.clone(),
                    config.http_timeout_secs,
                ));
                Ports {
                    reference_source: client.clone(),
                    store: client,
                    random: Arc::new(SystemRandom::new()),
                }
            }
        };

        Self::new(ports, config.rules.clone(), config.user_id).await
    }

    pub async fn new(
        ports: Ports,
        rules: RulesConfig,
        user_id: Option<UserId>,
    ) -> Result<Self, RepoError> {
        let reference = Arc::new(
            ReferenceDataService::new(ports.reference_source.clone())
                .load()
                .await?,
        );
        let rules = Arc::new(rules);

        let use_cases = UseCases {
            character_sheet: CharacterSheetUseCases::new(
                ports.store.clone(),
                reference.clone(),
                rules.clone(),
            ),
            shop: ShopUseCases::new(ports.reference_source.clone()),
        };

        Ok(Self {
            reference,
            rules,
            ports,
            use_cases,
            user_id,
        })
    }

    /// A fresh creation workflow over the loaded reference data.
    pub fn creation(&self) -> CharacterCreation {
        CharacterCreation::new(
            self.reference.clone(),
            self.rules.clone(),
            self.ports.store.clone(),
            self.ports.random.clone(),
        )
        .with_user(self.user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::{FixedClock, FixedRandom};
    use crate::use_cases::reference::tests::{mock_source, sample_snapshot};
    use charforge_domain::{CharacterId, ClassId};
    use chrono::Utc;

    async fn app() -> App {
        let ports = Ports {
            reference_source: Arc::new(mock_source(sample_snapshot())),
            store: Arc::new(InMemoryCharacterStore::new(Arc::new(FixedClock(Utc::now())))),
            random: Arc::new(FixedRandom(6)),
        };
        App::new(ports, RulesConfig::default(), None)
            .await
            .expect("app")
    }

    #[tokio::test]
    async fn saved_character_can_be_viewed() {
        let app = app().await;
        let mut creation = app.creation();
        creation.set_name("Seoni");
        assert!(creation.select_class(ClassId::new(2)).is_applied());
        assert!(creation.roll_abilities().is_applied());

        let record = creation.save().await.expect("saved");
        let view = app
            .use_cases
            .character_sheet
            .view(CharacterId::new(record.id))
            .await
            .expect("view");

        assert_eq!(view.sheet.identity.name, "Seoni");
        let casting = view.sheet.spellcasting.expect("sorcerer casts");
        assert_eq!(casting.casting_modifier, 4);
        assert_eq!(casting.save_dc(1), Some(15));
    }

    #[tokio::test]
    async fn shop_lists_items_from_the_source() {
        let app = app().await;
        let items = app.use_cases.shop.list().await.expect("shop");
        assert_eq!(items.len(), 2);
    }

    #[tokio::test]
    async fn offline_config_reads_the_snapshot_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("reference.json");
        std::fs::write(
            &path,
            serde_json::to_string(&sample_snapshot()).expect("serialize"),
        )
        .expect("write snapshot");

        let config = AppConfig {
            reference_file: Some(path),
            ..AppConfig::default()
        };
        let app = App::from_config(&config).await.expect("offline app");

        assert_eq!(app.reference.classes.len(), 3);
        assert!(app.use_cases.character_sheet.list().await.expect("list").is_empty());
    }
}
