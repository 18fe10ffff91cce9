//! Character storage held in process memory.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use charforge_domain::CharacterId;
use charforge_shared::{CharacterRecord, NewCharacter};

use crate::infrastructure::ports::{CharacterStorePort, ClockPort, RepoError};

/// Assigns ids from 1 upward and stamps `created_at` from the clock.
pub struct InMemoryCharacterStore {
    clock: Arc<dyn ClockPort>,
    state: RwLock<StoreState>,
}

struct StoreState {
    next_id: i64,
    records: BTreeMap<i64, CharacterRecord>,
}

impl InMemoryCharacterStore {
    pub fn new(clock: Arc<dyn ClockPort>) -> Self {
        Self {
            clock,
            state: RwLock::new(StoreState {
                next_id: 1,
                records: BTreeMap::new(),
            }),
        }
    }
}

#[async_trait]
impl CharacterStorePort for InMemoryCharacterStore {
    async fn create(&self, character: NewCharacter) -> Result<CharacterRecord, RepoError> {
        let mut state = self.state.write().await;
        let id = state.next_id;
        state.next_id += 1;

        let record = CharacterRecord {
            id,
            character,
            created_at: Some(self.clock.now()),
        };
        state.records.insert(id, record.clone());
        Ok(record)
    }

    async fn get(&self, id: CharacterId) -> Result<Option<CharacterRecord>, RepoError> {
        Ok(self.state.read().await.records.get(&id.value()).cloned())
    }

    async fn list(&self) -> Result<Vec<CharacterRecord>, RepoError> {
        Ok(self.state.read().await.records.values().cloned().collect())
    }

    async fn delete(&self, id: CharacterId) -> Result<(), RepoError> {
        self.state
            .write()
            .await
            .records
            .remove(&id.value())
            .map(|_| ())
            .ok_or_else(|| RepoError::not_found("Character", id))
    }
}
