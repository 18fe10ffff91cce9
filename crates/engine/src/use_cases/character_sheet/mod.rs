//! Character sheet use cases.
//!
//! Stored characters hold only the choices. The sheet is derived again from
//! the current reference data every time it is viewed.

mod error;

pub use error::CharacterSheetError;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use charforge_domain::{CharacterId, CharacterSheet, ReferenceData, RulesConfig};
use charforge_shared::{CharacterRecord, CharacterSummary};

use crate::infrastructure::ports::CharacterStorePort;

// =============================================================================
// Result Types
// =============================================================================

/// A stored character with its derived sheet and the kit it was saved with.
#[derive(Debug, Clone, Serialize)]
pub struct CharacterView {
    pub id: CharacterId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    pub sheet: CharacterSheet,
    pub weapons: Vec<String>,
    pub armor: Vec<String>,
    pub inventory_items: Vec<String>,
    pub money: i64,
}

// =============================================================================
// Use Cases
// =============================================================================

pub struct CharacterSheetUseCases {
    store: Arc<dyn CharacterStorePort>,
    reference: Arc<ReferenceData>,
    rules: Arc<RulesConfig>,
}

impl CharacterSheetUseCases {
    pub fn new(
        store: Arc<dyn CharacterStorePort>,
        reference: Arc<ReferenceData>,
        rules: Arc<RulesConfig>,
    ) -> Self {
        Self {
            store,
            reference,
            rules,
        }
    }

    pub async fn view(&self, id: CharacterId) -> Result<CharacterView, CharacterSheetError> {
        let record = self
            .store
            .get(id)
            .await?
            .ok_or(CharacterSheetError::CharacterNotFound(id))?;
        self.derive(record)
    }

    pub async fn list(&self) -> Result<Vec<CharacterSummary>, CharacterSheetError> {
        let records = self.store.list().await?;
        Ok(records.iter().map(CharacterSummary::from).collect())
    }

    pub async fn delete(&self, id: CharacterId) -> Result<(), CharacterSheetError> {
        match self.store.delete(id).await {
            Ok(()) => {
                tracing::info!(character_id = %id, "Character deleted");
                Ok(())
            }
            Err(e) if e.is_not_found() => Err(CharacterSheetError::CharacterNotFound(id)),
            Err(e) => Err(e.into()),
        }
    }

    fn derive(&self, record: CharacterRecord) -> Result<CharacterView, CharacterSheetError> {
        let build = record.to_build()?;
        let over_cap = build.ranks_over_cap();
        if !over_cap.is_empty() {
            tracing::warn!(
                character_id = record.id,
                skills = ?over_cap,
                "Stored character has ranks above its level"
            );
        }

        let sheet = CharacterSheet::derive(&build, &self.reference, &self.rules);
        let CharacterRecord {
            id,
            character,
            created_at,
        } = record;

        Ok(CharacterView {
            id: CharacterId::new(id),
            created_at,
            sheet,
            weapons: character.weapons,
            armor: character.armor,
            inventory_items: character.inventory_items,
            money: character.money,
        })
    }
}
