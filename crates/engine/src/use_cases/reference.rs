//! Reference data loading.

use std::sync::Arc;

use charforge_domain::ReferenceData;
use charforge_shared::ReferenceSnapshot;

use crate::infrastructure::ports::{ReferenceDataPort, RepoError};

pub struct ReferenceDataService {
    source: Arc<dyn ReferenceDataPort>,
}

impl ReferenceDataService {
    pub fn new(source: Arc<dyn ReferenceDataPort>) -> Self {
        Self { source }
    }

    /// Fetch every rules collection concurrently. Shop items are not
    /// fetched; see [`crate::use_cases::ShopUseCases`].
    pub async fn snapshot(&self) -> Result<ReferenceSnapshot, RepoError> {
        let source = &self.source;
        let (
            races,
            character_classes,
            skills,
            stats,
            feats,
            caster_types,
            spells,
            bab_progressions,
            alignments,
            armor,
            weapons,
        ) = tokio::try_join!(
            source.races(),
            source.classes(),
            source.skills(),
            source.stats(),
            source.feats(),
            source.caster_types(),
            source.spells(),
            source.bab_progressions(),
            source.alignments(),
            source.armor(),
            source.weapons(),
        )?;

        Ok(ReferenceSnapshot {
            races,
            character_classes,
            skills,
            stats,
            feats,
            caster_types,
            spells,
            bab_progressions,
            alignments,
            armor,
            weapons,
            shop_items: Vec::new(),
        })
    }

    /// Fetch and convert. Malformed records are skipped with a warning.
    pub async fn load(&self) -> Result<ReferenceData, RepoError> {
        let converted = self.snapshot().await?.into_reference_data();

        for message in &converted.skipped {
            tracing::warn!(detail = %message, "Skipped malformed reference record");
        }

        let data = converted.value;
        tracing::info!(
            races = data.races.len(),
            classes = data.classes.len(),
            skills = data.skills.len(),
            feats = data.feats.len(),
            spells = data.spells.len(),
            skipped = converted.skipped.len(),
            "Reference data loaded"
        );
        Ok(data)
    }
}
