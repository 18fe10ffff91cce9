// Port traits define the full contract - many methods are for future use
#![allow(dead_code)]

//! Data source ports.

use async_trait::async_trait;

use charforge_domain::CharacterId;
use charforge_shared::{
    AlignmentRecord, ArmorRecord, BabProgressionRecord, CasterTypeRecord, CharacterRecord,
    ClassRecord, FeatRecord, NewCharacter, RaceRecord, ShopItemRecord, SkillRecord, SpellRecord,
    StatRecord, WeaponRecord,
};

use super::error::RepoError;

// =============================================================================
// Reference Data
// =============================================================================

/// Read-only reference collections. Each call returns the whole collection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReferenceDataPort: Send + Sync {
    async fn races(&self) -> Result<Vec<RaceRecord>, RepoError>;
    async fn classes(&self) -> Result<Vec<ClassRecord>, RepoError>;
    async fn skills(&self) -> Result<Vec<SkillRecord>, RepoError>;
    async fn stats(&self) -> Result<Vec<StatRecord>, RepoError>;
    async fn feats(&self) -> Result<Vec<FeatRecord>, RepoError>;
    async fn caster_types(&self) -> Result<Vec<CasterTypeRecord>, RepoError>;
    async fn spells(&self) -> Result<Vec<SpellRecord>, RepoError>;
    async fn bab_progressions(&self) -> Result<Vec<BabProgressionRecord>, RepoError>;
    async fn alignments(&self) -> Result<Vec<AlignmentRecord>, RepoError>;
    async fn armor(&self) -> Result<Vec<ArmorRecord>, RepoError>;
    async fn weapons(&self) -> Result<Vec<WeaponRecord>, RepoError>;
    async fn shop_items(&self) -> Result<Vec<ShopItemRecord>, RepoError>;
}

// =============================================================================
// Characters
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CharacterStorePort: Send + Sync {
    async fn create(&self, character: NewCharacter) -> Result<CharacterRecord, RepoError>;
    async fn get(&self, id: CharacterId) -> Result<Option<CharacterRecord>, RepoError>;
    async fn list(&self) -> Result<Vec<CharacterRecord>, RepoError>;
    async fn delete(&self, id: CharacterId) -> Result<(), RepoError>;
}
