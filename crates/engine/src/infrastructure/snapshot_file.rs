//! Offline reference data from a JSON snapshot file.
//!
//! The file holds one object keyed by collection name, the shape of
//! [`ReferenceSnapshot`]. It is read once, on first access.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::OnceCell;

use charforge_shared::{
    AlignmentRecord, ArmorRecord, BabProgressionRecord, CasterTypeRecord, ClassRecord,
    FeatRecord, RaceRecord, ReferenceSnapshot, ShopItemRecord, SkillRecord, SpellRecord,
    StatRecord, WeaponRecord,
};

use crate::infrastructure::ports::{ReferenceDataPort, RepoError};

pub struct JsonSnapshotSource {
    path: PathBuf,
    snapshot: OnceCell<ReferenceSnapshot>,
}

impl JsonSnapshotSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            snapshot: OnceCell::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn snapshot(&self) -> Result<&ReferenceSnapshot, RepoError> {
        self.snapshot
            .get_or_try_init(|| read_snapshot(&self.path))
            .await
    }
}

async fn read_snapshot(path: &Path) -> Result<ReferenceSnapshot, RepoError> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| RepoError::io(format!("{}: {}", path.display(), e)))?;
    let snapshot: ReferenceSnapshot = serde_json::from_str(&raw)?;
    tracing::debug!(path = %path.display(), "Loaded reference snapshot");
    Ok(snapshot)
}

#[async_trait]
impl ReferenceDataPort for JsonSnapshotSource {
    async fn races(&self) -> Result<Vec<RaceRecord>, RepoError> {
        Ok(self.snapshot().await?.races.clone())
    }

    async fn classes(&self) -> Result<Vec<ClassRecord>, RepoError> {
        Ok(self.snapshot().await?.character_classes.clone())
    }

    async fn skills(&self) -> Result<Vec<SkillRecord>, RepoError> {
        Ok(self.snapshot().await?.skills.clone())
    }

    async fn stats(&self) -> Result<Vec<StatRecord>, RepoError> {
        Ok(self.snapshot().await?.stats.clone())
    }

    async fn feats(&self) -> Result<Vec<FeatRecord>, RepoError> {
        Ok(self.snapshot().await?.feats.clone())
    }

    async fn caster_types(&self) -> Result<Vec<CasterTypeRecord>, RepoError> {
        Ok(self.snapshot().await?.caster_types.clone())
    }

    async fn spells(&self) -> Result<Vec<SpellRecord>, RepoError> {
        Ok(self.snapshot().await?.spells.clone())
    }

    async fn bab_progressions(&self) -> Result<Vec<BabProgressionRecord>, RepoError> {
        Ok(self.snapshot().await?.bab_progressions.clone())
    }

    async fn alignments(&self) -> Result<Vec<AlignmentRecord>, RepoError> {
        Ok(self.snapshot().await?.alignments.clone())
    }

    async fn armor(&self) -> Result<Vec<ArmorRecord>, RepoError> {
        Ok(self.snapshot().await?.armor.clone())
    }

    async fn weapons(&self) -> Result<Vec<WeaponRecord>, RepoError> {
        Ok(self.snapshot().await?.weapons.clone())
    }

    async fn shop_items(&self) -> Result<Vec<ShopItemRecord>, RepoError> {
        Ok(self.snapshot().await?.shop_items.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_snapshot(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write snapshot");
        file
    }

    #[tokio::test]
    async fn reads_collections_from_file() {
        let file = write_snapshot(
            r#"{
                "races": [{"id": 1, "name": "Human"}],
                "shop_items": [{"type": "Weapon", "name": "Dagger", "gold_value": 2}]
            }"#,
        );
        let source = JsonSnapshotSource::new(file.path());

        assert_eq!(source.races().await.expect("races").len(), 1);
        assert_eq!(source.shop_items().await.expect("shop")[0].name, "Dagger");
        assert!(source.classes().await.expect("classes").is_empty());
    }

    #[tokio::test]
    async fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let source = JsonSnapshotSource::new(dir.path().join("absent.json"));

        let err = source.races().await.expect_err("missing file");
        assert!(matches!(err, RepoError::Io(_)));
    }

    #[tokio::test]
    async fn malformed_file_is_a_serialization_error() {
        let file = write_snapshot("{ not json");
        let source = JsonSnapshotSource::new(file.path());

        let err = source.feats().await.expect_err("bad json");
        assert!(matches!(err, RepoError::Serialization(_)));
    }
}
