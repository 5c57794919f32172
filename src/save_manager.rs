//! Checksummed persistence for the state combat owns: the battle log and
//! per-monster victory counters.

use crate::battle_log::BattleLogEntry;
use crate::core::constants::{SAVE_FILE_NAME, SAVE_VERSION_MAGIC};
use crate::core::SaveError;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// Everything combat persists between sessions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CombatSaveData {
    /// Newest first
    pub battle_log: Vec<BattleLogEntry>,
    pub victory_counts: HashMap<String, u32>,
}

/// Manages saving and loading combat state with checksummed binary format
pub struct SaveManager {
    save_path: PathBuf,
}

impl SaveManager {
    /// Creates a SaveManager in the platform data directory.
    pub fn new() -> Result<Self, SaveError> {
        let project_dirs = ProjectDirs::from("", "", "skirmish").ok_or(SaveError::NoDataDir)?;
        let data_dir = project_dirs.data_dir();
        fs::create_dir_all(data_dir)?;
        Ok(Self {
            save_path: data_dir.join(SAVE_FILE_NAME),
        })
    }

    /// Creates a SaveManager writing to an explicit file.
    pub fn with_path(save_path: impl Into<PathBuf>) -> Self {
        Self {
            save_path: save_path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.save_path
    }

    /// Saves combat state to disk.
    ///
    /// File format:
    /// - Version magic (8 bytes)
    /// - Data length (4 bytes)
    /// - Serialized state (variable length)
    /// - SHA256 checksum over all of the above (32 bytes)
    pub fn save(&self, data: &CombatSaveData) -> Result<(), SaveError> {
        let payload = bincode::serialize(data)?;
        let data_len = payload.len() as u32;

        let mut hasher = Sha256::new();
        hasher.update(SAVE_VERSION_MAGIC.to_le_bytes());
        hasher.update(data_len.to_le_bytes());
        hasher.update(&payload);
        let checksum = hasher.finalize();

        if let Some(parent) = self.save_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = fs::File::create(&self.save_path)?;
        file.write_all(&SAVE_VERSION_MAGIC.to_le_bytes())?;
        file.write_all(&data_len.to_le_bytes())?;
        file.write_all(&payload)?;
        file.write_all(&checksum)?;
        Ok(())
    }

    /// Loads combat state, verifying the version magic and checksum.
    pub fn load(&self) -> Result<CombatSaveData, SaveError> {
        let mut file = fs::File::open(&self.save_path)?;

        let mut version_bytes = [0u8; 8];
        file.read_exact(&mut version_bytes)?;
        let version = u64::from_le_bytes(version_bytes);
        if version != SAVE_VERSION_MAGIC {
            return Err(SaveError::InvalidVersion {
                expected: SAVE_VERSION_MAGIC,
                found: version,
            });
        }

        let mut length_bytes = [0u8; 4];
        file.read_exact(&mut length_bytes)?;
        let data_len = u32::from_le_bytes(length_bytes);

        let mut payload = vec![0u8; data_len as usize];
        file.read_exact(&mut payload)?;

        let mut stored_checksum = [0u8; 32];
        file.read_exact(&mut stored_checksum)?;

        let mut hasher = Sha256::new();
        hasher.update(version_bytes);
        hasher.update(length_bytes);
        hasher.update(&payload);
        if stored_checksum != hasher.finalize().as_slice() {
            tracing::warn!(path = %self.save_path.display(), "save checksum mismatch");
            return Err(SaveError::ChecksumMismatch);
        }

        Ok(bincode::deserialize(&payload)?)
    }

    /// Loads saved state, falling back to empty state if the file is missing
    /// or unreadable.
    pub fn load_or_default(&self) -> CombatSaveData {
        match self.load() {
            Ok(data) => data,
            Err(SaveError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                CombatSaveData::default()
            }
            Err(e) => {
                tracing::warn!(error = %e, "could not load combat save, starting fresh");
                CombatSaveData::default()
            }
        }
    }

    pub fn save_exists(&self) -> bool {
        self.save_path.exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::army::LossMap;
    use crate::monsters::{Resource, ResourceMap};
    use chrono::Utc;
    use std::sync::atomic::{AtomicU64, Ordering};
    use uuid::Uuid;

    fn test_manager() -> SaveManager {
        static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);
        let test_id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        let dir = std::env::temp_dir().join(format!(
            "skirmish-save-test-{}-{}",
            std::process::id(),
            test_id
        ));
        fs::create_dir_all(&dir).expect("create temp dir");
        SaveManager::with_path(dir.join(SAVE_FILE_NAME))
    }

    fn sample_data() -> CombatSaveData {
        let mut rewards = ResourceMap::new();
        rewards.insert(Resource::Gold, 150);
        let mut losses = LossMap::new();
        losses.insert("spearman".to_string(), 3);

        let mut victory_counts = HashMap::new();
        victory_counts.insert("wolf_pack".to_string(), 4);

        CombatSaveData {
            battle_log: vec![BattleLogEntry {
                id: Uuid::new_v4(),
                timestamp: Utc::now(),
                monster_id: "wolf_pack".to_string(),
                monster_name: "Wolf Pack".to_string(),
                squad_id: "squad-1".to_string(),
                victory: true,
                waves_survived: 2,
                total_waves: 2,
                rewards,
                reward_reduced: false,
                modifier_id: Some("enraged".to_string()),
                losses,
            }],
            victory_counts,
        }
    }

    #[test]
    fn test_save_and_load() {
        let manager = test_manager();
        let data = sample_data();
        manager.save(&data).expect("save");
        assert!(manager.save_exists());

        let loaded = manager.load().expect("load");
        assert_eq!(loaded, data);
        fs::remove_file(manager.path()).ok();
    }

    #[test]
    fn test_load_nonexistent() {
        let manager = test_manager();
        let err = manager.load().unwrap_err();
        assert!(matches!(err, SaveError::Io(ref e) if e.kind() == std::io::ErrorKind::NotFound));
        assert_eq!(manager.load_or_default(), CombatSaveData::default());
    }

    #[test]
    fn test_load_wrong_version_magic() {
        let manager = test_manager();
        manager.save(&sample_data()).unwrap();
        let mut bytes = fs::read(manager.path()).unwrap();
        bytes[0] ^= 0xFF;
        fs::write(manager.path(), &bytes).unwrap();

        assert!(matches!(
            manager.load().unwrap_err(),
            SaveError::InvalidVersion { .. }
        ));
    }

    #[test]
    fn test_load_bad_checksum() {
        let manager = test_manager();
        manager.save(&sample_data()).unwrap();
        let mut bytes = fs::read(manager.path()).unwrap();
        // Flip a payload byte
        bytes[14] ^= 0x01;
        fs::write(manager.path(), &bytes).unwrap();

        assert!(matches!(manager.load().unwrap_err(), SaveError::ChecksumMismatch));
        assert_eq!(manager.load_or_default(), CombatSaveData::default());
    }

    #[test]
    fn test_load_truncated_file() {
        let manager = test_manager();
        manager.save(&sample_data()).unwrap();
        let bytes = fs::read(manager.path()).unwrap();
        fs::write(manager.path(), &bytes[..bytes.len() / 2]).unwrap();
        assert!(manager.load().is_err());
    }

    #[test]
    fn test_save_overwrites_existing() {
        let manager = test_manager();
        manager.save(&sample_data()).unwrap();
        manager.save(&CombatSaveData::default()).unwrap();
        assert_eq!(manager.load().unwrap(), CombatSaveData::default());
    }
}
