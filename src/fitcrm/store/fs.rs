use super::RecordStore;
use crate::error::{FitcrmError, Result};
use crate::model::ClientRecord;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use uuid::Uuid;

pub const DEFAULT_SLOT: &str = "fitcrm_clients";

pub struct FileStore {
    root: PathBuf,
    slot: String,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            slot: DEFAULT_SLOT.to_string(),
        }
    }

    pub fn with_slot(mut self, slot: &str) -> Self {
        self.slot = slot.trim_end_matches(".json").to_string();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn slot_path(&self) -> PathBuf {
        self.root.join(format!("{}.json", self.slot))
    }

    /// Renames a slot that does not parse to `.<slot>.corrupt-<uuid>.json`,
    /// so the write that follows cannot destroy it.
    fn set_aside_unreadable(&self) -> Result<Option<PathBuf>> {
        let path = self.slot_path();
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(FitcrmError::Io(e)),
        };

        let blank = bytes.iter().all(u8::is_ascii_whitespace);
        if blank || serde_json::from_slice::<Vec<ClientRecord>>(&bytes).is_ok() {
            return Ok(None);
        }

        let backup = self
            .root
            .join(format!(".{}.corrupt-{}.json", self.slot, Uuid::new_v4()));
        fs::rename(&path, &backup).map_err(FitcrmError::Io)?;
        warn!(
            path = %path.display(),
            backup = %backup.display(),
            "unreadable roster moved aside before overwrite"
        );
        Ok(Some(backup))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(FitcrmError::Io)?;
        }
        Ok(())
    }
}

impl RecordStore for FileStore {
    fn load_all(&self) -> Result<Vec<ClientRecord>> {
        let path = self.slot_path();
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "roster unreadable, treating as empty");
                return Ok(Vec::new());
            }
        };

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        match serde_json::from_str::<Vec<ClientRecord>>(&content) {
            Ok(records) => Ok(records),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "roster is corrupt, treating as empty");
                Ok(Vec::new())
            }
        }
    }

    fn save_all(&mut self, records: &[ClientRecord]) -> Result<()> {
        self.ensure_dir()?;
        self.set_aside_unreadable()?;
        let content = serde_json::to_string_pretty(records).map_err(FitcrmError::Serialization)?;

        // Atomic write: tmp file in the same dir, then rename over the slot
        let tmp_file = self.root.join(format!(".{}-{}.tmp", self.slot, Uuid::new_v4()));
        if let Err(e) = fs::write(&tmp_file, content) {
            let _ = fs::remove_file(&tmp_file);
            return Err(FitcrmError::Io(e));
        }
        if let Err(e) = fs::rename(&tmp_file, self.slot_path()) {
            let _ = fs::remove_file(&tmp_file);
            return Err(FitcrmError::Io(e));
        }

        debug!(count = records.len(), path = %self.slot_path().display(), "roster saved");
        Ok(())
    }

    fn is_initialized(&self) -> Result<bool> {
        Ok(self.slot_path().exists())
    }
}
