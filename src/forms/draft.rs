use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::forms::record::FormRecord;

/// Persistent store for in-progress form drafts, one JSON file per form id.
///
/// This is the server-less analog of the website's local storage: a draft
/// survives process restarts until it is cleared on successful submission.
/// Corrupted entries are treated as absent and evicted on read.
pub struct DraftStore {
    dir: PathBuf,
}

impl DraftStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl AsRef<Path>) -> io::Result<DraftStore> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(DraftStore { dir })
    }

    fn path_for(&self, form_id: &str) -> PathBuf {
        self.dir.join(format!("form_{form_id}.json"))
    }

    /// Overwrite the stored draft for `form_id` with the full record.
    pub fn save(&self, form_id: &str, record: &FormRecord) -> io::Result<()> {
        let json = serde_json::to_string(record).map_err(io::Error::other)?;
        fs::write(self.path_for(form_id), json)
    }

    /// Load the draft for `form_id`. Absent entries return `None`; entries
    /// that fail to parse are evicted and also return `None` — a broken
    /// draft must never block the form.
    pub fn load(&self, form_id: &str) -> Option<FormRecord> {
        let path = self.path_for(form_id);
        let json = fs::read_to_string(&path).ok()?;
        match serde_json::from_str(&json) {
            Ok(record) => Some(record),
            Err(e) => {
                log::warn!("Evicting corrupted draft for {form_id}: {e}");
                let _ = fs::remove_file(&path);
                None
            }
        }
    }

    /// Remove the draft for `form_id`. Idempotent — clearing an absent
    /// entry is not an error.
    pub fn clear(&self, form_id: &str) {
        match fs::remove_file(self.path_for(form_id)) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => log::warn!("Failed to clear draft for {form_id}: {e}"),
        }
    }
}
