// SPDX-License-Identifier: PMPL-1.0-or-later

//! Storage seam for the selected language.
//!
//! The resolver only needs "what was chosen last time" and "remember this
//! choice". A missing value is the normal first-run case, not an error.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

pub trait LanguagePersistence: Send + Sync {
    fn load(&self) -> Option<String>;
    fn save(&self, code: &str) -> Result<()>;
}

/// In-memory store. Counts writes so callers can check how often the
/// resolver persisted a choice.
#[derive(Debug, Default)]
pub struct MemoryPersistence {
    state: Mutex<MemoryState>,
}

#[derive(Debug, Default)]
struct MemoryState {
    stored: Option<String>,
    writes: Vec<String>,
}

impl MemoryPersistence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stored(code: impl Into<String>) -> Self {
        let persistence = Self::default();
        persistence.lock().stored = Some(code.into());
        persistence
    }

    pub fn stored(&self) -> Option<String> {
        self.lock().stored.clone()
    }

    /// Every code passed to `save`, oldest first.
    pub fn writes(&self) -> Vec<String> {
        self.lock().writes.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl LanguagePersistence for MemoryPersistence {
    fn load(&self) -> Option<String> {
        self.stored()
    }

    fn save(&self, code: &str) -> Result<()> {
        let mut state = self.lock();
        state.stored = Some(code.to_string());
        state.writes.push(code.to_string());
        Ok(())
    }
}

/// Single-line state file holding the language code.
#[derive(Debug, Clone)]
pub struct FilePersistence {
    path: PathBuf,
}

impl FilePersistence {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LanguagePersistence for FilePersistence {
    fn load(&self) -> Option<String> {
        match fs::read_to_string(&self.path) {
            Ok(content) => {
                let code = content.trim();
                if code.is_empty() {
                    None
                } else {
                    Some(code.to_string())
                }
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "unreadable language state");
                None
            }
        }
    }

    fn save(&self, code: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
        }
        fs::write(&self.path, format!("{}\n", code))
            .with_context(|| format!("writing {}", self.path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn memory_records_writes() {
        let store = MemoryPersistence::new();
        assert_eq!(store.load(), None);
        store.save("en").unwrap();
        store.save("de").unwrap();
        assert_eq!(store.load().as_deref(), Some("de"));
        assert_eq!(store.writes(), vec!["en".to_string(), "de".to_string()]);
    }

    #[test]
    fn file_roundtrip_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let store = FilePersistence::new(dir.path().join("state/lang"));
        assert_eq!(store.load(), None);
        store.save("ro").unwrap();
        assert_eq!(store.load().as_deref(), Some("ro"));
    }

    #[test]
    fn blank_file_loads_as_nothing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("lang");
        fs::write(&path, "  \n").unwrap();
        assert_eq!(FilePersistence::new(path).load(), None);
    }
}
