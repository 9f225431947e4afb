//! Theme persistence: one flag, one file.
//!
//! The chosen [`ThemeName`] is the only state that survives a restart. It is
//! stored as JSON in `<config dir>/termfolio/theme.json`, read once at
//! session startup and written on every toggle.

use std::fs;
use std::path::PathBuf;

use anyhow::Result;

use crate::models::ThemeName;

/// File-backed store for the persisted theme name.
#[derive(Debug, Clone)]
pub struct ThemeStore {
    path: PathBuf,
}

impl ThemeStore {
    pub fn open(path: PathBuf) -> Result<Self> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(Self { path })
    }

    pub fn open_default() -> Result<Self> {
        let dirs = directories::ProjectDirs::from("", "", "termfolio")
            .ok_or_else(|| anyhow::anyhow!("could not determine config directory"))?;
        Self::open(dirs.config_dir().join("theme.json"))
    }

    /// The persisted theme, or the default when nothing valid is stored.
    pub fn load(&self) -> ThemeName {
        let Ok(contents) = fs::read_to_string(&self.path) else {
            return ThemeName::default();
        };
        serde_json::from_str(&contents).unwrap_or_default()
    }

    /// Persist a theme choice. Failures are logged, not fatal: the session
    /// keeps its in-memory theme either way.
    pub fn save(&self, theme: ThemeName) {
        let json = match serde_json::to_string(&theme) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!("failed to serialize theme: {}", e);
                return;
            }
        };
        if let Err(e) = fs::write(&self.path, json) {
            tracing::warn!("failed to persist theme to {}: {}", self.path.display(), e);
        }
    }
}
