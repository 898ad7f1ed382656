//! Saving and loading game snapshots as JSON on disk.

use crate::core::game_state::GameState;
use crate::save_data::SaveData;
use directories::ProjectDirs;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Reads and writes the save file. Save and load are single-attempt,
/// all-or-nothing operations: a failed load never touches live state.
pub struct SaveManager {
    save_path: PathBuf,
}

impl SaveManager {
    /// Creates a SaveManager targeting the platform config directory
    /// (created if needed), e.g. `~/.config/bazaar/save.json` on Linux.
    pub fn new() -> io::Result<Self> {
        let project_dirs = ProjectDirs::from("", "", "bazaar").ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "Could not determine config directory")
        })?;

        let config_dir = project_dirs.config_dir();
        fs::create_dir_all(config_dir)?;

        Ok(Self {
            save_path: config_dir.join("save.json"),
        })
    }

    /// Creates a SaveManager targeting an explicit file path.
    pub fn with_path(save_path: PathBuf) -> Self {
        Self { save_path }
    }

    pub fn save_path(&self) -> &PathBuf {
        &self.save_path
    }

    /// Whether a save file exists at the target path.
    pub fn save_exists(&self) -> bool {
        self.save_path.exists()
    }

    /// Write a full snapshot of `state` as pretty-printed JSON.
    pub fn save(&self, state: &GameState) -> io::Result<()> {
        let data = state.snapshot();
        let json = serde_json::to_string_pretty(&data)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(&self.save_path, json)?;
        tracing::info!(path = %self.save_path.display(), "game saved");
        Ok(())
    }

    /// Read and parse the save file.
    ///
    /// Fails loudly — an absent file, an empty payload, and malformed
    /// JSON are all errors. Defaults are never silently substituted for
    /// an unreadable save.
    pub fn load(&self) -> io::Result<SaveData> {
        let json = fs::read_to_string(&self.save_path)?;
        if json.trim().is_empty() {
            return Err(io::Error::new(io::ErrorKind::InvalidData, "save file is empty"));
        }
        let data = serde_json::from_str(&json)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        tracing::info!(path = %self.save_path.display(), "game loaded");
        Ok(data)
    }

    /// Load the save file and build a fresh [`GameState`] from it.
    pub fn load_game(&self) -> io::Result<GameState> {
        Ok(GameState::from_save(self.load()?))
    }
}
