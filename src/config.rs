//! JSON configuration: remote inference contract, playback defaults, and
//! user-supplied personality profiles. Missing or unparsable files fall
//! back to defaults; an invalid personality trait is the one startup error
//! that propagates.

use crate::emotion::{EmotionClassifier, RemoteClassifier};
use crate::expression::{PersonalityProfile, PersonalityRegistry, ProfileError};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

/// Generic load for any Serde config type with a `Default` implementation.
/// Falls back to `T::default()` if the file is missing or unparsable.
pub fn load_json_config<T: DeserializeOwned + Default>(path: &Path, label: &str) -> T {
    match std::fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str::<T>(&content) {
            Ok(config) => {
                info!(label, path = %path.display(), "loaded config");
                config
            }
            Err(e) => {
                warn!(label, path = %path.display(), error = %e, "failed to parse config, using defaults");
                T::default()
            }
        },
        Err(_) => {
            info!(label, path = %path.display(), "no config file, using defaults");
            T::default()
        }
    }
}

/// Generic save for any Serde config type.
pub fn save_json_config<T: Serialize>(path: &Path, config: &T, label: &str) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create config directory: {}", e))?;
    }
    let json = serde_json::to_string_pretty(config)
        .map_err(|e| format!("Failed to serialize config: {}", e))?;
    std::fs::write(path, json).map_err(|e| format!("Failed to write config file: {}", e))?;
    info!(label, path = %path.display(), "saved config");
    Ok(())
}

// ── Remote Inference Config ────────────────────────────────

fn default_timeout_secs() -> u64 {
    20
}

/// Invocation contract for the external inference program.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    pub program: String,
    /// Leading arguments (speed tier, structured-output flag, script path).
    #[serde(default)]
    pub args: Vec<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        let tool = dirs_next::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".claude/skills/PAI/Tools/Inference.ts");
        Self {
            program: "bun".to_string(),
            args: vec![
                "run".to_string(),
                tool.to_string_lossy().to_string(),
                "--level".to_string(),
                "fast".to_string(),
                "--json".to_string(),
            ],
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl RemoteConfig {
    pub fn build_classifier(&self) -> RemoteClassifier {
        RemoteClassifier::new(self.program.clone(), self.args.clone())
            .with_timeout(Duration::from_secs(self.timeout_secs))
    }
}

// ── Playback Config ────────────────────────────────────────

fn default_volume() -> f32 {
    0.8
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackConfig {
    #[serde(default = "default_volume")]
    pub volume: f32,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            volume: default_volume(),
        }
    }
}

// ── Top-Level Config ───────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmovoxConfig {
    /// Attempt remote inference before the keyword heuristic.
    #[serde(default)]
    pub prefer_remote: bool,
    #[serde(default)]
    pub remote: RemoteConfig,
    #[serde(default)]
    pub playback: PlaybackConfig,
    /// Extra personalities layered over the built-ins.
    #[serde(default)]
    pub personalities: Vec<PersonalityProfile>,
}

impl EmovoxConfig {
    /// Conventional config location: `<config dir>/emovox/config.json`.
    pub fn default_path() -> PathBuf {
        dirs_next::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("emovox")
            .join("config.json")
    }

    pub fn load(path: &Path) -> Self {
        load_json_config(path, "emovox")
    }

    /// Build the read-only personality registry: built-ins plus the
    /// config's custom profiles. `InvalidTrait` propagates to the caller.
    pub fn build_registry(&self) -> Result<PersonalityRegistry, ProfileError> {
        PersonalityRegistry::with_custom(self.personalities.clone())
    }

    pub fn build_classifier(&self) -> EmotionClassifier {
        EmotionClassifier::new(self.remote.build_classifier())
    }
}
