//! Audio playback via the macOS `afplay` subprocess, plus a temp-file
//! helper for handing engine output to the player.

use std::path::{Path, PathBuf};
use tokio::process::Command;
use tracing::{debug, error, info};
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum PlaybackError {
    #[error("audio file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("player unavailable: {0}")]
    Unavailable(String),
    #[error("playback failed: {0}")]
    Failed(String),
    #[error("failed to write audio file: {0}")]
    Io(#[from] std::io::Error),
}

/// Write audio bytes to a uniquely named file in the system temp directory.
pub fn write_temp_audio(bytes: &[u8]) -> Result<PathBuf, PlaybackError> {
    let short_id = &Uuid::new_v4().to_string()[..8];
    let path = std::env::temp_dir().join(format!("emovox_{}.wav", short_id));
    std::fs::write(&path, bytes)?;
    debug!(path = %path.display(), len = bytes.len(), "wrote temp audio");
    Ok(path)
}

/// Play an audio file at the given volume (0.0–1.0). Optionally deletes the
/// file afterwards, whether or not playback succeeded.
pub async fn play_audio(
    path: &Path,
    volume: f32,
    delete_after: bool,
) -> Result<(), PlaybackError> {
    if !path.exists() {
        return Err(PlaybackError::FileNotFound(path.to_path_buf()));
    }

    let volume = volume.clamp(0.0, 1.0);
    let result = run_afplay(path, volume).await;

    if delete_after {
        if let Err(e) = std::fs::remove_file(path) {
            // Leaving a temp file behind is not worth failing playback over
            debug!(path = %path.display(), error = %e, "failed to delete temp audio");
        }
    }

    result
}

async fn run_afplay(path: &Path, volume: f32) -> Result<(), PlaybackError> {
    let output = Command::new("afplay")
        .arg("-v")
        .arg(volume.to_string())
        .arg(path)
        .output()
        .await
        .map_err(|e| {
            error!(error = %e, "afplay not found - is this macOS?");
            PlaybackError::Unavailable(format!("afplay: {}", e))
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(PlaybackError::Failed(stderr.trim().to_string()));
    }

    info!(path = %path.display(), volume, "played audio");
    Ok(())
}
