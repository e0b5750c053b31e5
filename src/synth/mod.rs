//! Speech-synthesis engine seam. The engine itself is a black box; this
//! trait is the only surface the pipeline depends on, so real backends and
//! test stubs are interchangeable.

pub mod playback;

pub use playback::{play_audio, write_temp_audio, PlaybackError};

use async_trait::async_trait;
use std::fmt;

// ── Errors ─────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub enum SynthError {
    EngineUnavailable(String),
    SynthesisFailed(String),
}

impl fmt::Display for SynthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SynthError::EngineUnavailable(msg) => write!(f, "engine unavailable: {}", msg),
            SynthError::SynthesisFailed(msg) => write!(f, "synthesis failed: {}", msg),
        }
    }
}

impl std::error::Error for SynthError {}

// ── Engine Trait ───────────────────────────────────────────

/// Synthesized audio as returned by an engine.
#[derive(Debug, Clone)]
pub struct SynthesizedAudio {
    /// Encoded audio bytes (format is engine-defined, typically WAV).
    pub bytes: Vec<u8>,
    pub sample_rate: u32,
}

/// A text-to-speech engine with a locked speaker identity and an optional
/// free-text delivery instruction.
#[async_trait]
pub trait SynthesisEngine: Send + Sync {
    /// Engine identifier for logs.
    fn id(&self) -> &str;

    async fn synthesize(
        &self,
        text: &str,
        speaker: &str,
        instruct: Option<&str>,
        language: &str,
    ) -> Result<SynthesizedAudio, SynthError>;
}
