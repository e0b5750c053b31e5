//! Emotion model — the closed set of delivery-affect labels.
//!
//! Both the classifiers and the expression modulator work over this
//! enumeration, so downstream lookup tables stay exhaustiveness-checked.

pub mod classifier;
pub mod heuristic;
pub mod remote;

pub use classifier::EmotionClassifier;
pub use remote::{ClassifyError, RemoteClassifier};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Delivery affect for a piece of spoken text.
///
/// Closed set: anything outside these 11 labels is coerced to `Neutral`
/// by the classification layer and never reaches the modulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Excited,
    Thoughtful,
    Focused,
    Celebratory,
    Concerned,
    Curious,
    Confident,
    Empathetic,
    Frustrated,
    Sad,
    Neutral,
}

impl Emotion {
    /// Every label, in the order the remote classifier prompt lists them.
    pub const ALL: [Emotion; 11] = [
        Emotion::Excited,
        Emotion::Thoughtful,
        Emotion::Focused,
        Emotion::Celebratory,
        Emotion::Concerned,
        Emotion::Curious,
        Emotion::Confident,
        Emotion::Empathetic,
        Emotion::Frustrated,
        Emotion::Sad,
        Emotion::Neutral,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Excited => "excited",
            Emotion::Thoughtful => "thoughtful",
            Emotion::Focused => "focused",
            Emotion::Celebratory => "celebratory",
            Emotion::Concerned => "concerned",
            Emotion::Curious => "curious",
            Emotion::Confident => "confident",
            Emotion::Empathetic => "empathetic",
            Emotion::Frustrated => "frustrated",
            Emotion::Sad => "sad",
            Emotion::Neutral => "neutral",
        }
    }

    /// Parse a label string. Returns `None` for anything outside the set —
    /// callers decide whether that coerces to `Neutral` or is an error.
    pub fn from_label(label: &str) -> Option<Emotion> {
        match label.trim().to_lowercase().as_str() {
            "excited" => Some(Emotion::Excited),
            "thoughtful" => Some(Emotion::Thoughtful),
            "focused" => Some(Emotion::Focused),
            "celebratory" => Some(Emotion::Celebratory),
            "concerned" => Some(Emotion::Concerned),
            "curious" => Some(Emotion::Curious),
            "confident" => Some(Emotion::Confident),
            "empathetic" => Some(Emotion::Empathetic),
            "frustrated" => Some(Emotion::Frustrated),
            "sad" => Some(Emotion::Sad),
            "neutral" => Some(Emotion::Neutral),
            _ => None,
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
