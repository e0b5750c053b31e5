//! Personality-driven expression modulation.
//!
//! The same emotion sounds different through different personalities. Starting
//! from a per-emotion base triple (vocal qualities, pacing, intensity), an
//! ordered list of pure rule functions is left-folded over the state. Order
//! matters: later rules may overwrite fields set by earlier ones, and the
//! string-containment rules test the current (possibly already modified)
//! pacing value. All thresholds are strict — a trait sitting exactly on a
//! boundary (40/70/80) fires nothing.

use super::profile::PersonalityProfile;
use crate::emotion::Emotion;
use serde::{Deserialize, Serialize};

/// Sentinel for "no rule added a note".
pub const STANDARD_EXPRESSION: &str = "standard expression";

/// How a specific emotion manifests through a personality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpressionAttributes {
    pub emotion: Emotion,
    pub vocal_qualities: String,
    pub pacing: String,
    pub intensity: String,
    /// Joined rule notes, or [`STANDARD_EXPRESSION`] when none fired.
    pub additional_notes: String,
}

// ── Base Expression Table ──────────────────────────────────

/// Starting (vocal_qualities, pacing, intensity) for a neutral personality.
fn base_attributes(emotion: Emotion) -> (&'static str, &'static str, &'static str) {
    match emotion {
        Emotion::Excited => ("bright and animated", "faster", "louder"),
        Emotion::Thoughtful => ("contemplative and measured", "slower with pauses", "softer"),
        Emotion::Focused => ("precise and clear", "steady and deliberate", "moderate"),
        Emotion::Celebratory => ("joyful and triumphant", "energetic", "louder"),
        Emotion::Concerned => ("serious and careful", "measured", "moderate to soft"),
        Emotion::Curious => (
            "wondering and engaged",
            "varied with emphasis on questions",
            "moderate",
        ),
        Emotion::Confident => ("assured and grounded", "steady", "firm"),
        Emotion::Empathetic => ("warm and understanding", "gentle", "soft"),
        Emotion::Frustrated => ("tense", "clipped or rushed", "forceful"),
        Emotion::Sad => ("subdued", "slow", "quiet"),
        Emotion::Neutral => ("natural and conversational", "balanced", "moderate"),
    }
}

// ── Rule Fold ──────────────────────────────────────────────

/// Mutable accumulator threaded through the rule fold.
#[derive(Debug, Clone)]
struct ExprState {
    vocal_qualities: String,
    pacing: String,
    intensity: String,
    notes: Vec<String>,
}

type Rule = fn(&PersonalityProfile, Emotion, ExprState) -> ExprState;

/// The ordered rule table. Each entry is a pure function; the slice order
/// is the application order and is part of the contract.
const RULES: &[Rule] = &[
    high_resilience,
    low_resilience,
    high_expressiveness,
    low_expressiveness,
    high_composure,
    low_composure,
    high_warmth,
    high_directness,
    low_directness,
    high_precision,
    high_energy,
    low_energy,
];

/// Emotions that count as setbacks for the resilience rules.
fn is_setback(emotion: Emotion) -> bool {
    matches!(
        emotion,
        Emotion::Concerned | Emotion::Frustrated | Emotion::Sad
    )
}

// Setbacks don't deflate a resilient speaker.
fn high_resilience(p: &PersonalityProfile, emotion: Emotion, mut s: ExprState) -> ExprState {
    if is_setback(emotion) && p.resilience > 70 {
        s.notes
            .push("maintains steady energy despite the situation".to_string());
        s.pacing = "steady, not slowing down".to_string();
        if p.optimism > 60 {
            s.notes.push("with solution-oriented undertone".to_string());
        }
    }
    s
}

// Low resilience: negative emotions hit harder. Disjoint from the rule
// above; resilience in [40, 70] deliberately keeps the base values.
fn low_resilience(p: &PersonalityProfile, emotion: Emotion, mut s: ExprState) -> ExprState {
    if is_setback(emotion) && p.resilience < 40 {
        s.notes
            .push("voice becomes quieter and more hesitant".to_string());
        s.intensity = "noticeably softer".to_string();
        s.pacing = "slower with uncertainty".to_string();
    }
    s
}

fn high_expressiveness(p: &PersonalityProfile, emotion: Emotion, mut s: ExprState) -> ExprState {
    if p.expressiveness > 70 {
        if matches!(emotion, Emotion::Excited | Emotion::Celebratory) {
            s.intensity = "noticeably louder and more animated".to_string();
        } else if matches!(emotion, Emotion::Sad | Emotion::Concerned) {
            s.vocal_qualities.push_str(", clearly showing the emotion");
        }
    }
    s
}

fn low_expressiveness(p: &PersonalityProfile, _emotion: Emotion, mut s: ExprState) -> ExprState {
    if p.expressiveness < 40 {
        s.notes
            .push("emotion contained, subtle vocal shifts".to_string());
        s.intensity = "controlled".to_string();
    }
    s
}

fn high_composure(p: &PersonalityProfile, emotion: Emotion, mut s: ExprState) -> ExprState {
    if p.composure > 70
        && matches!(
            emotion,
            Emotion::Frustrated | Emotion::Excited | Emotion::Celebratory
        )
    {
        s.notes.push("keeps composure, measured expression".to_string());
        s.pacing = "controlled despite emotion".to_string();
    }
    s
}

fn low_composure(p: &PersonalityProfile, emotion: Emotion, mut s: ExprState) -> ExprState {
    if p.composure < 40 && matches!(emotion, Emotion::Frustrated | Emotion::Concerned) {
        s.notes
            .push("emotion clearly audible, less controlled".to_string());
    }
    s
}

fn high_warmth(p: &PersonalityProfile, _emotion: Emotion, mut s: ExprState) -> ExprState {
    if p.warmth > 70 {
        s.notes.push("genuine warmth in tone".to_string());
    }
    s
}

fn high_directness(p: &PersonalityProfile, _emotion: Emotion, mut s: ExprState) -> ExprState {
    if p.directness > 80 {
        s.notes.push("direct and unhedged".to_string());
    }
    s
}

fn low_directness(p: &PersonalityProfile, _emotion: Emotion, mut s: ExprState) -> ExprState {
    if p.directness < 40 {
        s.notes.push("gentle framing, diplomatic".to_string());
    }
    s
}

fn high_precision(p: &PersonalityProfile, _emotion: Emotion, mut s: ExprState) -> ExprState {
    if p.precision > 80 {
        s.notes
            .push("articulate and exact even in this state".to_string());
    }
    s
}

// Energy rules inspect the pacing as modified by everything above.
fn high_energy(p: &PersonalityProfile, _emotion: Emotion, mut s: ExprState) -> ExprState {
    if p.energy > 70 {
        if s.pacing.contains("slow") {
            s.pacing = "measured but not dragging".to_string();
        } else {
            s.pacing.push_str(", quick");
        }
    }
    s
}

fn low_energy(p: &PersonalityProfile, _emotion: Emotion, mut s: ExprState) -> ExprState {
    if p.energy < 40 {
        if s.pacing.contains("fast") {
            s.pacing = "moderately paced".to_string();
        } else {
            s.pacing.push_str(", unhurried");
        }
    }
    s
}

/// Compute how `profile` expresses `emotion`. Deterministic, pure, no I/O;
/// the emotion is assumed to already belong to the closed set.
pub fn modulate(profile: &PersonalityProfile, emotion: Emotion) -> ExpressionAttributes {
    let (vocal_qualities, pacing, intensity) = base_attributes(emotion);
    let state = ExprState {
        vocal_qualities: vocal_qualities.to_string(),
        pacing: pacing.to_string(),
        intensity: intensity.to_string(),
        notes: Vec::new(),
    };

    let state = RULES
        .iter()
        .fold(state, |s, rule| rule(profile, emotion, s));

    let additional_notes = if state.notes.is_empty() {
        STANDARD_EXPRESSION.to_string()
    } else {
        state.notes.join(", ")
    };

    ExpressionAttributes {
        emotion,
        vocal_qualities: state.vocal_qualities,
        pacing: state.pacing,
        intensity: state.intensity,
        additional_notes,
    }
}
