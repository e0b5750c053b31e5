//! emovox — personality-aware emotional voice instruction synthesis.
//!
//! Turns text (plus optional conversation context and a speaker personality)
//! into a natural-language delivery directive for an external TTS engine:
//! classify the emotion (remote LLM inference with a keyword-heuristic
//! fallback), modulate expression through the personality's trait rules,
//! then compose the final instruction string.

pub mod config;
pub mod emotion;
pub mod expression;
pub mod pipeline;
pub mod synth;

pub use config::EmovoxConfig;
pub use emotion::{ClassifyError, Emotion, EmotionClassifier, RemoteClassifier};
pub use expression::{
    ExpressionAttributes, PersonalityProfile, PersonalityRegistry, ProfileError,
};
pub use pipeline::{InstructionSynthesizer, ProfileSelector, SpeakError, VoiceDirective};
pub use synth::{SynthError, SynthesisEngine, SynthesizedAudio};
