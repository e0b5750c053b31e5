//! Top-level pipeline: classify → modulate → compose, plus the optional
//! synthesize-and-play path. Each request is a self-contained computation
//! over immutable inputs; the only shared state is the read-only registry.

use crate::emotion::{Emotion, EmotionClassifier};
use crate::expression::{
    compose_instruction, modulate, ExpressionAttributes, PersonalityProfile, PersonalityRegistry,
    ProfileError,
};
use crate::synth::{play_audio, write_temp_audio, PlaybackError, SynthError, SynthesisEngine, SynthesizedAudio};
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};

/// How the caller picks the speaking personality: a registry name, or a
/// complete ad hoc profile supplied with the request.
#[derive(Debug, Clone)]
pub enum ProfileSelector {
    Named(String),
    Inline(PersonalityProfile),
}

/// Result of one classification + modulation + composition pass.
#[derive(Debug, Clone, Serialize)]
pub struct VoiceDirective {
    pub personality: String,
    pub emotion: Emotion,
    pub expression: ExpressionAttributes,
    pub instruction: String,
}

#[derive(Debug, thiserror::Error)]
pub enum SpeakError {
    #[error(transparent)]
    Profile(#[from] ProfileError),
    #[error(transparent)]
    Synth(#[from] SynthError),
    #[error(transparent)]
    Playback(#[from] PlaybackError),
}

/// The emotional voice instruction synthesizer.
pub struct InstructionSynthesizer {
    registry: Arc<PersonalityRegistry>,
    classifier: EmotionClassifier,
}

impl InstructionSynthesizer {
    pub fn new(registry: Arc<PersonalityRegistry>, classifier: EmotionClassifier) -> Self {
        Self {
            registry,
            classifier,
        }
    }

    pub fn registry(&self) -> &PersonalityRegistry {
        &self.registry
    }

    /// Resolve a selector to an immutable profile. Unknown names fall back
    /// to the registry default; an invalid inline profile is the only error.
    fn resolve_profile(
        &self,
        selector: ProfileSelector,
    ) -> Result<Arc<PersonalityProfile>, ProfileError> {
        match selector {
            ProfileSelector::Named(name) => Ok(self.registry.get(&name).unwrap_or_else(|| {
                warn!(name, "personality not found, using default");
                self.registry.default_profile()
            })),
            ProfileSelector::Inline(profile) => Ok(Arc::new(profile.validated()?)),
        }
    }

    /// The core operation: text (+ optional context) in, delivery directive
    /// out. Never fails for classification reasons — only a malformed ad
    /// hoc profile is an error.
    pub async fn classify_and_compose(
        &self,
        text: &str,
        context: Option<&str>,
        personality: ProfileSelector,
        prefer_remote: bool,
    ) -> Result<VoiceDirective, ProfileError> {
        let profile = self.resolve_profile(personality)?;
        let emotion = self.classifier.classify(text, context, prefer_remote).await;
        let expression = modulate(&profile, emotion);
        let instruction = compose_instruction(&profile.base_voice, emotion, &expression);

        info!(
            personality = %profile.name,
            %emotion,
            "composed voice instruction"
        );

        Ok(VoiceDirective {
            personality: profile.name.clone(),
            emotion,
            expression,
            instruction,
        })
    }

    /// Compose a directive and synthesize audio for it through the engine.
    pub async fn synthesize(
        &self,
        engine: &dyn SynthesisEngine,
        text: &str,
        context: Option<&str>,
        personality: ProfileSelector,
        prefer_remote: bool,
        speaker: &str,
        language: &str,
    ) -> Result<(VoiceDirective, SynthesizedAudio), SpeakError> {
        let directive = self
            .classify_and_compose(text, context, personality, prefer_remote)
            .await?;
        let audio = engine
            .synthesize(text, speaker, Some(&directive.instruction), language)
            .await?;
        Ok((directive, audio))
    }

    /// Full path: compose, synthesize, write a temp file, play it, delete it.
    pub async fn speak(
        &self,
        engine: &dyn SynthesisEngine,
        text: &str,
        context: Option<&str>,
        personality: ProfileSelector,
        prefer_remote: bool,
        speaker: &str,
        language: &str,
        volume: f32,
    ) -> Result<VoiceDirective, SpeakError> {
        let (directive, audio) = self
            .synthesize(
                engine,
                text,
                context,
                personality,
                prefer_remote,
                speaker,
                language,
            )
            .await?;
        let path = write_temp_audio(&audio.bytes)?;
        play_audio(&path, volume, true).await?;
        Ok(directive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EmovoxConfig;
    use crate::expression::STANDARD_EXPRESSION;
    use async_trait::async_trait;
    use std::sync::Mutex;

    fn synthesizer() -> InstructionSynthesizer {
        let config = EmovoxConfig::default();
        InstructionSynthesizer::new(
            Arc::new(config.build_registry().unwrap()),
            config.build_classifier(),
        )
    }

    #[tokio::test]
    async fn end_to_end_heuristic_directive() {
        let s = synthesizer();
        let directive = s
            .classify_and_compose(
                "Eureka! It works!",
                None,
                ProfileSelector::Named("kai".to_string()),
                false,
            )
            .await
            .unwrap();

        assert_eq!(directive.emotion, Emotion::Celebratory);
        assert_eq!(directive.personality, "kai");
        assert!(
            directive.instruction.contains("expressing celebratory"),
            "instruction: {}",
            directive.instruction
        );
        // kai sits on several strict boundaries (warmth 70, composure 70,
        // directness 80) but precision 95 still adds a note.
        assert_ne!(directive.expression.additional_notes, STANDARD_EXPRESSION);
        assert!(directive
            .expression
            .additional_notes
            .contains("articulate and exact even in this state"));
    }

    #[tokio::test]
    async fn unknown_personality_falls_back_to_default() {
        let s = synthesizer();
        let directive = s
            .classify_and_compose(
                "hello there",
                None,
                ProfileSelector::Named("nobody".to_string()),
                false,
            )
            .await
            .unwrap();
        assert_eq!(directive.personality, "kai");
    }

    #[tokio::test]
    async fn inline_profile_is_validated() {
        let s = synthesizer();
        let mut profile = crate::expression::builtin_profiles().remove(0);
        profile.resilience = 101;
        let err = s
            .classify_and_compose("text", None, ProfileSelector::Inline(profile), false)
            .await
            .unwrap_err();
        assert!(matches!(err, ProfileError::InvalidTrait { .. }));
    }

    #[tokio::test]
    async fn inline_profile_drives_composition() {
        let s = synthesizer();
        let mut profile = crate::expression::builtin_profiles().remove(0);
        profile.name = "custom".to_string();
        profile.base_voice = "Gravelly narrator voice".to_string();
        let directive = s
            .classify_and_compose("text", None, ProfileSelector::Inline(profile), false)
            .await
            .unwrap();
        assert_eq!(directive.personality, "custom");
        assert!(directive.instruction.starts_with("Gravelly narrator voice, "));
    }

    // ── Engine seam ────────────────────────────────────────

    struct StubEngine {
        received_instruct: Mutex<Option<String>>,
    }

    #[async_trait]
    impl SynthesisEngine for StubEngine {
        fn id(&self) -> &str {
            "stub"
        }

        async fn synthesize(
            &self,
            _text: &str,
            _speaker: &str,
            instruct: Option<&str>,
            _language: &str,
        ) -> Result<SynthesizedAudio, SynthError> {
            *self.received_instruct.lock().unwrap() = instruct.map(String::from);
            Ok(SynthesizedAudio {
                bytes: vec![0u8; 16],
                sample_rate: 24_000,
            })
        }
    }

    #[tokio::test]
    async fn engine_receives_the_composed_instruction() {
        let s = synthesizer();
        let engine = StubEngine {
            received_instruct: Mutex::new(None),
        };
        let (directive, audio) = s
            .synthesize(
                &engine,
                "Eureka! It works!",
                None,
                ProfileSelector::Named("fiery".to_string()),
                false,
                "Ryan",
                "en",
            )
            .await
            .unwrap();

        assert_eq!(audio.sample_rate, 24_000);
        let received = engine.received_instruct.lock().unwrap().clone();
        assert_eq!(received.as_deref(), Some(directive.instruction.as_str()));
    }
}
