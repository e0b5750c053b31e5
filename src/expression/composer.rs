//! Instruction composition — render delivery attributes into the final
//! directive string handed to the synthesis engine. Pure, no failure modes;
//! empty optional fields render as empty segments rather than erroring.

use super::modulator::{ExpressionAttributes, STANDARD_EXPRESSION};
use crate::emotion::Emotion;

/// Build the complete voice instruction: base voice, emotion and the
/// modulated attributes, joined with `", "`. The notes segment is omitted
/// when no rule added one.
pub fn compose_instruction(base_voice: &str, emotion: Emotion, attrs: &ExpressionAttributes) -> String {
    let mut parts = vec![
        base_voice.to_string(),
        format!("expressing {}", emotion),
        format!("voice {}", attrs.vocal_qualities),
        format!("speaking {}", attrs.pacing),
        format!("at {} intensity", attrs.intensity),
    ];

    if attrs.additional_notes != STANDARD_EXPRESSION {
        parts.push(attrs.additional_notes.clone());
    }

    parts.join(", ")
}

/// Canned per-emotion delivery phrase for the simple (personality-free) path.
pub fn delivery_template(emotion: Emotion) -> &'static str {
    match emotion {
        Emotion::Excited => {
            "speaking with genuine enthusiasm and rising energy, animated and expressive, \
             words coming quickly"
        }
        Emotion::Thoughtful => {
            "speaking slowly and deliberately, pausing to consider each word, measured and \
             contemplative"
        }
        Emotion::Focused => {
            "speaking with precision and clarity, methodical and analytical, walking through \
             ideas step by step"
        }
        Emotion::Celebratory => {
            "speaking with joy and triumph, bright and energetic, like sharing great news"
        }
        Emotion::Concerned => {
            "speaking with careful seriousness, slightly slower, conveying importance"
        }
        Emotion::Curious => {
            "speaking with wonder and interest, slightly higher pitch, engaged and questioning"
        }
        Emotion::Confident => "speaking with calm assurance, steady pace, certain and grounded",
        Emotion::Empathetic => "speaking with warmth and understanding, gentle and supportive",
        Emotion::Frustrated => "speaking with tension, clipped and terse",
        Emotion::Sad => "speaking quietly and subdued, lower energy",
        Emotion::Neutral => "speaking naturally and conversationally, balanced pace and tone",
    }
}

/// Simple instruction without personality modulation: base voice plus the
/// emotion's canned delivery phrase.
pub fn compose_simple(base_voice: &str, emotion: Emotion) -> String {
    format!("{}, {}", base_voice, delivery_template(emotion))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(notes: &str) -> ExpressionAttributes {
        ExpressionAttributes {
            emotion: Emotion::Concerned,
            vocal_qualities: "serious and careful".to_string(),
            pacing: "measured".to_string(),
            intensity: "moderate to soft".to_string(),
            additional_notes: notes.to_string(),
        }
    }

    #[test]
    fn segments_join_in_order() {
        let s = compose_instruction("Deep calm voice", Emotion::Concerned, &attrs(STANDARD_EXPRESSION));
        assert_eq!(
            s,
            "Deep calm voice, expressing concerned, voice serious and careful, \
             speaking measured, at moderate to soft intensity"
        );
    }

    #[test]
    fn sentinel_notes_are_omitted() {
        let s = compose_instruction("v", Emotion::Concerned, &attrs(STANDARD_EXPRESSION));
        assert!(!s.contains(STANDARD_EXPRESSION));
    }

    #[test]
    fn real_notes_become_the_final_segment() {
        let s = compose_instruction(
            "v",
            Emotion::Concerned,
            &attrs("genuine warmth in tone, direct and unhedged"),
        );
        assert!(
            s.ends_with(", genuine warmth in tone, direct and unhedged"),
            "notes should be the last segment: {}",
            s
        );
    }

    #[test]
    fn empty_base_voice_still_composes() {
        let s = compose_instruction("", Emotion::Concerned, &attrs(STANDARD_EXPRESSION));
        assert!(s.starts_with(", expressing concerned"));
    }

    #[test]
    fn simple_composition_uses_template() {
        let s = compose_simple("Warm narrator voice", Emotion::Celebratory);
        assert!(s.starts_with("Warm narrator voice, "));
        assert!(s.contains("joy and triumph"));
    }
}
