//! Keyword-based emotion detection — fast, no LLM call.
//!
//! Fallback path when remote inference is disabled or fails. Pure and
//! total: every input maps to exactly one label, identical on every call.
//!
//! Keyword sets are tested in a fixed priority order and the first match
//! wins, so a text that is both "concerned" and question-shaped resolves
//! to concerned. That ordering is a contract, not an implementation detail.

use super::Emotion;

const CELEBRATORY_KW: &[&str] = &[
    "eureka",
    "it works",
    "success",
    "done!",
    "solved",
    "fixed it",
    "finally",
    "figured it out",
    "got it",
    "yes!",
];

const EXCITED_KW: &[&str] = &[
    "exciting",
    "great news",
    "amazing",
    "incredible",
    "awesome",
    "fantastic",
];

const CONCERNED_KW: &[&str] = &[
    "error", "failed", "broken", "problem", "issue", "warning", "careful",
];

const THOUGHTFUL_KW: &[&str] = &[
    "wonder",
    "perhaps",
    "might be",
    "consider",
    "think about",
    "philosophy",
    "consciousness",
];

const FOCUSED_KW: &[&str] = &[
    "function", "code", "line", "variable", "debug", "step", "first", "then", "next",
];

const CURIOUS_KW: &[&str] = &["interesting", "curious", "what if", "how does"];

const EMPATHETIC_KW: &[&str] = &[
    "understand",
    "sorry",
    "help you",
    "here for you",
    "no worries",
];

const CONFIDENT_KW: &[&str] = &[
    "definitely",
    "certainly",
    "absolutely",
    "confident",
    "sure",
];

fn any_match(lower: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| lower.contains(kw))
}

/// Classify text by keyword priority. Always returns a label.
pub fn classify(text: &str) -> Emotion {
    let lower = text.to_lowercase();

    if any_match(&lower, CELEBRATORY_KW) {
        return Emotion::Celebratory;
    }
    if any_match(&lower, EXCITED_KW) {
        return Emotion::Excited;
    }
    if any_match(&lower, CONCERNED_KW) {
        return Emotion::Concerned;
    }
    if any_match(&lower, THOUGHTFUL_KW) {
        return Emotion::Thoughtful;
    }
    if any_match(&lower, FOCUSED_KW) {
        return Emotion::Focused;
    }
    if text.contains('?') || any_match(&lower, CURIOUS_KW) {
        return Emotion::Curious;
    }
    if any_match(&lower, EMPATHETIC_KW) {
        return Emotion::Empathetic;
    }
    if any_match(&lower, CONFIDENT_KW) {
        return Emotion::Confident;
    }

    Emotion::Neutral
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn eureka_is_celebratory() {
        assert_eq!(classify("Eureka! It works!"), Emotion::Celebratory);
    }

    #[test]
    fn excited_keywords_detected() {
        assert_eq!(classify("This is amazing, great news all around"), Emotion::Excited);
    }

    #[test]
    fn concerned_outranks_curious() {
        // Contains both a concerned keyword and a question mark — priority
        // order says concerned wins.
        assert_eq!(
            classify("Did you see the error in the logs?"),
            Emotion::Concerned
        );
    }

    #[test]
    fn celebratory_outranks_concerned() {
        assert_eq!(
            classify("Fixed it! The error is gone."),
            Emotion::Celebratory
        );
    }

    #[test]
    fn question_mark_alone_is_curious() {
        assert_eq!(classify("Shall we go outside today?"), Emotion::Curious);
    }

    #[test]
    fn empathetic_keywords_detected() {
        assert_eq!(classify("I'm sorry that happened to you."), Emotion::Empathetic);
    }

    #[test]
    fn confident_keywords_detected() {
        assert_eq!(classify("That will definitely work."), Emotion::Confident);
    }

    #[test]
    fn thoughtful_keywords_detected() {
        assert_eq!(
            classify("I wonder about the nature of consciousness."),
            Emotion::Thoughtful
        );
    }

    #[test]
    fn focused_keywords_detected() {
        assert_eq!(
            classify("Look at the variable on this line of the loop."),
            Emotion::Focused
        );
    }

    #[test]
    fn plain_text_is_neutral() {
        assert_eq!(classify("The meeting is at three."), Emotion::Neutral);
        assert_eq!(classify(""), Emotion::Neutral);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(classify("EUREKA"), Emotion::Celebratory);
        assert_eq!(classify("AWESOME work today"), Emotion::Excited);
    }

    proptest! {
        // Total and deterministic: any input yields a member of the closed
        // set, and two calls agree.
        #[test]
        fn total_and_deterministic(text in "\\PC*") {
            let first = classify(&text);
            let second = classify(&text);
            prop_assert_eq!(first, second);
            prop_assert!(Emotion::ALL.contains(&first));
        }
    }
}
