//! Classification orchestrator — remote inference with heuristic fallback.
//!
//! Guarantee: always returns a valid `Emotion`. Remote failures are logged
//! and swallowed; they never surface to the caller.

use super::heuristic;
use super::remote::RemoteClassifier;
use super::Emotion;
use tracing::{info, warn};

/// Two-stage classifier: try the remote path when asked to, fall back to
/// the keyword heuristic on any failure.
#[derive(Debug, Clone)]
pub struct EmotionClassifier {
    remote: RemoteClassifier,
}

impl EmotionClassifier {
    pub fn new(remote: RemoteClassifier) -> Self {
        Self { remote }
    }

    pub fn remote(&self) -> &RemoteClassifier {
        &self.remote
    }

    /// Classify text. With `prefer_remote` set, one remote attempt is made;
    /// every `ClassifyError` kind maps to the heuristic result instead.
    pub async fn classify(
        &self,
        text: &str,
        context: Option<&str>,
        prefer_remote: bool,
    ) -> Emotion {
        if prefer_remote {
            match self.remote.infer(text, context).await {
                Ok(emotion) => {
                    info!(%emotion, "remote classification");
                    return emotion;
                }
                Err(e) => {
                    warn!(error = %e, "remote classification failed, using heuristic");
                }
            }
        }
        let emotion = heuristic::classify(text);
        info!(%emotion, "heuristic classification");
        emotion
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn broken_remote() -> RemoteClassifier {
        RemoteClassifier::new("/definitely/not/a/real/inference-binary", vec![])
            .with_timeout(Duration::from_millis(500))
    }

    #[tokio::test]
    async fn heuristic_path_when_remote_not_preferred() {
        let c = EmotionClassifier::new(broken_remote());
        let emotion = c.classify("Eureka! It works!", None, false).await;
        assert_eq!(emotion, Emotion::Celebratory);
    }

    #[tokio::test]
    async fn remote_failure_falls_back_to_heuristic() {
        let c = EmotionClassifier::new(broken_remote());
        // Remote is unavailable, so the result must equal the heuristic's.
        let emotion = c.classify("Eureka! It works!", None, true).await;
        assert_eq!(emotion, Emotion::Celebratory);
    }

    #[tokio::test]
    async fn remote_timeout_falls_back_to_heuristic() {
        let remote = RemoteClassifier::new("sh", vec!["-c".to_string(), "sleep 5".to_string()])
            .with_timeout(Duration::from_millis(100));
        let c = EmotionClassifier::new(remote);
        let emotion = c.classify("There is a problem with the build", None, true).await;
        assert_eq!(emotion, Emotion::Concerned);
    }

    #[tokio::test]
    async fn working_remote_takes_priority() {
        let remote = RemoteClassifier::new(
            "sh",
            vec![
                "-c".to_string(),
                r#"echo '{"emotion": "empathetic", "reason": "t"}'"#.to_string(),
            ],
        )
        .with_timeout(Duration::from_secs(5));
        let c = EmotionClassifier::new(remote);
        // Heuristic would say celebratory; the remote result wins.
        let emotion = c.classify("Eureka! It works!", None, true).await;
        assert_eq!(emotion, Emotion::Empathetic);
    }
}
