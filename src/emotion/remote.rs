//! Remote emotion inference — spawns an external LLM inference process.
//!
//! The inference program is invoked with a speed tier, a structured-output
//! flag, a system prompt and a user prompt, and is expected to print text
//! containing one embedded JSON object: `{"emotion": "<label>", "reason": "..."}`.
//! The call runs under a hard wall-clock timeout; on expiry the child is
//! abandoned (killed on drop) and the call fails. Every failure here is
//! recoverable — the orchestrator falls back to the keyword heuristic.

use super::Emotion;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tracing::{debug, warn};

/// Hard bound on a single inference call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

const SYSTEM_PROMPT: &str = "You are an emotion classifier for a voice synthesis system.\n\
Analyze the text and determine the appropriate emotional delivery.\n\
Respond with ONLY a JSON object, no other text.";

fn build_user_prompt(text: &str, context: Option<&str>) -> String {
    // The context line stays in the template even when empty, so the
    // prompt shape the model sees does not shift with the call site.
    let context_line = match context {
        Some(ctx) => format!("Context: {}", ctx),
        None => String::new(),
    };
    format!(
        r#"Analyze this text that will be spoken by an AI assistant:

Text: "{text}"
{context_line}

Choose ONE emotion:
- excited: genuine enthusiasm, animated
- thoughtful: deliberate, contemplative
- focused: precise, analytical, methodical
- celebratory: joyful, triumphant
- concerned: serious, careful
- curious: wondering, engaged
- confident: assured, certain
- empathetic: warm, understanding
- frustrated: tense, clipped
- sad: subdued, quiet
- neutral: natural, conversational

Respond: {{"emotion": "name", "reason": "brief"}}"#
    )
}

// ── Errors ─────────────────────────────────────────────────

/// Failure kinds of a remote classification attempt. None of these reach
/// the end user: the orchestrator maps them all to the heuristic fallback.
#[derive(Debug, thiserror::Error)]
pub enum ClassifyError {
    #[error("inference process unavailable: {0}")]
    Unavailable(String),
    #[error("inference timed out after {0:?}")]
    Timeout(Duration),
    #[error("malformed inference response: {0}")]
    Malformed(String),
}

// ── Remote Classifier ──────────────────────────────────────

/// Emotion classifier backed by an external inference subprocess.
#[derive(Debug, Clone)]
pub struct RemoteClassifier {
    program: String,
    /// Leading arguments before the system and user prompts
    /// (e.g. `["run", "Inference.ts", "--level", "fast", "--json"]`).
    base_args: Vec<String>,
    timeout: Duration,
}

impl RemoteClassifier {
    pub fn new(program: impl Into<String>, base_args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            base_args,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Override the timeout (tests use short bounds).
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Run one inference attempt. Exactly one subprocess invocation per
    /// call — no retry here, the fallback policy lives in the orchestrator.
    pub async fn infer(&self, text: &str, context: Option<&str>) -> Result<Emotion, ClassifyError> {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.base_args)
            .arg(SYSTEM_PROMPT)
            .arg(build_user_prompt(text, context))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            // Abandon the child if the timeout fires and the future is dropped
            .kill_on_drop(true);

        debug!(program = %self.program, "running emotion inference");

        let child = cmd.spawn().map_err(|e| {
            ClassifyError::Unavailable(format!("failed to spawn '{}': {}", self.program, e))
        })?;

        let output = tokio::time::timeout(self.timeout, child.wait_with_output())
            .await
            .map_err(|_| ClassifyError::Timeout(self.timeout))?
            .map_err(|e| ClassifyError::Unavailable(format!("inference process error: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ClassifyError::Unavailable(format!(
                "inference exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        let response = String::from_utf8_lossy(&output.stdout);
        parse_response(&response)
    }
}

/// Extract the first-`{`-to-last-`}` substring of the response text.
fn extract_embedded_json(response: &str) -> Option<&str> {
    let start = response.find('{')?;
    let end = response.rfind('}')?;
    if end > start {
        Some(&response[start..=end])
    } else {
        None
    }
}

fn parse_response(response: &str) -> Result<Emotion, ClassifyError> {
    let json = extract_embedded_json(response).ok_or_else(|| {
        // Truncate by chars, not bytes — the process can emit arbitrary UTF-8
        let snippet: String = response.chars().take(200).collect();
        ClassifyError::Malformed(format!("no JSON object in response: {}", snippet))
    })?;

    let value: serde_json::Value = serde_json::from_str(json)
        .map_err(|e| ClassifyError::Malformed(format!("JSON decode failed: {}", e)))?;

    let label = value
        .get("emotion")
        .and_then(|v| v.as_str())
        .ok_or_else(|| ClassifyError::Malformed("missing 'emotion' field".to_string()))?;

    match Emotion::from_label(label) {
        Some(emotion) => {
            let reason = value.get("reason").and_then(|v| v.as_str()).unwrap_or("no reason");
            debug!(%emotion, reason, "inferred emotion");
            Ok(emotion)
        }
        None => {
            // Unknown label is not a failure — coerce to neutral
            warn!(label, "unknown emotion label, defaulting to neutral");
            Ok(Emotion::Neutral)
        }
    }
}
