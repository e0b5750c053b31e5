//! Personality profiles — who is speaking, and how they express emotion.
//!
//! A profile is a base voice description plus 12 bounded traits on a 0-100
//! scale (0-30 low, 31-50 below average, 51-70 average, 71-90 high,
//! 91-100 defining characteristic). Profiles are immutable once built;
//! out-of-range traits are rejected at construction, never clamped.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

fn default_trait() -> i16 {
    50
}

// ── Errors ─────────────────────────────────────────────────

#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("trait '{name}' = {value} for profile '{profile}' is outside 0-100")]
    InvalidTrait {
        profile: String,
        name: &'static str,
        value: i16,
    },
}

// ── Personality Profile ────────────────────────────────────

/// An agent's personality. Traits are stored as `i16` so out-of-range
/// caller input is representable long enough to be rejected by
/// [`PersonalityProfile::validated`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonalityProfile {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Voice description without any emotion applied.
    #[serde(default)]
    pub base_voice: String,

    // Energy traits
    #[serde(default = "default_trait")]
    pub enthusiasm: i16,
    #[serde(default = "default_trait")]
    pub energy: i16,
    #[serde(default = "default_trait")]
    pub expressiveness: i16,

    // Resilience traits
    #[serde(default = "default_trait")]
    pub resilience: i16,
    #[serde(default = "default_trait")]
    pub composure: i16,
    #[serde(default = "default_trait")]
    pub optimism: i16,

    // Social traits
    #[serde(default = "default_trait")]
    pub warmth: i16,
    #[serde(default = "default_trait")]
    pub formality: i16,
    #[serde(default = "default_trait")]
    pub directness: i16,

    // Cognitive traits
    #[serde(default = "default_trait")]
    pub precision: i16,
    #[serde(default = "default_trait")]
    pub curiosity: i16,
    #[serde(default = "default_trait")]
    pub playfulness: i16,
}

impl PersonalityProfile {
    /// All traits with their names, in declaration order.
    pub fn traits(&self) -> [(&'static str, i16); 12] {
        [
            ("enthusiasm", self.enthusiasm),
            ("energy", self.energy),
            ("expressiveness", self.expressiveness),
            ("resilience", self.resilience),
            ("composure", self.composure),
            ("optimism", self.optimism),
            ("warmth", self.warmth),
            ("formality", self.formality),
            ("directness", self.directness),
            ("precision", self.precision),
            ("curiosity", self.curiosity),
            ("playfulness", self.playfulness),
        ]
    }

    /// Enforce the 0-100 invariant. Every construction path (registry,
    /// config file, ad hoc request) goes through this.
    pub fn validated(self) -> Result<Self, ProfileError> {
        for (name, value) in self.traits() {
            if !(0..=100).contains(&value) {
                return Err(ProfileError::InvalidTrait {
                    profile: self.name.clone(),
                    name,
                    value,
                });
            }
        }
        Ok(self)
    }
}

// ── Predefined Profiles ────────────────────────────────────

/// The built-in agent personalities shipped with the system.
pub fn builtin_profiles() -> Vec<PersonalityProfile> {
    vec![
        PersonalityProfile {
            name: "kai".to_string(),
            description: "Futuristic AI assistant - curious, precise, warm but efficient"
                .to_string(),
            base_voice: "Slightly masculine androgynous young voice, Japanese-accented, \
                         rapid speech pattern, futuristic AI friend who thinks fast and \
                         talks fast, warm but efficient"
                .to_string(),
            enthusiasm: 60,
            energy: 75,
            expressiveness: 65,
            resilience: 85,
            composure: 70,
            optimism: 75,
            warmth: 70,
            formality: 30,
            directness: 80,
            precision: 95,
            curiosity: 90,
            playfulness: 45,
        },
        PersonalityProfile {
            name: "algorithm".to_string(),
            description: "Sharp analytical mind - methodical, precise, puzzle-solver".to_string(),
            base_voice: "Sharp analytical voice, methodical and precise, slight Japanese \
                         accent, speaks with clarity and logical cadence"
                .to_string(),
            enthusiasm: 40,
            energy: 60,
            expressiveness: 50,
            resilience: 90,
            composure: 85,
            optimism: 60,
            warmth: 40,
            formality: 50,
            directness: 90,
            precision: 95,
            curiosity: 75,
            playfulness: 35,
        },
        PersonalityProfile {
            name: "demure".to_string(),
            description: "Gentle, soft-spoken - gets quieter under stress".to_string(),
            base_voice: "Soft gentle voice, speaks quietly and carefully, thoughtful pauses, \
                         delicate and considerate"
                .to_string(),
            enthusiasm: 35,
            energy: 40,
            expressiveness: 45,
            resilience: 30,
            composure: 60,
            optimism: 50,
            warmth: 80,
            formality: 60,
            directness: 30,
            precision: 50,
            curiosity: 55,
            playfulness: 30,
        },
        PersonalityProfile {
            name: "fiery".to_string(),
            description: "Passionate, intense - gets MORE energetic under stress".to_string(),
            base_voice: "Intense passionate voice, speaks with fire and conviction, animated \
                         and expressive, unafraid to show emotion"
                .to_string(),
            enthusiasm: 85,
            energy: 90,
            expressiveness: 95,
            resilience: 70,
            composure: 30,
            optimism: 65,
            warmth: 60,
            formality: 20,
            directness: 95,
            precision: 40,
            curiosity: 60,
            playfulness: 50,
        },
    ]
}

// ── Registry ───────────────────────────────────────────────

/// Default profile used when a requested name is unknown.
pub const DEFAULT_PROFILE: &str = "kai";

/// Read-only registry of named personalities. Built once at startup and
/// shared behind `Arc` — safe for unlimited concurrent readers.
pub struct PersonalityRegistry {
    profiles: HashMap<String, Arc<PersonalityProfile>>,
}

impl PersonalityRegistry {
    /// Registry with only the built-in profiles.
    pub fn builtin() -> Self {
        // Built-ins are hand-checked constants; validation still runs so a
        // bad edit fails loudly in tests rather than silently at runtime.
        Self::with_custom(Vec::new()).expect("builtin profiles are valid")
    }

    /// Registry with built-ins plus caller-supplied profiles layered on top
    /// (same name overrides the built-in). Invalid traits are rejected.
    pub fn with_custom(custom: Vec<PersonalityProfile>) -> Result<Self, ProfileError> {
        let mut profiles = HashMap::new();
        for profile in builtin_profiles().into_iter().chain(custom) {
            let profile = profile.validated()?;
            profiles.insert(profile.name.to_lowercase(), Arc::new(profile));
        }
        Ok(Self { profiles })
    }

    /// Look up a profile by name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<Arc<PersonalityProfile>> {
        self.profiles.get(&name.to_lowercase()).cloned()
    }

    /// The fallback profile for unknown names.
    pub fn default_profile(&self) -> Arc<PersonalityProfile> {
        self.profiles
            .get(DEFAULT_PROFILE)
            .cloned()
            .expect("default profile is always registered")
    }

    /// All registered profile names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.profiles.keys().cloned().collect();
        names.sort();
        names
    }
}
