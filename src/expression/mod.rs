//! Personality-driven vocal expression: profiles, the modulation rule
//! table, and instruction composition.

pub mod composer;
pub mod modulator;
pub mod profile;

pub use composer::{compose_instruction, compose_simple, delivery_template};
pub use modulator::{modulate, ExpressionAttributes, STANDARD_EXPRESSION};
pub use profile::{
    builtin_profiles, PersonalityProfile, PersonalityRegistry, ProfileError, DEFAULT_PROFILE,
};
