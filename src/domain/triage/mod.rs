//! Triage dialogue domain.
//!
//! Pure logic for the symptom triage conversation: which phase a turn
//! belongs to, what instruction text the model receives in that phase, and
//! how generated text is cleaned before it is stored or shown. Nothing in
//! here performs I/O.

mod phase;
mod policy;
mod prompt;
mod sanitizer;
mod turn;

pub use phase::Phase;
pub use policy::DialoguePolicy;
pub use prompt::{PromptBuilder, EMERGENCY_MESSAGE};
pub use sanitizer::clean_response;
pub use turn::Turn;
