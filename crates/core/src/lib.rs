//! healthbot-core: Domain logic for the symptom-to-diagnosis assistant
//!
//! This crate holds the pure, I/O-free pieces shared by the server:
//! disease records and the dataset store, symptom tokenization, the
//! symptom matcher, the follow-up conversation state machine, and the
//! reply renderers (including the fallback text formatter).

pub mod followup;
pub mod format;
pub mod input;
pub mod matcher;
pub mod record;

pub use followup::{ConversationState, FollowupOutcome, Phase, Turn};
pub use format::{GEMINI_UNAVAILABLE, followup_prompt, format_reply, render_record};
pub use input::parse_symptoms;
pub use matcher::find_match;
pub use record::{Dataset, DiseaseRecord};
