//! Per-session conversation state and the follow-up state machine

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::input::parse_symptoms;
use crate::record::Dataset;

/// One user message and the bot's reply.
#[derive(Debug, Clone, Serialize)]
pub struct Turn {
    pub user: String,
    pub bot: String,
    pub at: DateTime<Utc>,
}

/// Where the conversation stands with respect to follow-up.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    AwaitingFollowup {
        pending_symptom: String,
    },
}

/// Result of running the follow-up controller over one turn's input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FollowupOutcome {
    /// Ask the user for more symptoms; do not attempt matching this turn.
    AskFollowup,
    /// Proceed to matching with the effective input for this turn.
    Proceed { input: String, tokens: Vec<String> },
}

/// Conversation state for one session: follow-up phase plus transcript.
///
/// Owned exclusively by its session; created at session start and
/// discarded with it.
#[derive(Debug, Clone, Default)]
pub struct ConversationState {
    phase: Phase,
    transcript: Vec<Turn>,
}

impl ConversationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the follow-up controller for one turn.
    ///
    /// A single token that is a *recognized* symptom raises a follow-up
    /// request: the token is parked and the caller must render a prompt
    /// instead of matching. The very next turn consumes the parked
    /// symptom, comma-joining it with the new input and re-tokenizing.
    /// The awaiting phase is always cleared when consumed, whatever the
    /// combined input later matches. A single unrecognized token skips
    /// follow-up and proceeds directly.
    pub fn evaluate(&mut self, input: &str, dataset: &Dataset) -> FollowupOutcome {
        match std::mem::take(&mut self.phase) {
            Phase::AwaitingFollowup { pending_symptom } => {
                let combined = format!("{pending_symptom}, {input}");
                let tokens = parse_symptoms(&combined);
                FollowupOutcome::Proceed {
                    input: combined,
                    tokens,
                }
            }
            Phase::Idle => {
                let tokens = parse_symptoms(input);
                if tokens.len() == 1 && dataset.symptom_known(&tokens[0]) {
                    self.phase = Phase::AwaitingFollowup {
                        pending_symptom: input.to_string(),
                    };
                    FollowupOutcome::AskFollowup
                } else {
                    FollowupOutcome::Proceed {
                        input: input.to_string(),
                        tokens,
                    }
                }
            }
        }
    }

    /// Append a completed turn to the transcript.
    pub fn push_turn(&mut self, user: String, bot: String) {
        self.transcript.push(Turn {
            user,
            bot,
            at: Utc::now(),
        });
    }

    pub fn transcript(&self) -> &[Turn] {
        &self.transcript
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }
}
