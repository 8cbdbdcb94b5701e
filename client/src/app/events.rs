//! # Swap Events
//!
//! Everything the orchestrator reports to its host goes over one
//! `async_channel` as a [`SwapEvent`].

use chrono::{DateTime, Utc};

use crate::app::outcome::SwapOutcome;
use crate::app::state::{PreparedSwap, Quote, SwapPhase};

/// Orchestrator output sent to the host
#[derive(Debug, Clone, PartialEq)]
pub enum SwapEvent {
    /// Phase transition
    PhaseChanged(SwapPhase),
    /// Active quote replaced (`None` when cleared)
    QuoteUpdated(Option<Quote>),
    /// Unsigned transaction ready for review
    Prepared(PreparedSwap),
    /// Submission finished while the results view was open
    Outcome(SwapOutcome),
    /// Transient message
    Notice(Notice),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

/// Transient, user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
    pub at: DateTime<Utc>,
}

impl Notice {
    pub fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            at: Utc::now(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, message)
    }

    /// Notice announcing a swap result.
    pub fn for_outcome(outcome: &SwapOutcome) -> Self {
        let level = if outcome.is_success() {
            NoticeLevel::Success
        } else {
            NoticeLevel::Error
        };
        Self::new(level, outcome.summary())
    }
}
