//! Submission lifecycle state machine.
//!
//! The original page tracked an `idle`/`success`/`error` flag plus a
//! separate in-flight boolean. Here the two are a single explicit
//! machine with a fixed transition table:
//!
//! ```text
//! Editing ──begin()──▶ Submitting ──settle_ok()──▶ Succeeded
//!    ▲                     │                           │
//!    └─(never automatic)   └──settle_err()──▶ Failed   │
//! Succeeded/Failed ──begin()──▶ Submitting ◀───────────┘
//! ```
//!
//! `begin()` while already `Submitting` is refused, which is the
//! re-entrancy guard the original only approximated by disabling its
//! submit button.

/// Where the most recent submission attempt stands.
///
/// `Succeeded` and `Failed` persist until the next `begin()`; in
/// particular, editing fields after a success deliberately does not
/// return the machine to `Editing` (the banner stays up until a fresh
/// attempt).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    /// No attempt made since the last settled one; the form is editable.
    #[default]
    Editing,
    /// An attempt is outstanding; the trigger is disabled.
    Submitting,
    /// The last attempt delivered; the success banner is shown.
    Succeeded,
    /// The last attempt failed; the error banner is shown.
    Failed,
}

/// Tri-state outcome indicator for the most recent attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionStatus {
    Idle,
    Success,
    Error,
}

impl SubmissionState {
    /// Starts a submission attempt.
    ///
    /// Returns `true` and moves to `Submitting` from any settled state;
    /// returns `false` without transitioning when an attempt is already
    /// outstanding.
    pub fn begin(&mut self) -> bool {
        match self {
            SubmissionState::Submitting => false,
            _ => {
                *self = SubmissionState::Submitting;
                true
            }
        }
    }

    /// Settles the outstanding attempt as delivered.
    pub fn settle_ok(&mut self) {
        *self = SubmissionState::Succeeded;
    }

    /// Settles the outstanding attempt as failed.
    pub fn settle_err(&mut self) {
        *self = SubmissionState::Failed;
    }

    /// Returns `true` while an attempt is outstanding.
    pub fn in_flight(self) -> bool {
        self == SubmissionState::Submitting
    }

    /// Collapses the machine to the legacy tri-state status.
    ///
    /// `Submitting` reports `Idle` because the original reset its
    /// status flag at the start of every attempt.
    pub fn status(self) -> SubmissionStatus {
        match self {
            SubmissionState::Editing | SubmissionState::Submitting => SubmissionStatus::Idle,
            SubmissionState::Succeeded => SubmissionStatus::Success,
            SubmissionState::Failed => SubmissionStatus::Error,
        }
    }
}
