use crate::domain::{ErrorMap, ProfileDraft, SubmissionId};

/// Where the form is in its submit cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Submitting(SubmissionId),
    /// The submitter could not be reached; `reason` is shown as a generic
    /// form-level error until the next submission starts.
    Failed { reason: String },
}

/// Everything the presentation layer renders from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub draft: ProfileDraft,
    /// `Some` only while the latest finished submission was rejected.
    pub errors: Option<ErrorMap>,
    pub phase: Phase,
    pub last_submission: Option<SubmissionId>,
}

impl FormState {
    pub fn in_flight(&self) -> Option<SubmissionId> {
        match self.phase {
            Phase::Submitting(id) => Some(id),
            _ => None,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight().is_some()
    }

    /// Inline message for one field, if the last submission rejected it.
    pub fn error_for(&self, path: &str) -> Option<&str> {
        self.errors.as_ref().and_then(|errors| errors.get(path))
    }

    pub fn failure(&self) -> Option<&str> {
        match &self.phase {
            Phase::Failed { reason } => Some(reason.as_str()),
            _ => None,
        }
    }
}
