use std::collections::BTreeMap;
use std::fmt;

use super::ProfileDraft;

/// A single field-level complaint from the submitter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Outcome of one submission. Exactly one branch drives reconciliation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
    Rejected { errors: Vec<ValidationError> },
    Accepted { profile: ProfileDraft },
}

impl SubmissionResult {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    pub fn errors(&self) -> &[ValidationError] {
        match self {
            Self::Rejected { errors } => errors,
            Self::Accepted { .. } => &[],
        }
    }
}

/// Field path to message lookup used for inline error display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap(BTreeMap<String, String>);

impl ErrorMap {
    /// Later entries overwrite earlier ones with the same path.
    pub fn from_errors(errors: &[ValidationError]) -> Self {
        let mut map = BTreeMap::new();
        for error in errors {
            map.insert(error.path.clone(), error.message.clone());
        }
        Self(map)
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.0.get(path).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(path, message)| (path.as_str(), message.as_str()))
    }
}

/// Sequence number handed out when a submission starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubmissionId(pub u64);

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "submission_{}", self.0)
    }
}
