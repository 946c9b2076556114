use tokio::sync::oneshot;
use crate::domain::{ProfileDraft, SubmissionId, SubmissionResult};
use crate::error::{FormError, SubmitError};
use crate::form::FormState;

/// Generic type aliases for service communication
pub type ServiceResult<T, E> = std::result::Result<T, E>;
pub type ServiceResponse<T, E> = oneshot::Sender<ServiceResult<T, E>>;

/// Requests handled by the simulated profile backend.
#[derive(Debug)]
pub enum SubmitRequest {
    Submit {
        profile: ProfileDraft,
        respond_to: ServiceResponse<SubmissionResult, SubmitError>,
    },
    Shutdown,
}

/// Requests handled by the form controller. Field names arrive as the
/// path strings the presentation layer binds inputs to.
#[derive(Debug)]
pub enum FormRequest {
    FieldChange {
        name: String,
        value: String,
        respond_to: ServiceResponse<(), FormError>,
    },
    CheckboxChange {
        name: String,
        checked: bool,
        respond_to: ServiceResponse<(), FormError>,
    },
    Submit {
        respond_to: ServiceResponse<SubmissionId, FormError>,
    },
    GetState {
        respond_to: ServiceResponse<FormState, FormError>,
    },
    /// Posted by the controller's own submission task.
    Resolve {
        submission: SubmissionId,
        outcome: Result<SubmissionResult, SubmitError>,
    },
    Shutdown,
}
