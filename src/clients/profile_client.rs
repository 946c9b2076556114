use tokio::sync::mpsc;
use tracing::{debug, instrument};
use crate::domain::{ProfileDraft, SubmissionResult};
use crate::error::SubmitError;
use crate::messages::SubmitRequest;

/// Client for the simulated profile backend.
#[derive(Clone)]
pub struct ProfileClient {
    sender: mpsc::Sender<SubmitRequest>,
}

impl ProfileClient {
    pub fn new(sender: mpsc::Sender<SubmitRequest>) -> Self {
        Self { sender }
    }

    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), SubmitError> {
        debug!("Sending shutdown request");
        self.sender
            .send(SubmitRequest::Shutdown)
            .await
            .map_err(|e| SubmitError::ActorCommunicationError(e.to_string()))
    }
}

client_method!(ProfileClient => fn submit_profile(profile: ProfileDraft) -> SubmissionResult as SubmitRequest::Submit, Error = SubmitError);
