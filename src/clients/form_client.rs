use tokio::sync::{mpsc, watch};
use tracing::{debug, instrument};
use crate::domain::SubmissionId;
use crate::error::FormError;
use crate::form::FormState;
use crate::messages::FormRequest;

/// Handle the presentation layer uses to drive the form.
///
/// Besides request/response calls it exposes the render channel: every state
/// change the form makes is published there.
#[derive(Clone)]
pub struct FormClient {
    sender: mpsc::Sender<FormRequest>,
    render: watch::Receiver<FormState>,
}

impl FormClient {
    pub fn new(sender: mpsc::Sender<FormRequest>, render: watch::Receiver<FormState>) -> Self {
        Self { sender, render }
    }

    /// Receiver that is notified after every state change.
    pub fn subscribe(&self) -> watch::Receiver<FormState> {
        self.render.clone()
    }

    /// Last published state, without a round trip to the actor.
    pub fn current(&self) -> FormState {
        self.render.borrow().clone()
    }

    /// Waits until `submission` is no longer in flight, either because it
    /// resolved or because a newer submission replaced it.
    #[instrument(skip(self))]
    pub async fn wait_for_submission(&self, submission: SubmissionId) -> Result<FormState, FormError> {
        let mut render = self.render.clone();
        let state = render
            .wait_for(|state| state.in_flight() != Some(submission))
            .await
            .map_err(|_| FormError::ActorCommunicationError("Actor dropped".to_string()))?;
        Ok(state.clone())
    }

    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), FormError> {
        debug!("Sending shutdown request");
        self.sender
            .send(FormRequest::Shutdown)
            .await
            .map_err(|e| FormError::ActorCommunicationError(e.to_string()))
    }
}

client_method!(FormClient => fn field_change(name: String, value: String) -> () as FormRequest::FieldChange, Error = FormError);
client_method!(FormClient => fn checkbox_change(name: String, checked: bool) -> () as FormRequest::CheckboxChange, Error = FormError);
client_method!(FormClient => fn submit() -> SubmissionId as FormRequest::Submit, Error = FormError);
client_method!(FormClient => fn get_state() -> FormState as FormRequest::GetState, Error = FormError);
