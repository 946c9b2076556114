use tokio::sync::{mpsc, watch};
use tracing::{debug, info, instrument, warn, Instrument};
use crate::clients::{FormClient, ProfileClient};
use crate::domain::{CheckboxField, SubmissionId, SubmissionResult, TextField};
use crate::error::{FormError, SubmitError};
use crate::messages::{FormRequest, ServiceResponse};
use super::reducer::{reduce, FormEvent};
use super::state::FormState;

/// Form controller actor. Owns the draft and error state; every change goes
/// through [`reduce`] and is then published to subscribers.
pub struct FormService {
    receiver: mpsc::Receiver<FormRequest>,
    // Weak so that dropping every FormClient still stops the loop.
    mailbox: mpsc::WeakSender<FormRequest>,
    profile_client: ProfileClient,
    state: FormState,
    render: watch::Sender<FormState>,
}

impl FormService {
    pub fn new(buffer_size: usize, profile_client: ProfileClient) -> (Self, FormClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let (render, render_rx) = watch::channel(FormState::default());
        let service = Self {
            receiver,
            mailbox: sender.downgrade(),
            profile_client,
            state: FormState::default(),
            render,
        };
        let client = FormClient::new(sender, render_rx);
        (service, client)
    }

    #[instrument(name = "form_service", skip(self))]
    pub async fn run(mut self) {
        info!("FormService starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                FormRequest::FieldChange { name, value, respond_to } => {
                    self.handle_field_change(name, value, respond_to);
                }
                FormRequest::CheckboxChange { name, checked, respond_to } => {
                    self.handle_checkbox_change(name, checked, respond_to);
                }
                FormRequest::Submit { respond_to } => {
                    self.handle_submit(respond_to);
                }
                FormRequest::GetState { respond_to } => {
                    let _ = respond_to.send(Ok(self.state.clone()));
                }
                FormRequest::Resolve { submission, outcome } => {
                    self.handle_resolve(submission, outcome);
                }
                FormRequest::Shutdown => {
                    info!("FormService shutting down");
                    break;
                }
            }
        }
        info!("FormService stopped");
    }

    fn apply(&mut self, event: FormEvent) {
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, event);
        self.render.send_replace(self.state.clone());
    }

    // Typed values are user data, only the field name is recorded.
    #[instrument(fields(field = %name), skip(self, name, value, respond_to))]
    fn handle_field_change(
        &mut self,
        name: String,
        value: String,
        respond_to: ServiceResponse<(), FormError>,
    ) {
        let result = name.parse::<TextField>().map(|field| {
            self.apply(FormEvent::FieldChanged { field, value });
        });
        if let Err(e) = &result {
            warn!(error = %e, "Rejected field change");
        }
        let _ = respond_to.send(result);
    }

    #[instrument(fields(field = %name), skip(self, name, respond_to))]
    fn handle_checkbox_change(
        &mut self,
        name: String,
        checked: bool,
        respond_to: ServiceResponse<(), FormError>,
    ) {
        let result = name.parse::<CheckboxField>().map(|field| {
            self.apply(FormEvent::CheckboxChanged { field, checked });
        });
        if let Err(e) = &result {
            warn!(error = %e, "Rejected checkbox change");
        }
        let _ = respond_to.send(result);
    }

    /// Freezes the draft, clears errors and hands the snapshot to a
    /// background task. The loop keeps serving edits while it runs; the
    /// outcome comes back through the mailbox as [`FormRequest::Resolve`].
    #[instrument(skip(self, respond_to))]
    fn handle_submit(&mut self, respond_to: ServiceResponse<SubmissionId, FormError>) {
        let snapshot = self.state.draft.clone();
        self.apply(FormEvent::SubmitStarted);
        let Some(submission) = self.state.in_flight() else {
            let _ = respond_to.send(Err(FormError::ActorCommunicationError(
                "Submission did not start".to_string(),
            )));
            return;
        };
        info!(%submission, "Submission started");

        match self.mailbox.upgrade() {
            Some(mailbox) => {
                let profile_client = self.profile_client.clone();
                tokio::spawn(
                    async move {
                        let outcome = profile_client.submit_profile(snapshot).await;
                        if mailbox.send(FormRequest::Resolve { submission, outcome }).await.is_err() {
                            debug!("Form closed before the submission resolved");
                        }
                    }
                    .instrument(tracing::info_span!("submission", %submission)),
                );
            }
            None => {
                warn!("No clients left to deliver the result");
                self.apply(FormEvent::SubmissionFailed {
                    submission,
                    reason: "Form closed".to_string(),
                });
            }
        }

        let _ = respond_to.send(Ok(submission));
    }

    #[instrument(skip(self, outcome))]
    fn handle_resolve(
        &mut self,
        submission: SubmissionId,
        outcome: Result<SubmissionResult, SubmitError>,
    ) {
        if self.state.in_flight() != Some(submission) {
            debug!(%submission, "Ignoring result of superseded submission");
            return;
        }

        match outcome {
            Ok(result) => {
                match &result {
                    SubmissionResult::Accepted { .. } => info!("Profile confirmed"),
                    SubmissionResult::Rejected { errors } => {
                        info!(error_count = errors.len(), "Profile rejected")
                    }
                }
                self.apply(FormEvent::SubmissionResolved { submission, result });
            }
            Err(e) => {
                warn!(error = %e, "Submission failed");
                self.apply(FormEvent::SubmissionFailed {
                    submission,
                    reason: e.to_string(),
                });
            }
        }
    }
}
