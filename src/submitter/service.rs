use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};
use crate::clients::ProfileClient;
use crate::domain::{ProfileDraft, SubmissionResult};
use crate::error::SubmitError;
use crate::messages::{ServiceResponse, SubmitRequest};
use super::rules::{validate_profile, PhoneDigitPolicy};

/// Simulated profile backend. Validates and "persists" whatever it is sent
/// after an artificial network delay.
pub struct ProfileService {
    receiver: mpsc::Receiver<SubmitRequest>,
    latency: Duration,
    phone_policy: PhoneDigitPolicy,
}

impl ProfileService {
    pub fn new(buffer_size: usize, latency: Duration, phone_policy: PhoneDigitPolicy) -> (Self, ProfileClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self {
            receiver,
            latency,
            phone_policy,
        };
        let client = ProfileClient::new(sender);
        (service, client)
    }

    #[instrument(name = "profile_service", skip(self), fields(phone_policy = %self.phone_policy))]
    pub async fn run(mut self) {
        info!("ProfileService starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                SubmitRequest::Submit { profile, respond_to } => {
                    self.handle_submit(profile, respond_to).await;
                }
                SubmitRequest::Shutdown => {
                    info!("ProfileService shutting down");
                    break;
                }
            }
        }
        info!("ProfileService stopped");
    }

    // Profile contents are user data and stay out of the span.
    #[instrument(skip(self, profile, respond_to))]
    async fn handle_submit(
        &self,
        profile: ProfileDraft,
        respond_to: ServiceResponse<SubmissionResult, SubmitError>,
    ) {
        debug!("Processing submit request");
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let result = validate_profile(profile, self.phone_policy);
        match &result {
            SubmissionResult::Accepted { .. } => info!("Profile accepted"),
            SubmissionResult::Rejected { errors } => {
                info!(error_count = errors.len(), "Profile rejected")
            }
        }

        let _ = respond_to.send(Ok(result));
    }
}
