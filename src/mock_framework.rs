//! # Mock Framework
//!
//! Utilities for testing the form controller without a real profile backend.
//!
//! Use [`create_mock_profile_client`] to get a client and a receiver, then
//! [`expect_submit`] to take the next request and answer it whenever the test
//! is ready. Holding the responder keeps the submission in flight.

use tokio::sync::{mpsc, oneshot};
use crate::clients::ProfileClient;
use crate::domain::{ProfileDraft, SubmissionResult};
use crate::error::SubmitError;
use crate::messages::SubmitRequest;

pub type SubmitResponder = oneshot::Sender<Result<SubmissionResult, SubmitError>>;

/// Creates a profile client whose requests land on a receiver the test owns.
pub fn create_mock_profile_client(buffer_size: usize) -> (ProfileClient, mpsc::Receiver<SubmitRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ProfileClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Submit request
pub async fn expect_submit(receiver: &mut mpsc::Receiver<SubmitRequest>) -> Option<(ProfileDraft, SubmitResponder)> {
    match receiver.recv().await {
        Some(SubmitRequest::Submit { profile, respond_to }) => Some((profile, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_profile_client(10);

        let submit_task = tokio::spawn(async move {
            client.submit_profile(ProfileDraft::new("Ana", "Lee", "12345678", false)).await
        });

        let (profile, responder) = expect_submit(&mut receiver).await.expect("Expected Submit request");
        assert_eq!(profile.first_name, "Ana");
        let accepted = SubmissionResult::Accepted { profile };
        responder.send(Ok(accepted.clone())).unwrap();

        let result = submit_task.await.unwrap();
        assert_eq!(result, Ok(accepted));
    }

    #[tokio::test]
    async fn test_dropped_responder_is_a_communication_error() {
        let (client, mut receiver) = create_mock_profile_client(10);

        let submit_task = tokio::spawn(async move {
            client.submit_profile(ProfileDraft::default()).await
        });

        let (_, responder) = expect_submit(&mut receiver).await.expect("Expected Submit request");
        drop(responder);

        let result = submit_task.await.unwrap();
        assert_eq!(
            result,
            Err(SubmitError::ActorCommunicationError("Actor dropped".to_string()))
        );
    }
}
