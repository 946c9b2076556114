use tokio::task::JoinHandle;
use tracing::{error, info};
use crate::clients::FormClient;
use crate::form::FormService;
use crate::submitter::ProfileService;
use super::FormConfig;

/// Starts the profile backend and the form controller and wires them together.
pub struct ProfileFormSystem {
    pub form_client: FormClient,
    form_handle: JoinHandle<()>,
    profile_handle: JoinHandle<()>,
}

impl ProfileFormSystem {
    pub fn new(config: &FormConfig) -> Self {
        info!(
            latency = ?config.latency,
            phone_policy = %config.phone_policy,
            "Starting profile form system"
        );

        let (profile_service, profile_client) =
            ProfileService::new(config.buffer_size, config.latency, config.phone_policy);
        let profile_handle = tokio::spawn(profile_service.run());

        // The form holds the only profile client, so the backend stops once
        // the form has stopped and any in-flight submissions have finished.
        let (form_service, form_client) = FormService::new(config.buffer_size, profile_client);
        let form_handle = tokio::spawn(form_service.run());

        Self {
            form_client,
            form_handle,
            profile_handle,
        }
    }

    /// Stops the form, then waits for the backend to answer whatever was
    /// still in flight and stop on its own.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down profile form system");
        self.form_client.shutdown().await.map_err(|e| e.to_string())?;
        drop(self.form_client);

        join_actor("form_service", self.form_handle).await?;
        join_actor("profile_service", self.profile_handle).await?;

        info!("Profile form system stopped");
        Ok(())
    }
}

async fn join_actor(actor: &'static str, handle: JoinHandle<()>) -> Result<(), String> {
    handle.await.map_err(|e| {
        error!(actor, error = %e, "Actor task failed");
        format!("{actor} task failed: {e}")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_with_submission_in_flight() {
        let config = FormConfig::default().with_latency(Duration::from_secs(5));
        let system = ProfileFormSystem::new(&config);
        let form = system.form_client.clone();

        form.field_change("firstName".to_string(), "Ana".to_string()).await.unwrap();
        form.submit().await.unwrap();
        assert!(form.current().is_submitting());
        drop(form);

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_shutdown_when_idle() {
        let system = ProfileFormSystem::new(&FormConfig::default().with_latency(Duration::ZERO));
        system.shutdown().await.unwrap();
    }
}
