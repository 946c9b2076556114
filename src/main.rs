use tracing::{info, warn, Instrument};
use profile_form::app_system::{setup_tracing, FormConfig, ProfileFormSystem};
use profile_form::clients::FormClient;
use profile_form::form::FormState;

async fn submit_and_report(form: &FormClient) -> Result<FormState, String> {
    let submission = form.submit().await.map_err(|e| e.to_string())?;
    let state = form
        .wait_for_submission(submission)
        .instrument(tracing::info_span!("submission", %submission))
        .await
        .map_err(|e| e.to_string())?;

    match (&state.errors, state.failure()) {
        (Some(errors), _) => {
            for (path, message) in errors.iter() {
                warn!(field = path, reason = message, "Field rejected");
            }
        }
        (None, Some(reason)) => warn!(reason, "Submission failed"),
        (None, None) => info!(
            newsletter = state.draft.receive_newsletter,
            "Profile saved"
        ),
    }
    Ok(state)
}

async fn first_attempt(form: &FormClient) -> Result<FormState, String> {
    form.field_change("lastName".to_string(), "Lee".to_string()).await.map_err(|e| e.to_string())?;
    form.field_change("phoneNumber".to_string(), "1234-567".to_string()).await.map_err(|e| e.to_string())?;
    submit_and_report(form).await
}

async fn second_attempt(form: &FormClient) -> Result<FormState, String> {
    form.field_change("firstName".to_string(), "Ana".to_string()).await.map_err(|e| e.to_string())?;
    form.field_change("phoneNumber".to_string(), "12-34-5678".to_string()).await.map_err(|e| e.to_string())?;
    form.checkbox_change("receiveNewsletter".to_string(), true).await.map_err(|e| e.to_string())?;
    submit_and_report(form).await
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = FormConfig::from_env().map_err(|e| e.to_string())?;
    let system = ProfileFormSystem::new(&config);
    let form = system.form_client.clone();

    // First attempt: no first name and a short phone number.
    first_attempt(&form)
        .instrument(tracing::info_span!("first_attempt"))
        .await?;

    // Second attempt: fix both fields and opt in.
    let state = second_attempt(&form)
        .instrument(tracing::info_span!("second_attempt"))
        .await?;

    if state.errors.is_some() {
        warn!(phone_policy = %config.phone_policy, "Profile still rejected");
    }

    drop(form);
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
