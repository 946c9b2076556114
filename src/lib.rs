//! # Profile Form
//!
//! The non-presentational core of a profile form: first name, last name,
//! phone number and a newsletter opt-in, validated round trip against a
//! simulated backend.
//!
//! - **Form controller** → [`form::FormService`] owns the draft and the last
//!   error map. Every transition goes through the pure [`form::reduce`].
//! - **Profile backend** → [`submitter::ProfileService`] validates a snapshot
//!   after a simulated delay with [`submitter::validate_profile`].
//! - **Clients** → [`clients::FormClient`] is what a UI binding talks to;
//!   it also exposes a watch channel that fires after every state change.
//! - **System** → [`app_system::ProfileFormSystem`] starts and stops both
//!   actors from a [`app_system::FormConfig`].
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! use profile_form::app_system::{FormConfig, ProfileFormSystem};
//!
//! let system = ProfileFormSystem::new(&FormConfig::default());
//! let form = system.form_client.clone();
//!
//! form.field_change("firstName".to_string(), "Ana".to_string()).await?;
//! let submission = form.submit().await?;
//! let state = form.wait_for_submission(submission).await?;
//! assert_eq!(state.error_for("lastName"), Some("Missing last name!"));
//!
//! drop(form);
//! system.shutdown().await?;
//! # Ok(())
//! # }
//! ```

pub mod domain;
pub mod error;
pub mod messages;

pub mod clients;
pub mod form;
pub mod submitter;

pub mod app_system;

#[cfg(test)]
mod mock_framework;
