//! The simulated profile backend: validation rules and the actor serving them.

pub mod rules;
pub mod service;

pub use rules::{validate_profile, PhoneDigitPolicy};
pub use service::ProfileService;
