use std::time::Duration;
use crate::error::ConfigError;
use crate::submitter::PhoneDigitPolicy;

pub const LATENCY_ENV: &str = "PROFILE_FORM_LATENCY_MS";
pub const PHONE_POLICY_ENV: &str = "PROFILE_FORM_PHONE_DIGITS";

/// Settings for wiring up a [`ProfileFormSystem`](super::ProfileFormSystem).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormConfig {
    /// Mailbox capacity of each actor.
    pub buffer_size: usize,
    /// Simulated network delay of the profile backend.
    pub latency: Duration,
    pub phone_policy: PhoneDigitPolicy,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            buffer_size: 32,
            latency: Duration::from_millis(50),
            phone_policy: PhoneDigitPolicy::default(),
        }
    }
}

impl FormConfig {
    /// Defaults overridden by `PROFILE_FORM_LATENCY_MS` and
    /// `PROFILE_FORM_PHONE_DIGITS` when they are set.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(value) = lookup(LATENCY_ENV) {
            let millis = value.trim().parse::<u64>().map_err(|_| ConfigError::InvalidLatency {
                var: LATENCY_ENV,
                value: value.clone(),
            })?;
            config.latency = Duration::from_millis(millis);
        }
        if let Some(value) = lookup(PHONE_POLICY_ENV) {
            config.phone_policy = value.parse()?;
        }
        Ok(config)
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn with_phone_policy(mut self, phone_policy: PhoneDigitPolicy) -> Self {
        self.phone_policy = phone_policy;
        self
    }
}
