use std::fmt;
use std::str::FromStr;

use crate::domain::{ProfileDraft, SubmissionResult, TextField, ValidationError};
use crate::error::ConfigError;

pub const MISSING_FIRST_NAME: &str = "Missing first name!";
pub const MISSING_LAST_NAME: &str = "Missing last name!";
pub const MISSING_PHONE_NUMBER: &str = "Missing phone number!";
pub const PHONE_NUMBER_LENGTH: &str = "Phone number must be 8 digits";

pub const PHONE_DIGITS: usize = 8;

/// How non-digit characters are removed before counting phone digits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PhoneDigitPolicy {
    /// Drop every non-digit character.
    #[default]
    StripAll,
    /// Drop only the first non-digit UTF-16 unit and count the units left,
    /// the way the legacy form measured the string.
    StripFirst,
}

impl PhoneDigitPolicy {
    /// Length of `phone` once the policy has removed non-digits.
    pub fn digit_count(self, phone: &str) -> usize {
        match self {
            Self::StripAll => phone.chars().filter(char::is_ascii_digit).count(),
            Self::StripFirst => {
                let total = phone.encode_utf16().count();
                if phone.chars().any(|c| !c.is_ascii_digit()) {
                    total - 1
                } else {
                    total
                }
            }
        }
    }
}

impl FromStr for PhoneDigitPolicy {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "strip-all" => Ok(Self::StripAll),
            "strip-first" => Ok(Self::StripFirst),
            other => Err(ConfigError::UnknownPhonePolicy(other.to_string())),
        }
    }
}

impl fmt::Display for PhoneDigitPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StripAll => f.write_str("strip-all"),
            Self::StripFirst => f.write_str("strip-first"),
        }
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Runs every profile check and collects the failures in field order.
///
/// None of the checks short-circuits another; the phone length check only
/// runs when a phone number is present at all.
pub fn validate_profile(profile: ProfileDraft, policy: PhoneDigitPolicy) -> SubmissionResult {
    let mut errors = Vec::new();

    if is_blank(&profile.first_name) {
        errors.push(ValidationError::new(TextField::FirstName.path(), MISSING_FIRST_NAME));
    }
    if is_blank(&profile.last_name) {
        errors.push(ValidationError::new(TextField::LastName.path(), MISSING_LAST_NAME));
    }
    if is_blank(&profile.phone_number) {
        errors.push(ValidationError::new(TextField::PhoneNumber.path(), MISSING_PHONE_NUMBER));
    } else if policy.digit_count(&profile.phone_number) != PHONE_DIGITS {
        errors.push(ValidationError::new(TextField::PhoneNumber.path(), PHONE_NUMBER_LENGTH));
    }

    if errors.is_empty() {
        SubmissionResult::Accepted { profile }
    } else {
        SubmissionResult::Rejected { errors }
    }
}
