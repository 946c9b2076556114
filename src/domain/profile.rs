use std::fmt;
use std::str::FromStr;

use crate::error::FormError;

/// The profile fields as the user is typing them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileDraft {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub receive_newsletter: bool,
}

impl ProfileDraft {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone_number: impl Into<String>,
        receive_newsletter: bool,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            phone_number: phone_number.into(),
            receive_newsletter,
        }
    }

    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::FirstName => &self.first_name,
            TextField::LastName => &self.last_name,
            TextField::PhoneNumber => &self.phone_number,
        }
    }
}

/// Text inputs of the form, addressed by their path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextField {
    FirstName,
    LastName,
    PhoneNumber,
}

impl TextField {
    pub const ALL: [TextField; 3] = [Self::FirstName, Self::LastName, Self::PhoneNumber];

    pub fn path(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::PhoneNumber => "phoneNumber",
        }
    }
}

impl FromStr for TextField {
    type Err = FormError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.path() == name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))
    }
}

impl fmt::Display for TextField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Checkbox inputs of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckboxField {
    ReceiveNewsletter,
}

impl CheckboxField {
    pub fn path(self) -> &'static str {
        match self {
            Self::ReceiveNewsletter => "receiveNewsletter",
        }
    }
}

impl FromStr for CheckboxField {
    type Err = FormError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "receiveNewsletter" => Ok(Self::ReceiveNewsletter),
            other => Err(FormError::UnknownField(other.to_string())),
        }
    }
}

impl fmt::Display for CheckboxField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_fields_parse_from_their_paths() {
        for field in TextField::ALL {
            assert_eq!(field.path().parse::<TextField>().unwrap(), field);
        }
        assert_eq!(
            "receiveNewsletter".parse::<CheckboxField>().unwrap(),
            CheckboxField::ReceiveNewsletter
        );
    }

    #[test]
    fn unknown_paths_are_rejected() {
        assert_eq!(
            "first_name".parse::<TextField>(),
            Err(FormError::UnknownField("first_name".to_string()))
        );
        // Text and checkbox names do not overlap.
        assert!("receiveNewsletter".parse::<TextField>().is_err());
        assert!("firstName".parse::<CheckboxField>().is_err());
    }

    #[test]
    fn default_draft_is_empty() {
        let draft = ProfileDraft::default();
        assert_eq!(draft.text(TextField::FirstName), "");
        assert_eq!(draft.text(TextField::PhoneNumber), "");
        assert!(!draft.receive_newsletter);
    }
}
