//! Pure state transitions for the profile form.
//!
//! [`reduce`] never performs I/O; the form actor feeds it events and acts on
//! the state it returns. Each next state is assembled field by field.

use crate::domain::{
    CheckboxField, ErrorMap, ProfileDraft, SubmissionId, SubmissionResult, TextField,
};
use super::state::{FormState, Phase};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    FieldChanged { field: TextField, value: String },
    CheckboxChanged { field: CheckboxField, checked: bool },
    SubmitStarted,
    SubmissionResolved { submission: SubmissionId, result: SubmissionResult },
    SubmissionFailed { submission: SubmissionId, reason: String },
}

pub fn reduce(state: FormState, event: FormEvent) -> FormState {
    match event {
        FormEvent::FieldChanged { field, value } => FormState {
            draft: with_text(state.draft, field, value),
            errors: state.errors,
            phase: state.phase,
            last_submission: state.last_submission,
        },
        FormEvent::CheckboxChanged { field, checked } => FormState {
            draft: with_checkbox(state.draft, field, checked),
            errors: state.errors,
            phase: state.phase,
            last_submission: state.last_submission,
        },
        FormEvent::SubmitStarted => {
            let submission = next_submission(state.last_submission);
            FormState {
                draft: state.draft,
                errors: None,
                phase: Phase::Submitting(submission),
                last_submission: Some(submission),
            }
        }
        FormEvent::SubmissionResolved { submission, result } => {
            if state.in_flight() != Some(submission) {
                return state;
            }
            match result {
                SubmissionResult::Rejected { errors } => FormState {
                    draft: state.draft,
                    errors: Some(ErrorMap::from_errors(&errors)),
                    phase: Phase::Idle,
                    last_submission: state.last_submission,
                },
                SubmissionResult::Accepted { profile } => FormState {
                    draft: confirmed(profile),
                    errors: None,
                    phase: Phase::Idle,
                    last_submission: state.last_submission,
                },
            }
        }
        FormEvent::SubmissionFailed { submission, reason } => {
            if state.in_flight() != Some(submission) {
                return state;
            }
            FormState {
                draft: state.draft,
                errors: None,
                phase: Phase::Failed { reason },
                last_submission: state.last_submission,
            }
        }
    }
}

fn next_submission(last: Option<SubmissionId>) -> SubmissionId {
    SubmissionId(last.map_or(1, |SubmissionId(n)| n + 1))
}

fn with_text(draft: ProfileDraft, field: TextField, value: String) -> ProfileDraft {
    let ProfileDraft { first_name, last_name, phone_number, receive_newsletter } = draft;
    match field {
        TextField::FirstName => ProfileDraft { first_name: value, last_name, phone_number, receive_newsletter },
        TextField::LastName => ProfileDraft { first_name, last_name: value, phone_number, receive_newsletter },
        TextField::PhoneNumber => ProfileDraft { first_name, last_name, phone_number: value, receive_newsletter },
    }
}

fn with_checkbox(draft: ProfileDraft, field: CheckboxField, checked: bool) -> ProfileDraft {
    let ProfileDraft { first_name, last_name, phone_number, .. } = draft;
    match field {
        CheckboxField::ReceiveNewsletter => ProfileDraft {
            first_name,
            last_name,
            phone_number,
            receive_newsletter: checked,
        },
    }
}

// Server-confirmed values replace the local draft wholesale.
fn confirmed(profile: ProfileDraft) -> ProfileDraft {
    ProfileDraft {
        first_name: profile.first_name,
        last_name: profile.last_name,
        phone_number: profile.phone_number,
        receive_newsletter: profile.receive_newsletter,
    }
}


#[cfg(test)]
mod properties {
    use proptest::prelude::*;

    use super::*;
    use crate::domain::ValidationError;

    fn arb_draft() -> impl Strategy<Value = ProfileDraft> {
        (any::<String>(), any::<String>(), "[0-9 -]{0,12}", any::<bool>())
            .prop_map(|(first, last, phone, newsletter)| ProfileDraft::new(first, last, phone, newsletter))
    }

    fn arb_errors() -> impl Strategy<Value = Option<ErrorMap>> {
        proptest::option::of(
            proptest::collection::vec(
                ("(firstName|lastName|phoneNumber)", "[A-Za-z !]{1,20}"),
                0..4,
            )
            .prop_map(|pairs| {
                let errors: Vec<ValidationError> = pairs
                    .into_iter()
                    .map(|(path, message)| ValidationError::new(path, message))
                    .collect();
                ErrorMap::from_errors(&errors)
            }),
        )
    }

    fn arb_phase() -> impl Strategy<Value = Phase> {
        prop_oneof![
            Just(Phase::Idle),
            (1u64..100).prop_map(|n| Phase::Submitting(SubmissionId(n))),
            "[a-z ]{1,20}".prop_map(|reason| Phase::Failed { reason }),
        ]
    }

    fn arb_state() -> impl Strategy<Value = FormState> {
        (arb_draft(), arb_errors(), arb_phase()).prop_map(|(draft, errors, phase)| {
            let last_submission = match phase {
                Phase::Submitting(id) => Some(id),
                _ => None,
            };
            FormState { draft, errors, phase, last_submission }
        })
    }

    fn arb_input_event() -> impl Strategy<Value = FormEvent> {
        prop_oneof![
            (
                prop_oneof![
                    Just(TextField::FirstName),
                    Just(TextField::LastName),
                    Just(TextField::PhoneNumber),
                ],
                any::<String>(),
            )
                .prop_map(|(field, value)| FormEvent::FieldChanged { field, value }),
            any::<bool>().prop_map(|checked| FormEvent::CheckboxChanged {
                field: CheckboxField::ReceiveNewsletter,
                checked,
            }),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        /// Input events only ever touch the draft.
        #[test]
        fn prop_input_events_leave_errors_and_phase_alone(
            state in arb_state(),
            event in arb_input_event(),
        ) {
            let next = reduce(state.clone(), event);

            prop_assert_eq!(&next.errors, &state.errors);
            prop_assert_eq!(&next.phase, &state.phase);
            prop_assert_eq!(next.last_submission, state.last_submission);
        }

        /// Input events change exactly the field they name.
        #[test]
        fn prop_input_events_change_only_their_field(
            state in arb_state(),
            event in arb_input_event(),
        ) {
            let next = reduce(state.clone(), event.clone());

            match event {
                FormEvent::FieldChanged { field, value } => {
                    for other in TextField::ALL {
                        if other == field {
                            prop_assert_eq!(next.draft.text(other), value.as_str());
                        } else {
                            prop_assert_eq!(next.draft.text(other), state.draft.text(other));
                        }
                    }
                    prop_assert_eq!(next.draft.receive_newsletter, state.draft.receive_newsletter);
                }
                FormEvent::CheckboxChanged { checked, .. } => {
                    prop_assert_eq!(next.draft.receive_newsletter, checked);
                    for field in TextField::ALL {
                        prop_assert_eq!(next.draft.text(field), state.draft.text(field));
                    }
                }
                _ => {}
            }
        }
    }
}
