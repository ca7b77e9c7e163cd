// Host-side tests for contact form validation and the simulated submission.

use folio_core::contact::{
    is_plausible_email, ContactError, ContactForm, ContactSubmission, SubmissionState,
    SUCCESS_MESSAGE,
};

fn filled() -> ContactForm {
    ContactForm {
        name: "Ada".into(),
        email: "ada@example.com".into(),
        message: "Hello there".into(),
    }
}

#[test]
fn complete_form_validates() {
    assert_eq!(filled().validate(), Ok(()));
}

#[test]
fn missing_fields_are_reported_in_order() {
    let mut f = filled();
    f.name = "  ".into();
    f.message.clear();
    assert_eq!(f.validate(), Err(ContactError::MissingField("name")));

    let mut f = filled();
    f.email.clear();
    assert_eq!(f.validate(), Err(ContactError::MissingField("email")));

    let mut f = filled();
    f.message = "\n".into();
    assert_eq!(f.validate(), Err(ContactError::MissingField("message")));
}

#[test]
fn malformed_email_is_rejected() {
    let mut f = filled();
    f.email = " nobody@localhost ".into();
    assert_eq!(
        f.validate(),
        Err(ContactError::InvalidEmail("nobody@localhost".into()))
    );
}

#[test]
fn email_plausibility() {
    assert!(is_plausible_email("a@b.co"));
    assert!(is_plausible_email("first.last@sub.example.org"));
    for bad in ["", "a", "@b.co", "a@b", "a@@b.co", "a@b..co", "a b@c.de", "a@.co"] {
        assert!(!is_plausible_email(bad), "{bad:?}");
    }
}

#[test]
fn submission_clears_form_on_completion() {
    let mut form = filled();
    let mut sub = ContactSubmission::new();
    assert_eq!(sub.state(), SubmissionState::Idle);

    sub.begin(&form).unwrap();
    assert!(sub.is_submitting());
    assert_eq!(sub.begin(&form), Err(ContactError::AlreadySubmitting));

    assert_eq!(sub.complete(&mut form), Some(SUCCESS_MESSAGE));
    assert_eq!(form, ContactForm::default());
    assert_eq!(sub.state(), SubmissionState::Sent);
    assert_eq!(sub.complete(&mut form), None);
}

#[test]
fn invalid_form_does_not_start_submitting() {
    let mut sub = ContactSubmission::new();
    let err = sub.begin(&ContactForm::default()).unwrap_err();
    assert_eq!(err.to_string(), "name is required");
    assert_eq!(sub.state(), SubmissionState::Idle);
}

#[test]
fn can_send_again_after_success() {
    let mut form = filled();
    let mut sub = ContactSubmission::new();
    sub.begin(&form).unwrap();
    sub.complete(&mut form);
    let form = filled();
    assert!(sub.begin(&form).is_ok());
}
