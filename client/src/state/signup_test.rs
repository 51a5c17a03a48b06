use super::*;

#[test]
fn validate_signup_username_trims_and_requires_value() {
    assert_eq!(validate_signup_username("  Driver123  "), Ok("Driver123".to_owned()));
    assert_eq!(validate_signup_username(""), Err("Enter a username first."));
    assert_eq!(validate_signup_username(" \t\n "), Err("Enter a username first."));
}

#[test]
fn form_can_submit_only_with_username() {
    let mut form = SignupForm::default();
    assert!(!form.can_submit());

    form.email = "driver@roadsense.com".to_owned();
    form.password = "secret".to_owned();
    assert!(!form.can_submit());

    form.username = "   ".to_owned();
    assert!(!form.can_submit());

    form.username = "Driver123".to_owned();
    assert!(form.can_submit());
}

#[test]
fn begin_moves_idle_to_loading_with_trimmed_username() {
    let mut phase = SignupPhase::default();
    assert_eq!(phase.begin("  Driver123 "), Some("Driver123".to_owned()));
    assert_eq!(phase, SignupPhase::Loading);
}

#[test]
fn begin_with_blank_username_never_enters_loading() {
    for raw in ["", " ", "\t", "   \n"] {
        let mut phase = SignupPhase::Idle;
        assert_eq!(phase.begin(raw), None);
        assert_eq!(phase, SignupPhase::Idle);
    }
}

#[test]
fn begin_is_ignored_while_loading_or_after_success() {
    let mut phase = SignupPhase::Loading;
    assert_eq!(phase.begin("Driver123"), None);
    assert_eq!(phase, SignupPhase::Loading);

    let mut phase = SignupPhase::Success { username: "Driver123".to_owned() };
    assert_eq!(phase.begin("Other"), None);
    assert!(phase.is_success());
}

#[test]
fn begin_then_complete_reaches_success() {
    let mut phase = SignupPhase::Idle;
    let username = phase.begin("Driver123").unwrap();
    assert!(phase.is_loading());

    phase.complete(username);
    assert_eq!(phase, SignupPhase::Success { username: "Driver123".to_owned() });
    assert!(!phase.is_loading());
}

#[test]
fn complete_without_loading_is_noop() {
    let mut phase = SignupPhase::Idle;
    phase.complete("Driver123".to_owned());
    assert_eq!(phase, SignupPhase::Idle);
}

#[test]
fn simulated_delay_is_eight_hundred_millis() {
    assert_eq!(SIMULATED_SIGNUP_DELAY.as_millis(), 800);
}
