use super::*;

#[test]
fn validate_login_input_requires_username_only() {
    assert_eq!(validate_login_input(" Driver123 ", ""), Ok("Driver123".to_owned()));
    assert_eq!(validate_login_input("Driver123", "hunter2"), Ok("Driver123".to_owned()));
    assert_eq!(validate_login_input("   ", "hunter2"), Err("Enter your username."));
}

#[test]
fn begin_marks_form_busy_once() {
    let mut form = LoginForm { username: "Driver123".to_owned(), ..LoginForm::default() };
    assert!(form.can_submit());
    assert_eq!(form.begin(), Some("Driver123".to_owned()));
    assert!(form.busy);
    assert!(!form.can_submit());
    assert_eq!(form.begin(), None);
}

#[test]
fn begin_with_blank_username_stays_idle() {
    let mut form = LoginForm::default();
    assert_eq!(form.begin(), None);
    assert!(!form.busy);
}
