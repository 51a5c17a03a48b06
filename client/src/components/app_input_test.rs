use super::*;

#[test]
fn text_and_email_ignore_reveal_flag() {
    assert_eq!(InputKind::Text.html_type(false), "text");
    assert_eq!(InputKind::Text.html_type(true), "text");
    assert_eq!(InputKind::Email.html_type(false), "email");
    assert_eq!(InputKind::Email.html_type(true), "email");
}

#[test]
fn password_type_follows_reveal_flag() {
    assert_eq!(InputKind::Password.html_type(false), "password");
    assert_eq!(InputKind::Password.html_type(true), "text");
}

#[test]
fn default_kind_is_text() {
    assert_eq!(InputKind::default(), InputKind::Text);
}
