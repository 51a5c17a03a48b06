use super::*;

#[test]
fn reveals_driver123_one_character_at_a_time() {
    let mut tw = Typewriter::new("Driver123");
    assert_eq!(tw.visible(), "");

    let mut frames = Vec::new();
    while let Some(prefix) = tw.advance() {
        frames.push(prefix.to_owned());
    }

    assert_eq!(
        frames,
        ["D", "Dr", "Dri", "Driv", "Drive", "Driver", "Driver1", "Driver12", "Driver123"]
    );
    assert!(tw.is_done());
    assert_eq!(tw.visible(), "Driver123");
    assert_eq!(tw.advance(), None);
}

#[test]
fn respects_multibyte_boundaries() {
    let mut tw = Typewriter::new("José");
    assert_eq!(tw.advance(), Some("J"));
    assert_eq!(tw.advance(), Some("Jo"));
    assert_eq!(tw.advance(), Some("Jos"));
    assert_eq!(tw.advance(), Some("José"));
    assert_eq!(tw.advance(), None);
}

#[test]
fn empty_text_is_done_immediately() {
    let mut tw = Typewriter::new("");
    assert!(tw.is_done());
    assert_eq!(tw.advance(), None);
}

#[test]
fn first_character_uses_start_delay() {
    assert_eq!(Typewriter::delay_before(0), REVEAL_START_DELAY);
    assert_eq!(Typewriter::delay_before(1), REVEAL_STEP_DELAY);
    assert_eq!(Typewriter::delay_before(8), REVEAL_STEP_DELAY);
    assert_eq!(REVEAL_START_DELAY.as_millis(), 50);
    assert_eq!(REVEAL_STEP_DELAY.as_millis(), 120);
}
