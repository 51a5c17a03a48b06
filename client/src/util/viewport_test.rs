use super::*;

#[test]
fn default_viewport_is_full_hd() {
    let vp = Viewport::default();
    assert_eq!(vp.width, 1920.0);
    assert_eq!(vp.height, 1080.0);
}

#[test]
fn aspect_ratio_handles_zero_height() {
    let vp = Viewport { width: 800.0, height: 0.0 };
    assert_eq!(vp.aspect_ratio(), 800.0);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn read_window_is_none_outside_browser() {
    assert_eq!(read_window(), None);
}
