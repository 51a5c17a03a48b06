use super::*;

#[test]
fn default_glow_is_hidden_at_origin() {
    let glow = PointerGlow::default();
    assert!(!glow.hovering);
    assert_eq!(glow.centered_transform(250.0), "translate(-250px, -250px)");
}

#[test]
fn centered_transform_offsets_by_radius() {
    let glow = PointerGlow { x: 300.0, y: 120.5, hovering: true };
    assert_eq!(glow.centered_transform(250.0), "translate(50px, -129.5px)");
}

#[test]
fn edge_gradient_follows_x() {
    let glow = PointerGlow { x: 42.0, y: 0.0, hovering: true };
    assert_eq!(
        glow.edge_gradient(2.0),
        "radial-gradient(30px circle at 42px 2px, rgba(45, 212, 191, 1) 0%, transparent 70%)"
    );
}
