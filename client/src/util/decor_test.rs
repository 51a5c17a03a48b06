use super::*;

#[test]
fn first_floating_path_matches_reference_geometry() {
    assert_eq!(
        floating_path(0, 1),
        "M-380 -189C-380 -189 -312 216 152 343C616 470 684 875 684 875"
    );
}

#[test]
fn position_mirrors_horizontal_shift() {
    assert_eq!(
        floating_path(2, 1),
        "M-370 -201C-370 -201 -302 204 142 331C606 458 674 863 674 863"
    );
    assert_eq!(
        floating_path(2, -1),
        "M-390 -201C-390 -201 -322 204 162 331C626 458 694 863 694 863"
    );
}

#[test]
fn floating_paths_builds_full_family() {
    let paths = floating_paths(1);
    assert_eq!(paths.len(), FLOATING_PATH_COUNT);
    assert_eq!(paths[0].id, 0);
    assert!((paths[0].stroke_width - 0.5).abs() < 1e-9);
    assert!((paths[10].stroke_opacity - 0.4).abs() < 1e-9);
    assert!(paths.iter().all(|p| (20..30).contains(&p.duration_secs)));
}

#[test]
fn mesh_background_tracks_viewport_size() {
    let mesh = MeshBackground::for_viewport(Viewport { width: 1280.0, height: 720.0 });
    assert_eq!(mesh.width, 1280);
    assert_eq!(mesh.height, 720);
    assert_eq!(mesh.focus_x, 58);

    let narrow = MeshBackground::for_viewport(Viewport { width: 400.0, height: 800.0 });
    assert!(narrow.spread_x > mesh.spread_x);
}

#[test]
fn mesh_background_style_includes_size_and_palette() {
    let style = MeshBackground::for_viewport(Viewport::default()).style();
    assert!(style.starts_with("width: 1920px; height: 1080px;"));
    assert!(style.contains("background-color: #0f172a"));
    for color in &MESH_COLORS[1..] {
        assert!(style.contains(color), "missing {color}");
    }
}

#[test]
fn mesh_background_clamps_degenerate_viewport() {
    let mesh = MeshBackground::for_viewport(Viewport { width: 0.0, height: 0.0 });
    assert_eq!(mesh.width, 0);
    assert_eq!(mesh.height, 0);
}
