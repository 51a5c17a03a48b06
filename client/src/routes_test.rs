use super::*;

#[test]
fn every_route_resolves_from_its_own_path() {
    for route in AppRoute::ALL {
        assert_eq!(AppRoute::from_path(route.path()), Some(route));
    }
}

#[test]
fn paths_are_distinct() {
    for (i, a) in AppRoute::ALL.iter().enumerate() {
        for (j, b) in AppRoute::ALL.iter().enumerate() {
            if i != j {
                assert_ne!(a.path(), b.path());
            }
        }
    }
}

#[test]
fn trailing_slash_is_tolerated() {
    assert_eq!(AppRoute::from_path("/login/"), Some(AppRoute::Login));
    assert_eq!(AppRoute::from_path("/dashboard/"), Some(AppRoute::Dashboard));
    assert_eq!(AppRoute::from_path("/"), Some(AppRoute::Landing));
}

#[test]
fn unknown_paths_have_no_route() {
    assert_eq!(AppRoute::from_path("/admin"), None);
    assert_eq!(AppRoute::from_path("/dashboard/reports"), None);
    assert_eq!(AppRoute::from_path(""), None);
}
