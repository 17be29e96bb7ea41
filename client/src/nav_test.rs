use super::*;

#[test]
fn drawer_starts_closed() {
    let mut state = DrawerState::default();
    assert!(!state.close());
}

#[test]
fn toggle_flips_state() {
    let mut state = DrawerState::default();
    assert!(state.toggle());
    assert!(!state.toggle());
    assert_eq!(state, DrawerState::default());
}

#[test]
fn close_reports_change_only_when_open() {
    let mut state = DrawerState::default();
    assert!(!state.close());

    state.toggle();
    assert!(state.close());
    assert!(!state.close());
    assert!(state.toggle());
}

#[test]
fn open_and_closed_styles_touch_the_same_properties() {
    let open: Vec<(Part, &str)> = styles(true).iter().map(|(p, prop, _)| (*p, *prop)).collect();
    let closed: Vec<(Part, &str)> = styles(false).iter().map(|(p, prop, _)| (*p, *prop)).collect();
    assert_eq!(open, closed);
}

#[test]
fn open_styles_reveal_links() {
    assert!(styles(true).contains(&(Part::Links, "visibility", "visible")));
    assert!(styles(false).contains(&(Part::Links, "visibility", "hidden")));
    assert!(styles(false).contains(&(Part::Layer, "transform", "scaleY(0)")));
}

#[test]
fn every_part_gets_a_will_change_hint() {
    for part in [Part::TopLine, Part::BottomLine, Part::Layer, Part::Links] {
        assert!(WILL_CHANGE.iter().any(|(p, _)| *p == part));
    }
}
