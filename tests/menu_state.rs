//! Tests for the paginated menu state machine.

use bursar_bot::ui::menu::{action_for, ListMenu, MenuAction, MenuError, MenuState};
use bursar_bot::ui::style;

fn entries(n: usize) -> Vec<String> {
    (1..=n).map(|i| format!("entry {i}")).collect()
}

fn menu(n: usize, page_size: usize) -> ListMenu {
    ListMenu::new(entries(n), page_size).expect("valid menu")
}

#[test]
fn twenty_five_items_make_three_pages() {
    let mut m = menu(25, 10);
    assert_eq!(m.max_page(), 2);
    assert_eq!(m.page_window(), (0, 10));
    assert!(m.apply(MenuAction::Next));
    assert_eq!(m.page_window(), (10, 20));
    assert!(m.apply(MenuAction::Next));
    assert_eq!(m.page_window(), (20, 25));
    assert_eq!(m.page_rows().len(), 5);
}

#[test]
fn exact_multiple_has_no_phantom_page() {
    let mut m = menu(20, 10);
    assert_eq!(m.max_page(), 1);
    assert!(m.apply(MenuAction::Last));
    assert_eq!(m.page_window(), (10, 20));
}

#[test]
fn next_is_a_noop_on_the_last_page() {
    let mut m = menu(25, 10);
    assert!(m.apply(MenuAction::Last));
    assert_eq!(m.page(), Some(2));
    assert!(!m.apply(MenuAction::Next));
    assert_eq!(m.page(), Some(2));
}

#[test]
fn previous_is_a_noop_on_the_first_page() {
    let mut m = menu(25, 10);
    assert!(!m.apply(MenuAction::Previous));
    assert_eq!(m.page(), Some(0));
}

#[test]
fn first_and_last_jump_to_the_boundaries() {
    let mut m = menu(45, 10);
    assert!(m.apply(MenuAction::Last));
    assert_eq!(m.page(), Some(4));
    assert!(m.apply(MenuAction::First));
    assert_eq!(m.page(), Some(0));
    // Jumping to where we already are changes nothing.
    assert!(!m.apply(MenuAction::First));
}

#[test]
fn stop_is_terminal() {
    let mut m = menu(25, 10);
    assert!(m.apply(MenuAction::Stop));
    assert_eq!(m.state(), MenuState::Stopped);
    assert_eq!(m.page(), None);
    for action in [
        MenuAction::First,
        MenuAction::Previous,
        MenuAction::Next,
        MenuAction::Last,
        MenuAction::Stop,
    ] {
        assert!(!m.apply(action));
        assert_eq!(m.state(), MenuState::Stopped);
    }
}

#[test]
fn page_stays_in_bounds_after_any_sequence() {
    let mut m = menu(37, 10);
    let walk = [
        MenuAction::Next,
        MenuAction::Next,
        MenuAction::Next,
        MenuAction::Next,
        MenuAction::Next,
        MenuAction::Previous,
        MenuAction::Last,
        MenuAction::Next,
        MenuAction::First,
        MenuAction::Previous,
        MenuAction::Last,
        MenuAction::Previous,
    ];
    for action in walk {
        m.apply(action);
        let page = m.page().expect("still active");
        assert!(page <= m.max_page());
    }
}

#[test]
fn row_labels_are_stable_across_pages() {
    let mut m = menu(25, 10);
    let first_page = m.page_rows();
    assert!(first_page[0].starts_with("`[1]`"));
    assert!(first_page[9].starts_with("`[10]`"));
    m.apply(MenuAction::Next);
    let second_page = m.page_rows();
    assert!(second_page[0].starts_with("`[11]`"));
    m.apply(MenuAction::Last);
    let third_page = m.page_rows();
    assert!(third_page[4].starts_with("`[25]`"));
}

#[test]
fn single_page_menu_never_moves() {
    let mut m = menu(5, 10);
    assert_eq!(m.max_page(), 0);
    assert!(!m.apply(MenuAction::Next));
    assert!(!m.apply(MenuAction::Last));
    assert_eq!(m.page(), Some(0));
}

#[test]
fn empty_list_is_rejected() {
    assert_eq!(
        ListMenu::new(Vec::new(), 10).unwrap_err(),
        MenuError::EmptyList
    );
}

#[test]
fn zero_page_size_is_rejected() {
    assert_eq!(
        ListMenu::new(entries(3), 0).unwrap_err(),
        MenuError::ZeroPageSize
    );
}

#[test]
fn navigation_emojis_map_to_actions() {
    assert_eq!(
        action_for(&style::unicode(style::EMOJI_FIRST)),
        Some(MenuAction::First)
    );
    assert_eq!(
        action_for(&style::unicode(style::EMOJI_PREVIOUS)),
        Some(MenuAction::Previous)
    );
    assert_eq!(
        action_for(&style::unicode(style::EMOJI_NEXT)),
        Some(MenuAction::Next)
    );
    assert_eq!(
        action_for(&style::unicode(style::EMOJI_LAST)),
        Some(MenuAction::Last)
    );
    assert_eq!(
        action_for(&style::unicode(style::EMOJI_STOP)),
        Some(MenuAction::Stop)
    );
    assert_eq!(action_for(&style::unicode("🎉")), None);
}
