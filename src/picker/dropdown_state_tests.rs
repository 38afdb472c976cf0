use proptest::prelude::*;

use super::DropdownState;

#[test]
fn test_new_is_closed_and_inactive() {
    let state = DropdownState::new();
    assert!(!state.is_open);
    assert!(state.active().is_none());
}

#[test]
fn test_enter_list_starts_at_top() {
    let mut state = DropdownState::new();
    assert!(state.enter_list(3));
    assert_eq!(state.active(), Some(0));
}

#[test]
fn test_enter_list_noop_on_empty_results() {
    let mut state = DropdownState::new();
    assert!(!state.enter_list(0));
    assert!(state.active().is_none());
}

#[test]
fn test_enter_list_keeps_existing_highlight() {
    let mut state = DropdownState::new();
    state.enter_list(3);
    state.move_down(3);
    assert!(!state.enter_list(3));
    assert_eq!(state.active(), Some(1));
}

#[test]
fn test_down_walk_clamps_at_last_row() {
    let mut state = DropdownState::new();
    state.enter_list(3);

    assert!(state.move_down(3));
    assert!(state.move_down(3));
    assert_eq!(state.active(), Some(2));

    // One more Down stays on the last row
    assert!(!state.move_down(3));
    assert_eq!(state.active(), Some(2));
}

#[test]
fn test_up_clamps_at_first_row() {
    let mut state = DropdownState::new();
    state.enter_list(2);

    assert!(!state.move_up());
    assert_eq!(state.active(), Some(0));
}

#[test]
fn test_moves_are_noops_without_active_row() {
    let mut state = DropdownState::new();
    assert!(!state.move_down(5));
    assert!(!state.move_up());
    assert!(state.active().is_none());
}

#[test]
fn test_close_deactivates() {
    let mut state = DropdownState::new();
    state.open();
    state.enter_list(4);
    state.move_down(4);

    state.close();
    assert!(!state.is_open);
    assert!(state.active().is_none());
}

#[test]
fn test_emptied_results_force_inactive() {
    let mut state = DropdownState::new();
    state.enter_list(3);
    state.move_down(3);

    // Result set shrank to nothing underneath the highlight
    assert!(state.move_down(0));
    assert!(state.active().is_none());
}

// For any sequence of navigation operations against a fixed result count,
// the active row stays None or within [0, len-1].
proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_active_row_stays_in_bounds(
        len in 0usize..12,
        ops in prop::collection::vec(0u8..5, 0..60),
    ) {
        let mut state = DropdownState::new();

        for op in ops {
            match op {
                0 => {
                    state.enter_list(len);
                }
                1 => {
                    state.move_down(len);
                }
                2 => {
                    state.move_up();
                }
                3 => state.close(),
                _ => state.open(),
            }

            if let Some(active) = state.active() {
                prop_assert!(len > 0, "active row with empty results");
                prop_assert!(active < len, "active {} out of bounds for len {}", active, len);
            }
        }
    }

    // N repeated Downs land exactly min(N, len-1) from the top and never
    // pass the last row; enough Ups always land back on the first.
    #[test]
    fn prop_repeated_moves_saturate(
        len in 1usize..10,
        downs in 0usize..30,
    ) {
        let mut state = DropdownState::new();
        state.enter_list(len);

        for _ in 0..downs {
            state.move_down(len);
        }
        prop_assert_eq!(state.active(), Some(downs.min(len - 1)));

        for _ in 0..downs + len {
            state.move_up();
        }
        prop_assert_eq!(state.active(), Some(0));
    }
}
