use page_selector::{Confirmation, Page, PageId, PageSet, Selection};

fn default_selection() -> Selection {
    Selection::new(PageSet::default())
}

fn states(selection: &Selection) -> Vec<bool> {
    selection
        .pages()
        .ids()
        .map(|id| selection.is_checked(id))
        .collect()
}

fn assert_flag_consistent(selection: &Selection) {
    let expected = states(selection).iter().all(|checked| *checked);
    assert_eq!(selection.all_selected(), expected);
}

// ============================================================================
// Initial state
// ============================================================================

#[test]
fn test_starts_empty() {
    let selection = default_selection();

    assert_eq!(states(&selection), vec![false; 6]);
    assert!(!selection.all_selected());
    assert_eq!(selection.selected_count(), 0);
}

// ============================================================================
// Single toggles
// ============================================================================

#[test]
fn test_flag_tracks_every_toggle() {
    let mut selection = default_selection();
    // Deterministic pseudo-random walk over page ids
    let mut seed: u32 = 7;
    for _ in 0..500 {
        seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        let id = PageId(seed % 6 + 1);
        selection.toggle(id);
        assert_flag_consistent(&selection);
    }
}

#[test]
fn test_toggle_changes_only_that_page() {
    let mut selection = default_selection();
    selection.toggle(PageId(1));
    selection.toggle(PageId(4));

    let before = states(&selection);
    assert_eq!(selection.toggle(PageId(3)), Some(true));
    let after = states(&selection);

    for (i, (b, a)) in before.iter().zip(&after).enumerate() {
        if i == 2 {
            assert_ne!(b, a);
        } else {
            assert_eq!(b, a, "page {} changed", i + 1);
        }
    }
}

#[test]
fn test_double_toggle_is_identity() {
    let mut selection = default_selection();
    for id in 1..=5 {
        selection.toggle(PageId(id));
    }
    let before = states(&selection);
    let flag_before = selection.all_selected();

    selection.toggle(PageId(6));
    assert!(selection.all_selected());
    selection.toggle(PageId(6));

    assert_eq!(states(&selection), before);
    assert_eq!(selection.all_selected(), flag_before);
}

#[test]
fn test_selecting_every_page_individually_sets_flag() {
    let mut selection = default_selection();
    for id in 1..=6 {
        assert!(!selection.all_selected());
        selection.toggle(PageId(id));
    }
    assert!(selection.all_selected());
}

#[test]
fn test_unknown_page_is_ignored() {
    let mut selection = default_selection();
    selection.toggle(PageId(2));

    assert_eq!(selection.toggle(PageId(42)), None);
    assert_eq!(selection.selected_count(), 1);
}

// ============================================================================
// Toggle all
// ============================================================================

#[test]
fn test_toggle_all_selects_everything_from_partial() {
    let mut selection = default_selection();
    selection.toggle(PageId(3));

    assert!(selection.toggle_all());
    assert_eq!(states(&selection), vec![true; 6]);
}

#[test]
fn test_toggle_all_clears_when_all_selected() {
    let mut selection = default_selection();
    selection.toggle_all();

    assert!(!selection.toggle_all());
    assert_eq!(states(&selection), vec![false; 6]);
    assert_eq!(selection.selected_count(), 0);
}

#[test]
fn test_toggle_all_after_individual_full_selection_clears() {
    let mut selection = default_selection();
    for id in 1..=6 {
        selection.toggle(PageId(id));
    }

    selection.toggle_all();
    assert_eq!(states(&selection), vec![false; 6]);
}

// ============================================================================
// Confirmation
// ============================================================================

#[test]
fn test_confirmation_uses_declared_order() {
    let mut selection = default_selection();
    selection.toggle(PageId(5));
    selection.toggle(PageId(2));

    assert_eq!(
        selection.confirmation(),
        Confirmation::Selected(vec!["Page 2".to_string(), "Page 5".to_string()])
    );
}

#[test]
fn test_confirmation_with_nothing_selected() {
    let mut selection = default_selection();
    selection.toggle(PageId(1));
    selection.toggle(PageId(1));

    let confirmation = selection.confirmation();
    assert!(confirmation.is_none_selected());
    assert_eq!(confirmation.to_string(), "No pages selected");
}

#[test]
fn test_confirmation_does_not_change_selection() {
    let mut selection = default_selection();
    selection.toggle(PageId(2));
    let before = states(&selection);

    let _ = selection.confirmation();
    assert_eq!(states(&selection), before);
}

#[test]
fn test_confirmation_display_lists_labels() {
    let pages = PageSet::new([Page::new(10, "Intro"), Page::new(3, "Outro")]).unwrap();
    let mut selection = Selection::new(pages);
    selection.toggle_all();

    assert_eq!(
        selection.confirmation().to_string(),
        "Selected pages: Intro, Outro"
    );
}
