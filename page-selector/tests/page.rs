use page_selector::{Action, Page, PageId, PageSet, PageSetError};

#[test]
fn test_default_page_set() {
    let pages = PageSet::default();
    let labels: Vec<&str> = pages.iter().map(|p| p.label.as_str()).collect();

    assert_eq!(
        labels,
        vec!["Page 1", "Page 2", "Page 3", "Page 4", "Page 5", "Page 6"]
    );
    assert_eq!(pages.ids().collect::<Vec<_>>(), (1..=6).map(PageId).collect::<Vec<_>>());
}

#[test]
fn test_page_set_rejects_empty() {
    assert_eq!(PageSet::new(Vec::new()), Err(PageSetError::Empty));
}

#[test]
fn test_page_set_rejects_duplicate_ids() {
    let result = PageSet::new([Page::new(1, "a"), Page::new(2, "b"), Page::new(1, "c")]);

    assert_eq!(result, Err(PageSetError::DuplicateId(PageId(1))));
    assert_eq!(
        PageSetError::DuplicateId(PageId(1)).to_string(),
        "duplicate page id 1"
    );
}

#[test]
fn test_page_set_keeps_declared_order() {
    let pages = PageSet::new([Page::new(9, "z"), Page::new(1, "a")]).unwrap();

    assert_eq!(pages.ids().collect::<Vec<_>>(), vec![PageId(9), PageId(1)]);
    assert_eq!(pages.get(PageId(1)).map(|p| p.label.as_str()), Some("a"));
    assert!(!pages.contains(PageId(2)));
}

#[test]
fn test_numbered_zero_clamps_to_one_page() {
    let pages = PageSet::numbered(0);

    assert_eq!(pages.len(), 1);
    assert_eq!(pages.get(PageId(1)).map(|p| p.label.as_str()), Some("Page 1"));
    // The checked constructor rejects the same request
    assert_eq!(PageSet::new((1..=0).map(|n| Page::new(n, "x"))), Err(PageSetError::Empty));
}

#[test]
fn test_action_keys_parse_back() {
    for action in [Action::ToggleAll, Action::TogglePage(PageId(4)), Action::Confirm] {
        assert_eq!(Action::parse(&action.to_string()), Some(action));
    }

    assert_eq!(Action::parse("toggle-page:x"), None);
    assert_eq!(Action::parse("submit"), None);
}
