use tuidom::layout::layout;
use tuidom::{Element, Event, MouseButton, Overflow, Rect, ScrollState, Scrollbar, Size};

fn tree() -> Element {
    Element::col()
        .id("root")
        .width(Size::Fixed(10))
        .height(Size::Fixed(6))
        .child(
            Element::col()
                .id("list")
                .width(Size::Fill)
                .height(Size::Fixed(3))
                .overflow(Overflow::Scroll)
                .scrollbar(Scrollbar::Hidden)
                .children((0..5).map(|i| {
                    Element::text(format!("row {i}"))
                        .id(format!("r{i}"))
                        .width(Size::Fill)
                        .height(Size::Fixed(1))
                })),
        )
}

fn wheel(y: u16, delta_y: i16) -> Event {
    Event::Scroll { x: 1, y, delta_y }
}

#[test]
fn test_wheel_scrolls_and_clamps() {
    let root = tree();
    let layout = layout(&root, Rect::from_size(10, 6));
    let mut scroll = ScrollState::new();

    assert!(scroll.process_events(&[wheel(1, 1)], &root, &layout));
    assert_eq!(scroll.get("list"), 1);

    scroll.process_events(&[wheel(1, 1), wheel(1, 1), wheel(1, 1)], &root, &layout);
    assert_eq!(scroll.get("list"), 2);

    assert!(!scroll.process_events(&[wheel(1, 1)], &root, &layout));
    assert!(scroll.process_events(&[wheel(1, -5)], &root, &layout));
    assert_eq!(scroll.get("list"), 0);
}

#[test]
fn test_wheel_outside_scroll_container_is_ignored() {
    let root = tree();
    let layout = layout(&root, Rect::from_size(10, 6));
    let mut scroll = ScrollState::new();

    assert!(!scroll.process_events(&[wheel(5, 1)], &root, &layout));
    assert_eq!(scroll.get("list"), 0);
}

#[test]
fn test_drag_moves_content_with_pointer() {
    let root = tree();
    let layout = layout(&root, Rect::from_size(10, 6));
    let mut scroll = ScrollState::new();

    let events = [
        Event::Press {
            target: None,
            x: 1,
            y: 2,
            button: MouseButton::Left,
        },
        Event::Drag {
            x: 1,
            y: 1,
            button: MouseButton::Left,
        },
    ];
    assert!(scroll.process_events(&events, &root, &layout));
    assert_eq!(scroll.get("list"), 1);
    assert!(scroll.is_dragging());

    // Dragging far beyond the content stays clamped
    let further = [Event::Drag {
        x: 1,
        y: 0,
        button: MouseButton::Left,
    }];
    scroll.process_events(&further, &root, &layout);
    assert_eq!(scroll.get("list"), 2);

    let release = [Event::Release {
        target: None,
        x: 1,
        y: 0,
        button: MouseButton::Left,
    }];
    scroll.process_events(&release, &root, &layout);
    assert!(!scroll.is_dragging());
}
