use tuidom::layout::layout;
use tuidom::{
    Border, Edges, Element, Justify, Overflow, Rect, ScrollExtent, Size, Style,
};

fn rows(count: usize) -> Vec<Element> {
    (0..count)
        .map(|i| {
            Element::text(format!("r{i}"))
                .id(format!("r{i}"))
                .width(Size::Fill)
                .height(Size::Fixed(1))
        })
        .collect()
}

fn list(offset: u16) -> Element {
    Element::col()
        .id("list")
        .width(Size::Fixed(10))
        .height(Size::Fixed(3))
        .overflow(Overflow::Scroll)
        .scroll_offset(offset)
        .children(rows(5))
}

// ============================================================================
// Flex
// ============================================================================

#[test]
fn test_column_fixed_and_fill() {
    let root = Element::col()
        .id("root")
        .width(Size::Fixed(20))
        .height(Size::Fixed(10))
        .child(Element::box_().id("a").width(Size::Fill).height(Size::Fixed(2)))
        .child(Element::box_().id("b").width(Size::Fill).height(Size::Fill));

    let result = layout(&root, Rect::from_size(80, 24));

    assert_eq!(result.get("root"), Some(&Rect::new(0, 0, 20, 10)));
    assert_eq!(result.get("a"), Some(&Rect::new(0, 0, 20, 2)));
    assert_eq!(result.get("b"), Some(&Rect::new(0, 2, 20, 8)));
}

#[test]
fn test_border_and_padding_shrink_inner_area() {
    let root = Element::col()
        .id("root")
        .width(Size::Fixed(10))
        .height(Size::Fixed(5))
        .padding(Edges::horizontal(1))
        .style(Style::new().border(Border::Single))
        .child(Element::box_().id("child").width(Size::Fill).height(Size::Fill));

    let result = layout(&root, Rect::from_size(80, 24));

    assert_eq!(result.get("child"), Some(&Rect::new(2, 1, 6, 3)));
}

#[test]
fn test_row_space_between_pushes_last_child_to_edge() {
    let root = Element::row()
        .id("row")
        .width(Size::Fixed(10))
        .height(Size::Fixed(1))
        .justify(Justify::SpaceBetween)
        .child(Element::text("ab").id("label"))
        .child(Element::text("[ ]").id("box").width(Size::Fixed(3)));

    let result = layout(&root, Rect::from_size(80, 24));

    assert_eq!(result.get("label"), Some(&Rect::new(0, 0, 2, 1)));
    assert_eq!(result.get("box"), Some(&Rect::new(7, 0, 3, 1)));
}

#[test]
fn test_auto_height_sums_children_and_border() {
    let root = Element::col()
        .id("root")
        .width(Size::Fixed(10))
        .style(Style::new().border(Border::Rounded))
        .children(rows(4));

    let result = layout(&root, Rect::from_size(80, 24));

    assert_eq!(result.get("root"), Some(&Rect::new(0, 0, 10, 6)));
}

// ============================================================================
// Scroll containers
// ============================================================================

#[test]
fn test_scroll_container_records_extent() {
    let result = layout(&list(0), Rect::from_size(80, 24));

    assert_eq!(
        result.scroll_extent("list"),
        Some(ScrollExtent {
            content: 5,
            viewport: 3
        })
    );
    assert_eq!(result.scroll_extent("list").map(|e| e.max_offset()), Some(2));
}

#[test]
fn test_scroll_offset_moves_rows_and_drops_hidden_ones() {
    let result = layout(&list(1), Rect::from_size(80, 24));

    // Scrolled past the top edge
    assert_eq!(result.get("r0"), None);
    assert_eq!(result.get("r1"), Some(&Rect::new(0, 0, 10, 1)));
    assert_eq!(result.get("r3"), Some(&Rect::new(0, 2, 10, 1)));
    // Below the viewport
    assert_eq!(result.get("r4"), None);
}

#[test]
fn test_scroll_offset_is_clamped_to_content() {
    let result = layout(&list(10), Rect::from_size(80, 24));

    assert_eq!(result.get("r2"), Some(&Rect::new(0, 0, 10, 1)));
    assert_eq!(result.get("r4"), Some(&Rect::new(0, 2, 10, 1)));
}

#[test]
fn test_short_content_does_not_overflow() {
    let root = Element::col()
        .id("list")
        .width(Size::Fixed(10))
        .height(Size::Fixed(3))
        .overflow(Overflow::Scroll)
        .children(rows(2));

    let result = layout(&root, Rect::from_size(80, 24));
    let extent = result.scroll_extent("list").unwrap();

    assert!(!extent.overflows());
    assert_eq!(extent.max_offset(), 0);
}

// ============================================================================
// Oversized content
// ============================================================================

#[test]
fn test_more_rows_than_cells_saturates() {
    let root = Element::col()
        .id("list")
        .width(Size::Fixed(10))
        .height(Size::Fixed(4))
        .gap(1)
        .overflow(Overflow::Scroll)
        .scroll_offset(u16::MAX)
        .children(rows(70_000));

    let result = layout(&root, Rect::from_size(80, 24));
    let extent = result.scroll_extent("list").unwrap();

    assert_eq!(extent.content, u16::MAX);
    assert_eq!(extent.max_offset(), u16::MAX - 4);
    assert_eq!(result.get("r0"), None);
}

#[test]
fn test_auto_size_of_huge_column_saturates() {
    let root = Element::col()
        .id("root")
        .width(Size::Fixed(10))
        .justify(Justify::SpaceBetween)
        .children(rows(70_000));

    let result = layout(&root, Rect::from_size(80, 24));

    assert_eq!(result.get("root"), Some(&Rect::new(0, 0, 10, 24)));
    assert_eq!(result.get("r0"), Some(&Rect::new(0, 0, 10, 1)));
}
