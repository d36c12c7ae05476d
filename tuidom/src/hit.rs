use crate::element::{Content, Element};
use crate::layout::LayoutResult;

/// Find the deepest clickable element at the given coordinates.
/// Returns None if no clickable element contains the point.
pub fn hit_test(layout: &LayoutResult, root: &Element, x: u16, y: u16) -> Option<String> {
    hit_path(layout, root, x, y).into_iter().next()
}

/// Find any element (clickable or not) at the given coordinates.
/// Returns the deepest element containing the point.
pub fn hit_test_any(layout: &LayoutResult, root: &Element, x: u16, y: u16) -> Option<String> {
    let mut chain = Vec::new();
    collect_chain(layout, root, x, y, &mut chain);
    chain.last().map(|element| element.id.clone())
}

/// Clickable elements under the point that should receive a click, deepest first.
///
/// The chain ends at the first element with `stop_propagation`, so an inner
/// control and an outer row bound to the same action never both fire.
pub fn hit_path(layout: &LayoutResult, root: &Element, x: u16, y: u16) -> Vec<String> {
    let mut chain = Vec::new();
    collect_chain(layout, root, x, y, &mut chain);

    let mut path = Vec::new();
    for element in chain.iter().rev().filter(|e| e.clickable) {
        path.push(element.id.clone());
        if element.stop_propagation {
            break;
        }
    }
    path
}

/// Push the root-to-leaf chain of elements containing the point.
fn collect_chain<'a>(
    layout: &LayoutResult,
    element: &'a Element,
    x: u16,
    y: u16,
    chain: &mut Vec<&'a Element>,
) -> bool {
    let Some(rect) = layout.get(&element.id) else {
        return false;
    };

    if !rect.contains(x, y) {
        return false;
    }

    chain.push(element);

    // Check children in reverse order (last rendered = on top)
    if let Content::Children(children) = &element.content {
        for child in children.iter().rev() {
            if collect_chain(layout, child, x, y, chain) {
                break;
            }
        }
    }

    true
}
