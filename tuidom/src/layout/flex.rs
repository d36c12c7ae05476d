use super::{LayoutResult, Rect, ScrollExtent};
use crate::element::{Content, Element};
use crate::text::display_width;
use crate::types::{Align, Direction, Justify, Overflow, Size};

pub fn layout(element: &Element, available: Rect) -> LayoutResult {
    let mut result = LayoutResult::new();

    let width = resolve_size(element.width, available.width, element, true);
    let height = resolve_size(element.height, available.height, element, false);
    let rect = Rect::new(available.x, available.y, width, height);
    result.insert(element.id.clone(), rect);
    layout_children(element, rect, &mut result);

    result
}

/// Area inside border and padding.
pub(crate) fn inner_rect(element: &Element, rect: Rect) -> Rect {
    let border = element.style.border.width();
    rect.shrink(
        element.padding.top.saturating_add(border),
        element.padding.right.saturating_add(border),
        element.padding.bottom.saturating_add(border),
        element.padding.left.saturating_add(border),
    )
}

fn layout_children(element: &Element, rect: Rect, result: &mut LayoutResult) {
    let Content::Children(children) = &element.content else {
        return;
    };

    if children.is_empty() {
        return;
    }

    let inner = inner_rect(element, rect);
    let is_row = element.direction == Direction::Row;
    let main_size = if is_row { inner.width } else { inner.height };
    let cross_size = if is_row { inner.height } else { inner.width };
    let gap_total = gap_total(element.gap, children.len());

    // First pass: fixed and content sizes, count fill items
    let mut fixed_total = 0u16;
    let mut fill_count = 0u16;
    for child in children {
        match main_axis_size(child, is_row) {
            Size::Fill => fill_count = fill_count.saturating_add(1),
            size => fixed_total = fixed_total.saturating_add(resolve_main(size, child, is_row)),
        }
    }

    let remaining = main_size.saturating_sub(fixed_total.saturating_add(gap_total));
    let fill_size = if fill_count > 0 {
        remaining / fill_count
    } else {
        0
    };

    let sizes: Vec<u16> = children
        .iter()
        .map(|child| match main_axis_size(child, is_row) {
            Size::Fill => fill_size,
            size => resolve_main(size, child, is_row),
        })
        .collect();

    let content_total = sizes
        .iter()
        .fold(0u16, |total, &size| total.saturating_add(size))
        .saturating_add(gap_total);
    let extra_space = main_size.saturating_sub(content_total);

    let (start_offset, between_gap) = match element.justify {
        Justify::Start => (0, element.gap),
        Justify::End => (extra_space, element.gap),
        Justify::Center => (extra_space / 2, element.gap),
        Justify::SpaceBetween if children.len() > 1 => {
            let spaces = saturating_count(children.len() - 1);
            (0, (extra_space / spaces).saturating_add(element.gap))
        }
        Justify::SpaceBetween => (0, element.gap),
    };

    // Column scroll containers shift their children up by the clamped offset
    let scrolls = element.overflow == Overflow::Scroll && !is_row;
    let scroll = if scrolls {
        let extent = ScrollExtent {
            content: content_total,
            viewport: inner.height,
        };
        result.set_scroll_extent(element.id.clone(), extent);
        element.scroll_offset.min(extent.max_offset())
    } else {
        0
    };

    let mut offset = start_offset;
    for (child, &main) in children.iter().zip(&sizes) {
        let cross = resolve_cross(child, element.align, is_row, cross_size);
        let cross_offset = match element.align {
            Align::Start | Align::Stretch => 0,
            Align::Center => cross_size.saturating_sub(cross) / 2,
            Align::End => cross_size.saturating_sub(cross),
        };

        let child_rect = if scrolls {
            // Rows scrolled past the top edge leave the layout entirely
            let Some(top) = offset.checked_sub(scroll) else {
                offset = offset.saturating_add(main).saturating_add(between_gap);
                continue;
            };
            Rect::new(
                inner.x.saturating_add(cross_offset),
                inner.y.saturating_add(top),
                cross,
                main,
            )
            .intersect(inner)
        } else {
            let clamped_main = main.min(main_size.saturating_sub(offset));
            if is_row {
                Rect::new(
                    inner.x.saturating_add(offset),
                    inner.y.saturating_add(cross_offset),
                    clamped_main,
                    cross,
                )
            } else {
                Rect::new(
                    inner.x.saturating_add(cross_offset),
                    inner.y.saturating_add(offset),
                    cross,
                    clamped_main,
                )
            }
        };

        offset = offset.saturating_add(main).saturating_add(between_gap);

        if scrolls && child_rect.is_empty() {
            continue;
        }

        result.insert(child.id.clone(), child_rect);
        layout_children(child, child_rect, result);
    }
}

fn main_axis_size(child: &Element, is_row: bool) -> Size {
    if is_row { child.width } else { child.height }
}

fn resolve_main(size: Size, child: &Element, is_row: bool) -> u16 {
    match size {
        Size::Fixed(n) => n,
        Size::Auto | Size::Fill => estimate_size(child, is_row),
    }
}

fn resolve_cross(child: &Element, align: Align, is_row: bool, available: u16) -> u16 {
    let size = if is_row { child.height } else { child.width };
    match size {
        Size::Fixed(n) => n.min(available),
        Size::Fill => available,
        Size::Auto if align == Align::Stretch => available,
        Size::Auto => estimate_size(child, !is_row).min(available),
    }
}

fn resolve_size(size: Size, available: u16, element: &Element, is_width: bool) -> u16 {
    match size {
        Size::Fixed(n) => n.min(available),
        Size::Fill => available,
        Size::Auto => estimate_size(element, is_width).min(available),
    }
}

/// Intrinsic size of an element along one axis, including padding and border.
pub fn estimate_size(element: &Element, is_width: bool) -> u16 {
    let declared = if is_width {
        element.width
    } else {
        element.height
    };
    if let Size::Fixed(n) = declared {
        return n;
    }

    let border = element.style.border.width() * 2;
    let padding = if is_width {
        element.padding.horizontal_total()
    } else {
        element.padding.vertical_total()
    };

    let content_size = match &element.content {
        Content::None => 0,
        Content::Text(text) => {
            if is_width {
                saturating_count(text.lines().map(display_width).max().unwrap_or(0))
            } else {
                saturating_count(text.lines().count().max(1))
            }
        }
        Content::Children(children) if children.is_empty() => 0,
        Content::Children(children) => {
            let along_main = (element.direction == Direction::Row) == is_width;
            if along_main {
                children
                    .iter()
                    .map(|c| estimate_size(c, is_width))
                    .fold(0u16, u16::saturating_add)
                    .saturating_add(gap_total(element.gap, children.len()))
            } else {
                children
                    .iter()
                    .map(|c| estimate_size(c, is_width))
                    .max()
                    .unwrap_or(0)
            }
        }
    };

    content_size.saturating_add(padding).saturating_add(border)
}

/// Length or count clamped into the u16 cell space.
fn saturating_count(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

/// Total gap between `len` children.
fn gap_total(gap: u16, len: usize) -> u16 {
    gap.saturating_mul(saturating_count(len.saturating_sub(1)))
}
