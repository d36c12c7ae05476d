use std::time::Instant;

use crate::buffer::{Buffer, Cell};
use crate::element::{Content, Element};
use crate::layout::{inner_rect, LayoutResult, Rect};
use crate::text::{align_offset, char_width, display_width, truncate_to_width};
use crate::types::{Border, Overflow, Rgb, Scrollbar, Style};

const DEFAULT_FG: Rgb = Rgb::new(255, 255, 255);
const SCROLL_TRACK: Rgb = Rgb::new(60, 60, 60);
const SCROLL_THUMB: Rgb = Rgb::new(150, 150, 150);

/// Paint `element` and its descendants into `buf` using positions from `layout`.
///
/// Elements missing from the layout (for example rows scrolled out of view)
/// are skipped together with their subtree.
pub fn render_to_buffer(element: &Element, layout: &LayoutResult, buf: &mut Buffer) {
    let started = Instant::now();
    let mut count = 0usize;
    render_element(element, layout, buf, None, &mut count);
    log::debug!(
        "render: elements={} took={:.2}µs",
        count,
        started.elapsed().as_secs_f64() * 1_000_000.0
    );
}

fn render_element(
    element: &Element,
    layout: &LayoutResult,
    buf: &mut Buffer,
    clip: Option<Rect>,
    count: &mut usize,
) {
    let Some(&rect) = layout.get(&element.id) else {
        return;
    };

    let visible = match clip {
        Some(clip) => rect.intersect(clip),
        None => rect,
    };
    if visible.is_empty() {
        return;
    }
    *count += 1;

    let style = element.effective_style();

    if let Some(bg) = &style.background {
        fill_rect(buf, visible, bg.to_rgb());
    }

    render_border(style, rect, buf, visible);

    match &element.content {
        Content::None => {}
        Content::Text(text) => render_text(text, element, style, rect, buf, visible),
        Content::Children(children) => {
            let child_clip = if element.overflow == Overflow::Visible {
                clip
            } else {
                Some(inner_rect(element, rect).intersect(visible))
            };
            for child in children {
                render_element(child, layout, buf, child_clip, count);
            }
        }
    }

    render_scrollbar(element, rect, layout, buf);
}

fn fill_rect(buf: &mut Buffer, rect: Rect, bg: Rgb) {
    for y in rect.y..rect.bottom().min(buf.height()) {
        for x in rect.x..rect.right().min(buf.width()) {
            if let Some(cell) = buf.get_mut(x, y) {
                cell.char = ' ';
                cell.bg = bg;
                cell.wide_continuation = false;
            }
        }
    }
}

fn render_text(
    text: &str,
    element: &Element,
    style: &Style,
    rect: Rect,
    buf: &mut Buffer,
    visible: Rect,
) {
    let fg = style.foreground.map(|c| c.to_rgb()).unwrap_or(DEFAULT_FG);
    let inner = inner_rect(element, rect);

    for (row, line) in text.lines().enumerate() {
        let y = inner.y + row as u16;
        if y >= inner.bottom() {
            break;
        }

        let line = truncate_to_width(line, inner.width as usize);
        let offset = align_offset(display_width(&line), inner.width as usize, element.text_align);
        let mut x = inner.x + offset as u16;

        for ch in line.chars() {
            let width = char_width(ch).max(1) as u16;
            if x + width > inner.right() {
                break;
            }
            if visible.contains(x, y) {
                // Keep whatever background an ancestor painted
                let bg = buf.get(x, y).map(|c| c.bg).unwrap_or_default();
                let bg = style.background.map(|c| c.to_rgb()).unwrap_or(bg);
                buf.set(
                    x,
                    y,
                    Cell::new(ch)
                        .with_fg(fg)
                        .with_bg(bg)
                        .with_style(style.text_style),
                );
                if width == 2 {
                    if let Some(next) = buf.get_mut(x + 1, y) {
                        next.wide_continuation = true;
                        next.bg = bg;
                    }
                }
            }
            x += width;
        }
    }
}

fn render_border(style: &Style, rect: Rect, buf: &mut Buffer, visible: Rect) {
    let (tl, tr, bl, br, h, v) = match style.border {
        Border::None => return,
        Border::Single => ('┌', '┐', '└', '┘', '─', '│'),
        Border::Rounded => ('╭', '╮', '╰', '╯', '─', '│'),
    };

    if rect.width < 2 || rect.height < 2 {
        return;
    }

    let fg = style
        .border_color
        .or(style.foreground)
        .map(|c| c.to_rgb())
        .unwrap_or(DEFAULT_FG);
    let right = rect.right() - 1;
    let bottom = rect.bottom() - 1;

    let mut set = |x: u16, y: u16, ch: char| {
        if visible.contains(x, y) {
            if let Some(cell) = buf.get_mut(x, y) {
                cell.char = ch;
                cell.fg = fg;
            }
        }
    };

    set(rect.x, rect.y, tl);
    set(right, rect.y, tr);
    set(rect.x, bottom, bl);
    set(right, bottom, br);

    for x in (rect.x + 1)..right {
        set(x, rect.y, h);
        set(x, bottom, h);
    }

    for y in (rect.y + 1)..bottom {
        set(rect.x, y, v);
        set(right, y, v);
    }
}

/// Vertical scrollbar on the right edge of the inner area, drawn only when
/// the element scrolls, shows its scrollbar and actually overflows.
fn render_scrollbar(element: &Element, rect: Rect, layout: &LayoutResult, buf: &mut Buffer) {
    if element.overflow != Overflow::Scroll || element.scrollbar == Scrollbar::Hidden {
        return;
    }

    let Some(extent) = layout.scroll_extent(&element.id) else {
        return;
    };
    let inner = inner_rect(element, rect);
    if !extent.overflows() || inner.is_empty() {
        return;
    }

    let track = inner.height;
    let thumb = ((track as u32 * track as u32) / extent.content.max(1) as u32).max(1) as u16;
    let travel = track.saturating_sub(thumb);
    let offset = element.scroll_offset.min(extent.max_offset());
    let thumb_start = (offset as u32 * travel as u32 / extent.max_offset().max(1) as u32) as u16;

    let x = inner.right() - 1;
    for i in 0..track {
        let on_thumb = i >= thumb_start && i < thumb_start + thumb;
        let (ch, fg) = if on_thumb {
            ('█', SCROLL_THUMB)
        } else {
            ('│', SCROLL_TRACK)
        };
        if let Some(cell) = buf.get_mut(x, inner.y.saturating_add(i)) {
            cell.char = ch;
            cell.fg = fg;
            cell.wide_continuation = false;
        }
    }
}
