//! Colors used by the selector's components.

use tuidom::Color;

/// Palette of the popover. Defaults follow a light card on a dark backdrop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    /// Screen area around the popover.
    pub backdrop: Color,
    /// Popover and row background.
    pub card: Color,
    /// Row background under the pointer.
    pub muted: Color,
    pub foreground: Color,
    /// Outline, dividers and unchecked boxes.
    pub border: Color,
    pub check_mark: Color,
    pub primary: Color,
    pub primary_hover: Color,
    pub primary_foreground: Color,
    /// Status line under the popover.
    pub status: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            backdrop: Color::rgb(20, 20, 20),
            card: Color::hex(0xFFFFFF),
            muted: Color::hsl(220.0, 14.0, 96.0),
            foreground: Color::hex(0x1F2128),
            border: Color::hex(0xCDCDCD),
            check_mark: Color::hex(0x1F2128),
            primary: Color::hsl(48.0, 96.0, 53.0),
            primary_hover: Color::hsl(47.0, 91.0, 51.0),
            primary_foreground: Color::hex(0x1F2128),
            status: Color::oklch(0.85, 0.0, 0.0),
        }
    }
}
