use crossterm::event::{
    Event as CrosstermEvent, KeyEventKind, MouseButton as CtButton, MouseEventKind,
};

use crate::element::Element;
use crate::hit::{hit_path, hit_test};
use crate::layout::LayoutResult;

/// High-level events with element targeting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Key press
    Key { key: Key, modifiers: Modifiers },
    /// Mouse button went down
    Press {
        target: Option<String>,
        x: u16,
        y: u16,
        button: MouseButton,
    },
    /// Mouse moved with a button held
    Drag { x: u16, y: u16, button: MouseButton },
    /// Mouse button went up
    Release {
        target: Option<String>,
        x: u16,
        y: u16,
        button: MouseButton,
    },
    /// Left press and release on the same clickable element without dragging.
    /// `path` lists the elements that receive it, deepest first.
    Click { path: Vec<String>, x: u16, y: u16 },
    /// Mouse wheel; positive `delta_y` scrolls content up (towards the end)
    Scroll { x: u16, y: u16, delta_y: i16 },
    /// Mouse move with no button held (hover tracking)
    MouseMove { x: u16, y: u16 },
    /// Terminal resized
    Resize { width: u16, height: u16 },
}

impl Event {
    /// Element that should handle a click first, if any.
    pub fn click_target(&self) -> Option<&str> {
        match self {
            Event::Click { path, .. } => path.first().map(String::as_str),
            _ => None,
        }
    }
}

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Tab,
    Other,
}

/// Key modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Default::default()
        }
    }
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Turns raw crossterm events into targeted [`Event`]s.
///
/// Keeps the press position across calls so a release can be recognised as
/// a click. A press that turns into a drag never produces a click.
#[derive(Debug, Default)]
pub struct EventTranslator {
    pressed: Option<Press>,
}

#[derive(Debug)]
struct Press {
    target: Option<String>,
    x: u16,
    y: u16,
    dragged: bool,
}

impl EventTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn translate(
        &mut self,
        raw: &[CrosstermEvent],
        root: &Element,
        layout: &LayoutResult,
    ) -> Vec<Event> {
        let mut events = Vec::new();
        for event in raw {
            self.translate_one(event, root, layout, &mut events);
        }
        events
    }

    fn translate_one(
        &mut self,
        raw: &CrosstermEvent,
        root: &Element,
        layout: &LayoutResult,
        out: &mut Vec<Event>,
    ) {
        match raw {
            CrosstermEvent::Key(key) if key.kind != KeyEventKind::Release => {
                out.push(Event::Key {
                    key: key.code.into(),
                    modifiers: key.modifiers.into(),
                });
            }
            CrosstermEvent::Resize(width, height) => {
                out.push(Event::Resize {
                    width: *width,
                    height: *height,
                });
            }
            CrosstermEvent::Mouse(mouse) => {
                let (x, y) = (mouse.column, mouse.row);
                match mouse.kind {
                    MouseEventKind::Down(button) => {
                        let target = hit_test(layout, root, x, y);
                        if button == CtButton::Left {
                            self.pressed = Some(Press {
                                target: target.clone(),
                                x,
                                y,
                                dragged: false,
                            });
                        }
                        out.push(Event::Press {
                            target,
                            x,
                            y,
                            button: button.into(),
                        });
                    }
                    MouseEventKind::Drag(button) => {
                        if let Some(press) = &mut self.pressed {
                            press.dragged |= press.x != x || press.y != y;
                        }
                        out.push(Event::Drag {
                            x,
                            y,
                            button: button.into(),
                        });
                    }
                    MouseEventKind::Up(button) => {
                        let target = hit_test(layout, root, x, y);
                        out.push(Event::Release {
                            target: target.clone(),
                            x,
                            y,
                            button: button.into(),
                        });
                        if button != CtButton::Left {
                            return;
                        }
                        let Some(press) = self.pressed.take() else {
                            return;
                        };
                        if !press.dragged && target.is_some() && press.target == target {
                            out.push(Event::Click {
                                path: hit_path(layout, root, x, y),
                                x,
                                y,
                            });
                        }
                    }
                    MouseEventKind::ScrollDown => out.push(Event::Scroll { x, y, delta_y: 1 }),
                    MouseEventKind::ScrollUp => out.push(Event::Scroll { x, y, delta_y: -1 }),
                    MouseEventKind::Moved => out.push(Event::MouseMove { x, y }),
                    _ => {}
                }
            }
            _ => {}
        }
    }
}

// Conversion from crossterm types
impl From<crossterm::event::KeyCode> for Key {
    fn from(code: crossterm::event::KeyCode) -> Self {
        use crossterm::event::KeyCode;
        match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Esc => Key::Escape,
            KeyCode::Tab => Key::Tab,
            _ => Key::Other,
        }
    }
}

impl From<crossterm::event::KeyModifiers> for Modifiers {
    fn from(mods: crossterm::event::KeyModifiers) -> Self {
        use crossterm::event::KeyModifiers;
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}

impl From<CtButton> for MouseButton {
    fn from(btn: CtButton) -> Self {
        match btn {
            CtButton::Left => MouseButton::Left,
            CtButton::Right => MouseButton::Right,
            CtButton::Middle => MouseButton::Middle,
        }
    }
}
