pub mod buffer;
pub mod element;
pub mod event;
pub mod hit;
pub mod layout;
pub mod render;
pub mod scroll;
pub mod terminal;
pub mod text;
pub mod types;

pub use buffer::Buffer;
pub use element::Element;
pub use event::{Event, EventTranslator, Key, Modifiers, MouseButton};
pub use hit::{hit_path, hit_test, hit_test_any};
pub use layout::{LayoutResult, Rect, ScrollExtent};
pub use scroll::ScrollState;
pub use terminal::Terminal;
pub use types::*;
