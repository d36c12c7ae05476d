//! Full-screen terminal host for a single selector.

use std::fs::{self, File};
use std::path::PathBuf;

use simplelog::{Config, LevelFilter, WriteLogger};
use tuidom::{
    Align, Element, Event, EventTranslator, Justify, Key, Size, Style, Terminal, TextAlign,
};

use crate::config::SelectorConfig;
use crate::confirm::{Confirmation, LastConfirmation};
use crate::error::AppError;
use crate::paths;
use crate::selector::PageSelector;

const HINT: &str = "click to select · q to quit";

/// Send `log` records to the cache-directory log file. The terminal itself
/// belongs to the UI, so nothing is logged to stdout or stderr.
pub fn init_logging(level: LevelFilter) -> Result<PathBuf, AppError> {
    let path = paths::log_file().ok_or(AppError::NoLogDir)?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let log_file = File::create(&path)?;
    WriteLogger::init(level, Config::default(), log_file)?;
    Ok(path)
}

/// Run the selector until the user quits. Returns the last confirmation, if
/// "Done" was pressed at least once.
pub fn run(config: SelectorConfig) -> Result<Option<Confirmation>, AppError> {
    let mut term = Terminal::new()?;
    let mut selector = PageSelector::new(config);
    let mut translator = EventTranslator::new();
    let mut last = LastConfirmation::new();

    log::info!(
        "starting {} with {} pages",
        selector.config().id,
        selector.selection().pages().len()
    );

    loop {
        let root = screen(&selector, last.get());
        term.render(&root)?;

        let raw = term.poll(None)?;
        let events = translator.translate(&raw, &root, term.layout());

        if events.iter().any(is_quit) {
            log::info!("quit requested");
            return Ok(last.into_inner());
        }

        selector.handle_events(&events, &root, term.layout(), &mut last);
    }
}

/// The selector centred on a backdrop, with a status line underneath.
pub fn screen(selector: &PageSelector, last: Option<&Confirmation>) -> Element {
    let theme = &selector.config().theme;
    let status = last.map_or_else(|| HINT.to_string(), |c| c.to_string());

    Element::col()
        .id("screen")
        .width(Size::Fill)
        .height(Size::Fill)
        .justify(Justify::Center)
        .align(Align::Center)
        .gap(1)
        .style(Style::new().background(theme.backdrop))
        .child(selector.element())
        .child(
            Element::text(status)
                .id("status")
                .width(Size::Fill)
                .text_align(TextAlign::Center)
                .style(Style::new().foreground(theme.status)),
        )
}

fn is_quit(event: &Event) -> bool {
    match event {
        Event::Key {
            key: Key::Char('q') | Key::Escape,
            ..
        } => true,
        Event::Key {
            key: Key::Char('c'),
            modifiers,
        } => modifiers.ctrl,
        _ => false,
    }
}
