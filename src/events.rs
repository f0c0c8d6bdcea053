use crate::{app::App, error::Result, views::list::ScrollInput};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use tui_textarea::Input;

/// Everything the application reacts to, already stripped of terminal details.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum AppEvent {
    Submit,
    Edit(Input),
    Paste(String),
    Click { column: u16, row: u16 },
    Scroll(ScrollInput),
    Resize { width: u16, height: u16 },
    Answer(bool),
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EventKind {
    Submit,
    Edit,
    Paste,
    Click,
    Scroll,
    Resize,
    Answer,
    Quit,
}

impl AppEvent {
    pub(crate) fn kind(&self) -> EventKind {
        match self {
            AppEvent::Submit => EventKind::Submit,
            AppEvent::Edit(_) => EventKind::Edit,
            AppEvent::Paste(_) => EventKind::Paste,
            AppEvent::Click { .. } => EventKind::Click,
            AppEvent::Scroll(_) => EventKind::Scroll,
            AppEvent::Resize { .. } => EventKind::Resize,
            AppEvent::Answer(_) => EventKind::Answer,
            AppEvent::Quit => EventKind::Quit,
        }
    }
}

pub(crate) type Handler = fn(&mut App, AppEvent) -> Result<()>;

pub(crate) const DISPATCH: [(EventKind, Handler); 8] = [
    (EventKind::Submit, App::on_submit),
    (EventKind::Edit, App::on_edit),
    (EventKind::Paste, App::on_paste),
    (EventKind::Click, App::on_click),
    (EventKind::Scroll, App::on_scroll),
    (EventKind::Resize, App::on_resize),
    (EventKind::Answer, App::on_answer),
    (EventKind::Quit, App::on_quit),
];

pub(crate) fn handler_for(kind: EventKind) -> Option<Handler> {
    DISPATCH
        .iter()
        .find(|(k, _)| *k == kind)
        .map(|(_, handler)| *handler)
}

/// Maps a raw terminal event to an [`AppEvent`].
///
/// While a confirmation is open only the answer keys and quitting get
/// through; the dialog is modal.
pub(crate) fn translate(event: Event, confirming: bool) -> Option<AppEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => translate_key(key, confirming),
        Event::Mouse(mouse) if !confirming => translate_mouse(mouse),
        Event::Paste(text) if !confirming => Some(AppEvent::Paste(text)),
        Event::Resize(width, height) => Some(AppEvent::Resize { width, height }),
        _ => None,
    }
}

fn translate_key(key: KeyEvent, confirming: bool) -> Option<AppEvent> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('c') if ctrl => Some(AppEvent::Quit),
        _ if confirming => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => Some(AppEvent::Answer(true)),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(AppEvent::Answer(false)),
            _ => None,
        },
        KeyCode::Esc => Some(AppEvent::Quit),
        KeyCode::Enter if key.modifiers.contains(KeyModifiers::ALT) => {
            Some(AppEvent::Edit(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE).into()))
        }
        KeyCode::Enter => Some(AppEvent::Submit),
        KeyCode::PageUp => Some(AppEvent::Scroll(ScrollInput::Up)),
        KeyCode::PageDown => Some(AppEvent::Scroll(ScrollInput::Down)),
        _ => Some(AppEvent::Edit(key.into())),
    }
}

fn translate_mouse(mouse: MouseEvent) -> Option<AppEvent> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(AppEvent::Click {
            column: mouse.column,
            row: mouse.row,
        }),
        MouseEventKind::ScrollUp => Some(AppEvent::Scroll(ScrollInput::Up)),
        MouseEventKind::ScrollDown => Some(AppEvent::Scroll(ScrollInput::Down)),
        _ => None,
    }
}
