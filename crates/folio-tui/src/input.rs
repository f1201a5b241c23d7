use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use folio_core::content::{SectionId, NAV_ITEMS};

use crate::app::{App, Mode};
use crate::contact_form::Field;

/// Rows moved per mouse wheel notch
pub const WHEEL_ROWS: i32 = 3;

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    ScrollDown,
    ScrollUp,
    ScrollHalfPageDown,
    ScrollHalfPageUp,
    ScrollPageDown,
    ScrollPageUp,
    JumpToTop,
    JumpToBottom,
    /// Navigation entry selected
    JumpTo(SectionId),
    NextSection,
    PrevSection,
    DownloadResume,
    EditContact,
    /// Open a mail client addressed to the site owner
    EmailMe,
    ShowHelp,
    ExitMode,
    // Contact form editing
    NextField,
    PrevField,
    InputChar(char),
    Newline,
    Backspace,
    /// Enter: advance to the next field, or submit from the last one
    Confirm,
    Submit,
    /// Wipe the form and drop any pending send
    ClearForm,
    // Mouse
    Pointer { column: u16, row: u16 },
    Wheel(i32),
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App) -> Action {
    match app.mode {
        Mode::Help => return Action::ExitMode,
        Mode::EditContact => return handle_edit_mode(key),
        Mode::Browse => {}
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,

        (KeyCode::Char('j'), KeyModifiers::NONE) | (KeyCode::Down, _) => Action::ScrollDown,
        (KeyCode::Char('k'), KeyModifiers::NONE) | (KeyCode::Up, _) => Action::ScrollUp,

        (KeyCode::Char('d'), KeyModifiers::CONTROL) => Action::ScrollHalfPageDown,
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => Action::ScrollHalfPageUp,
        (KeyCode::Char('f'), KeyModifiers::CONTROL) | (KeyCode::PageDown, _) => {
            Action::ScrollPageDown
        }
        (KeyCode::Char('b'), KeyModifiers::CONTROL) | (KeyCode::PageUp, _) => Action::ScrollPageUp,

        (KeyCode::Char('g'), KeyModifiers::NONE) | (KeyCode::Home, _) => Action::JumpToTop,
        (KeyCode::Char('G'), _) | (KeyCode::End, _) => Action::JumpToBottom,

        // Navigation entries 1-5
        (KeyCode::Char(c @ '1'..='9'), KeyModifiers::NONE) => {
            let index = c as usize - '1' as usize;
            NAV_ITEMS
                .get(index)
                .map(|item| Action::JumpTo(item.section))
                .unwrap_or(Action::None)
        }
        (KeyCode::Char('n'), KeyModifiers::NONE) | (KeyCode::Tab, _) => Action::NextSection,
        (KeyCode::Char('p'), KeyModifiers::NONE) | (KeyCode::BackTab, _) => Action::PrevSection,

        (KeyCode::Char('d'), KeyModifiers::NONE) => Action::DownloadResume,
        (KeyCode::Char('c'), KeyModifiers::NONE) => Action::EditContact,
        (KeyCode::Char('e'), KeyModifiers::NONE) => Action::EmailMe,
        (KeyCode::Char('?'), _) => Action::ShowHelp,

        (KeyCode::Esc, _) => Action::ExitMode,
        _ => Action::None,
    }
}

/// Handle key events while typing into the contact form
fn handle_edit_mode(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) => Action::ExitMode,
        (KeyCode::Char('s'), KeyModifiers::CONTROL) => Action::Submit,
        (KeyCode::Char('l'), KeyModifiers::CONTROL) => Action::ClearForm,
        (KeyCode::Char('j'), KeyModifiers::CONTROL) => Action::Newline,
        (KeyCode::Enter, KeyModifiers::ALT) => Action::Newline,
        (KeyCode::Enter, _) => Action::Confirm,
        (KeyCode::Tab, _) | (KeyCode::Down, _) => Action::NextField,
        (KeyCode::BackTab, _) | (KeyCode::Up, _) => Action::PrevField,
        (KeyCode::Backspace, _) => Action::Backspace,
        (KeyCode::Char(c), m) if !m.contains(KeyModifiers::CONTROL) => Action::InputChar(c),
        _ => Action::None,
    }
}

/// Pointer motion feeds the particle field; the wheel scrolls the page
pub fn handle_mouse_event(mouse: MouseEvent) -> Action {
    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => Action::Pointer {
            column: mouse.column,
            row: mouse.row,
        },
        MouseEventKind::ScrollDown => Action::Wheel(WHEEL_ROWS),
        MouseEventKind::ScrollUp => Action::Wheel(-WHEEL_ROWS),
        _ => Action::None,
    }
}

/// What Enter does in the form: move on, or submit from the message field
pub fn confirm_action(focus: Field) -> Action {
    match focus {
        Field::Message => Action::Submit,
        _ => Action::NextField,
    }
}
