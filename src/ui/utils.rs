use super::constants::UiStyle;
use super::widgets::default_block;
use crate::api::MAX_COMMENT_LENGTH;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_textarea::{CursorMove, Input, Key, TextArea};

pub const COMMENT_INPUT_TITLE: &str = " Leave a comment ";

pub fn input_from_key_event(key: KeyEvent) -> Input {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);
    let key = match key.code {
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Enter => Key::Enter,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Tab => Key::Tab,
        KeyCode::Delete => Key::Delete,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::Esc => Key::Esc,
        _ => Key::Null,
    };
    Input {
        key,
        ctrl,
        alt,
        shift,
    }
}

pub fn comment_textarea() -> TextArea<'static> {
    let mut textarea = TextArea::default();
    textarea.set_cursor_line_style(UiStyle::DEFAULT);
    textarea.set_block(default_block().title(COMMENT_INPUT_TITLE));
    textarea
}

pub fn clear_textarea(textarea: &mut TextArea<'_>) {
    textarea.move_cursor(CursorMove::Bottom);
    textarea.move_cursor(CursorMove::End);
    while textarea.delete_line_by_head() || textarea.delete_newline() {}
}

/// Returns the trimmed comment if it can be posted, flagging the input otherwise.
pub fn validate_comment_input(textarea: &mut TextArea<'static>) -> Option<String> {
    let text = textarea.lines().join(" ");
    let text = text.trim();
    if text.chars().count() > MAX_COMMENT_LENGTH {
        textarea.set_style(UiStyle::ERROR);
        textarea.set_block(
            default_block()
                .title(COMMENT_INPUT_TITLE)
                .title(format!("(max {MAX_COMMENT_LENGTH} characters)")),
        );
        return None;
    }

    textarea.set_style(UiStyle::DEFAULT);
    textarea.set_block(default_block().title(COMMENT_INPUT_TITLE));
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}
