use super::ui_callback::UiCallback;
use crate::types::AppResult;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{prelude::Rect, text::Span, Frame};

pub trait Screen {
    fn name(&self) -> &str;

    fn render(&mut self, frame: &mut Frame, area: Rect) -> AppResult<()>;

    fn handle_key_events(&mut self, key_event: KeyEvent) -> Option<UiCallback>;

    fn handle_mouse_events(&mut self, _mouse_event: MouseEvent) -> Option<UiCallback> {
        None
    }

    fn footer_spans(&self) -> Vec<Span<'static>> {
        vec![]
    }
}
