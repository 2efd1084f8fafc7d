use super::constants::{UiStyle, UiText};
use super::widgets::{centered_rect, default_block};
use crate::types::{SystemTimeTick, Tick};
use ratatui::layout::{Constraint, Layout, Margin, Rect};
use ratatui::widgets::{Clear, Paragraph, Wrap};
use ratatui::Frame;
use strum_macros::Display;

const POPUP_WIDTH: u16 = 48;
const POPUP_HEIGHT: u16 = 12;

#[derive(Debug, Display, Clone, PartialEq)]
pub enum PopupMessage {
    Error { message: String, tick: Tick },
    Notice { message: String, tick: Tick },
}

impl PopupMessage {
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
            tick: Tick::now(),
        }
    }

    pub fn notice(message: impl Into<String>) -> Self {
        Self::Notice {
            message: message.into(),
            tick: Tick::now(),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Error { message, .. } | Self::Notice { message, .. } => message,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let rect = centered_rect(area, POPUP_WIDTH, POPUP_HEIGHT);

        let split = Layout::vertical([
            Constraint::Length(3), //header
            Constraint::Min(3),    //message
            Constraint::Length(1), //hint
        ])
        .split(rect.inner(Margin {
            vertical: 1,
            horizontal: 1,
        }));

        let (title, style, tick) = match self {
            Self::Error { tick, .. } => ("Error", UiStyle::ERROR, tick),
            Self::Notice { tick, .. } => ("Notice", UiStyle::WARNING, tick),
        };

        frame.render_widget(Clear, rect);
        frame.render_widget(default_block(), rect);
        frame.render_widget(
            Paragraph::new(format!("{title}: {}", tick.formatted_as_time()))
                .block(default_block().border_style(style))
                .centered(),
            split[0],
        );
        frame.render_widget(
            Paragraph::new(self.message())
                .centered()
                .wrap(Wrap { trim: true }),
            split[1].inner(Margin {
                horizontal: 1,
                vertical: 1,
            }),
        );
        frame.render_widget(
            Paragraph::new(format!("Enter: {}", UiText::OK))
                .style(UiStyle::UNSELECTABLE)
                .centered(),
            split[2],
        );
    }
}
