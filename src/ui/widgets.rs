use super::constants::UiStyle;
use crate::bracket::Candidate;
use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

pub fn default_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
}

/// A rect of at most `width` x `height`, centered in `area`.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let x = if area.width < width {
        0
    } else {
        (area.width - width) / 2
    };
    let y = if area.height < height {
        0
    } else {
        (area.height - height) / 2
    };

    let rect_width = if area.width < x + width {
        area.width
    } else {
        width
    };

    let rect_height = if area.height < y + height {
        area.height
    } else {
        height
    };

    Rect::new(area.x + x, area.y + y, rect_width, rect_height)
}

pub fn candidate_card<'a>(candidate: &'a Candidate, hotkey: &str, selected: bool) -> Paragraph<'a> {
    let border_style = if selected {
        UiStyle::HIGHLIGHT
    } else {
        UiStyle::DEFAULT
    };

    let image = if candidate.image_path.is_empty() {
        Span::styled("(no image)", UiStyle::UNSELECTABLE)
    } else {
        Span::styled(candidate.image_path.as_str(), UiStyle::UNSELECTABLE)
    };

    Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            candidate.name.as_str(),
            UiStyle::HEADER.add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(image),
    ])
    .centered()
    .wrap(Wrap { trim: true })
    .block(
        default_block()
            .border_style(border_style)
            .title(format!(" {hotkey} ")),
    )
}
