use super::constants::{UiKey, UiStyle, UiText, CANDIDATE_CARD_HEIGHT, CANDIDATE_CARD_WIDTH};
use super::traits::Screen;
use super::ui_callback::UiCallback;
use super::utils::{
    clear_textarea, comment_textarea, input_from_key_event, validate_comment_input,
    COMMENT_INPUT_TITLE,
};
use super::widgets::{candidate_card, centered_rect, default_block};
use crate::api::{Comment, TournamentResult};
use crate::types::{AppResult, TournamentId};
use crossterm::event::KeyEvent;
use itertools::Itertools;
use ratatui::{
    layout::{Constraint, Layout},
    prelude::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};
use tui_textarea::TextArea;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum CommentFeed {
    #[default]
    Loading,
    Loaded(Vec<Comment>),
    Unavailable(String),
}

#[derive(Debug, Default)]
pub struct ResultScreen {
    tournament_id: TournamentId,
    title: String,
    result: Option<TournamentResult>,
    comments: CommentFeed,
    comment_input: TextArea<'static>,
}

impl ResultScreen {
    pub fn set_result(
        &mut self,
        tournament_id: TournamentId,
        title: impl Into<String>,
        result: TournamentResult,
    ) {
        self.tournament_id = tournament_id;
        self.title = title.into();
        self.result = Some(result);
        self.comments = CommentFeed::Loading;
        self.comment_input = comment_textarea();
    }

    pub fn result(&self) -> Option<&TournamentResult> {
        self.result.as_ref()
    }

    pub fn comments(&self) -> &CommentFeed {
        &self.comments
    }

    pub fn set_comments(&mut self, comments: Vec<Comment>) {
        self.comments = CommentFeed::Loaded(comments);
    }

    pub fn set_comments_unavailable(&mut self, message: impl Into<String>) {
        self.comments = CommentFeed::Unavailable(message.into());
    }

    pub fn comment_posted(&mut self) {
        clear_textarea(&mut self.comment_input);
        self.comment_input.set_block(
            default_block()
                .border_style(UiStyle::OK)
                .title(COMMENT_INPUT_TITLE)
                .title("(posted)"),
        );
    }

    fn nicknames_line(result: &TournamentResult) -> String {
        if result.top_winner_nicknames.is_empty() {
            "Nobody else crowned this candidate yet.".to_string()
        } else {
            format!(
                "Also crowned by: {}",
                result.top_winner_nicknames.iter().join(", ")
            )
        }
    }

    fn comment_lines(&self) -> Vec<Line<'_>> {
        match &self.comments {
            CommentFeed::Loading => vec![Line::from(UiText::LOADING)],
            CommentFeed::Unavailable(message) => {
                vec![Line::from(Span::styled(message.as_str(), UiStyle::ERROR))]
            }
            CommentFeed::Loaded(comments) if comments.is_empty() => {
                vec![Line::from(Span::styled(
                    UiText::NO_COMMENTS,
                    UiStyle::UNSELECTABLE,
                ))]
            }
            CommentFeed::Loaded(comments) => comments
                .iter()
                .flat_map(|comment| {
                    let mut meta = vec![Span::styled(comment.nickname.as_str(), UiStyle::HEADER)];
                    if let Some(posted_on) = comment.posted_on() {
                        meta.push(Span::styled(format!(" {posted_on}"), UiStyle::UNSELECTABLE));
                    }
                    [Line::from(meta), Line::from(comment.content.as_str()), Line::from("")]
                })
                .collect(),
        }
    }
}

impl Screen for ResultScreen {
    fn name(&self) -> &str {
        "Result"
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) -> AppResult<()> {
        let Some(result) = self.result.as_ref() else {
            frame.render_widget(default_block(), area);
            return Ok(());
        };

        let columns =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).split(area);
        let left = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(CANDIDATE_CARD_HEIGHT),
            Constraint::Length(4),
        ])
        .split(columns[0]);
        let right = Layout::vertical([Constraint::Min(4), Constraint::Length(3)]).split(columns[1]);

        frame.render_widget(
            Paragraph::new(Span::styled("Winner!", UiStyle::WINNER))
                .centered()
                .block(default_block().title(format!(" {} ", self.title))),
            left[0],
        );
        frame.render_widget(
            candidate_card(&result.winner, "winner", true),
            centered_rect(left[1], CANDIDATE_CARD_WIDTH, CANDIDATE_CARD_HEIGHT),
        );
        frame.render_widget(
            Paragraph::new(vec![Line::from(Self::nicknames_line(result))])
                .centered()
                .wrap(Wrap { trim: true })
                .block(default_block()),
            left[2],
        );

        frame.render_widget(
            Paragraph::new(self.comment_lines())
                .wrap(Wrap { trim: true })
                .block(default_block().title(" Comments ")),
            right[0],
        );
        frame.render_widget(&self.comment_input, right[1]);
        Ok(())
    }

    fn handle_key_events(&mut self, key_event: KeyEvent) -> Option<UiCallback> {
        let input_is_empty = self.comment_input.lines().iter().all(|line| line.is_empty());
        match key_event.code {
            UiKey::CONFIRM if input_is_empty => Some(UiCallback::BackToList),
            UiKey::CONFIRM => {
                validate_comment_input(&mut self.comment_input).map(|content| {
                    UiCallback::PostComment {
                        tournament_id: self.tournament_id,
                        content,
                    }
                })
            }
            UiKey::BACK if input_is_empty => Some(UiCallback::BackToList),
            _ => {
                self.comment_input.input(input_from_key_event(key_event));
                None
            }
        }
    }

    fn footer_spans(&self) -> Vec<Span<'static>> {
        vec![
            Span::styled(" Enter ", UiStyle::HIGHLIGHT),
            Span::raw("post the comment, or go back when empty "),
            Span::styled(" Backspace ", UiStyle::HIGHLIGHT),
            Span::raw("back to the list when empty "),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::{CommentFeed, ResultScreen};
    use crate::api::{Comment, TournamentResult};
    use crate::bracket::Candidate;
    use crate::ui::{traits::Screen, ui_callback::UiCallback};
    use crossterm::event::{KeyCode, KeyEvent};

    fn result_screen() -> ResultScreen {
        let mut screen = ResultScreen::default();
        screen.set_result(
            5,
            "Best ramen",
            TournamentResult {
                winner: Candidate::new(1, "Tteokbokki", ""),
                top_winner_nicknames: vec![],
            },
        );
        screen
    }

    fn type_text(screen: &mut ResultScreen, text: &str) {
        for c in text.chars() {
            assert_eq!(screen.handle_key_events(KeyEvent::from(KeyCode::Char(c))), None);
        }
    }

    #[test]
    fn test_nicknames_line() {
        let mut result = TournamentResult {
            winner: Candidate::new(1, "Tteokbokki", ""),
            top_winner_nicknames: vec![],
        };
        assert_eq!(
            ResultScreen::nicknames_line(&result),
            "Nobody else crowned this candidate yet."
        );
        result.top_winner_nicknames = vec!["mina".into(), "joon".into()];
        assert_eq!(
            ResultScreen::nicknames_line(&result),
            "Also crowned by: mina, joon"
        );
    }

    #[test]
    fn test_enter_goes_back() {
        let mut screen = result_screen();
        assert_eq!(
            screen.handle_key_events(KeyEvent::from(KeyCode::Enter)),
            Some(UiCallback::BackToList)
        );
        assert_eq!(
            screen.handle_key_events(KeyEvent::from(KeyCode::Backspace)),
            Some(UiCallback::BackToList)
        );
    }

    #[test]
    fn test_typed_comment_is_posted() {
        let mut screen = result_screen();
        type_text(&mut screen, "K1 ");
        // Backspace edits the comment instead of leaving.
        assert_eq!(screen.handle_key_events(KeyEvent::from(KeyCode::Backspace)), None);
        type_text(&mut screen, "!");
        assert_eq!(
            screen.handle_key_events(KeyEvent::from(KeyCode::Enter)),
            Some(UiCallback::PostComment {
                tournament_id: 5,
                content: "K1!".into()
            })
        );

        screen.comment_posted();
        assert_eq!(
            screen.handle_key_events(KeyEvent::from(KeyCode::Enter)),
            Some(UiCallback::BackToList)
        );
    }

    #[test]
    fn test_blank_comment_is_not_posted() {
        let mut screen = result_screen();
        type_text(&mut screen, "   ");
        assert_eq!(screen.handle_key_events(KeyEvent::from(KeyCode::Enter)), None);
    }

    #[test]
    fn test_comment_feed() {
        let mut screen = result_screen();
        assert_eq!(*screen.comments(), CommentFeed::Loading);

        screen.set_comments(vec![]);
        assert_eq!(screen.comment_lines().len(), 1);

        screen.set_comments(vec![Comment {
            id: 1,
            nickname: "joon".into(),
            content: "Miso wins".into(),
            created_at: Some("2025-03-01T18:04:12".into()),
        }]);
        let lines = screen.comment_lines();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].to_string(), "joon 2025-03-01 18:04");
        assert_eq!(lines[1].to_string(), "Miso wins");

        screen.set_comments_unavailable("Could not load comments");
        assert!(matches!(screen.comments(), CommentFeed::Unavailable(_)));
    }
}
