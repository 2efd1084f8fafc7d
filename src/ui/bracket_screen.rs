use super::constants::{UiKey, UiStyle, UiText, CANDIDATE_CARD_HEIGHT, CANDIDATE_CARD_WIDTH};
use super::traits::Screen;
use super::ui_callback::UiCallback;
use super::widgets::{candidate_card, centered_rect, default_block};
use crate::bracket::{Candidate, RoundLabel};
use crate::types::{AppResult, CandidateId, TournamentId};
use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Constraint, Layout, Position},
    prelude::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

#[derive(Debug, Clone, PartialEq)]
pub enum BracketView {
    Loading {
        tournament_id: TournamentId,
    },
    Match {
        first: Candidate,
        second: Candidate,
        label: RoundLabel,
        match_number: usize,
    },
    Bye {
        candidate: Candidate,
        label: RoundLabel,
    },
    Complete {
        tournament_id: TournamentId,
        winner_id: CandidateId,
    },
    Failed {
        message: String,
    },
}

impl Default for BracketView {
    fn default() -> Self {
        Self::Failed {
            message: "No tournament selected.".to_string(),
        }
    }
}

#[derive(Debug, Default)]
pub struct BracketScreen {
    title: String,
    view: BracketView,
    // Last rendered card areas, used to resolve mouse clicks.
    card_rects: [Rect; 2],
}

impl BracketScreen {
    pub fn reset(&mut self, tournament_id: TournamentId, title: impl Into<String>) {
        self.title = title.into();
        self.view = BracketView::Loading { tournament_id };
        self.card_rects = [Rect::default(); 2];
    }

    pub fn view(&self) -> &BracketView {
        &self.view
    }

    pub fn set_view(&mut self, view: BracketView) {
        self.view = view;
    }

    fn header(&self) -> String {
        match &self.view {
            BracketView::Loading { tournament_id } => {
                format!("Loading tournament {tournament_id}...")
            }
            BracketView::Match {
                label,
                match_number,
                ..
            } => format!("{label}: match {match_number}"),
            BracketView::Bye { label, .. } => format!("{label}: bye"),
            BracketView::Complete { .. } => "We have a winner!".to_string(),
            BracketView::Failed { .. } => "Cannot play this tournament".to_string(),
        }
    }

    fn pick(&self, slot: usize) -> Option<UiCallback> {
        match &self.view {
            BracketView::Match { first, second, .. } => {
                let candidate = if slot == 0 { first } else { second };
                Some(UiCallback::SelectCandidate {
                    candidate_id: candidate.id,
                })
            }
            // Only the candidate itself confirms a bye, the empty slot does nothing.
            BracketView::Bye { .. } if slot == 0 => Some(UiCallback::ConfirmBye),
            _ => None,
        }
    }

    fn render_cards(&mut self, frame: &mut Frame, area: Rect) {
        let split = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);
        self.card_rects = [
            centered_rect(split[0], CANDIDATE_CARD_WIDTH, CANDIDATE_CARD_HEIGHT),
            centered_rect(split[1], CANDIDATE_CARD_WIDTH, CANDIDATE_CARD_HEIGHT),
        ];

        match &self.view {
            BracketView::Match { first, second, .. } => {
                frame.render_widget(candidate_card(first, "1 / ←", false), self.card_rects[0]);
                frame.render_widget(candidate_card(second, "2 / →", false), self.card_rects[1]);
            }
            BracketView::Bye { candidate, .. } => {
                frame.render_widget(candidate_card(candidate, "1 / ← / Enter", true), self.card_rects[0]);
                frame.render_widget(
                    Paragraph::new(vec![
                        Line::from(""),
                        Line::from(Span::styled(UiText::BYE, UiStyle::WARNING)),
                        Line::from(""),
                        Line::from(UiText::BYE_HINT),
                    ])
                    .centered()
                    .wrap(Wrap { trim: true })
                    .block(default_block().border_style(UiStyle::UNSELECTABLE)),
                    self.card_rects[1],
                );
            }
            _ => {}
        }
    }
}

impl Screen for BracketScreen {
    fn name(&self) -> &str {
        "Bracket"
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) -> AppResult<()> {
        let split = Layout::vertical([Constraint::Length(3), Constraint::Min(6)]).split(area);

        frame.render_widget(
            Paragraph::new(Span::styled(self.header(), UiStyle::HEADER))
                .centered()
                .block(default_block().title(format!(" {} ", self.title))),
            split[0],
        );

        match &self.view {
            BracketView::Match { .. } | BracketView::Bye { .. } => {
                self.render_cards(frame, split[1]);
            }
            BracketView::Loading { .. } | BracketView::Complete { .. } => {
                self.card_rects = [Rect::default(); 2];
                frame.render_widget(
                    Paragraph::new(UiText::LOADING).centered().block(default_block()),
                    split[1],
                );
            }
            BracketView::Failed { message } => {
                self.card_rects = [Rect::default(); 2];
                frame.render_widget(
                    Paragraph::new(Span::styled(message.clone(), UiStyle::ERROR))
                        .centered()
                        .wrap(Wrap { trim: true })
                        .block(default_block()),
                    split[1],
                );
            }
        }
        Ok(())
    }

    fn handle_key_events(&mut self, key_event: KeyEvent) -> Option<UiCallback> {
        match key_event.code {
            UiKey::PICK_LEFT | UiKey::PICK_FIRST => self.pick(0),
            UiKey::PICK_RIGHT | UiKey::PICK_SECOND => self.pick(1),
            UiKey::CONFIRM if matches!(self.view, BracketView::Bye { .. }) => self.pick(0),
            // Leaving mid-bracket abandons it; nothing more is recorded.
            UiKey::BACK
                if matches!(
                    self.view,
                    BracketView::Match { .. }
                        | BracketView::Bye { .. }
                        | BracketView::Failed { .. }
                ) =>
            {
                Some(UiCallback::BackToList)
            }
            _ => None,
        }
    }

    fn handle_mouse_events(&mut self, mouse_event: MouseEvent) -> Option<UiCallback> {
        if mouse_event.kind != MouseEventKind::Down(MouseButton::Left) {
            return None;
        }
        let position = Position::new(mouse_event.column, mouse_event.row);
        let slot = self
            .card_rects
            .iter()
            .position(|rect| rect.contains(position))?;
        self.pick(slot)
    }

    fn footer_spans(&self) -> Vec<Span<'static>> {
        match self.view {
            BracketView::Match { .. } => vec![
                Span::styled(" ←/1 ", UiStyle::HIGHLIGHT),
                Span::raw("pick left "),
                Span::styled(" →/2 ", UiStyle::HIGHLIGHT),
                Span::raw("pick right "),
                Span::raw("or click a card "),
                Span::styled(" Backspace ", UiStyle::HIGHLIGHT),
                Span::raw("leave "),
            ],
            BracketView::Bye { .. } => vec![
                Span::styled(" Enter ", UiStyle::HIGHLIGHT),
                Span::raw("advance the candidate "),
                Span::styled(" Backspace ", UiStyle::HIGHLIGHT),
                Span::raw("leave "),
            ],
            BracketView::Failed { .. } => vec![
                Span::styled(" Backspace ", UiStyle::HIGHLIGHT),
                Span::raw("back to the list "),
            ],
            _ => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{BracketScreen, BracketView};
    use crate::bracket::{Candidate, RoundLabel};
    use crate::ui::{traits::Screen, ui_callback::UiCallback};
    use crossterm::event::{
        KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    };
    use ratatui::layout::Rect;

    fn match_view() -> BracketView {
        BracketView::Match {
            first: Candidate::new(10, "Left", ""),
            second: Candidate::new(20, "Right", ""),
            label: RoundLabel::Of(8),
            match_number: 2,
        }
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_keys_pick_candidates() {
        let mut screen = BracketScreen::default();
        screen.set_view(match_view());
        assert_eq!(
            screen.handle_key_events(KeyEvent::from(KeyCode::Left)),
            Some(UiCallback::SelectCandidate { candidate_id: 10 })
        );
        assert_eq!(
            screen.handle_key_events(KeyEvent::from(KeyCode::Char('2'))),
            Some(UiCallback::SelectCandidate { candidate_id: 20 })
        );
        assert_eq!(screen.handle_key_events(KeyEvent::from(KeyCode::Enter)), None);
        assert_eq!(screen.header(), "8-way: match 2");
    }

    #[test]
    fn test_bye_needs_the_candidate_slot() {
        let mut screen = BracketScreen::default();
        screen.set_view(BracketView::Bye {
            candidate: Candidate::new(3, "Alone", ""),
            label: RoundLabel::Final,
        });
        assert_eq!(screen.handle_key_events(KeyEvent::from(KeyCode::Right)), None);
        assert_eq!(
            screen.handle_key_events(KeyEvent::from(KeyCode::Enter)),
            Some(UiCallback::ConfirmBye)
        );
        assert_eq!(screen.header(), "final: bye");
    }

    #[test]
    fn test_mouse_clicks_hit_cards() {
        let mut screen = BracketScreen::default();
        screen.set_view(match_view());
        screen.card_rects = [Rect::new(0, 0, 10, 5), Rect::new(20, 0, 10, 5)];

        assert_eq!(
            screen.handle_mouse_events(click(22, 3)),
            Some(UiCallback::SelectCandidate { candidate_id: 20 })
        );
        assert_eq!(screen.handle_mouse_events(click(15, 3)), None);
    }

    #[test]
    fn test_failed_view_goes_back() {
        let mut screen = BracketScreen::default();
        assert_eq!(
            screen.handle_key_events(KeyEvent::from(KeyCode::Backspace)),
            Some(UiCallback::BackToList)
        );
        screen.reset(4, "Ramen");
        assert_eq!(*screen.view(), BracketView::Loading { tournament_id: 4 });
        assert_eq!(screen.handle_key_events(KeyEvent::from(KeyCode::Backspace)), None);
    }

    #[test]
    fn test_backspace_leaves_a_bracket_in_progress() {
        let mut screen = BracketScreen::default();
        screen.set_view(match_view());
        assert_eq!(
            screen.handle_key_events(KeyEvent::from(KeyCode::Backspace)),
            Some(UiCallback::BackToList)
        );

        screen.set_view(BracketView::Bye {
            candidate: Candidate::new(3, "Alone", ""),
            label: RoundLabel::Of(4),
        });
        assert_eq!(
            screen.handle_key_events(KeyEvent::from(KeyCode::Backspace)),
            Some(UiCallback::BackToList)
        );
        assert!(screen
            .footer_spans()
            .iter()
            .any(|span| span.content.contains("Backspace")));

        screen.set_view(BracketView::Complete {
            tournament_id: 4,
            winner_id: 3,
        });
        assert_eq!(screen.handle_key_events(KeyEvent::from(KeyCode::Backspace)), None);
    }
}
