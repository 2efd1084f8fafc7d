use super::bracket_screen::{BracketScreen, BracketView};
use super::constants::{UiKey, UiStyle, MAX_POPUP_MESSAGES};
use super::popup_message::PopupMessage;
use super::ranking_screen::RankingScreen;
use super::result_screen::ResultScreen;
use super::tournament_list_screen::TournamentListScreen;
use super::traits::Screen;
use super::ui_callback::UiCallback;
use crate::bracket::{BracketError, Candidate, Presenter, RoundLabel};
use crate::types::{CandidateId, TournamentId};
use crossterm::event::{KeyEvent, MouseEvent};
use log::error;
use ratatui::{
    layout::{Constraint, Layout},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use strum_macros::Display;

#[derive(Debug, Default, Display, Clone, Copy, PartialEq)]
pub enum UiState {
    #[default]
    Tournaments,
    Bracket,
    Result,
    Ranking,
}

#[derive(Debug)]
pub struct Ui {
    pub state: UiState,
    pub tournament_list_screen: TournamentListScreen,
    pub bracket_screen: BracketScreen,
    pub result_screen: ResultScreen,
    pub ranking_screen: RankingScreen,
    nickname: String,
    popup_messages: Vec<PopupMessage>,
    // Set when a bracket completes, consumed by the app to fetch the result.
    pending_result: Option<(TournamentId, CandidateId)>,
}

impl Ui {
    pub fn new(nickname: impl Into<String>, is_admin: bool) -> Self {
        Self {
            state: UiState::default(),
            tournament_list_screen: TournamentListScreen::new(is_admin),
            bracket_screen: BracketScreen::default(),
            result_screen: ResultScreen::default(),
            ranking_screen: RankingScreen::default(),
            nickname: nickname.into(),
            popup_messages: vec![],
            pending_result: None,
        }
    }

    pub fn push_popup(&mut self, popup_message: PopupMessage) {
        // Avoid pushing twice the same popup
        if let Some(last_popup) = self.popup_messages.last() {
            match (&popup_message, last_popup) {
                (PopupMessage::Error { message, .. }, PopupMessage::Error { message: last, .. })
                | (
                    PopupMessage::Notice { message, .. },
                    PopupMessage::Notice { message: last, .. },
                ) if message == last => return,
                _ => {}
            }
        }

        self.popup_messages.push(popup_message);
        if self.popup_messages.len() > MAX_POPUP_MESSAGES {
            self.popup_messages.remove(0);
        }
    }

    pub fn close_popup(&mut self) {
        if !self.popup_messages.is_empty() {
            self.popup_messages.remove(0);
        }
    }

    pub fn popup_messages(&self) -> &[PopupMessage] {
        &self.popup_messages
    }

    pub fn set_state(&mut self, state: UiState) {
        self.state = state;
    }

    pub fn take_pending_result(&mut self) -> Option<(TournamentId, CandidateId)> {
        self.pending_result.take()
    }

    fn get_active_screen(&self) -> &dyn Screen {
        match self.state {
            UiState::Tournaments => &self.tournament_list_screen,
            UiState::Bracket => &self.bracket_screen,
            UiState::Result => &self.result_screen,
            UiState::Ranking => &self.ranking_screen,
        }
    }

    fn get_active_screen_mut(&mut self) -> &mut dyn Screen {
        match self.state {
            UiState::Tournaments => &mut self.tournament_list_screen,
            UiState::Bracket => &mut self.bracket_screen,
            UiState::Result => &mut self.result_screen,
            UiState::Ranking => &mut self.ranking_screen,
        }
    }

    pub fn handle_key_events(&mut self, key_event: KeyEvent) -> Option<UiCallback> {
        if key_event.code == UiKey::ESC {
            return Some(UiCallback::Quit);
        }

        // Popups take all input until they are closed.
        if !self.popup_messages.is_empty() {
            return match key_event.code {
                UiKey::CONFIRM | UiKey::BACK => Some(UiCallback::CloseUiPopup),
                _ => None,
            };
        }

        self.get_active_screen_mut().handle_key_events(key_event)
    }

    pub fn handle_mouse_events(&mut self, mouse_event: MouseEvent) -> Option<UiCallback> {
        if !self.popup_messages.is_empty() {
            return None;
        }
        self.get_active_screen_mut().handle_mouse_events(mouse_event)
    }

    /// Renders the user interface widgets.
    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let split = Layout::vertical([
            Constraint::Length(1), // header
            Constraint::Min(6),    // body
            Constraint::Length(1), // footer
        ])
        .split(area);

        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(" Ideal-type worldcup ", UiStyle::HEADER),
                Span::raw(format!("| {} | {}", self.get_active_screen().name(), self.nickname)),
            ])),
            split[0],
        );

        if let Err(e) = self.get_active_screen_mut().render(frame, split[1]) {
            error!("Failed to render {} screen: {e}", self.state);
        }

        let mut footer = vec![Span::styled(" Esc ", UiStyle::HIGHLIGHT), Span::raw("quit ")];
        footer.extend(self.get_active_screen().footer_spans());
        frame.render_widget(Paragraph::new(Line::from(footer)), split[2]);

        if let Some(popup_message) = self.popup_messages.first() {
            popup_message.render(frame, area);
        }
    }
}

impl Presenter for Ui {
    fn on_match_ready(
        &mut self,
        first: &Candidate,
        second: &Candidate,
        label: RoundLabel,
        match_number: usize,
    ) {
        self.bracket_screen.set_view(BracketView::Match {
            first: first.clone(),
            second: second.clone(),
            label,
            match_number,
        });
        self.state = UiState::Bracket;
    }

    fn on_bye_ready(&mut self, candidate: &Candidate, label: RoundLabel) {
        self.bracket_screen.set_view(BracketView::Bye {
            candidate: candidate.clone(),
            label,
        });
        self.state = UiState::Bracket;
    }

    fn on_tournament_complete(&mut self, tournament_id: TournamentId, winner_id: CandidateId) {
        self.bracket_screen.set_view(BracketView::Complete {
            tournament_id,
            winner_id,
        });
        self.pending_result = Some((tournament_id, winner_id));
    }

    fn on_init_error(&mut self, error: &BracketError) {
        let message = match error {
            BracketError::InsufficientCandidates { .. } => {
                "This tournament needs at least two candidates.".to_string()
            }
            _ => error.to_string(),
        };
        self.bracket_screen.set_view(BracketView::Failed {
            message: message.clone(),
        });
        self.state = UiState::Bracket;
        self.push_popup(PopupMessage::error(message));
    }

    fn on_notice(&mut self, message: &str) {
        self.push_popup(PopupMessage::notice(message));
    }
}
