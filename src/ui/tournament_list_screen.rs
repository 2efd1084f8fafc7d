use super::constants::{UiKey, UiStyle, UiText};
use super::traits::Screen;
use super::ui_callback::UiCallback;
use super::widgets::default_block;
use crate::api::{RankingScope, TournamentSummary};
use crate::types::AppResult;
use crossterm::event::KeyEvent;
use ratatui::{
    prelude::Rect,
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};

#[derive(Debug, Default)]
pub struct TournamentListScreen {
    tournaments: Vec<TournamentSummary>,
    index: usize,
    loading: bool,
    is_admin: bool,
}

impl TournamentListScreen {
    pub fn new(is_admin: bool) -> Self {
        Self {
            is_admin,
            loading: true,
            ..Default::default()
        }
    }

    pub fn set_loading(&mut self) {
        self.loading = true;
    }

    pub fn set_tournaments(&mut self, tournaments: Vec<TournamentSummary>) {
        self.tournaments = tournaments;
        self.loading = false;
        if self.index >= self.tournaments.len() {
            self.index = self.tournaments.len().saturating_sub(1);
        }
    }

    pub fn tournaments(&self) -> &[TournamentSummary] {
        &self.tournaments
    }

    pub fn selected(&self) -> Option<&TournamentSummary> {
        self.tournaments.get(self.index)
    }

    fn next_index(&mut self) {
        if !self.tournaments.is_empty() {
            self.index = (self.index + 1) % self.tournaments.len();
        }
    }

    fn previous_index(&mut self) {
        if !self.tournaments.is_empty() {
            self.index = (self.index + self.tournaments.len() - 1) % self.tournaments.len();
        }
    }
}

impl Screen for TournamentListScreen {
    fn name(&self) -> &str {
        "Tournaments"
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) -> AppResult<()> {
        let block = default_block().title(" Pick a tournament ");

        if self.loading {
            frame.render_widget(Paragraph::new(UiText::LOADING).centered().block(block), area);
            return Ok(());
        }

        if self.tournaments.is_empty() {
            frame.render_widget(
                Paragraph::new(UiText::NO_TOURNAMENTS).centered().block(block),
                area,
            );
            return Ok(());
        }

        let items = self
            .tournaments
            .iter()
            .map(|tournament| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("#{:<5}", tournament.id), UiStyle::UNSELECTABLE),
                    Span::raw(tournament.title.clone()),
                ]))
            })
            .collect::<Vec<ListItem>>();

        let list = List::new(items)
            .block(block)
            .highlight_style(UiStyle::SELECTED)
            .highlight_symbol("> ");

        let mut state = ListState::default().with_selected(Some(self.index));
        frame.render_stateful_widget(list, area, &mut state);
        Ok(())
    }

    fn handle_key_events(&mut self, key_event: KeyEvent) -> Option<UiCallback> {
        match key_event.code {
            UiKey::NEXT_SELECTION => self.next_index(),
            UiKey::PREVIOUS_SELECTION => self.previous_index(),
            UiKey::CONFIRM => {
                return self.selected().map(|tournament| UiCallback::StartTournament {
                    tournament_id: tournament.id,
                })
            }
            UiKey::REFRESH => return Some(UiCallback::RefreshTournaments),
            UiKey::RANKING if self.is_admin => {
                let scope = match self.selected() {
                    Some(tournament) => RankingScope::Tournament(tournament.id),
                    None => RankingScope::All,
                };
                return Some(UiCallback::OpenRanking { scope });
            }
            _ => {}
        }
        None
    }

    fn footer_spans(&self) -> Vec<Span<'static>> {
        let mut spans = vec![
            Span::styled(" ↑/↓ ", UiStyle::HIGHLIGHT),
            Span::raw("move "),
            Span::styled(" Enter ", UiStyle::HIGHLIGHT),
            Span::raw("play "),
            Span::styled(" R ", UiStyle::HIGHLIGHT),
            Span::raw("refresh "),
        ];
        if self.is_admin {
            spans.push(Span::styled(" K ", UiStyle::HIGHLIGHT));
            spans.push(Span::raw("rankings "));
        }
        spans
    }
}
