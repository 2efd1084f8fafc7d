use super::constants::{UiKey, UiStyle};
use super::traits::Screen;
use super::ui_callback::UiCallback;
use super::widgets::default_block;
use crate::api::{CandidateRank, RankingScope};
use crate::types::{AppResult, TournamentId};
use crossterm::event::KeyEvent;
use itertools::Itertools;
use ratatui::{
    layout::Constraint,
    prelude::Rect,
    text::Span,
    widgets::{Cell, Paragraph, Row, Table, TableState},
    Frame,
};

#[derive(Debug)]
pub struct RankingScreen {
    scope: RankingScope,
    // Tournament to come back to when toggling away from the global ranking.
    last_tournament: Option<TournamentId>,
    ranks: Vec<CandidateRank>,
    index: usize,
}

impl Default for RankingScreen {
    fn default() -> Self {
        Self {
            scope: RankingScope::All,
            last_tournament: None,
            ranks: vec![],
            index: 0,
        }
    }
}

impl RankingScreen {
    // Ranks are already sorted by the backend.
    pub fn set_ranks(&mut self, scope: RankingScope, ranks: Vec<CandidateRank>) {
        if let RankingScope::Tournament(id) = scope {
            self.last_tournament = Some(id);
        }
        self.scope = scope;
        self.ranks = ranks;
        self.index = 0;
    }

    pub fn scope(&self) -> RankingScope {
        self.scope
    }

    pub fn ranks(&self) -> &[CandidateRank] {
        &self.ranks
    }

    fn toggled_scope(&self) -> Option<RankingScope> {
        match self.scope {
            RankingScope::Tournament(_) => Some(RankingScope::All),
            RankingScope::All => self.last_tournament.map(RankingScope::Tournament),
        }
    }
}

impl Screen for RankingScreen {
    fn name(&self) -> &str {
        "Ranking"
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) -> AppResult<()> {
        let title = match self.scope {
            RankingScope::All => " Ranking: all tournaments ".to_string(),
            RankingScope::Tournament(id) => format!(" Ranking: tournament #{id} "),
        };

        if self.ranks.is_empty() {
            frame.render_widget(
                Paragraph::new("No selections recorded yet.")
                    .centered()
                    .block(default_block().title(title)),
                area,
            );
            return Ok(());
        }

        let header = Row::new(["#", "Name", "Wins", "Selections", "Crowned by"])
            .style(UiStyle::HEADER)
            .bottom_margin(1);

        let rows = self.ranks.iter().enumerate().map(|(position, rank)| {
            Row::new(vec![
                Cell::from(format!("{}", position + 1)),
                Cell::from(rank.name.clone()),
                Cell::from(rank.win_count.to_string()),
                Cell::from(rank.total_selection_count.to_string()),
                Cell::from(rank.top_winner_nicknames.iter().join(", "))
                    .style(UiStyle::UNSELECTABLE),
            ])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Length(4),
                Constraint::Min(16),
                Constraint::Length(6),
                Constraint::Length(11),
                Constraint::Min(16),
            ],
        )
        .header(header)
        .row_highlight_style(UiStyle::SELECTED)
        .block(default_block().title(title));

        let mut state = TableState::default().with_selected(Some(self.index));
        frame.render_stateful_widget(table, area, &mut state);
        Ok(())
    }

    fn handle_key_events(&mut self, key_event: KeyEvent) -> Option<UiCallback> {
        match key_event.code {
            UiKey::NEXT_SELECTION if !self.ranks.is_empty() => {
                self.index = (self.index + 1) % self.ranks.len();
                None
            }
            UiKey::PREVIOUS_SELECTION if !self.ranks.is_empty() => {
                self.index = (self.index + self.ranks.len() - 1) % self.ranks.len();
                None
            }
            UiKey::TOGGLE_RANKING_SCOPE => self
                .toggled_scope()
                .map(|scope| UiCallback::OpenRanking { scope }),
            UiKey::BACK => Some(UiCallback::BackToList),
            _ => None,
        }
    }

    fn footer_spans(&self) -> Vec<Span<'static>> {
        vec![
            Span::styled(" ↑/↓ ", UiStyle::HIGHLIGHT),
            Span::raw("move "),
            Span::styled(" A ", UiStyle::HIGHLIGHT),
            Span::raw("toggle scope "),
            Span::styled(" Backspace ", UiStyle::HIGHLIGHT),
            Span::raw("back "),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::RankingScreen;
    use crate::api::{CandidateRank, RankingScope};
    use crate::ui::{traits::Screen, ui_callback::UiCallback};
    use crossterm::event::{KeyCode, KeyEvent};

    fn rank(id: u64, win_count: u32, total_selection_count: u32) -> CandidateRank {
        CandidateRank {
            id,
            name: format!("Candidate {id}"),
            win_count,
            total_selection_count,
            top_winner_nicknames: vec![],
        }
    }

    #[test]
    fn test_ranks_keep_the_served_order() {
        let mut screen = RankingScreen::default();
        // Shown exactly as served.
        screen.set_ranks(
            RankingScope::Tournament(5),
            vec![rank(2, 5, 3), rank(1, 2, 10), rank(3, 2, 12)],
        );
        let ids = screen.ranks().iter().map(|r| r.id).collect::<Vec<_>>();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn test_toggle_scope_remembers_tournament() {
        let mut screen = RankingScreen::default();
        assert_eq!(
            screen.handle_key_events(KeyEvent::from(KeyCode::Char('A'))),
            None
        );

        screen.set_ranks(RankingScope::Tournament(5), vec![]);
        assert_eq!(
            screen.handle_key_events(KeyEvent::from(KeyCode::Char('A'))),
            Some(UiCallback::OpenRanking {
                scope: RankingScope::All
            })
        );

        screen.set_ranks(RankingScope::All, vec![]);
        assert_eq!(
            screen.handle_key_events(KeyEvent::from(KeyCode::Char('A'))),
            Some(UiCallback::OpenRanking {
                scope: RankingScope::Tournament(5)
            })
        );
    }

    #[test]
    fn test_backspace_goes_back() {
        let mut screen = RankingScreen::default();
        assert_eq!(
            screen.handle_key_events(KeyEvent::from(KeyCode::Backspace)),
            Some(UiCallback::BackToList)
        );
    }
}
