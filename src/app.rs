use crate::api::{ApiClient, RankingScope, TournamentResult, User};
use crate::bracket::Playthrough;
use crate::crossterm_event_handler::start_event_handler;
use crate::tui::{TerminalEvent, Tui};
use crate::types::{AppResult, CandidateId, TournamentId};
use crate::ui::popup_message::PopupMessage;
use crate::ui::ui::{Ui, UiState};
use crate::ui::ui_callback::UiCallback;
use anyhow::anyhow;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use log::{error, info};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

const EVENT_CHANNEL_SIZE: usize = 64;

#[derive(Debug)]
pub enum AppEvent {
    TerminalEvent(TerminalEvent),
}

#[derive(Debug, PartialEq)]
pub enum AppState {
    Started,
    Quitting,
}

#[derive(Debug)]
pub struct App {
    pub state: AppState,
    pub ui: Ui,
    api: ApiClient,
    user: User,
    seed: Option<u64>,
    initial_tournament: Option<TournamentId>,
    playthrough: Option<Playthrough<ApiClient>>,
    cancellation_token: CancellationToken,
}

impl App {
    pub fn new(
        api: ApiClient,
        user: User,
        seed: Option<u64>,
        initial_tournament: Option<TournamentId>,
    ) -> Self {
        let ui = Ui::new(user.nickname.clone(), user.is_admin());
        Self {
            state: AppState::Started,
            ui,
            api,
            user,
            seed,
            initial_tournament,
            playthrough: None,
            cancellation_token: CancellationToken::new(),
        }
    }

    pub async fn run(&mut self, mut tui: Tui) -> AppResult<()> {
        let (event_sender, mut event_receiver) = mpsc::channel(EVENT_CHANNEL_SIZE);
        let event_handler = start_event_handler(event_sender, self.cancellation_token.clone());

        self.handle_callback(UiCallback::RefreshTournaments).await;
        if let Some(tournament_id) = self.initial_tournament.take() {
            self.handle_callback(UiCallback::StartTournament { tournament_id })
                .await;
        }
        if let Err(e) = tui.draw(&mut self.ui) {
            error!("Drawing error: {e}");
        }

        while self.state != AppState::Quitting {
            let Some(app_event) = event_receiver.recv().await else {
                info!("Terminal events closed");
                break;
            };

            match app_event {
                AppEvent::TerminalEvent(TerminalEvent::Key(key_event)) => {
                    self.handle_key_events(key_event).await
                }
                AppEvent::TerminalEvent(TerminalEvent::Mouse(mouse_event)) => {
                    self.handle_mouse_events(mouse_event).await
                }
                AppEvent::TerminalEvent(TerminalEvent::Resize(w, h)) => tui.resize((w, h))?,
            }

            if let Err(e) = tui.draw(&mut self.ui) {
                error!("Drawing error: {e}");
            }
        }

        info!("App loop closed");
        self.cancellation_token.cancel();
        if let Err(e) = event_handler.await {
            error!("Terminal event handler failed: {e}");
        }
        tui.exit()?;
        Ok(())
    }

    pub async fn start_tournament(&mut self, tournament_id: TournamentId) -> AppResult<Option<String>> {
        let title = self.tournament_title(tournament_id);

        info!("Starting tournament {tournament_id} ({title})");
        self.ui.bracket_screen.reset(tournament_id, title);
        self.ui.set_state(UiState::Bracket);

        let mut playthrough = Playthrough::new(
            tournament_id,
            self.user.user_id,
            self.api.clone(),
            self.seed,
        );
        let started = playthrough.start(&self.api, &mut self.ui).await;
        self.playthrough = Some(playthrough);

        match started {
            Ok(()) => Ok(None),
            // Already reported through the presenter.
            Err(e) if e.is_fatal() => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub async fn select_candidate(&mut self, candidate_id: CandidateId) -> AppResult<Option<String>> {
        let playthrough = self
            .playthrough
            .as_mut()
            .ok_or(anyhow!("No tournament in progress"))?;
        playthrough.select(candidate_id, &mut self.ui).await?;
        Ok(None)
    }

    pub fn confirm_bye(&mut self) -> AppResult<Option<String>> {
        let playthrough = self
            .playthrough
            .as_mut()
            .ok_or(anyhow!("No tournament in progress"))?;
        playthrough.confirm_bye(&mut self.ui)?;
        Ok(None)
    }

    pub async fn refresh_tournaments(&mut self) -> AppResult<Option<String>> {
        self.ui.tournament_list_screen.set_loading();
        match self.api.tournaments().await {
            Ok(tournaments) => {
                info!("Fetched {} tournaments", tournaments.len());
                self.ui.tournament_list_screen.set_tournaments(tournaments);
                Ok(None)
            }
            Err(e) => {
                self.ui.tournament_list_screen.set_tournaments(vec![]);
                Err(anyhow!("Could not load tournaments: {e}"))
            }
        }
    }

    pub async fn open_ranking(&mut self, scope: RankingScope) -> AppResult<Option<String>> {
        if !self.user.is_admin() {
            return Err(anyhow!("Rankings are only available to the admin"));
        }

        let ranks = self.api.ranking(scope).await?;
        self.ui.ranking_screen.set_ranks(scope, ranks);
        self.ui.set_state(UiState::Ranking);
        Ok(None)
    }

    pub async fn post_comment(
        &mut self,
        tournament_id: TournamentId,
        content: &str,
    ) -> AppResult<Option<String>> {
        self.api
            .post_comment(tournament_id, &self.user, content)
            .await
            .map_err(|e| anyhow!("Could not post the comment: {e}"))?;
        info!("{} commented on tournament {tournament_id}", self.user.nickname);

        self.ui.result_screen.comment_posted();
        self.load_comments(tournament_id).await;
        Ok(None)
    }

    pub fn back_to_list(&mut self) {
        self.playthrough = None;
        self.ui.set_state(UiState::Tournaments);
    }

    pub fn quit(&mut self) {
        info!("Quitting");
        self.state = AppState::Quitting;
        self.cancellation_token.cancel();
    }

    fn tournament_title(&self, tournament_id: TournamentId) -> String {
        self.ui
            .tournament_list_screen
            .tournaments()
            .iter()
            .find(|tournament| tournament.id == tournament_id)
            .map(|tournament| tournament.title.clone())
            .unwrap_or_else(|| format!("Tournament #{tournament_id}"))
    }

    async fn show_result(&mut self, tournament_id: TournamentId, winner_id: CandidateId) {
        let title = self.tournament_title(tournament_id);
        // The finished session is discarded once its result is on screen.
        let local_winner = self
            .playthrough
            .take()
            .and_then(|playthrough| playthrough.session().winner().cloned());

        let result = match self.api.result(tournament_id, winner_id).await {
            Ok(result) => result,
            Err(e) => {
                error!("Could not fetch result of tournament {tournament_id}: {e}");
                self.ui
                    .push_popup(PopupMessage::error(format!("Could not fetch the result: {e}")));

                // Still show the local winner.
                let Some(winner) = local_winner else {
                    return;
                };
                TournamentResult {
                    winner,
                    top_winner_nicknames: vec![],
                }
            }
        };

        self.ui
            .result_screen
            .set_result(tournament_id, title, result);
        self.ui.set_state(UiState::Result);
        self.load_comments(tournament_id).await;
    }

    async fn load_comments(&mut self, tournament_id: TournamentId) {
        match self.api.comments(tournament_id).await {
            Ok(comments) => {
                info!("Fetched {} comments for tournament {tournament_id}", comments.len());
                self.ui.result_screen.set_comments(comments);
            }
            Err(e) => {
                error!("Could not fetch comments of tournament {tournament_id}: {e}");
                self.ui
                    .result_screen
                    .set_comments_unavailable(format!("Could not load comments: {e}"));
            }
        }
    }

    async fn handle_callback(&mut self, callback: UiCallback) {
        match callback.call(self).await {
            Ok(Some(text)) => self.ui.push_popup(PopupMessage::notice(text)),
            Ok(None) => {}
            Err(e) => {
                error!("{callback:?} failed: {e}");
                self.ui.push_popup(PopupMessage::error(e.to_string()));
            }
        }

        if let Some((tournament_id, winner_id)) = self.ui.take_pending_result() {
            self.show_result(tournament_id, winner_id).await;
        }
    }

    async fn handle_key_events(&mut self, key_event: KeyEvent) {
        match key_event.code {
            KeyCode::Char('c') | KeyCode::Char('C')
                if key_event.modifiers == KeyModifiers::CONTROL =>
            {
                self.quit();
            }
            _ => {
                if let Some(callback) = self.ui.handle_key_events(key_event) {
                    self.handle_callback(callback).await;
                }
            }
        }
    }

    async fn handle_mouse_events(&mut self, mouse_event: MouseEvent) {
        if let Some(callback) = self.ui.handle_mouse_events(mouse_event) {
            self.handle_callback(callback).await;
        }
    }
}
