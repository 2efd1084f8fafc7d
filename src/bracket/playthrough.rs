use super::{
    candidate::Candidate,
    error::BracketError,
    round::RoundLabel,
    session::{BracketSession, BracketStep},
};
use crate::types::{AppResult, CandidateId, TournamentId, UserId};
use log::{debug, error, warn};
use serde::{Deserialize, Serialize};

/// One decided match, as reported to the [`SelectionRecorder`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SelectionRecord {
    pub winner_id: CandidateId,
    pub loser_id: CandidateId,
    pub round: usize,
    pub user_id: UserId,
}

pub trait CandidateSource {
    fn fetch_candidates(
        &self,
        tournament_id: TournamentId,
    ) -> impl std::future::Future<Output = AppResult<Vec<Candidate>>> + Send;
}

/// Advisory telemetry: failures are reported but never stop the bracket.
pub trait SelectionRecorder {
    fn record_selection(
        &self,
        tournament_id: TournamentId,
        record: &SelectionRecord,
    ) -> impl std::future::Future<Output = AppResult<()>> + Send;
}

pub trait Presenter {
    fn on_match_ready(
        &mut self,
        first: &Candidate,
        second: &Candidate,
        label: RoundLabel,
        match_number: usize,
    );
    fn on_bye_ready(&mut self, candidate: &Candidate, label: RoundLabel);
    fn on_tournament_complete(&mut self, tournament_id: TournamentId, winner_id: CandidateId);
    fn on_init_error(&mut self, error: &BracketError);
    fn on_notice(&mut self, _message: &str) {}
}

/// Drives a [`BracketSession`] for one user, talking to the collaborators
/// and forwarding every resulting step to a [`Presenter`].
#[derive(Debug)]
pub struct Playthrough<R: SelectionRecorder> {
    session: BracketSession,
    recorder: R,
    user_id: UserId,
}

impl<R: SelectionRecorder> Playthrough<R> {
    pub fn new(
        tournament_id: TournamentId,
        user_id: UserId,
        recorder: R,
        seed: Option<u64>,
    ) -> Self {
        Self {
            session: BracketSession::new(tournament_id, seed),
            recorder,
            user_id,
        }
    }

    pub fn session(&self) -> &BracketSession {
        &self.session
    }

    pub fn tournament_id(&self) -> TournamentId {
        self.session.tournament_id()
    }

    pub fn is_finished(&self) -> bool {
        self.session.is_terminated()
    }

    pub async fn start<S: CandidateSource, P: Presenter>(
        &mut self,
        source: &S,
        presenter: &mut P,
    ) -> Result<(), BracketError> {
        let tournament_id = self.session.tournament_id();
        let candidates = match source.fetch_candidates(tournament_id).await {
            Ok(candidates) => candidates,
            Err(e) => {
                let err = BracketError::CandidateSource(e);
                error!("Tournament {tournament_id}: {err}");
                presenter.on_init_error(&err);
                return Err(err);
            }
        };

        match self.session.initialize(candidates) {
            Ok(step) => {
                Self::present(step, presenter);
                Ok(())
            }
            Err(err) => {
                error!("Tournament {tournament_id}: {err}");
                if err.is_fatal() {
                    presenter.on_init_error(&err);
                }
                Err(err)
            }
        }
    }

    pub async fn select<P: Presenter>(
        &mut self,
        candidate_id: CandidateId,
        presenter: &mut P,
    ) -> Result<(), BracketError> {
        if self.session.is_terminated() {
            debug!("Ignoring selection of {candidate_id}: bracket is over");
            return Ok(());
        }

        let (outcome, step) = self.session.record_selection(candidate_id)?;

        let record = SelectionRecord {
            winner_id: outcome.winner.id,
            loser_id: outcome.loser.id,
            round: outcome.round_size,
            user_id: self.user_id,
        };
        if let Err(e) = self
            .recorder
            .record_selection(self.session.tournament_id(), &record)
            .await
        {
            let err = BracketError::SelectionRecording(e);
            warn!("Tournament {}: {err}", self.session.tournament_id());
            presenter.on_notice(&err.to_string());
        }

        Self::present(step, presenter);
        Ok(())
    }

    pub fn confirm_bye<P: Presenter>(&mut self, presenter: &mut P) -> Result<(), BracketError> {
        if self.session.is_terminated() {
            debug!("Ignoring bye confirmation: bracket is over");
            return Ok(());
        }

        let step = self.session.record_bye_advance()?;
        Self::present(step, presenter);
        Ok(())
    }

    fn present<P: Presenter>(step: BracketStep, presenter: &mut P) {
        match step {
            BracketStep::Match {
                first,
                second,
                label,
                match_number,
            } => presenter.on_match_ready(&first, &second, label, match_number),
            BracketStep::Bye { candidate, label } => presenter.on_bye_ready(&candidate, label),
            BracketStep::Complete {
                tournament_id,
                winner,
            } => presenter.on_tournament_complete(tournament_id, winner.id),
        }
    }
}
