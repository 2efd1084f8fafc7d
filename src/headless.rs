use crate::api::{ApiClient, User};
use crate::bracket::{
    BracketError, Candidate, CandidateSource, Playthrough, Presenter, RoundLabel,
    SelectionRecorder,
};
use crate::types::{AppResult, CandidateId, TournamentId};
use anyhow::anyhow;
use itertools::Itertools;
use log::{error, info, warn};

#[derive(Debug, Clone, Copy, PartialEq)]
enum AutoAction {
    Pick(CandidateId),
    ConfirmBye,
}

/// Plays the bracket on its own: always picks the first presented candidate
/// and confirms every bye.
#[derive(Debug, Default)]
pub struct AutoPresenter {
    next_action: Option<AutoAction>,
    matches_played: usize,
    byes: usize,
    winner_id: Option<CandidateId>,
}

impl AutoPresenter {
    pub fn matches_played(&self) -> usize {
        self.matches_played
    }

    pub fn byes(&self) -> usize {
        self.byes
    }

    pub fn winner_id(&self) -> Option<CandidateId> {
        self.winner_id
    }
}

impl Presenter for AutoPresenter {
    fn on_match_ready(
        &mut self,
        first: &Candidate,
        second: &Candidate,
        label: RoundLabel,
        match_number: usize,
    ) {
        info!(
            "{label}: match {match_number}, {} vs {}, picking {}",
            first.name, second.name, first.name
        );
        self.next_action = Some(AutoAction::Pick(first.id));
    }

    fn on_bye_ready(&mut self, candidate: &Candidate, label: RoundLabel) {
        info!("{label}: bye for {}", candidate.name);
        self.next_action = Some(AutoAction::ConfirmBye);
    }

    fn on_tournament_complete(&mut self, tournament_id: TournamentId, winner_id: CandidateId) {
        info!("Tournament {tournament_id} won by candidate {winner_id}");
        self.next_action = None;
        self.winner_id = Some(winner_id);
    }

    fn on_init_error(&mut self, error: &BracketError) {
        error!("Cannot play: {error}");
        self.next_action = None;
    }

    fn on_notice(&mut self, message: &str) {
        warn!("{message}");
    }
}

/// Drives `playthrough` to completion and returns the winner.
pub async fn auto_play<S, R>(
    playthrough: &mut Playthrough<R>,
    source: &S,
    presenter: &mut AutoPresenter,
) -> AppResult<Candidate>
where
    S: CandidateSource,
    R: SelectionRecorder,
{
    playthrough.start(source, presenter).await?;

    while let Some(action) = presenter.next_action.take() {
        match action {
            AutoAction::Pick(candidate_id) => {
                presenter.matches_played += 1;
                playthrough.select(candidate_id, presenter).await?;
            }
            AutoAction::ConfirmBye => {
                presenter.byes += 1;
                playthrough.confirm_bye(presenter)?;
            }
        }
    }

    playthrough.session().winner().cloned().ok_or(anyhow!(
        "Tournament {} stopped before a winner was picked",
        playthrough.tournament_id()
    ))
}

pub async fn run_headless(
    api: &ApiClient,
    user: &User,
    tournament_id: TournamentId,
    seed: Option<u64>,
) -> AppResult<()> {
    let mut playthrough = Playthrough::new(tournament_id, user.user_id, api.clone(), seed);
    let mut presenter = AutoPresenter::default();
    let winner = auto_play(&mut playthrough, api, &mut presenter).await?;

    println!(
        "Tournament {tournament_id}: {} matches, {} byes, winner {} (#{})",
        presenter.matches_played(),
        presenter.byes(),
        winner.name,
        winner.id
    );

    match api.result(tournament_id, winner.id).await {
        Ok(result) if result.top_winner_nicknames.is_empty() => {
            println!("Nobody else crowned {} yet.", result.winner.name)
        }
        Ok(result) => println!(
            "Also crowned by: {}",
            result.top_winner_nicknames.iter().join(", ")
        ),
        Err(e) => warn!("Could not fetch result of tournament {tournament_id}: {e}"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{auto_play, AutoPresenter};
    use crate::bracket::{
        Candidate, CandidateSource, Playthrough, SelectionRecord, SelectionRecorder,
    };
    use crate::types::{AppResult, TournamentId};
    use anyhow::anyhow;

    struct Roster(u64);

    impl CandidateSource for Roster {
        async fn fetch_candidates(&self, _: TournamentId) -> AppResult<Vec<Candidate>> {
            Ok((1..=self.0)
                .map(|id| Candidate::new(id, format!("C{id}"), ""))
                .collect())
        }
    }

    struct Unreachable;

    impl SelectionRecorder for Unreachable {
        async fn record_selection(&self, _: TournamentId, _: &SelectionRecord) -> AppResult<()> {
            Err(anyhow!("connection refused"))
        }
    }

    #[tokio::test]
    async fn test_auto_play_finishes_despite_recorder_failures() -> AppResult<()> {
        let mut playthrough = Playthrough::new(1, 9, Unreachable, Some(3));
        let mut presenter = AutoPresenter::default();
        let winner = auto_play(&mut playthrough, &Roster(6), &mut presenter).await?;

        assert_eq!(presenter.matches_played(), 5);
        assert_eq!(presenter.winner_id(), Some(winner.id));
        assert!(playthrough.is_finished());
        Ok(())
    }

    #[tokio::test]
    async fn test_auto_play_counts_byes() -> AppResult<()> {
        let mut playthrough = Playthrough::new(1, 9, Unreachable, Some(3));
        let mut presenter = AutoPresenter::default();
        auto_play(&mut playthrough, &Roster(5), &mut presenter).await?;

        // 5 in an 8-way round: 2 matches and a bye, then 3 in a 4-way round:
        // 1 match and a bye, then the final.
        assert_eq!(presenter.matches_played(), 4);
        assert_eq!(presenter.byes(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn test_auto_play_fails_on_single_candidate() {
        let mut playthrough = Playthrough::new(1, 9, Unreachable, None);
        let mut presenter = AutoPresenter::default();
        assert!(auto_play(&mut playthrough, &Roster(1), &mut presenter)
            .await
            .is_err());
        assert_eq!(presenter.winner_id(), None);
    }
}
