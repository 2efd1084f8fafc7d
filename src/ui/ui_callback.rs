use crate::api::RankingScope;
use crate::app::App;
use crate::types::{AppResult, CandidateId, TournamentId};

#[derive(Debug, Clone, PartialEq)]
pub enum UiCallback {
    StartTournament { tournament_id: TournamentId },
    SelectCandidate { candidate_id: CandidateId },
    ConfirmBye,
    RefreshTournaments,
    OpenRanking { scope: RankingScope },
    PostComment {
        tournament_id: TournamentId,
        content: String,
    },
    BackToList,
    CloseUiPopup,
    Quit,
}

impl UiCallback {
    pub async fn call(&self, app: &mut App) -> AppResult<Option<String>> {
        match self {
            Self::StartTournament { tournament_id } => app.start_tournament(*tournament_id).await,
            Self::SelectCandidate { candidate_id } => app.select_candidate(*candidate_id).await,
            Self::ConfirmBye => app.confirm_bye(),
            Self::RefreshTournaments => app.refresh_tournaments().await,
            Self::OpenRanking { scope } => app.open_ranking(*scope).await,
            Self::PostComment {
                tournament_id,
                content,
            } => app.post_comment(*tournament_id, content).await,
            Self::BackToList => {
                app.back_to_list();
                Ok(None)
            }
            Self::CloseUiPopup => {
                app.ui.close_popup();
                Ok(None)
            }
            Self::Quit => {
                app.quit();
                Ok(None)
            }
        }
    }
}
