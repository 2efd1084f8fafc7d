use crate::types::CandidateId;

#[derive(Debug, thiserror::Error)]
pub enum BracketError {
    #[error("Not enough candidates to play: found {found}, need at least 2.")]
    InsufficientCandidates { found: usize },
    #[error("Could not load candidates: {0:#}")]
    CandidateSource(anyhow::Error),
    #[error("Could not record selection: {0:#}")]
    SelectionRecording(anyhow::Error),
    #[error("Candidate {candidate_id} is not part of the current match.")]
    InvalidSelection { candidate_id: CandidateId },
    #[error("There is no match waiting for a selection.")]
    NoPendingMatch,
    #[error("There is no bye waiting for confirmation.")]
    NoPendingBye,
    #[error("Bracket has not been initialized.")]
    NotInitialized,
    #[error("Bracket has already been initialized.")]
    AlreadyInitialized,
    #[error("Bracket is over.")]
    Terminated,
    #[error("Bracket has no candidates left to pair.")]
    Exhausted,
}

impl BracketError {
    /// Errors that end the playthrough before the first match.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::InsufficientCandidates { .. } | Self::CandidateSource(_)
        )
    }
}
