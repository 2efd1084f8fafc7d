pub mod client;
pub mod dto;

pub use client::{ApiClient, ApiError, DEFAULT_API_BASE_URL, DEFAULT_REQUEST_TIMEOUT};
pub use dto::{
    CandidateRank, Comment, RankingScope, TournamentDetail, TournamentResult, TournamentSummary,
    User, MAX_COMMENT_LENGTH,
};
