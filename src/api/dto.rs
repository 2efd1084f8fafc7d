use crate::bracket::Candidate;
use crate::types::{CandidateId, CommentId, TournamentId, UserId};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const ADMIN_NICKNAME: &str = "admin";
// Width of the backend `content` column.
pub const MAX_COMMENT_LENGTH: usize = 500;

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub nickname: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: UserId,
    pub nickname: String,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.nickname == ADMIN_NICKNAME
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TournamentSummary {
    pub id: TournamentId,
    pub title: String,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TournamentDetail {
    pub id: TournamentId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TournamentResult {
    pub winner: Candidate,
    // Users whose final pick was the same winner.
    #[serde(default)]
    pub top_winner_nicknames: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CandidateRank {
    pub id: CandidateId,
    pub name: String,
    pub win_count: u32,
    pub total_selection_count: u32,
    #[serde(default)]
    pub top_winner_nicknames: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankingScope {
    All,
    Tournament(TournamentId),
}

impl fmt::Display for RankingScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Tournament(id) => write!(f, "{id}"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentRequest<'a> {
    pub content: &'a str,
    pub user_id: UserId,
    pub nickname: &'a str,
}

/// A comment left on a tournament result. The backend serves them newest first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,
    pub nickname: String,
    pub content: String,
    // Local date time without offset, e.g. `2025-03-01T18:04:12.123456`.
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Comment {
    pub fn posted_on(&self) -> Option<String> {
        self.created_at
            .as_deref()
            .and_then(|created_at| created_at.parse::<NaiveDateTime>().ok())
            .map(|created_at| created_at.format("%Y-%m-%d %H:%M").to_string())
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::{
        CandidateRank, Comment, CommentRequest, RankingScope, TournamentDetail, TournamentResult,
        User,
    };
    use crate::types::AppResult;
    use serde_json::json;

    #[test]
    fn test_detail_payload() -> AppResult<()> {
        let payload = r#"{
            "id": 12,
            "title": "Best ramen",
            "thumbnailUrl": null,
            "candidates": [
                {"id": 1, "name": "Shoyu", "imagePath": "https://cdn/1.png"},
                {"id": 2, "name": "Miso", "imagePath": "https://cdn/2.png"}
            ]
        }"#;
        let detail: TournamentDetail = serde_json::from_str(payload)?;
        assert_eq!(detail.id, 12);
        assert_eq!(detail.thumbnail_url, None);
        assert_eq!(detail.candidates.len(), 2);
        assert_eq!(detail.candidates[1].name, "Miso");
        Ok(())
    }

    #[test]
    fn test_result_payload_without_nicknames() -> AppResult<()> {
        let payload = r#"{"winner": {"id": 2, "name": "Miso", "imagePath": "/2.png"}}"#;
        let result: TournamentResult = serde_json::from_str(payload)?;
        assert_eq!(result.winner.id, 2);
        assert!(result.top_winner_nicknames.is_empty());
        Ok(())
    }

    #[test]
    fn test_rank_payload() -> AppResult<()> {
        let payload = r#"[{"id": 4, "name": "Tonkotsu", "winCount": 3,
            "totalSelectionCount": 17, "topWinnerNicknames": ["mina", "관리자"]}]"#;
        let ranks: Vec<CandidateRank> = serde_json::from_str(payload)?;
        assert_eq!(ranks[0].win_count, 3);
        assert_eq!(ranks[0].total_selection_count, 17);
        assert_eq!(ranks[0].top_winner_nicknames.len(), 2);
        Ok(())
    }

    #[test]
    fn test_admin_user() -> AppResult<()> {
        let user: User = serde_json::from_str(r#"{"userId": 1, "nickname": "admin"}"#)?;
        assert!(user.is_admin());
        let user: User = serde_json::from_str(r#"{"userId": 2, "nickname": "mina"}"#)?;
        assert!(!user.is_admin());
        Ok(())
    }

    #[test]
    fn test_ranking_scope_path_segment() {
        assert_eq!(RankingScope::All.to_string(), "all");
        assert_eq!(RankingScope::Tournament(9).to_string(), "9");
    }

    #[test]
    fn test_comment_request_payload() -> AppResult<()> {
        let request = CommentRequest {
            content: "Shoyu forever",
            user_id: 7,
            nickname: "mina",
        };
        assert_eq!(
            serde_json::to_value(&request)?,
            json!({"content": "Shoyu forever", "userId": 7, "nickname": "mina"})
        );
        Ok(())
    }

    #[test]
    fn test_comments_payload() -> AppResult<()> {
        let payload = r#"[
            {"id": 3, "nickname": "joon", "content": "Miso wins", "createdAt": "2025-03-01T18:04:12.123456"},
            {"id": 1, "nickname": "탈퇴한 사용자", "content": "first", "createdAt": null}
        ]"#;
        let comments: Vec<Comment> = serde_json::from_str(payload)?;
        assert_eq!(comments.len(), 2);
        assert_eq!(comments[0].posted_on().as_deref(), Some("2025-03-01 18:04"));
        assert_eq!(comments[1].posted_on(), None);
        assert_eq!(comments[1].content, "first");
        Ok(())
    }
}
