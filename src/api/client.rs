use super::dto::{
    CandidateRank, Comment, CommentRequest, ErrorBody, LoginRequest, RankingScope,
    TournamentDetail, TournamentResult, TournamentSummary, User,
};
use crate::bracket::{Candidate, CandidateSource, SelectionRecord, SelectionRecorder};
use crate::types::{AppResult, CandidateId, TournamentId};
use log::debug;
use reqwest::StatusCode;
use serde::{de::DeserializeOwned, Serialize};
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
    #[error("HTTP {status}: {message}")]
    Status { status: StatusCode, message: String },
}

/// Client for the tournament REST backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> AppResult<Self> {
        let http_client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        debug!("GET {path}");
        let response = self.http_client.get(self.url(path)).send().await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }

    async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<reqwest::Response, ApiError> {
        debug!("POST {path}");
        let response = self
            .http_client
            .post(self.url(path))
            .json(body)
            .send()
            .await?;
        check_status(response).await
    }

    pub async fn login(&self, nickname: &str, password: &str) -> Result<User, ApiError> {
        let response = self
            .post("/login", &LoginRequest { nickname, password })
            .await?;
        Ok(response.json().await?)
    }

    pub async fn tournaments(&self) -> Result<Vec<TournamentSummary>, ApiError> {
        self.get("/main").await
    }

    pub async fn tournament_detail(
        &self,
        tournament_id: TournamentId,
    ) -> Result<TournamentDetail, ApiError> {
        self.get(&format!("/worldcup/{tournament_id}")).await
    }

    // The backend answers 204 No Content, so the body is never read.
    pub async fn record_selection(
        &self,
        tournament_id: TournamentId,
        record: &SelectionRecord,
    ) -> Result<(), ApiError> {
        self.post(&format!("/worldcup/{tournament_id}/select"), record)
            .await?;
        Ok(())
    }

    pub async fn result(
        &self,
        tournament_id: TournamentId,
        winner_id: CandidateId,
    ) -> Result<TournamentResult, ApiError> {
        self.get(&format!("/result/{tournament_id}/{winner_id}"))
            .await
    }

    pub async fn comments(&self, tournament_id: TournamentId) -> Result<Vec<Comment>, ApiError> {
        self.get(&format!("/result/{tournament_id}/comments")).await
    }

    // Answered with 204 No Content as well.
    pub async fn post_comment(
        &self,
        tournament_id: TournamentId,
        user: &User,
        content: &str,
    ) -> Result<(), ApiError> {
        let request = CommentRequest {
            content,
            user_id: user.user_id,
            nickname: &user.nickname,
        };
        self.post(&format!("/result/{tournament_id}/comments"), &request)
            .await?;
        Ok(())
    }

    pub async fn ranking(&self, scope: RankingScope) -> Result<Vec<CandidateRank>, ApiError> {
        self.get(&format!("/admin/rank/{scope}")).await
    }
}

impl CandidateSource for ApiClient {
    async fn fetch_candidates(&self, tournament_id: TournamentId) -> AppResult<Vec<Candidate>> {
        Ok(self.tournament_detail(tournament_id).await?.candidates)
    }
}

impl SelectionRecorder for ApiClient {
    async fn record_selection(
        &self,
        tournament_id: TournamentId,
        record: &SelectionRecord,
    ) -> AppResult<()> {
        ApiClient::record_selection(self, tournament_id, record).await?;
        Ok(())
    }
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Status {
        status,
        message: error_message(status, &body),
    })
}

fn error_message(status: StatusCode, body: &str) -> String {
    if let Some(message) = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.message)
        .filter(|message| !message.trim().is_empty())
    {
        return message;
    }

    let body = body.trim();
    if body.is_empty() {
        status.canonical_reason().unwrap_or("server error").to_string()
    } else {
        body.to_string()
    }
}
