use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use shared_types::{AppError, BackendConfig, Subject, UpdateSubjectRequest, User};
use std::fmt;
use std::time::Duration;

/// Failure talking to the subjects backend.
///
/// Callers treat every variant the same way; the detail only feeds logs.
#[derive(Debug)]
pub enum BackendError {
    /// Connection, TLS, or timeout failure before a response arrived.
    Transport(reqwest::Error),
    /// The backend answered with a non-success status.
    Status(StatusCode),
    /// The response body did not match the expected shape.
    Decode(reqwest::Error),
}

impl BackendError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            BackendError::Status(status) => Some(*status),
            _ => None,
        }
    }
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendError::Transport(e) => write!(f, "backend unreachable: {e}"),
            BackendError::Status(status) => write!(f, "backend returned {status}"),
            BackendError::Decode(e) => write!(f, "unexpected backend response: {e}"),
        }
    }
}

impl std::error::Error for BackendError {}

impl From<BackendError> for AppError {
    fn from(err: BackendError) -> Self {
        match err.status() {
            Some(StatusCode::UNAUTHORIZED) => AppError::unauthorized("Session is no longer valid"),
            Some(StatusCode::FORBIDDEN) => AppError::forbidden("Not allowed by the backend"),
            Some(StatusCode::NOT_FOUND) => AppError::not_found("Subject not found"),
            _ => AppError::backend(err.to_string()),
        }
    }
}

/// Bearer-authenticated client for the subjects REST backend.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone, Debug)]
pub struct BackendClient {
    http: reqwest::Client,
    config: BackendConfig,
}

impl BackendClient {
    pub fn new(config: BackendConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Falling back to default HTTP client");
                reqwest::Client::new()
            });
        Self { http, config }
    }

    pub fn base_url(&self) -> &str {
        &self.config.url
    }

    fn request(&self, method: Method, path: &str, token: &str) -> RequestBuilder {
        self.http
            .request(method, self.config.endpoint(path))
            .bearer_auth(token)
    }

    async fn send(builder: RequestBuilder) -> Result<reqwest::Response, BackendError> {
        let response = builder.send().await.map_err(BackendError::Transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::Status(status));
        }
        Ok(response)
    }

    async fn send_json<T: DeserializeOwned>(builder: RequestBuilder) -> Result<T, BackendError> {
        Self::send(builder)
            .await?
            .json::<T>()
            .await
            .map_err(BackendError::Decode)
    }

    /// `GET /users/me`: resolve the session token to a user.
    #[tracing::instrument(skip_all)]
    pub async fn current_user(&self, token: &str) -> Result<User, BackendError> {
        Self::send_json(self.request(Method::GET, "/users/me", token)).await
    }

    /// `GET /subjects`: every subject with its nested articles.
    #[tracing::instrument(skip_all)]
    pub async fn list_subjects(&self, token: &str) -> Result<Vec<Subject>, BackendError> {
        let subjects: Vec<Subject> =
            Self::send_json(self.request(Method::GET, "/subjects", token)).await?;
        tracing::info!(count = subjects.len(), "Fetched subjects");
        Ok(subjects)
    }

    /// `DELETE /subjects/{id}`: the response body is discarded.
    #[tracing::instrument(skip(self, token))]
    pub async fn delete_subject(&self, token: &str, id: &str) -> Result<(), BackendError> {
        let path = format!("/subjects/{}", urlencoding::encode(id));
        Self::send(self.request(Method::DELETE, &path, token)).await?;
        tracing::info!(subject_id = id, "Deleted subject");
        Ok(())
    }

    /// `PUT /subjects/{id}`: rename, returning the stored subject.
    #[tracing::instrument(skip(self, token, body))]
    pub async fn update_subject(
        &self,
        token: &str,
        id: &str,
        body: &UpdateSubjectRequest,
    ) -> Result<Subject, BackendError> {
        let path = format!("/subjects/{}", urlencoding::encode(id));
        Self::send_json(self.request(Method::PUT, &path, token).json(body)).await
    }

    /// Unauthenticated reachability probe used by `/health`.
    /// Any HTTP response counts as reachable.
    pub async fn probe(&self) -> Result<(), BackendError> {
        self.http
            .get(self.config.endpoint("/"))
            .send()
            .await
            .map(|_| ())
            .map_err(BackendError::Transport)
    }
}
