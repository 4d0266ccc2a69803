use crate::config::AppConfig;
use crate::error::ApiError;
use crate::guard::Navigator;
use crate::routes;
use crate::session::SessionStore;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use uuid::Uuid;

/// ApiClient
///
/// One HTTP client for the whole console. Every request runs the same fixed
/// pipeline, in this order:
///
/// 1. **sign**: attach the bearer token (when a session exists) and a fresh
///    `x-request-id` for server-side correlation.
/// 2. **send**: the actual round trip; transport failures map to
///    `ApiError::Network`.
/// 3. **observe unauthorized**: any 401 invalidates the session globally and
///    forces navigation back to the sign-in screen before the error surfaces.
/// 4. **map status**: remaining non-2xx statuses become typed errors carrying
///    the server's `message` body.
///
/// Screens call the verb helpers (`get`/`post`/`put`/`delete`) and never see a
/// raw status code.
pub struct ApiClient {
    http: Client,
    base: String,
    session: Arc<SessionStore>,
    navigator: Arc<Navigator>,
}

impl ApiClient {
    /// new
    ///
    /// Builds the client against the configured origin. The remote API lives
    /// under a fixed `/api` base path; callers pass paths relative to that.
    pub fn new(config: &AppConfig, session: Arc<SessionStore>, navigator: Arc<Navigator>) -> Self {
        let base = format!("{}/api", config.api_base_url.trim_end_matches('/'));
        Self {
            http: Client::new(),
            base,
            session,
            navigator,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// sign_request
    ///
    /// Pipeline stage 1. A pure transform of the outgoing request: bearer token
    /// if the session holds one, and a request id that is fresh per attempt so
    /// correlation never aliases across calls. Does no I/O.
    fn sign_request(&self, request: RequestBuilder) -> RequestBuilder {
        let request = match self.session.token() {
            Some(token) => request.header(AUTHORIZATION, format!("Bearer {token}")),
            None => request,
        };
        request.header("x-request-id", Uuid::new_v4().to_string())
    }

    /// observe_unauthorized
    ///
    /// Pipeline stage 3. Runs on every response before status mapping: a 401
    /// means the credential is dead everywhere, not just for this call, so the
    /// session is cleared and the navigator forced to the sign-in screen here,
    /// once, regardless of which screen issued the request. The caller still
    /// sees the failure as `ApiError::Unauthorized`.
    async fn observe_unauthorized(&self, response: Response) -> Result<Response, ApiError> {
        if response.status() == StatusCode::UNAUTHORIZED {
            tracing::warn!("unauthorized response, invalidating session");
            self.session.clear().await;
            self.navigator.force_to(routes::ENTRY_ROUTE);
            return Err(ApiError::Unauthorized);
        }
        Ok(response)
    }

    /// dispatch
    ///
    /// Runs the full pipeline and hands back a response guaranteed to be 2xx.
    async fn dispatch(&self, path: &str, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = self.sign_request(request).send().await?;
        let response = self.observe_unauthorized(response).await?;

        let status = response.status();
        tracing::debug!(%path, status = %status, "api response");
        if status.is_success() {
            return Ok(response);
        }

        let message = read_message(response).await;
        Err(match status {
            StatusCode::FORBIDDEN => ApiError::Forbidden(message),
            StatusCode::NOT_FOUND => ApiError::NotFound(message),
            _ => ApiError::Api {
                status: status.as_u16(),
                message,
            },
        })
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.dispatch(path, self.http.get(self.endpoint(path))).await?;
        Self::decode(response).await
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self.http.post(self.endpoint(path)).json(body);
        let response = self.dispatch(path, request).await?;
        Self::decode(response).await
    }

    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self.http.put(self.endpoint(path)).json(body);
        let response = self.dispatch(path, request).await?;
        Self::decode(response).await
    }

    /// put with no body, for action endpoints like alert resolution.
    pub async fn put_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.dispatch(path, self.http.put(self.endpoint(path))).await?;
        Self::decode(response).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .dispatch(path, self.http.delete(self.endpoint(path)))
            .await?;
        Self::decode(response).await
    }
}

/// read_message
///
/// Best-effort extraction of the server's `{message}` error body. Falls back
/// to the status line's canonical reason when the body is not in that shape.
async fn read_message(response: Response) -> String {
    let fallback = response
        .status()
        .canonical_reason()
        .unwrap_or("request failed")
        .to_string();
    match response.json::<serde_json::Value>().await {
        Ok(body) => body
            .get("message")
            .and_then(|m| m.as_str())
            .map(str::to_string)
            .unwrap_or(fallback),
        Err(_) => fallback,
    }
}
