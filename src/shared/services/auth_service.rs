#[cfg(target_arch = "wasm32")]
use reqwasm::http::Request;

use serde::Serialize;

use crate::config::AppConfig;
use crate::domain::models::{AuthAction, AuthOutcome, LoginRequest, SignupRequest};
use crate::shared::errors::{AppError, Result};
use crate::shared::logging::{log_submit_error, log_submit_result, log_submit_start};

/// HTTP client for the webook user endpoints.
///
/// Browser builds go through `reqwasm`, native builds through `reqwest`.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthService {
    config: AppConfig,
}

impl AuthService {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub async fn signup(&self, req: &SignupRequest) -> Result<AuthOutcome> {
        self.submit(AuthAction::Signup, req).await
    }

    pub async fn login(&self, req: &LoginRequest) -> Result<AuthOutcome> {
        self.submit(AuthAction::Login, req).await
    }

    async fn submit<B: Serialize>(&self, action: AuthAction, body: &B) -> Result<AuthOutcome> {
        let url = self.config.endpoint(action.endpoint());
        log_submit_start(action, &url);

        let result = match self.post(&url, body).await {
            Ok((status, text)) => outcome_for(action, status, &text),
            Err(e) => Err(e),
        };

        match &result {
            Ok(outcome) => log_submit_result(action, outcome.accepted, &outcome.message),
            Err(e) => log_submit_error(action, &e.to_string()),
        }
        result
    }

    /// Returns the status code and body text of the response.
    #[cfg(target_arch = "wasm32")]
    async fn post<B: Serialize>(&self, url: &str, body: &B) -> Result<(u16, String)> {
        let response = Request::post(url)
            .header("Content-Type", "application/json")
            .body(serde_json::to_string(body)?)
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;
        Ok((status, text))
    }

    #[cfg(not(target_arch = "wasm32"))]
    async fn post<B: Serialize>(&self, url: &str, body: &B) -> Result<(u16, String)> {
        let response = reqwest::Client::new()
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;
        Ok((status, text))
    }
}

/// Maps a response to the outcome shown on the form.
///
/// Any 2xx is an answer from the user handler, whose body text decides
/// acceptance. Anything else is a transport-level failure.
pub(crate) fn outcome_for(action: AuthAction, status: u16, body: &str) -> Result<AuthOutcome> {
    if !(200..300).contains(&status) {
        let message = match body.trim() {
            "" => "request failed".to_string(),
            text => text.to_string(),
        };
        return Err(AppError::Http { status, message });
    }
    Ok(AuthOutcome::from_response(action, body))
}
