//! Client for the remote marketplace API.
//!
//! The UI only talks to the API through [`MarketApi`], so the state layer can
//! be driven by an in-memory implementation in tests. [`HttpMarketApi`] is
//! the production implementation on top of `reqwest`.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::ApiConfig;

/// User record as exposed by the API (no credentials).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafeUser {
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub image: Option<String>,
    pub phone: Option<String>,
    pub pickup_address: Option<String>,
    pub final_pickup_date: Option<DateTime<Utc>>,
}

/// Body of `POST /api/register`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Body of `PATCH /api/users/{id}`, sent wholesale from the contact card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactUpdate {
    pub phone: String,
    pub pickup_address: String,
    pub final_pickup_date: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server responded with {status}: {message}")]
    Status { status: u16, message: String },
}

pub type ApiResult<T> = Result<T, ApiError>;

#[async_trait]
pub trait MarketApi: Send + Sync {
    async fn register(&self, request: &RegisterRequest) -> ApiResult<()>;

    async fn fetch_user(&self, user_id: &str) -> ApiResult<SafeUser>;

    async fn update_user(&self, user_id: &str, update: &ContactUpdate) -> ApiResult<SafeUser>;
}

#[derive(Debug, Clone)]
pub struct HttpMarketApi {
    client: Client,
    base_url: String,
}

impl HttpMarketApi {
    pub fn new(config: &ApiConfig) -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn check(response: Response) -> ApiResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response.text().await.unwrap_or_default();
        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl MarketApi for HttpMarketApi {
    async fn register(&self, request: &RegisterRequest) -> ApiResult<()> {
        log::info!("Registering account for {}", request.email);
        let response = self
            .client
            .post(self.url("/api/register"))
            .json(request)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    async fn fetch_user(&self, user_id: &str) -> ApiResult<SafeUser> {
        let response = self
            .client
            .get(self.url(&format!("/api/users/{user_id}")))
            .send()
            .await?;
        Ok(Self::check(response).await?.json::<SafeUser>().await?)
    }

    async fn update_user(&self, user_id: &str, update: &ContactUpdate) -> ApiResult<SafeUser> {
        log::info!("Updating contact details for user {user_id}");
        let response = self
            .client
            .patch(self.url(&format!("/api/users/{user_id}")))
            .json(update)
            .send()
            .await?;
        Ok(Self::check(response).await?.json::<SafeUser>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_without_double_slash() {
        let api = HttpMarketApi::new(&ApiConfig {
            base_url: "https://market.example.org/".to_string(),
            timeout_secs: 5,
        })
        .expect("client should build");
        assert_eq!(api.url("/api/register"), "https://market.example.org/api/register");
    }

    #[test]
    fn contact_update_serializes_camel_case() {
        let update = ContactUpdate {
            phone: "555-0100".to_string(),
            pickup_address: "1 Main St".to_string(),
            final_pickup_date: "2024-05-01".to_string(),
        };
        let json = serde_json::to_value(&update).expect("serialize");
        assert_eq!(json["pickupAddress"], "1 Main St");
        assert_eq!(json["finalPickupDate"], "2024-05-01");
    }

    #[test]
    fn safe_user_accepts_missing_optional_fields() {
        let user: SafeUser =
            serde_json::from_str(r#"{"id":"u1","name":"Ada","email":"ada@example.org"}"#)
                .expect("deserialize");
        assert_eq!(user.name.as_deref(), Some("Ada"));
        assert!(user.phone.is_none());
        assert!(user.final_pickup_date.is_none());
    }

    #[test]
    fn safe_user_parses_pickup_date() {
        let user: SafeUser = serde_json::from_str(
            r#"{"id":"u1","finalPickupDate":"2024-05-01T00:00:00.000Z","pickupAddress":"Dorm 4"}"#,
        )
        .expect("deserialize");
        assert_eq!(user.pickup_address.as_deref(), Some("Dorm 4"));
        assert!(user.final_pickup_date.is_some());
    }
}
