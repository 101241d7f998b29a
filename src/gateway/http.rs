//! REST binding of the persistence gateway.
//!
//! Talks to the vitalarc API over authenticated JSON. Routes are user-scoped;
//! HTTP 404 on a fetch means "no row" and maps to `Ok(None)`.

use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use crate::config::Config;
use crate::error::{CoreError, CoreResult};
use crate::models::{
    CycleSettings, CycleUpdate, DailyLogRecord, GoalUpdate, ProfileUpdate, UserGoals, UserProfile,
};

use super::PersistenceGateway;

#[derive(Clone)]
pub struct HttpGateway {
    http: reqwest::Client,
    base_url: String,
    bearer_token: String,
}

impl HttpGateway {
    pub fn new(base_url: String, bearer_token: String, timeout: Duration) -> CoreResult<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            bearer_token,
        })
    }

    /// Session-scoped construction: the bearer token comes from the identity
    /// provider, everything else from config.
    pub fn from_config(config: &Config, bearer_token: String) -> CoreResult<Self> {
        Self::new(
            config.api_base_url.clone(),
            bearer_token,
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET returning `None` on 404, a decoded body on 2xx.
    async fn get_optional<T: DeserializeOwned>(&self, path: &str) -> CoreResult<Option<T>> {
        let response = self
            .http
            .get(self.url(path))
            .bearer_auth(&self.bearer_token)
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let response = Self::check_status(response).await?;
        Ok(Some(response.json::<T>().await?))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> CoreResult<T> {
        let response = self
            .http
            .get(self.url(path))
            .bearer_auth(&self.bearer_token)
            .send()
            .await?;
        let response = Self::check_status(response).await?;
        Ok(response.json::<T>().await?)
    }

    async fn put_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> CoreResult<()> {
        let response = self
            .http
            .put(self.url(path))
            .bearer_auth(&self.bearer_token)
            .json(body)
            .send()
            .await?;
        Self::check_status(response).await?;
        Ok(())
    }

    async fn patch_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> CoreResult<()> {
        let response = self
            .http
            .patch(self.url(path))
            .bearer_auth(&self.bearer_token)
            .json(body)
            .send()
            .await?;
        Self::check_status(response).await?;
        Ok(())
    }

    async fn check_status(response: reqwest::Response) -> CoreResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(CoreError::Gateway(format!("{}: {}", status, body)))
    }
}

#[async_trait]
impl PersistenceGateway for HttpGateway {
    async fn fetch_day_log(
        &self,
        user: Uuid,
        day_key: NaiveDate,
    ) -> CoreResult<Option<DailyLogRecord>> {
        self.get_optional(&format!("/api/users/{}/daily-logs/{}", user, day_key))
            .await
    }

    async fn upsert_log(&self, user: Uuid, record: &DailyLogRecord) -> CoreResult<()> {
        self.put_json(
            &format!("/api/users/{}/daily-logs/{}", user, record.day_key),
            record,
        )
        .await
    }

    async fn fetch_goals(&self, user: Uuid) -> CoreResult<Option<UserGoals>> {
        self.get_optional(&format!("/api/users/{}/goals", user)).await
    }

    async fn update_goal(&self, user: Uuid, update: GoalUpdate) -> CoreResult<()> {
        self.patch_json(&format!("/api/users/{}/goals", user), &update)
            .await
    }

    async fn fetch_profile(&self, user: Uuid) -> CoreResult<Option<UserProfile>> {
        self.get_optional(&format!("/api/users/{}/profile", user)).await
    }

    async fn update_profile(&self, user: Uuid, update: ProfileUpdate) -> CoreResult<()> {
        self.patch_json(&format!("/api/users/{}/profile", user), &update)
            .await
    }

    async fn fetch_cycle_settings(&self, user: Uuid) -> CoreResult<Option<CycleSettings>> {
        self.get_optional(&format!("/api/users/{}/cycle-settings", user))
            .await
    }

    async fn update_cycle_settings(&self, user: Uuid, update: CycleUpdate) -> CoreResult<()> {
        self.patch_json(&format!("/api/users/{}/cycle-settings", user), &update)
            .await
    }

    async fn logs_in_range(
        &self,
        user: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> CoreResult<Vec<DailyLogRecord>> {
        self.get_json(&format!(
            "/api/users/{}/daily-logs?start_date={}&end_date={}",
            user, start, end
        ))
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let gw = HttpGateway::new(
            "https://api.vitalarc.test/".into(),
            "token".into(),
            Duration::from_secs(5),
        )
        .unwrap();
        assert_eq!(
            gw.url("/api/users/x/goals"),
            "https://api.vitalarc.test/api/users/x/goals"
        );
    }
}
