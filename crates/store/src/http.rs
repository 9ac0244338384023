//! reqwest implementation of the store collaborator traits.
//!
//! [`RemoteStore`] is a thin, retry-free client for the authoritative store
//! API. Every request carries a fresh uuid-v4 `x-request-id` so store-side
//! logs can be correlated with client operations. Non-success statuses map
//! to [`StoreError::Status`]; bodies that fail to parse map to
//! [`StoreError::Decode`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;

use crewline_core::model::{
    AvailabilityWindow, CreateAssessment, CreateWindow, Expert, ExpertSkillGroup, Skill,
    SkillGroup, SkillGroupAssessment, UpdateWindow, VerificationStatus,
};
use crewline_core::types::DbId;

use crate::collection::Collection;
use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::traits::{AssessmentStore, ExpertDirectory, SkillDirectory, WindowStore};

/// Correlation id header attached to every store request.
const REQUEST_ID_HEADER: &str = "x-request-id";

/// HTTP client for the remote authoritative store.
#[derive(Debug, Clone)]
pub struct RemoteStore {
    client: reqwest::Client,
    base_url: String,
}

impl RemoteStore {
    /// Build a client from the given configuration.
    pub fn new(config: &StoreConfig) -> Result<Self, StoreError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Send a request with a correlation id, mapping non-success statuses
    /// to [`StoreError::Status`].
    async fn send(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, StoreError> {
        let response = request
            .header(REQUEST_ID_HEADER, uuid::Uuid::new_v4().to_string())
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response.text().await.unwrap_or_default();
        Err(StoreError::Status {
            status: status.as_u16(),
            message,
        })
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, StoreError> {
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| StoreError::Decode(e.to_string()))
    }

    async fn get_one<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, StoreError> {
        let response = self.send(self.client.get(self.url(path)).query(query)).await?;
        Self::decode(response).await
    }

    /// GET a list endpoint through the tolerant [`Collection`] decoder.
    async fn get_list<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Vec<T>, StoreError> {
        let collection: Collection<T> = self.get_one(path, query).await?;
        Ok(collection.into_inner())
    }

    async fn post_one<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, StoreError> {
        let response = self.send(self.client.post(self.url(path)).json(body)).await?;
        Self::decode(response).await
    }
}

#[async_trait]
impl SkillDirectory for RemoteStore {
    async fn list_skills(
        &self,
        talent_id: DbId,
        exclude_deleted: bool,
    ) -> Result<Vec<Skill>, StoreError> {
        self.get_list(
            &format!("/talents/{talent_id}/skills"),
            &[("exclude_deleted", exclude_deleted.to_string())],
        )
        .await
    }

    async fn list_skill_groups(
        &self,
        exclude_deleted: bool,
    ) -> Result<Vec<SkillGroup>, StoreError> {
        self.get_list(
            "/skill-groups",
            &[("exclude_deleted", exclude_deleted.to_string())],
        )
        .await
    }
}

#[async_trait]
impl ExpertDirectory for RemoteStore {
    async fn list_experts(&self, exclude_deleted: bool) -> Result<Vec<Expert>, StoreError> {
        self.get_list(
            "/experts",
            &[("exclude_deleted", exclude_deleted.to_string())],
        )
        .await
    }

    async fn get_expert_skill_groups(
        &self,
        expert_id: DbId,
    ) -> Result<Vec<ExpertSkillGroup>, StoreError> {
        self.get_list(&format!("/experts/{expert_id}/skill-groups"), &[])
            .await
    }
}

#[async_trait]
impl WindowStore for RemoteStore {
    async fn list_windows(
        &self,
        talent_id: DbId,
        exclude_deleted: bool,
    ) -> Result<Vec<AvailabilityWindow>, StoreError> {
        self.get_list(
            &format!("/talents/{talent_id}/availability-windows"),
            &[("exclude_deleted", exclude_deleted.to_string())],
        )
        .await
    }

    async fn create_window(
        &self,
        talent_id: DbId,
        input: &CreateWindow,
    ) -> Result<AvailabilityWindow, StoreError> {
        self.post_one(&format!("/talents/{talent_id}/availability-windows"), input)
            .await
    }

    async fn update_window(
        &self,
        window_id: DbId,
        input: &UpdateWindow,
    ) -> Result<AvailabilityWindow, StoreError> {
        let response = self
            .send(
                self.client
                    .put(self.url(&format!("/availability-windows/{window_id}")))
                    .json(input),
            )
            .await?;
        Self::decode(response).await
    }

    async fn delete_window(&self, window_id: DbId) -> Result<(), StoreError> {
        self.send(
            self.client
                .delete(self.url(&format!("/availability-windows/{window_id}"))),
        )
        .await?;
        Ok(())
    }
}

#[async_trait]
impl AssessmentStore for RemoteStore {
    async fn create_assessment(
        &self,
        input: &CreateAssessment,
    ) -> Result<SkillGroupAssessment, StoreError> {
        self.post_one("/assessments", input).await
    }

    async fn get_assessment(&self, id: DbId) -> Result<SkillGroupAssessment, StoreError> {
        match self.get_one(&format!("/assessments/{id}"), &[]).await {
            Err(StoreError::Status { status: 404, .. }) => Err(StoreError::NotFound {
                entity: "Assessment",
                id,
            }),
            other => other,
        }
    }

    async fn get_latest_assessment(
        &self,
        talent_id: DbId,
        skill_group_id: DbId,
    ) -> Result<Option<SkillGroupAssessment>, StoreError> {
        let path = format!(
            "/talents/{talent_id}/skill-groups/{skill_group_id}/assessments/latest"
        );
        let response = self
            .client
            .get(self.url(&path))
            .header(REQUEST_ID_HEADER, uuid::Uuid::new_v4().to_string())
            .send()
            .await?;

        // No assessment yet is a normal answer, not a fault.
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(StoreError::Status {
                status: status.as_u16(),
                message,
            });
        }

        Ok(Some(Self::decode(response).await?))
    }

    async fn get_statuses(
        &self,
        talent_id: DbId,
        skill_group_ids: &[DbId],
    ) -> Result<Vec<VerificationStatus>, StoreError> {
        let group_ids = skill_group_ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",");
        self.get_list(
            &format!("/talents/{talent_id}/verification-statuses"),
            &[("group_ids", group_ids)],
        )
        .await
    }

    async fn invalidate_assessment(
        &self,
        talent_id: DbId,
        skill_group_id: DbId,
        reason: Option<&str>,
    ) -> Result<(), StoreError> {
        let path = format!(
            "/talents/{talent_id}/skill-groups/{skill_group_id}/assessments/invalidate"
        );
        self.send(
            self.client
                .post(self.url(&path))
                .json(&json!({ "reason": reason })),
        )
        .await?;
        Ok(())
    }

    async fn get_history(
        &self,
        talent_id: DbId,
        skill_group_id: DbId,
    ) -> Result<Vec<SkillGroupAssessment>, StoreError> {
        self.get_list(
            &format!("/talents/{talent_id}/skill-groups/{skill_group_id}/assessments"),
            &[],
        )
        .await
    }
}
