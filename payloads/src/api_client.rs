use crate::{PropertyId, UserId, VillageId, requests, responses};
use reqwest::StatusCode;
use serde::Serialize;

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// An API client for interfacing with the marketplace backend.
///
/// All admin endpoints are bearer-token authenticated; `token` is `None`
/// only before login.
#[derive(Clone)]
pub struct APIClient {
    pub address: String,
    pub token: Option<String>,
    pub inner_client: reqwest::Client,
}

/// Helper methods for http actions
impl APIClient {
    fn format_url(&self, path: &str) -> String {
        format!("{}/api/{path}", &self.address)
    }

    fn authorize(
        &self,
        request: reqwest::RequestBuilder,
    ) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn get(&self, path: &str) -> ReqwestResult {
        self.authorize(self.inner_client.get(self.format_url(path)))
            .send()
            .await
    }

    async fn post(&self, path: &str, body: &impl Serialize) -> ReqwestResult {
        self.authorize(self.inner_client.post(self.format_url(path)))
            .json(body)
            .send()
            .await
    }

    async fn put(&self, path: &str, body: &impl Serialize) -> ReqwestResult {
        self.authorize(self.inner_client.put(self.format_url(path)))
            .json(body)
            .send()
            .await
    }

    async fn delete(&self, path: &str) -> ReqwestResult {
        self.authorize(self.inner_client.delete(self.format_url(path)))
            .send()
            .await
    }

    async fn empty_post(&self, path: &str) -> ReqwestResult {
        self.authorize(self.inner_client.post(self.format_url(path)))
            .send()
            .await
    }
}

/// Methods on the backend API
impl APIClient {
    pub async fn login(
        &self,
        details: &requests::LoginCredentials,
    ) -> Result<responses::Session, ClientError> {
        let response = self.post("auth/login", details).await?;
        ok_body(response).await
    }

    pub async fn logout(&self) -> Result<(), ClientError> {
        let response = self.empty_post("auth/logout").await?;
        ok_empty(response).await
    }

    /// Restore the session for the currently held token.
    pub async fn session(
        &self,
    ) -> Result<responses::SessionUser, ClientError> {
        let response = self.get("auth/session").await?;
        ok_body(response).await
    }

    // Properties

    pub async fn get_properties(
        &self,
    ) -> Result<Vec<responses::Property>, ClientError> {
        let response = self.get("properties").await?;
        ok_body(response).await
    }

    pub async fn get_property(
        &self,
        property_id: &PropertyId,
    ) -> Result<responses::Property, ClientError> {
        let response = self.get(&format!("properties/{property_id}")).await?;
        ok_body(response).await
    }

    /// Transition a listing's status (publish, reject, mark sold).
    pub async fn update_property_status(
        &self,
        property_id: &PropertyId,
        details: &requests::UpdatePropertyStatus,
    ) -> Result<responses::Property, ClientError> {
        let response = self
            .put(&format!("properties/{property_id}/status"), details)
            .await?;
        ok_body(response).await
    }

    pub async fn get_property_type_stats(
        &self,
    ) -> Result<responses::PropertyTypeStats, ClientError> {
        let response = self.get("property-type/stats").await?;
        ok_body(response).await
    }

    // Users

    pub async fn get_users(
        &self,
    ) -> Result<Vec<responses::AdminUser>, ClientError> {
        let response = self.get("admin/users").await?;
        ok_body(response).await
    }

    pub async fn get_sellers(
        &self,
    ) -> Result<Vec<responses::AdminUser>, ClientError> {
        let response = self.get("admin/sellers").await?;
        ok_body(response).await
    }

    pub async fn get_buyers(
        &self,
    ) -> Result<Vec<responses::AdminUser>, ClientError> {
        let response = self.get("admin/buyers").await?;
        ok_body(response).await
    }

    /// Soft-delete an account. The record stays listed with a `deleted_at`
    /// marker; the backend owns any hard-delete policy.
    pub async fn delete_user(
        &self,
        user_id: &UserId,
    ) -> Result<(), ClientError> {
        let response = self.delete(&format!("admin/users/{user_id}")).await?;
        ok_empty(response).await
    }

    pub async fn get_user_stats(
        &self,
    ) -> Result<responses::UserStats, ClientError> {
        let response = self.get("admin/users/stats").await?;
        ok_body(response).await
    }

    // Villages

    pub async fn get_villages(
        &self,
    ) -> Result<Vec<responses::Village>, ClientError> {
        let response = self.get("admin/villages").await?;
        ok_body(response).await
    }

    pub async fn get_village(
        &self,
        village_id: &VillageId,
    ) -> Result<responses::Village, ClientError> {
        let response =
            self.get(&format!("admin/villages/{village_id}")).await?;
        ok_body(response).await
    }

    pub async fn create_village(
        &self,
        details: &requests::CreateVillage,
    ) -> Result<VillageId, ClientError> {
        let response = self.post("admin/villages", details).await?;
        ok_body(response).await
    }

    pub async fn update_village(
        &self,
        village_id: &VillageId,
        details: &requests::UpdateVillage,
    ) -> Result<responses::Village, ClientError> {
        let response = self
            .put(&format!("admin/villages/{village_id}"), details)
            .await?;
        ok_body(response).await
    }

    pub async fn delete_village(
        &self,
        village_id: &VillageId,
    ) -> Result<(), ClientError> {
        let response =
            self.delete(&format!("admin/villages/{village_id}")).await?;
        ok_empty(response).await
    }

    // Page content

    pub async fn get_page_content(
        &self,
        page_key: &str,
    ) -> Result<responses::PageContent, ClientError> {
        let response = self.get(&format!("admin/content/{page_key}")).await?;
        ok_body(response).await
    }

    pub async fn save_page_content(
        &self,
        page_key: &str,
        details: &requests::SavePageContent,
    ) -> Result<(), ClientError> {
        let response = self
            .put(&format!("admin/content/{page_key}"), details)
            .await?;
        ok_empty(response).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// An unhandled API error to display, containing response text.
    #[error("{1}")]
    APIError(StatusCode, String),
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
}

impl ClientError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::APIError(StatusCode::NOT_FOUND, _))
    }
}

/// Deserialize a successful request into the desired type, or return an
/// appropriate error.
pub async fn ok_body<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    Ok(response.json::<T>().await?)
}

/// Check that an empty response is OK, returning a ClientError if not.
pub async fn ok_empty(response: reqwest::Response) -> Result<(), ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    Ok(())
}
