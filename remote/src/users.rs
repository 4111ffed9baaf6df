use async_trait::async_trait;
use client::user::UserRecord;
use log::warn;
use serde::Deserialize;
use serde_json::json;

use crate::{
    error::{ApiErrorEnvelope, RemoteAccessError},
    requests::RemoteClient,
};

pub const USERS_ENDPOINT: &str = "/api/users";

/// Success envelope wrapping every collection response.
#[derive(Deserialize)]
struct Document<T> {
    data: T,
}

/// Payload of an account-creation request, already validated by the form
/// layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// The four requests the application issues against the remote collection.
/// A trait so the HTTP layer can be driven with a test double.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Full list with relations expanded; feeds the store.
    async fn list_users(&self) -> Result<Vec<UserRecord>, RemoteAccessError>;

    /// Unexpanded list used to fill the two select controls.
    async fn list_dropdown_users(&self) -> Result<Vec<UserRecord>, RemoteAccessError>;

    async fn create_user(&self, user: NewUser) -> Result<(), RemoteAccessError>;

    /// Point the selected user's "following" relation at the target. The
    /// server maintains the inverse follower edge.
    async fn follow_user(&self, selected_id: u64, target_id: u64)
    -> Result<(), RemoteAccessError>;
}

#[async_trait]
impl UserDirectory for RemoteClient {
    async fn list_users(&self) -> Result<Vec<UserRecord>, RemoteAccessError> {
        let url = self.generate_url(&[USERS_ENDPOINT], &[("populate", "*")])?;
        let response = self.get(url).send().await?;

        parse_document(response).await
    }

    async fn list_dropdown_users(&self) -> Result<Vec<UserRecord>, RemoteAccessError> {
        let url = self.generate_url(&[USERS_ENDPOINT], &[])?;
        let response = self.get(url).send().await?;

        parse_document(response).await
    }

    async fn create_user(&self, user: NewUser) -> Result<(), RemoteAccessError> {
        let url = self.generate_url(&[USERS_ENDPOINT], &[])?;
        let response = self
            .post(url)
            .json(&json!({
                "data": {
                    "firstName": user.first_name,
                    "lastName": user.last_name,
                    "email": user.email,
                }
            }))
            .send()
            .await?;

        ensure_success(response).await?;
        Ok(())
    }

    async fn follow_user(
        &self,
        selected_id: u64,
        target_id: u64,
    ) -> Result<(), RemoteAccessError> {
        let url = self.generate_url(&[USERS_ENDPOINT, "/", &selected_id.to_string()], &[])?;
        let response = self
            .put(url)
            .json(&json!({ "data": { "following": target_id } }))
            .send()
            .await?;

        ensure_success(response).await?;
        Ok(())
    }
}

async fn parse_document<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, RemoteAccessError> {
    let response = ensure_success(response).await?;
    let document: Document<T> = response.json().await?;
    Ok(document.data)
}

async fn ensure_success(
    response: reqwest::Response,
) -> Result<reqwest::Response, RemoteAccessError> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status();
    let body = response.text().await?;
    match serde_json::from_str::<ApiErrorEnvelope>(&body) {
        Ok(envelope) => {
            warn!("remote request rejected: {:?}", envelope.error);
            Err(RemoteAccessError::InvalidResponse(envelope.error))
        }
        Err(_) => Err(RemoteAccessError::UnparseableResponse(format!(
            "{status}: {body}"
        ))),
    }
}
