//! Typed HTTP wrapper over the contacts REST API.

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::errors::ErrorResponse;
use crate::models::{Contact, ContactInput};

/// Failure of a request made by [`ContactService`].
#[derive(Debug)]
pub enum ClientError {
    /// Transport or decoding failure
    Http(reqwest::Error),
    /// The server answered with an error status
    Api { status: StatusCode, message: String },
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientError::Http(err) => write!(f, "{}", err),
            ClientError::Api { status, message } => write!(f, "{} - {}", status, message),
        }
    }
}

impl std::error::Error for ClientError {}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Http(err)
    }
}

/// Client for `/api/contacts`.
#[derive(Debug, Clone)]
pub struct ContactService {
    http: Client,
    contacts_url: String,
}

impl ContactService {
    /// `base_url` is the server root, e.g. `http://localhost:8080`.
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(http: Client, base_url: &str) -> Self {
        Self {
            http,
            contacts_url: format!("{}/api/contacts", base_url.trim_end_matches('/')),
        }
    }

    fn contact_url(&self, id: &str) -> String {
        format!("{}/{}", self.contacts_url, id)
    }

    /// GET /api/contacts
    pub async fn get_contacts(&self) -> Result<Vec<Contact>, ClientError> {
        let resp = self.http.get(&self.contacts_url).send().await?;
        decode(resp).await
    }

    /// GET /api/contacts/:id
    pub async fn get_contact(&self, id: &str) -> Result<Option<Contact>, ClientError> {
        let resp = self.http.get(self.contact_url(id)).send().await?;
        decode(resp).await
    }

    /// POST /api/contacts
    pub async fn create_contact(&self, new_contact: &ContactInput) -> Result<Contact, ClientError> {
        let resp = self
            .http
            .post(&self.contacts_url)
            .json(new_contact)
            .send()
            .await?;
        decode(resp).await
    }

    /// PUT /api/contacts/:id
    pub async fn update_contact(&self, contact: &Contact) -> Result<Contact, ClientError> {
        let resp = self
            .http
            .put(self.contact_url(&contact.id))
            .json(&contact.to_input())
            .send()
            .await?;
        decode(resp).await
    }

    /// DELETE /api/contacts/:id
    pub async fn delete_contact(&self, id: &str) -> Result<String, ClientError> {
        let resp = self.http.delete(self.contact_url(id)).send().await?;
        decode(resp).await
    }
}

async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp.json().await?);
    }

    let message = match resp.json::<ErrorResponse>().await {
        Ok(body) => body.error,
        Err(_) => status
            .canonical_reason()
            .unwrap_or("Server error")
            .to_string(),
    };
    Err(ClientError::Api { status, message })
}
