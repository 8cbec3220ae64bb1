// src/infrastructure/http.rs
use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, instrument};

use crate::application::CustomerRepository;
use crate::domain::{Customer, CustomerPayload, DomainError, Note};

/// Error body of non-2xx responses; every field is optional
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: Option<String>,
}

#[derive(Debug, Serialize)]
struct NoteBody<'a> {
    content: &'a str,
}

/// [`CustomerRepository`] over the backend's REST API.
///
/// No authentication headers and no query parameters are sent.
#[derive(Debug, Clone)]
pub struct HttpCustomerRepository {
    client: Client,
    base_url: String,
}

impl HttpCustomerRepository {
    /// `timeout` of `None` lets a request wait indefinitely
    pub fn new(base_url: &str, timeout: Option<Duration>) -> anyhow::Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        debug!(base_url, ?timeout, "Created HTTP repository");
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn send(&self, request: RequestBuilder) -> Result<Response, DomainError> {
        let response = request
            .send()
            .map_err(|e| DomainError::Transport(e.to_string()))?;

        let status = response.status();
        debug!(%status, url = %response.url(), "Received response");
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().unwrap_or_default();
        let message = serde_json::from_str::<ApiErrorBody>(&body)
            .ok()
            .and_then(|b| b.error)
            .filter(|m| !m.is_empty());
        Err(DomainError::Api {
            status: status.as_u16(),
            message,
        })
    }

    fn decode<T: DeserializeOwned>(response: Response) -> Result<T, DomainError> {
        let body = response
            .text()
            .map_err(|e| DomainError::Transport(e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| DomainError::Decode(e.to_string()))
    }
}

impl CustomerRepository for HttpCustomerRepository {
    #[instrument(level = "debug", skip(self))]
    fn list_customers(&mut self) -> Result<Vec<Customer>, DomainError> {
        let response = self.send(self.client.get(self.url("/customers")))?;
        Self::decode(response)
    }

    #[instrument(level = "debug", skip(self))]
    fn get_customer(&mut self, id: i64) -> Result<Customer, DomainError> {
        let response = self.send(self.client.get(self.url(&format!("/customers/{id}"))))?;
        Self::decode(response)
    }

    #[instrument(level = "debug", skip(self))]
    fn create_customer(&mut self, payload: &CustomerPayload) -> Result<Customer, DomainError> {
        let response = self.send(self.client.post(self.url("/customers")).json(payload))?;
        Self::decode(response)
    }

    #[instrument(level = "debug", skip(self))]
    fn update_customer(
        &mut self,
        id: i64,
        payload: &CustomerPayload,
    ) -> Result<Customer, DomainError> {
        let response = self.send(
            self.client
                .put(self.url(&format!("/customers/{id}")))
                .json(payload),
        )?;
        Self::decode(response)
    }

    #[instrument(level = "debug", skip(self))]
    fn delete_customer(&mut self, id: i64) -> Result<(), DomainError> {
        // body is a confirmation message at best
        self.send(self.client.delete(self.url(&format!("/customers/{id}"))))?;
        Ok(())
    }

    #[instrument(level = "debug", skip(self))]
    fn add_note(&mut self, customer_id: i64, content: &str) -> Result<Note, DomainError> {
        let response = self.send(
            self.client
                .post(self.url(&format!("/customers/{customer_id}/notes")))
                .json(&NoteBody { content }),
        )?;
        Self::decode(response)
    }

    #[instrument(level = "debug", skip(self))]
    fn delete_note(&mut self, note_id: i64) -> Result<(), DomainError> {
        self.send(self.client.delete(self.url(&format!("/notes/{note_id}"))))?;
        Ok(())
    }
}
