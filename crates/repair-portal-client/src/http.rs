// ============================================================================
// Repair Portal Client - HTTP Adapter
// File: crates/repair-portal-client/src/http.rs
// ============================================================================
//! `PortalApi` over HTTP with reqwest

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use repair_core::domain::{Ticket, Worker};
use repair_core::validation::{RepairRequestDraft, WorkerDraft};
use repair_core::FieldError;

use crate::api::{AssignmentOutcome, HealthStatus, PortalApi};
use crate::error::{ClientError, Result};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TicketCreated {
    ticket_id: Uuid,
}

#[derive(Deserialize)]
struct TicketList {
    tickets: Vec<Ticket>,
}

#[derive(Deserialize)]
struct TicketEnvelope {
    ticket: Ticket,
}

#[derive(Deserialize)]
struct WorkerList {
    workers: Vec<Worker>,
}

#[derive(Deserialize)]
struct WorkerEnvelope {
    worker: Worker,
}

#[derive(Deserialize)]
struct StatusEnvelope {
    #[allow(dead_code)]
    status: String,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    message: String,
    #[serde(default)]
    errors: Vec<FieldError>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AssignBody<'a> {
    worker_id: &'a str,
}

pub struct HttpPortalClient {
    client: Client,
    base_url: String,
}

impl HttpPortalClient {
    /// `base_url` is the server root, e.g. `http://127.0.0.1:4000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Decode a success body, or turn the error envelope into `ClientError::Api`.
    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();
        let bytes = response.bytes().await?;

        if status.is_success() {
            return serde_json::from_slice(&bytes).map_err(|e| ClientError::Decode(e.to_string()));
        }

        let (message, errors) = match serde_json::from_slice::<ErrorEnvelope>(&bytes) {
            Ok(body) => (body.message, body.errors),
            Err(_) => (
                status
                    .canonical_reason()
                    .unwrap_or("Request failed")
                    .to_string(),
                Vec::new(),
            ),
        };
        warn!("API error {}: {}", status.as_u16(), message);

        Err(ClientError::Api {
            status: status.as_u16(),
            message,
            errors,
        })
    }
}

#[async_trait]
impl PortalApi for HttpPortalClient {
    async fn submit_repair_request(&self, draft: &RepairRequestDraft) -> Result<Uuid> {
        debug!("POST /api/repair-requests");
        let response = self
            .client
            .post(self.url("/api/repair-requests"))
            .json(draft)
            .send()
            .await?;
        let created: TicketCreated = Self::decode(response).await?;
        Ok(created.ticket_id)
    }

    async fn list_tickets(&self) -> Result<Vec<Ticket>> {
        let response = self.client.get(self.url("/api/repair-requests")).send().await?;
        let list: TicketList = Self::decode(response).await?;
        Ok(list.tickets)
    }

    async fn get_ticket(&self, id: &str) -> Result<Ticket> {
        let response = self
            .client
            .get(self.url(&format!("/api/repair-requests/{}", id)))
            .send()
            .await?;
        let envelope: TicketEnvelope = Self::decode(response).await?;
        Ok(envelope.ticket)
    }

    async fn assign_worker(&self, ticket_id: &str, worker_id: &str) -> Result<AssignmentOutcome> {
        debug!("PATCH /api/repair-requests/{}/assign", ticket_id);
        let response = self
            .client
            .patch(self.url(&format!("/api/repair-requests/{}/assign", ticket_id)))
            .json(&AssignBody { worker_id })
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn list_workers(&self) -> Result<Vec<Worker>> {
        let response = self.client.get(self.url("/api/workers")).send().await?;
        let list: WorkerList = Self::decode(response).await?;
        Ok(list.workers)
    }

    async fn create_worker(&self, draft: &WorkerDraft) -> Result<Worker> {
        let response = self
            .client
            .post(self.url("/api/workers"))
            .json(draft)
            .send()
            .await?;
        let envelope: WorkerEnvelope = Self::decode(response).await?;
        Ok(envelope.worker)
    }

    async fn delete_worker(&self, id: &str) -> Result<()> {
        let response = self
            .client
            .delete(self.url(&format!("/api/workers/{}", id)))
            .send()
            .await?;
        let _: StatusEnvelope = Self::decode(response).await?;
        Ok(())
    }

    async fn health(&self) -> Result<HealthStatus> {
        let response = self.client.get(self.url("/api/health")).send().await?;
        Self::decode(response).await
    }
}
