//! Audit events for store mutations.
//!
//! Informational only: every create, assign and delete produces one record,
//! nothing reads them back.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use repair_shared::constants::AUDIT_TARGET;
use repair_shared::types::{format_timestamp, now_timestamp};

use crate::domain::{IssueType, Priority, Specialization};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum AuditEvent {
    #[serde(rename_all = "camelCase")]
    RepairRequestCreated {
        ticket_id: Uuid,
        name: String,
        address: String,
        issue_type: IssueType,
        priority: Priority,
    },
    #[serde(rename_all = "camelCase")]
    TicketAssigned {
        ticket_id: Uuid,
        worker_id: Uuid,
        worker_name: String,
    },
    #[serde(rename_all = "camelCase")]
    WorkerCreated {
        worker_id: Uuid,
        name: String,
        specialization: Specialization,
    },
    #[serde(rename_all = "camelCase")]
    WorkerDeleted { worker_id: Uuid, name: String },
}

impl AuditEvent {
    pub fn name(&self) -> &'static str {
        match self {
            AuditEvent::RepairRequestCreated { .. } => "repair_request_created",
            AuditEvent::TicketAssigned { .. } => "ticket_assigned",
            AuditEvent::WorkerCreated { .. } => "worker_created",
            AuditEvent::WorkerDeleted { .. } => "worker_deleted",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditRecord {
    #[serde(flatten)]
    pub event: AuditEvent,
    pub timestamp: String,
}

impl AuditRecord {
    pub fn now(event: AuditEvent) -> Self {
        Self { event, timestamp: now_timestamp() }
    }

    pub fn at(event: AuditEvent, at: &DateTime<Utc>) -> Self {
        Self { event, timestamp: format_timestamp(at) }
    }
}

/// Destination for audit records.
pub trait AuditSink: Send + Sync {
    fn record(&self, record: AuditRecord);
}

/// Writes each record as one JSON line through `tracing` under the `audit` target.
#[derive(Debug, Default, Clone)]
pub struct TracingAuditSink;

impl AuditSink for TracingAuditSink {
    fn record(&self, record: AuditRecord) {
        match serde_json::to_string(&record) {
            Ok(line) => info!(target: AUDIT_TARGET, event = record.event.name(), "{}", line),
            Err(e) => warn!("Failed to serialize audit record {}: {}", record.event.name(), e),
        }
    }
}
