// ============================================================================
// Repair Core - Ticket Entity
// File: crates/repair-core/src/domain/ticket.rs
// Description: Tenant repair request and its closed enumerations
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use repair_shared::new_id;

use super::worker::Worker;

/// Issue type enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IssueType {
    Plumbing,
    Electrical,
    Structural,
    Heating,
    Other,
}

impl IssueType {
    pub const ALL: [IssueType; 5] = [
        IssueType::Plumbing,
        IssueType::Electrical,
        IssueType::Structural,
        IssueType::Heating,
        IssueType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IssueType::Plumbing => "Plumbing",
            IssueType::Electrical => "Electrical",
            IssueType::Structural => "Structural",
            IssueType::Heating => "Heating",
            IssueType::Other => "Other",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == s)
    }

    pub fn allowed_values() -> String {
        super::join_values(&Self::ALL.map(|v| v.as_str()))
    }
}

/// Priority enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
}

impl Priority {
    pub const ALL: [Priority; 4] = [Priority::Low, Priority::Medium, Priority::High, Priority::Urgent];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Urgent => "Urgent",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == s)
    }

    pub fn allowed_values() -> String {
        super::join_values(&Self::ALL.map(|v| v.as_str()))
    }
}

/// Ticket lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TicketStatus {
    Open,
    Assigned,
    #[serde(rename = "In Progress")]
    InProgress,
    Resolved,
}

impl TicketStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::Open => "Open",
            TicketStatus::Assigned => "Assigned",
            TicketStatus::InProgress => "In Progress",
            TicketStatus::Resolved => "Resolved",
        }
    }
}

impl Default for TicketStatus {
    fn default() -> Self {
        TicketStatus::Open
    }
}

/// Validated fields of a repair request about to be stored.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTicket {
    pub name: String,
    pub address: String,
    pub issue_type: IssueType,
    pub priority: Priority,
    pub description: String,
}

/// Repair ticket entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: Uuid,

    /// Tenant name
    pub name: String,
    pub address: String,
    pub issue_type: IssueType,
    pub priority: Priority,
    pub description: String,

    pub status: TicketStatus,

    /// Snapshot of the worker taken at assignment time.
    pub assigned_worker: Option<Worker>,

    pub created_at: DateTime<Utc>,
}

impl Ticket {
    /// Create a new open, unassigned ticket
    pub fn new(fields: NewTicket) -> Self {
        Self {
            id: new_id(),
            name: fields.name,
            address: fields.address,
            issue_type: fields.issue_type,
            priority: fields.priority,
            description: fields.description,
            status: TicketStatus::Open,
            assigned_worker: None,
            created_at: Utc::now(),
        }
    }

    /// Attach a copy of the worker and mark the ticket assigned.
    /// A previous assignment is overwritten.
    pub fn assign_to(&mut self, worker: &Worker) {
        self.assigned_worker = Some(worker.clone());
        self.status = TicketStatus::Assigned;
    }

    pub fn is_assigned(&self) -> bool {
        self.assigned_worker.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NewWorker, Specialization};

    fn sample_fields() -> NewTicket {
        NewTicket {
            name: "Jan de Vries".to_string(),
            address: "Keizersgracht 123, 1015 CJ Amsterdam".to_string(),
            issue_type: IssueType::Plumbing,
            priority: Priority::High,
            description: "The kitchen faucet has been leaking for two days.".to_string(),
        }
    }

    #[test]
    fn test_new_ticket_is_open_and_unassigned() {
        let ticket = Ticket::new(sample_fields());
        assert_eq!(ticket.status, TicketStatus::Open);
        assert!(!ticket.is_assigned());
        assert_eq!(ticket.id.get_version_num(), 4);
    }

    #[test]
    fn test_assign_takes_snapshot() {
        let mut ticket = Ticket::new(sample_fields());
        let mut worker = Worker::new(NewWorker {
            name: "Pieter van den Berg".to_string(),
            specialization: Specialization::Plumber,
        });

        ticket.assign_to(&worker);
        worker.name = "Renamed".to_string();

        assert_eq!(ticket.status, TicketStatus::Assigned);
        let snapshot = ticket.assigned_worker.as_ref().unwrap();
        assert_eq!(snapshot.id, worker.id);
        assert_eq!(snapshot.name, "Pieter van den Berg");
    }

    #[test]
    fn test_ticket_serializes_camel_case() {
        let ticket = Ticket::new(sample_fields());
        let json = serde_json::to_value(&ticket).unwrap();
        assert_eq!(json["issueType"], "Plumbing");
        assert_eq!(json["priority"], "High");
        assert_eq!(json["status"], "Open");
        assert!(json["assignedWorker"].is_null());
        assert!(json["createdAt"].is_string());
    }

    #[test]
    fn test_closed_sets() {
        assert_eq!(IssueType::from_str("Heating"), Some(IssueType::Heating));
        assert_eq!(IssueType::from_str("heating"), None);
        assert_eq!(Priority::from_str("Urgent"), Some(Priority::Urgent));
        assert_eq!(Priority::allowed_values(), "Low, Medium, High, Urgent");
        assert_eq!(
            serde_json::to_string(&TicketStatus::InProgress).unwrap(),
            "\"In Progress\""
        );
        assert_eq!(TicketStatus::InProgress.as_str(), "In Progress");
        assert_eq!(TicketStatus::default(), TicketStatus::Open);
    }
}
