// ============================================================================
// Repair Core - Submission Validation
// File: crates/repair-core/src/validation.rs
// ============================================================================
//! Validation of untrusted submissions.
//!
//! Request bodies are deserialized into the draft records below, whose fields
//! are all optional strings. Every rule is checked independently so a caller
//! always receives the full list of violations, ordered by field declaration.
//! A draft that passes is converted into the typed `NewTicket` / `NewWorker`
//! records the rest of the domain works with.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use repair_shared::utils::trimmed;

use crate::domain::{IssueType, NewTicket, NewWorker, Priority, Specialization};

pub const NAME_REQUIRED: &str = "Name is required";
pub const ADDRESS_REQUIRED: &str = "Address is required";
pub const DESCRIPTION_REQUIRED: &str = "Description is required";
pub const WORKER_NAME_REQUIRED: &str = "Worker name is required";

/// A single violated rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

pub fn issue_type_message() -> String {
    format!("Issue type must be one of: {}", IssueType::allowed_values())
}

pub fn priority_message() -> String {
    format!("Priority must be one of: {}", Priority::allowed_values())
}

pub fn specialization_message() -> String {
    format!("Specialization must be one of: {}", Specialization::allowed_values())
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

fn known_issue_type(value: &str) -> Result<(), ValidationError> {
    IssueType::from_str(value)
        .map(|_| ())
        .ok_or_else(|| ValidationError::new("issue_type"))
}

fn known_priority(value: &str) -> Result<(), ValidationError> {
    Priority::from_str(value)
        .map(|_| ())
        .ok_or_else(|| ValidationError::new("priority"))
}

fn known_specialization(value: &str) -> Result<(), ValidationError> {
    Specialization::from_str(value)
        .map(|_| ())
        .ok_or_else(|| ValidationError::new("specialization"))
}

/// Field declaration: rust field name, wire name, message.
struct FieldRule {
    key: &'static str,
    wire: &'static str,
    message: String,
}

/// Re-order `validator`'s map of failures into the declared field order,
/// one entry per failed field.
fn collect_errors(result: Result<(), ValidationErrors>, rules: Vec<FieldRule>) -> Vec<FieldError> {
    let Err(errors) = result else {
        return Vec::new();
    };
    let failed = errors.field_errors();

    rules
        .into_iter()
        .filter(|rule| failed.contains_key(rule.key) || failed.contains_key(rule.wire))
        .map(|rule| FieldError::new(rule.wire, rule.message))
        .collect()
}

/// Repair request submission as received from a client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct RepairRequestDraft {
    #[validate(required, custom(function = "not_blank"))]
    pub name: Option<String>,

    #[validate(required, custom(function = "not_blank"))]
    pub address: Option<String>,

    #[serde(rename = "issueType")]
    #[validate(required, custom(function = "known_issue_type"))]
    pub issue_type: Option<String>,

    #[validate(required, custom(function = "known_priority"))]
    pub priority: Option<String>,

    #[validate(required, custom(function = "not_blank"))]
    pub description: Option<String>,
}

impl RepairRequestDraft {
    /// All violated rules, empty when the draft is acceptable.
    pub fn field_errors(&self) -> Vec<FieldError> {
        collect_errors(
            self.validate(),
            vec![
                FieldRule { key: "name", wire: "name", message: NAME_REQUIRED.to_string() },
                FieldRule { key: "address", wire: "address", message: ADDRESS_REQUIRED.to_string() },
                FieldRule { key: "issue_type", wire: "issueType", message: issue_type_message() },
                FieldRule { key: "priority", wire: "priority", message: priority_message() },
                FieldRule {
                    key: "description",
                    wire: "description",
                    message: DESCRIPTION_REQUIRED.to_string(),
                },
            ],
        )
    }

    /// Convert into a typed record with trimmed strings.
    pub fn into_new_ticket(self) -> Result<NewTicket, Vec<FieldError>> {
        match (
            trimmed(self.name.as_deref()),
            trimmed(self.address.as_deref()),
            self.issue_type.as_deref().and_then(IssueType::from_str),
            self.priority.as_deref().and_then(Priority::from_str),
            trimmed(self.description.as_deref()),
        ) {
            (Some(name), Some(address), Some(issue_type), Some(priority), Some(description)) => {
                Ok(NewTicket {
                    name,
                    address,
                    issue_type,
                    priority,
                    description,
                })
            }
            _ => Err(self.field_errors()),
        }
    }
}

/// Worker creation request as received from a client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct WorkerDraft {
    #[validate(required, custom(function = "not_blank"))]
    pub name: Option<String>,

    #[validate(required, custom(function = "known_specialization"))]
    pub specialization: Option<String>,
}

impl WorkerDraft {
    pub fn field_errors(&self) -> Vec<FieldError> {
        collect_errors(
            self.validate(),
            vec![
                FieldRule { key: "name", wire: "name", message: WORKER_NAME_REQUIRED.to_string() },
                FieldRule {
                    key: "specialization",
                    wire: "specialization",
                    message: specialization_message(),
                },
            ],
        )
    }

    pub fn into_new_worker(self) -> Result<NewWorker, Vec<FieldError>> {
        match (
            trimmed(self.name.as_deref()),
            self.specialization.as_deref().and_then(Specialization::from_str),
        ) {
            (Some(name), Some(specialization)) => Ok(NewWorker { name, specialization }),
            _ => Err(self.field_errors()),
        }
    }
}

/// Body of an assignment request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AssignWorkerDraft {
    #[serde(rename = "workerId")]
    pub worker_id: Option<String>,
}

impl AssignWorkerDraft {
    /// The worker id as sent, or `None` when missing or blank.
    pub fn worker_id(&self) -> Option<&str> {
        self.worker_id
            .as_deref()
            .filter(|id| !id.trim().is_empty())
    }
}
