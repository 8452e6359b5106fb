//! Repair Request Form ViewModel
//!
//! Tenant-facing submission form with client-side validation.

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use repair_core::validation::RepairRequestDraft;
use repair_core::FieldError;

use crate::api::PortalApi;
use crate::error::ClientError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Address,
    IssueType,
    Priority,
    Description,
}

impl FormField {
    /// Field name as used in error entries.
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Address => "address",
            FormField::IssueType => "issueType",
            FormField::Priority => "priority",
            FormField::Description => "description",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormPhase {
    Editing,
    Submitting,
    Success { ticket_id: Uuid },
}

pub struct RepairFormViewModel {
    pub name: String,
    pub address: String,
    pub issue_type: String,
    pub priority: String,
    pub description: String,
    pub phase: FormPhase,
    /// Inline errors, at most one per field.
    pub field_errors: Vec<FieldError>,
    /// Failure that is not tied to a field.
    pub banner: Option<String>,
    api: Arc<dyn PortalApi>,
}

impl RepairFormViewModel {
    pub fn new(api: Arc<dyn PortalApi>) -> Self {
        Self {
            name: String::new(),
            address: String::new(),
            issue_type: String::new(),
            priority: String::new(),
            description: String::new(),
            phase: FormPhase::Editing,
            field_errors: Vec::new(),
            banner: None,
            api,
        }
    }

    /// Update one field and drop its error.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.name = value,
            FormField::Address => self.address = value,
            FormField::IssueType => self.issue_type = value,
            FormField::Priority => self.priority = value,
            FormField::Description => self.description = value,
        }
        self.field_errors.retain(|e| e.field != field.as_str());
    }

    pub fn error_for(&self, field: FormField) -> Option<&str> {
        self.field_errors
            .iter()
            .find(|e| e.field == field.as_str())
            .map(|e| e.message.as_str())
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    pub fn draft(&self) -> RepairRequestDraft {
        RepairRequestDraft {
            name: Some(self.name.clone()),
            address: Some(self.address.clone()),
            issue_type: Some(self.issue_type.clone()),
            priority: Some(self.priority.clone()),
            description: Some(self.description.clone()),
        }
    }

    /// Validate and enter `Submitting`. Returns the draft to send, or `None`
    /// when the form is invalid or not in `Editing`.
    pub fn begin_submit(&mut self) -> Option<RepairRequestDraft> {
        if self.phase != FormPhase::Editing {
            return None;
        }

        self.banner = None;
        let draft = self.draft();
        let errors = draft.field_errors();
        if !errors.is_empty() {
            self.field_errors = errors;
            return None;
        }

        self.field_errors.clear();
        self.phase = FormPhase::Submitting;
        Some(draft)
    }

    pub fn on_submit_success(&mut self, ticket_id: Uuid) {
        info!("Repair request submitted: {}", ticket_id);
        self.phase = FormPhase::Success { ticket_id };
    }

    pub fn on_submit_failed(&mut self, error: ClientError) {
        warn!("Repair request submission failed: {}", error);
        self.phase = FormPhase::Editing;
        let errors = error.field_errors();
        if errors.is_empty() {
            self.banner = Some(error.to_string());
        } else {
            self.field_errors = errors.to_vec();
        }
    }

    pub async fn submit(&mut self) {
        let Some(draft) = self.begin_submit() else {
            return;
        };
        match self.api.submit_repair_request(&draft).await {
            Ok(ticket_id) => self.on_submit_success(ticket_id),
            Err(e) => self.on_submit_failed(e),
        }
    }

    /// Back to an empty form after a successful submission.
    pub fn reset(&mut self) {
        self.name.clear();
        self.address.clear();
        self.issue_type.clear();
        self.priority.clear();
        self.description.clear();
        self.field_errors.clear();
        self.banner = None;
        self.phase = FormPhase::Editing;
    }
}
