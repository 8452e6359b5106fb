// ============================================================================
// Repair Core - Worker Entity
// File: crates/repair-core/src/domain/worker.rs
// Description: Maintenance worker assignable to tickets
// ============================================================================

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use repair_shared::new_id;

/// Worker specialization enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Specialization {
    Plumber,
    Electrician,
    Carpenter,
    #[serde(rename = "HVAC Technician")]
    HvacTechnician,
    General,
}

impl Specialization {
    pub const ALL: [Specialization; 5] = [
        Specialization::Plumber,
        Specialization::Electrician,
        Specialization::Carpenter,
        Specialization::HvacTechnician,
        Specialization::General,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Specialization::Plumber => "Plumber",
            Specialization::Electrician => "Electrician",
            Specialization::Carpenter => "Carpenter",
            Specialization::HvacTechnician => "HVAC Technician",
            Specialization::General => "General",
        }
    }

    /// Exact, case-sensitive match against the display spelling.
    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == s)
    }

    pub fn allowed_values() -> String {
        super::join_values(&Self::ALL.map(|v| v.as_str()))
    }
}

/// Validated fields of a worker about to be created.
#[derive(Debug, Clone, PartialEq)]
pub struct NewWorker {
    pub name: String,
    pub specialization: Specialization,
}

/// Maintenance worker entity.
///
/// Tickets embed a copy of this record when a worker is assigned; the copy is
/// never refreshed afterwards, even when the worker is deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Worker {
    pub id: Uuid,
    pub name: String,
    pub specialization: Specialization,
}

impl Worker {
    pub fn new(fields: NewWorker) -> Self {
        Self {
            id: new_id(),
            name: fields.name,
            specialization: fields.specialization,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_specialization_wire_names() {
        assert_eq!(
            serde_json::to_string(&Specialization::HvacTechnician).unwrap(),
            "\"HVAC Technician\""
        );
        assert_eq!(Specialization::from_str("HVAC Technician"), Some(Specialization::HvacTechnician));
        assert_eq!(Specialization::from_str("plumber"), None);
        assert_eq!(
            Specialization::allowed_values(),
            "Plumber, Electrician, Carpenter, HVAC Technician, General"
        );
    }

    #[test]
    fn test_new_worker_gets_fresh_id() {
        let fields = NewWorker {
            name: "Sophie de Groot".to_string(),
            specialization: Specialization::Electrician,
        };
        let a = Worker::new(fields.clone());
        let b = Worker::new(fields);
        assert_ne!(a.id, b.id);
        assert_eq!(a.name, "Sophie de Groot");
    }
}
