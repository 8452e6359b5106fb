//! Domain services (business logic)

pub mod ticket_service;
pub mod worker_service;

pub use ticket_service::TicketService;
pub use worker_service::WorkerService;

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Mutex;

    use crate::audit::{AuditRecord, AuditSink};

    /// Keeps every record in memory so tests can inspect them.
    #[derive(Default)]
    pub struct RecordingAuditSink {
        pub records: Mutex<Vec<AuditRecord>>,
    }

    impl RecordingAuditSink {
        pub fn event_names(&self) -> Vec<&'static str> {
            self.records.lock().unwrap().iter().map(|r| r.event.name()).collect()
        }
    }

    impl AuditSink for RecordingAuditSink {
        fn record(&self, record: AuditRecord) {
            self.records.lock().unwrap().push(record);
        }
    }
}
