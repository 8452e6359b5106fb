//! Request extractors

use axum::{body::Bytes, extract::FromRequest};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// `Json` extractor whose rejections use the API error envelope.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Decode a raw body that may be absent.
///
/// An empty (or whitespace-only) body yields `T::default()`; anything else
/// must be a JSON document for `T`. Content-Type is not inspected. Handlers
/// take `Bytes` and call this after their own lookups, so a bad body never
/// masks a missing resource.
pub fn json_or_default<T: DeserializeOwned + Default>(body: &Bytes) -> Result<T, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(body)
        .map_err(|e| ApiError::BadRequest(format!("Invalid request body: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use repair_core::validation::AssignWorkerDraft;

    #[test]
    fn test_empty_body_is_default() {
        let draft: AssignWorkerDraft = json_or_default(&Bytes::new()).unwrap();
        assert_eq!(draft, AssignWorkerDraft::default());

        let draft: AssignWorkerDraft = json_or_default(&Bytes::from_static(b" \n")).unwrap();
        assert_eq!(draft.worker_id(), None);
    }

    #[test]
    fn test_body_is_decoded() {
        let draft: AssignWorkerDraft = json_or_default(&Bytes::from_static(br#"{"workerId":"w-1"}"#)).unwrap();
        assert_eq!(draft.worker_id(), Some("w-1"));
    }

    #[test]
    fn test_bad_body_is_bad_request() {
        let cases: [&[u8]; 3] = [br#"{"workerId":123}"#, b"{not json", br#"{"worker":"w-1"}"#];
        for raw in cases {
            match json_or_default::<AssignWorkerDraft>(&Bytes::copy_from_slice(raw)) {
                Err(ApiError::BadRequest(msg)) => assert!(msg.starts_with("Invalid request body")),
                other => panic!("unexpected: {:?}", other.map(|_| ())),
            }
        }
    }
}
