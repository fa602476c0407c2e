use axum::http::StatusCode;
use serde::Serialize;

/// Wire wrapper shared by every calculator response.
///
/// Serializes as `{"Message": <message>, "Status code": <status>}`, in that order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope<T> {
    #[serde(rename = "Message")]
    pub message: T,
    #[serde(rename = "Status code")]
    pub status_code: u16,
}

impl<T> Envelope<T> {
    #[must_use]
    pub fn new(message: T, status: StatusCode) -> Self {
        Self {
            message,
            status_code: status.as_u16(),
        }
    }

    #[must_use]
    pub fn ok(message: T) -> Self {
        Self::new(message, StatusCode::OK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_reference_field_names() {
        let body = serde_json::to_string(&Envelope::ok(7)).expect("serialize");
        assert_eq!(body, r#"{"Message":7,"Status code":200}"#);
    }
}
