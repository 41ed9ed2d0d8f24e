use crate::models::ServerErrorBody;

const NETWORK_SUFFIX: &str = "Network error or unexpected response.";

/// Local validation failure of the expense draft
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DraftError {
    #[error("Date, Amount, and Category are required.")]
    MissingRequired { fields: Vec<&'static str> },
}

/// Failure of a call to the resource endpoint
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("server returned {status} {status_text}{}", exc_suffix(.exc_type))]
    Server {
        status: u16,
        status_text: String,
        message: Option<String>,
        /// Frappe exception class, e.g. "MandatoryError"
        exc_type: Option<String>,
    },
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected response: {0}")]
    Decode(String),
}

fn exc_suffix(exc_type: &Option<String>) -> String {
    exc_type
        .as_deref()
        .map(|t| format!(" ({})", t))
        .unwrap_or_default()
}

impl ApiError {
    /// Build a server error from a non-2xx response and its (possibly unreadable) body
    pub fn from_response(status: u16, status_text: impl Into<String>, body: &str) -> Self {
        let body = serde_json::from_str::<ServerErrorBody>(body).unwrap_or_default();
        let non_blank = |s: Option<String>| s.filter(|s| !s.trim().is_empty());
        ApiError::Server {
            status,
            status_text: status_text.into(),
            message: non_blank(body.message),
            exc_type: non_blank(body.exc_type),
        }
    }

    /// Server-provided `message`, falling back to the status text
    pub fn server_message(&self) -> Option<String> {
        match self {
            ApiError::Server {
                status_text,
                message,
                ..
            } => match message {
                Some(m) => Some(m.clone()),
                None if !status_text.is_empty() => Some(status_text.clone()),
                None => None,
            },
            _ => None,
        }
    }

    fn with_server_message(&self, action: &str) -> String {
        match self.server_message() {
            Some(message) => format!("Failed to {}: {}", action, message),
            None => format!("Failed to {}. {}", action, NETWORK_SUFFIX),
        }
    }

    /// User-facing text for a failed create
    pub fn create_message(&self) -> String {
        self.with_server_message("add expense")
    }

    /// User-facing text for a failed delete
    pub fn delete_message(&self) -> String {
        self.with_server_message("delete expense")
    }

    /// User-facing text for a failed list fetch
    pub fn fetch_message(&self) -> String {
        match self {
            ApiError::Server {
                status,
                status_text,
                ..
            } => format!("Failed to load expenses: {} - {}", status, status_text),
            _ => format!("Failed to load expenses. {}", NETWORK_SUFFIX),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_preferred_over_status_text() {
        let err = ApiError::from_response(
            417,
            "Expectation Failed",
            r#"{"exc_type": "MandatoryError", "message": "Amount is mandatory"}"#,
        );
        assert_eq!(err.create_message(), "Failed to add expense: Amount is mandatory");
        assert_eq!(err.delete_message(), "Failed to delete expense: Amount is mandatory");
    }

    #[test]
    fn test_exception_type_carried_into_error() {
        let err = ApiError::from_response(
            417,
            "Expectation Failed",
            r#"{"exc_type": "MandatoryError", "message": "Amount is mandatory"}"#,
        );
        assert!(matches!(
            &err,
            ApiError::Server { exc_type: Some(t), .. } if t == "MandatoryError"
        ));
        assert_eq!(err.to_string(), "server returned 417 Expectation Failed (MandatoryError)");

        let err = ApiError::from_response(404, "Not Found", r#"{"message": "Missing"}"#);
        assert_eq!(err.to_string(), "server returned 404 Not Found");
    }

    #[test]
    fn test_status_text_fallback_when_body_unreadable() {
        let err = ApiError::from_response(403, "Forbidden", "<html>nope</html>");
        assert_eq!(err.create_message(), "Failed to add expense: Forbidden");

        let err = ApiError::from_response(500, "Internal Server Error", r#"{"message": "  "}"#);
        assert_eq!(err.delete_message(), "Failed to delete expense: Internal Server Error");
    }

    #[test]
    fn test_generic_message_without_response() {
        let err = ApiError::Network("Failed to fetch".to_string());
        assert_eq!(
            err.create_message(),
            "Failed to add expense. Network error or unexpected response."
        );
        assert_eq!(
            err.delete_message(),
            "Failed to delete expense. Network error or unexpected response."
        );
        assert_eq!(
            err.fetch_message(),
            "Failed to load expenses. Network error or unexpected response."
        );

        let err = ApiError::Decode("expected value at line 1".to_string());
        assert_eq!(
            err.create_message(),
            "Failed to add expense. Network error or unexpected response."
        );

        // No message and no status text behaves like a transport failure
        let err = ApiError::from_response(502, "", "");
        assert_eq!(
            err.create_message(),
            "Failed to add expense. Network error or unexpected response."
        );
    }

    #[test]
    fn test_fetch_message_uses_status() {
        let err = ApiError::from_response(403, "Forbidden", r#"{"message": "Not permitted"}"#);
        assert_eq!(err.fetch_message(), "Failed to load expenses: 403 - Forbidden");
    }

    #[test]
    fn test_draft_error_text() {
        let err = DraftError::MissingRequired {
            fields: vec!["amount"],
        };
        assert_eq!(err.to_string(), "Date, Amount, and Category are required.");
    }
}
