use thiserror::Error;

/// Errors surfaced by the backend client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure: connection refused, timeout, bad JSON.
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),
    /// The backend answered with a non-success status. The message comes
    /// from its `{"message": ...}` envelope when one is present.
    #[error("{message}")]
    Backend { status: u16, message: String },
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Backend { status: 401 | 403, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_errors_display_the_server_message() {
        let err = ApiError::Backend {
            status: 401,
            message: "Invalid credentials".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid credentials");
        assert!(err.is_unauthorized());
    }
}
