//! Errors returned by catalog lookups.

/// Errors that can occur while talking to the catalog service
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Access token rejected")]
    Unauthorized,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Rate limited - try again later")]
    RateLimited,

    #[error("API request failed: {0}")]
    ApiError(String),

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Batch of {requested} IDs exceeds the limit of {limit}")]
    BatchTooLarge { requested: usize, limit: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CatalogError::BatchTooLarge {
            requested: 51,
            limit: 50,
        };
        let msg = err.to_string();
        assert!(msg.contains("51"));
        assert!(msg.contains("50"));

        let msg = CatalogError::NotFound("artist abc".into()).to_string();
        assert!(msg.contains("artist abc"));
    }
}
