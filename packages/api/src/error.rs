use thiserror::Error;

/// Failure of a backend call.
///
/// - [`ApiError::Network`]: the request never produced a response (offline,
///   DNS, CORS, aborted).
/// - [`ApiError::Rejected`]: the backend answered with a non-2xx status or a
///   false `success` flag. Carries the backend's `error` text, or a fixed
///   fallback for the endpoint when it sent none.
/// - [`ApiError::Decode`]: a 2xx response whose body did not match the contract.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("{0}")]
    Rejected(String),

    #[error("unexpected response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network(_))
    }

    /// Text to show the user: `network` for connectivity failures, the
    /// backend's message for rejections, `fallback` for malformed responses.
    pub fn user_message(&self, network: &str, fallback: &str) -> String {
        match self {
            ApiError::Network(_) => network.to_string(),
            ApiError::Rejected(message) => message.clone(),
            ApiError::Decode(_) => fallback.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message() {
        let rejected = ApiError::Rejected("Email already in use".into());
        assert_eq!(rejected.user_message("offline", "failed"), "Email already in use");
        assert!(!rejected.is_network());

        let decode = ApiError::Decode(serde_json::from_str::<u8>("x").unwrap_err());
        assert_eq!(decode.user_message("offline", "failed"), "failed");
    }
}
