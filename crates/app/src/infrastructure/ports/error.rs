//! Error types for port operations.

/// A single remote service call failed.
///
/// Clients never retry on their own; callers decide what a failure
/// means. The raw body is carried so the operator can reconcile later.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RemoteServiceError {
    /// Request never produced an HTTP response (DNS, connect, timeout).
    #[error("{service} request failed: {message}")]
    Transport {
        service: &'static str,
        message: String,
    },

    /// Non-2xx status from the service.
    #[error("{service} returned HTTP {status}: {body}")]
    Status {
        service: &'static str,
        status: u16,
        body: String,
    },

    /// 2xx response that could not be decoded.
    #[error("{service} response malformed: {message}")]
    Malformed {
        service: &'static str,
        message: String,
    },

    /// 2xx response missing the discriminating field. A success status
    /// without it is still a failure.
    #[error("{service} response missing '{field}': {body}")]
    MissingField {
        service: &'static str,
        field: &'static str,
        body: String,
    },
}

impl RemoteServiceError {
    pub fn transport(service: &'static str, message: impl ToString) -> Self {
        Self::Transport {
            service,
            message: message.to_string(),
        }
    }

    pub fn status(service: &'static str, status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            service,
            status,
            body: body.into(),
        }
    }

    pub fn malformed(service: &'static str, message: impl ToString) -> Self {
        Self::Malformed {
            service,
            message: message.to_string(),
        }
    }

    pub fn missing_field(service: &'static str, field: &'static str, body: impl Into<String>) -> Self {
        Self::MissingField {
            service,
            field,
            body: body.into(),
        }
    }

    /// HTTP status, when one was received.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Raw response body, when one was received.
    pub fn raw_body(&self) -> Option<&str> {
        match self {
            Self::Status { body, .. } | Self::MissingField { body, .. } => Some(body),
            _ => None,
        }
    }

    pub fn service(&self) -> &'static str {
        match self {
            Self::Transport { service, .. }
            | Self::Status { service, .. }
            | Self::Malformed { service, .. }
            | Self::MissingField { service, .. } => service,
        }
    }
}

/// Failures surfaced by the wallet provider.
///
/// The variants mirror how providers report failures: a declined prompt,
/// a balance check, a revert reason string, or anything else.
#[derive(Debug, Clone, thiserror::Error)]
pub enum WalletError {
    /// The user declined the wallet prompt.
    #[error("user rejected the wallet prompt")]
    Rejected,

    /// Balance below the required fee plus gas.
    #[error("insufficient funds for the mint fee")]
    InsufficientFunds,

    /// On-chain revert with the reason string from the node.
    #[error("contract reverted: {0}")]
    Reverted(String),

    /// Any other provider failure.
    #[error("wallet provider error: {0}")]
    Provider(String),
}
