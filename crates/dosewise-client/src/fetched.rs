//! Tagged results distinguishing live server data from local fallback data.

use crate::http::HttpError;

/// Why a live call was abandoned in favor of fallback data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackReason {
    /// Transport-level failure (connect, timeout, malformed body)
    Network(String),
    /// Backend answered with a non-2xx status
    Status(u16),
}

impl From<&HttpError> for FallbackReason {
    fn from(err: &HttpError) -> Self {
        match err {
            HttpError::Status { status, .. } => FallbackReason::Status(*status),
            other => FallbackReason::Network(other.to_string()),
        }
    }
}

impl std::fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FallbackReason::Network(msg) => write!(f, "network failure: {msg}"),
            FallbackReason::Status(status) => write!(f, "backend status {status}"),
        }
    }
}

/// A payload tagged with its source, so the UI can surface the difference
/// between real server data and locally synthesized data.
#[derive(Debug, Clone, PartialEq)]
pub enum Fetched<T> {
    /// Returned by the backend
    Live(T),
    /// Synthesized locally after the live call failed
    Fallback { data: T, reason: FallbackReason },
}

impl<T> Fetched<T> {
    pub fn fallback(data: T, reason: FallbackReason) -> Self {
        Fetched::Fallback { data, reason }
    }

    /// The payload, regardless of source.
    pub fn data(&self) -> &T {
        match self {
            Fetched::Live(data) => data,
            Fetched::Fallback { data, .. } => data,
        }
    }

    pub fn into_inner(self) -> T {
        match self {
            Fetched::Live(data) => data,
            Fetched::Fallback { data, .. } => data,
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self, Fetched::Live(_))
    }

    pub fn is_fallback(&self) -> bool {
        !self.is_live()
    }

    /// The fallback reason, when there is one.
    pub fn reason(&self) -> Option<&FallbackReason> {
        match self {
            Fetched::Live(_) => None,
            Fetched::Fallback { reason, .. } => Some(reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let live = Fetched::Live(1);
        assert!(live.is_live());
        assert_eq!(live.reason(), None);
        assert_eq!(live.into_inner(), 1);

        let fallback = Fetched::fallback(2, FallbackReason::Status(500));
        assert!(fallback.is_fallback());
        assert_eq!(*fallback.data(), 2);
        assert_eq!(fallback.reason(), Some(&FallbackReason::Status(500)));
    }

    #[test]
    fn test_reason_from_status_error() {
        let err = HttpError::Status {
            status: 503,
            body: "unavailable".into(),
        };
        assert_eq!(FallbackReason::from(&err), FallbackReason::Status(503));
    }
}
