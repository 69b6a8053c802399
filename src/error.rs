//! Error types for the gamification engines

/// Errors produced by a single derivation call.
///
/// Every call is pure and idempotent, so none of these need recovery:
/// the caller re-invokes with corrected input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GamificationError {
    #[error("Invalid {field}: {reason}")]
    InvalidInput {
        field: &'static str,
        reason: String,
    },

    #[error("Unknown notification kind: {0}")]
    UnknownNotificationKind(String),

    #[error("Unknown badge: {0}")]
    UnknownBadge(String),

    #[error("Notification '{kind}' requires payload field '{field}'")]
    MissingPayloadField {
        kind: &'static str,
        field: &'static str,
    },

    #[error("Challenge catalog is empty")]
    EmptyCatalog,

    #[error("Dependency unavailable: {0}")]
    Dependency(String),
}

impl GamificationError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GamificationError>;
