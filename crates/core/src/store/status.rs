//! # Load Status
//!
//! Lifecycle marker for a store's most recent fetch-shaped operation.

use serde::{Deserialize, Serialize};

/// The four-valued lifecycle of a store's collection.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum LoadStatus {
    /// Nothing has been requested yet.
    #[default]
    Idle,
    /// A fetch or remote call is in flight.
    Loading,
    /// The last operation succeeded; items are current.
    Ready,
    /// The last operation failed; prior items (if any) are still served.
    Failed,
}

impl LoadStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Ready => "ready",
            Self::Failed => "failed",
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serialization() {
        let status = LoadStatus::Loading;
        let json = serde_json::to_string(&status).unwrap();
        assert_eq!(json, "\"loading\"");
    }

    #[test]
    fn test_default_is_idle() {
        assert_eq!(LoadStatus::default(), LoadStatus::Idle);
    }
}
