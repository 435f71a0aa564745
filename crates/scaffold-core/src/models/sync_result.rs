//! Result of a (placeholder) sync run

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::util::iso_timestamp;

/// Counts of notes pushed to and pulled from a remote, plus completion time.
///
/// Not persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncResult {
    pub pushed: u32,
    pub pulled: u32,
    pub last_sync: String,
}

impl SyncResult {
    /// A sync that moved nothing, completed at `at`
    #[must_use]
    pub fn empty(at: DateTime<Utc>) -> Self {
        Self {
            pushed: 0,
            pulled: 0,
            last_sync: iso_timestamp(at),
        }
    }

    /// One-line summary for display
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Last sync at {} (pushed {}, pulled {})",
            self.last_sync, self.pushed, self.pulled
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_empty_summary_and_shape() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let result = SyncResult::empty(at);

        assert_eq!(
            result.summary(),
            "Last sync at 2024-05-01T12:00:00.000Z (pushed 0, pulled 0)"
        );
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["lastSync"], "2024-05-01T12:00:00.000Z");
        assert_eq!(json["pushed"], 0);
        assert_eq!(json["pulled"], 0);
    }
}
