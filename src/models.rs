//! Frontend Models
//!
//! Data structures matching the issue tracker backend responses.

use serde::{Deserialize, Serialize};

/// Issue status as stored by the backend
///
/// The backend only writes "pending" and "resolved"; anything else is kept
/// verbatim so the badge can still show it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum IssueStatus {
    Pending,
    Resolved,
    Other(String),
}

impl IssueStatus {
    pub fn as_str(&self) -> &str {
        match self {
            IssueStatus::Pending => "pending",
            IssueStatus::Resolved => "resolved",
            IssueStatus::Other(raw) => raw.as_str(),
        }
    }

    /// Bootstrap badge class for this status
    pub fn badge_class(&self) -> &'static str {
        match self {
            IssueStatus::Pending => "badge-warning",
            IssueStatus::Resolved => "badge-success",
            IssueStatus::Other(_) => "badge-danger",
        }
    }
}

impl Default for IssueStatus {
    fn default() -> Self {
        IssueStatus::Other(String::new())
    }
}

impl From<String> for IssueStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "pending" => IssueStatus::Pending,
            "resolved" => IssueStatus::Resolved,
            _ => IssueStatus::Other(raw),
        }
    }
}

impl From<IssueStatus> for String {
    fn from(status: IssueStatus) -> Self {
        match status {
            IssueStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

/// A single reported issue (matches backend document)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub submitted_at: String,
    /// Null when the chat user lookup failed at submission time
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub issue_type: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub reproduce: Option<String>,
    #[serde(default)]
    pub log: Option<String>,
    #[serde(default)]
    pub status: IssueStatus,
}

/// Response of `GET /get-issues`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssuePage {
    pub total_issues: u64,
    #[serde(default)]
    pub issues: Vec<Issue>,
}

/// Response of `GET /get-issue-counts`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IssueCounts {
    pub total_issues: u64,
    pub pending_issues: u64,
    pub resolved_issues: u64,
}

/// Persisted light/dark display mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    pub fn from_dark(dark: bool) -> Self {
        if dark {
            ThemePreference::Dark
        } else {
            ThemePreference::Light
        }
    }

    /// Any stored value other than "dark" reads as light.
    pub fn from_stored(value: &str) -> Self {
        Self::from_dark(value == "dark")
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    pub fn is_dark(&self) -> bool {
        *self == ThemePreference::Dark
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_issue_page() {
        let body = r#"{
            "total_issues": 12,
            "issues": [{
                "_id": "65a1f0c2e4b0a1b2c3d4e5f6",
                "submitted_at": "2024-01-12 09:30:00",
                "user_id": "mpierre",
                "issue_type": "Straxen",
                "description": "Processing crashes",
                "reproduce": "run st.make()",
                "log": "KeyError: 'raw_records'",
                "machine_partition": "dali",
                "container": "2024.01.1",
                "straxen_version": "2.1.0",
                "status": "pending"
            }]
        }"#;

        let page: IssuePage = serde_json::from_str(body).expect("decode");
        assert_eq!(page.total_issues, 12);
        assert_eq!(page.issues.len(), 1);
        let issue = &page.issues[0];
        assert_eq!(issue.id.as_deref(), Some("65a1f0c2e4b0a1b2c3d4e5f6"));
        assert_eq!(issue.user_id.as_deref(), Some("mpierre"));
        assert_eq!(issue.status, IssueStatus::Pending);
    }

    #[test]
    fn test_decode_issue_with_missing_optional_fields() {
        let body = r#"{
            "submitted_at": "2024-01-12 09:30:00",
            "user_id": null,
            "issue_type": "Other",
            "description": "No details",
            "reproduce": null,
            "status": "resolved"
        }"#;

        let issue: Issue = serde_json::from_str(body).expect("decode");
        assert_eq!(issue.user_id, None);
        assert_eq!(issue.reproduce, None);
        assert_eq!(issue.log, None);
        assert_eq!(issue.status, IssueStatus::Resolved);
    }

    #[test]
    fn test_unknown_status_kept_verbatim() {
        let status: IssueStatus = serde_json::from_str(r#""wontfix""#).unwrap();
        assert_eq!(status, IssueStatus::Other("wontfix".to_string()));
        assert_eq!(status.as_str(), "wontfix");
        assert_eq!(status.badge_class(), "badge-danger");
        assert_eq!(serde_json::to_string(&status).unwrap(), r#""wontfix""#);
    }

    #[test]
    fn test_badge_classes() {
        assert_eq!(IssueStatus::Pending.badge_class(), "badge-warning");
        assert_eq!(IssueStatus::Resolved.badge_class(), "badge-success");
    }

    #[test]
    fn test_decode_counts() {
        let counts: IssueCounts = serde_json::from_str(
            r#"{"total_issues": 12, "pending_issues": 5, "resolved_issues": 7}"#,
        )
        .unwrap();
        assert_eq!(
            counts,
            IssueCounts {
                total_issues: 12,
                pending_issues: 5,
                resolved_issues: 7,
            }
        );
    }

    #[test]
    fn test_theme_from_stored() {
        assert_eq!(ThemePreference::from_stored("dark"), ThemePreference::Dark);
        assert_eq!(ThemePreference::from_stored("light"), ThemePreference::Light);
        assert_eq!(ThemePreference::from_stored("solarized"), ThemePreference::Light);
    }
}
