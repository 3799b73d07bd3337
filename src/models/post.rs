//! Post model
//!
//! A `Post` is a published feed entry derived from exactly one
//! `VerificationReport` at creation time. The report fields it carries are a
//! snapshot — they are never re-synced if a newer report exists.

use serde::{Deserialize, Serialize};

use super::report::{Decision, VerificationReport};

/// How a post is presented in the feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostMode {
    /// Published unmodified
    Normal,
    /// Published with a viewer-facing caution label
    WarningLabel,
}

impl std::fmt::Display for PostMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "normal"),
            Self::WarningLabel => write!(f, "warning_label"),
        }
    }
}

impl std::str::FromStr for PostMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "normal" => Ok(Self::Normal),
            "warning_label" | "warning-label" => Ok(Self::WarningLabel),
            _ => Err(format!("Invalid post mode: {s}. Use: normal, warning_label")),
        }
    }
}

/// A published feed entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Post identifier; server-assigned, or `local-` prefixed when the post
    /// was constructed client-side after a remote failure
    pub id: String,
    /// Back-reference to the report this post was created from
    pub verification_id: String,
    /// Creation timestamp (RFC3339)
    pub created_at: String,
    /// Presentation mode chosen at publication time
    pub post_mode: PostMode,
    /// Snapshot of the report's decision
    pub decision: Decision,
    /// Snapshot of the report's credibility score
    pub credibility_score: u8,
    /// Snapshot of the article title
    pub article_title: String,
    /// Snapshot of the article URL
    pub article_url: String,
    /// Snapshot of the publisher, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    /// Snapshot of the report summary
    pub summary: String,
}

impl Post {
    /// Snapshot a post from a report, with a caller-supplied id and the
    /// current time
    #[must_use]
    pub fn from_report(report: &VerificationReport, mode: PostMode, id: String) -> Self {
        Self {
            id,
            verification_id: report.verification_id.clone(),
            created_at: chrono::Utc::now().to_rfc3339(),
            post_mode: mode,
            decision: report.decision,
            credibility_score: report.credibility_score,
            article_title: report.article.title.clone(),
            article_url: report.article.url.clone(),
            publisher: report.article.publisher.clone(),
            summary: report.summary.clone(),
        }
    }
}
