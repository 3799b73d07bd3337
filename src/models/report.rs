//! Verification report model
//!
//! A `VerificationReport` is the structured result of analyzing one article
//! link. It is produced by the remote verification service (or synthesized in
//! demo mode), cached on arrival, and never mutated afterwards — a re-check
//! produces a new report with a new `verification_id`.

use serde::{Deserialize, Serialize};

/// Publication eligibility verdict attached to a verification report.
///
/// The set is closed: an unknown value in a service response is a
/// data-contract violation and fails deserialization rather than being
/// silently defaulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Decision {
    /// Credible enough to publish unmodified
    Allow,
    /// Publishable only with a viewer-facing caution label
    Warn,
    /// Publication disabled
    Block,
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Allow => write!(f, "ALLOW"),
            Self::Warn => write!(f, "WARN"),
            Self::Block => write!(f, "BLOCK"),
        }
    }
}

/// Verdict on a single claim extracted from the article
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    /// Evidence backs the claim
    Supported,
    /// Evidence contradicts the claim
    Contradicted,
    /// Not enough evidence either way
    Insufficient,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Supported => write!(f, "SUPPORTED"),
            Self::Contradicted => write!(f, "CONTRADICTED"),
            Self::Insufficient => write!(f, "INSUFFICIENT"),
        }
    }
}

/// How a piece of evidence relates to the claim it is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stance {
    /// The source supports the claim
    Supports,
    /// The source contradicts the claim
    Contradicts,
    /// The source is relevant but takes no side
    Neutral,
}

impl std::fmt::Display for Stance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Supports => write!(f, "supports"),
            Self::Contradicts => write!(f, "contradicts"),
            Self::Neutral => write!(f, "neutral"),
        }
    }
}

/// Metadata about the analyzed article
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    /// Article headline
    pub title: String,
    /// Canonical URL the verification ran against
    pub url: String,
    /// Publisher name, when the extractor could identify one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    /// Publication date as reported by the article
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_date: Option<String>,
}

/// A single source cited for or against a claim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evidence {
    /// Source name (e.g. "Reuters Fact Check")
    pub source: String,
    /// Source URL
    pub url: String,
    /// Whether the source supports, contradicts, or is neutral on the claim
    pub stance: Stance,
    /// Short note explaining the relevance
    pub note: String,
}

/// A claim extracted from the article, with its verdict and evidence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    /// Claim identifier, unique within one report
    pub id: String,
    /// The claim text as extracted
    pub text: String,
    /// Verdict after checking the claim against evidence
    pub verdict: Verdict,
    /// Verdict confidence in `[0, 1]`
    pub confidence: f64,
    /// Supporting/contradicting sources, in evidentiary priority order
    #[serde(default)]
    pub evidence: Vec<Evidence>,
}

/// Result of verifying one article link
///
/// Claim order is evidentiary priority and is preserved end-to-end. The
/// client only consumes `decision`; it never re-derives it from the score.
/// Unknown fields in service responses are tolerated and dropped;
/// `ai_likelihood` and `manipulation_signals` are optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationReport {
    /// Opaque unique report identifier; the cache/lookup key
    pub verification_id: String,
    /// Publication eligibility verdict
    pub decision: Decision,
    /// Overall credibility score in `[0, 100]`
    pub credibility_score: u8,
    /// Estimated likelihood the article text is AI-generated, in `[0, 1]`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_likelihood: Option<f64>,
    /// Short labels for detected manipulation techniques
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub manipulation_signals: Vec<String>,
    /// Free-text explanation of the verdict
    pub summary: String,
    /// Metadata about the analyzed article
    pub article: Article,
    /// Extracted claims in evidentiary priority order
    #[serde(default)]
    pub claims: Vec<Claim>,
}
