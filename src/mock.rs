//! Mock synthesizer - deterministic stand-in reports for demo mode
//!
//! When no remote endpoint is configured, the system still has to be
//! demonstrable end-to-end, so `synthesize` produces a plausible, fully
//! populated report classified from the URL alone: "block"/"fake" in the URL
//! yields the high-risk template, "warn" the medium-risk one, anything else
//! the low-risk one. Templates are fixed; only `verification_id` is minted
//! fresh per call so repeated verifications cache independently.
//!
//! The verification client never routes here once a real endpoint is
//! configured — a configured-but-unreachable backend is an error, not an
//! excuse to fabricate a verification.

use crate::core::ids;
use crate::models::{Article, Claim, Decision, Evidence, Stance, VerificationReport, Verdict};

/// Id prefix of synthesized low-risk reports
pub const ALLOW_ID_PREFIX: &str = "mock-allow";
/// Id prefix of synthesized medium-risk reports
pub const WARN_ID_PREFIX: &str = "mock-warn";
/// Id prefix of synthesized high-risk reports
pub const BLOCK_ID_PREFIX: &str = "mock-block";

/// Synthesize a report for `url`, classified by substring signal
///
/// Deterministic given the URL's content category; only the
/// `verification_id` differs between calls.
#[must_use]
pub fn synthesize(url: &str) -> VerificationReport {
    if url.contains("block") || url.contains("fake") {
        block_template(ids::unique_id(BLOCK_ID_PREFIX))
    } else if url.contains("warn") {
        warn_template(ids::unique_id(WARN_ID_PREFIX))
    } else {
        allow_template(ids::unique_id(ALLOW_ID_PREFIX))
    }
}

/// Resolve a mock verification id back to its template
///
/// Lets links to demo-mode reports survive a restart: the store may be gone,
/// but the three known id prefixes still classify. Returns `None` for ids
/// that are not mock ids.
#[must_use]
pub fn template_for_id(verification_id: &str) -> Option<VerificationReport> {
    if verification_id.starts_with(BLOCK_ID_PREFIX) {
        Some(block_template(verification_id.to_string()))
    } else if verification_id.starts_with(WARN_ID_PREFIX) {
        Some(warn_template(verification_id.to_string()))
    } else if verification_id.starts_with(ALLOW_ID_PREFIX) {
        Some(allow_template(verification_id.to_string()))
    } else {
        None
    }
}

fn allow_template(verification_id: String) -> VerificationReport {
    VerificationReport {
        verification_id,
        decision: Decision::Allow,
        credibility_score: 82,
        ai_likelihood: Some(0.12),
        manipulation_signals: Vec::new(),
        summary: "Article from reputable source with well-sourced claims. No significant \
                  manipulation detected."
            .to_string(),
        article: Article {
            title: "Climate Scientists Agree on 97% Consensus: Comprehensive Review".to_string(),
            url: "https://example.com/climate-consensus".to_string(),
            publisher: Some("Science Journal".to_string()),
            published_date: Some("2024-01-15".to_string()),
        },
        claims: vec![
            Claim {
                id: "c1".to_string(),
                text: "97% of climate scientists agree that human activity is causing global \
                       warming."
                    .to_string(),
                verdict: Verdict::Supported,
                confidence: 0.95,
                evidence: vec![Evidence {
                    source: "NASA Climate".to_string(),
                    url: "https://climate.nasa.gov".to_string(),
                    stance: Stance::Supports,
                    note: "Multiple peer-reviewed studies confirm this consensus.".to_string(),
                }],
            },
            Claim {
                id: "c2".to_string(),
                text: "Global temperatures have risen 1.1°C since pre-industrial times."
                    .to_string(),
                verdict: Verdict::Supported,
                confidence: 0.98,
                evidence: vec![Evidence {
                    source: "NOAA".to_string(),
                    url: "https://noaa.gov".to_string(),
                    stance: Stance::Supports,
                    note: "Direct temperature measurements support this figure.".to_string(),
                }],
            },
        ],
    }
}

fn warn_template(verification_id: String) -> VerificationReport {
    VerificationReport {
        verification_id,
        decision: Decision::Warn,
        credibility_score: 42,
        ai_likelihood: Some(0.78),
        manipulation_signals: vec![
            "Emotional language".to_string(),
            "Cherry-picked statistics".to_string(),
            "Unverified claims".to_string(),
        ],
        summary: "Article contains several unverified claims and uses persuasive techniques. \
                  Exercise caution."
            .to_string(),
        article: Article {
            title: "Shocking Study Reveals What They Don't Want You to Know".to_string(),
            url: "https://example.com/sensational-article".to_string(),
            publisher: Some("Opinion Blog".to_string()),
            published_date: Some("2024-02-01".to_string()),
        },
        claims: vec![
            Claim {
                id: "c1".to_string(),
                text: "New study proves mainstream science is wrong.".to_string(),
                verdict: Verdict::Insufficient,
                confidence: 0.3,
                evidence: vec![Evidence {
                    source: "Retraction Watch".to_string(),
                    url: "https://retractionwatch.com".to_string(),
                    stance: Stance::Contradicts,
                    note: "The cited study has been criticized for methodological flaws."
                        .to_string(),
                }],
            },
            Claim {
                id: "c2".to_string(),
                text: "Experts are hiding the truth from the public.".to_string(),
                verdict: Verdict::Contradicted,
                confidence: 0.15,
                evidence: vec![Evidence {
                    source: "Fact Check Database".to_string(),
                    url: "https://factcheck.org".to_string(),
                    stance: Stance::Contradicts,
                    note: "No evidence supports this conspiracy claim.".to_string(),
                }],
            },
        ],
    }
}

fn block_template(verification_id: String) -> VerificationReport {
    VerificationReport {
        verification_id,
        decision: Decision::Block,
        credibility_score: 15,
        ai_likelihood: Some(0.92),
        manipulation_signals: vec![
            "Fabricated sources".to_string(),
            "Deepfake indicators".to_string(),
            "Coordinated inauthentic content".to_string(),
        ],
        summary: "High-risk misinformation. Multiple claims are fabricated and sources cannot \
                  be verified."
            .to_string(),
        article: Article {
            title: "BREAKING: Government Cover-up Exposed".to_string(),
            url: "https://example.com/fake-news".to_string(),
            publisher: Some("Unknown".to_string()),
            published_date: Some("2024-02-10".to_string()),
        },
        claims: vec![Claim {
            id: "c1".to_string(),
            text: "Government officials admitted to covering up evidence.".to_string(),
            verdict: Verdict::Contradicted,
            confidence: 0.02,
            evidence: vec![Evidence {
                source: "Reuters Fact Check".to_string(),
                url: "https://reuters.com".to_string(),
                stance: Stance::Contradicts,
                note: "No such admission exists. Fabricated quote.".to_string(),
            }],
        }],
    }
}
