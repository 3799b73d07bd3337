//! Test fixtures

use credgate::models::{
    Article, Claim, Decision, Evidence, Post, PostMode, Stance, VerificationReport, Verdict,
};

/// A minimal but fully populated report
pub fn report(verification_id: &str, decision: Decision) -> VerificationReport {
    VerificationReport {
        verification_id: verification_id.to_string(),
        decision,
        credibility_score: 70,
        ai_likelihood: Some(0.2),
        manipulation_signals: Vec::new(),
        summary: "Test summary.".to_string(),
        article: Article {
            title: "Test Article".to_string(),
            url: "https://example.com/article".to_string(),
            publisher: Some("Test Publisher".to_string()),
            published_date: Some("2024-03-01".to_string()),
        },
        claims: vec![Claim {
            id: "c1".to_string(),
            text: "First claim.".to_string(),
            verdict: Verdict::Supported,
            confidence: 0.9,
            evidence: vec![Evidence {
                source: "Test Source".to_string(),
                url: "https://example.com/source".to_string(),
                stance: Stance::Supports,
                note: "Checks out.".to_string(),
            }],
        }],
    }
}

/// A post as the server would assign it
pub fn server_post(id: &str, source: &VerificationReport, mode: PostMode) -> Post {
    let mut post = Post::from_report(source, mode, id.to_string());
    post.created_at = "2024-03-01T12:00:00Z".to_string();
    post
}
