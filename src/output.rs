//! Output formatting for human and JSON modes
//!
//! Human mode renders decision badges in color and labels degraded data;
//! JSON mode emits the serialized records for scripting.

use colored::Colorize;
use serde::Serialize;

use crate::core::policy;
use crate::core::sourced::Sourced;
use crate::models::{Decision, Post, PostMode, VerificationReport};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("failed to encode output: {e}"),
    }
}

fn badge(decision: Decision) -> colored::ColoredString {
    match decision {
        Decision::Allow => " ALLOW ".black().on_green(),
        Decision::Warn => " WARN ".black().on_yellow(),
        Decision::Block => " BLOCK ".white().on_red(),
    }
}

/// Render a verification report
pub fn print_report(report: &VerificationReport, mode: OutputMode) {
    if mode == OutputMode::Json {
        print_json(report);
        return;
    }

    println!(
        "{} credibility {}/100  ({})",
        badge(report.decision),
        report.credibility_score,
        report.verification_id.dimmed()
    );
    println!("{}", report.article.title.bold());
    if let Some(publisher) = &report.article.publisher {
        println!("{} - {}", report.article.url.underline(), publisher);
    } else {
        println!("{}", report.article.url.underline());
    }
    println!("\n{}", report.summary);

    if let Some(likelihood) = report.ai_likelihood {
        println!("AI likelihood: {:.0}%", likelihood * 100.0);
    }
    if !report.manipulation_signals.is_empty() {
        println!("Signals: {}", report.manipulation_signals.join(", "));
    }

    if !report.claims.is_empty() {
        println!("\nClaims:");
        for claim in &report.claims {
            println!(
                "  [{} {:.0}%] {}",
                claim.verdict,
                claim.confidence * 100.0,
                claim.text
            );
            for evidence in &claim.evidence {
                println!("    {} {} - {}", evidence.stance, evidence.source, evidence.note);
            }
        }
    }
}

/// Render the publication actions a report's decision permits
///
/// BLOCK gets an explicit blocking message, never a silent omission.
pub fn print_permitted_actions(decision: Decision, mode: OutputMode) {
    if mode == OutputMode::Json {
        return;
    }

    let permitted = policy::permitted_modes(decision);
    if permitted.is_empty() {
        println!(
            "\n{}",
            "Publication is blocked: this article failed credibility verification.".red()
        );
    } else {
        let modes: Vec<String> = permitted.iter().map(ToString::to_string).collect();
        println!("\nPermitted post modes: {}", modes.join(", "));
    }
}

/// Render a single post
pub fn print_post(post: &Post, mode: OutputMode) {
    if mode == OutputMode::Json {
        print_json(post);
        return;
    }

    let label = if post.post_mode == PostMode::WarningLabel {
        " [caution label]".yellow().to_string()
    } else {
        String::new()
    };
    println!("{} {}{}", badge(post.decision), post.article_title.bold(), label);
    println!(
        "  {} | score {}/100 | {} | {}",
        post.created_at.dimmed(),
        post.credibility_score,
        post.article_url,
        post.id.dimmed()
    );
}

/// Render the feed, most-recent-first
pub fn print_feed(posts: &[Post], mode: OutputMode) {
    if mode == OutputMode::Json {
        print_json(&posts);
        return;
    }

    if posts.is_empty() {
        println!("The feed is empty.");
        return;
    }
    for post in posts {
        print_post(post, mode);
    }
}

/// Note when a result did not come from the authoritative service
pub fn print_source_notice<T>(sourced: &Sourced<T>, mode: OutputMode) {
    if mode == OutputMode::Human && !sourced.is_live() {
        eprintln!(
            "{}",
            format!("(showing {} data; the service was not consulted or was unreachable)",
                sourced.source_label())
            .dimmed()
        );
    }
}
