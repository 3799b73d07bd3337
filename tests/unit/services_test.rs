//! Tests for the orchestration services: verification, publication gating,
//! feed fallback, and report lookup

use credgate::adapters::MemoryStore;
use credgate::core::ports::KeyValueStore;
use credgate::core::services::{Feed, Publisher, Remote, Reports, Verifier};
use credgate::core::sourced::{CancelToken, Sourced};
use credgate::error::GateError;
use credgate::models::{Decision, PostMode};
use credgate::store::LocalStore;

use super::common::fixtures;
use super::common::mocks::{FakeApi, Respond};

fn backend<'a>(api: &'a FakeApi) -> Remote<'a> {
    Remote::Backend {
        endpoint: "http://localhost:8000",
        api,
    }
}

// =============================================================================
// VERIFICATION
// =============================================================================

#[test]
fn demo_blockme_is_blocked_and_unpublishable() {
    // Scenario A
    let kv = MemoryStore::new();
    let store = LocalStore::new(&kv);
    let remote = Remote::Demo;

    let report = Verifier::new(&remote, &store).verify("https://x.com/blockme", None).unwrap();
    assert_eq!(report.decision, Decision::Block);
    assert!(report.credibility_score <= 100);

    let err = Publisher::new(&remote, &store).publish(&report, PostMode::Normal).unwrap_err();
    assert!(matches!(err, GateError::InvalidPublicationMode { .. }));
    assert!(store.posts().is_empty(), "a rejected publish must not produce a post");
}

#[test]
fn demo_warnme_publishes_with_warning_label() {
    // Scenario B
    let kv = MemoryStore::new();
    let store = LocalStore::new(&kv);
    let remote = Remote::Demo;

    let report = Verifier::new(&remote, &store).verify("https://x.com/warnme", None).unwrap();
    assert_eq!(report.decision, Decision::Warn);

    let post = Publisher::new(&remote, &store)
        .publish(&report, PostMode::WarningLabel)
        .unwrap()
        .into_inner();
    assert_eq!(post.verification_id, report.verification_id);
    assert_eq!(post.post_mode, PostMode::WarningLabel);

    let feed = Feed::new(&remote, &store).list();
    assert_eq!(feed.get().len(), 1);
    assert_eq!(feed.get()[0].verification_id, report.verification_id);
}

#[test]
fn demo_verify_caches_the_report() {
    let kv = MemoryStore::new();
    let store = LocalStore::new(&kv);

    let report = Verifier::new(&Remote::Demo, &store).verify("https://x.com/fine", None).unwrap();
    let cached = store.report(&report.verification_id).unwrap();
    assert_eq!(cached, report);
}

#[test]
fn unreachable_backend_fails_verify_and_caches_nothing() {
    // Scenario C: a configured backend is never silently mocked
    let api = FakeApi::down();
    let kv = MemoryStore::new();
    let store = LocalStore::new(&kv);
    let remote = backend(&api);

    let err = Verifier::new(&remote, &store).verify("https://x.com/anything", None).unwrap_err();
    match err {
        GateError::ServiceUnavailable { guidance } => {
            assert!(guidance.contains("http://localhost:8000"));
            assert!(guidance.contains("CREDGATE_ENDPOINT"));
        },
        other => panic!("expected ServiceUnavailable, got {other:?}"),
    }
    assert!(kv.keys().unwrap().is_empty(), "no report may be cached on failure");
}

#[test]
fn unprocessable_article_is_surfaced_as_is() {
    let api = FakeApi::new();
    api.verify.borrow_mut().push_back(Respond::Unprocessable);
    let kv = MemoryStore::new();
    let store = LocalStore::new(&kv);
    let remote = backend(&api);

    let err = Verifier::new(&remote, &store).verify("https://x.com/not-an-article", None)
        .unwrap_err();
    assert!(matches!(err, GateError::UnprocessableArticle));
    assert!(kv.keys().unwrap().is_empty());
}

#[test]
fn healthy_backend_verify_caches_the_live_report() {
    let api = FakeApi::new();
    api.verify.borrow_mut().push_back(Respond::Ok(fixtures::report("v1", Decision::Allow)));
    let kv = MemoryStore::new();
    let store = LocalStore::new(&kv);
    let remote = backend(&api);

    let report = Verifier::new(&remote, &store).verify("https://x.com/a", None).unwrap();
    assert_eq!(report.verification_id, "v1");
    assert_eq!(store.report("v1").unwrap(), report);
}

// =============================================================================
// PUBLICATION
// =============================================================================

#[test]
fn remote_publish_success_then_outage_falls_back_locally() {
    // Scenario D: second publish during an outage yields a local post with a
    // distinct id prefix
    let api = FakeApi::new();
    let live_report = fixtures::report("v1", Decision::Allow);
    api.verify.borrow_mut().push_back(Respond::Ok(live_report.clone()));
    api.create.borrow_mut().push_back(Respond::Ok(fixtures::server_post(
        "srv-1",
        &live_report,
        PostMode::Normal,
    )));
    // create queue now exhausted: the write path is down

    let kv = MemoryStore::new();
    let store = LocalStore::new(&kv);
    let remote = backend(&api);

    let report = Verifier::new(&remote, &store).verify("https://x.com/a", None).unwrap();
    let publisher = Publisher::new(&remote, &store);

    let first = publisher.publish(&report, PostMode::Normal).unwrap();
    assert!(first.is_live());
    assert_eq!(first.get().id, "srv-1");

    let second = publisher.publish(&report, PostMode::Normal).unwrap();
    assert!(!second.is_live());
    assert!(second.get().id.starts_with("local-"));
    assert_eq!(second.get().verification_id, "v1");

    // both writes landed in the feed cache, most-recent-first
    let posts = store.posts();
    assert_eq!(posts.len(), 2);
    assert!(posts[0].id.starts_with("local-"));
    assert_eq!(posts[1].id, "srv-1");
}

#[test]
fn gate_is_checked_before_any_remote_call() {
    let api = FakeApi::new();
    let kv = MemoryStore::new();
    let store = LocalStore::new(&kv);
    let remote = backend(&api);

    let report = fixtures::report("v2", Decision::Warn);
    let err =
        Publisher::new(&remote, &store).publish(&report, PostMode::Normal).unwrap_err();
    assert!(matches!(
        err,
        GateError::InvalidPublicationMode {
            decision: Decision::Warn,
            mode: PostMode::Normal,
        }
    ));
    assert!(api.created_modes.borrow().is_empty(), "no remote call on a gate violation");
    assert!(store.posts().is_empty());
}

#[test]
fn local_fallback_snapshots_the_cached_report() {
    let api = FakeApi::down();
    let kv = MemoryStore::new();
    let store = LocalStore::new(&kv);
    let remote = backend(&api);

    let mut cached = fixtures::report("v3", Decision::Allow);
    cached.summary = "Cached summary.".to_string();
    store.save_report(&cached);

    let mut in_hand = cached.clone();
    in_hand.summary = "Stale in-hand summary.".to_string();

    let post = Publisher::new(&remote, &store)
        .publish(&in_hand, PostMode::Normal)
        .unwrap()
        .into_inner();
    assert_eq!(post.summary, "Cached summary.");
}

#[test]
fn publish_by_id_resolves_mock_ids_as_last_resort() {
    let kv = MemoryStore::new();
    let store = LocalStore::new(&kv);
    let remote = Remote::Demo;

    let post = Publisher::new(&remote, &store)
        .publish_by_id("mock-warn-1700000000000-3", PostMode::WarningLabel)
        .unwrap()
        .into_inner();
    assert_eq!(post.verification_id, "mock-warn-1700000000000-3");
    assert_eq!(post.decision, Decision::Warn);
}

#[test]
fn publish_by_id_fails_for_unresolvable_ids() {
    let kv = MemoryStore::new();
    let store = LocalStore::new(&kv);

    let err = Publisher::new(&Remote::Demo, &store)
        .publish_by_id("v-nowhere", PostMode::Normal)
        .unwrap_err();
    assert!(matches!(err, GateError::ReportNotFound(_)));
}

// =============================================================================
// FEED
// =============================================================================

#[test]
fn feed_read_failure_returns_cache_in_insertion_order() {
    let api = FakeApi::down();
    let kv = MemoryStore::new();
    let store = LocalStore::new(&kv);
    let remote = backend(&api);

    let report = fixtures::report("v1", Decision::Allow);
    store.push_post(&fixtures::server_post("srv-1", &report, PostMode::Normal));
    store.push_post(&fixtures::server_post("srv-2", &report, PostMode::Normal));

    let feed = Feed::new(&remote, &store).list();
    assert!(!feed.is_live());
    let ids: Vec<&str> = feed.get().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["srv-2", "srv-1"]);
}

#[test]
fn successful_feed_read_mirrors_server_order() {
    let api = FakeApi::new();
    let report = fixtures::report("v1", Decision::Allow);
    let newest = fixtures::server_post("srv-9", &report, PostMode::Normal);
    let older = fixtures::server_post("srv-8", &report, PostMode::Normal);
    api.posts.borrow_mut().push_back(Respond::Ok(vec![newest, older]));

    let kv = MemoryStore::new();
    let store = LocalStore::new(&kv);
    let remote = backend(&api);

    let feed = Feed::new(&remote, &store).list();
    assert!(feed.is_live());

    let cached: Vec<String> = store.posts().into_iter().map(|p| p.id).collect();
    assert_eq!(cached, vec!["srv-9", "srv-8"]);
}

#[test]
fn reset_clears_locally_in_demo_mode() {
    let kv = MemoryStore::new();
    let store = LocalStore::new(&kv);
    let report = fixtures::report("v1", Decision::Allow);
    store.push_post(&fixtures::server_post("srv-1", &report, PostMode::Normal));

    Feed::new(&Remote::Demo, &store).reset().unwrap();
    assert!(store.posts().is_empty());
}

#[test]
fn reset_keeps_the_cache_when_the_server_clear_fails() {
    let api = FakeApi::down();
    let kv = MemoryStore::new();
    let store = LocalStore::new(&kv);
    let remote = backend(&api);

    let report = fixtures::report("v1", Decision::Allow);
    store.push_post(&fixtures::server_post("srv-1", &report, PostMode::Normal));

    let err = Feed::new(&remote, &store).reset().unwrap_err();
    assert!(matches!(err, GateError::ServiceUnavailable { .. }));
    assert_eq!(store.posts().len(), 1);
}

// =============================================================================
// REPORT LOOKUP
// =============================================================================

#[test]
fn lookup_prefers_the_remote_report() {
    let api = FakeApi::new();
    api.reports
        .borrow_mut()
        .push_back(Respond::Ok(Some(fixtures::report("v1", Decision::Allow))));
    let kv = MemoryStore::new();
    let store = LocalStore::new(&kv);
    store.save_report(&fixtures::report("v1", Decision::Warn));
    let remote = backend(&api);

    let found = Reports::new(&remote, &store).get("v1").unwrap();
    assert!(found.is_live());
    assert_eq!(found.get().decision, Decision::Allow);
}

#[test]
fn lookup_falls_back_to_cache_then_mock_templates() {
    let api = FakeApi::down();
    let kv = MemoryStore::new();
    let store = LocalStore::new(&kv);
    let remote = backend(&api);
    let reports = Reports::new(&remote, &store);

    store.save_report(&fixtures::report("v1", Decision::Allow));
    assert!(matches!(reports.get("v1"), Some(Sourced::Local(_))));

    let synthesized = reports.get("mock-block-1700000000000-1").unwrap();
    assert!(matches!(synthesized, Sourced::Synthesized(_)));
    assert_eq!(synthesized.get().decision, Decision::Block);

    assert!(reports.get("v-unknown").is_none());
}

#[test]
fn remote_404_still_walks_the_chain() {
    let api = FakeApi::new();
    api.reports.borrow_mut().push_back(Respond::Ok(None));
    let kv = MemoryStore::new();
    let store = LocalStore::new(&kv);
    store.save_report(&fixtures::report("v1", Decision::Allow));
    let remote = backend(&api);

    let found = Reports::new(&remote, &store).get("v1").unwrap();
    assert!(matches!(found, Sourced::Local(_)));
}

#[test]
fn cancelled_lookup_discards_its_result() {
    let kv = MemoryStore::new();
    let store = LocalStore::new(&kv);
    store.save_report(&fixtures::report("v1", Decision::Allow));
    let reports = Reports::new(&Remote::Demo, &store);

    let token = CancelToken::new();
    token.cancel();
    assert!(reports.get_unless_cancelled("v1", &token).is_none());

    let fresh = CancelToken::new();
    assert!(reports.get_unless_cancelled("v1", &fresh).is_some());
}
