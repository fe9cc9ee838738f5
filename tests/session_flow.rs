//! Integration tests for the session store and context generation
//!
//! These drive the public library API the same way the wizard screens do.
//!
//! ```bash
//! cargo test --test session_flow
//! ```

use std::time::Duration;

use kickstart::generator::ContextGenerator;
use kickstart::session::{AuthConfig, SessionError, SessionStore, WizardStep};
use tokio_util::sync::CancellationToken;

// ─── Store Scenarios ─────────────────────────────────────────────────────────

#[test]
fn removing_selected_seed_clears_selection() {
    let mut store = SessionStore::new();
    assert_eq!(store.snapshot().ai_contexts.len(), 2);
    assert_eq!(
        store.snapshot().selected_context_id.as_deref(),
        Some("sample-1")
    );

    store.remove_context("sample-1");

    let session = store.snapshot();
    assert_eq!(session.ai_contexts.len(), 1);
    assert_eq!(session.selected_context_id, None);
}

#[test]
fn schedule_selection_is_last_write_wins() {
    let mut store = SessionStore::new();
    store.select_schedule("Standard Tickets", "similar-tickets");
    store.select_schedule("Standard Tickets", "merge-suggestions");

    let session = store.snapshot();
    assert_eq!(session.selected_schedules.len(), 1);
    assert_eq!(
        session
            .selected_schedules
            .get("Standard Tickets")
            .map(String::as_str),
        Some("merge-suggestions")
    );
}

#[test]
fn step_never_leaves_range() {
    let mut store = SessionStore::new();
    for _ in 0..3 {
        store.retreat();
    }
    assert_eq!(store.current_step(), WizardStep::Welcome);

    for _ in 0..20 {
        store.advance();
    }
    assert_eq!(store.current_step(), WizardStep::Complete);

    store.retreat();
    store.jump_to(99);
    assert_eq!(store.current_step(), WizardStep::Complete);
}

#[test]
fn unknown_selection_is_rejected() {
    let mut store = SessionStore::new();
    let err = store.set_selected_context("missing").unwrap_err();
    assert_eq!(err, SessionError::UnknownContext("missing".to_string()));
    assert_eq!(
        store.snapshot().selected_context_id.as_deref(),
        Some("sample-1")
    );
}

#[test]
fn subscribers_see_every_mutation() {
    let mut store = SessionStore::new();
    let mut rx = store.subscribe();
    assert!(!rx.has_changed().unwrap());

    store.toggle_random_config("auto-assist-field");
    assert!(rx.has_changed().unwrap());
    assert!(rx.borrow_and_update().is_config_enabled("auto-assist-field"));

    store.toggle_random_config("auto-assist-field");
    assert!(!rx.borrow_and_update().is_config_enabled("auto-assist-field"));
}

#[test]
fn summary_json_uses_camel_case_and_hides_token() {
    let mut store = SessionStore::new();
    store.set_auth_config(AuthConfig::new(
        "demo-studio-sandbox",
        "admin@acme.io",
        "super-secret",
    ));
    store.jump_to(6);

    let json = serde_json::to_value(store.snapshot().as_ref()).unwrap();
    assert_eq!(json["currentStep"], 6);
    assert_eq!(json["selectedContextId"], "sample-1");
    assert_eq!(json["aiContexts"].as_array().map(Vec::len), Some(2));
    assert_eq!(json["authConfig"]["email"], "admin@acme.io");
    assert!(!json.to_string().contains("super-secret"));
}

// ─── Generation Scenarios ────────────────────────────────────────────────────

#[tokio::test(start_paused = true)]
async fn known_company_after_delay() {
    let generator = ContextGenerator::new(Duration::from_millis(1500));
    let mut store = SessionStore::new();
    let existing = store.snapshot().ai_contexts.clone();

    let started = tokio::time::Instant::now();
    let context = generator
        .generate("grubhub.com", &existing, &CancellationToken::new())
        .await
        .unwrap();
    assert!(started.elapsed() >= Duration::from_millis(1500));
    assert_eq!(context.name, "Grubhub");

    store.add_context(context);
    assert_eq!(store.snapshot().ai_contexts.len(), 3);
}

#[tokio::test(start_paused = true)]
async fn unknown_domain_gets_generic_context() {
    let generator = ContextGenerator::new(Duration::from_millis(1500));
    let context = generator
        .generate("example.io", &[], &CancellationToken::new())
        .await
        .unwrap();
    assert_eq!(context.name, "Example");
    assert_eq!(
        context.description.as_deref(),
        Some("Business context generated from example.io")
    );
}

#[tokio::test(start_paused = true)]
async fn cancelled_generation_yields_nothing() {
    let generator = ContextGenerator::new(Duration::from_millis(1500));
    let token = CancellationToken::new();
    let cancel = token.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(500)).await;
        cancel.cancel();
    });

    assert!(generator.generate("uber.com", &[], &token).await.is_none());
}
