//! End-to-end walkthroughs of the wizard without a terminal
//!
//! Keys are fed straight into [`App::handle_key`]; simulated operations run
//! on paused tokio time.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use kickstart::app::{App, Outcome};
use kickstart::config::Config;
use kickstart::session::{Session, WizardStep};

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

fn ctrl(app: &mut App, c: char) {
    app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

#[tokio::test(start_paused = true)]
async fn full_walkthrough_produces_summary() {
    let mut app = App::new(Config::default());

    // Welcome
    press(&mut app, KeyCode::Enter);

    // Authentication
    type_text(&mut app, "admin@acme.io");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "token-123");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.store().current_step(), WizardStep::AiContext);

    // AI context: generate one, then continue from the list
    type_text(&mut app, "netflix.com");
    press(&mut app, KeyCode::Enter);
    app.next_simulation_event().await.unwrap();
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.store().current_step(), WizardStep::ApplyConfigs);

    // Apply: pick the new context, run one import to completion
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char(' '));
    app.next_simulation_event().await.unwrap();
    press(&mut app, KeyCode::Enter);

    // Schedules: one in the first category
    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Enter);

    // Cleanup: 30 days, two configs
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.store().current_step(), WizardStep::Complete);

    press(&mut app, KeyCode::Enter);
    let Some(Outcome::Finished(session)) = app.outcome() else {
        panic!("wizard did not finish");
    };

    assert_eq!(session.ai_contexts.len(), 3);
    let selected = session.selected_context().unwrap();
    assert_eq!(selected.name, "Netflix");
    assert_eq!(session.auth_config.as_ref().unwrap().email, "admin@acme.io");
    assert_eq!(session.active_schedule_count(), 1);
    assert_eq!(session.cleanup_schedule.as_deref(), Some("cleanup-30-days"));
    assert_eq!(session.enabled_config_count(), 2);
}

#[tokio::test(start_paused = true)]
async fn skip_during_generation_discards_result() {
    let mut app = App::new(Config::default());
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Enter);

    type_text(&mut app, "tesla.com");
    press(&mut app, KeyCode::Enter);
    ctrl(&mut app, 's');
    assert_eq!(app.store().current_step(), WizardStep::Complete);

    tokio::time::sleep(Duration::from_secs(3)).await;
    app.drain_simulation_events();
    assert_eq!(app.store().snapshot().ai_contexts.len(), 2);
}

#[tokio::test(start_paused = true)]
async fn start_over_restores_initial_session() {
    let mut app = App::new(Config::default());
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char('d'));
    assert_eq!(app.store().snapshot().ai_contexts.len(), 1);

    ctrl(&mut app, 'r');
    assert_eq!(*app.store().snapshot(), Session::initial());
}

#[test]
fn quit_from_any_step() {
    let mut app = App::new(Config::default());
    press(&mut app, KeyCode::Enter);
    ctrl(&mut app, 'c');
    assert_eq!(app.outcome(), Some(&Outcome::Quit));
}
