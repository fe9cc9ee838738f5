//! Wizard application: owns the session store, the screen and the
//! simulated-operation scopes, and runs the terminal event loop.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context as _, Result};
use chrono::Utc;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use tokio::sync::{mpsc, watch};
use tracing::{debug, info};

use crate::config::Config;
use crate::generator::ContextGenerator;
use crate::session::{Session, SessionStore, WizardStep};
use crate::simulate::{SimulatedOperation, SimulationEvent, Simulator};
use crate::ui::{TerminalGuard, WizardAction, WizardScreen};

/// How the wizard ended
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Finished from the completion step with this session
    Finished(Arc<Session>),
    /// Left early
    Quit,
}

pub struct App {
    config: Config,
    store: SessionStore,
    session_rx: watch::Receiver<Arc<Session>>,
    screen: WizardScreen,
    simulator: Simulator,
    events_rx: mpsc::UnboundedReceiver<SimulationEvent>,
    generator: ContextGenerator,
    outcome: Option<Outcome>,
}

impl App {
    pub fn new(config: Config) -> Self {
        let store = SessionStore::new();
        let session_rx = store.subscribe();
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let simulator = Simulator::new(
            config.simulation.clone(),
            events_tx,
            store.current_step(),
        );
        let generator =
            ContextGenerator::new(Duration::from_millis(config.simulation.generate_context_ms));
        let screen = WizardScreen::new(&config.account);

        Self {
            config,
            store,
            session_rx,
            screen,
            simulator,
            events_rx,
            generator,
            outcome: None,
        }
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    pub fn screen(&self) -> &WizardScreen {
        &self.screen
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    /// Run the wizard in the terminal until the user finishes or quits
    pub async fn run(&mut self) -> Result<Outcome> {
        let mut terminal = TerminalGuard::new()?;
        let tick_rate = Duration::from_millis(self.config.ui.refresh_rate_ms);
        info!("wizard started");

        while self.outcome.is_none() {
            let session = Arc::clone(&self.session_rx.borrow_and_update());
            terminal
                .draw(|f| self.screen.render(f, &session))
                .context("Failed to draw wizard")?;

            if event::poll(tick_rate).context("Failed to poll terminal events")? {
                if let Event::Key(key) = event::read().context("Failed to read terminal event")? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key);
                    }
                }
            }

            self.drain_simulation_events();
        }

        self.simulator.cancel_all();
        terminal.restore();

        let outcome = self.outcome.clone().unwrap_or(Outcome::Quit);
        info!(finished = matches!(outcome, Outcome::Finished(_)), "wizard closed");
        Ok(outcome)
    }

    /// Route a key press through the screen and apply the resulting action
    pub fn handle_key(&mut self, key: KeyEvent) {
        let action = self.screen.handle_key(key, &mut self.store);
        self.apply(action);
    }

    fn apply(&mut self, action: WizardAction) {
        match action {
            WizardAction::None => {}
            WizardAction::Advance => {
                self.store.advance();
                self.on_step_changed();
            }
            WizardAction::Back => {
                self.store.retreat();
                self.on_step_changed();
            }
            WizardAction::Skip => {
                info!("tour skipped");
                self.store.jump_to(WizardStep::Complete.index());
                self.on_step_changed();
            }
            WizardAction::StartOver => {
                info!("starting over");
                self.store.reset();
                self.on_step_changed();
            }
            WizardAction::Finish => {
                self.simulator.cancel_all();
                self.outcome = Some(Outcome::Finished(self.store.snapshot()));
            }
            WizardAction::Quit => {
                self.simulator.cancel_all();
                self.outcome = Some(Outcome::Quit);
            }
            WizardAction::Launch(operation) => {
                self.simulator.spawn(operation);
            }
        }
    }

    /// Every transition, including re-entering the same step, closes the
    /// old screen scope and resets the screen.
    fn on_step_changed(&mut self) {
        let session = self.store.snapshot();
        self.simulator.enter(session.current_step);
        self.screen.enter(session.current_step, &session);
        debug!(step = session.current_step.index(), "step changed");
    }

    /// Apply every simulation event received so far
    pub fn drain_simulation_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.handle_simulation_event(event);
        }
    }

    /// Wait for the next simulation event and apply it
    pub async fn next_simulation_event(&mut self) -> Option<SimulationEvent> {
        let event = self.events_rx.recv().await?;
        self.handle_simulation_event(event.clone());
        Some(event)
    }

    fn handle_simulation_event(&mut self, event: SimulationEvent) {
        if !self.simulator.is_live(&event) {
            debug!(
                operation = event.operation.name(),
                scope = event.scope,
                "stale simulation event dropped"
            );
            return;
        }

        if let SimulatedOperation::GenerateContext { website } = &event.operation {
            let session = self.store.snapshot();
            let context = self
                .generator
                .build_context(website, &session.ai_contexts, Utc::now());
            self.store.add_context(context);
        }
        self.screen.finish_operation(&event.operation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    fn app_on(step: WizardStep) -> App {
        let mut app = App::new(Config::default());
        app.store.jump_to(step.index());
        app.on_step_changed();
        app
    }

    #[test]
    fn test_enter_on_blank_website_stays_put() {
        let mut app = app_on(WizardStep::Welcome);
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.store().current_step(), WizardStep::AiContext);

        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.store().current_step(), WizardStep::AiContext);

        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.store().current_step(), WizardStep::ApplyConfigs);
    }

    #[tokio::test(start_paused = true)]
    async fn test_leaving_apply_step_cancels_imports() {
        let mut app = app_on(WizardStep::ApplyConfigs);
        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Char(' ')));
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.store().current_step(), WizardStep::TicketSchedules);

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(app.events_rx.try_recv().is_err());
    }

    #[test]
    fn test_skip_then_finish() {
        let mut app = app_on(WizardStep::Authentication);
        app.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));
        assert_eq!(app.store().current_step(), WizardStep::Complete);

        app.handle_key(key(KeyCode::Enter));
        match app.outcome() {
            Some(Outcome::Finished(session)) => {
                assert_eq!(session.current_step, WizardStep::Complete)
            }
            other => panic!("unexpected outcome {other:?}"),
        }
    }

    #[test]
    fn test_start_over_resets_session() {
        let mut app = app_on(WizardStep::Authentication);
        type_text(&mut app, "a@b.c");
        app.handle_key(key(KeyCode::Enter));
        assert!(app.store().snapshot().auth_config.is_some());

        app.handle_key(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL));
        let session = app.store().snapshot();
        assert_eq!(*session, Session::initial());
    }

    #[test]
    fn test_welcome_escape_quits() {
        let mut app = app_on(WizardStep::Welcome);
        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.outcome(), Some(&Outcome::Quit));
    }

    #[tokio::test(start_paused = true)]
    async fn test_generated_context_is_appended() {
        let mut app = app_on(WizardStep::Welcome);
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Enter));
        type_text(&mut app, "https://www.Grubhub.com/menu");
        app.handle_key(key(KeyCode::Enter));
        assert!(app.screen().generating);

        let event = app.next_simulation_event().await.unwrap();
        assert_eq!(event.step, WizardStep::AiContext);

        let session = app.store().snapshot();
        assert_eq!(session.ai_contexts.len(), 3);
        let added = &session.ai_contexts[2];
        assert_eq!(added.name, "Grubhub");
        assert_eq!(added.website.as_deref(), Some("https://www.Grubhub.com/menu"));
        assert!(!app.screen().generating);
    }

    #[tokio::test(start_paused = true)]
    async fn test_generated_context_keeps_website_as_typed() {
        let mut app = app_on(WizardStep::AiContext);
        type_text(&mut app, "  uber.com ");
        app.handle_key(key(KeyCode::Enter));
        app.next_simulation_event().await.unwrap();

        let session = app.store().snapshot();
        let added = &session.ai_contexts[2];
        assert_eq!(added.website.as_deref(), Some("  uber.com "));
        assert_eq!(added.name, "Uber");
        assert_eq!(added.domain().as_deref(), Some("uber.com"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_abandoned_generation_never_appends() {
        let mut app = app_on(WizardStep::Welcome);
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Enter));
        type_text(&mut app, "example.io");
        app.handle_key(key(KeyCode::Enter));

        // Leave the screen before the delay elapses
        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.store().current_step(), WizardStep::Authentication);

        tokio::time::sleep(Duration::from_secs(5)).await;
        app.drain_simulation_events();
        assert_eq!(app.store().snapshot().ai_contexts.len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_event_is_dropped() {
        let mut app = app_on(WizardStep::ApplyConfigs);
        let stale = SimulationEvent {
            scope: app.simulator.scope_id() + 100,
            step: WizardStep::AiContext,
            operation: SimulatedOperation::GenerateContext {
                website: "uber.com".to_string(),
            },
        };
        app.handle_simulation_event(stale);
        assert_eq!(app.store().snapshot().ai_contexts.len(), 2);
    }
}
