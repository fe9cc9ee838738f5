//! Single-writer session store
//!
//! The store owns the [`Session`] aggregate. Every mutation builds a new
//! snapshot and publishes it on a watch channel, so readers always see a
//! complete, immutable session.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::debug;

use super::{AuthConfig, Context, Session, SessionError, WizardStep};

/// Owner of the wizard session. Mutations take `&mut self`; readers hold
/// snapshots or a receiver from [`SessionStore::subscribe`].
pub struct SessionStore {
    tx: watch::Sender<Arc<Session>>,
}

impl SessionStore {
    /// Store seeded with [`Session::initial`]
    pub fn new() -> Self {
        Self::with_session(Session::initial())
    }

    pub fn with_session(session: Session) -> Self {
        let (tx, _rx) = watch::channel(Arc::new(session));
        Self { tx }
    }

    /// Current snapshot
    pub fn snapshot(&self) -> Arc<Session> {
        Arc::clone(&self.tx.borrow())
    }

    /// Receiver notified on every published snapshot
    pub fn subscribe(&self) -> watch::Receiver<Arc<Session>> {
        self.tx.subscribe()
    }

    pub fn current_step(&self) -> WizardStep {
        self.tx.borrow().current_step
    }

    fn publish(&mut self, mutate: impl FnOnce(&mut Session)) {
        let mut next = Session::clone(&self.tx.borrow());
        mutate(&mut next);
        self.tx.send_replace(Arc::new(next));
    }

    /// Replace the credentials wholesale
    pub fn set_auth_config(&mut self, config: AuthConfig) {
        debug!(subdomain = %config.subdomain, email = %config.email, "auth config set");
        self.publish(|s| s.auth_config = Some(config));
    }

    /// Append a context. Id uniqueness is the caller's responsibility.
    pub fn add_context(&mut self, context: Context) {
        debug!(id = %context.id, name = %context.name, "context added");
        self.publish(|s| s.ai_contexts.push(context));
    }

    /// Remove the first context with `id`, clearing the selection if it
    /// pointed at it. Unknown ids leave the session untouched.
    pub fn remove_context(&mut self, id: &str) {
        let Some(index) = self.tx.borrow().ai_contexts.iter().position(|c| c.id == id) else {
            debug!(id, "remove ignored, no such context");
            return;
        };
        debug!(id, "context removed");
        self.publish(|s| {
            s.ai_contexts.remove(index);
            if s.selected_context_id.as_deref() == Some(id) {
                s.selected_context_id = None;
            }
        });
    }

    /// Point the selection at an existing context
    pub fn set_selected_context(&mut self, id: &str) -> Result<(), SessionError> {
        if self.tx.borrow().context(id).is_none() {
            return Err(SessionError::UnknownContext(id.to_string()));
        }
        debug!(id, "context selected");
        self.publish(|s| s.selected_context_id = Some(id.to_string()));
        Ok(())
    }

    /// Choose the schedule for a category, replacing any earlier choice
    pub fn select_schedule(&mut self, category: &str, schedule_id: &str) {
        debug!(category, schedule_id, "schedule selected");
        self.publish(|s| {
            s.selected_schedules
                .insert(category.to_string(), schedule_id.to_string());
        });
    }

    pub fn set_cleanup_schedule(&mut self, schedule_id: &str) {
        debug!(schedule_id, "cleanup schedule set");
        self.publish(|s| s.cleanup_schedule = Some(schedule_id.to_string()));
    }

    /// Flip a configuration flag; absent flags count as off
    pub fn toggle_random_config(&mut self, config_id: &str) {
        self.publish(|s| {
            let flag = s.random_configs.entry(config_id.to_string()).or_insert(false);
            *flag = !*flag;
            debug!(config_id, enabled = *flag, "random config toggled");
        });
    }

    /// Move one step forward, stopping at the terminal step
    pub fn advance(&mut self) {
        self.set_step(self.current_step().next());
    }

    /// Move one step back, stopping at the first step
    pub fn retreat(&mut self) {
        self.set_step(self.current_step().prev());
    }

    /// Jump to `index`; values past the last step land on the terminal step
    pub fn jump_to(&mut self, index: usize) {
        self.set_step(WizardStep::from_index(index));
    }

    fn set_step(&mut self, step: WizardStep) {
        debug!(from = self.current_step().index(), to = step.index(), "step changed");
        self.publish(|s| s.current_step = step);
    }

    /// Discard everything and start from the initial snapshot
    pub fn reset(&mut self) {
        debug!("session reset");
        self.tx.send_replace(Arc::new(Session::initial()));
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
