//! Simulated long-running operations scoped to the visible screen
//!
//! Imports and context generation stand in for network calls: each one is a
//! tokio task that sleeps for a configured delay and then reports back over
//! an mpsc channel. Tasks belong to the scope of the screen that started
//! them. Leaving the screen cancels the scope, so an abandoned operation
//! never reports and can never touch the session.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::config::SimulationConfig;
use crate::session::WizardStep;

/// Configuration imports offered on the apply step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImportKind {
    Macros,
    Fields,
    Views,
    Articles,
}

impl ImportKind {
    pub fn all() -> &'static [ImportKind] {
        &[
            ImportKind::Macros,
            ImportKind::Fields,
            ImportKind::Views,
            ImportKind::Articles,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ImportKind::Macros => "Import Macros",
            ImportKind::Fields => "Import Ticket Fields",
            ImportKind::Views => "Import Views",
            ImportKind::Articles => "Import Help Center Articles",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ImportKind::Macros => "Pre-built macros for common support scenarios",
            ImportKind::Fields => "Custom fields for your demo tickets",
            ImportKind::Views => "Pre-configured ticket views",
            ImportKind::Articles => "Sample knowledge base articles",
        }
    }

    /// Fill level of the activity bar shown while busy
    pub fn activity_ratio(&self) -> f64 {
        match self {
            ImportKind::Macros => 2.0 / 3.0,
            ImportKind::Fields => 0.75,
            ImportKind::Views => 0.5,
            ImportKind::Articles => 0.8,
        }
    }
}

/// An operation that completes after a fixed delay and never fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimulatedOperation {
    GenerateContext { website: String },
    Import(ImportKind),
}

impl SimulatedOperation {
    pub fn name(&self) -> &'static str {
        match self {
            SimulatedOperation::GenerateContext { .. } => "generate_context",
            SimulatedOperation::Import(ImportKind::Macros) => "import_macros",
            SimulatedOperation::Import(ImportKind::Fields) => "import_fields",
            SimulatedOperation::Import(ImportKind::Views) => "import_views",
            SimulatedOperation::Import(ImportKind::Articles) => "import_articles",
        }
    }
}

/// Completion report for an operation whose scope was still live
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationEvent {
    pub scope: u64,
    pub step: WizardStep,
    pub operation: SimulatedOperation,
}

struct TaskScope {
    id: u64,
    step: WizardStep,
    token: CancellationToken,
}

impl TaskScope {
    fn new(id: u64, step: WizardStep) -> Self {
        Self {
            id,
            step,
            token: CancellationToken::new(),
        }
    }
}

/// Spawns simulated operations and tracks the scope they belong to
pub struct Simulator {
    config: SimulationConfig,
    tx: mpsc::UnboundedSender<SimulationEvent>,
    scope: TaskScope,
}

impl Simulator {
    /// Create a simulator whose first scope belongs to `step`
    pub fn new(
        config: SimulationConfig,
        tx: mpsc::UnboundedSender<SimulationEvent>,
        step: WizardStep,
    ) -> Self {
        Self {
            config,
            tx,
            scope: TaskScope::new(0, step),
        }
    }

    pub fn delay_for(&self, operation: &SimulatedOperation) -> Duration {
        let ms = match operation {
            SimulatedOperation::GenerateContext { .. } => self.config.generate_context_ms,
            SimulatedOperation::Import(ImportKind::Macros) => self.config.import_macros_ms,
            SimulatedOperation::Import(ImportKind::Fields) => self.config.import_fields_ms,
            SimulatedOperation::Import(ImportKind::Views) => self.config.import_views_ms,
            SimulatedOperation::Import(ImportKind::Articles) => self.config.import_articles_ms,
        };
        Duration::from_millis(ms)
    }

    pub fn scope_id(&self) -> u64 {
        self.scope.id
    }

    /// Cancel everything in the current scope and open a fresh one for `step`
    pub fn enter(&mut self, step: WizardStep) {
        self.scope.token.cancel();
        debug!(
            scope = self.scope.id,
            from = self.scope.step.index(),
            to = step.index(),
            "screen scope closed"
        );
        self.scope = TaskScope::new(self.scope.id + 1, step);
    }

    /// Cancel the current scope without opening a new one
    pub fn cancel_all(&self) {
        self.scope.token.cancel();
    }

    /// Whether `event` came from the current, uncancelled scope
    pub fn is_live(&self, event: &SimulationEvent) -> bool {
        event.scope == self.scope.id && !self.scope.token.is_cancelled()
    }

    /// Start `operation` in the current scope
    pub fn spawn(&self, operation: SimulatedOperation) -> JoinHandle<()> {
        let delay = self.delay_for(&operation);
        let token = self.scope.token.clone();
        let tx = self.tx.clone();
        let event = SimulationEvent {
            scope: self.scope.id,
            step: self.scope.step,
            operation,
        };

        info!(
            operation = event.operation.name(),
            scope = event.scope,
            delay_ms = delay.as_millis() as u64,
            "simulated operation started"
        );

        tokio::spawn(async move {
            tokio::select! {
                () = token.cancelled() => {
                    debug!(operation = event.operation.name(), scope = event.scope, "simulated operation cancelled");
                }
                () = tokio::time::sleep(delay) => {
                    info!(operation = event.operation.name(), scope = event.scope, "simulated operation finished");
                    if tx.send(event).is_err() {
                        debug!("simulation receiver dropped");
                    }
                }
            }
        })
    }
}

impl Drop for Simulator {
    fn drop(&mut self) {
        self.scope.token.cancel();
    }
}
