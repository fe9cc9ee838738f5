//! Seven-step setup wizard
//!
//! The screen keeps only screen-local state (field contents, highlights,
//! busy flags). Session data is read from published snapshots and written
//! through the [`SessionStore`] handed to [`WizardScreen::handle_key`].

use std::collections::HashSet;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{widgets::ListState, Frame};
use tracing::warn;

use crate::catalog::{CLEANUP_SCHEDULES, RANDOM_CONFIGS, SCHEDULES, THEMES};
use crate::config::AccountConfig;
use crate::session::{AuthConfig, Session, SessionStore, WizardStep};
use crate::simulate::{ImportKind, SimulatedOperation};
use crate::ui::TextInput;

pub mod steps;
pub mod types;

pub use types::*;


/// Wizard screen state and key handling
pub struct WizardScreen {
    /// Account subdomain shown (read-only) on the authentication step
    pub(crate) subdomain: String,
    pub(crate) docs_url: String,
    // ─── Authentication ─────────────────────────────────────────────────────
    pub(crate) email: TextInput,
    pub(crate) api_token: TextInput,
    pub(crate) auth_focus: AuthField,
    // ─── AI Context ─────────────────────────────────────────────────────────
    pub(crate) website: TextInput,
    /// A context generation is in flight
    pub generating: bool,
    pub(crate) context_focus: ContextFocus,
    pub(crate) context_list: ListState,
    // ─── Apply Configurations ───────────────────────────────────────────────
    pub(crate) apply_section: ApplySection,
    pub(crate) context_picker: ListState,
    pub(crate) import_list: ListState,
    /// Imports currently in flight
    pub importing: HashSet<ImportKind>,
    pub(crate) theme_list: ListState,
    pub selected_theme: Option<&'static str>,
    // ─── Ticket Schedules ───────────────────────────────────────────────────
    pub(crate) schedule_list: ListState,
    // ─── Cleanup & Random Configs ───────────────────────────────────────────
    pub(crate) cleanup_section: CleanupSection,
    pub(crate) cleanup_list: ListState,
    pub(crate) config_list: ListState,
}

fn first_selected() -> ListState {
    ListState::default().with_selected(Some(0))
}

/// Move a list highlight, wrapping at both ends
fn cycle(state: &mut ListState, len: usize, forward: bool) {
    if len == 0 {
        state.select(None);
        return;
    }
    let i = match state.selected() {
        Some(i) if forward => (i + 1) % len,
        Some(i) => {
            if i == 0 {
                len - 1
            } else {
                (i - 1).min(len - 1)
            }
        }
        None => 0,
    };
    state.select(Some(i));
}

impl WizardScreen {
    pub fn new(account: &AccountConfig) -> Self {
        Self {
            subdomain: account.subdomain.clone(),
            docs_url: account.docs_url.clone(),
            email: TextInput::new("Admin Email", "admin@yourcompany.com"),
            api_token: TextInput::new("API Token", "••••••••••••••••").masked(),
            auth_focus: AuthField::Email,
            website: TextInput::new(
                "Company Website",
                "e.g., grubhub.com, uber.com, netflix.com",
            ),
            generating: false,
            context_focus: ContextFocus::Website,
            context_list: first_selected(),
            apply_section: ApplySection::Context,
            context_picker: first_selected(),
            import_list: first_selected(),
            importing: HashSet::new(),
            theme_list: first_selected(),
            selected_theme: None,
            schedule_list: first_selected(),
            cleanup_section: CleanupSection::Cadence,
            cleanup_list: first_selected(),
            config_list: first_selected(),
        }
    }

    /// Reset screen-local state for `step`, as if the screen were shown for
    /// the first time.
    pub fn enter(&mut self, step: WizardStep, session: &Session) {
        match step {
            WizardStep::Authentication => {
                self.email.clear();
                self.api_token.clear();
                self.auth_focus = AuthField::Email;
            }
            WizardStep::AiContext => {
                self.website.clear();
                self.generating = false;
                self.context_focus = ContextFocus::Website;
                self.context_list = first_selected();
            }
            WizardStep::ApplyConfigs => {
                self.apply_section = ApplySection::Context;
                self.context_picker = ListState::default().with_selected(Some(
                    Self::selected_context_index(session).unwrap_or(0),
                ));
                self.import_list = first_selected();
                self.importing.clear();
                self.theme_list = first_selected();
                self.selected_theme = None;
            }
            WizardStep::TicketSchedules => {
                self.schedule_list = first_selected();
            }
            WizardStep::CleanupConfigs => {
                self.cleanup_section = CleanupSection::Cadence;
                self.cleanup_list = first_selected();
                self.config_list = first_selected();
            }
            WizardStep::Welcome | WizardStep::Complete => {}
        }
    }

    fn selected_context_index(session: &Session) -> Option<usize> {
        let id = session.selected_context_id.as_deref()?;
        session.ai_contexts.iter().position(|c| c.id == id)
    }

    /// Whether `operation` is still running on this screen
    pub fn is_busy(&self, operation: &SimulatedOperation) -> bool {
        match operation {
            SimulatedOperation::GenerateContext { .. } => self.generating,
            SimulatedOperation::Import(kind) => self.importing.contains(kind),
        }
    }

    /// Clear the busy flag of a finished operation
    pub fn finish_operation(&mut self, operation: &SimulatedOperation) {
        match operation {
            SimulatedOperation::GenerateContext { .. } => self.generating = false,
            SimulatedOperation::Import(kind) => {
                self.importing.remove(kind);
            }
        }
    }

    /// Handle a key press for the step the session is on
    pub fn handle_key(&mut self, key: KeyEvent, store: &mut SessionStore) -> WizardAction {
        let session = store.snapshot();
        let step = session.current_step;

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => return WizardAction::Quit,
                KeyCode::Char('r') if !step.is_terminal() => return WizardAction::StartOver,
                KeyCode::Char('s') if !step.is_terminal() => return WizardAction::Skip,
                _ => {}
            }
        }

        match step {
            WizardStep::Welcome => match key.code {
                KeyCode::Enter => WizardAction::Advance,
                KeyCode::Esc => WizardAction::Quit,
                _ => WizardAction::None,
            },
            WizardStep::Authentication => self.handle_auth_key(key, store),
            WizardStep::AiContext => self.handle_context_key(key, store, &session),
            WizardStep::ApplyConfigs => self.handle_apply_key(key, store, &session),
            WizardStep::TicketSchedules => self.handle_schedule_key(key, store, &session),
            WizardStep::CleanupConfigs => self.handle_cleanup_key(key, store, &session),
            WizardStep::Complete => match key.code {
                KeyCode::Enter => WizardAction::Finish,
                KeyCode::Char('q') => WizardAction::Quit,
                _ => WizardAction::None,
            },
        }
    }

    fn handle_auth_key(&mut self, key: KeyEvent, store: &mut SessionStore) -> WizardAction {
        match key.code {
            KeyCode::Esc => WizardAction::Back,
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.auth_focus = self.auth_focus.toggle();
                WizardAction::None
            }
            KeyCode::Enter => {
                store.set_auth_config(AuthConfig::new(
                    self.subdomain.clone(),
                    self.email.value(),
                    self.api_token.value(),
                ));
                WizardAction::Advance
            }
            _ => {
                match self.auth_focus {
                    AuthField::Email => self.email.handle_key(key),
                    AuthField::ApiToken => self.api_token.handle_key(key),
                };
                WizardAction::None
            }
        }
    }

    fn handle_context_key(
        &mut self,
        key: KeyEvent,
        store: &mut SessionStore,
        session: &Session,
    ) -> WizardAction {
        if matches!(key.code, KeyCode::Esc) {
            return WizardAction::Back;
        }
        if matches!(key.code, KeyCode::Tab | KeyCode::BackTab) {
            self.context_focus = match self.context_focus {
                ContextFocus::Website => ContextFocus::List,
                ContextFocus::List => ContextFocus::Website,
            };
            return WizardAction::None;
        }

        match self.context_focus {
            ContextFocus::Website => match key.code {
                KeyCode::Enter => self.start_generation(),
                KeyCode::Down if !session.ai_contexts.is_empty() => {
                    self.context_focus = ContextFocus::List;
                    WizardAction::None
                }
                _ => {
                    self.website.handle_key(key);
                    WizardAction::None
                }
            },
            ContextFocus::List => match key.code {
                KeyCode::Enter => WizardAction::Advance,
                KeyCode::Up | KeyCode::Char('k') => {
                    if self.context_list.selected() == Some(0) {
                        self.context_focus = ContextFocus::Website;
                    } else {
                        cycle(&mut self.context_list, session.ai_contexts.len(), false);
                    }
                    WizardAction::None
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    cycle(&mut self.context_list, session.ai_contexts.len(), true);
                    WizardAction::None
                }
                KeyCode::Char('d') | KeyCode::Delete => {
                    let target = self
                        .context_list
                        .selected()
                        .and_then(|i| session.ai_contexts.get(i));
                    if let Some(context) = target {
                        store.remove_context(&context.id);
                        let remaining = session.ai_contexts.len() - 1;
                        if remaining == 0 {
                            self.context_list.select(None);
                            self.context_focus = ContextFocus::Website;
                        } else if let Some(i) = self.context_list.selected() {
                            self.context_list.select(Some(i.min(remaining - 1)));
                        }
                    }
                    WizardAction::None
                }
                _ => WizardAction::None,
            },
        }
    }

    /// Begin generating a context from the website field
    fn start_generation(&mut self) -> WizardAction {
        if self.website.is_blank() || self.generating {
            return WizardAction::None;
        }
        self.generating = true;
        WizardAction::Launch(SimulatedOperation::GenerateContext {
            website: self.website.value().to_string(),
        })
    }

    fn handle_apply_key(
        &mut self,
        key: KeyEvent,
        store: &mut SessionStore,
        session: &Session,
    ) -> WizardAction {
        match key.code {
            KeyCode::Esc => WizardAction::Back,
            KeyCode::Enter => WizardAction::Advance,
            KeyCode::Tab => {
                self.apply_section = self.apply_section.next();
                WizardAction::None
            }
            KeyCode::Up | KeyCode::Char('k') | KeyCode::Down | KeyCode::Char('j') => {
                let forward = matches!(key.code, KeyCode::Down | KeyCode::Char('j'));
                match self.apply_section {
                    ApplySection::Context => {
                        cycle(&mut self.context_picker, session.ai_contexts.len(), forward);
                        self.select_highlighted_context(store, session);
                    }
                    ApplySection::Imports => {
                        cycle(&mut self.import_list, ImportKind::all().len(), forward);
                    }
                    ApplySection::Themes => cycle(&mut self.theme_list, THEMES.len(), forward),
                }
                WizardAction::None
            }
            KeyCode::Char(' ') => match self.apply_section {
                ApplySection::Context => {
                    self.select_highlighted_context(store, session);
                    WizardAction::None
                }
                ApplySection::Imports => {
                    let kind = self
                        .import_list
                        .selected()
                        .and_then(|i| ImportKind::all().get(i).copied());
                    match kind {
                        Some(kind) if self.importing.insert(kind) => {
                            WizardAction::Launch(SimulatedOperation::Import(kind))
                        }
                        _ => WizardAction::None,
                    }
                }
                ApplySection::Themes => {
                    if let Some(theme) = self.theme_list.selected().and_then(|i| THEMES.get(i)) {
                        self.selected_theme = Some(theme.id);
                    }
                    WizardAction::None
                }
            },
            _ => WizardAction::None,
        }
    }

    fn select_highlighted_context(&mut self, store: &mut SessionStore, session: &Session) {
        let Some(context) = self
            .context_picker
            .selected()
            .and_then(|i| session.ai_contexts.get(i))
        else {
            return;
        };
        if let Err(err) = store.set_selected_context(&context.id) {
            warn!(error = %err, "context selection rejected");
        }
    }

    /// Select the context after the current one, wrapping around
    fn cycle_selected_context(&mut self, store: &mut SessionStore, session: &Session) {
        if session.ai_contexts.is_empty() {
            return;
        }
        let next = Self::selected_context_index(session)
            .map_or(0, |i| (i + 1) % session.ai_contexts.len());
        self.context_picker.select(Some(next));
        self.select_highlighted_context(store, session);
    }

    fn handle_schedule_key(
        &mut self,
        key: KeyEvent,
        store: &mut SessionStore,
        session: &Session,
    ) -> WizardAction {
        match key.code {
            KeyCode::Esc => WizardAction::Back,
            KeyCode::Enter => WizardAction::Advance,
            KeyCode::Up | KeyCode::Char('k') => {
                cycle(&mut self.schedule_list, SCHEDULES.len(), false);
                WizardAction::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                cycle(&mut self.schedule_list, SCHEDULES.len(), true);
                WizardAction::None
            }
            KeyCode::Char(' ') => {
                if let Some(schedule) = self.schedule_list.selected().and_then(|i| SCHEDULES.get(i))
                {
                    store.select_schedule(schedule.category, schedule.id);
                }
                WizardAction::None
            }
            KeyCode::Char('c') => {
                self.cycle_selected_context(store, session);
                WizardAction::None
            }
            _ => WizardAction::None,
        }
    }

    fn handle_cleanup_key(
        &mut self,
        key: KeyEvent,
        store: &mut SessionStore,
        session: &Session,
    ) -> WizardAction {
        match key.code {
            KeyCode::Esc => WizardAction::Back,
            KeyCode::Enter => WizardAction::Advance,
            KeyCode::Tab | KeyCode::BackTab => {
                self.cleanup_section = self.cleanup_section.toggle();
                WizardAction::None
            }
            KeyCode::Up | KeyCode::Char('k') | KeyCode::Down | KeyCode::Char('j') => {
                let forward = matches!(key.code, KeyCode::Down | KeyCode::Char('j'));
                match self.cleanup_section {
                    CleanupSection::Cadence => {
                        cycle(&mut self.cleanup_list, CLEANUP_SCHEDULES.len(), forward);
                    }
                    CleanupSection::Configs => {
                        cycle(&mut self.config_list, RANDOM_CONFIGS.len(), forward);
                    }
                }
                WizardAction::None
            }
            KeyCode::Char(' ') => {
                match self.cleanup_section {
                    CleanupSection::Cadence => {
                        if let Some(option) = self
                            .cleanup_list
                            .selected()
                            .and_then(|i| CLEANUP_SCHEDULES.get(i))
                        {
                            store.set_cleanup_schedule(option.id);
                        }
                    }
                    CleanupSection::Configs => {
                        if let Some(option) =
                            self.config_list.selected().and_then(|i| RANDOM_CONFIGS.get(i))
                        {
                            store.toggle_random_config(option.id);
                        }
                    }
                }
                WizardAction::None
            }
            KeyCode::Char('c') => {
                self.cycle_selected_context(store, session);
                WizardAction::None
            }
            _ => WizardAction::None,
        }
    }

    /// Render the screen for the session's current step
    pub fn render(&mut self, frame: &mut Frame, session: &Session) {
        match session.current_step {
            WizardStep::Welcome => self.render_welcome_step(frame),
            WizardStep::Authentication => self.render_authentication_step(frame),
            WizardStep::AiContext => self.render_ai_context_step(frame, session),
            WizardStep::ApplyConfigs => self.render_apply_configs_step(frame, session),
            WizardStep::TicketSchedules => self.render_ticket_schedules_step(frame, session),
            WizardStep::CleanupConfigs => self.render_cleanup_configs_step(frame, session),
            WizardStep::Complete => self.render_complete_step(frame, session),
        }
    }
}
