//! Step renderers for the wizard
//!
//! Each step is an `impl WizardScreen` block with its own `render_*_step`
//! method. Shared chrome (header, progress gauge, key hints) lives in
//! [`chrome`].

mod ai_context;
mod apply_configs;
mod authentication;
mod chrome;
mod cleanup;
mod complete;
mod schedules;
mod welcome;
