//! Demo Studio Kickstart - terminal setup wizard for demo accounts
//!
//! The library exposes the session store, the context generator, the
//! simulated operations and the wizard UI so the binary and the integration
//! tests drive the same code.

pub mod app;
pub mod catalog;
pub mod config;
pub mod generator;
pub mod logging;
pub mod session;
pub mod simulate;
pub mod ui;
