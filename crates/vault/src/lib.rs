//! Alpha Vault command-line front end
//!
//! Loads ledgers and config from disk, runs them through `vault_core`, and
//! renders the resulting evaluation panels as text or JSON.

// ============================================================================
// Commands
// ============================================================================

pub mod app;
pub mod report;

// ============================================================================
// Persistence and support
// ============================================================================

pub mod data;
pub mod logging;
pub mod util;

pub use app::{Cli, Command, OutputFormat, run};
pub use logging::init_logging;
