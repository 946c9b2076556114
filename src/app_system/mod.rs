//! System orchestration, configuration, startup, and shutdown logic.

pub mod config;
pub mod form_system;
pub mod logging;

pub use config::*;
pub use form_system::*;
pub use logging::*;
