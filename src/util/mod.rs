//! System utilities: terminal device, interrupt signals, privilege checks.

pub mod privilege;
pub mod signal;
pub mod terminal;
