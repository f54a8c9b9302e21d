/// State management module
///
/// This module handles all application state, including:
/// - Shared data structures (data.rs)
/// - The per-run session holding the last generated code (session.rs)

pub mod data;
pub mod session;
