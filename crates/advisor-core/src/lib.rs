//! # advisor-core
//!
//! Building blocks shared by the advisory agents and the CLI.
//!
//! ## Contents
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                      advisor-core                        │
//! │  ┌───────────────┐  ┌──────────────┐  ┌──────────────┐   │
//! │  │ AdvisorConfig │  │ AgentHistory │  │  CoreError   │   │
//! │  │  (from env)   │  │  (bounded)   │  │ (thiserror)  │   │
//! │  └───────────────┘  └──────────────┘  └──────────────┘   │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Configuration is built once at startup and passed by reference; nothing in
//! this crate holds global state.

pub mod config;
pub mod error;
pub mod history;

pub use config::AdvisorConfig;
pub use error::{CoreError, Result};
pub use history::{AgentHistory, HistoryRecord, DEFAULT_HISTORY_CAPACITY};
