//! Task Orchestrators
//!
//! Each task owns its agents and its own data provider, runs them in a fixed
//! order, and feeds one step's output into the next. Errors propagate
//! unchanged; there is no retry or partial-failure handling.

mod market_analysis;
mod portfolio;
mod risk_analysis;

pub use market_analysis::MarketAnalysisTask;
pub use portfolio::PortfolioTask;
pub use risk_analysis::RiskAnalysisTask;

use serde::Serialize;

use crate::error::Result;

/// Everything a task's agent has produced so far
#[derive(Clone, Debug, Serialize)]
pub struct TaskResults<T> {
    /// Task display name
    pub task: &'static str,

    /// Records, oldest first
    pub records: Vec<T>,
}

impl<T: Serialize> TaskResults<T> {
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
