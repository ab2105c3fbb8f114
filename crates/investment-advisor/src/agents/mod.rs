//! Advisory Agents
//!
//! Each agent turns its inputs into one typed record and keeps a bounded
//! history of everything it has produced.

mod market_analyst;
mod portfolio_advisor;
mod risk_assessor;

pub use market_analyst::MarketAnalyst;
pub use portfolio_advisor::PortfolioAdvisor;
pub use risk_assessor::RiskAssessor;

use advisor_core::{AgentHistory, HistoryRecord};

/// Common surface of every advisory agent
pub trait Agent {
    /// Record type this agent produces
    type Record: HistoryRecord + Clone;

    /// Display name stamped on every record
    fn name(&self) -> &str;

    /// Records produced so far, oldest first
    fn history(&self) -> &AgentHistory<Self::Record>;
}
