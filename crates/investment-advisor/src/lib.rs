//! # investment-advisor
//!
//! A multi-step advisory pipeline over synthetic market data: a market
//! analyst, a risk assessor and a portfolio advisor, wired together by task
//! orchestrators.
//!
//! ## Workflow
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  PortfolioTask::execute(portfolio)                           │
//! ├──────────────────────────────────────────────────────────────┤
//! │  1. MarketAnalysisTask  ── fetch snapshot ──► MarketAnalyst  │
//! │  2. RiskAnalysisTask    ── fetch snapshot ──► RiskAssessor   │
//! │  3. PortfolioAdvisor(portfolio, analysis, risk)              │
//! │                                                              │
//! │  ► PortfolioAdvice: adjustments, rebalancing, allocation     │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every stage runs to completion before the next one starts. Each task owns
//! its own data provider, so provider caches are never shared between tasks.

pub mod agents;
pub mod data;
pub mod error;
pub mod model;
pub mod report;
pub mod tasks;

pub use agents::{Agent, MarketAnalyst, PortfolioAdvisor, RiskAssessor};
pub use data::{MarketDataProvider, SyntheticMarketData};
pub use error::{AdvisorError, Result};
pub use model::{
    Holding, MarketAnalysis, MarketData, Portfolio, PortfolioAdvice, RiskAssessment,
};
pub use tasks::{MarketAnalysisTask, PortfolioTask, RiskAnalysisTask, TaskResults};

use rust_decimal_macros::dec;

/// The demonstration portfolio used by the CLI
pub fn sample_portfolio() -> Portfolio {
    Portfolio::new()
        .with_equity("AAPL", 100, dec!(25000))
        .with_equity("MSFT", 50, dec!(20000))
        .with_equity("GOOGL", 30, dec!(28000))
        .with_equity("AMZN", 25, dec!(27000))
        .with_cash(dec!(10000))
}
