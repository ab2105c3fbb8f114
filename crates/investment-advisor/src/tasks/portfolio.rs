//! Portfolio Task
//!
//! Top-level workflow: market analysis, then risk analysis, then advice.

use advisor_core::AdvisorConfig;

use super::{MarketAnalysisTask, RiskAnalysisTask, TaskResults};
use crate::agents::{Agent, PortfolioAdvisor};
use crate::error::Result;
use crate::model::{Portfolio, PortfolioAdvice};

/// Runs the full advisory workflow for a portfolio
pub struct PortfolioTask {
    advisor: PortfolioAdvisor,
    market_task: MarketAnalysisTask,
    risk_task: RiskAnalysisTask,
}

impl PortfolioTask {
    pub const NAME: &'static str = "Portfolio Advisory";

    pub fn new(config: &AdvisorConfig) -> Self {
        Self::from_parts(
            config,
            MarketAnalysisTask::new(config),
            RiskAnalysisTask::new(config),
        )
    }

    /// Assemble from pre-built sub-tasks
    pub fn from_parts(
        config: &AdvisorConfig,
        market_task: MarketAnalysisTask,
        risk_task: RiskAnalysisTask,
    ) -> Self {
        Self {
            advisor: PortfolioAdvisor::with_history_limit(config.history_limit),
            market_task,
            risk_task,
        }
    }

    pub async fn execute(&mut self, portfolio: &Portfolio) -> Result<PortfolioAdvice> {
        tracing::info!(task = Self::NAME, "Starting portfolio advisory workflow");

        let analysis = self.market_task.execute().await?;
        let risk = self.risk_task.execute(portfolio).await?;
        let advice = self.advisor.advise_portfolio(portfolio, &analysis, &risk);

        tracing::info!(
            task = Self::NAME,
            adjustments = advice.suggested_adjustments.len(),
            "Portfolio advisory workflow completed"
        );
        Ok(advice)
    }

    pub fn market_task(&self) -> &MarketAnalysisTask {
        &self.market_task
    }

    pub fn risk_task(&self) -> &RiskAnalysisTask {
        &self.risk_task
    }

    pub fn results(&self) -> TaskResults<PortfolioAdvice> {
        TaskResults {
            task: Self::NAME,
            records: self.advisor.history().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::SyntheticMarketData;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_workflow_runs_each_stage_once() {
        let config = AdvisorConfig::default();
        let mut task = PortfolioTask::from_parts(
            &config,
            MarketAnalysisTask::with_provider(&config, Box::new(SyntheticMarketData::with_seed(11))),
            RiskAnalysisTask::with_provider(&config, Box::new(SyntheticMarketData::with_seed(12))),
        );
        let portfolio = Portfolio::new()
            .with_equity("AAPL", 100, dec!(25000))
            .with_cash(dec!(10000));

        let advice = task.execute(&portfolio).await.unwrap();

        assert_eq!(advice.current_portfolio, portfolio);
        assert_eq!(advice.total_target_weight(), dec!(1));
        assert_eq!(task.market_task().analyst().history().len(), 1);
        assert_eq!(task.risk_task().assessor().history().len(), 1);
        assert_eq!(task.results().records.len(), 1);
    }

    #[tokio::test]
    async fn test_history_limit_from_config() {
        let config = AdvisorConfig {
            history_limit: 2,
            ..AdvisorConfig::default()
        };
        let mut task = PortfolioTask::new(&config);
        let portfolio = Portfolio::new().with_cash(dec!(100));

        for _ in 0..4 {
            task.execute(&portfolio).await.unwrap();
        }

        assert_eq!(task.results().records.len(), 2);
        assert_eq!(task.market_task().analyst().history().evicted(), 2);
    }
}
