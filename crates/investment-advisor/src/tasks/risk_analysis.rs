//! Risk Analysis Task

use advisor_core::AdvisorConfig;

use super::TaskResults;
use crate::agents::{Agent, RiskAssessor};
use crate::data::{MarketDataProvider, SyntheticMarketData};
use crate::error::Result;
use crate::model::{Portfolio, RiskAssessment};

/// Fetches a snapshot and assesses a portfolio against it
pub struct RiskAnalysisTask {
    assessor: RiskAssessor,
    provider: Box<dyn MarketDataProvider>,
}

impl RiskAnalysisTask {
    pub const NAME: &'static str = "Risk Analysis";

    /// Create with its own synthetic data provider
    pub fn new(config: &AdvisorConfig) -> Self {
        Self::with_provider(config, Box::new(SyntheticMarketData::new()))
    }

    /// Create with an explicit data provider
    pub fn with_provider(config: &AdvisorConfig, provider: Box<dyn MarketDataProvider>) -> Self {
        Self {
            assessor: RiskAssessor::with_history_limit(config.history_limit),
            provider,
        }
    }

    pub async fn execute(&mut self, portfolio: &Portfolio) -> Result<RiskAssessment> {
        tracing::info!(task = Self::NAME, holdings = portfolio.len(), "Starting risk analysis");

        let data = self.provider.fetch_market_data().await?;
        let assessment = self.assessor.assess_risk(portfolio, &data);

        tracing::info!(
            task = Self::NAME,
            overall_risk = assessment.portfolio_risk.overall_risk_score,
            "Risk analysis completed"
        );
        Ok(assessment)
    }

    pub fn assessor(&self) -> &RiskAssessor {
        &self.assessor
    }

    pub fn results(&self) -> TaskResults<RiskAssessment> {
        TaskResults {
            task: Self::NAME,
            records: self.assessor.history().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use crate::error::AdvisorError;
    use crate::model::HistoricalPoint;
    use rust_decimal_macros::dec;

    struct OfflineProvider;

    #[async_trait]
    impl MarketDataProvider for OfflineProvider {
        async fn fetch_market_data(&self) -> Result<crate::model::MarketData> {
            Err(AdvisorError::DataSource("feed offline".into()))
        }

        async fn fetch_historical_data(&self, _symbol: &str, _days: u32) -> Result<Vec<HistoricalPoint>> {
            Err(AdvisorError::DataSource("feed offline".into()))
        }

        fn name(&self) -> &str {
            "Offline"
        }
    }

    #[tokio::test]
    async fn test_execute() {
        let config = AdvisorConfig::default();
        let mut task = RiskAnalysisTask::new(&config);
        let portfolio = Portfolio::new().with_equity("MSFT", 50, dec!(20000));

        let assessment = task.execute(&portfolio).await.unwrap();

        assert!((assessment.portfolio_risk.overall_risk_score - 0.42).abs() < f64::EPSILON);
        assert_eq!(assessment.portfolio, portfolio);
        assert_eq!(task.results().records.len(), 1);
    }

    #[tokio::test]
    async fn test_provider_error_propagates() {
        let config = AdvisorConfig::default();
        let mut task = RiskAnalysisTask::with_provider(&config, Box::new(OfflineProvider));

        let err = task.execute(&Portfolio::new()).await.unwrap_err();

        assert!(matches!(err, AdvisorError::DataSource(_)));
        assert_eq!(err.to_string(), "Data source error: feed offline");
        assert!(task.assessor().history().is_empty());
    }
}
