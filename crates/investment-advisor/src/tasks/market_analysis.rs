//! Market Analysis Task

use advisor_core::AdvisorConfig;

use super::TaskResults;
use crate::agents::{Agent, MarketAnalyst};
use crate::data::{MarketDataProvider, SyntheticMarketData};
use crate::error::Result;
use crate::model::MarketAnalysis;

/// Fetches a snapshot and runs the market analyst on it
pub struct MarketAnalysisTask {
    analyst: MarketAnalyst,
    provider: Box<dyn MarketDataProvider>,
}

impl MarketAnalysisTask {
    pub const NAME: &'static str = "Market Analysis";

    /// Create with its own synthetic data provider
    pub fn new(config: &AdvisorConfig) -> Self {
        Self::with_provider(config, Box::new(SyntheticMarketData::new()))
    }

    /// Create with an explicit data provider
    pub fn with_provider(config: &AdvisorConfig, provider: Box<dyn MarketDataProvider>) -> Self {
        Self {
            analyst: MarketAnalyst::with_history_limit(config.history_limit),
            provider,
        }
    }

    pub async fn execute(&mut self) -> Result<MarketAnalysis> {
        tracing::info!(task = Self::NAME, "Starting market analysis");

        let data = self.provider.fetch_market_data().await?;
        tracing::debug!(provider = self.provider.name(), quotes = data.stocks.len(), "Fetched market data");

        let analysis = self.analyst.analyze_market_data(&data);

        tracing::info!(task = Self::NAME, direction = %analysis.trends.direction, "Market analysis completed");
        Ok(analysis)
    }

    pub fn analyst(&self) -> &MarketAnalyst {
        &self.analyst
    }

    pub fn results(&self) -> TaskResults<MarketAnalysis> {
        TaskResults {
            task: Self::NAME,
            records: self.analyst.history().to_vec(),
        }
    }
}
