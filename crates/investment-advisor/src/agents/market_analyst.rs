//! Market Analyst
//!
//! Reads a market snapshot and reports trend direction and trading signals.

use uuid::Uuid;

use advisor_core::AgentHistory;

use super::Agent;
use crate::model::{MarketAnalysis, MarketData, Signal, TrendAnalysis, TrendDirection};

/// Agent that identifies market trends
pub struct MarketAnalyst {
    history: AgentHistory<MarketAnalysis>,
}

impl Default for MarketAnalyst {
    fn default() -> Self {
        Self::new()
    }
}

impl MarketAnalyst {
    pub const NAME: &'static str = "Market Analyst";

    pub fn new() -> Self {
        Self {
            history: AgentHistory::new(),
        }
    }

    /// Create with a custom history capacity
    pub fn with_history_limit(limit: usize) -> Self {
        Self {
            history: AgentHistory::with_capacity(limit),
        }
    }

    /// Analyze a snapshot for trends and signals
    pub fn analyze_market_data(&mut self, data: &MarketData) -> MarketAnalysis {
        let analysis = MarketAnalysis {
            id: Uuid::new_v4(),
            timestamp: self.history.next_timestamp(),
            agent: Self::NAME.into(),
            data: data.clone(),
            trends: identify_trends(data),
            signals: generate_signals(data),
        };

        self.history.push(analysis.clone());
        analysis
    }
}

impl Agent for MarketAnalyst {
    type Record = MarketAnalysis;

    fn name(&self) -> &str {
        Self::NAME
    }

    fn history(&self) -> &AgentHistory<MarketAnalysis> {
        &self.history
    }
}

/// Fixed verdict (simplified - would read price action in production)
fn identify_trends(_data: &MarketData) -> TrendAnalysis {
    TrendAnalysis {
        direction: TrendDirection::Bullish,
        strength: 0.75,
        confidence: 0.82,
    }
}

fn generate_signals(_data: &MarketData) -> Vec<Signal> {
    vec![Signal::BuySignal, Signal::Hold]
}
