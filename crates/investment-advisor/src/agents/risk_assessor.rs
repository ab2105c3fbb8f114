//! Risk Assessor
//!
//! Scores portfolio and market risk and suggests mitigations.

use uuid::Uuid;

use advisor_core::AgentHistory;

use super::Agent;
use crate::model::{
    MarketData, MarketRisk, MarketSentiment, Portfolio, PortfolioRisk, RiskAssessment,
};

/// Agent that assesses portfolio and market risk
pub struct RiskAssessor {
    history: AgentHistory<RiskAssessment>,
}

impl Default for RiskAssessor {
    fn default() -> Self {
        Self::new()
    }
}

impl RiskAssessor {
    pub const NAME: &'static str = "Risk Assessor";

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

    /// Assess the risk of holding `portfolio` under current market conditions
    pub fn assess_risk(&mut self, portfolio: &Portfolio, data: &MarketData) -> RiskAssessment {
        let assessment = RiskAssessment {
            id: Uuid::new_v4(),
            timestamp: self.history.next_timestamp(),
            agent: Self::NAME.into(),
            portfolio: portfolio.clone(),
            portfolio_risk: portfolio_risk(portfolio),
            market_risk: market_risk(data),
            recommendations: recommendations(portfolio),
        };

        self.history.push(assessment.clone());
        assessment
    }
}

impl Agent for RiskAssessor {
    type Record = RiskAssessment;

    fn name(&self) -> &str {
        Self::NAME
    }

    fn history(&self) -> &AgentHistory<RiskAssessment> {
        &self.history
    }
}

fn portfolio_risk(_portfolio: &Portfolio) -> PortfolioRisk {
    PortfolioRisk {
        concentration_risk: 0.45,
        volatility_risk: 0.52,
        liquidity_risk: 0.30,
        overall_risk_score: 0.42,
    }
}

fn market_risk(_data: &MarketData) -> MarketRisk {
    MarketRisk {
        volatility_index: 18.5,
        market_sentiment: MarketSentiment::Neutral,
        systemic_risk: 0.35,
    }
}

fn recommendations(_portfolio: &Portfolio) -> Vec<String> {
    vec![
        "Diversify sector exposure".into(),
        "Reduce concentration in top holdings".into(),
    ]
}
