//! Portfolio Advisor
//!
//! Combines market analysis and risk assessment into concrete adjustments,
//! rebalancing moves and a target asset allocation.

use rust_decimal_macros::dec;
use uuid::Uuid;

use advisor_core::AgentHistory;

use super::Agent;
use crate::model::{
    Adjustment, AdjustmentAction, AllocationTarget, AssetClass, MarketAnalysis, Portfolio,
    PortfolioAdvice, RebalancingAction, RiskAssessment,
};

/// Agent that turns analysis into portfolio recommendations
pub struct PortfolioAdvisor {
    history: AgentHistory<PortfolioAdvice>,
}

impl Default for PortfolioAdvisor {
    fn default() -> Self {
        Self::new()
    }
}

impl PortfolioAdvisor {
    pub const NAME: &'static str = "Portfolio Advisor";

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

    /// Produce advice for `portfolio` from upstream analysis and risk results
    pub fn advise_portfolio(
        &mut self,
        portfolio: &Portfolio,
        analysis: &MarketAnalysis,
        risk: &RiskAssessment,
    ) -> PortfolioAdvice {
        let advice = PortfolioAdvice {
            id: Uuid::new_v4(),
            timestamp: self.history.next_timestamp(),
            agent: Self::NAME.into(),
            current_portfolio: portfolio.clone(),
            suggested_adjustments: adjustments(portfolio, analysis),
            rebalancing_actions: rebalancing(portfolio, risk),
            allocation_targets: target_allocation(),
        };

        self.history.push(advice.clone());
        advice
    }
}

impl Agent for PortfolioAdvisor {
    type Record = PortfolioAdvice;

    fn name(&self) -> &str {
        Self::NAME
    }

    fn history(&self) -> &AgentHistory<PortfolioAdvice> {
        &self.history
    }
}

fn adjustments(_portfolio: &Portfolio, _analysis: &MarketAnalysis) -> Vec<Adjustment> {
    vec![
        Adjustment {
            action: AdjustmentAction::Increase,
            symbol: "AAPL".into(),
            percentage: 5,
        },
        Adjustment {
            action: AdjustmentAction::Decrease,
            symbol: "XYZ".into(),
            percentage: 3,
        },
    ]
}

fn rebalancing(_portfolio: &Portfolio, _risk: &RiskAssessment) -> Vec<RebalancingAction> {
    vec![RebalancingAction {
        from: "TECH".into(),
        to: "FINANCE".into(),
        amount: dec!(10000),
    }]
}

/// Target weights; always sum to exactly 1.00
fn target_allocation() -> Vec<AllocationTarget> {
    [
        (AssetClass::Equity, dec!(0.60)),
        (AssetClass::FixedIncome, dec!(0.25)),
        (AssetClass::Cash, dec!(0.10)),
        (AssetClass::Alternatives, dec!(0.05)),
    ]
    .into_iter()
    .map(|(asset_class, weight)| AllocationTarget { asset_class, weight })
    .collect()
}
