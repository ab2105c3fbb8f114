//! Text Reports
//!
//! Human-readable rendering of portfolios and advice for the terminal.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::model::{Holding, Portfolio, PortfolioAdvice};

/// Format a dollar amount with thousands separators, e.g. `$110,000.00`
pub fn format_usd(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let digits = format!("{:.2}", rounded.abs());
    let (whole, cents) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    format!("{sign}${grouped}.{cents}")
}

/// Holdings, one per line, followed by the total value
pub fn render_portfolio(portfolio: &Portfolio) -> String {
    let mut out = String::new();

    for entry in portfolio.iter() {
        let line = match &entry.holding {
            Holding::Equity { shares, value } => {
                format!("  {}: {} shares @ {}\n", entry.symbol, shares, format_usd(*value))
            }
            Holding::Cash { amount } => format!("  {}: {}\n", entry.symbol, format_usd(*amount)),
        };
        out.push_str(&line);
    }

    out.push_str(&format!(
        "\nTotal Portfolio Value: {}",
        format_usd(portfolio.total_value())
    ));
    out
}

/// Adjustments, rebalancing moves and target allocation
pub fn render_advice(advice: &PortfolioAdvice) -> String {
    let mut out = String::new();

    out.push_str("\nSuggested Adjustments:\n");
    for adjustment in &advice.suggested_adjustments {
        out.push_str(&format!(
            "  - {} {} by {}%\n",
            adjustment.action, adjustment.symbol, adjustment.percentage
        ));
    }

    out.push_str("\nRebalancing Actions:\n");
    for action in &advice.rebalancing_actions {
        out.push_str(&format!(
            "  - Move {} from {} to {}\n",
            format_usd(action.amount),
            action.from,
            action.to
        ));
    }

    out.push_str("\nTarget Asset Allocation:\n");
    for target in &advice.allocation_targets {
        out.push_str(&format!(
            "  - {}: {:.1}%\n",
            target.asset_class,
            target.weight * dec!(100)
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    use crate::model::{
        Adjustment, AdjustmentAction, AllocationTarget, AssetClass, RebalancingAction,
    };

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(dec!(0)), "$0.00");
        assert_eq!(format_usd(dec!(999.5)), "$999.50");
        assert_eq!(format_usd(dec!(1000)), "$1,000.00");
        assert_eq!(format_usd(dec!(110000)), "$110,000.00");
        assert_eq!(format_usd(dec!(1234567.891)), "$1,234,567.89");
        assert_eq!(format_usd(dec!(-2500.4)), "-$2,500.40");
    }

    #[test]
    fn test_render_portfolio() {
        let portfolio = Portfolio::new()
            .with_equity("AAPL", 100, dec!(25000))
            .with_cash(dec!(10000));

        let text = render_portfolio(&portfolio);

        assert_eq!(
            text,
            "  AAPL: 100 shares @ $25,000.00\n  CASH: $10,000.00\n\nTotal Portfolio Value: $35,000.00"
        );
    }

    #[test]
    fn test_render_advice() {
        let advice = PortfolioAdvice {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            agent: "Portfolio Advisor".into(),
            current_portfolio: Portfolio::new(),
            suggested_adjustments: vec![Adjustment {
                action: AdjustmentAction::Increase,
                symbol: "AAPL".into(),
                percentage: 5,
            }],
            rebalancing_actions: vec![RebalancingAction {
                from: "TECH".into(),
                to: "FINANCE".into(),
                amount: dec!(10000),
            }],
            allocation_targets: vec![
                AllocationTarget { asset_class: AssetClass::Equity, weight: dec!(0.60) },
                AllocationTarget { asset_class: AssetClass::Alternatives, weight: dec!(0.05) },
            ],
        };

        let text = render_advice(&advice);

        assert!(text.contains("  - INCREASE AAPL by 5%\n"));
        assert!(text.contains("  - Move $10,000.00 from TECH to FINANCE\n"));
        assert!(text.contains("  - EQUITY: 60.0%\n"));
        assert!(text.contains("  - ALTERNATIVES: 5.0%\n"));
    }
}
