//! End-to-end workflow tests through the public API.

use advisor_core::AdvisorConfig;
use investment_advisor::report::{render_advice, render_portfolio};
use investment_advisor::{
    sample_portfolio, Agent, MarketDataProvider, PortfolioTask, SyntheticMarketData,
};
use rust_decimal_macros::dec;

#[tokio::test]
async fn sample_portfolio_advice_report() {
    let config = AdvisorConfig::default();
    let portfolio = sample_portfolio();
    let mut task = PortfolioTask::new(&config);

    let advice = task.execute(&portfolio).await.unwrap();

    let holdings = render_portfolio(&portfolio);
    assert!(holdings.contains("  AAPL: 100 shares @ $25,000.00"));
    assert!(holdings.ends_with("Total Portfolio Value: $110,000.00"));

    let report = render_advice(&advice);
    assert!(report.contains("INCREASE AAPL by 5%"));
    assert!(report.contains("DECREASE XYZ by 3%"));
    assert!(report.contains("Move $10,000.00 from TECH to FINANCE"));
    assert!(report.contains("FIXED_INCOME: 25.0%"));
    assert_eq!(advice.total_target_weight(), dec!(1.00));
}

#[tokio::test]
async fn repeated_runs_accumulate_history() {
    let config = AdvisorConfig::default();
    let portfolio = sample_portfolio();
    let mut task = PortfolioTask::new(&config);

    for _ in 0..3 {
        task.execute(&portfolio).await.unwrap();
    }

    let records = task.results().records;
    assert_eq!(records.len(), 3);
    assert!(records.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
    assert_eq!(task.market_task().analyst().history().len(), 3);
    assert_eq!(task.risk_task().assessor().history().len(), 3);
}

#[tokio::test]
async fn historical_data_for_five_days() {
    let provider = SyntheticMarketData::new();
    let history = provider.fetch_historical_data("AAPL", 5).await.unwrap();

    assert_eq!(history.len(), 5);
    let newest = history[0].date;
    let offsets: Vec<i64> = history.iter().map(|p| (newest - p.date).num_days()).collect();
    assert_eq!(offsets, vec![0, 1, 2, 3, 4]);
    assert!(history.iter().all(|p| p.symbol == "AAPL"));
}
