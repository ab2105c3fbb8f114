//! Domain Models
//!
//! Portfolio, market data and the records each agent produces.
//! Uses `rust_decimal` for all monetary values - never use f64 for money!

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use advisor_core::HistoryRecord;

/// Symbol under which cash is held
pub const CASH_SYMBOL: &str = "CASH";

/// A single holding in a portfolio
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Holding {
    /// Shares of a listed instrument and their total value
    Equity { shares: u32, value: Decimal },

    /// Uninvested cash
    Cash { amount: Decimal },
}

impl Holding {
    /// Dollar value of the holding
    pub fn value(&self) -> Decimal {
        match self {
            Self::Equity { value, .. } => *value,
            Self::Cash { amount } => *amount,
        }
    }
}

/// A symbol and what is held under it
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioEntry {
    pub symbol: String,

    #[serde(flatten)]
    pub holding: Holding,
}

/// An ordered collection of holdings
///
/// Entries keep insertion order and symbols are stored exactly as given.
/// Nothing checks that totals are consistent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Portfolio {
    entries: Vec<PortfolioEntry>,
}

impl Portfolio {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add shares of an instrument
    pub fn with_equity(mut self, symbol: impl Into<String>, shares: u32, value: Decimal) -> Self {
        self.insert(symbol, Holding::Equity { shares, value });
        self
    }

    /// Add a cash balance under `CASH`
    pub fn with_cash(mut self, amount: Decimal) -> Self {
        self.insert(CASH_SYMBOL, Holding::Cash { amount });
        self
    }

    /// Add or replace a holding; a replaced holding keeps its position
    pub fn insert(&mut self, symbol: impl Into<String>, holding: Holding) {
        let symbol = symbol.into();
        match self.entries.iter_mut().find(|e| e.symbol == symbol) {
            Some(entry) => entry.holding = holding,
            None => self.entries.push(PortfolioEntry { symbol, holding }),
        }
    }

    pub fn get(&self, symbol: &str) -> Option<&Holding> {
        self.entries
            .iter()
            .find(|e| e.symbol == symbol)
            .map(|e| &e.holding)
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &PortfolioEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total portfolio value (holdings + cash)
    pub fn total_value(&self) -> Decimal {
        self.entries.iter().map(|e| e.holding.value()).sum()
    }
}

/// A per-symbol quote inside a market snapshot
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StockQuote {
    /// Ticker symbol
    pub symbol: String,

    /// Last price in USD
    pub price: Decimal,

    /// Price change since the previous close
    pub change: Decimal,

    /// Shares traded
    pub volume: u64,

    /// Price-to-earnings ratio
    pub pe_ratio: f64,

    /// Market capitalization in USD
    pub market_cap: Decimal,
}

/// A market snapshot, generated fresh on every fetch
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarketData {
    pub timestamp: DateTime<Utc>,

    /// Broad market index level
    pub market_index: f64,

    /// Index change percentage
    pub market_change: f64,

    /// Quotes in a fixed symbol order
    pub stocks: Vec<StockQuote>,

    /// Total market capitalization in USD
    pub market_cap: Decimal,

    /// Total shares traded
    pub trading_volume: u64,
}

impl MarketData {
    pub fn quote(&self, symbol: &str) -> Option<&StockQuote> {
        self.stocks.iter().find(|q| q.symbol.eq_ignore_ascii_case(symbol))
    }
}

/// One day of synthetic price history
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoricalPoint {
    pub date: DateTime<Utc>,
    pub symbol: String,
    pub price: Decimal,
    pub volume: u64,
}

/// Market direction
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Bullish,
    Bearish,
    Neutral,
}

impl TrendDirection {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bullish => "bullish",
            Self::Bearish => "bearish",
            Self::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trend verdict from the market analyst
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrendAnalysis {
    pub direction: TrendDirection,
    pub strength: f64,
    pub confidence: f64,
}

/// Trading signal
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Signal {
    BuySignal,
    Hold,
    SellSignal,
}

impl Signal {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BuySignal => "BUY_SIGNAL",
            Self::Hold => "HOLD",
            Self::SellSignal => "SELL_SIGNAL",
        }
    }
}

impl std::fmt::Display for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output of the market analyst
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarketAnalysis {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,

    /// Producing agent
    pub agent: String,

    /// Snapshot the analysis was run on
    pub data: MarketData,

    pub trends: TrendAnalysis,
    pub signals: Vec<Signal>,
}

/// Portfolio-level risk metrics (0.0 = none, 1.0 = extreme)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PortfolioRisk {
    pub concentration_risk: f64,
    pub volatility_risk: f64,
    pub liquidity_risk: f64,
    pub overall_risk_score: f64,
}

/// Overall market mood
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketSentiment {
    Bullish,
    Neutral,
    Bearish,
}

/// Market-level risk factors
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarketRisk {
    pub volatility_index: f64,
    pub market_sentiment: MarketSentiment,
    pub systemic_risk: f64,
}

/// Output of the risk assessor
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub agent: String,

    /// Portfolio the assessment was run on
    pub portfolio: Portfolio,

    pub portfolio_risk: PortfolioRisk,
    pub market_risk: MarketRisk,
    pub recommendations: Vec<String>,
}

/// Direction of a suggested position change
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AdjustmentAction {
    Increase,
    Decrease,
}

impl std::fmt::Display for AdjustmentAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Increase => "INCREASE",
            Self::Decrease => "DECREASE",
        })
    }
}

/// A suggested position change
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adjustment {
    pub action: AdjustmentAction,
    pub symbol: String,

    /// Change as a whole percentage of the position
    pub percentage: u32,
}

/// Money to move between sectors
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RebalancingAction {
    pub from: String,
    pub to: String,
    pub amount: Decimal,
}

/// Broad asset class
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetClass {
    Equity,
    FixedIncome,
    Cash,
    Alternatives,
}

impl std::fmt::Display for AssetClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Equity => "EQUITY",
            Self::FixedIncome => "FIXED_INCOME",
            Self::Cash => "CASH",
            Self::Alternatives => "ALTERNATIVES",
        })
    }
}

/// Target weight of an asset class (fraction of 1.0)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationTarget {
    pub asset_class: AssetClass,
    pub weight: Decimal,
}

/// Output of the portfolio advisor
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PortfolioAdvice {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub agent: String,
    pub current_portfolio: Portfolio,
    pub suggested_adjustments: Vec<Adjustment>,
    pub rebalancing_actions: Vec<RebalancingAction>,
    pub allocation_targets: Vec<AllocationTarget>,
}

impl PortfolioAdvice {
    /// Sum of all target weights
    pub fn total_target_weight(&self) -> Decimal {
        self.allocation_targets.iter().map(|t| t.weight).sum()
    }
}

impl HistoryRecord for MarketAnalysis {
    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

impl HistoryRecord for RiskAssessment {
    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

impl HistoryRecord for PortfolioAdvice {
    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}
