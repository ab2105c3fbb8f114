//! Market Data
//!
//! Abstractions and implementations for market data sources.

mod synthetic;

pub use synthetic::{SyntheticMarketData, STOCK_SYMBOLS};

use async_trait::async_trait;

use crate::error::Result;
use crate::model::{HistoricalPoint, MarketData};

/// Days of history returned when no window is given
pub const DEFAULT_HISTORY_DAYS: u32 = 30;

/// Market data source (Strategy pattern)
///
/// Implement this for each upstream feed. The only implementation today
/// fabricates its data locally.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Current market snapshot
    async fn fetch_market_data(&self) -> Result<MarketData>;

    /// Daily history for a symbol, newest first, `days` points long
    async fn fetch_historical_data(&self, symbol: &str, days: u32) -> Result<Vec<HistoricalPoint>>;

    /// Provider name
    fn name(&self) -> &str;
}
