//! Synthetic Market Data
//!
//! For demos and tests. Quotes and history are randomized on every call;
//! index-level figures are fixed.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tokio::sync::{Mutex, RwLock};

use super::MarketDataProvider;
use crate::error::Result;
use crate::model::{HistoricalPoint, MarketData, StockQuote};

/// Symbols quoted in every snapshot, in report order
pub const STOCK_SYMBOLS: [&str; 7] = ["AAPL", "MSFT", "GOOGL", "AMZN", "NVDA", "TSLA", "META"];

const MARKET_INDEX: f64 = 4850.43;
const MARKET_CHANGE: f64 = 0.35;
const TRADING_VOLUME: u64 = 3_200_000_000;

/// Locally generated market data with a plain key/value cache.
///
/// The cache never expires entries; a configured TTL is not applied here.
pub struct SyntheticMarketData {
    rng: Mutex<StdRng>,
    cache: RwLock<HashMap<String, serde_json::Value>>,
}

impl Default for SyntheticMarketData {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntheticMarketData {
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Create with a fixed seed (for reproducible runs)
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            rng: Mutex::new(rng),
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Store a value under `key`, replacing any previous value
    pub async fn cache_data(&self, key: impl Into<String>, value: serde_json::Value) {
        let key = key.into();
        tracing::debug!(key = %key, "Caching market data");
        self.cache.write().await.insert(key, value);
    }

    /// Value stored under `key`, if any
    pub async fn get_cached_data(&self, key: &str) -> Option<serde_json::Value> {
        self.cache.read().await.get(key).cloned()
    }

    /// Number of cached entries
    pub async fn cached_len(&self) -> usize {
        self.cache.read().await.len()
    }
}

#[async_trait]
impl MarketDataProvider for SyntheticMarketData {
    async fn fetch_market_data(&self) -> Result<MarketData> {
        let mut rng = self.rng.lock().await;

        let stocks = STOCK_SYMBOLS
            .iter()
            .map(|symbol| StockQuote {
                symbol: (*symbol).to_string(),
                price: cents(rng.gen_range(5_000..=50_000)),
                change: cents(rng.gen_range(-500..=500)),
                volume: rng.gen_range(1_000_000..=100_000_000),
                pe_ratio: f64::from(rng.gen_range(1_000_u32..=5_000)) / 100.0,
                market_cap: cents(rng.gen_range(10_000_000_000_000..=300_000_000_000_000)),
            })
            .collect();

        Ok(MarketData {
            timestamp: Utc::now(),
            market_index: MARKET_INDEX,
            market_change: MARKET_CHANGE,
            stocks,
            market_cap: dec!(24_000_000_000_000),
            trading_volume: TRADING_VOLUME,
        })
    }

    async fn fetch_historical_data(&self, symbol: &str, days: u32) -> Result<Vec<HistoricalPoint>> {
        let mut rng = self.rng.lock().await;
        let now = Utc::now();
        let base_cents: i64 = rng.gen_range(10_000..=30_000);

        let history = (0..days)
            .map(|offset| HistoricalPoint {
                date: now - Duration::days(i64::from(offset)),
                symbol: symbol.to_string(),
                price: cents(base_cents + rng.gen_range(-1_000..=1_000)),
                volume: rng.gen_range(1_000_000..=100_000_000),
            })
            .collect();

        Ok(history)
    }

    fn name(&self) -> &str {
        "SyntheticMarketData"
    }
}

/// Whole cents to a two-place decimal
fn cents(value: i64) -> Decimal {
    Decimal::new(value, 2)
}
