//! Symbol and name lookups over a bulk ticker listing

use crate::types::Coin;
use std::collections::HashMap;
use std::sync::Arc;

/// Type alias for a lookup from key to shared coin record
pub type CoinMap = HashMap<String, Arc<Coin>>;

/// Two views over the same set of coins
///
/// `by_symbol` is keyed by ticker symbol as sent upstream, `by_name` by the
/// lower-cased display name. Both maps hold the same `Arc`s, so a coin
/// reached through either key is the same record. Coins with an empty symbol
/// are left out of both.
#[derive(Debug, Clone, Default)]
pub struct CoinIndex {
    by_symbol: CoinMap,
    by_name: CoinMap,
}

impl CoinIndex {
    /// Builds both maps in one pass, in upstream order
    ///
    /// A later coin with the same symbol or name replaces the earlier entry.
    pub fn from_coins(coins: Vec<Coin>) -> Self {
        let mut by_symbol = HashMap::with_capacity(coins.len());
        let mut by_name = HashMap::with_capacity(coins.len());

        for coin in coins {
            if coin.symbol.is_empty() {
                tracing::trace!(id = %coin.id, "Skipping coin with empty symbol");
                continue;
            }
            let coin = Arc::new(coin);
            by_symbol.insert(coin.symbol.clone(), Arc::clone(&coin));
            by_name.insert(coin.name.to_lowercase(), coin);
        }

        Self { by_symbol, by_name }
    }

    /// Looks up a coin by exact symbol
    pub fn get_by_symbol(&self, symbol: &str) -> Option<&Arc<Coin>> {
        self.by_symbol.get(symbol)
    }

    /// Looks up a coin by name, ignoring case
    pub fn get_by_name(&self, name: &str) -> Option<&Arc<Coin>> {
        self.by_name.get(&name.to_lowercase())
    }

    pub fn by_symbol(&self) -> &CoinMap {
        &self.by_symbol
    }

    pub fn by_name(&self) -> &CoinMap {
        &self.by_name
    }

    /// Number of distinct symbols indexed
    pub fn len(&self) -> usize {
        self.by_symbol.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_symbol.is_empty()
    }

    /// Indexed symbols, in no particular order
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.by_symbol.keys().map(String::as_str)
    }

    /// Splits into `(by_symbol, by_name)`
    pub fn into_maps(self) -> (CoinMap, CoinMap) {
        (self.by_symbol, self.by_name)
    }
}
