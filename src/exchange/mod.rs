//! Wire contract shared with the matching engine.
//!
//! The engine accepts a JSON order on `POST <url>` and answers with a JSON
//! object carrying an optional `trades` array. Anything else in the response
//! is ignored by this client.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Buy,
    Sell,
}

/// The harness only ever sends market orders so the contract carries a
/// single variant, serialized under the engine's `type` key.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    Market,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Order {
    pub id: String,
    pub ts: i64,
    pub symbol: String,
    pub side: Side,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    pub qty: f64,
}

impl Order {
    pub fn market(
        id: impl Into<String>,
        ts: i64,
        symbol: impl Into<String>,
        side: Side,
        qty: f64,
    ) -> Self {
        Self {
            id: id.into(),
            ts,
            symbol: symbol.into(),
            side,
            order_type: OrderType::Market,
            qty,
        }
    }
}

/// One fill reported by the engine. Responses carry more per-trade fields
/// (timestamps, maker/taker ids) but the accounting only needs these three.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Trade {
    pub qty: f64,
    pub price: f64,
    #[serde(rename = "aggressorSide")]
    pub aggressor_side: Side,
}

impl Trade {
    pub fn new(qty: f64, price: f64, aggressor_side: Side) -> Self {
        Self {
            qty,
            price,
            aggressor_side,
        }
    }
}

/// Engine response to an order. A missing or null `trades` field means the
/// order produced no fills.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct OrderResponse {
    #[serde(default)]
    pub trades: Option<Vec<Trade>>,
}

impl OrderResponse {
    pub fn into_trades(self) -> Vec<Trade> {
        self.trades.unwrap_or_default()
    }
}
