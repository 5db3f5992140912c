//! Naive PnL accounting over engine fills.
//!
//! State is an explicit `(position, cash)` pair threaded through pure
//! functions. The pair only moves together: a buy aggressor adds `qty` to
//! position and takes `price*qty` out of cash, a sell does the reverse.

use crate::exchange::{Side, Trade};

/// Folds `trades` in the order received into `(position, cash)`. An empty
/// slice returns the inputs unchanged.
pub fn update_pnl(position: f64, cash: f64, trades: &[Trade]) -> (f64, f64) {
    let mut position = position;
    let mut cash = cash;
    for trade in trades {
        match trade.aggressor_side {
            Side::Buy => {
                position += trade.qty;
                cash -= trade.price * trade.qty;
            }
            Side::Sell => {
                position -= trade.qty;
                cash += trade.price * trade.qty;
            }
        }
    }
    (position, cash)
}

/// Values the open position at the latest observed price. Callers must have
/// observed at least one tick before marking.
pub fn mark_to_market(position: f64, cash: f64, last_price: f64) -> f64 {
    cash + position * last_price
}
