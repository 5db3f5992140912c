//! The driver loop tying input, strategy, client and accounting together.
//!
//! Fully sequential: ticks are replayed in load order, orders go out one at
//! a time, and any data or transport failure aborts the run immediately with
//! no partial report.

use anyhow::Result;
use log::{debug, info};
use std::time::{Duration, Instant};

use crate::client::EngineClient;
use crate::input::TickSource;
use crate::perf::{mark_to_market, update_pnl};
use crate::strategy::Strategy;

#[derive(Clone, Debug)]
pub struct BacktestResult {
    pub position: f64,
    pub cash: f64,
    /// One mark-to-market value per order sent, in send order.
    pub equity_curve: Vec<f64>,
    pub elapsed: Duration,
}

impl BacktestResult {
    pub fn final_equity(&self) -> f64 {
        self.equity_curve.last().copied().unwrap_or(0.0)
    }

    pub fn orders_sent(&self) -> usize {
        self.equity_curve.len()
    }
}

/// Replays `source` through `strategy`, sending every produced order to the
/// engine and folding reported fills into position and cash. Equity is
/// marked at the price of the tick that triggered the order.
pub fn run_backtest(
    source: &TickSource,
    strategy: &mut dyn Strategy,
    client: &mut dyn EngineClient,
) -> Result<BacktestResult> {
    let start = Instant::now();

    let mut position = 0.0;
    let mut cash = 0.0;
    let mut equity_curve: Vec<f64> = Vec::new();

    for row in source.iter() {
        let tick = row?;

        let Some(order) = strategy.next_order(&tick) else {
            continue;
        };

        info!(
            "HARNESS: Sending order {} {:?} {} {} at ts {}",
            order.id, order.side, order.qty, order.symbol, order.ts
        );
        let response = client.send_order(&order)?;

        // a missing trades field reads as zero fills; whether the engine
        // means "no fill" or dropped the field is left to the engine
        if response.trades.is_none() {
            debug!("HARNESS: Order {} response carried no trades field", order.id);
        }
        let trades = response.into_trades();
        info!("HARNESS: Order {} produced {} fills", order.id, trades.len());

        (position, cash) = update_pnl(position, cash, &trades);
        equity_curve.push(mark_to_market(position, cash, tick.price));
    }

    Ok(BacktestResult {
        position,
        cash,
        equity_curve,
        elapsed: start.elapsed(),
    })
}
