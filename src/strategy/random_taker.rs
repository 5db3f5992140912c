use rand::rngs::ThreadRng;
use rand::{thread_rng, Rng};
use rand_distr::Uniform;

use crate::exchange::Order;
use crate::input::Tick;
use crate::strategy::Strategy;

/// Coin-flip taker: with probability `p`, sends a market order of constant
/// `qty` in the direction of the tick it was shown.
///
/// The rng is an explicit dependency so runs can be made deterministic by
/// seeding through [with_rng](RandomTaker::with_rng); the strategy itself
/// holds no seed. Order ids count up from `rt_1` per instance.
pub struct RandomTaker<R: Rng> {
    p: f64,
    qty: f64,
    dist: Uniform<f64>,
    rng: R,
    sent: u64,
}

impl RandomTaker<ThreadRng> {
    pub fn new(p: f64, qty: f64) -> Self {
        Self::with_rng(p, qty, thread_rng())
    }
}

impl<R: Rng> RandomTaker<R> {
    pub fn with_rng(p: f64, qty: f64, rng: R) -> Self {
        Self {
            p,
            qty,
            dist: Uniform::new(0.0, 1.0),
            rng,
            sent: 0,
        }
    }
}

impl<R: Rng> Strategy for RandomTaker<R> {
    fn next_order(&mut self, tick: &Tick) -> Option<Order> {
        if self.rng.sample(self.dist) > self.p {
            return None;
        }

        self.sent += 1;
        Some(Order::market(
            format!("rt_{}", self.sent),
            tick.ts,
            tick.symbol.clone(),
            tick.side,
            self.qty,
        ))
    }
}
