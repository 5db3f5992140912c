/* A Strategy is the one decision point in the harness: given the tick the
driver is currently replaying, produce at most one order for the engine.

Strategies own whatever state they need (counters, rng) but never talk to
the engine themselves; ownership of a produced order passes to the driver,
which sends it and discards it.
*/

use crate::exchange::Order;
use crate::input::Tick;

pub mod random_taker;

pub trait Strategy {
    fn next_order(&mut self, tick: &Tick) -> Option<Order>;
}
