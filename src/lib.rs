//! # What is tickback?
//!
//! Tickback is a minimal backtest harness. It replays a file of historical
//! ticks in time order, occasionally emits a synthetic market order, sends
//! the order to a remote matching engine over HTTP, and accumulates a naive
//! position/cash/equity trace from the trades the engine reports back.
//!
//! The harness is deliberately small and fully sequential: one thread, one
//! in-flight request at most, and every failure is fatal. There is no retry,
//! no persistence and no order-book modelling on this side of the wire. The
//! engine is an external collaborator and only its request/response contract
//! is implemented here, in [exchange](crate::exchange).
//!
//! # Implementation
//!
//! A run is composed of:
//! - An input, [TickSource](crate::input::TickSource), which loads a
//!   delimited tick file and produces [Tick](crate::input::Tick) records
//!   sorted ascending by timestamp.
//! - A strategy implementing [Strategy](crate::strategy::Strategy), which
//!   maps one tick to at most one order.
//!   [RandomTaker](crate::strategy::random_taker::RandomTaker) is the
//!   shipped implementation.
//! - A client implementing [EngineClient](crate::client::EngineClient),
//!   which owns the HTTP round trip to the engine.
//! - The [backtest](crate::backtest) driver, which threads position and
//!   cash through the [perf](crate::perf) fold and appends one
//!   mark-to-market equity value per order sent.
//!
//! ``
//! ENGINE_URL=http://localhost:8080/order cargo run --bin backtest
//! ``

pub mod backtest;
pub mod client;
pub mod exchange;
pub mod input;
pub mod perf;
pub mod strategy;
