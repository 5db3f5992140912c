//! Client side of the engine's order endpoint.
//!
//! The driver is written against [EngineClient] so tests can substitute a
//! scripted engine; [HttpClient] is the real implementation.

use derive_more::{Display, Error};
use log::debug;
use std::time::Duration;

use crate::exchange::{Order, OrderResponse};

/// Client-side bound on one order round trip.
pub const ORDER_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Display, Error)]
pub enum TransportError {
    #[display("engine returned status {_0}")]
    ErrorStatus(#[error(not(source))] u16),
    #[display("engine request failed: {_0}")]
    Request(reqwest::Error),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        TransportError::Request(err)
    }
}

pub trait EngineClient {
    fn send_order(&mut self, order: &Order) -> Result<OrderResponse, TransportError>;
}

#[derive(Debug)]
pub struct HttpClient {
    pub url: String,
    pub client: reqwest::blocking::Client,
}

impl HttpClient {
    pub fn new(url: String) -> Self {
        Self {
            url,
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl EngineClient for HttpClient {
    fn send_order(&mut self, order: &Order) -> Result<OrderResponse, TransportError> {
        debug!("CLIENT: POST {} order {}", self.url, order.id);

        let response = self
            .client
            .post(&self.url)
            .timeout(ORDER_TIMEOUT)
            .json(order)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::ErrorStatus(status.as_u16()));
        }

        Ok(response.json::<OrderResponse>()?)
    }
}
