//! Domain types and the payment ports implemented by each provider.

pub mod amount;
pub mod ports;
pub mod provider;
