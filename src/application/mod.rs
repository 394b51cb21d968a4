//! Application layer: provider lookup and payment orchestration.
//!
//! `ProviderRegistry` maps provider keys to service constructors and
//! `Checkout` drives one payment from user input to the provider's processor.

pub mod checkout;
pub mod registry;
