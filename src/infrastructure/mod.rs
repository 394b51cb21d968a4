//! Concrete payment providers.

pub mod adyen;
pub mod stripe;
