use crate::domain::amount::Amount;
use crate::domain::ports::{PaymentProcessor, PaymentProcessorBox, PaymentService};
use crate::error::Result;
use std::io::Write;

#[derive(Debug, Default, Clone, Copy)]
pub struct StripePaymentProcessor;

impl PaymentProcessor for StripePaymentProcessor {
    fn make_payment(&self, amount: Amount, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Made a Stripe payment of {amount}")?;
        Ok(())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct StripePaymentService;

impl StripePaymentService {
    pub fn new() -> Self {
        Self
    }
}

impl PaymentService for StripePaymentService {
    fn provider(&self) -> &'static str {
        "Stripe"
    }

    fn create_payment_processor(&self) -> PaymentProcessorBox {
        Box::new(StripePaymentProcessor)
    }
}
