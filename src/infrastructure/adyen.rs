use crate::domain::amount::Amount;
use crate::domain::ports::{PaymentProcessor, PaymentProcessorBox, PaymentService};
use crate::error::Result;
use std::io::Write;

/// Adyen needs some provider specific work before the payment goes through.
#[derive(Debug, Default, Clone, Copy)]
pub struct AdyenPaymentProcessor;

impl PaymentProcessor for AdyenPaymentProcessor {
    fn make_payment(&self, amount: Amount, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Did some Adyen specific stuff")?;
        writeln!(out, "Made an Adyen payment of {amount}")?;
        Ok(())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct AdyenPaymentService;

impl AdyenPaymentService {
    pub fn new() -> Self {
        Self
    }
}

impl PaymentService for AdyenPaymentService {
    fn provider(&self) -> &'static str {
        "Adyen"
    }

    fn create_payment_processor(&self) -> PaymentProcessorBox {
        Box::new(AdyenPaymentProcessor)
    }
}
