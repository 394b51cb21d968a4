use super::amount::Amount;
use crate::error::Result;
use std::io::Write;

/// Executes a payment against one provider.
pub trait PaymentProcessor {
    fn make_payment(&self, amount: Amount, out: &mut dyn Write) -> Result<()>;
}

/// Prepares a payment and hands it to the processor built by
/// [`create_payment_processor`](PaymentService::create_payment_processor).
pub trait PaymentService {
    /// Human readable provider name.
    fn provider(&self) -> &'static str;

    /// Factory method for this provider's processor.
    fn create_payment_processor(&self) -> PaymentProcessorBox;

    /// Pre-flight check run before every payment.
    fn verify_config(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Verified payment config")?;
        Ok(())
    }

    /// Verifies the config, builds a processor and delegates the payment to it.
    ///
    /// Shared by every service; implementors customise the hooks above instead.
    fn make_payment(&self, amount: Amount, out: &mut dyn Write) -> Result<()> {
        let _span = tracing::debug_span!("make_payment", provider = self.provider()).entered();

        self.verify_config(out)?;
        let processor = self.create_payment_processor();
        processor.make_payment(amount, out)?;

        tracing::info!(provider = self.provider(), %amount, "payment made");
        Ok(())
    }
}

pub type PaymentProcessorBox = Box<dyn PaymentProcessor>;
pub type PaymentServiceBox = Box<dyn PaymentService>;
pub type PaymentServiceFactory = fn() -> PaymentServiceBox;
