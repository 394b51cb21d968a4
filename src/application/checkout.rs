use crate::application::registry::ProviderRegistry;
use crate::domain::amount::Amount;
use crate::domain::provider::ProviderKey;
use crate::error::Result;
use crate::interfaces::console::input_reader::InputReader;
use std::io::{BufRead, Write};

/// Drives a single payment from user input to the provider's processor.
pub struct Checkout<'a> {
    registry: &'a ProviderRegistry,
}

impl<'a> Checkout<'a> {
    pub fn new(registry: &'a ProviderRegistry) -> Self {
        Self { registry }
    }

    /// Prompts for the provider and the amount, then makes the payment.
    pub fn run<R: BufRead, W: Write>(&self, input: R, output: W) -> Result<()> {
        self.run_with(None, None, input, output)
    }

    /// Like [`run`](Self::run), but only prompts for the values not already
    /// supplied.
    pub fn run_with<R: BufRead, W: Write>(
        &self,
        provider: Option<ProviderKey>,
        amount: Option<Amount>,
        input: R,
        mut output: W,
    ) -> Result<()> {
        let mut reader = InputReader::new(input, &mut output, self.registry);
        let provider = match provider {
            Some(provider) => provider,
            None => reader.read_provider()?,
        };
        let amount = match amount {
            Some(amount) => amount,
            None => reader.read_amount()?,
        };
        drop(reader);

        self.pay(&provider, amount, &mut output)?;
        output.flush()?;
        Ok(())
    }

    /// Resolves `provider`, builds its service and makes the payment.
    pub fn pay(&self, provider: &ProviderKey, amount: Amount, out: &mut dyn Write) -> Result<()> {
        tracing::debug!(%provider, %amount, "dispatching payment");
        let service = self.registry.create(provider)?;
        service.make_payment(amount, out)
    }
}
