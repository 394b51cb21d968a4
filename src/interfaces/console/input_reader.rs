use crate::application::registry::ProviderRegistry;
use crate::domain::amount::Amount;
use crate::domain::provider::ProviderKey;
use crate::error::{PaymentError, Result};
use std::io::{BufRead, Write};

/// Prompts for payment details on a line-oriented console.
///
/// Invalid answers are silently re-prompted with no retry limit. The only way
/// out without a valid answer is the input stream closing.
pub struct InputReader<'a, R: BufRead, W: Write> {
    input: R,
    output: W,
    registry: &'a ProviderRegistry,
}

impl<'a, R: BufRead, W: Write> InputReader<'a, R, W> {
    /// Creates a reader that prompts on `output` and reads answers from `input`.
    pub fn new(input: R, output: W, registry: &'a ProviderRegistry) -> Self {
        Self {
            input,
            output,
            registry,
        }
    }

    /// Asks for a provider until the answer names a registered one.
    pub fn read_provider(&mut self) -> Result<ProviderKey> {
        let prompt = format!("Use {}? ", self.registry.prompt_list());
        loop {
            let line = self.ask(&prompt, "provider")?;
            match self.registry.parse_provider(&line) {
                Ok(key) => return Ok(key),
                Err(err) => tracing::debug!(%err, "rejected provider input"),
            }
        }
    }

    /// Asks for an amount until the answer parses as a number.
    pub fn read_amount(&mut self) -> Result<Amount> {
        loop {
            let line = self.ask("Enter transaction amount: ", "amount")?;
            match line.parse::<Amount>() {
                Ok(amount) => return Ok(amount),
                Err(err) => tracing::debug!(%err, "rejected amount input"),
            }
        }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    fn ask(&mut self, prompt: &str, what: &'static str) -> Result<String> {
        self.output.write_all(prompt.as_bytes())?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PaymentError::InputClosed(what));
        }
        Ok(line)
    }
}
